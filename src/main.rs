//! pipstrap CLI entry point.

use std::process::ExitCode;

use clap::Parser;
use pipstrap::cli::{Cli, CommandDispatcher};
use pipstrap::installer::RequiredModules;
use pipstrap::shell::is_ci;
use pipstrap::ui::{create_ui, OutputMode};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Initialize the tracing subscriber for logging.
///
/// Log level is controlled by:
/// 1. `--debug` flag sets level to DEBUG
/// 2. `RUST_LOG` environment variable (if set)
/// 3. Default is INFO
///
/// Logs go to stderr; stdout carries the user-facing status lines.
fn init_tracing(debug: bool) {
    let filter = if debug {
        EnvFilter::new("pipstrap=debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("pipstrap=info"))
    };

    tracing_subscriber::registry()
        .with(
            fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .with(filter)
        .init();
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.debug);

    tracing::debug!("pipstrap starting with args: {:?}", cli);

    let output_mode = if cli.quiet {
        OutputMode::Quiet
    } else if cli.verbose {
        OutputMode::Verbose
    } else {
        OutputMode::Normal
    };

    // Colors only for a human at a terminal
    let interactive = !cli.no_color && !is_ci();
    let mut ui = create_ui(interactive, output_mode);

    let dispatcher = CommandDispatcher::new(RequiredModules::default());

    match dispatcher.dispatch(&cli, ui.as_mut()) {
        Ok(result) => ExitCode::from(result.process_exit_code()),
        Err(e) => {
            ui.error(&format!("Error: {}", e));
            ExitCode::from(1)
        }
    }
}
