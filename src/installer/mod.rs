//! pip module installation.
//!
//! Upgrades pip, then installs every requested module in a single pip
//! call. Either step failing yields one
//! [`InstallationFailure`](PipstrapError::InstallationFailure) carrying
//! the full requested list; nothing here exits the process.
//!
//! # Example
//!
//! ```
//! use pipstrap::installer::{install, InstallOptions, InstallerContext, Pip, RequiredModules};
//! use pipstrap::shell::CommandResult;
//! use pipstrap::ui::MockUI;
//! use std::time::Duration;
//!
//! let ctx = InstallerContext {
//!     run: &|_| Ok(CommandResult::success(String::new(), String::new(), Duration::ZERO)),
//! };
//! let mut ui = MockUI::new();
//! let modules = RequiredModules::default();
//!
//! install(&modules, &Pip::default(), &InstallOptions::default(), &mut ui, &ctx).unwrap();
//! assert!(ui.successes()[0].contains("pyzmq"));
//! ```

pub mod modules;
pub mod pip;

pub use modules::{RequiredModules, DEFAULT_MODULES};
pub use pip::{Invocation, Pip, DEFAULT_PYTHON};

use crate::error::{PipstrapError, Result};
use crate::shell::{self, CommandOptions, CommandResult};
use crate::ui::UserInterface;

/// Mockable dependencies for the installer.
pub struct InstallerContext<'a> {
    /// Run one package-manager invocation to completion.
    pub run: &'a dyn Fn(&Invocation) -> Result<CommandResult>,
}

/// Build the default `InstallerContext` for production use.
///
/// pip inherits stdio so its own progress output stays visible.
pub fn default_context() -> InstallerContext<'static> {
    InstallerContext {
        run: &run_invocation,
    }
}

fn run_invocation(invocation: &Invocation) -> Result<CommandResult> {
    shell::execute(
        &invocation.program,
        &invocation.args,
        &CommandOptions::default(),
    )
}

/// Knobs for a single install run.
#[derive(Debug, Clone, Default)]
pub struct InstallOptions {
    /// Show the pip commands instead of running them.
    pub dry_run: bool,
}

/// Upgrade pip and install `modules` in one batched call.
pub fn install(
    modules: &RequiredModules,
    pip: &Pip,
    options: &InstallOptions,
    ui: &mut dyn UserInterface,
    ctx: &InstallerContext<'_>,
) -> Result<()> {
    ui.message("Installing required pip modules...");

    let steps = [pip.upgrade_self(), pip.install(modules)];
    for invocation in &steps {
        run_step(invocation, options, ui, ctx).map_err(|source| {
            tracing::debug!("installation aborted at '{}'", invocation);
            PipstrapError::InstallationFailure {
                modules: modules.clone(),
                source: Box::new(source),
            }
        })?;
    }

    ui.success(&format!("Successfully installed modules: {}", modules));
    Ok(())
}

fn run_step(
    invocation: &Invocation,
    options: &InstallOptions,
    ui: &mut dyn UserInterface,
    ctx: &InstallerContext<'_>,
) -> Result<()> {
    if options.dry_run {
        ui.message(&format!("Would run: {}", invocation));
        return Ok(());
    }

    tracing::debug!("running '{}'", invocation);
    ui.show_command(&invocation.to_string());
    let result = (ctx.run)(invocation)?;

    if result.success {
        Ok(())
    } else {
        Err(PipstrapError::CommandFailed {
            command: invocation.to_string(),
            code: result.exit_code,
        })
    }
}
