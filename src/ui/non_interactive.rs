//! Plain UI for CI and piped output.

use super::{OutputMode, UserInterface};

/// UI implementation without colors or terminal control.
///
/// Lines carry the same `✓`/`✗` markers as the terminal UI so logs
/// stay greppable.
pub struct NonInteractiveUI {
    mode: OutputMode,
}

impl NonInteractiveUI {
    /// Create a new non-interactive UI.
    pub fn new(mode: OutputMode) -> Self {
        Self { mode }
    }
}

impl UserInterface for NonInteractiveUI {
    fn output_mode(&self) -> OutputMode {
        self.mode
    }

    fn message(&mut self, msg: &str) {
        if self.mode.shows_status() {
            println!("{}", msg);
        }
    }

    fn success(&mut self, msg: &str) {
        println!("✓ {}", msg);
    }

    fn error(&mut self, msg: &str) {
        println!("✗ {}", msg);
    }

    fn show_command(&mut self, command: &str) {
        if self.mode.shows_commands() {
            println!("$ {}", command);
        }
    }

    fn is_interactive(&self) -> bool {
        false
    }
}
