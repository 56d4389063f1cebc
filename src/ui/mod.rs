//! Terminal output.
//!
//! This module provides:
//! - [`UserInterface`] trait for UI abstraction
//! - [`TerminalUI`] for colored output on a TTY
//! - [`NonInteractiveUI`] for CI, pipes and `--no-color`
//! - [`MockUI`] for capturing output in tests
//!
//! Everything, including error lines, is written to standard output.
//!
//! # Example
//!
//! ```
//! use pipstrap::ui::{create_ui, OutputMode};
//!
//! // Use non-interactive mode for testability
//! let mut ui = create_ui(false, OutputMode::Quiet);
//! ui.message("hidden in quiet mode");
//! ui.success("Setup complete!");
//! ```

pub mod mock;
pub mod non_interactive;
pub mod output;
pub mod terminal;
pub mod theme;

pub use mock::MockUI;
pub use non_interactive::NonInteractiveUI;
pub use output::OutputMode;
pub use terminal::{create_ui, TerminalUI};
pub use theme::{should_use_colors, Theme};

/// Trait for user interface interactions.
///
/// This trait allows mocking the UI in tests.
pub trait UserInterface {
    /// Get the current output mode.
    fn output_mode(&self) -> OutputMode;

    /// Display a progress/status message.
    fn message(&mut self, msg: &str);

    /// Display a success message.
    fn success(&mut self, msg: &str);

    /// Display an error message.
    fn error(&mut self, msg: &str);

    /// Echo a command that is about to run (verbose mode only).
    fn show_command(&mut self, command: &str);

    /// Check if output is going to an interactive terminal.
    fn is_interactive(&self) -> bool;
}
