//! Output verbosity.

/// Output verbosity mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    /// Also echo each pip command before it runs.
    Verbose,
    /// Show progress and status.
    #[default]
    Normal,
    /// Show only the final outcome.
    Quiet,
}

impl OutputMode {
    /// Check if this mode echoes commands before running them.
    pub fn shows_commands(&self) -> bool {
        matches!(self, Self::Verbose)
    }

    /// Check if this mode shows progress/status messages.
    ///
    /// Success and error lines are shown in every mode.
    pub fn shows_status(&self) -> bool {
        !matches!(self, Self::Quiet)
    }
}
