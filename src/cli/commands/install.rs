//! The `pipstrap install` command.

use crate::error::{PipstrapError, Result};
use crate::installer::{
    default_context, install, InstallOptions, InstallerContext, Pip, RequiredModules,
};
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};

/// The install command implementation.
pub struct InstallCommand<'a> {
    modules: RequiredModules,
    pip: Pip,
    options: InstallOptions,
    ctx: InstallerContext<'a>,
}

impl InstallCommand<'static> {
    /// Create a new install command that runs pip for real.
    pub fn new(modules: RequiredModules, pip: Pip, options: InstallOptions) -> Self {
        Self::with_context(modules, pip, options, default_context())
    }
}

impl<'a> InstallCommand<'a> {
    /// Create an install command with custom process execution (for testing).
    pub fn with_context(
        modules: RequiredModules,
        pip: Pip,
        options: InstallOptions,
        ctx: InstallerContext<'a>,
    ) -> Self {
        Self {
            modules,
            pip,
            options,
            ctx,
        }
    }
}

impl Command for InstallCommand<'_> {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        match install(&self.modules, &self.pip, &self.options, ui, &self.ctx) {
            Ok(()) => Ok(CommandResult::success()),
            Err(err @ PipstrapError::InstallationFailure { .. }) => {
                tracing::debug!("{:?}", err);
                ui.error(&err.to_string());
                Ok(CommandResult::failure(1))
            }
            Err(err) => Err(err),
        }
    }
}
