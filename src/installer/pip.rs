//! pip invocations.

use std::fmt;

use super::modules::RequiredModules;

/// Interpreter used when none is configured.
pub const DEFAULT_PYTHON: &str = "python";

/// A single package-manager call: a program and its arguments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    pub program: String,
    pub args: Vec<String>,
}

impl fmt::Display for Invocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.program)?;
        for arg in &self.args {
            write!(f, " {}", arg)?;
        }
        Ok(())
    }
}

/// Drives pip through `<python> -m pip`.
///
/// Running pip as a module guarantees the packages land in the same
/// interpreter that will later import them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pip {
    python: String,
}

impl Pip {
    /// Drive pip through the given interpreter (a name on `PATH` or a path).
    pub fn new(python: impl Into<String>) -> Self {
        Self {
            python: python.into(),
        }
    }

    /// `<python> -m pip install --upgrade pip`
    pub fn upgrade_self(&self) -> Invocation {
        self.pip(["install", "--upgrade", "pip"])
    }

    /// `<python> -m pip install <modules...>` as one batched call.
    pub fn install(&self, modules: &RequiredModules) -> Invocation {
        self.pip(std::iter::once("install").chain(modules.iter()))
    }

    fn pip<'a>(&self, args: impl IntoIterator<Item = &'a str>) -> Invocation {
        Invocation {
            program: self.python.clone(),
            args: ["-m", "pip"]
                .into_iter()
                .chain(args)
                .map(str::to_string)
                .collect(),
        }
    }
}

impl Default for Pip {
    fn default() -> Self {
        Self::new(DEFAULT_PYTHON)
    }
}
