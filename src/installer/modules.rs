//! The list of pip modules to install.

use std::fmt;

/// Modules the Modbus bridge imports at runtime.
pub const DEFAULT_MODULES: [&str; 3] = ["pyModbusTCP", "cbor2", "pyzmq"];

/// Ordered list of pip package names.
///
/// Names are passed to pip untouched; pip is the one that rejects bad
/// names. An empty list is allowed and still produces an install
/// invocation (with no package arguments).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequiredModules(Vec<String>);

impl RequiredModules {
    /// Build a module list, keeping the given order.
    pub fn new<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self(names.into_iter().map(Into::into).collect())
    }

    /// Module names in install order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }
}

impl Default for RequiredModules {
    fn default() -> Self {
        Self::new(DEFAULT_MODULES)
    }
}

impl fmt::Display for RequiredModules {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}]", self.0.join(", "))
    }
}
