//! pipstrap - Prepare a Python environment for the Modbus bridge.
//!
//! pipstrap upgrades pip and then installs the Python modules the bridge
//! imports (`pyModbusTCP`, `cbor2`, `pyzmq`) in one batched pip call.
//!
//! # Modules
//!
//! - [`cli`] - Command-line interface and argument parsing
//! - [`error`] - Error types and result aliases
//! - [`installer`] - The pip upgrade + install sequence
//! - [`shell`] - Child process execution
//! - [`ui`] - Terminal output
//!
//! # Example
//!
//! ```
//! use pipstrap::installer::{Pip, RequiredModules};
//!
//! let invocation = Pip::default().install(&RequiredModules::default());
//! assert_eq!(
//!     invocation.to_string(),
//!     "python -m pip install pyModbusTCP cbor2 pyzmq"
//! );
//! ```

pub mod cli;
pub mod error;
pub mod installer;
pub mod shell;
pub mod ui;

pub use error::{PipstrapError, Result};
