//! Error types for sole.
//!
//! All fallible operations in this crate share a single `thiserror`-derived
//! enum.  Note what is *not* here: copying a singleton is rejected by the
//! compiler, never reported at runtime, so no variant exists for it.

use thiserror::Error;

/// The error type returned by fallible singleton operations.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum Error {
    /// A value was already installed in the cell; the new value was dropped.
    #[error("a value is already installed in this singleton")]
    AlreadyInstalled,

    /// The cell was read before any value was installed.
    #[error("no value has been installed in this singleton")]
    NotInstalled,

    /// A fallible initializer reported a failure; the cell stays empty.
    #[error("singleton initialization failed: {0}")]
    Initialization(String),
}

/// Shorthand `Result` type used throughout sole.
///
/// # Example
/// ```
/// use sole::errors::{Error, Result};
///
/// fn read_port(raw: &str) -> Result<u16> {
///     raw.parse()
///         .map_err(|e| Error::Initialization(format!("bad port {raw:?}: {e}")))
/// }
/// assert!(read_port("8080").is_ok());
/// assert!(read_port("eighty").is_err());
/// ```
pub type Result<T, E = Error> = std::result::Result<T, E>;
