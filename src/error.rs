//! Error types for the OCCI surface stub.

use thiserror::Error;

/// Result type alias for stubbed Oracle operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error type raised by every stubbed Oracle operation.
///
/// The stub has exactly one failure mode: the native client library is
/// not present, so the attempted call cannot be serviced. The payload
/// names the entry point that was invoked so callers can tell which
/// unmet dependency they hit.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// The native Oracle client library is unavailable.
    #[error("Unsupported call to Oracle library, function: {function}")]
    UnsupportedFunction { function: &'static str },
}

impl Error {
    /// Create an unsupported-call error for the named entry point.
    pub fn unsupported(function: &'static str) -> Self {
        Self::UnsupportedFunction { function }
    }

    /// The entry point that raised this error.
    pub fn function(&self) -> &'static str {
        match self {
            Self::UnsupportedFunction { function } => function,
        }
    }
}
