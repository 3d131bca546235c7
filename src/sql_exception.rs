//! SQL exception type mirrored from the native client.
//!
//! The native client reports database errors through an exception type
//! derived from the standard exception base, and consumer code is
//! written to catch either. The stub preserves that relationship by
//! implementing [`std::error::Error`], so existing error-handling paths
//! still accept this type. The accessors themselves are stubbed: an
//! instance never holds a real error code or message, and asking for
//! one fails like every other call.

use crate::error::{Error, Result};
use std::fmt;

/// Database error value as surfaced by the native client.
///
/// `Default` yields an inert placeholder so call sites needing a value
/// type-check; no accessor on it ever succeeds.
#[derive(Debug, Default)]
pub struct SqlException {
    _private: (),
}

impl SqlException {
    /// Copy an exception value.
    pub fn try_clone(&self) -> Result<SqlException> {
        Err(Error::unsupported("SqlException::try_clone"))
    }

    /// The numeric database error code.
    pub fn error_code(&self) -> Result<i32> {
        Err(Error::unsupported("SqlException::error_code"))
    }

    /// The database error message text.
    pub fn message(&self) -> Result<String> {
        Err(Error::unsupported("SqlException::message"))
    }
}

impl fmt::Display for SqlException {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // No code or message is ever populated; render a fixed label.
        f.write_str("Oracle SQL exception (native client unavailable)")
    }
}

impl std::error::Error for SqlException {}
