//! Oracle TIMESTAMP value.
//!
//! Like DATE, but with fractional-second precision. The stub mirrors
//! the accessor surface only; the native class's constructors are not
//! part of the depended-upon contract.

use crate::error::{Error, Result};
use chrono::NaiveDateTime;

/// Oracle TIMESTAMP value.
///
/// `Default` yields an inert placeholder so call sites needing a value
/// type-check; every operation on it fails.
#[derive(Debug, Default)]
pub struct Timestamp {
    _private: (),
}

impl Timestamp {
    /// Render with an explicit format string and fractional-second
    /// precision.
    pub fn to_text(&self, _fmt: &str, _fsprec: u32) -> Result<String> {
        Err(Error::unsupported("Timestamp::to_text"))
    }

    /// Render with an explicit format string, fractional-second
    /// precision, and NLS parameters.
    pub fn to_text_with_nls(&self, _fmt: &str, _fsprec: u32, _nls_param: &str) -> Result<String> {
        Err(Error::unsupported("Timestamp::to_text_with_nls"))
    }

    /// Decompose into (year, month, day).
    pub fn date(&self) -> Result<(i32, u32, u32)> {
        Err(Error::unsupported("Timestamp::date"))
    }

    /// Decompose into (hour, minute, second, fractional seconds).
    pub fn time(&self) -> Result<(u32, u32, u32, u32)> {
        Err(Error::unsupported("Timestamp::time"))
    }

    /// Convert to a chrono `NaiveDateTime`.
    pub fn to_datetime(&self) -> Result<NaiveDateTime> {
        Err(Error::unsupported("Timestamp::to_datetime"))
    }
}
