//! Oracle DATE value.
//!
//! A DATE carries year through second with no fractional part and no
//! time zone. The stub mirrors the constructors and accessors of the
//! native value class; none of them ever yields calendar data.

use crate::environment::Environment;
use crate::error::{Error, Result};
use chrono::NaiveDateTime;

/// Date/time components for constructing a [`Date`].
///
/// Field defaults match the native constructor's default arguments.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateParts {
    /// Year, may be negative (BCE). Default: 1.
    pub year: i32,
    /// Month of year, 1-12. Default: 1.
    pub month: u32,
    /// Day of month, 1-31. Default: 1.
    pub day: u32,
    /// Hour of day, 0-23. Default: 0.
    pub hour: u32,
    /// Minute, 0-59. Default: 0.
    pub minute: u32,
    /// Second, 0-59. Default: 0.
    pub second: u32,
}

impl Default for DateParts {
    fn default() -> Self {
        Self {
            year: 1,
            month: 1,
            day: 1,
            hour: 0,
            minute: 0,
            second: 0,
        }
    }
}

/// Oracle DATE value.
///
/// `Default` yields an inert placeholder so call sites needing a value
/// type-check; every operation on it fails.
#[derive(Debug, Default)]
pub struct Date {
    _private: (),
}

impl Date {
    /// Create an uninitialized date.
    pub fn new() -> Result<Date> {
        Err(Error::unsupported("Date::new"))
    }

    /// Create a date from components within an environment.
    ///
    /// `env` is `None` for the null-environment call shape; defaults for
    /// unspecified components come from `DateParts::default()`.
    pub fn from_parts(_env: Option<&Environment>, _parts: DateParts) -> Result<Date> {
        Err(Error::unsupported("Date::from_parts"))
    }

    /// Decompose into date/time components.
    pub fn parts(&self) -> Result<DateParts> {
        Err(Error::unsupported("Date::parts"))
    }

    /// Render with the session default format.
    pub fn to_text(&self) -> Result<String> {
        Err(Error::unsupported("Date::to_text"))
    }

    /// Render with an explicit format string and NLS parameters.
    pub fn to_text_with(&self, _fmt: &str, _nls_param: &str) -> Result<String> {
        Err(Error::unsupported("Date::to_text_with"))
    }

    /// Overwrite this date with a copy of `source`.
    pub fn try_clone_from(&mut self, _source: &Date) -> Result<()> {
        Err(Error::unsupported("Date::try_clone_from"))
    }

    /// Whether this date is the null value.
    pub fn is_null(&self) -> Result<bool> {
        Err(Error::unsupported("Date::is_null"))
    }

    /// Convert to a chrono `NaiveDateTime`.
    pub fn to_datetime(&self) -> Result<NaiveDateTime> {
        Err(Error::unsupported("Date::to_datetime"))
    }
}
