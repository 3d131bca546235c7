//! Oracle NUMBER value.

use crate::error::{Error, Result};

/// Oracle NUMBER value.
///
/// The native class is convertible to a host integer; the stub mirrors
/// that as a fallible conversion. `Default` yields an inert placeholder
/// so call sites needing a value type-check.
#[derive(Debug, Default)]
pub struct Number {
    _private: (),
}

impl Number {
    /// Convert to an unsigned host integer.
    pub fn to_u64(&self) -> Result<u64> {
        Err(Error::unsupported("Number::to_u64"))
    }
}

impl TryFrom<&Number> for u64 {
    type Error = Error;

    fn try_from(value: &Number) -> Result<u64> {
        value.to_u64()
    }
}

impl TryFrom<Number> for u64 {
    type Error = Error;

    fn try_from(value: Number) -> Result<u64> {
        value.to_u64()
    }
}
