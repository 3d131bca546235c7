//! Fail-closed stub of the Oracle OCCI client surface.
//!
//! Software written against the Oracle client library can be compiled
//! and linked against this crate when the real client is unavailable
//! (absent at build time, excluded for licensing, or deliberately
//! disabled). The declared types and operations match the depended-upon
//! surface; none of them performs real work. Every entry point fails
//! immediately with [`Error::UnsupportedFunction`] naming the call, so
//! a missing native dependency shows up as a clear diagnostic instead
//! of a silent no-op or a crash.
//!
//! # Example
//!
//! ```
//! use oracle_occi_stub::Environment;
//!
//! let err = Environment::create().unwrap_err();
//! assert_eq!(
//!     err.to_string(),
//!     "Unsupported call to Oracle library, function: Environment::create"
//! );
//! ```

pub mod connection;
pub mod constants;
pub mod environment;
pub mod error;
pub mod sql_exception;
pub mod types;

// Re-export main types
pub use connection::Connection;
pub use environment::{Environment, Mode};
pub use error::{Error, Result};
pub use sql_exception::SqlException;
pub use types::{Clob, Date, DateParts, LobOpenMode, Number, Stream, Timestamp};
