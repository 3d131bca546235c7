//! Connection placeholder.

/// Placeholder for a database connection.
///
/// The stub never establishes a connection; this type exists only so
/// that signatures referencing a connection (such as [`Clob::new`])
/// type-check. It carries no state and has no operations.
///
/// [`Clob::new`]: crate::Clob::new
#[derive(Debug, Default)]
pub struct Connection;
