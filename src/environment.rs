//! Environment handle: the process-wide factory for client resources.
//!
//! In the native client, an `Environment` must be created before any
//! other object and torn down last. The stub mirrors the creation and
//! teardown entry points; neither ever produces or accepts a live
//! handle.

use crate::constants::{
    OCI_DEFAULT, OCI_EVENTS, OCI_NO_MUTEX, OCI_NO_UCB, OCI_OBJECT, OCI_SHARED, OCI_THREADED,
    OCI_USE_LDAP,
};
use crate::error::{Error, Result};

/// Environment creation mode.
///
/// Discriminants are the native OCI mode values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[repr(u32)]
pub enum Mode {
    /// Default (blocking, unthreaded) environment.
    #[default]
    Default = OCI_DEFAULT,
    /// Object runtime environment.
    Object = OCI_OBJECT,
    /// Shared data structures between environments.
    Shared = OCI_SHARED,
    /// Suppress user callbacks.
    NoUserCallbacks = OCI_NO_UCB,
    /// Threaded environment with internal mutexing.
    ThreadedMutexed = OCI_THREADED,
    /// Threaded environment, caller handles mutexing.
    ThreadedUnmutexed = OCI_THREADED | OCI_NO_MUTEX,
    /// Subscription event notification.
    Events = OCI_EVENTS,
    /// Connect data resolved through LDAP.
    UseLdap = OCI_USE_LDAP,
}

impl Mode {
    /// The native OCI mode value.
    pub fn raw(self) -> u32 {
        self as u32
    }
}

/// Process-wide client environment handle.
///
/// No handle is ever validly produced: both creation entry points fail,
/// so no code outside this crate can hold an `Environment`.
#[derive(Debug)]
pub struct Environment {
    _private: (),
}

impl Environment {
    /// Create an environment with the default mode.
    pub fn create() -> Result<Environment> {
        Err(Error::unsupported("Environment::create"))
    }

    /// Create an environment with an explicit mode.
    pub fn create_with_mode(_mode: Mode) -> Result<Environment> {
        Err(Error::unsupported("Environment::create_with_mode"))
    }

    /// Tear down an environment.
    ///
    /// Accepts `None` for the null-handle call shape the native client
    /// tolerates.
    pub fn terminate(_env: Option<Environment>) -> Result<()> {
        Err(Error::unsupported("Environment::terminate"))
    }
}
