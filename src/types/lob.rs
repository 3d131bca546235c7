//! CLOB (Character Large Object) handle.
//!
//! A CLOB is owned by a connection and read or written through a
//! stream obtained from the handle. The stub mirrors the open/close
//! and stream lifecycle without ever establishing one.

use crate::connection::Connection;
use crate::constants::{
    OCI_LOB_APPENDONLY, OCI_LOB_FULLOVERWRITE, OCI_LOB_FULLREAD, OCI_LOB_READONLY,
    OCI_LOB_READWRITE, OCI_LOB_WRITEONLY,
};
use crate::error::{Error, Result};

/// LOB open mode.
///
/// Discriminants are the native OCI values. The default is read-write,
/// matching the native `open` call's default argument.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[repr(u32)]
pub enum LobOpenMode {
    /// Open for reading only.
    ReadOnly = OCI_LOB_READONLY,
    /// Open for reading and writing.
    #[default]
    ReadWrite = OCI_LOB_READWRITE,
    /// Open for writing only.
    WriteOnly = OCI_LOB_WRITEONLY,
    /// Open for appending.
    AppendOnly = OCI_LOB_APPENDONLY,
    /// Open for a full overwrite.
    FullOverwrite = OCI_LOB_FULLOVERWRITE,
    /// Open for a full read.
    FullRead = OCI_LOB_FULLREAD,
}

impl LobOpenMode {
    /// The native OCI mode value.
    pub fn raw(self) -> u32 {
        self as u32
    }
}

/// Placeholder for a LOB read/write stream.
///
/// Returned by [`Clob::stream`]; exists only so the stream lifecycle
/// signatures type-check. It carries no state and has no operations.
#[derive(Debug, Default)]
pub struct Stream;

/// CLOB handle.
///
/// `Default` yields an inert placeholder so call sites needing a value
/// type-check; every operation on it fails.
#[derive(Debug, Default)]
pub struct Clob {
    _private: (),
}

impl Clob {
    /// Create a CLOB handle on a connection.
    pub fn new(_conn: &Connection) -> Result<Clob> {
        Err(Error::unsupported("Clob::new"))
    }

    /// Copy a CLOB handle.
    pub fn try_clone(&self) -> Result<Clob> {
        Err(Error::unsupported("Clob::try_clone"))
    }

    /// Length in characters.
    pub fn length(&self) -> Result<u64> {
        Err(Error::unsupported("Clob::length"))
    }

    /// Make this an empty LOB.
    pub fn set_empty(&mut self) -> Result<()> {
        Err(Error::unsupported("Clob::set_empty"))
    }

    /// Open read-write, the native default mode.
    pub fn open(&mut self) -> Result<()> {
        Err(Error::unsupported("Clob::open"))
    }

    /// Open with an explicit mode.
    pub fn open_with_mode(&mut self, _mode: LobOpenMode) -> Result<()> {
        Err(Error::unsupported("Clob::open_with_mode"))
    }

    /// Close an opened LOB.
    pub fn close(&mut self) -> Result<()> {
        Err(Error::unsupported("Clob::close"))
    }

    /// Obtain a stream over the whole LOB (offset 1, unbounded amount).
    pub fn stream(&mut self) -> Result<Stream> {
        Err(Error::unsupported("Clob::stream"))
    }

    /// Obtain a stream with an explicit 1-based offset and amount.
    pub fn stream_with(&mut self, _offset: u64, _amount: u64) -> Result<Stream> {
        Err(Error::unsupported("Clob::stream_with"))
    }

    /// Release a stream obtained from this LOB.
    pub fn close_stream(&mut self, _stream: Stream) -> Result<()> {
        Err(Error::unsupported("Clob::close_stream"))
    }
}
