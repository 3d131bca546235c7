//! OCI constants mirrored from the native client headers.
//!
//! Only the values referenced by the stubbed surface are carried here.

// LOB open modes
pub const OCI_LOB_READONLY: u32 = 1;
pub const OCI_LOB_READWRITE: u32 = 2;
pub const OCI_LOB_WRITEONLY: u32 = 3;
pub const OCI_LOB_APPENDONLY: u32 = 4;
pub const OCI_LOB_FULLOVERWRITE: u32 = 5;
pub const OCI_LOB_FULLREAD: u32 = 6;

// Environment creation modes
pub const OCI_DEFAULT: u32 = 0x0000_0000;
pub const OCI_THREADED: u32 = 0x0000_0001;
pub const OCI_OBJECT: u32 = 0x0000_0002;
pub const OCI_EVENTS: u32 = 0x0000_0004;
pub const OCI_SHARED: u32 = 0x0000_0010;
pub const OCI_NO_UCB: u32 = 0x0000_0040;
pub const OCI_NO_MUTEX: u32 = 0x0000_0080;
pub const OCI_USE_LDAP: u32 = 0x0000_1000;
