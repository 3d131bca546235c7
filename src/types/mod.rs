//! Oracle value types mirrored from the native client.

mod date;
mod lob;
mod number;
mod timestamp;

pub use date::{Date, DateParts};
pub use lob::{Clob, LobOpenMode, Stream};
pub use number::Number;
pub use timestamp::Timestamp;
