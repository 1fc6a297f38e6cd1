//! Thrift wire-protocol writers for thriftjson records.
//!
//! [`write_record`] plays the role of a generated struct's `write` method:
//! it walks the record's field specification and drives an
//! [`OutputProtocol`]. [`TJsonProtocolFactory`] and [`TBinaryProtocolFactory`]
//! build protocols over a [`MemoryBuffer`].

mod binary;
mod error;
mod protocol;
mod tjson;
mod transport;
mod writer;

pub use binary::{TBinaryOutputProtocol, TBinaryProtocolFactory};
pub use error::WireError;
pub use protocol::{OutputProtocol, ProtocolFactory};
pub use tjson::{TJsonOutputProtocol, TJsonProtocolFactory};
pub use transport::MemoryBuffer;
pub use writer::{write_record, write_record_to};
