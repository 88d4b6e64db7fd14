//! GVSP (GigE Vision Streaming Protocol) packet encoding and decoding.
//!
//! GVSP carries image data from a camera to a host as UDP datagrams. Every
//! packet is framed as:
//! - A 2-byte big-endian status word
//! - A compact (6-byte) or extended (18-byte) header, selected by a flag
//!   bit readable at the same offset under both layouts
//! - A content-type specific payload: leader descriptor, trailer
//!   descriptor, or an opaque slice of frame data
//!
//! Decoding is zero-copy: [`PacketRef`] borrows the received datagram and
//! exposes typed accessors over it. Encoding is allocation-free: the
//! builders write complete packets into caller-supplied buffers. The codec
//! holds no state, so callers decode each datagram independently on
//! whatever thread received it.
//!
//! Transport, frame reassembly, and the GVCP control protocol live above
//! this crate.

pub mod decode;
pub mod diag;
pub mod encode;
pub mod error;
pub mod packet;

pub use decode::{Leader, PacketRef, Trailer};
pub use diag::{packet_debug, packet_to_string};
pub use encode::{encode_data_block, encode_leader, encode_trailer, packet_size};
pub use error::{GvspError, Result};
pub use packet::{
    BufferKind, ContentType, PacketType, PayloadType, COMPACT_HEADER_SIZE, EXTENDED_HEADER_SIZE,
    LEADER_SIZE, STATUS_SIZE, TRAILER_SIZE,
};
