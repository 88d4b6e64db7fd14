//! Allocation-free encoding of outgoing GVSP packets.
//!
//! The builders write an OK status, the compact header, and the kind
//! specific payload into a caller-supplied buffer, returning the number of
//! bytes written. Extended headers are never emitted: extended ids are a
//! receive-side accommodation for certain transmitters, and these builders
//! model the transmit side.

use bytes::BufMut;

use crate::error::{GvspError, Result};
use crate::packet::{
    ContentType, PacketType, PayloadType, COMPACT_HEADER_SIZE, CONTENT_TYPE_POS, LEADER_SIZE,
    PACKET_ID_MASK, STATUS_SIZE, TRAILER_SIZE,
};

/// Encoded size of a packet carrying `payload_len` payload bytes behind the
/// compact header.
pub const fn packet_size(payload_len: usize) -> usize {
    STATUS_SIZE + COMPACT_HEADER_SIZE + payload_len
}

fn put_header(buf: &mut &mut [u8], frame_id: u16, packet_id: u32, content_type: ContentType) {
    buf.put_u16(PacketType::Ok.to_wire());
    buf.put_u16(frame_id);
    buf.put_u32(
        (u32::from(content_type.to_wire()) << CONTENT_TYPE_POS) | (packet_id & PACKET_ID_MASK),
    );
}

/// Encode a data leader packet announcing the start of a frame.
///
/// `timestamp` is the frame timestamp in device ticks; it is split into its
/// two 32-bit halves on the wire. The leader advertises the image payload
/// type with zeroed flags. Returns the number of bytes written.
#[allow(clippy::too_many_arguments)]
pub fn encode_leader(
    frame_id: u16,
    packet_id: u32,
    timestamp: u64,
    pixel_format: u32,
    width: u32,
    height: u32,
    x_offset: u32,
    y_offset: u32,
    dst: &mut [u8],
) -> Result<usize> {
    let needed = packet_size(LEADER_SIZE);
    if dst.len() < needed {
        return Err(GvspError::CapacityTooSmall {
            capacity: dst.len(),
            needed,
        });
    }

    let mut buf = &mut dst[..];
    put_header(&mut buf, frame_id, packet_id, ContentType::Leader);
    buf.put_u16(0); // flags
    buf.put_u16(PayloadType::Image.to_wire());
    buf.put_u32((timestamp >> 32) as u32);
    buf.put_u32(timestamp as u32);
    buf.put_u32(pixel_format);
    buf.put_u32(width);
    buf.put_u32(height);
    buf.put_u32(x_offset);
    buf.put_u32(y_offset);

    Ok(needed)
}

/// Encode a data trailer packet closing a frame.
///
/// Returns the number of bytes written.
pub fn encode_trailer(frame_id: u16, packet_id: u32, dst: &mut [u8]) -> Result<usize> {
    let needed = packet_size(TRAILER_SIZE);
    if dst.len() < needed {
        return Err(GvspError::CapacityTooSmall {
            capacity: dst.len(),
            needed,
        });
    }

    let mut buf = &mut dst[..];
    put_header(&mut buf, frame_id, packet_id, ContentType::Trailer);
    buf.put_u32(u32::from(PayloadType::Image.to_wire()));
    buf.put_u32(0); // reserved

    Ok(needed)
}

/// Encode a data block packet carrying a slice of the frame payload.
///
/// The payload is truncated to the destination's capacity after the header;
/// callers detect truncation by comparing the returned size against
/// [`packet_size`]`(data.len())`. Only a destination too small for the
/// header itself is an error.
pub fn encode_data_block(
    frame_id: u16,
    packet_id: u32,
    data: &[u8],
    dst: &mut [u8],
) -> Result<usize> {
    let fixed = packet_size(0);
    if dst.len() < fixed {
        return Err(GvspError::CapacityTooSmall {
            capacity: dst.len(),
            needed: fixed,
        });
    }

    let take = data.len().min(dst.len() - fixed);
    let mut buf = &mut dst[..];
    put_header(&mut buf, frame_id, packet_id, ContentType::DataBlock);
    buf.put_slice(&data[..take]);

    Ok(fixed + take)
}
