//! Human-readable packet rendering for stream debugging.

use std::fmt::Write;

use tracing::Level;

use crate::decode::PacketRef;
use crate::packet::{ContentType, PayloadType};

/// Render a decoded packet as multi-line text.
///
/// Best effort: unrecognized enumeration values render as `unknown (0x…)`
/// and descriptor fields are only shown when the payload actually contains
/// them. Never fails.
pub fn packet_to_string(packet: &PacketRef<'_>) -> String {
    let mut out = String::new();

    let packet_type = packet.packet_type();
    let _ = writeln!(
        out,
        "packet_type  = {} (0x{:04x})",
        packet_type.name(),
        packet_type.to_wire()
    );
    let _ = writeln!(
        out,
        "header       = {}",
        if packet.has_extended_ids() {
            "extended"
        } else {
            "compact"
        }
    );
    match packet.content_type() {
        Some(content_type) => {
            let _ = writeln!(out, "content_type = {}", content_type.name());
        }
        None => {
            let _ = writeln!(
                out,
                "content_type = unknown (0x{:02x})",
                packet.content_type_raw()
            );
        }
    }
    let _ = writeln!(out, "frame_id     = {}", packet.frame_id());
    let _ = writeln!(out, "packet_id    = {}", packet.packet_id());
    let _ = writeln!(out, "data_size    = {}", packet.payload_len());

    match packet.content_type() {
        Some(ContentType::Leader) => {
            if let Ok(leader) = packet.leader() {
                let _ = writeln!(
                    out,
                    "payload_type = {}",
                    payload_type_name(u32::from(leader.payload_type))
                );
                let _ = writeln!(out, "pixel_format = 0x{:08x}", leader.pixel_format);
                let _ = writeln!(out, "width        = {}", leader.width);
                let _ = writeln!(out, "height       = {}", leader.height);
                let _ = writeln!(out, "x_offset     = {}", leader.x_offset);
                let _ = writeln!(out, "y_offset     = {}", leader.y_offset);
                let _ = writeln!(out, "timestamp    = {} ticks", leader.timestamp);
            }
        }
        Some(ContentType::Trailer) => {
            if let Ok(trailer) = packet.trailer() {
                let _ = writeln!(
                    out,
                    "payload_type = {}",
                    payload_type_name(trailer.payload_type)
                );
            }
        }
        _ => {}
    }

    out
}

/// Emit the packet rendering through `tracing` at the requested level.
///
/// The rendering is only built when an event at `level` would actually be
/// recorded.
pub fn packet_debug(packet: &PacketRef<'_>, level: Level) {
    if level == Level::ERROR {
        tracing::error!("{}", packet_to_string(packet));
    } else if level == Level::WARN {
        tracing::warn!("{}", packet_to_string(packet));
    } else if level == Level::INFO {
        tracing::info!("{}", packet_to_string(packet));
    } else if level == Level::DEBUG {
        tracing::debug!("{}", packet_to_string(packet));
    } else {
        tracing::trace!("{}", packet_to_string(packet));
    }
}

fn payload_type_name(code: u32) -> String {
    let known = u16::try_from(code).ok().and_then(PayloadType::from_wire);
    match known {
        Some(payload_type) => payload_type.name().to_string(),
        None => format!("unknown (0x{code:04x})"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::encode::{encode_data_block, encode_leader, encode_trailer};

    #[test]
    fn renders_leader_fields() {
        let mut dst = [0u8; 64];
        let written =
            encode_leader(7, 0, 125, 0x0108_0001, 640, 480, 0, 0, &mut dst).unwrap();
        let packet = PacketRef::parse(&dst[..written]).unwrap();

        let text = packet_to_string(&packet);
        assert!(text.contains("packet_type  = ok (0x0000)"));
        assert!(text.contains("header       = compact"));
        assert!(text.contains("content_type = leader"));
        assert!(text.contains("frame_id     = 7"));
        assert!(text.contains("payload_type = image"));
        assert!(text.contains("pixel_format = 0x01080001"));
        assert!(text.contains("width        = 640"));
        assert!(text.contains("height       = 480"));
        assert!(text.contains("timestamp    = 125 ticks"));
    }

    #[test]
    fn renders_trailer_fields() {
        let mut dst = [0u8; 16];
        let written = encode_trailer(3, 9, &mut dst).unwrap();
        let packet = PacketRef::parse(&dst[..written]).unwrap();

        let text = packet_to_string(&packet);
        assert!(text.contains("content_type = trailer"));
        assert!(text.contains("packet_id    = 9"));
        assert!(text.contains("payload_type = image"));
    }

    #[test]
    fn renders_data_block_size() {
        let mut dst = [0u8; 32];
        let written = encode_data_block(1, 2, b"pixels", &mut dst).unwrap();
        let packet = PacketRef::parse(&dst[..written]).unwrap();

        let text = packet_to_string(&packet);
        assert!(text.contains("content_type = data-block"));
        assert!(text.contains("data_size    = 6"));
    }

    #[test]
    fn unknown_codes_render_as_unknown() {
        // Status 0xbeef, content type 0x7f, no descriptor.
        let bytes = [0xbe, 0xef, 0x00, 0x01, 0x7f, 0x00, 0x00, 0x00];
        let packet = PacketRef::parse(&bytes).unwrap();

        let text = packet_to_string(&packet);
        assert!(text.contains("packet_type  = unknown (0xbeef)"));
        assert!(text.contains("content_type = unknown (0x7f)"));
    }

    #[test]
    fn truncated_leader_still_renders_header() {
        // Leader content type, but no descriptor bytes behind the header.
        let bytes = [0x00, 0x00, 0x00, 0x01, 0x01, 0x00, 0x00, 0x00];
        let packet = PacketRef::parse(&bytes).unwrap();

        let text = packet_to_string(&packet);
        assert!(text.contains("content_type = leader"));
        assert!(!text.contains("pixel_format"));
    }

    #[test]
    fn debug_emission_does_not_panic() {
        let mut dst = [0u8; 16];
        let written = encode_trailer(1, 1, &mut dst).unwrap();
        let packet = PacketRef::parse(&dst[..written]).unwrap();

        for level in [
            Level::ERROR,
            Level::WARN,
            Level::INFO,
            Level::DEBUG,
            Level::TRACE,
        ] {
            packet_debug(&packet, level);
        }
    }
}
