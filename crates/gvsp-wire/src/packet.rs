//! Wire-level constants and enumerations.
//!
//! Bit positions and wire codes here are fixed by the GigE Vision
//! specification and must match exactly for interop with cameras and
//! third-party receivers.

/// Size of the status word leading every packet.
pub const STATUS_SIZE: usize = 2;

/// Size of the compact header: frame_id(2) + packet_infos(4).
pub const COMPACT_HEADER_SIZE: usize = 6;

/// Size of the extended header: flags(2) + packet_infos(4) + frame_id(8) + packet_id(4).
pub const EXTENDED_HEADER_SIZE: usize = 18;

/// Size of the data leader descriptor carried by leader packets.
pub const LEADER_SIZE: usize = 32;

/// Size of the data trailer descriptor carried by trailer packets.
pub const TRAILER_SIZE: usize = 8;

/// Absolute offset of the byte carrying the extended-id mode flag.
///
/// Valid under both header layouts, so the header mode can be classified
/// before the rest of the header is interpreted.
pub const EXTENDED_ID_MODE_OFFSET: usize = 4;

/// Extended-id mode flag, bit 7 of the third header byte.
pub const EXTENDED_ID_MODE_MASK: u8 = 0x80;

/// Packet id field of the packet-infos word (compact header only).
pub const PACKET_ID_MASK: u32 = 0x00ff_ffff;

/// Content type field of the packet-infos word, shared by both layouts.
pub const CONTENT_TYPE_MASK: u32 = 0x7f00_0000;

/// Bit position of the content type field.
pub const CONTENT_TYPE_POS: u32 = 24;

/// IP + UDP + status + compact header overhead, for sizing against the MTU.
pub const PACKET_PROTOCOL_OVERHEAD: usize = 20 + 8 + STATUS_SIZE + COMPACT_HEADER_SIZE;

/// IP + UDP + status + extended header overhead.
pub const PACKET_EXTENDED_PROTOCOL_OVERHEAD: usize = 20 + 8 + STATUS_SIZE + EXTENDED_HEADER_SIZE;

/// Status code carried in the first two bytes of every packet.
///
/// Codes outside the known set are preserved in [`PacketType::Unknown`] so
/// that [`PacketType::is_error`] still applies to them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PacketType {
    /// Valid packet.
    Ok,
    /// Resent packet (BlackFly PointGrey camera support).
    Resend,
    /// Error packet indicating an invalid resend request.
    PacketUnavailable,
    /// A status code not defined by this crate.
    Unknown(u16),
}

impl PacketType {
    /// Decode a host-order status code.
    pub fn from_wire(code: u16) -> Self {
        match code {
            0x0000 => PacketType::Ok,
            0x0100 => PacketType::Resend,
            0x800c => PacketType::PacketUnavailable,
            other => PacketType::Unknown(other),
        }
    }

    /// The wire code for this status.
    pub fn to_wire(self) -> u16 {
        match self {
            PacketType::Ok => 0x0000,
            PacketType::Resend => 0x0100,
            PacketType::PacketUnavailable => 0x800c,
            PacketType::Unknown(code) => code,
        }
    }

    /// Bit 15 of the status code marks an error or unavailable condition.
    pub fn is_error(self) -> bool {
        self.to_wire() & 0x8000 != 0
    }

    /// Human-readable name for diagnostics.
    pub fn name(self) -> &'static str {
        match self {
            PacketType::Ok => "ok",
            PacketType::Resend => "resend",
            PacketType::PacketUnavailable => "packet-unavailable",
            PacketType::Unknown(_) => "unknown",
        }
    }
}

/// Content type distinguishing the packet roles within one frame.
///
/// This is a closed set: codes outside it are not defined by the protocol,
/// and decoding surfaces them as unrecognized rather than guessing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContentType {
    /// Leader packet opening a frame, carrying the leader descriptor.
    Leader,
    /// Trailer packet closing a frame, carrying the trailer descriptor.
    Trailer,
    /// Data block packet carrying a slice of the frame payload.
    DataBlock,
    /// Whole frame in a single packet. The payload layout is an external
    /// contract; this crate only classifies it.
    AllIn,
}

impl ContentType {
    /// Decode the 7-bit content type code extracted from the packet-infos
    /// word. Returns `None` for codes outside the protocol's set.
    pub fn from_wire(code: u8) -> Option<Self> {
        match code {
            0x01 => Some(ContentType::Leader),
            0x02 => Some(ContentType::Trailer),
            0x03 => Some(ContentType::DataBlock),
            0x04 => Some(ContentType::AllIn),
            _ => None,
        }
    }

    /// The wire code for this content type.
    pub fn to_wire(self) -> u8 {
        match self {
            ContentType::Leader => 0x01,
            ContentType::Trailer => 0x02,
            ContentType::DataBlock => 0x03,
            ContentType::AllIn => 0x04,
        }
    }

    /// Human-readable name for diagnostics.
    pub fn name(self) -> &'static str {
        match self {
            ContentType::Leader => "leader",
            ContentType::Trailer => "trailer",
            ContentType::DataBlock => "data-block",
            ContentType::AllIn => "all-in",
        }
    }
}

/// Payload type advertised by leader and trailer descriptors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PayloadType {
    /// Image data.
    Image,
    /// Raw data.
    RawData,
    /// File transfer.
    File,
    /// Chunk data.
    ChunkData,
    /// Extended chunk data. Deprecated in the protocol but still emitted by
    /// older transmitters.
    ExtendedChunkData,
    /// JPEG data.
    Jpeg,
    /// JPEG 2000 data.
    Jpeg2000,
    /// H.264 data.
    H264,
    /// Multizone image.
    MultizoneImage,
    /// Image with extended chunk data appended.
    ImageExtendedChunk,
}

impl PayloadType {
    /// Decode a host-order payload type code. Returns `None` for codes this
    /// crate does not recognize.
    pub fn from_wire(code: u16) -> Option<Self> {
        match code {
            0x0001 => Some(PayloadType::Image),
            0x0002 => Some(PayloadType::RawData),
            0x0003 => Some(PayloadType::File),
            0x0004 => Some(PayloadType::ChunkData),
            0x0005 => Some(PayloadType::ExtendedChunkData),
            0x0006 => Some(PayloadType::Jpeg),
            0x0007 => Some(PayloadType::Jpeg2000),
            0x0008 => Some(PayloadType::H264),
            0x0009 => Some(PayloadType::MultizoneImage),
            0x4001 => Some(PayloadType::ImageExtendedChunk),
            _ => None,
        }
    }

    /// The wire code for this payload type.
    pub fn to_wire(self) -> u16 {
        match self {
            PayloadType::Image => 0x0001,
            PayloadType::RawData => 0x0002,
            PayloadType::File => 0x0003,
            PayloadType::ChunkData => 0x0004,
            PayloadType::ExtendedChunkData => 0x0005,
            PayloadType::Jpeg => 0x0006,
            PayloadType::Jpeg2000 => 0x0007,
            PayloadType::H264 => 0x0008,
            PayloadType::MultizoneImage => 0x0009,
            PayloadType::ImageExtendedChunk => 0x4001,
        }
    }

    /// Human-readable name for diagnostics.
    pub fn name(self) -> &'static str {
        match self {
            PayloadType::Image => "image",
            PayloadType::RawData => "raw-data",
            PayloadType::File => "file",
            PayloadType::ChunkData => "chunk-data",
            PayloadType::ExtendedChunkData => "extended-chunk-data",
            PayloadType::Jpeg => "jpeg",
            PayloadType::Jpeg2000 => "jpeg2000",
            PayloadType::H264 => "h264",
            PayloadType::MultizoneImage => "multizone-image",
            PayloadType::ImageExtendedChunk => "image-extended-chunk",
        }
    }
}

/// Receiver-facing classification of the data a stream carries.
///
/// Unlike [`PayloadType`] this is an open set: new camera firmware may ship
/// payload types this crate does not know, and those must keep flowing as
/// [`BufferKind::Unknown`] instead of halting the stream.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BufferKind {
    Image,
    RawData,
    File,
    ChunkData,
    ExtendedChunkData,
    Jpeg,
    Jpeg2000,
    H264,
    MultizoneImage,
    ImageExtendedChunk,
    /// Payload type not recognized by this crate.
    Unknown,
}

impl BufferKind {
    /// Map a wire payload type code to a buffer kind. Total over all 16-bit
    /// codes; unrecognized codes map to [`BufferKind::Unknown`].
    pub fn from_payload_type(code: u16) -> Self {
        match PayloadType::from_wire(code) {
            Some(payload_type) => payload_type.into(),
            None => BufferKind::Unknown,
        }
    }
}

impl From<PayloadType> for BufferKind {
    fn from(payload_type: PayloadType) -> Self {
        match payload_type {
            PayloadType::Image => BufferKind::Image,
            PayloadType::RawData => BufferKind::RawData,
            PayloadType::File => BufferKind::File,
            PayloadType::ChunkData => BufferKind::ChunkData,
            PayloadType::ExtendedChunkData => BufferKind::ExtendedChunkData,
            PayloadType::Jpeg => BufferKind::Jpeg,
            PayloadType::Jpeg2000 => BufferKind::Jpeg2000,
            PayloadType::H264 => BufferKind::H264,
            PayloadType::MultizoneImage => BufferKind::MultizoneImage,
            PayloadType::ImageExtendedChunk => BufferKind::ImageExtendedChunk,
        }
    }
}
