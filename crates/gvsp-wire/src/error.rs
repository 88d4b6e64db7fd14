/// Errors that can occur while decoding or encoding GVSP packets.
#[derive(Debug, thiserror::Error)]
pub enum GvspError {
    /// The buffer is shorter than the layout it must contain.
    #[error("packet truncated ({len} bytes, need {needed})")]
    Truncated { len: usize, needed: usize },

    /// The destination buffer cannot hold the fixed-size portion of the
    /// packet being encoded.
    #[error("destination buffer too small ({capacity} bytes, need {needed})")]
    CapacityTooSmall { capacity: usize, needed: usize },
}

pub type Result<T> = std::result::Result<T, GvspError>;
