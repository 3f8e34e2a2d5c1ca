use crate::Format;

#[derive(Debug, thiserror::Error)]
pub enum DecodeError {
    #[error("unsupported source format {0}")]
    UnsupportedFormat(Format),

    #[error("{format} at {wide}x{high} needs {expected} bytes, payload has {actual}")]
    SizeMismatch {
        format: Format,
        wide: u32,
        high: u32,
        expected: usize,
        actual: usize,
    },
}

/// Failures confined to one sprite; the stream stays aligned.
#[derive(Debug, thiserror::Error)]
pub enum RecordError {
    #[error("invalid dimensions {wide}x{high}")]
    InvalidDimensions { wide: i32, high: i32 },

    #[error("weird aspect ratio: header says {actual}, height/width is {expected}")]
    AspectMismatch { expected: i32, actual: i32 },

    #[error(transparent)]
    Decode(#[from] DecodeError),
}

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("read failed")]
    Io(#[from] std::io::Error),

    #[error("stream ended before the sprite count")]
    TruncatedCount,

    #[error("sprite count {0} is implausible; this looks like a little-endian sprite file, which is not supported")]
    EndiannessMismatch(u32),

    #[error("sprite {index}: stream ended inside the header")]
    TruncatedHeader { index: u32 },

    #[error("sprite {index}: stream ended inside the payload ({got} of {wanted} bytes)")]
    TruncatedPayload { index: u32, wanted: usize, got: usize },

    #[error("sprite {index}: negative payload size {size}")]
    InvalidPayloadSize { index: u32, size: i32 },

    #[error("sprite {index}: {source}")]
    Record {
        index: u32,
        #[source]
        source: RecordError,
    },
}

impl Error {
    /// Whether the container parse had to stop. Only record errors leave the
    /// stream usable.
    pub fn is_fatal(&self) -> bool {
        !matches!(self, Error::Record{..})
    }

    pub fn index(&self) -> Option<u32> {
        match *self {
            Error::TruncatedHeader{index}
            | Error::TruncatedPayload{index, ..}
            | Error::InvalidPayloadSize{index, ..}
            | Error::Record{index, ..} => Some(index),
            _ => None,
        }
    }
}
