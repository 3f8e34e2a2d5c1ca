use {
    crate::{be::Be, Format, RecordError},
    bytemuck::{self as bm, Pod, Zeroable},
    std::fmt,
};

pub const HEADER_LEN: usize = std::mem::size_of::<RawHeader>();

#[repr(C)]
#[derive(Clone, Copy, Debug, Pod, Zeroable)]
struct RawHeader {
    wide:        Be<i32>,
    high:        Be<i32>,
    aspect:      Be<i32>,
    src_format:  Be<i32>,
    dst_format:  Be<i32>,
    payload_len: Be<i32>,
}

/// Fixed-size header preceding each sprite payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Header {
    pub wide: i32,
    pub high: i32,
    /// Producer's precomputed `high / wide`.
    pub aspect: i32,
    pub src_format: Format,
    pub dst_format: Format,
    pub payload_len: i32,
}

impl Header {
    pub fn from_bytes(bytes: [u8; HEADER_LEN]) -> Header {
        let raw: RawHeader = bm::cast(bytes);
        Header {
            wide:        raw.wide.get(),
            high:        raw.high.get(),
            aspect:      raw.aspect.get(),
            src_format:  raw.src_format.get().into(),
            dst_format:  raw.dst_format.get().into(),
            payload_len: raw.payload_len.get(),
        }
    }

    pub fn to_bytes(&self) -> [u8; HEADER_LEN] {
        let raw = RawHeader {
            wide:        self.wide.into(),
            high:        self.high.into(),
            aspect:      self.aspect.into(),
            src_format:  self.src_format.tag().into(),
            dst_format:  self.dst_format.tag().into(),
            payload_len: self.payload_len.into(),
        };
        bm::cast(raw)
    }

    /// The producer converted the texture at load time.
    pub fn converted(&self) -> bool {
        self.src_format != self.dst_format
    }

    /// One line of the sprite listing, flagged when the producer converted formats.
    pub fn listing(&self, index: u32) -> String {
        let flag = if self.converted() {"[fmt mismatch!]  "} else {""};
        format!("{flag}sprite {index}:\t{}", self)
    }

    /// Checks the dimensions and the aspect field; returns the dimensions.
    pub fn validate(&self) -> Result<(u32, u32), RecordError> {
        let &Header{wide, high, aspect, ..} = self;
        if wide <= 0 || high <= 0 {
            return Err(RecordError::InvalidDimensions{wide, high})
        }

        let expected = high / wide;
        if aspect != expected {
            return Err(RecordError::AspectMismatch{expected, actual: aspect})
        }

        Ok((wide as u32, high as u32))
    }
}

impl fmt::Display for Header {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "AR={}\t{}x{}\tformat: {} -> {}\tbytes={}",
            self.aspect,
            self.wide, self.high,
            self.src_format.name(), self.dst_format.name(),
            self.payload_len)
    }
}
