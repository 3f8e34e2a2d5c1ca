//! Sprite sheet containers: a big-endian sprite count followed by that many
//! records, each a 24-byte header and a raw GL texture payload.

mod be;
mod decode;
mod decoded;
mod error;
mod format;
mod header;
mod reader;
pub mod write;

pub use {
    crate::decode::{argb1555_to_rgba8, decode},
    crate::decoded::Image,
    crate::error::{DecodeError, Error, RecordError},
    crate::format::Format,
    crate::header::{Header, HEADER_LEN},
    crate::reader::{Headers, Sprite, Sprites, MAX_SPRITES},
    pixmap::{Channels, Pixmap, Rgb, Rgba},
};
