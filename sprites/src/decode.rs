use {
    crate::{DecodeError, Format, Image},
    pixmap::{Pixel, Pixmap, Rgb, Rgba},
};

/// Decodes a raw sprite payload to canonical 8-bit channels, top row first.
///
/// Payloads are stored bottom row first, so every successful decode ends with a
/// vertical flip. The format is checked before the length: an undecodable
/// format always reports `UnsupportedFormat`.
pub fn decode(format: Format, raw: &[u8], wide: u32, high: u32) -> Result<Image, DecodeError> {
    let mut image: Image = match format {
        Format::Rgb         => decode_direct::<Rgb>(format, raw, wide, high)?.into(),
        Format::Rgba        => decode_direct::<Rgba>(format, raw, wide, high)?.into(),
        Format::Argb1555Rev => decode_argb1555(raw, wide, high)?.into(),
        Format::Rgb5A1Ext | Format::Unknown(_) => {
            return Err(DecodeError::UnsupportedFormat(format))
        }
    };

    image.flip_vertical();
    Ok(image)
}

fn expected_len(wide: u32, high: u32, bytes_per_pixel: usize) -> usize {
    (wide as usize)
        .saturating_mul(high as usize)
        .saturating_mul(bytes_per_pixel)
}

fn size_mismatch(format: Format, raw: &[u8], wide: u32, high: u32, bytes_per_pixel: usize)
    -> DecodeError
{
    let expected = expected_len(wide, high, bytes_per_pixel);
    DecodeError::SizeMismatch{format, wide, high, expected, actual: raw.len()}
}

fn decode_direct<P: Pixel>(format: Format, raw: &[u8], wide: u32, high: u32)
    -> Result<Pixmap<P>, DecodeError>
{
    Pixmap::from_bytes(raw, wide as usize, high as usize)
        .ok_or_else(|| size_mismatch(format, raw, wide, high, P::CHANNELS.count()))
}

fn decode_argb1555(raw: &[u8], wide: u32, high: u32) -> Result<Pixmap<Rgba>, DecodeError> {
    let format = Format::Argb1555Rev;
    if raw.len() != expected_len(wide, high, 2) {
        return Err(size_mismatch(format, raw, wide, high, 2))
    }

    let pixels = raw.chunks_exact(2)
        .map(|bs| u16::from_be_bytes([bs[0], bs[1]]))
        .map(argb1555_to_rgba8)
        .collect();
    Pixmap::from_pixels(pixels, wide as usize, high as usize)
        .ok_or_else(|| size_mismatch(format, raw, wide, high, 2))
}

/// Expands `a:1 r:5 g:5 b:5` (alpha in the top bit).
///
/// Colour channels scale as `y * 255 / 31`, truncating; this differs from bit
/// replication for some inputs (17 gives 139, not 140).
pub fn argb1555_to_rgba8(bits: u16) -> Rgba {
    let a = (bits >> 15 & 1) as u8 * 0xff;
    let chan = |shift: u16| {
        let y = (bits >> shift & 0x1f) as u32;
        (y * 0xff / 0x1f) as u8
    };
    let [r, g, b] = [10, 5, 0].map(chan);
    Rgba::new(r, g, b, a)
}
