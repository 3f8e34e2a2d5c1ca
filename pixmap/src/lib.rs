use bytemuck as bm;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Channels {
    Rgb,
    Rgba,
}

impl Channels {
    pub const fn count(self) -> usize {
        match self {
            Channels::Rgb  => 3,
            Channels::Rgba => 4,
        }
    }
}

pub trait Pixel: bm::Pod {
    const CHANNELS: Channels;
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, bm::Pod, bm::Zeroable)]
#[repr(C)]
pub struct Rgb(pub [u8; 3]);

impl Pixel for Rgb {
    const CHANNELS: Channels = Channels::Rgb;
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, bm::Pod, bm::Zeroable)]
#[repr(C)]
pub struct Rgba(pub [u8; 4]);

impl Rgba {
    pub fn new(r: u8, g: u8, b: u8, a: u8) -> Rgba {
        Rgba([r, g, b, a])
    }
}

impl Pixel for Rgba {
    const CHANNELS: Channels = Channels::Rgba;
}

/// Owned, tightly packed, row-major pixel map. Row 0 is the top row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pixmap<P> {
    pixels: Vec<P>,
    wide: usize,
    high: usize,
}

impl<P: Pixel> Pixmap<P> {
    /// `None` unless `pixels.len() == wide * high`.
    pub fn from_pixels(pixels: Vec<P>, wide: usize, high: usize) -> Option<Self> {
        (Some(pixels.len()) == wide.checked_mul(high))
            .then_some(Self{pixels, wide, high})
    }

    /// Interprets `bytes` as packed pixels; `None` on any length disagreement.
    pub fn from_bytes(bytes: &[u8], wide: usize, high: usize) -> Option<Self> {
        let len = wide.checked_mul(high)?.checked_mul(P::CHANNELS.count())?;
        if bytes.len() != len {return None}
        let pixels = bm::allocation::pod_collect_to_vec(bytes);
        Self::from_pixels(pixels, wide, high)
    }

    pub fn wide(&self) -> usize { self.wide }
    pub fn high(&self) -> usize { self.high }
    pub fn channels(&self) -> Channels { P::CHANNELS }

    pub fn as_bytes(&self) -> &[u8] {
        bm::cast_slice(&self.pixels)
    }

    /// Reverses row order in place.
    pub fn flip_vertical(&mut self) {
        let wide = self.wide;
        let high = self.high;
        if wide == 0 {return}
        for top in 0 .. high / 2 {
            let bottom = high - 1 - top;
            let (upper, lower) = self.pixels.split_at_mut(bottom * wide);
            upper[top * wide .. (top + 1) * wide].swap_with_slice(&mut lower[..wide]);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // pixel (x, y) is [x, y, 0, 255]
    fn numbered(wide: usize, high: usize) -> Pixmap<Rgba> {
        let pixels = (0..high)
            .flat_map(|y| (0..wide).map(move |x| Rgba::new(x as u8, y as u8, 0, 0xff)))
            .collect();
        Pixmap::from_pixels(pixels, wide, high).unwrap()
    }

    fn rows(pm: &Pixmap<Rgba>) -> Vec<&[u8]> {
        pm.as_bytes().chunks_exact(pm.wide() * 4).collect()
    }

    #[test]
    fn from_bytes_checks_length() {
        assert!(Pixmap::<Rgb>::from_bytes(&[0; 6], 2, 1).is_some());
        assert!(Pixmap::<Rgb>::from_bytes(&[0; 5], 2, 1).is_none());
        assert!(Pixmap::<Rgb>::from_bytes(&[0; 7], 2, 1).is_none());
        assert!(Pixmap::<Rgba>::from_bytes(&[0; 6], 2, 1).is_none());
        assert!(Pixmap::<Rgba>::from_bytes(&[], usize::MAX, 2).is_none());
    }

    #[test]
    fn from_pixels_checks_count() {
        assert!(Pixmap::from_pixels(vec![Rgb::default(); 6], 3, 2).is_some());
        assert!(Pixmap::from_pixels(vec![Rgb::default(); 5], 3, 2).is_none());
        assert!(Pixmap::<Rgb>::from_pixels(vec![], usize::MAX, 2).is_none());
    }

    #[test]
    fn bytes_keep_channel_order() {
        let bytes = [10, 20, 30, 40, 50, 60, 70, 80];
        let pm = Pixmap::<Rgba>::from_bytes(&bytes, 2, 1).unwrap();
        assert_eq!(pm.channels(), Channels::Rgba);
        assert_eq!((pm.wide(), pm.high()), (2, 1));
        assert_eq!(pm.as_bytes(), &bytes);

        let pm = Pixmap::<Rgb>::from_bytes(&bytes[..6], 1, 2).unwrap();
        assert_eq!(pm.channels(), Channels::Rgb);
        assert_eq!(pm.as_bytes(), &bytes[..6]);
    }

    #[test]
    fn flip_inverts_row_order() {
        for high in [1, 2, 3, 4, 7] {
            let original = numbered(3, high);
            let mut flipped = original.clone();
            flipped.flip_vertical();

            let (before, after) = (rows(&original), rows(&flipped));
            for y in 0..high {
                assert_eq!(after[y], before[high - 1 - y]);
            }

            flipped.flip_vertical();
            assert_eq!(flipped, original);
        }
    }

    #[test]
    fn flip_of_single_row_is_noop() {
        let original = numbered(5, 1);
        let mut flipped = original.clone();
        flipped.flip_vertical();
        assert_eq!(flipped, original);
    }

    #[test]
    fn flip_of_empty_map() {
        let mut pm = numbered(0, 3);
        pm.flip_vertical();
        assert_eq!(pm.as_bytes(), &[] as &[u8]);
    }
}
