use pixmap::{Channels, Pixmap, Rgb, Rgba};

/// One decoded sprite, rows top to bottom, 8 bits per channel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Image {
    Rgb(Pixmap<Rgb>),
    Rgba(Pixmap<Rgba>),
}

impl Image {
    pub fn wide(&self) -> u32 {
        match self {
            Image::Rgb(pm)  => pm.wide() as u32,
            Image::Rgba(pm) => pm.wide() as u32,
        }
    }

    pub fn high(&self) -> u32 {
        match self {
            Image::Rgb(pm)  => pm.high() as u32,
            Image::Rgba(pm) => pm.high() as u32,
        }
    }

    pub fn channels(&self) -> Channels {
        match self {
            Image::Rgb(_)  => Channels::Rgb,
            Image::Rgba(_) => Channels::Rgba,
        }
    }

    pub fn as_bytes(&self) -> &[u8] {
        match self {
            Image::Rgb(pm)  => pm.as_bytes(),
            Image::Rgba(pm) => pm.as_bytes(),
        }
    }

    pub fn flip_vertical(&mut self) {
        match self {
            Image::Rgb(pm)  => pm.flip_vertical(),
            Image::Rgba(pm) => pm.flip_vertical(),
        }
    }
}

impl From<Pixmap<Rgb>> for Image {
    fn from(pm: Pixmap<Rgb>) -> Self { Image::Rgb(pm) }
}

impl From<Pixmap<Rgba>> for Image {
    fn from(pm: Pixmap<Rgba>) -> Self { Image::Rgba(pm) }
}
