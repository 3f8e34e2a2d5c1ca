use {
    crate::Image,
    camino::{Utf8Path as Path, Utf8PathBuf as PathBuf},
    image::ColorType,
    pixmap::Channels,
};

/// `{dir}/{base}{index:03}.png`
pub fn output_path(dir: &Path, base: &str, index: u32) -> PathBuf {
    dir.join(format!("{base}{index:03}.png"))
}

/// Basename used for output files: the input's file stem.
pub fn base_name(input: &Path) -> &str {
    input.file_stem().unwrap_or("sprite")
}

pub fn save(image: &Image, path: &Path) -> image::ImageResult<()> {
    let color = match image.channels() {
        Channels::Rgb  => ColorType::Rgb8,
        Channels::Rgba => ColorType::Rgba8,
    };
    image::save_buffer(path, image.as_bytes(), image.wide(), image.high(), color)
}
