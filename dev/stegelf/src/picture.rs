use std::io;
use std::path::Path;

use image::{ImageFormat, RgbImage, RgbaImage};
use stegelf::Carrier;

use crate::error::ToolError;

/// A decoded carrier image, kept with an alpha channel only if the source
/// had one so that extraction sees the same byte layout as embedding.
pub enum Picture {
    Rgb(RgbImage),
    Rgba(RgbaImage),
}

impl Picture {
    pub fn open(path: &Path) -> Result<Self, ToolError> {
        let image = image::open(path)?;
        if image.color().has_alpha() {
            Ok(Picture::Rgba(image.to_rgba8()))
        } else {
            Ok(Picture::Rgb(image.to_rgb8()))
        }
    }
}

impl Carrier for Picture {
    fn pixel_bytes(&self) -> &[u8] {
        match self {
            Picture::Rgb(image) => image.pixel_bytes(),
            Picture::Rgba(image) => image.pixel_bytes(),
        }
    }

    fn pixel_bytes_mut(&mut self) -> &mut [u8] {
        match self {
            Picture::Rgb(image) => image.pixel_bytes_mut(),
            Picture::Rgba(image) => image.pixel_bytes_mut(),
        }
    }

    fn persist(&self, path: &Path) -> io::Result<()> {
        match self {
            Picture::Rgb(image) => image.persist(path),
            Picture::Rgba(image) => image.persist(path),
        }
    }
}

/// Rejects output formats that would not keep every low bit intact.
pub fn check_lossless(path: &Path) -> Result<(), ToolError> {
    match ImageFormat::from_path(path) {
        Ok(ImageFormat::Jpeg) | Ok(ImageFormat::Avif) => {
            Err(ToolError::LossyFormat(path.to_path_buf()))
        }
        _ => Ok(()),
    }
}
