use std::io;
use std::path::Path;

use image::{ImageBuffer, ImageError, Pixel, PixelWithColorType};

/// An image whose raw pixel bytes can carry a payload.
///
/// Only lossless formats preserve the low bit of every byte; saving a
/// carrier as JPEG destroys whatever it holds.
pub trait Carrier {
    fn pixel_bytes(&self) -> &[u8];

    fn pixel_bytes_mut(&mut self) -> &mut [u8];

    /// Writes the carrier to `path`, choosing the format from the extension.
    fn persist(&self, path: &Path) -> io::Result<()>;
}

impl<P> Carrier for ImageBuffer<P, Vec<u8>>
where
    P: Pixel<Subpixel = u8> + PixelWithColorType,
{
    fn pixel_bytes(&self) -> &[u8] {
        self.as_raw()
    }

    fn pixel_bytes_mut(&mut self) -> &mut [u8] {
        &mut **self
    }

    fn persist(&self, path: &Path) -> io::Result<()> {
        self.save(path).map_err(|error| match error {
            ImageError::IoError(error) => error,
            error => io::Error::new(io::ErrorKind::Other, error),
        })
    }
}
