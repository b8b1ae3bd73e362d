use image::{ImageError, RgbaImage};
use std::path::Path;

/// Turns an encoded image file into a row-major 4-channel pixel grid.
pub trait ImageDecoder {
    fn decode(&self, path: &Path) -> Result<RgbaImage, ImageError>;
}

/// Decoder backed by the `image` crate. Every supported color mode is
/// forced into RGBA; inputs without an alpha channel decode fully opaque.
#[derive(Debug, Default)]
pub struct FileImageDecoder;

impl ImageDecoder for FileImageDecoder {
    fn decode(&self, path: &Path) -> Result<RgbaImage, ImageError> {
        Ok(image::open(path)?.to_rgba8())
    }
}
