use std::path::Path;

use assetgen_core::font::{Rgb, Sheet};
use image::{DynamicImage, ImageResult, RgbImage};
use log::debug;

/// A decoded image as a glyph sheet.
///
/// Indexed images are expanded through their palette by the decoder, and
/// alpha is dropped, so every pixel compares as a plain RGB triple.
pub struct ImageSheet(RgbImage);

impl ImageSheet {
    pub fn open(path: &Path) -> ImageResult<Self> {
        let image = image::open(path)?;
        debug!(
            "Opened {}: {}x{} {:?}",
            path.display(),
            image.width(),
            image.height(),
            image.color()
        );
        Ok(Self::from(image))
    }
}

impl From<DynamicImage> for ImageSheet {
    fn from(image: DynamicImage) -> Self {
        Self(image.into_rgb8())
    }
}

impl Sheet for ImageSheet {
    fn width(&self) -> u32 {
        self.0.width()
    }

    fn height(&self) -> u32 {
        self.0.height()
    }

    fn rgb(&self, x: u32, y: u32) -> Rgb {
        Rgb(self.0.get_pixel(x, y).0)
    }
}
