//! Pixel buffer that collects display-encoded colors and writes image files.

use std::path::Path;

use crate::error::{ImageBufferError, ImageResult};
use crate::Color;

/// Row-major buffer of colors with channels in [0, 1].
#[derive(Debug, Clone)]
pub struct ImageBuffer {
    width: u32,
    height: u32,
    pixels: Vec<Color>,
}

impl ImageBuffer {
    /// Create a new image buffer filled with black.
    pub fn new(width: u32, height: u32) -> ImageResult<Self> {
        if width == 0 || height == 0 {
            return Err(ImageBufferError::InvalidDimensions { width, height });
        }

        Ok(Self {
            width,
            height,
            pixels: vec![Color::ZERO; (width as usize) * (height as usize)],
        })
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    fn index(&self, row: u32, col: u32) -> usize {
        assert!(
            row < self.height && col < self.width,
            "pixel ({row}, {col}) outside {}x{} image",
            self.width,
            self.height
        );
        (row as usize) * (self.width as usize) + col as usize
    }

    /// Get the pixel at (row, col); row 0 is the top of the image.
    pub fn get_pixel(&self, row: u32, col: u32) -> Color {
        self.pixels[self.index(row, col)]
    }

    /// Set the pixel at (row, col); row 0 is the top of the image.
    pub fn set_pixel(&mut self, row: u32, col: u32, color: Color) {
        let i = self.index(row, col);
        self.pixels[i] = color;
    }

    /// Convert to an 8-bit RGB image.
    pub fn to_rgb8(&self) -> image::RgbImage {
        image::RgbImage::from_fn(self.width, self.height, |x, y| {
            let c = self.get_pixel(y, x).clamp(Color::ZERO, Color::ONE);
            image::Rgb([
                (255.0 * c.x) as u8,
                (255.0 * c.y) as u8,
                (255.0 * c.z) as u8,
            ])
        })
    }

    /// Write the image; the format follows the file extension.
    pub fn save(&self, path: impl AsRef<Path>) -> ImageResult<()> {
        let path = path.as_ref();
        self.to_rgb8().save(path)?;
        log::info!("Saved {}x{} image to {}", self.width, self.height, path.display());
        Ok(())
    }
}
