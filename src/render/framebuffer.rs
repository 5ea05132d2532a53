//! RGBA pixel buffer the charts are rasterized into.

use crate::error::RenderError;
use crate::render::Rgba;

/// Tightly packed RGBA pixels in row-major order, 4 bytes per pixel.
#[derive(Debug, Clone)]
pub(crate) struct Framebuffer {
    width: u32,
    height: u32,
    pixels: Vec<u8>,
}

impl Framebuffer {
    /// Create a transparent framebuffer.
    ///
    /// # Errors
    ///
    /// Returns an error if width or height is zero.
    pub(crate) fn new(width: u32, height: u32) -> Result<Self, RenderError> {
        if width == 0 || height == 0 {
            return Err(RenderError::InvalidDimensions { width, height });
        }
        let size = (width as usize) * (height as usize) * 4;
        Ok(Self {
            width,
            height,
            pixels: vec![0; size],
        })
    }

    pub(crate) const fn width(&self) -> u32 {
        self.width
    }

    pub(crate) const fn height(&self) -> u32 {
        self.height
    }

    pub(crate) fn pixels(&self) -> &[u8] {
        &self.pixels
    }

    pub(crate) fn clear(&mut self, color: Rgba) {
        let rgba = color.to_array();
        for chunk in self.pixels.chunks_exact_mut(4) {
            chunk.copy_from_slice(&rgba);
        }
    }

    /// Fill a rectangle, clipped to the buffer bounds.
    pub(crate) fn fill_rect(&mut self, x: u32, y: u32, w: u32, h: u32, color: Rgba) {
        let x_end = x.saturating_add(w).min(self.width);
        let y_end = y.saturating_add(h).min(self.height);
        for py in y..y_end {
            for px in x..x_end {
                self.set_pixel(px, py, color);
            }
        }
    }

    #[cfg(test)]
    pub(crate) fn get_pixel(&self, x: u32, y: u32) -> Option<Rgba> {
        let idx = self.index(x, y)?;
        let p = &self.pixels[idx..idx + 4];
        Some(Rgba::new(p[0], p[1], p[2], p[3]))
    }

    /// Set a pixel; out-of-bounds writes are ignored.
    pub(crate) fn set_pixel(&mut self, x: u32, y: u32, color: Rgba) {
        if let Some(idx) = self.index(x, y) {
            self.pixels[idx..idx + 4].copy_from_slice(&color.to_array());
        }
    }

    fn index(&self, x: u32, y: u32) -> Option<usize> {
        if x >= self.width || y >= self.height {
            return None;
        }
        Some(((y as usize) * (self.width as usize) + (x as usize)) * 4)
    }
}
