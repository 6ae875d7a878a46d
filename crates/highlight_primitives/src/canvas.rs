use gpui::Rgba;

use crate::color::TRANSPARENT;

/// A mutable 2D grid of RGBA pixels.
///
/// Writes outside the grid are dropped rather than reported, so drawing code
/// can pass through geometry that is momentarily out of range.
#[derive(Debug, Clone, PartialEq)]
pub struct PixelCanvas {
    width: u32,
    height: u32,
    pixels: Vec<Rgba>,
}

/// A horizontal span of identical, non-transparent pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PixelRun {
    /// Column of the first pixel.
    pub x: u32,
    /// Row of the span.
    pub y: u32,
    /// Number of pixels in the span.
    pub len: u32,
    /// Color shared by every pixel in the span.
    pub color: Rgba,
}

impl PixelCanvas {
    /// Creates a fully transparent canvas.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            pixels: vec![TRANSPARENT; width as usize * height as usize],
        }
    }

    /// Width in pixels.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Height in pixels.
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Returns whether `(x, y)` lies on the canvas.
    pub fn contains(&self, x: i32, y: i32) -> bool {
        x >= 0 && y >= 0 && (x as u32) < self.width && (y as u32) < self.height
    }

    /// Returns the pixel at `(x, y)`, or `None` outside the canvas.
    pub fn pixel(&self, x: i32, y: i32) -> Option<Rgba> {
        self.index_of(x, y).map(|idx| self.pixels[idx])
    }

    /// Writes `color` at `(x, y)`. Returns `false` if the write was clipped.
    pub fn set_pixel(&mut self, x: i32, y: i32, color: Rgba) -> bool {
        match self.index_of(x, y) {
            Some(idx) => {
                self.pixels[idx] = color;
                true
            }
            None => false,
        }
    }

    /// Number of pixels with a non-zero alpha channel.
    pub fn painted_pixel_count(&self) -> usize {
        self.pixels.iter().filter(|pixel| pixel.a != 0.0).count()
    }

    /// Collects every row's runs of identical, non-transparent pixels,
    /// top to bottom and left to right.
    pub fn runs(&self) -> Vec<PixelRun> {
        let mut runs = Vec::new();
        if self.width == 0 {
            return runs;
        }

        for (y, row) in self.pixels.chunks_exact(self.width as usize).enumerate() {
            let mut current: Option<PixelRun> = None;

            for (x, pixel) in row.iter().enumerate() {
                if let Some(run) = current.as_mut()
                    && run.color == *pixel
                {
                    run.len += 1;
                    continue;
                }

                if let Some(run) = current.take() {
                    runs.push(run);
                }

                if pixel.a != 0.0 {
                    current = Some(PixelRun {
                        x: x as u32,
                        y: y as u32,
                        len: 1,
                        color: *pixel,
                    });
                }
            }

            if let Some(run) = current {
                runs.push(run);
            }
        }

        runs
    }

    /// Exports the canvas as straight (non-premultiplied) 8-bit RGBA bytes, row-major.
    pub fn to_rgba8(&self) -> Vec<u8> {
        let to_byte = |channel: f32| (channel * 255.0).round().clamp(0.0, 255.0) as u8;

        let mut bytes = Vec::with_capacity(self.pixels.len() * 4);
        for pixel in &self.pixels {
            bytes.extend_from_slice(&[
                to_byte(pixel.r),
                to_byte(pixel.g),
                to_byte(pixel.b),
                to_byte(pixel.a),
            ]);
        }
        bytes
    }

    fn index_of(&self, x: i32, y: i32) -> Option<usize> {
        if !self.contains(x, y) {
            return None;
        }
        Some(y as usize * self.width as usize + x as usize)
    }
}
