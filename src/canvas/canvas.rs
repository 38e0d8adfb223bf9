//! Fixed-size RGBA pixel buffer

use super::color::Color;
use crate::errors::{Result, ShotError};

/// Largest canvas side, in pixels
pub const MAX_DIMENSION: u32 = 32_768;

/// Pixel buffer a render draws into
///
/// Dimensions are fixed at allocation; only pixel contents change afterward.
#[derive(Debug, Clone, PartialEq)]
pub struct Canvas {
    /// Width in pixels
    width: u32,
    /// Height in pixels
    height: u32,
    /// Pixel data (row-major, RGBA)
    pixels: Vec<Color>,
    /// Background color
    bg_color: Color,
}

impl Canvas {
    /// Allocate a canvas filled with `bg` at full opacity
    pub fn with_background(width: u32, height: u32, bg: Color) -> Result<Self> {
        if width > MAX_DIMENSION || height > MAX_DIMENSION {
            return Err(ShotError::Canvas(format!(
                "{width}x{height} exceeds the {MAX_DIMENSION}px limit"
            )));
        }
        let size = (width as usize)
            .checked_mul(height as usize)
            .ok_or_else(|| ShotError::Canvas(format!("{width}x{height} overflows")))?;
        let bg = bg.with_alpha(1.0);
        Ok(Self {
            width,
            height,
            pixels: vec![bg; size],
            bg_color: bg,
        })
    }

    /// Width in pixels
    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Height in pixels
    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Background color the canvas was filled with
    #[inline]
    pub fn background(&self) -> Color {
        self.bg_color
    }

    /// Get pixel at coordinates
    #[inline]
    pub fn get_pixel(&self, x: u32, y: u32) -> Option<Color> {
        if x < self.width && y < self.height {
            Some(self.pixels[(y * self.width + x) as usize])
        } else {
            None
        }
    }

    /// Set pixel with alpha blending; out-of-bounds writes are clipped
    #[inline]
    pub fn blend_pixel(&mut self, x: i32, y: i32, color: Color) {
        if x < 0 || y < 0 {
            return;
        }
        let (x, y) = (x as u32, y as u32);
        if x < self.width && y < self.height {
            let idx = (y * self.width + x) as usize;
            self.pixels[idx] = color.blend_over(&self.pixels[idx]);
        }
    }

    /// Get raw pixel data
    pub fn pixels(&self) -> &[Color] {
        &self.pixels
    }

    /// Number of pixels that differ from the background
    pub fn painted_pixels(&self) -> usize {
        self.pixels.iter().filter(|p| **p != self.bg_color).count()
    }

    /// Pixel data as packed 8-bit RGBA
    pub fn to_rgba8(&self) -> Vec<u8> {
        self.pixels.iter().flat_map(Color::to_rgba8).collect()
    }
}
