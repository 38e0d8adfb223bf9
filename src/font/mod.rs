//! Font collaborators
//!
//! The layout engine only sees two capabilities: measuring a string and
//! drawing a string. [`FontFace`] provides both on top of fontdue.

mod face;
mod system;

pub use face::FontFace;
pub use system::{load_font_bytes, system_monospace};

use crate::canvas::{Canvas, Color, Point};
use crate::errors::Result;

/// Measures rendered text
pub trait TextMetrics {
    /// Advance width of `text` in logical units (points).
    ///
    /// Must be deterministic for a given font and size.
    fn measure(&self, text: &str) -> Result<f64>;
}

/// Draws text into an existing canvas
pub trait GlyphRenderer {
    /// Draw `text` with its baseline starting at `origin` (device units).
    ///
    /// Writes pixels only; never resizes the canvas. Pixels outside the
    /// canvas are clipped.
    fn draw_text(&self, text: &str, origin: Point, color: Color, canvas: &mut Canvas);
}
