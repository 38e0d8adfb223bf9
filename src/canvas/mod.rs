//! # Canvas
//!
//! The pixel side of a render:
//! 1. [`Fixed`] converts logical points into 26.6 device coordinates
//! 2. [`Canvas`] is the background-filled RGBA buffer glyphs are drawn into
//! 3. [`Color`] does the alpha compositing for glyph coverage
//!
//! ```text
//!   points (f64) ──Fixed::from_points──▶ device 26.6 ──ceil──▶ pixels
//! ```

mod canvas;
mod color;
mod fixed;

pub use canvas::{Canvas, MAX_DIMENSION};
pub use color::Color;
pub use fixed::{device_ceil, Fixed, Point, POINTS_PER_INCH};
