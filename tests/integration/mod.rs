// Shared helpers for the render tests
#![allow(dead_code)]

use std::sync::Mutex;

use codeshot::canvas::{Canvas, Color, Fixed, Point};
use codeshot::font::{GlyphRenderer, TextMetrics};
use codeshot::{RenderConfig, Renderer, Result};

/// Monospace stand-in for a real font
///
/// Every char advances `advance` points. Non-whitespace chars draw a solid
/// block from the baseline up to 70% of the font size. Every draw call is
/// recorded.
pub struct BlockFont {
    advance: f64,
    font_size: f64,
    dpi: f64,
    pub calls: Mutex<Vec<String>>,
}

impl BlockFont {
    pub fn new(config: &RenderConfig) -> Self {
        Self {
            advance: config.font_size * 0.6,
            font_size: config.font_size,
            dpi: config.dpi,
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }
}

impl TextMetrics for BlockFont {
    fn measure(&self, text: &str) -> Result<f64> {
        Ok(text.chars().count() as f64 * self.advance)
    }
}

impl GlyphRenderer for BlockFont {
    fn draw_text(&self, text: &str, origin: Point, color: Color, canvas: &mut Canvas) {
        self.calls.lock().unwrap().push(text.to_string());
        let advance = Fixed::from_points(self.advance, self.dpi);
        let ascent = Fixed::from_points(self.font_size * 0.7, self.dpi).round();
        let baseline = origin.y.round();

        let mut x = origin.x;
        for c in text.chars() {
            if !c.is_whitespace() {
                let left = x.round();
                let right = (x + advance).round() - 1;
                for py in baseline - ascent..baseline {
                    for px in left..right {
                        canvas.blend_pixel(px, py, color);
                    }
                }
            }
            x += advance;
        }
    }
}

pub fn config() -> RenderConfig {
    RenderConfig::default()
}

pub fn renderer() -> Renderer<BlockFont> {
    let config = config();
    let font = BlockFont::new(&config);
    Renderer::with_font(config, font).unwrap()
}
