//! fontdue-backed metrics and glyph rendering

use std::collections::HashMap;
use std::sync::{Arc, Mutex, PoisonError};

use fontdue::{Font, FontSettings, Metrics};

use super::system::{load_font_bytes, system_monospace};
use super::{GlyphRenderer, TextMetrics};
use crate::canvas::{Canvas, Color, Point, POINTS_PER_INCH};
use crate::config::RenderConfig;
use crate::errors::{Result, ShotError};

/// Coverage bitmap for one glyph at the device size
#[derive(Debug)]
struct RasterizedGlyph {
    metrics: Metrics,
    coverage: Vec<u8>,
}

/// A parsed font at a fixed size
///
/// Measures at the logical size (1pt = 1px) and draws at the device size
/// (`font_size * dpi / 72`). Rasterized glyphs are cached per instance.
pub struct FontFace {
    font: Font,
    logical_px: f32,
    device_px: f32,
    glyphs: Mutex<HashMap<char, Arc<RasterizedGlyph>>>,
}

impl FontFace {
    /// Parse a font file (`index` selects the face in a collection)
    pub fn from_bytes(bytes: &[u8], index: u32, font_size: f64, dpi: f64) -> Result<Self> {
        let settings = FontSettings {
            collection_index: index,
            ..FontSettings::default()
        };
        let font = Font::from_bytes(bytes, settings).map_err(|e| ShotError::Font(e.to_string()))?;
        Ok(Self {
            font,
            logical_px: font_size as f32,
            device_px: (font_size * dpi / POINTS_PER_INCH) as f32,
            glyphs: Mutex::new(HashMap::new()),
        })
    }

    /// Load the configured font, or the system monospace face
    pub fn from_config(config: &RenderConfig) -> Result<Self> {
        let (bytes, index) = match &config.font_path {
            Some(path) => {
                tracing::debug!("Loading font from {}", path.display());
                (load_font_bytes(path)?, 0)
            }
            None => system_monospace()?,
        };
        Self::from_bytes(&bytes, index, config.font_size, config.dpi)
    }

    /// Pixel size glyphs are drawn at
    pub fn device_px(&self) -> f32 {
        self.device_px
    }

    fn glyph(&self, c: char) -> Arc<RasterizedGlyph> {
        let mut cache = self.glyphs.lock().unwrap_or_else(PoisonError::into_inner);
        Arc::clone(cache.entry(c).or_insert_with(|| {
            let (metrics, coverage) = self.font.rasterize(c, self.device_px);
            Arc::new(RasterizedGlyph { metrics, coverage })
        }))
    }

    fn kern(&self, prev: Option<char>, c: char, px: f32) -> f32 {
        prev.and_then(|p| self.font.horizontal_kern(p, c, px))
            .unwrap_or(0.0)
    }
}

/// Control characters (a stray `\r` from CRLF input) take no space and draw nothing.
fn printable(text: &str) -> impl Iterator<Item = char> + '_ {
    text.chars().filter(|c| !c.is_control())
}

impl TextMetrics for FontFace {
    fn measure(&self, text: &str) -> Result<f64> {
        let mut width = 0.0f32;
        let mut prev = None;
        for c in printable(text) {
            width += self.kern(prev, c, self.logical_px);
            width += self.font.metrics(c, self.logical_px).advance_width;
            prev = Some(c);
        }
        if !width.is_finite() {
            return Err(ShotError::Metrics(format!("non-finite width for {text:?}")));
        }
        Ok(f64::from(width.ceil()))
    }
}

impl GlyphRenderer for FontFace {
    fn draw_text(&self, text: &str, origin: Point, color: Color, canvas: &mut Canvas) {
        let baseline = origin.y.round();
        let mut x = origin.x.to_f32();
        let mut prev = None;

        for c in printable(text) {
            x += self.kern(prev, c, self.device_px);
            let glyph = self.glyph(c);
            let m = &glyph.metrics;
            // fontdue reports ymin as the offset of the bitmap bottom from the baseline, y-up
            let left = x.round() as i32 + m.xmin;
            let top = baseline - m.height as i32 - m.ymin;

            for (row, line) in glyph.coverage.chunks(m.width.max(1)).enumerate() {
                for (col, &cov) in line.iter().enumerate() {
                    if cov == 0 {
                        continue;
                    }
                    let alpha = f32::from(cov) / 255.0 * color.a;
                    canvas.blend_pixel(left + col as i32, top + row as i32, color.with_alpha(alpha));
                }
            }

            x += m.advance_width;
            prev = Some(c);
        }
    }
}
