//! Layout engine
//!
//! Measures normalized text, sizes the canvas, then walks the token stream
//! once, moving a fixed-point pen and handing each line fragment to the
//! glyph renderer.

use std::borrow::Cow;

use crate::canvas::{device_ceil, Canvas, Fixed, Point, MAX_DIMENSION};
use crate::config::RenderConfig;
use crate::errors::{Result, ShotError};
use crate::font::{GlyphRenderer, TextMetrics};
use crate::highlight::{Palette, Token};

/// Spaces a tab expands to
pub const TAB_WIDTH: usize = 4;

/// Replace every tab with [`TAB_WIDTH`] spaces
pub fn normalize_tabs(text: &str) -> Cow<'_, str> {
    if text.contains('\t') {
        Cow::Owned(text.replace('\t', &" ".repeat(TAB_WIDTH)))
    } else {
        Cow::Borrowed(text)
    }
}

/// Result of the measurement pass, in logical units
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Measurement {
    /// Number of lines, counting a trailing empty one
    pub lines: usize,
    /// Widest line
    pub content_width: f64,
    /// `lines * line_spacing * font_size`
    pub content_height: f64,
}

/// Canvas dimensions in device pixels
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CanvasSize {
    pub width: u32,
    pub height: u32,
}

/// Counters from one draw pass
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DrawStats {
    /// Fragments handed to the glyph renderer
    pub drawn: usize,
    /// Single-space fragments skipped
    pub suppressed: usize,
    /// Newlines crossed
    pub line_breaks: usize,
}

/// Pen position in device units
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cursor {
    pub x: Fixed,
    pub y: Fixed,
}

impl Cursor {
    #[inline]
    pub fn point(&self) -> Point {
        Point::new(self.x, self.y)
    }
}

/// Drives measurement and drawing for one configuration
pub struct LayoutEngine<'a, F: ?Sized> {
    config: &'a RenderConfig,
    font: &'a F,
}

impl<'a, F> LayoutEngine<'a, F>
where
    F: TextMetrics + GlyphRenderer + ?Sized,
{
    pub fn new(config: &'a RenderConfig, font: &'a F) -> Self {
        Self { config, font }
    }

    #[inline]
    fn to_device(&self, points: f64) -> Fixed {
        Fixed::from_points(points, self.config.dpi)
    }

    /// Measure every line of `text`
    pub fn measure(&self, text: &str) -> Result<Measurement> {
        let mut lines = 0;
        let mut content_width = 0.0f64;
        for line in text.split('\n') {
            content_width = content_width.max(self.font.measure(line)?);
            lines += 1;
        }
        Ok(Measurement {
            lines,
            content_width,
            content_height: lines as f64 * self.config.line_height(),
        })
    }

    /// Device size of a canvas holding `m` plus margins, rounded up
    ///
    /// Fails when either side is past [`MAX_DIMENSION`].
    pub fn canvas_size(&self, m: &Measurement) -> Result<CanvasSize> {
        let w = m.content_width + self.config.start_x * 2.0;
        let h = m.content_height + self.config.start_y * 2.0;
        Ok(CanvasSize {
            width: self.device_side(w, "width")?,
            height: self.device_side(h, "height")?,
        })
    }

    fn device_side(&self, points: f64, side: &str) -> Result<u32> {
        device_ceil(points, self.config.dpi)
            .map(|px| px.max(0) as u32)
            .filter(|px| *px <= MAX_DIMENSION)
            .ok_or_else(|| {
                ShotError::Canvas(format!(
                    "{side} of {points:.0}pt exceeds the {MAX_DIMENSION}px limit"
                ))
            })
    }

    /// Pen position for the first baseline
    pub fn start_cursor(&self) -> Cursor {
        let first_baseline = self.config.start_y + self.config.line_height();
        Cursor {
            x: Fixed::from_pixels(self.to_device(self.config.start_x).ceil()),
            y: Fixed::from_pixels(self.to_device(first_baseline).ceil()),
        }
    }

    /// Draw `tokens` in order onto `canvas`
    ///
    /// A fragment that is exactly one space is measured but not drawn.
    pub fn draw(&self, tokens: &[Token], palette: &Palette<'_>, canvas: &mut Canvas) -> Result<DrawStats> {
        let line_step = self.to_device(self.config.line_height());
        let mut pen = self.start_cursor();
        let mut advance = 0.0f64;
        let mut stats = DrawStats::default();

        for token in tokens {
            if token.text.is_empty() {
                continue;
            }
            let color = palette.color_for(&token.category);

            for (i, fragment) in token.text.split('\n').enumerate() {
                if i > 0 {
                    advance = 0.0;
                    pen.y += line_step;
                    stats.line_breaks += 1;
                }

                pen.x = self.to_device(self.config.start_x + advance);

                if fragment == " " {
                    stats.suppressed += 1;
                } else if !fragment.is_empty() {
                    self.font.draw_text(fragment, pen.point(), color, canvas);
                    stats.drawn += 1;
                }

                advance += self.font.measure(fragment)?;
            }
        }

        Ok(stats)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::canvas::Color;
    use crate::highlight::{Category, ThemeCatalog, ThemeProvider};
    use std::cell::RefCell;

    /// Every char is 10pt wide; records draw calls
    #[derive(Default)]
    struct Recorder {
        calls: RefCell<Vec<(String, Point)>>,
    }

    impl TextMetrics for Recorder {
        fn measure(&self, text: &str) -> Result<f64> {
            Ok(text.chars().count() as f64 * 10.0)
        }
    }

    impl GlyphRenderer for Recorder {
        fn draw_text(&self, text: &str, origin: Point, _color: Color, _canvas: &mut Canvas) {
            self.calls.borrow_mut().push((text.to_string(), origin));
        }
    }

    fn config() -> RenderConfig {
        RenderConfig {
            dpi: 72.0,
            ..RenderConfig::default()
        }
    }

    #[test]
    fn test_normalize_tabs() {
        assert_eq!(normalize_tabs("a\tb\n"), "a    b\n");
        assert!(matches!(normalize_tabs("no tabs"), Cow::Borrowed(_)));
    }

    #[test]
    fn test_measure_counts_trailing_empty_line() {
        let config = config();
        let font = Recorder::default();
        let engine = LayoutEngine::new(&config, &font);
        let m = engine.measure("a    b\n").unwrap();
        assert_eq!(m.lines, 2);
        assert_eq!(m.content_width, 60.0);
        assert_eq!(m.content_height, 48.0);
        assert_eq!(engine.measure("").unwrap().lines, 1);
    }

    #[test]
    fn test_canvas_size_adds_margins() {
        let config = config();
        let font = Recorder::default();
        let engine = LayoutEngine::new(&config, &font);
        let m = engine.measure("abc\nde").unwrap();
        // 30 + 2*16 wide, 2*24 + 2*16 tall
        assert_eq!(engine.canvas_size(&m).unwrap(), CanvasSize { width: 62, height: 80 });
    }

    #[test]
    fn test_canvas_size_rounds_up() {
        let config = RenderConfig {
            dpi: 120.0,
            ..RenderConfig::default()
        };
        let font = Recorder::default();
        let engine = LayoutEngine::new(&config, &font);
        let m = engine.measure("a").unwrap();
        // (10 + 32) * 120/72 = 70, (24 + 32) * 120/72 = 93.33
        assert_eq!(engine.canvas_size(&m).unwrap(), CanvasSize { width: 70, height: 94 });
    }

    #[test]
    fn test_oversized_content_is_canvas_error() {
        let config = RenderConfig::default();
        let font = Recorder::default();
        let engine = LayoutEngine::new(&config, &font);
        // past i32 in 26.6 on either axis, then just past the side limit
        for m in [
            Measurement { lines: 1, content_width: 22_000_000.0, content_height: 24.0 },
            Measurement { lines: 900_001, content_width: 10.0, content_height: 900_001.0 * 24.0 },
            Measurement { lines: 1, content_width: 30_000.0, content_height: 24.0 },
        ] {
            let err = engine.canvas_size(&m).unwrap_err();
            assert!(matches!(err, ShotError::Canvas(_)), "{err}");
        }
    }

    #[test]
    fn test_draw_positions_and_single_space() {
        let config = config();
        let font = Recorder::default();
        let engine = LayoutEngine::new(&config, &font);
        let binding = ThemeCatalog::load_defaults().resolve("base16-ocean.dark");
        let palette = binding.palette();
        let mut canvas = Canvas::with_background(10, 10, Color::BLACK).unwrap();

        let tokens = vec![
            Token::new("fn", Category::plain()),
            Token::new(" ", Category::plain()),
            Token::new("", Category::plain()),
            Token::new("main\n  x", Category::plain()),
        ];
        let stats = engine.draw(&tokens, &palette, &mut canvas).unwrap();
        assert_eq!(
            stats,
            DrawStats {
                drawn: 3,
                suppressed: 1,
                line_breaks: 1
            }
        );

        let calls = font.calls.borrow();
        let texts: Vec<&str> = calls.iter().map(|(t, _)| t.as_str()).collect();
        assert_eq!(texts, ["fn", "main", "  x"]);
        // "fn" at the margin, "main" after "fn" + suppressed space
        assert_eq!(calls[0].1.x, Fixed::from_pixels(16));
        assert_eq!(calls[1].1.x, Fixed::from_pixels(46));
        assert_eq!(calls[0].1.y, Fixed::from_pixels(40));
        // next line resets x and moves down one line height
        assert_eq!(calls[2].1.x, Fixed::from_pixels(16));
        assert_eq!(calls[2].1.y, Fixed::from_pixels(64));
    }

    #[test]
    fn test_longer_whitespace_is_drawn() {
        let config = config();
        let font = Recorder::default();
        let engine = LayoutEngine::new(&config, &font);
        let binding = ThemeCatalog::load_defaults().resolve("base16-ocean.dark");
        let mut canvas = Canvas::with_background(10, 10, Color::BLACK).unwrap();

        let tokens = vec![Token::new("  ", Category::plain()), Token::new(" \n ", Category::plain())];
        let stats = engine.draw(&tokens, &binding.palette(), &mut canvas).unwrap();
        assert_eq!(stats.drawn, 1);
        assert_eq!(stats.suppressed, 2);
    }
}
