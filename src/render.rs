//! Render entry point
//!
//! A [`Renderer`] owns the state worth keeping between calls: the parsed
//! font, the grammar and theme sets, and the currently bound theme. One
//! render at a time per instance; `render` takes `&mut self`.

use syntect::parsing::SyntaxSet;

use crate::canvas::Canvas;
use crate::config::RenderConfig;
use crate::errors::Result;
use crate::font::{FontFace, GlyphRenderer, TextMetrics};
use crate::highlight::{
    language_names, resolve_language, LanguageHint, ThemeBinding, ThemeCatalog, ThemeProvider,
    TokenSource,
};
use crate::layout::{normalize_tabs, LayoutEngine};

/// Turns source text into a highlighted canvas
pub struct Renderer<F = FontFace> {
    config: RenderConfig,
    font: F,
    syntaxes: SyntaxSet,
    themes: ThemeCatalog,
    binding: ThemeBinding,
}

impl Renderer<FontFace> {
    /// Build a renderer, loading the font named by `config`
    pub fn new(config: RenderConfig) -> Result<Self> {
        config.validate()?;
        let font = FontFace::from_config(&config)?;
        Self::with_font(config, font)
    }
}

impl<F> Renderer<F>
where
    F: TextMetrics + GlyphRenderer,
{
    /// Build a renderer around any metrics/glyph implementation
    pub fn with_font(config: RenderConfig, font: F) -> Result<Self> {
        config.validate()?;
        let mut themes = ThemeCatalog::load_defaults();
        if let Some(dir) = &config.theme_dir {
            themes.add_from_folder(dir)?;
        }
        let binding = themes.resolve(&config.theme);
        Ok(Self {
            config,
            font,
            syntaxes: SyntaxSet::load_defaults_newlines(),
            themes,
            binding,
        })
    }

    pub fn config(&self) -> &RenderConfig {
        &self.config
    }

    pub fn font(&self) -> &F {
        &self.font
    }

    /// Currently bound theme
    pub fn theme(&self) -> &ThemeBinding {
        &self.binding
    }

    /// Rebind the theme; unknown names fall back to the default theme
    pub fn change_theme(&mut self, name: &str) {
        if self.binding.name() == name {
            return;
        }
        self.binding = self.themes.resolve(name);
    }

    /// Render `source` with the given language and theme
    pub fn render(&mut self, source: &str, language: &LanguageHint, theme: &str) -> Result<Canvas> {
        self.change_theme(theme);
        self.render_current(source, language)
    }

    /// Render `source` with the currently bound theme
    pub fn render_current(&self, source: &str, language: &LanguageHint) -> Result<Canvas> {
        let text = normalize_tabs(source);
        let engine = LayoutEngine::new(&self.config, &self.font);

        let measurement = engine.measure(&text)?;
        let size = engine.canvas_size(&measurement)?;
        tracing::debug!(
            "Measured {} lines, content {:.1}x{:.1}pt, canvas {}x{}px",
            measurement.lines,
            measurement.content_width,
            measurement.content_height,
            size.width,
            size.height
        );
        let mut canvas = Canvas::with_background(size.width, size.height, self.binding.background())?;

        let tokenizer = resolve_language(&self.syntaxes, language, &text);
        let tokens = tokenizer.tokenize(&text)?;

        let palette = self.binding.palette();
        let stats = engine.draw(&tokens, &palette, &mut canvas)?;
        tracing::debug!(
            "Drew {} fragments ({} single spaces skipped, {} line breaks)",
            stats.drawn,
            stats.suppressed,
            stats.line_breaks
        );
        tracing::info!(
            "Rendered {} tokens as {} with theme {} into {}x{}",
            tokens.len(),
            tokenizer.name(),
            self.binding.name(),
            canvas.width(),
            canvas.height()
        );

        Ok(canvas)
    }

    /// Names of the available themes
    pub fn theme_names(&self) -> Vec<String> {
        self.themes.names()
    }

    /// Names of the available grammars
    pub fn language_names(&self) -> Vec<String> {
        language_names(&self.syntaxes)
    }
}
