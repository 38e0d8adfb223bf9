//! Theme provider and per-render theme binding

use std::path::Path;

use syntect::highlighting::{Highlighter, Theme, ThemeSet};

use super::token::Category;
use crate::canvas::Color;
use crate::config::DEFAULT_THEME;
use crate::errors::{Result, ShotError};

/// Maps a theme name to a resolved binding
///
/// Unknown names resolve to a fixed default theme instead of failing.
pub trait ThemeProvider {
    fn resolve(&self, name: &str) -> ThemeBinding;
}

/// Resolved colors for one render
#[derive(Debug, Clone)]
pub struct ThemeBinding {
    name: String,
    theme: Theme,
    background: Color,
    foreground: Color,
}

impl ThemeBinding {
    pub fn new(name: impl Into<String>, theme: Theme) -> Self {
        // Same fallbacks syntect's highlighter applies to unset settings.
        let background = theme
            .settings
            .background
            .map_or(Color::WHITE, Color::from);
        let foreground = theme
            .settings
            .foreground
            .map_or(Color::BLACK, Color::from);
        Self {
            name: name.into(),
            theme,
            background,
            foreground,
        }
    }

    /// Name the binding was resolved to
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn background(&self) -> Color {
        self.background
    }

    /// Color for categories the theme has no rule for
    pub fn foreground(&self) -> Color {
        self.foreground
    }

    /// Category lookup table for one draw pass
    pub fn palette(&self) -> Palette<'_> {
        Palette {
            highlighter: Highlighter::new(&self.theme),
            foreground: self.foreground,
        }
    }
}

/// Category to color mapping, borrowed from a [`ThemeBinding`]
pub struct Palette<'a> {
    highlighter: Highlighter<'a>,
    foreground: Color,
}

impl Palette<'_> {
    pub fn color_for(&self, category: &Category) -> Color {
        if category.is_plain() {
            return self.foreground;
        }
        let style = self.highlighter.style_for_stack(category.stack().as_slice());
        Color::from(style.foreground)
    }
}

/// Bundled syntect themes plus any loaded from a folder
pub struct ThemeCatalog {
    themes: ThemeSet,
}

impl ThemeCatalog {
    pub fn load_defaults() -> Self {
        Self {
            themes: ThemeSet::load_defaults(),
        }
    }

    /// Add every `.tmTheme` file found under `dir`
    pub fn add_from_folder(&mut self, dir: &Path) -> Result<()> {
        self.themes
            .add_from_folder(dir)
            .map_err(|e| ShotError::Config(format!("Failed to load themes from {}: {e}", dir.display())))?;
        tracing::debug!("Loaded themes from {}", dir.display());
        Ok(())
    }

    pub fn contains(&self, name: &str) -> bool {
        self.themes.themes.contains_key(name)
    }

    /// Theme names, sorted
    pub fn names(&self) -> Vec<String> {
        // BTreeMap keys are already ordered
        self.themes.themes.keys().cloned().collect()
    }
}

impl Default for ThemeCatalog {
    fn default() -> Self {
        Self::load_defaults()
    }
}

impl ThemeProvider for ThemeCatalog {
    fn resolve(&self, name: &str) -> ThemeBinding {
        if let Some(theme) = self.themes.themes.get(name) {
            return ThemeBinding::new(name, theme.clone());
        }
        tracing::warn!("Unknown theme {:?}, falling back to {}", name, DEFAULT_THEME);
        match self.themes.themes.get(DEFAULT_THEME) {
            Some(theme) => ThemeBinding::new(DEFAULT_THEME, theme.clone()),
            None => ThemeBinding::new(DEFAULT_THEME, Theme::default()),
        }
    }
}
