//! Render configuration
//!
//! Holds the typographic and layout settings a [`Renderer`](crate::Renderer)
//! caches across calls. Values come from defaults, an optional config file
//! (TOML or JSON) and command-line overrides, in that order.

use std::fs;
use std::path::{Path, PathBuf};

use directories::ProjectDirs;
use serde::{Deserialize, Serialize};

use crate::errors::{Result, ShotError};

/// Theme used when none is configured or the requested one is unknown
pub const DEFAULT_THEME: &str = "base16-ocean.dark";

const DEFAULT_FONT_SIZE: f64 = 16.0;
const DEFAULT_DPI: f64 = 120.0;
const DEFAULT_LINE_SPACING: f64 = 1.5;

/// Layout settings for one renderer instance
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderConfig {
    /// Font size in points
    pub font_size: f64,

    /// Device resolution used to convert points into pixels
    pub dpi: f64,

    /// Left/right margin in points
    pub start_x: f64,

    /// Top/bottom margin in points
    pub start_y: f64,

    /// Line height as a multiple of the font size
    pub line_spacing: f64,

    /// Theme name
    pub theme: String,

    /// Font file; the first system monospace face when unset
    pub font_path: Option<PathBuf>,

    /// Extra directory scanned for `.tmTheme` files
    pub theme_dir: Option<PathBuf>,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            font_size: DEFAULT_FONT_SIZE,
            dpi: DEFAULT_DPI,
            start_x: DEFAULT_FONT_SIZE,
            start_y: DEFAULT_FONT_SIZE,
            line_spacing: DEFAULT_LINE_SPACING,
            theme: DEFAULT_THEME.to_string(),
            font_path: None,
            theme_dir: None,
        }
    }
}

impl RenderConfig {
    /// Height of one line in points
    #[inline]
    pub fn line_height(&self) -> f64 {
        self.font_size * self.line_spacing
    }

    /// Check the invariants every render relies on
    pub fn validate(&self) -> Result<()> {
        if !(self.font_size.is_finite() && self.font_size > 0.0) {
            return Err(ShotError::Config(format!(
                "font_size must be > 0, got {}",
                self.font_size
            )));
        }
        if !(self.line_spacing.is_finite() && self.line_spacing > 0.0) {
            return Err(ShotError::Config(format!(
                "line_spacing must be > 0, got {}",
                self.line_spacing
            )));
        }
        if !(self.dpi.is_finite() && self.dpi > 0.0) {
            return Err(ShotError::Config(format!(
                "dpi must be > 0, got {}",
                self.dpi
            )));
        }
        for (name, value) in [("start_x", self.start_x), ("start_y", self.start_y)] {
            if !(value.is_finite() && value >= 0.0) {
                return Err(ShotError::Config(format!(
                    "{name} must be >= 0, got {value}"
                )));
            }
        }
        Ok(())
    }

    /// Configuration directory
    pub fn config_dir() -> Option<PathBuf> {
        ProjectDirs::from("com", "codeshot", "codeshot")
            .map(|dirs| dirs.config_dir().to_path_buf())
    }

    /// Default config file path
    pub fn config_path() -> Option<PathBuf> {
        Self::config_dir().map(|dir| dir.join("config.toml"))
    }
}

/// Load configuration
///
/// An explicit `path` must exist. Without one, the platform config file is
/// used when present and defaults otherwise.
pub fn load_config(path: Option<&Path>) -> Result<RenderConfig> {
    let path = match path {
        Some(p) => p.to_path_buf(),
        None => match RenderConfig::config_path() {
            Some(p) if p.exists() => p,
            _ => {
                tracing::debug!("No config file found, using defaults");
                return Ok(RenderConfig::default());
            }
        },
    };

    let content = fs::read_to_string(&path).map_err(|e| ShotError::io(&path, e))?;
    tracing::debug!("Loaded config from {}", path.display());
    parse_config(&path, &content)
}

/// Parse config contents, choosing the format from the file extension
fn parse_config(path: &Path, content: &str) -> Result<RenderConfig> {
    if path.extension().is_some_and(|e| e == "json") {
        serde_json::from_str(content)
            .map_err(|e| ShotError::ConfigParse(format!("Invalid JSON config: {e}")))
    } else {
        toml::from_str(content)
            .map_err(|e| ShotError::ConfigParse(format!("Invalid TOML config: {e}")))
    }
}
