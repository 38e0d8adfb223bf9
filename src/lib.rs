//! # codeshot
//!
//! Renders source code into a syntax-highlighted raster image.
//!
//! Text is tab-normalized, measured, and drawn token by token onto a
//! background-filled canvas sized to fit it. Tokenizing, theming, glyph
//! metrics and glyph drawing are traits; the crate ships syntect and fontdue
//! implementations of them.
//!
//! ```no_run
//! use codeshot::{LanguageHint, RenderConfig, Renderer};
//!
//! let mut renderer = Renderer::new(RenderConfig::default())?;
//! let canvas = renderer.render("fn main() {}\n", &LanguageHint::Named("rs".into()), "InspiredGitHub")?;
//! codeshot::output::write_png(&canvas, "shot.png".as_ref())?;
//! # Ok::<(), codeshot::ShotError>(())
//! ```

pub mod canvas;
pub mod config;
pub mod errors;
pub mod font;
pub mod highlight;
pub mod layout;
pub mod output;
pub mod render;

pub use canvas::{Canvas, Color};
pub use config::RenderConfig;
pub use errors::{Result, ShotError};
pub use highlight::LanguageHint;
pub use render::Renderer;
