//! Syntax highlighting collaborators
//!
//! Token Source and Theme Provider, both backed by syntect's bundled
//! grammars and themes.

mod language;
mod theme;
mod token;

pub use language::{language_names, resolve_language, LanguageHint, Tokenizer, AUTO};
pub use theme::{Palette, ThemeBinding, ThemeCatalog, ThemeProvider};
pub use token::{Category, GrammarTokenizer, PlainText, Token, TokenSource};
