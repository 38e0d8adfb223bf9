//! Language resolution
//!
//! Picks the grammar that tokenizes a source file, falling back to a single
//! plain-text token when nothing matches.

use std::path::Path;

use syntect::parsing::{SyntaxReference, SyntaxSet};

use super::token::{GrammarTokenizer, PlainText, Token, TokenSource};
use crate::errors::Result;

/// CLI value that requests auto-detection
pub const AUTO: &str = "auto";

const MATCH_PREFIX: &str = "match:";
const PLAIN_TEXT_GRAMMAR: &str = "Plain Text";

/// How the caller identified the language
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LanguageHint {
    /// Detect from a file name (and the content's first line)
    Auto { file_name: Option<String> },
    /// Grammar name or extension token such as `"Rust"` or `"py"`
    Named(String),
}

impl LanguageHint {
    /// Interpret a `--lang` value for the given input file
    ///
    /// `auto` detects from `file`; `match:<name>` detects from `<name>`.
    pub fn parse(value: &str, file: Option<&Path>) -> Self {
        let value = value.trim();
        if value.is_empty() || value.eq_ignore_ascii_case(AUTO) {
            return Self::Auto {
                file_name: file.map(|p| p.to_string_lossy().into_owned()),
            };
        }
        if let Some(name) = value.strip_prefix(MATCH_PREFIX) {
            return Self::Auto {
                file_name: Some(name.to_string()),
            };
        }
        Self::Named(value.to_string())
    }

    pub fn auto() -> Self {
        Self::Auto { file_name: None }
    }
}

/// The token source chosen for one render
pub enum Tokenizer<'a> {
    Grammar(GrammarTokenizer<'a>),
    Plain(PlainText),
}

impl Tokenizer<'_> {
    /// Display name of the chosen language
    pub fn name(&self) -> &str {
        match self {
            Tokenizer::Grammar(g) => g.name(),
            Tokenizer::Plain(_) => PLAIN_TEXT_GRAMMAR,
        }
    }

    pub fn is_plain(&self) -> bool {
        matches!(self, Tokenizer::Plain(_))
    }
}

impl TokenSource for Tokenizer<'_> {
    fn tokenize(&self, text: &str) -> Result<Vec<Token>> {
        match self {
            Tokenizer::Grammar(g) => g.tokenize(text),
            Tokenizer::Plain(p) => p.tokenize(text),
        }
    }
}

/// Resolve a hint into a tokenizer; never fails
pub fn resolve_language<'a>(
    syntaxes: &'a SyntaxSet,
    hint: &LanguageHint,
    text: &str,
) -> Tokenizer<'a> {
    let found = match hint {
        LanguageHint::Named(name) => find_by_name(syntaxes, name),
        LanguageHint::Auto { file_name } => file_name
            .as_deref()
            .and_then(|f| find_by_file_name(syntaxes, f))
            .or_else(|| syntaxes.find_syntax_by_first_line(text)),
    };

    match found {
        Some(syntax) if syntax.name != PLAIN_TEXT_GRAMMAR => {
            tracing::debug!("Resolved language {:?} to {}", hint, syntax.name);
            Tokenizer::Grammar(GrammarTokenizer::new(syntaxes, syntax))
        }
        _ => {
            if let LanguageHint::Named(name) = hint {
                tracing::warn!("Unknown language {:?}, rendering as plain text", name);
            } else {
                tracing::debug!("No grammar matched {:?}, rendering as plain text", hint);
            }
            Tokenizer::Plain(PlainText)
        }
    }
}

fn find_by_name<'a>(syntaxes: &'a SyntaxSet, name: &str) -> Option<&'a SyntaxReference> {
    syntaxes
        .find_syntax_by_name(name)
        .or_else(|| syntaxes.find_syntax_by_token(name))
        .or_else(|| syntaxes.find_syntax_by_extension(&name.to_ascii_lowercase()))
}

fn find_by_file_name<'a>(syntaxes: &'a SyntaxSet, file: &str) -> Option<&'a SyntaxReference> {
    let path = Path::new(file);
    let by_extension = path
        .extension()
        .and_then(|e| e.to_str())
        .and_then(|e| syntaxes.find_syntax_by_extension(e));
    by_extension.or_else(|| {
        path.file_name()
            .and_then(|n| n.to_str())
            .and_then(|n| syntaxes.find_syntax_by_extension(n))
    })
}

/// Names of every bundled grammar, sorted
pub fn language_names(syntaxes: &SyntaxSet) -> Vec<String> {
    let mut names: Vec<String> = syntaxes
        .syntaxes()
        .iter()
        .map(|s| s.name.clone())
        .collect();
    names.sort();
    names.dedup();
    names
}
