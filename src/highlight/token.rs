//! Token stream produced from normalized source text

use syntect::easy::ScopeRangeIterator;
use syntect::parsing::{ParseState, ScopeStack, SyntaxReference, SyntaxSet};
use syntect::util::LinesWithEndings;

use crate::errors::Result;

/// Syntactic classification used to pick a color
///
/// Wraps the grammar's scope stack at the token's position. The empty stack
/// is plain text and always maps to the theme's default foreground.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Category(ScopeStack);

impl Category {
    /// Category for unclassified text
    pub fn plain() -> Self {
        Self::default()
    }

    pub fn from_stack(stack: ScopeStack) -> Self {
        Self(stack)
    }

    /// Parse a space separated scope list such as `"source.rust keyword.control"`
    pub fn parse(scopes: &str) -> Result<Self> {
        let stack = scopes.parse::<ScopeStack>()?;
        Ok(Self(stack))
    }

    pub fn is_plain(&self) -> bool {
        self.0.is_empty()
    }

    pub fn stack(&self) -> &ScopeStack {
        &self.0
    }
}

/// A run of text tagged with a category
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub text: String,
    pub category: Category,
}

impl Token {
    pub fn new(text: impl Into<String>, category: Category) -> Self {
        Self {
            text: text.into(),
            category,
        }
    }
}

/// Turns text into an ordered token sequence
///
/// Concatenating the text of every returned token must reproduce the input
/// exactly, newlines included.
pub trait TokenSource {
    fn tokenize(&self, text: &str) -> Result<Vec<Token>>;
}

/// Emits the whole input as one plain-text token
#[derive(Debug, Clone, Copy, Default)]
pub struct PlainText;

impl TokenSource for PlainText {
    fn tokenize(&self, text: &str) -> Result<Vec<Token>> {
        Ok(vec![Token::new(text, Category::plain())])
    }
}

/// Tokenizes with a syntect grammar
pub struct GrammarTokenizer<'a> {
    syntaxes: &'a SyntaxSet,
    syntax: &'a SyntaxReference,
}

impl<'a> GrammarTokenizer<'a> {
    pub fn new(syntaxes: &'a SyntaxSet, syntax: &'a SyntaxReference) -> Self {
        Self { syntaxes, syntax }
    }

    /// Grammar name, e.g. `"Rust"`
    pub fn name(&self) -> &str {
        &self.syntax.name
    }
}

impl TokenSource for GrammarTokenizer<'_> {
    fn tokenize(&self, text: &str) -> Result<Vec<Token>> {
        let mut state = ParseState::new(self.syntax);
        let mut stack = ScopeStack::new();
        let mut tokens = Vec::new();

        for line in LinesWithEndings::from(text) {
            let ops = state.parse_line(line, self.syntaxes)?;
            for (range, op) in ScopeRangeIterator::new(&ops, line) {
                stack.apply(op)?;
                if range.is_empty() {
                    continue;
                }
                let piece = &line[range];
                tokens.push(Token::new(piece, Category::from_stack(stack.clone())));
            }
        }

        Ok(tokens)
    }
}
