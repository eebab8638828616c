//! Token representation for the analysis pipeline.
//!
//! A [`Token`] is the unit every stage of an analyzer consumes and produces.
//! Tokens are created fresh for each call to
//! [`Analyzer::analyze`](crate::analysis::analyzer::Analyzer::analyze) and
//! carry no state across calls.
//!
//! # Examples
//!
//! ```
//! use stemma::analysis::token::Token;
//!
//! let token = Token::new("hello", 0, 5);
//! assert_eq!(token.text, "hello");
//! assert_eq!(token.position_increment, 1);
//! assert!(!token.keyword);
//! ```

use serde::{Deserialize, Serialize};

/// A single unit of analyzed text.
///
/// Offsets are codepoint indices into the original input, with
/// `start_offset <= end_offset`. They always describe the source span, even
/// after normalization or stemming has rewritten `text`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Token {
    /// The (possibly rewritten) term text.
    pub text: String,

    /// Codepoint offset where the token starts in the original input.
    pub start_offset: usize,

    /// Codepoint offset one past the token's end in the original input.
    pub end_offset: usize,

    /// Number of positions this token advances past the previous one.
    ///
    /// Normally 1. Filters that drop tokens add the dropped increments to the
    /// next surviving token so phrase gaps stay visible downstream.
    pub position_increment: usize,

    /// Marks the token as exempt from stemming.
    #[serde(default)]
    pub keyword: bool,
}

impl Token {
    /// Create a new token with a position increment of 1.
    pub fn new<S: Into<String>>(text: S, start_offset: usize, end_offset: usize) -> Self {
        Token {
            text: text.into(),
            start_offset,
            end_offset,
            position_increment: 1,
            keyword: false,
        }
    }

    /// Set the position increment.
    pub fn with_position_increment(mut self, position_increment: usize) -> Self {
        self.position_increment = position_increment;
        self
    }

    /// Mark the token as a keyword.
    pub fn with_keyword(mut self, keyword: bool) -> Self {
        self.keyword = keyword;
        self
    }

    /// Number of codepoints in the token text.
    pub fn char_len(&self) -> usize {
        self.text.chars().count()
    }
}

/// A lazy stream of tokens.
///
/// Streams are consumed once. Analyzing the same text again produces a new,
/// independent stream.
pub type TokenStream = Box<dyn Iterator<Item = Token> + Send>;
