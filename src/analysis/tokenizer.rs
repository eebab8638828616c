//! Tokenizer implementations for text analysis.
//!
//! Tokenizers segment raw text into word tokens with codepoint offsets. They
//! do not change case; that is left to
//! [`LowercaseFilter`](crate::analysis::token_filter::lowercase::LowercaseFilter).
//!
//! Which tokenizer an analyzer uses, and with which boundary rules, is
//! decided once from the configured
//! [`Version`](crate::analysis::version::Version).

use crate::analysis::token::{Token, TokenStream};
use crate::error::Result;

/// Longest token, in codepoints, emitted by default.
pub const DEFAULT_MAX_TOKEN_LENGTH: usize = 255;

/// Trait for tokenizers that convert text into tokens.
pub trait Tokenizer: Send + Sync {
    /// Tokenize the given text into a stream of tokens.
    fn tokenize(&self, text: &str) -> Result<TokenStream>;

    /// Get the name of this tokenizer (for debugging and configuration).
    fn name(&self) -> &'static str;
}

pub mod letter;
pub mod standard;

pub use letter::LetterTokenizer;
pub use standard::StandardTokenizer;

/// A word found by a tokenizer, in codepoint offsets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Span<'a> {
    pub text: &'a str,
    pub start: usize,
    pub end: usize,
}

/// Turn spans into tokens, dropping those longer than `max_token_length`.
///
/// A dropped span still occupies a position: its increment is carried to the
/// next emitted token.
pub(crate) fn spans_to_tokens<'a, I>(spans: I, max_token_length: usize) -> Vec<Token>
where
    I: IntoIterator<Item = Span<'a>>,
{
    let mut tokens = Vec::new();
    let mut skipped = 0;
    for span in spans {
        if span.end - span.start > max_token_length {
            skipped += 1;
            continue;
        }
        tokens.push(
            Token::new(span.text, span.start, span.end).with_position_increment(1 + skipped),
        );
        skipped = 0;
    }
    tokens
}
