//! Letter-run tokenizer.
//!
//! A token is a maximal run of alphabetic codepoints and combining marks, so
//! vowel signs and other non-spacing marks never split a word. Digits and
//! punctuation separate tokens.

use unicode_normalization::char::is_combining_mark;

use crate::analysis::token::TokenStream;
use crate::analysis::tokenizer::{DEFAULT_MAX_TOKEN_LENGTH, Span, Tokenizer, spans_to_tokens};
use crate::error::Result;

/// Tokenizer emitting runs of letters.
#[derive(Debug, Clone)]
pub struct LetterTokenizer {
    max_token_length: usize,
}

impl LetterTokenizer {
    pub fn new() -> Self {
        LetterTokenizer {
            max_token_length: DEFAULT_MAX_TOKEN_LENGTH,
        }
    }

    /// Set the longest token emitted. Longer runs are dropped.
    pub fn max_token_length(mut self, max_token_length: usize) -> Self {
        self.max_token_length = max_token_length;
        self
    }

    fn is_token_char(c: char) -> bool {
        c.is_alphabetic() || is_combining_mark(c)
    }

    fn spans<'a>(text: &'a str) -> Vec<Span<'a>> {
        let mut spans = Vec::new();
        let mut run: Option<(usize, usize)> = None;
        let mut char_pos = 0;

        for (byte_pos, c) in text.char_indices() {
            match (Self::is_token_char(c), run) {
                (true, None) => run = Some((byte_pos, char_pos)),
                (false, Some((byte_start, char_start))) => {
                    spans.push(Span {
                        text: &text[byte_start..byte_pos],
                        start: char_start,
                        end: char_pos,
                    });
                    run = None;
                }
                _ => {}
            }
            char_pos += 1;
        }
        if let Some((byte_start, char_start)) = run {
            spans.push(Span {
                text: &text[byte_start..],
                start: char_start,
                end: char_pos,
            });
        }
        spans
    }
}

impl Default for LetterTokenizer {
    fn default() -> Self {
        Self::new()
    }
}

impl Tokenizer for LetterTokenizer {
    fn tokenize(&self, text: &str) -> Result<TokenStream> {
        let tokens = spans_to_tokens(Self::spans(text), self.max_token_length);
        Ok(Box::new(tokens.into_iter()))
    }

    fn name(&self) -> &'static str {
        "letter"
    }
}
