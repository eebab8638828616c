//! Unicode word-boundary tokenizer.
//!
//! Segments text with the UAX#29 word-break algorithm and keeps the segments
//! that contain at least one letter or digit. In
//! [`BoundaryRules::LegacyUax29`] mode the segments are re-split to match the
//! Unicode 6.1 class assignments, where quotation marks were never
//! word-internal: `"` always separates, and a trailing `'` is not part of
//! the word.

use unicode_segmentation::UnicodeSegmentation;

use crate::analysis::token::TokenStream;
use crate::analysis::tokenizer::{DEFAULT_MAX_TOKEN_LENGTH, Span, Tokenizer, spans_to_tokens};
use crate::analysis::version::BoundaryRules;
use crate::error::{Result, StemmaError};

/// Tokenizer based on Unicode word boundaries.
#[derive(Debug, Clone)]
pub struct StandardTokenizer {
    rules: BoundaryRules,
    max_token_length: usize,
}

impl StandardTokenizer {
    /// Create a tokenizer with the current boundary rules.
    pub fn new() -> Self {
        StandardTokenizer {
            rules: BoundaryRules::Uax29,
            max_token_length: DEFAULT_MAX_TOKEN_LENGTH,
        }
    }

    /// Create a tokenizer with the given boundary rules.
    ///
    /// [`BoundaryRules::LetterRuns`] belongs to
    /// [`LetterTokenizer`](super::LetterTokenizer) and is rejected here.
    pub fn with_rules(rules: BoundaryRules) -> Result<Self> {
        if rules == BoundaryRules::LetterRuns {
            return Err(StemmaError::invalid_config(
                "StandardTokenizer does not implement letter-run boundaries",
            ));
        }
        Ok(StandardTokenizer {
            rules,
            max_token_length: DEFAULT_MAX_TOKEN_LENGTH,
        })
    }

    /// Set the longest token emitted. Longer words are dropped.
    pub fn max_token_length(mut self, max_token_length: usize) -> Self {
        self.max_token_length = max_token_length;
        self
    }

    pub fn rules(&self) -> BoundaryRules {
        self.rules
    }

    fn spans<'a>(&self, text: &'a str) -> Vec<Span<'a>> {
        let mut spans = Vec::new();
        // Codepoint offset of byte position `byte_pos`, advanced incrementally.
        let mut byte_pos = 0;
        let mut char_pos = 0;

        for (start, word) in text.unicode_word_indices() {
            char_pos += text[byte_pos..start].chars().count();
            byte_pos = start;

            match self.rules {
                BoundaryRules::LegacyUax29 => {
                    let mut piece_start = char_pos;
                    for piece in word.split('"') {
                        let len = piece.chars().count();
                        let trimmed = piece.trim_end_matches('\'');
                        if trimmed.chars().any(char::is_alphanumeric) {
                            spans.push(Span {
                                text: trimmed,
                                start: piece_start,
                                end: piece_start + trimmed.chars().count(),
                            });
                        }
                        // Skip the piece and the quote that ended it.
                        piece_start += len + 1;
                    }
                }
                _ => {
                    let len = word.chars().count();
                    spans.push(Span {
                        text: word,
                        start: char_pos,
                        end: char_pos + len,
                    });
                }
            }
        }
        spans
    }
}

impl Default for StandardTokenizer {
    fn default() -> Self {
        Self::new()
    }
}

impl Tokenizer for StandardTokenizer {
    fn tokenize(&self, text: &str) -> Result<TokenStream> {
        let tokens = spans_to_tokens(self.spans(text), self.max_token_length);
        Ok(Box::new(tokens.into_iter()))
    }

    fn name(&self) -> &'static str {
        "standard"
    }
}
