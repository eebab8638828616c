//! Stop word filter.
//!
//! Removed tokens do not vanish without a trace: their position increments
//! are added to the next surviving token, so phrase and proximity matching
//! downstream still sees the gap.

use std::sync::Arc;

use crate::analysis::token::{Token, TokenStream};
use crate::analysis::token_filter::Filter;
use crate::analysis::word_set::WordSet;
use crate::error::Result;

/// Removes tokens whose text is in a stop set.
///
/// Membership uses the set's own case policy. The keyword flag is ignored:
/// an excluded word that is also a stop word is still removed.
#[derive(Debug, Clone)]
pub struct StopFilter {
    stop_words: Arc<WordSet>,
}

impl StopFilter {
    pub fn new(stop_words: Arc<WordSet>) -> Self {
        StopFilter { stop_words }
    }

    pub fn stop_words(&self) -> &WordSet {
        &self.stop_words
    }
}

impl Filter for StopFilter {
    fn filter(&self, tokens: TokenStream) -> Result<TokenStream> {
        Ok(Box::new(StopIter {
            inner: tokens,
            stop_words: Arc::clone(&self.stop_words),
        }))
    }

    fn name(&self) -> &'static str {
        "stop"
    }
}

struct StopIter {
    inner: TokenStream,
    stop_words: Arc<WordSet>,
}

impl Iterator for StopIter {
    type Item = Token;

    fn next(&mut self) -> Option<Token> {
        let mut skipped = 0;
        for mut token in self.inner.by_ref() {
            if self.stop_words.contains(&token.text) {
                skipped += token.position_increment;
                continue;
            }
            token.position_increment += skipped;
            return Some(token);
        }
        None
    }
}
