//! Keyword marker filter.

use std::sync::Arc;

use crate::analysis::token::TokenStream;
use crate::analysis::token_filter::Filter;
use crate::analysis::word_set::WordSet;
use crate::error::Result;

/// Flags tokens found in an exclusion set as keywords.
///
/// Keywords pass through [`StemFilter`](super::StemFilter) unchanged. The
/// flag has no effect on [`StopFilter`](super::StopFilter). An already set
/// flag is never cleared.
#[derive(Debug, Clone)]
pub struct KeywordMarkerFilter {
    keywords: Arc<WordSet>,
}

impl KeywordMarkerFilter {
    pub fn new(keywords: Arc<WordSet>) -> Self {
        KeywordMarkerFilter { keywords }
    }

    pub fn keywords(&self) -> &WordSet {
        &self.keywords
    }
}

impl Filter for KeywordMarkerFilter {
    fn filter(&self, tokens: TokenStream) -> Result<TokenStream> {
        let keywords = Arc::clone(&self.keywords);
        Ok(Box::new(tokens.map(move |mut token| {
            if !token.keyword && keywords.contains(&token.text) {
                token.keyword = true;
            }
            token
        })))
    }

    fn name(&self) -> &'static str {
        "keyword_marker"
    }
}
