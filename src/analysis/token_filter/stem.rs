//! Stem filter.

use std::sync::Arc;

use crate::analysis::stemmer::Stemmer;
use crate::analysis::token::TokenStream;
use crate::analysis::token_filter::Filter;
use crate::error::Result;

/// Replaces each token's text with its stem.
///
/// Tokens flagged as keywords are emitted unchanged.
#[derive(Clone)]
pub struct StemFilter {
    stemmer: Arc<dyn Stemmer>,
}

impl StemFilter {
    pub fn new(stemmer: Arc<dyn Stemmer>) -> Self {
        StemFilter { stemmer }
    }

    pub fn stemmer(&self) -> &dyn Stemmer {
        self.stemmer.as_ref()
    }
}

impl std::fmt::Debug for StemFilter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StemFilter")
            .field("stemmer", &self.stemmer.name())
            .finish()
    }
}

impl Filter for StemFilter {
    fn filter(&self, tokens: TokenStream) -> Result<TokenStream> {
        let stemmer = Arc::clone(&self.stemmer);
        Ok(Box::new(tokens.map(move |mut token| {
            if !token.keyword {
                token.text = stemmer.stem(&token.text);
            }
            token
        })))
    }

    fn name(&self) -> &'static str {
        "stem"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::stemmer::{ArabicStemmer, SwedishStemmer};
    use crate::analysis::token::Token;

    #[test]
    fn test_stems_non_keywords() {
        let filter = StemFilter::new(Arc::new(SwedishStemmer::new()));
        let tokens = vec![
            Token::new("jaktkarlarne", 0, 12).with_keyword(true),
            Token::new("jaktkarlens", 13, 24),
        ];
        let result: Vec<_> = filter.filter(Box::new(tokens.into_iter())).unwrap().collect();
        assert_eq!(result[0].text, "jaktkarlarne");
        assert_eq!(result[1].text, "jaktkarl");
        assert_eq!((result[1].start_offset, result[1].end_offset), (13, 24));
    }

    #[test]
    fn test_arabic() {
        let filter = StemFilter::new(Arc::new(ArabicStemmer::new()));
        let tokens = vec![Token::new("مشروبات", 0, 7)];
        let result: Vec<_> = filter.filter(Box::new(tokens.into_iter())).unwrap().collect();
        assert_eq!(result[0].text, "مشروب");
        assert_eq!(filter.stemmer().name(), "arabic");
    }
}
