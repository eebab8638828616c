//! Arabic normalization filter.

use std::borrow::Cow;
use std::sync::Arc;

use crate::analysis::normalizer::ArabicNormalizer;
use crate::analysis::token::TokenStream;
use crate::analysis::token_filter::Filter;
use crate::error::Result;

/// Rewrites token text with an [`ArabicNormalizer`].
///
/// Applies to every token, keyword or not.
#[derive(Debug, Clone)]
pub struct ArabicNormalizationFilter {
    normalizer: Arc<ArabicNormalizer>,
}

impl ArabicNormalizationFilter {
    pub fn new(normalizer: Arc<ArabicNormalizer>) -> Self {
        ArabicNormalizationFilter { normalizer }
    }
}

impl Default for ArabicNormalizationFilter {
    fn default() -> Self {
        Self::new(Arc::new(ArabicNormalizer::default()))
    }
}

impl Filter for ArabicNormalizationFilter {
    fn filter(&self, tokens: TokenStream) -> Result<TokenStream> {
        let normalizer = Arc::clone(&self.normalizer);
        Ok(Box::new(tokens.map(move |mut token| {
            let normalized = match normalizer.normalize(&token.text) {
                Cow::Owned(text) => Some(text),
                Cow::Borrowed(_) => None,
            };
            if let Some(text) = normalized {
                token.text = text;
            }
            token
        })))
    }

    fn name(&self) -> &'static str {
        "arabic_normalization"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::token::Token;

    #[test]
    fn test_normalizes_and_keeps_offsets() {
        let tokens = vec![Token::new("أيمانكم", 11, 18), Token::new("English", 19, 26)];
        let result: Vec<_> = ArabicNormalizationFilter::default()
            .filter(Box::new(tokens.into_iter()))
            .unwrap()
            .collect();
        assert_eq!(result[0].text, "ايمانكم");
        assert_eq!((result[0].start_offset, result[0].end_offset), (11, 18));
        assert_eq!(result[1].text, "English");
    }

    #[test]
    fn test_keywords_are_normalized_too() {
        let tokens = vec![Token::new("كبيرة", 0, 5).with_keyword(true)];
        let result: Vec<_> = ArabicNormalizationFilter::default()
            .filter(Box::new(tokens.into_iter()))
            .unwrap()
            .collect();
        assert_eq!(result[0].text, "كبيره");
        assert!(result[0].keyword);
    }
}
