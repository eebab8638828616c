//! Lowercase filter.

use crate::analysis::token::TokenStream;
use crate::analysis::token_filter::Filter;
use crate::error::Result;

/// Converts token text to lowercase.
#[derive(Debug, Clone, Default)]
pub struct LowercaseFilter;

impl LowercaseFilter {
    pub fn new() -> Self {
        LowercaseFilter
    }
}

impl Filter for LowercaseFilter {
    fn filter(&self, tokens: TokenStream) -> Result<TokenStream> {
        Ok(Box::new(tokens.map(|mut token| {
            let lower = token.text.to_lowercase();
            if lower != token.text {
                token.text = lower;
            }
            token
        })))
    }

    fn name(&self) -> &'static str {
        "lowercase"
    }
}
