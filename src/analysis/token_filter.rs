//! Token filter implementations for token transformation.
//!
//! Each filter implements one narrow capability over a token stream. Filters
//! are lazy: they wrap the incoming iterator and do their work as tokens are
//! pulled.
//!
//! # Available Filters
//!
//! - [`lowercase::LowercaseFilter`] - Converts tokens to lowercase
//! - [`arabic_normalization::ArabicNormalizationFilter`] - Arabic orthographic normalization
//! - [`keyword_marker::KeywordMarkerFilter`] - Protects excluded words from stemming
//! - [`stop::StopFilter`] - Removes stop words
//! - [`stem::StemFilter`] - Reduces words to their stem form
//!
//! # Filter Chaining
//!
//! ```text
//! Tokenizer → Lowercase → [Arabic Normalization] → Keyword Marker → Stop Words → Stemmer
//! ```
//!
//! # Examples
//!
//! ```
//! use stemma::analysis::token::Token;
//! use stemma::analysis::token_filter::Filter;
//! use stemma::analysis::token_filter::lowercase::LowercaseFilter;
//!
//! let filter = LowercaseFilter::new();
//! let tokens = vec![Token::new("Hello", 0, 5), Token::new("WORLD", 6, 11)];
//! let filtered: Vec<_> = filter
//!     .filter(Box::new(tokens.into_iter()))
//!     .unwrap()
//!     .collect();
//!
//! assert_eq!(filtered[0].text, "hello");
//! assert_eq!(filtered[1].text, "world");
//! ```

use crate::analysis::token::TokenStream;
use crate::error::Result;

/// Trait for filters that transform token streams.
///
/// The trait requires `Send + Sync` so one configured filter can serve
/// concurrent analysis calls.
pub trait Filter: Send + Sync {
    /// Apply this filter to a token stream.
    fn filter(&self, tokens: TokenStream) -> Result<TokenStream>;

    /// Get the name of this filter (for debugging and configuration).
    fn name(&self) -> &'static str;
}

pub mod arabic_normalization;
pub mod keyword_marker;
pub mod lowercase;
pub mod stem;
pub mod stop;

pub use arabic_normalization::ArabicNormalizationFilter;
pub use keyword_marker::KeywordMarkerFilter;
pub use lowercase::LowercaseFilter;
pub use stem::StemFilter;
pub use stop::StopFilter;
