//! Stemmers reduce a surface form to its stem.
//!
//! Stemmers are driven by [`RuleTable`](crate::analysis::rule::RuleTable)s
//! and are wrapped into the pipeline by
//! [`StemFilter`](crate::analysis::token_filter::stem::StemFilter), which is
//! what honors the keyword flag.

pub mod arabic;
pub mod swedish;

pub use arabic::ArabicStemmer;
pub use swedish::SwedishStemmer;

/// Trait for word stemmers.
pub trait Stemmer: Send + Sync {
    /// Stem a single, already normalized and lowercased word.
    fn stem(&self, word: &str) -> String;

    /// Get the name of this stemmer (for debugging and configuration).
    fn name(&self) -> &'static str;
}
