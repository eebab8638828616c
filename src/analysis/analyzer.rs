//! Analyzers: complete text-to-terms pipelines.
//!
//! An analyzer owns a tokenizer and an ordered list of filters, all
//! immutable once assembled, and can be shared across threads.
//!
//! ```text
//! Raw Text → Analyzer → Token Stream → Index
//!             ↓
//!         Tokenizer
//!             ↓
//!         Filter 1 … Filter N
//! ```
//!
//! # Available Implementations
//!
//! - [`PipelineAnalyzer`](pipeline::PipelineAnalyzer) - Custom tokenizer + filter chains
//! - [`ArabicAnalyzer`](arabic::ArabicAnalyzer) - Arabic normalization and light stemming
//! - [`SwedishAnalyzer`](swedish::SwedishAnalyzer) - Swedish suffix stemming
//!
//! # Examples
//!
//! ```
//! use stemma::analysis::analyzer::Analyzer;
//! use stemma::analysis::analyzer::arabic::ArabicAnalyzer;
//!
//! let analyzer = ArabicAnalyzer::new().unwrap();
//! let terms: Vec<_> = analyzer
//!     .analyze("الذين ملكت أيمانكم")
//!     .unwrap()
//!     .map(|t| t.text)
//!     .collect();
//!
//! assert_eq!(terms, vec!["ملكت", "ايمانكم"]);
//! ```

use crate::analysis::token::TokenStream;
use crate::error::Result;

pub mod arabic;
pub mod pipeline;
pub mod swedish;

pub use arabic::ArabicAnalyzer;
pub use pipeline::PipelineAnalyzer;
pub use swedish::SwedishAnalyzer;

/// Trait for analyzers that convert text into processed tokens.
///
/// # Thread Safety
///
/// The trait requires `Send + Sync`; an analyzer holds no per-call state, so
/// one instance serves any number of concurrent calls and analyzing the same
/// text twice yields identical streams.
pub trait Analyzer: Send + Sync {
    /// Analyze the given text and return a lazy stream of tokens.
    fn analyze(&self, text: &str) -> Result<TokenStream>;

    /// Get the name of this analyzer (for debugging and configuration).
    fn name(&self) -> &'static str;
}
