//! # Stemma
//!
//! Rule-driven text analysis for search: tokenization, orthographic
//! normalization, stop word removal and stemming for Arabic and Swedish.
//!
//! ## Features
//!
//! - Pure Rust implementation
//! - Declarative affix rule tables shared by all stemmers
//! - Lazy token streams with position increments preserved across removals
//! - Compatibility versions that reproduce historical tokenization
//! - Analyzers are immutable and `Send + Sync` once built
//!
//! ## Example
//!
//! ```
//! use stemma::{Analyzer, AnalyzerConfig, Language};
//!
//! let analyzer = AnalyzerConfig::new(Language::Arabic).build().unwrap();
//! let terms: Vec<_> = analyzer
//!     .analyze("أمريكيين امريكي")
//!     .unwrap()
//!     .map(|t| t.text)
//!     .collect();
//! assert_eq!(terms, vec!["امريك", "امريك"]);
//! ```

pub mod analysis;
pub mod config;
pub mod error;

// Re-exports for the public API
pub use analysis::analyzer::Analyzer;
pub use analysis::token::{Token, TokenStream};
pub use analysis::version::Version;
pub use analysis::word_set::{WordListFormat, WordSet};
pub use config::{AnalyzerConfig, AnalyzerConfigBuilder, Language, WordSource};
pub use error::{Result, StemmaError};

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
