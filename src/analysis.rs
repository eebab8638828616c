//! Text analysis module for Stemma.
//!
//! Converts raw text into normalized index terms:
//!
//! - **Tokenizers**: Break text into word tokens with codepoint offsets
//! - **Token Filters**: Lowercase, normalize, mark keywords, drop stop words, stem
//! - **Rule tables**: Declarative affix rules driving the stemmers
//! - **Analyzers**: Fixed per-language chains, gated by a compatibility version
//!
//! # Architecture
//!
//! ```text
//! Text → Tokenizer → Token Stream → Token Filters → Analyzed Tokens
//! ```
//!
//! # Examples
//!
//! ```
//! use stemma::analysis::analyzer::Analyzer;
//! use stemma::analysis::analyzer::swedish::SwedishAnalyzer;
//!
//! let analyzer = SwedishAnalyzer::new().unwrap();
//! let tokens: Vec<_> = analyzer.analyze("Jaktkarlarne och jaktkarlens").unwrap().collect();
//!
//! assert_eq!(tokens.len(), 2);
//! assert_eq!(tokens[0].text, "jaktkarl");
//! assert_eq!(tokens[1].text, "jaktkarl");
//! assert_eq!(tokens[1].position_increment, 2);
//! ```

pub mod analyzer;
pub mod normalizer;
pub mod rule;
pub mod stemmer;
pub mod token;
pub mod token_filter;
pub mod tokenizer;
pub mod version;
pub mod word_set;

// Re-exports
pub use analyzer::{Analyzer, ArabicAnalyzer, PipelineAnalyzer, SwedishAnalyzer};
pub use token::{Token, TokenStream};
pub use token_filter::Filter as TokenFilter;
pub use tokenizer::Tokenizer;
pub use version::Version;
pub use word_set::{WordListFormat, WordSet};
