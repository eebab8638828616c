//! Declarative analyzer configuration.
//!
//! An [`AnalyzerConfig`] names a language, where its word lists come from,
//! and a compatibility version. [`AnalyzerConfig::build`] resolves all of it
//! up front: word-list files are read, sets are normalized and the version
//! profile is fixed. Any failure surfaces there, never on first use.
//!
//! # Examples
//!
//! ```
//! use stemma::analysis::analyzer::Analyzer;
//! use stemma::config::AnalyzerConfig;
//!
//! let config = AnalyzerConfig::from_json(
//!     r#"{ "language": "swedish", "stem_exclusions": { "type": "inline", "words": ["jaktkarlarne"] } }"#,
//! )
//! .unwrap();
//! let analyzer = config.build().unwrap();
//! let terms: Vec<_> = analyzer
//!     .analyze("jaktkarlarne jaktkarlens")
//!     .unwrap()
//!     .map(|t| t.text)
//!     .collect();
//! assert_eq!(terms, vec!["jaktkarlarne", "jaktkarl"]);
//! ```

use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::analysis::analyzer::{Analyzer, ArabicAnalyzer, SwedishAnalyzer};
use crate::analysis::tokenizer::DEFAULT_MAX_TOKEN_LENGTH;
use crate::analysis::version::Version;
use crate::analysis::word_set::{WordListFormat, WordSet};
use crate::error::{Result, StemmaError};

/// Supported languages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Language {
    Arabic,
    Swedish,
}

impl Language {
    pub fn as_str(self) -> &'static str {
        match self {
            Language::Arabic => "arabic",
            Language::Swedish => "swedish",
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Language {
    type Err = StemmaError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "arabic" | "ar" => Ok(Language::Arabic),
            "swedish" | "sv" => Ok(Language::Swedish),
            other => Err(StemmaError::invalid_config(format!(
                "unknown language '{other}'"
            ))),
        }
    }
}

/// Where a word set comes from.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum WordSource {
    /// The language's built-in list. For stem exclusions this is empty.
    #[default]
    Default,
    /// An empty set.
    None,
    /// Words given directly.
    Inline { words: Vec<String> },
    /// A word-list file.
    File {
        path: PathBuf,
        #[serde(default)]
        format: WordListFormat,
    },
}

impl WordSource {
    fn none() -> Self {
        WordSource::None
    }

    /// Resolve the source. `Ok(None)` means "use the language default".
    fn resolve(&self, ignore_case: bool) -> Result<Option<WordSet>> {
        match self {
            WordSource::Default => Ok(None),
            WordSource::None => Ok(Some(WordSet::empty())),
            WordSource::Inline { words } => Ok(Some(WordSet::new(words, ignore_case))),
            WordSource::File { path, format } => {
                WordSet::load(path, *format, ignore_case).map(Some)
            }
        }
    }
}

fn default_true() -> bool {
    true
}

fn default_max_token_length() -> usize {
    DEFAULT_MAX_TOKEN_LENGTH
}

/// Configuration for a language analyzer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalyzerConfig {
    pub language: Language,
    #[serde(default)]
    pub stop_words: WordSource,
    #[serde(default = "default_true")]
    pub stop_words_ignore_case: bool,
    #[serde(default = "WordSource::none")]
    pub stem_exclusions: WordSource,
    #[serde(default)]
    pub exclusions_ignore_case: bool,
    #[serde(default)]
    pub version: Version,
    #[serde(default = "default_max_token_length")]
    pub max_token_length: usize,
}

impl AnalyzerConfig {
    /// A configuration with all defaults for `language`.
    pub fn new(language: Language) -> Self {
        AnalyzerConfig {
            language,
            stop_words: WordSource::Default,
            stop_words_ignore_case: true,
            stem_exclusions: WordSource::None,
            exclusions_ignore_case: false,
            version: Version::default(),
            max_token_length: DEFAULT_MAX_TOKEN_LENGTH,
        }
    }

    pub fn builder(language: Language) -> AnalyzerConfigBuilder {
        AnalyzerConfigBuilder {
            config: AnalyzerConfig::new(language),
        }
    }

    /// Parse a configuration from JSON.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Serialize this configuration to JSON.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Resolve the configuration into an immutable, shareable analyzer.
    pub fn build(&self) -> Result<Arc<dyn Analyzer>> {
        let stop_words = self.stop_words.resolve(self.stop_words_ignore_case)?;
        let stem_exclusions = self
            .stem_exclusions
            .resolve(self.exclusions_ignore_case)?
            .unwrap_or_default();

        log::debug!(
            "building {} analyzer (version {}, custom stop words: {})",
            self.language,
            self.version,
            stop_words.is_some()
        );

        let analyzer: Arc<dyn Analyzer> = match self.language {
            Language::Arabic => {
                let mut builder = ArabicAnalyzer::builder()
                    .stem_exclusions(stem_exclusions)
                    .version(self.version)
                    .max_token_length(self.max_token_length);
                if let Some(stop_words) = stop_words {
                    builder = builder.stop_words(stop_words);
                }
                Arc::new(builder.build()?)
            }
            Language::Swedish => {
                let mut builder = SwedishAnalyzer::builder()
                    .stem_exclusions(stem_exclusions)
                    .version(self.version)
                    .max_token_length(self.max_token_length);
                if let Some(stop_words) = stop_words {
                    builder = builder.stop_words(stop_words);
                }
                Arc::new(builder.build()?)
            }
        };
        Ok(analyzer)
    }
}

/// Builder for [`AnalyzerConfig`].
#[derive(Debug, Clone)]
pub struct AnalyzerConfigBuilder {
    config: AnalyzerConfig,
}

impl AnalyzerConfigBuilder {
    pub fn stop_words(mut self, source: WordSource) -> Self {
        self.config.stop_words = source;
        self
    }

    /// Inline stop words.
    pub fn stop_word_list<I, S>(self, words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.stop_words(WordSource::Inline {
            words: words.into_iter().map(Into::into).collect(),
        })
    }

    pub fn stop_words_ignore_case(mut self, ignore_case: bool) -> Self {
        self.config.stop_words_ignore_case = ignore_case;
        self
    }

    pub fn stem_exclusions(mut self, source: WordSource) -> Self {
        self.config.stem_exclusions = source;
        self
    }

    /// Inline stem exclusions.
    pub fn stem_exclusion_list<I, S>(self, words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.stem_exclusions(WordSource::Inline {
            words: words.into_iter().map(Into::into).collect(),
        })
    }

    pub fn exclusions_ignore_case(mut self, ignore_case: bool) -> Self {
        self.config.exclusions_ignore_case = ignore_case;
        self
    }

    pub fn version(mut self, version: Version) -> Self {
        self.config.version = version;
        self
    }

    pub fn max_token_length(mut self, max_token_length: usize) -> Self {
        self.config.max_token_length = max_token_length;
        self
    }

    pub fn build(self) -> AnalyzerConfig {
        self.config
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_json_defaults() {
        let config = AnalyzerConfig::from_json(r#"{ "language": "arabic" }"#).unwrap();
        assert_eq!(config, AnalyzerConfig::new(Language::Arabic));
        assert_eq!(config.stop_words, WordSource::Default);
        assert_eq!(config.stem_exclusions, WordSource::None);
        assert!(config.stop_words_ignore_case);
        assert!(!config.exclusions_ignore_case);
        assert_eq!(config.version, Version::Latest);
        assert_eq!(config.max_token_length, 255);
    }

    #[test]
    fn test_json_roundtrip_of_full_config() {
        let config = AnalyzerConfig::builder(Language::Swedish)
            .stop_word_list(["och"])
            .stem_exclusions(WordSource::File {
                path: PathBuf::from("exclusions.txt"),
                format: WordListFormat::Snowball,
            })
            .version(Version::V4_6)
            .build();
        let json = config.to_json().unwrap();
        assert!(json.contains("\"4.6\""));
        assert!(json.contains("\"snowball\""));
        assert_eq!(AnalyzerConfig::from_json(&json).unwrap(), config);
    }

    #[test]
    fn test_unknown_language_rejected() {
        assert!(AnalyzerConfig::from_json(r#"{ "language": "klingon" }"#).is_err());
        assert!("klingon".parse::<Language>().is_err());
        assert_eq!("SV".parse::<Language>().unwrap(), Language::Swedish);
    }

    #[test]
    fn test_missing_file_fails_at_build() {
        let config = AnalyzerConfig::builder(Language::Arabic)
            .stop_words(WordSource::File {
                path: PathBuf::from("/nonexistent/arabic_stop.txt"),
                format: WordListFormat::Plain,
            })
            .build();
        let err = config.build().err().unwrap();
        assert!(matches!(err, StemmaError::Io { .. }));
    }

    #[test]
    fn test_zero_max_token_length_rejected() {
        let config = AnalyzerConfig::builder(Language::Swedish)
            .max_token_length(0)
            .build();
        assert!(matches!(
            config.build().err().unwrap(),
            StemmaError::InvalidConfig(_)
        ));
    }

    #[test]
    fn test_build_selects_language() {
        let arabic = AnalyzerConfig::new(Language::Arabic).build().unwrap();
        assert_eq!(arabic.name(), "arabic");
        let swedish = AnalyzerConfig::new(Language::Swedish).build().unwrap();
        assert_eq!(swedish.name(), "swedish");
    }
}
