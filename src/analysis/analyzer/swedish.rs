//! Swedish analyzer.
//!
//! ```text
//! Tokenizer → Lowercase → [Keyword Marker] → Stop Words → Swedish Stemmer
//! ```

use std::sync::Arc;

use lazy_static::lazy_static;

use crate::analysis::analyzer::Analyzer;
use crate::analysis::analyzer::pipeline::{PipelineAnalyzer, tokenizer_for};
use crate::analysis::stemmer::SwedishStemmer;
use crate::analysis::token::TokenStream;
use crate::analysis::token_filter::{KeywordMarkerFilter, LowercaseFilter, StemFilter, StopFilter};
use crate::analysis::tokenizer::DEFAULT_MAX_TOKEN_LENGTH;
use crate::analysis::version::Version;
use crate::analysis::word_set::{WordListFormat, WordSet};
use crate::error::Result;

lazy_static! {
    static ref DEFAULT_STOP_SET: Arc<WordSet> = Arc::new(WordSet::parse(
        include_str!("../../../resources/swedish_stopwords.txt"),
        WordListFormat::Snowball,
        true,
    ));
}

/// Analyzer for Swedish text.
#[derive(Debug, Clone)]
pub struct SwedishAnalyzer {
    inner: PipelineAnalyzer,
    version: Version,
    stop_words: Arc<WordSet>,
    stem_exclusions: Arc<WordSet>,
}

impl SwedishAnalyzer {
    /// Create an analyzer with the built-in stop words and no exclusions.
    pub fn new() -> Result<Self> {
        Self::builder().build()
    }

    /// Create an analyzer with custom stop words.
    pub fn with_stop_words(stop_words: WordSet) -> Result<Self> {
        Self::builder().stop_words(stop_words).build()
    }

    /// Create an analyzer with custom stop words and a stem exclusion set.
    pub fn with_stop_words_and_exclusions(
        stop_words: WordSet,
        stem_exclusions: WordSet,
    ) -> Result<Self> {
        Self::builder()
            .stop_words(stop_words)
            .stem_exclusions(stem_exclusions)
            .build()
    }

    pub fn builder() -> SwedishAnalyzerBuilder {
        SwedishAnalyzerBuilder::default()
    }

    pub fn default_stop_set() -> Arc<WordSet> {
        Arc::clone(&DEFAULT_STOP_SET)
    }

    pub fn version(&self) -> Version {
        self.version
    }

    pub fn stop_words(&self) -> &WordSet {
        &self.stop_words
    }

    pub fn stem_exclusions(&self) -> &WordSet {
        &self.stem_exclusions
    }

    pub fn pipeline(&self) -> &PipelineAnalyzer {
        &self.inner
    }
}

impl Analyzer for SwedishAnalyzer {
    fn analyze(&self, text: &str) -> Result<TokenStream> {
        self.inner.analyze(text)
    }

    fn name(&self) -> &'static str {
        "swedish"
    }
}

/// Builder for [`SwedishAnalyzer`].
#[derive(Debug, Clone)]
pub struct SwedishAnalyzerBuilder {
    stop_words: Option<Arc<WordSet>>,
    stem_exclusions: Arc<WordSet>,
    version: Version,
    max_token_length: usize,
}

impl Default for SwedishAnalyzerBuilder {
    fn default() -> Self {
        SwedishAnalyzerBuilder {
            stop_words: None,
            stem_exclusions: Arc::new(WordSet::empty()),
            version: Version::default(),
            max_token_length: DEFAULT_MAX_TOKEN_LENGTH,
        }
    }
}

impl SwedishAnalyzerBuilder {
    /// Replace the built-in stop words.
    pub fn stop_words(mut self, stop_words: WordSet) -> Self {
        self.stop_words = Some(Arc::new(stop_words));
        self
    }

    /// Words that must not be stemmed.
    pub fn stem_exclusions(mut self, stem_exclusions: WordSet) -> Self {
        self.stem_exclusions = Arc::new(stem_exclusions);
        self
    }

    pub fn version(mut self, version: Version) -> Self {
        self.version = version;
        self
    }

    pub fn max_token_length(mut self, max_token_length: usize) -> Self {
        self.max_token_length = max_token_length;
        self
    }

    pub fn build(self) -> Result<SwedishAnalyzer> {
        let profile = self.version.profile();
        let stop_words = self.stop_words.unwrap_or_else(SwedishAnalyzer::default_stop_set);
        let stem_exclusions = self.stem_exclusions;

        let mut inner = PipelineAnalyzer::new(tokenizer_for(
            profile.swedish_boundaries,
            self.max_token_length,
        )?)
        .add_filter(Arc::new(LowercaseFilter::new()));
        if !stem_exclusions.is_empty() {
            inner = inner.add_filter(Arc::new(KeywordMarkerFilter::new(Arc::clone(
                &stem_exclusions,
            ))));
        }
        let inner = inner
            .add_filter(Arc::new(StopFilter::new(Arc::clone(&stop_words))))
            .add_filter(Arc::new(StemFilter::new(Arc::new(SwedishStemmer::new()))));

        log::debug!(
            "assembled swedish analyzer: version={} boundaries={:?} stop_words={} exclusions={} stages={:?}",
            self.version,
            profile.swedish_boundaries,
            stop_words.len(),
            stem_exclusions.len(),
            inner.stage_names()
        );

        Ok(SwedishAnalyzer {
            inner,
            version: self.version,
            stop_words,
            stem_exclusions,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::StemmaError;

    fn terms(analyzer: &SwedishAnalyzer, text: &str) -> Vec<String> {
        analyzer.analyze(text).unwrap().map(|t| t.text).collect()
    }

    #[test]
    fn test_default_stop_set_is_bundled() {
        let set = SwedishAnalyzer::default_stop_set();
        assert!(set.contains("och"));
        assert!(set.contains("så"));
        assert!(set.contains("vilkas"));
        assert!(!set.contains("and"));
        assert!(!set.contains("|"));
    }

    #[test]
    fn test_default_set_shared() {
        let a = SwedishAnalyzer::new().unwrap();
        let b = SwedishAnalyzer::new().unwrap();
        assert!(std::ptr::eq(a.stop_words(), b.stop_words()));
    }

    #[test]
    fn test_lowercases_before_stemming() {
        let analyzer = SwedishAnalyzer::new().unwrap();
        assert_eq!(terms(&analyzer, "Jaktkarlarne OCH Jaktkarlens"), vec!["jaktkarl", "jaktkarl"]);
    }

    #[test]
    fn test_stage_order() {
        let analyzer = SwedishAnalyzer::with_stop_words_and_exclusions(
            WordSet::empty(),
            WordSet::new(["jaktkarlarne"], false),
        )
        .unwrap();
        assert_eq!(
            analyzer.pipeline().stage_names(),
            vec!["standard", "lowercase", "keyword_marker", "stop", "stem"]
        );
    }

    #[test]
    fn test_zero_max_token_length_rejected() {
        let err = SwedishAnalyzer::builder().max_token_length(0).build().unwrap_err();
        assert!(matches!(err, StemmaError::InvalidConfig(_)));
    }

    #[test]
    fn test_oldest_version_keeps_word_boundaries() {
        let analyzer = SwedishAnalyzer::builder().version(Version::V3_0).build().unwrap();
        assert_eq!(analyzer.pipeline().tokenizer().name(), "standard");
    }
}
