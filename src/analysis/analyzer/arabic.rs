//! Arabic analyzer.
//!
//! ```text
//! Tokenizer → Lowercase → Arabic Normalization → [Keyword Marker] → Stop Words → Arabic Stemmer
//! ```
//!
//! Stop words and stem exclusions are compared against normalized text, so
//! both sets are passed through the same normalizer when the analyzer is
//! built. Latin-script input is lowercased and stop-filtered like any other
//! text; none of the Arabic rules apply to it.

use std::sync::Arc;

use lazy_static::lazy_static;

use crate::analysis::analyzer::Analyzer;
use crate::analysis::analyzer::pipeline::{PipelineAnalyzer, tokenizer_for};
use crate::analysis::normalizer::ArabicNormalizer;
use crate::analysis::stemmer::ArabicStemmer;
use crate::analysis::token::TokenStream;
use crate::analysis::token_filter::{
    ArabicNormalizationFilter, KeywordMarkerFilter, LowercaseFilter, StemFilter, StopFilter,
};
use crate::analysis::tokenizer::DEFAULT_MAX_TOKEN_LENGTH;
use crate::analysis::version::Version;
use crate::analysis::word_set::{WordListFormat, WordSet};
use crate::error::Result;

lazy_static! {
    static ref DEFAULT_STOP_SET: Arc<WordSet> = Arc::new(WordSet::parse(
        include_str!("../../../resources/arabic_stopwords.txt"),
        WordListFormat::Plain,
        true,
    ));
}

/// Analyzer for Arabic text.
#[derive(Debug, Clone)]
pub struct ArabicAnalyzer {
    inner: PipelineAnalyzer,
    version: Version,
    stop_words: Arc<WordSet>,
    stem_exclusions: Arc<WordSet>,
}

impl ArabicAnalyzer {
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

    pub fn builder() -> ArabicAnalyzerBuilder {
        ArabicAnalyzerBuilder::default()
    }

    /// The built-in stop set, as written in the bundled list.
    pub fn default_stop_set() -> Arc<WordSet> {
        Arc::clone(&DEFAULT_STOP_SET)
    }

    pub fn version(&self) -> Version {
        self.version
    }

    /// The stop set in effect, after normalization.
    pub fn stop_words(&self) -> &WordSet {
        &self.stop_words
    }

    /// The stem exclusion set in effect, after normalization.
    pub fn stem_exclusions(&self) -> &WordSet {
        &self.stem_exclusions
    }

    pub fn pipeline(&self) -> &PipelineAnalyzer {
        &self.inner
    }
}

impl Analyzer for ArabicAnalyzer {
    fn analyze(&self, text: &str) -> Result<TokenStream> {
        self.inner.analyze(text)
    }

    fn name(&self) -> &'static str {
        "arabic"
    }
}

/// Builder for [`ArabicAnalyzer`].
#[derive(Debug, Clone)]
pub struct ArabicAnalyzerBuilder {
    stop_words: Option<WordSet>,
    stem_exclusions: WordSet,
    version: Version,
    max_token_length: usize,
}

impl Default for ArabicAnalyzerBuilder {
    fn default() -> Self {
        ArabicAnalyzerBuilder {
            stop_words: None,
            stem_exclusions: WordSet::empty(),
            version: Version::default(),
            max_token_length: DEFAULT_MAX_TOKEN_LENGTH,
        }
    }
}

impl ArabicAnalyzerBuilder {
    /// Replace the built-in stop words.
    pub fn stop_words(mut self, stop_words: WordSet) -> Self {
        self.stop_words = Some(stop_words);
        self
    }

    /// Words that must not be stemmed.
    pub fn stem_exclusions(mut self, stem_exclusions: WordSet) -> Self {
        self.stem_exclusions = stem_exclusions;
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

    pub fn build(self) -> Result<ArabicAnalyzer> {
        let profile = self.version.profile();
        let normalizer = Arc::new(ArabicNormalizer::new(profile.normalization));

        let normalize = |w: &str| normalizer.normalize(w).into_owned();
        let stop_words = match &self.stop_words {
            Some(words) => Arc::new(words.map(normalize)),
            None => Arc::new(DEFAULT_STOP_SET.map(normalize)),
        };
        let stem_exclusions = Arc::new(self.stem_exclusions.map(normalize));

        let mut inner = PipelineAnalyzer::new(tokenizer_for(
            profile.arabic_boundaries,
            self.max_token_length,
        )?)
        .add_filter(Arc::new(LowercaseFilter::new()))
        .add_filter(Arc::new(ArabicNormalizationFilter::new(Arc::clone(
            &normalizer,
        ))));
        if !stem_exclusions.is_empty() {
            inner = inner.add_filter(Arc::new(KeywordMarkerFilter::new(Arc::clone(
                &stem_exclusions,
            ))));
        }
        let inner = inner
            .add_filter(Arc::new(StopFilter::new(Arc::clone(&stop_words))))
            .add_filter(Arc::new(StemFilter::new(Arc::new(ArabicStemmer::new()))));

        log::debug!(
            "assembled arabic analyzer: version={} boundaries={:?} stop_words={} exclusions={} stages={:?}",
            self.version,
            profile.arabic_boundaries,
            stop_words.len(),
            stem_exclusions.len(),
            inner.stage_names()
        );

        Ok(ArabicAnalyzer {
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

    fn terms(analyzer: &ArabicAnalyzer, text: &str) -> Vec<String> {
        analyzer.analyze(text).unwrap().map(|t| t.text).collect()
    }

    #[test]
    fn test_default_stop_set_is_bundled() {
        let set = ArabicAnalyzer::default_stop_set();
        assert!(set.contains("الذين"));
        assert!(set.contains("ما"));
        assert!(!set.contains("the"));
    }

    #[test]
    fn test_stop_words_are_normalized() {
        let analyzer = ArabicAnalyzer::with_stop_words(WordSet::new(["أن"], true)).unwrap();
        assert!(analyzer.stop_words().contains("ان"));
        assert!(terms(&analyzer, "أن إن").is_empty());
    }

    #[test]
    fn test_stage_order() {
        let plain = ArabicAnalyzer::new().unwrap();
        assert_eq!(
            plain.pipeline().stage_names(),
            vec!["standard", "lowercase", "arabic_normalization", "stop", "stem"]
        );

        let excluding = ArabicAnalyzer::with_stop_words_and_exclusions(
            WordSet::empty(),
            WordSet::new(["ساهدهات"], false),
        )
        .unwrap();
        assert_eq!(
            excluding.pipeline().stage_names(),
            vec![
                "standard",
                "lowercase",
                "arabic_normalization",
                "keyword_marker",
                "stop",
                "stem"
            ]
        );
    }

    #[test]
    fn test_zero_max_token_length_rejected() {
        let err = ArabicAnalyzer::builder().max_token_length(0).build().unwrap_err();
        assert!(matches!(err, StemmaError::InvalidConfig(_)));
    }

    #[test]
    fn test_digit_folding_follows_version() {
        let latest = ArabicAnalyzer::new().unwrap();
        assert_eq!(terms(&latest, "٢٠١٤"), vec!["2014"]);

        let legacy = ArabicAnalyzer::builder().version(Version::V4_6).build().unwrap();
        assert_eq!(terms(&legacy, "٢٠١٤"), vec!["٢٠١٤"]);
    }

    #[test]
    fn test_letter_runs_for_oldest_version() {
        let analyzer = ArabicAnalyzer::builder().version(Version::V3_0).build().unwrap();
        assert_eq!(analyzer.pipeline().tokenizer().name(), "letter");
        assert_eq!(terms(&analyzer, "الكتاب2"), vec!["كتاب"]);
    }
}
