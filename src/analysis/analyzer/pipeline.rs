//! Pipeline analyzer: a tokenizer followed by a fixed list of filters.

use std::sync::Arc;

use crate::analysis::analyzer::Analyzer;
use crate::analysis::token::TokenStream;
use crate::analysis::token_filter::Filter;
use crate::analysis::tokenizer::{LetterTokenizer, StandardTokenizer, Tokenizer};
use crate::analysis::version::BoundaryRules;
use crate::error::{Result, StemmaError};

/// An analyzer composed from a tokenizer and filters.
///
/// # Examples
///
/// ```
/// use std::sync::Arc;
/// use stemma::analysis::analyzer::{Analyzer, PipelineAnalyzer};
/// use stemma::analysis::token_filter::LowercaseFilter;
/// use stemma::analysis::tokenizer::StandardTokenizer;
///
/// let analyzer = PipelineAnalyzer::new(Arc::new(StandardTokenizer::new()))
///     .add_filter(Arc::new(LowercaseFilter::new()));
/// let terms: Vec<_> = analyzer.analyze("English text.").unwrap().map(|t| t.text).collect();
/// assert_eq!(terms, vec!["english", "text"]);
/// ```
#[derive(Clone)]
pub struct PipelineAnalyzer {
    tokenizer: Arc<dyn Tokenizer>,
    filters: Vec<Arc<dyn Filter>>,
}

impl PipelineAnalyzer {
    pub fn new(tokenizer: Arc<dyn Tokenizer>) -> Self {
        PipelineAnalyzer {
            tokenizer,
            filters: Vec::new(),
        }
    }

    /// Append a filter to the chain.
    pub fn add_filter(mut self, filter: Arc<dyn Filter>) -> Self {
        self.filters.push(filter);
        self
    }

    pub fn tokenizer(&self) -> &dyn Tokenizer {
        self.tokenizer.as_ref()
    }

    pub fn filters(&self) -> &[Arc<dyn Filter>] {
        &self.filters
    }

    /// Names of the tokenizer and filters, in order.
    pub fn stage_names(&self) -> Vec<&'static str> {
        std::iter::once(self.tokenizer.name())
            .chain(self.filters.iter().map(|f| f.name()))
            .collect()
    }
}

impl std::fmt::Debug for PipelineAnalyzer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PipelineAnalyzer")
            .field("stages", &self.stage_names())
            .finish()
    }
}

impl Analyzer for PipelineAnalyzer {
    fn analyze(&self, text: &str) -> Result<TokenStream> {
        let mut tokens = self.tokenizer.tokenize(text)?;
        for filter in &self.filters {
            tokens = filter.filter(tokens)?;
        }
        Ok(tokens)
    }

    fn name(&self) -> &'static str {
        "pipeline"
    }
}

/// The tokenizer implementing the given boundary rules.
///
/// A `max_token_length` of zero would drop every token and is rejected.
pub(crate) fn tokenizer_for(
    rules: BoundaryRules,
    max_token_length: usize,
) -> Result<Arc<dyn Tokenizer>> {
    if max_token_length == 0 {
        return Err(StemmaError::invalid_config(
            "max_token_length must be greater than zero",
        ));
    }
    let tokenizer: Arc<dyn Tokenizer> = match rules {
        BoundaryRules::LetterRuns => {
            Arc::new(LetterTokenizer::new().max_token_length(max_token_length))
        }
        BoundaryRules::LegacyUax29 | BoundaryRules::Uax29 => Arc::new(
            StandardTokenizer::with_rules(rules)?.max_token_length(max_token_length),
        ),
    };
    Ok(tokenizer)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::token_filter::LowercaseFilter;

    #[test]
    fn test_stage_order() {
        let analyzer = PipelineAnalyzer::new(tokenizer_for(BoundaryRules::LetterRuns, 255).unwrap())
            .add_filter(Arc::new(LowercaseFilter::new()));
        assert_eq!(analyzer.stage_names(), vec!["letter", "lowercase"]);
    }

    #[test]
    fn test_zero_max_token_length_rejected() {
        for rules in [BoundaryRules::LetterRuns, BoundaryRules::LegacyUax29, BoundaryRules::Uax29] {
            let err = tokenizer_for(rules, 0).err().unwrap();
            assert!(matches!(err, StemmaError::InvalidConfig(_)));
        }
    }

    #[test]
    fn test_tokenizer_only() {
        let analyzer = PipelineAnalyzer::new(tokenizer_for(BoundaryRules::Uax29, 255).unwrap());
        let terms: Vec<_> = analyzer.analyze("Hello World").unwrap().map(|t| t.text).collect();
        assert_eq!(terms, vec!["Hello", "World"]);
    }
}
