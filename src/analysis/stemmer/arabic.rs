//! Light stemmer for Arabic.
//!
//! Removes at most one definite-article or conjunction prefix, then walks the
//! suffix table once. Input must already be normalized (see
//! [`ArabicNormalizer`](crate::analysis::normalizer::ArabicNormalizer)).

use crate::analysis::rule::{Rule, RuleTable, Strategy};

use super::Stemmer;

/// Prefix rules, tried in order; the first that fires wins.
fn prefix_rules() -> Vec<Rule> {
    vec![
        Rule::prefix("ال", 2),
        Rule::prefix("وال", 2),
        Rule::prefix("بال", 2),
        Rule::prefix("كال", 2),
        Rule::prefix("فال", 2),
        Rule::prefix("لل", 2),
        Rule::prefix("و", 3),
    ]
}

/// Suffix rules, walked once in order.
fn suffix_rules() -> Vec<Rule> {
    vec![
        Rule::suffix("ها", 2),
        Rule::suffix("ان", 2),
        Rule::suffix("ات", 2),
        Rule::suffix("ون", 2),
        Rule::suffix("ين", 2),
        Rule::suffix("يه", 2),
        Rule::suffix("ية", 2),
        Rule::suffix("ه", 2),
        Rule::suffix("ة", 2),
        Rule::suffix("ي", 2),
    ]
}

/// Arabic light stemmer.
#[derive(Debug, Clone)]
pub struct ArabicStemmer {
    prefixes: RuleTable,
    suffixes: RuleTable,
}

impl ArabicStemmer {
    pub fn new() -> Self {
        ArabicStemmer {
            prefixes: RuleTable::new("arabic_prefix", Strategy::FirstMatch, prefix_rules()),
            suffixes: RuleTable::new("arabic_suffix", Strategy::SinglePass, suffix_rules()),
        }
    }

    /// Remove a leading prefix, if any.
    pub fn stem_prefix(&self, word: &str) -> String {
        self.prefixes.apply(word, 0).into_owned()
    }

    /// Remove trailing suffixes.
    pub fn stem_suffix(&self, word: &str) -> String {
        self.suffixes.apply(word, 0).into_owned()
    }
}

impl Default for ArabicStemmer {
    fn default() -> Self {
        Self::new()
    }
}

impl Stemmer for ArabicStemmer {
    fn stem(&self, word: &str) -> String {
        let without_prefix = self.prefixes.apply(word, 0);
        self.suffixes.apply(&without_prefix, 0).into_owned()
    }

    fn name(&self) -> &'static str {
        "arabic"
    }
}
