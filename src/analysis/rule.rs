//! Declarative affix rules.
//!
//! Each morphological phenomenon is data: a [`Rule`] names an affix, the
//! smallest stem it may leave behind, an optional condition on the letter
//! preceding a suffix, and what to do with the match. A [`RuleTable`] groups
//! rules and decides how they are tried; one generic matcher serves every
//! language.
//!
//! All lengths are counted in codepoints.
//!
//! # Examples
//!
//! ```
//! use stemma::analysis::rule::{Rule, RuleTable, Strategy};
//!
//! let table = RuleTable::new(
//!     "plural",
//!     Strategy::FirstMatch,
//!     vec![Rule::suffix("es", 2), Rule::suffix("s", 2)],
//! );
//!
//! assert_eq!(table.apply("boxes", 0), "box");
//! assert_eq!(table.apply("is", 0), "is");
//! ```

use std::borrow::Cow;

/// Which end of the word a rule anchors to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Anchor {
    Prefix,
    Suffix,
}

/// What a matching rule does to the affix.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Remove the affix.
    Strip,
    /// Replace a suffix with the given text.
    Replace(&'static str),
}

/// A single affix rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rule {
    pub anchor: Anchor,
    pub affix: &'static str,
    /// Minimum codepoints that must remain once the affix is removed.
    pub min_stem: usize,
    /// Letters allowed immediately before a suffix. `None` accepts any.
    pub preceded_by: Option<&'static str>,
    pub action: Action,
}

impl Rule {
    /// A prefix-stripping rule.
    pub const fn prefix(affix: &'static str, min_stem: usize) -> Self {
        Rule {
            anchor: Anchor::Prefix,
            affix,
            min_stem,
            preceded_by: None,
            action: Action::Strip,
        }
    }

    /// A suffix-stripping rule.
    pub const fn suffix(affix: &'static str, min_stem: usize) -> Self {
        Rule {
            anchor: Anchor::Suffix,
            affix,
            min_stem,
            preceded_by: None,
            action: Action::Strip,
        }
    }

    /// A suffix rule that rewrites the affix instead of removing it.
    pub const fn rewrite(affix: &'static str, replacement: &'static str) -> Self {
        Rule {
            anchor: Anchor::Suffix,
            affix,
            min_stem: 0,
            preceded_by: None,
            action: Action::Replace(replacement),
        }
    }

    /// Restrict a suffix rule to words where the letter before the suffix is
    /// one of `letters`.
    pub const fn after(mut self, letters: &'static str) -> Self {
        self.preceded_by = Some(letters);
        self
    }

    fn affix_len(&self) -> usize {
        self.affix.chars().count()
    }

    /// Returns the rewritten word if this rule fires on `word`.
    ///
    /// `floor` is a word-specific lower bound on the remaining stem (a
    /// stemming region start); the effective guard is the larger of `floor`
    /// and `min_stem`.
    fn try_apply(&self, word: &str, word_len: usize, floor: usize) -> Option<String> {
        let affix_len = self.affix_len();
        if word_len < affix_len {
            return None;
        }
        let remaining = word_len - affix_len;
        if remaining < self.min_stem.max(floor) {
            return None;
        }

        let stem = match self.anchor {
            Anchor::Prefix => word.strip_prefix(self.affix)?,
            Anchor::Suffix => word.strip_suffix(self.affix)?,
        };

        if let Some(letters) = self.preceded_by {
            let before = stem.chars().next_back()?;
            if !letters.contains(before) {
                return None;
            }
        }

        Some(match self.action {
            Action::Strip => stem.to_string(),
            Action::Replace(r) => format!("{stem}{r}"),
        })
    }
}

/// How a table walks its rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Strategy {
    /// The first rule that fires wins; the rest are skipped.
    FirstMatch,
    /// Walk the table once in order, letting each rule fire at most once on
    /// the word as rewritten so far. The walk never restarts.
    SinglePass,
}

/// An ordered collection of rules evaluated by one generic matcher.
#[derive(Debug, Clone)]
pub struct RuleTable {
    name: &'static str,
    strategy: Strategy,
    rules: Vec<Rule>,
}

impl RuleTable {
    /// Create a table that tries `rules` in the given order.
    pub fn new(name: &'static str, strategy: Strategy, rules: Vec<Rule>) -> Self {
        RuleTable {
            name,
            strategy,
            rules,
        }
    }

    /// Create a first-match table with the longest affixes tried first.
    ///
    /// Rules of equal length keep their declared order.
    pub fn longest_first(name: &'static str, mut rules: Vec<Rule>) -> Self {
        rules.sort_by_key(|r| std::cmp::Reverse(r.affix_len()));
        RuleTable::new(name, Strategy::FirstMatch, rules)
    }

    /// Name of the table (for logging).
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// The rules in evaluation order.
    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }

    /// Apply the table to `word`.
    ///
    /// When no rule fires the word is returned unchanged and unallocated.
    pub fn apply<'a>(&self, word: &'a str, floor: usize) -> Cow<'a, str> {
        let mut current: Cow<'a, str> = Cow::Borrowed(word);
        let mut len = word.chars().count();

        for rule in &self.rules {
            if let Some(rewritten) = rule.try_apply(&current, len, floor) {
                len = rewritten.chars().count();
                current = Cow::Owned(rewritten);
                if self.strategy == Strategy::FirstMatch {
                    break;
                }
            }
        }

        current
    }
}
