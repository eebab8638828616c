//! Arabic orthographic normalization.
//!
//! Rewrites letter-shape variants that denote the same orthographic unit to
//! one canonical codepoint and removes elongation and optional vowel marks:
//!
//! - alef with madda, hamza above or hamza below → bare alef
//! - alef maksura (dotless yeh) → yeh
//! - teh marbuta → heh
//! - tatweel and the harakat (fathatan through sukun) are removed
//!
//! The digit-folding revision also maps Arabic-Indic and Extended
//! Arabic-Indic digits to ASCII digits.

use std::borrow::Cow;

use crate::analysis::version::NormalizationRevision;

pub const ALEF: char = '\u{0627}';
pub const ALEF_MADDA: char = '\u{0622}';
pub const ALEF_HAMZA_ABOVE: char = '\u{0623}';
pub const ALEF_HAMZA_BELOW: char = '\u{0625}';
pub const YEH: char = '\u{064A}';
pub const DOTLESS_YEH: char = '\u{0649}';
pub const TEH_MARBUTA: char = '\u{0629}';
pub const HEH: char = '\u{0647}';
pub const TATWEEL: char = '\u{0640}';
pub const FATHATAN: char = '\u{064B}';
pub const SUKUN: char = '\u{0652}';

/// A set of codepoints a rule applies to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CharClass {
    One(char),
    Range(char, char),
}

impl CharClass {
    fn contains(self, c: char) -> bool {
        match self {
            CharClass::One(x) => c == x,
            CharClass::Range(lo, hi) => (lo..=hi).contains(&c),
        }
    }
}

/// What happens to a matched codepoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CharAction {
    Remove,
    Replace(char),
    /// Map the codepoint to the ASCII digit at the same distance from
    /// `zero`.
    FoldDigit { zero: char },
}

/// One normalization rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CharRule {
    pub class: CharClass,
    pub action: CharAction,
}

const fn rule(class: CharClass, action: CharAction) -> CharRule {
    CharRule { class, action }
}

const ORTHOGRAPHIC_RULES: &[CharRule] = &[
    rule(CharClass::One(ALEF_MADDA), CharAction::Replace(ALEF)),
    rule(CharClass::One(ALEF_HAMZA_ABOVE), CharAction::Replace(ALEF)),
    rule(CharClass::One(ALEF_HAMZA_BELOW), CharAction::Replace(ALEF)),
    rule(CharClass::One(DOTLESS_YEH), CharAction::Replace(YEH)),
    rule(CharClass::One(TEH_MARBUTA), CharAction::Replace(HEH)),
    rule(CharClass::One(TATWEEL), CharAction::Remove),
    rule(CharClass::Range(FATHATAN, SUKUN), CharAction::Remove),
];

const DIGIT_RULES: &[CharRule] = &[
    rule(
        CharClass::Range('\u{0660}', '\u{0669}'),
        CharAction::FoldDigit { zero: '\u{0660}' },
    ),
    rule(
        CharClass::Range('\u{06F0}', '\u{06F9}'),
        CharAction::FoldDigit { zero: '\u{06F0}' },
    ),
];

/// Normalizer for Arabic script text.
///
/// Pure and total: any input is accepted and text with nothing to rewrite is
/// returned without allocating.
#[derive(Debug, Clone)]
pub struct ArabicNormalizer {
    rules: Vec<CharRule>,
}

impl ArabicNormalizer {
    /// Create a normalizer for the given rule-table revision.
    pub fn new(revision: NormalizationRevision) -> Self {
        let mut rules = ORTHOGRAPHIC_RULES.to_vec();
        if revision == NormalizationRevision::WithDigitFolding {
            rules.extend_from_slice(DIGIT_RULES);
        }
        ArabicNormalizer { rules }
    }

    fn lookup(&self, c: char) -> Option<CharAction> {
        self.rules
            .iter()
            .find(|r| r.class.contains(c))
            .map(|r| r.action)
    }

    /// Normalize `text`.
    pub fn normalize<'a>(&self, text: &'a str) -> Cow<'a, str> {
        let Some(first) = text.char_indices().find(|&(_, c)| self.lookup(c).is_some()) else {
            return Cow::Borrowed(text);
        };

        let mut out = String::with_capacity(text.len());
        out.push_str(&text[..first.0]);
        for c in text[first.0..].chars() {
            match self.lookup(c) {
                None => out.push(c),
                Some(CharAction::Remove) => {}
                Some(CharAction::Replace(r)) => out.push(r),
                Some(CharAction::FoldDigit { zero }) => {
                    let digit = c as u32 - zero as u32;
                    out.push(char::from(b'0' + digit as u8));
                }
            }
        }
        Cow::Owned(out)
    }
}

impl Default for ArabicNormalizer {
    fn default() -> Self {
        ArabicNormalizer::new(NormalizationRevision::WithDigitFolding)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn latest() -> ArabicNormalizer {
        ArabicNormalizer::default()
    }

    #[test]
    fn test_alef_variants() {
        let n = latest();
        assert_eq!(n.normalize("أمريكيين"), "امريكيين");
        assert_eq!(n.normalize("آجن"), "اجن");
        assert_eq!(n.normalize("إسلام"), "اسلام");
    }

    #[test]
    fn test_yeh_and_teh_marbuta() {
        let n = latest();
        assert_eq!(n.normalize("ى"), "ي");
        assert_eq!(n.normalize("كبيرة"), "كبيره");
    }

    #[test]
    fn test_tatweel_and_harakat_removed() {
        let n = latest();
        assert_eq!(n.normalize("روبرـــــت"), "روبرت");
        assert_eq!(n.normalize("مَكْتَبٌ"), "مكتب");
        assert_eq!(n.normalize("مُحَمَّد"), "محمد");
    }

    #[test]
    fn test_untouched_text_is_borrowed() {
        let n = latest();
        assert!(matches!(n.normalize("english"), Cow::Borrowed(_)));
        assert!(matches!(n.normalize(""), Cow::Borrowed("")));
    }

    #[test]
    fn test_digit_folding_by_revision() {
        let folded = ArabicNormalizer::new(NormalizationRevision::WithDigitFolding);
        assert_eq!(folded.normalize("٢٠١٤"), "2014");
        assert_eq!(folded.normalize("۱۹"), "19");

        let orthographic = ArabicNormalizer::new(NormalizationRevision::Orthographic);
        assert_eq!(orthographic.normalize("٢٠١٤"), "٢٠١٤");
    }
}
