//! Suffix-stripping stemmer for Swedish.
//!
//! Follows the Snowball Swedish algorithm. Every step only removes suffixes
//! that lie inside the word's R1 region, which starts after the first
//! non-vowel that follows a vowel, and never before the third letter.

use crate::analysis::rule::{Rule, RuleTable};

use super::Stemmer;

const VOWELS: &str = "aeiouyäåö";

/// Letters that may precede a removable final `s`.
const VALID_S_ENDING: &str = "bcdfghjklmnoprtvy";

fn main_suffix_rules() -> Vec<Rule> {
    let mut rules: Vec<Rule> = [
        "a", "arna", "erna", "heterna", "orna", "ad", "e", "ade", "ande", "arne", "are", "aste",
        "en", "anden", "aren", "heten", "ern", "ar", "er", "heter", "or", "as", "arnas", "ernas",
        "ornas", "es", "ades", "andes", "ens", "arens", "hetens", "erns", "at", "andet", "het",
        "ast",
    ]
    .into_iter()
    .map(|suffix| Rule::suffix(suffix, 0))
    .collect();
    rules.push(Rule::suffix("s", 0).after(VALID_S_ENDING));
    rules
}

fn consonant_pair_rules() -> Vec<Rule> {
    vec![
        Rule::rewrite("dd", "d"),
        Rule::rewrite("gd", "g"),
        Rule::rewrite("nn", "n"),
        Rule::rewrite("dt", "d"),
        Rule::rewrite("gt", "g"),
        Rule::rewrite("kt", "k"),
        Rule::rewrite("tt", "t"),
    ]
}

fn other_suffix_rules() -> Vec<Rule> {
    vec![
        Rule::suffix("lig", 0),
        Rule::suffix("ig", 0),
        Rule::suffix("els", 0),
        Rule::rewrite("löst", "lös"),
        Rule::rewrite("fullt", "full"),
    ]
}

fn is_vowel(c: char) -> bool {
    VOWELS.contains(c)
}

/// Start of the R1 region, in codepoints.
///
/// Words shorter than three letters, or without a vowel followed by a
/// non-vowel, have an empty R1.
pub fn r1_start(word: &str) -> usize {
    let chars: Vec<char> = word.chars().collect();
    if chars.len() < 3 {
        return chars.len();
    }

    let Some(first_vowel) = chars.iter().position(|&c| is_vowel(c)) else {
        return chars.len();
    };
    match chars[first_vowel..].iter().position(|&c| !is_vowel(c)) {
        Some(offset) => (first_vowel + offset + 1).max(3),
        None => chars.len(),
    }
}

/// Swedish stemmer.
#[derive(Debug, Clone)]
pub struct SwedishStemmer {
    steps: [RuleTable; 3],
}

impl SwedishStemmer {
    pub fn new() -> Self {
        SwedishStemmer {
            steps: [
                RuleTable::longest_first("swedish_main_suffix", main_suffix_rules()),
                RuleTable::longest_first("swedish_consonant_pair", consonant_pair_rules()),
                RuleTable::longest_first("swedish_other_suffix", other_suffix_rules()),
            ],
        }
    }
}

impl Default for SwedishStemmer {
    fn default() -> Self {
        Self::new()
    }
}

impl Stemmer for SwedishStemmer {
    fn stem(&self, word: &str) -> String {
        let r1 = r1_start(word);
        let mut current = word.to_string();
        for table in &self.steps {
            current = table.apply(&current, r1).into_owned();
        }
        current
    }

    fn name(&self) -> &'static str {
        "swedish"
    }
}
