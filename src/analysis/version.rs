//! Compatibility versions.
//!
//! A [`Version`] pins the observable behavior of an analyzer so that indexes
//! built with an older release keep matching queries analyzed today. The tag
//! is resolved exactly once, when an analyzer is assembled, into a
//! [`VersionProfile`]; filters and tokenizers only ever see the resolved
//! profile.
//!
//! | version  | word boundaries                          | digit folding |
//! |----------|------------------------------------------|---------------|
//! | `V3_0`   | letter runs (Arabic), legacy UAX#29      | no            |
//! | `V4_6`   | legacy UAX#29 (Unicode 6.1 classes)      | no            |
//! | `Latest` | current UAX#29                           | yes           |

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{Result, StemmaError};

/// A compatibility version tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Version {
    /// Letter-run tokenization for Arabic; no digit folding.
    #[serde(rename = "3.0")]
    V3_0,
    /// Word boundaries computed with pre-6.3 Unicode word-break classes.
    #[serde(rename = "4.6")]
    V4_6,
    /// Current behavior.
    #[default]
    Latest,
}

/// Which word-boundary classification the tokenizer applies.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoundaryRules {
    /// Runs of letters and combining marks; everything else separates.
    LetterRuns,
    /// UAX#29 with the Unicode 6.1 class assignments.
    ///
    /// Quotation marks are never word-internal: `"` splits Hebrew acronyms
    /// and a trailing `'` is not attached to a Hebrew letter.
    LegacyUax29,
    /// UAX#29 as implemented by the current Unicode tables.
    Uax29,
}

/// Revision of the Arabic normalization rule table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NormalizationRevision {
    /// Letter-shape and diacritic rules only.
    Orthographic,
    /// Orthographic rules plus decimal digit folding.
    WithDigitFolding,
}

/// The concrete behavior a [`Version`] selects.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VersionProfile {
    /// Boundary rules for the Arabic chain.
    pub arabic_boundaries: BoundaryRules,
    /// Boundary rules for the Swedish chain.
    pub swedish_boundaries: BoundaryRules,
    /// Arabic normalization table revision.
    pub normalization: NormalizationRevision,
}

impl Version {
    /// All supported versions, oldest first.
    pub const ALL: [Version; 3] = [Version::V3_0, Version::V4_6, Version::Latest];

    /// Resolve this tag into the fixed behavior it selects.
    pub fn profile(self) -> VersionProfile {
        match self {
            Version::V3_0 => VersionProfile {
                arabic_boundaries: BoundaryRules::LetterRuns,
                swedish_boundaries: BoundaryRules::LegacyUax29,
                normalization: NormalizationRevision::Orthographic,
            },
            Version::V4_6 => VersionProfile {
                arabic_boundaries: BoundaryRules::LegacyUax29,
                swedish_boundaries: BoundaryRules::LegacyUax29,
                normalization: NormalizationRevision::Orthographic,
            },
            Version::Latest => VersionProfile {
                arabic_boundaries: BoundaryRules::Uax29,
                swedish_boundaries: BoundaryRules::Uax29,
                normalization: NormalizationRevision::WithDigitFolding,
            },
        }
    }

    /// The tag as written in configuration files.
    pub fn as_str(self) -> &'static str {
        match self {
            Version::V3_0 => "3.0",
            Version::V4_6 => "4.6",
            Version::Latest => "latest",
        }
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Version {
    type Err = StemmaError;

    fn from_str(s: &str) -> Result<Self> {
        Version::ALL
            .into_iter()
            .find(|v| v.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| StemmaError::invalid_config(format!("unknown version '{s}'")))
    }
}
