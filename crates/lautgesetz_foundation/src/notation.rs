//! Supported notations.
//!
//! A notation is a written convention for one reconstructed language. Each
//! one carries its own inventory and its own set of secondary marks that
//! always attach to the preceding base symbol.

use std::fmt;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::Error;

/// Combining ring below, marking syllabic sonorants (`n̥`).
pub const SYLLABIC_MARK: char = '\u{0325}';

/// Combining acute, used on descendant long vowels that have no precomposed form.
pub const COMBINING_ACUTE: char = '\u{0301}';

const PIE_SECONDARY_MARKS: &[char] = &['ʰ', 'ʷ', '₁', '₂', '₃', SYLLABIC_MARK];
const PBS_SECONDARY_MARKS: &[char] = &['ʰ', 'ʷ', '₁', '₂', '₃', SYLLABIC_MARK, COMBINING_ACUTE];

/// A written convention with its own grapheme inventory.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Notation {
    /// Proto-Indo-European, the ancestor.
    #[cfg_attr(feature = "serde", serde(rename = "PIE"))]
    ProtoIndoEuropean,
    /// Proto-Balto-Slavic, the descendant.
    #[cfg_attr(feature = "serde", serde(rename = "PBS"))]
    ProtoBaltoSlavic,
}

impl Notation {
    /// Every supported notation, ancestor first.
    pub const ALL: [Self; 2] = [Self::ProtoIndoEuropean, Self::ProtoBaltoSlavic];

    /// Short tag, also used for definition file names.
    #[must_use]
    pub const fn tag(self) -> &'static str {
        match self {
            Self::ProtoIndoEuropean => "PIE",
            Self::ProtoBaltoSlavic => "PBS",
        }
    }

    /// Human-readable language name.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::ProtoIndoEuropean => "Proto-Indo-European",
            Self::ProtoBaltoSlavic => "Proto-Balto-Slavic",
        }
    }

    /// Code points that attach to the preceding written unit.
    #[must_use]
    pub const fn secondary_marks(self) -> &'static [char] {
        match self {
            Self::ProtoIndoEuropean => PIE_SECONDARY_MARKS,
            Self::ProtoBaltoSlavic => PBS_SECONDARY_MARKS,
        }
    }

    /// Returns true if `c` attaches to the previous unit in this notation.
    #[must_use]
    pub fn is_secondary_mark(self, c: char) -> bool {
        self.secondary_marks().contains(&c)
    }

    /// This notation followed by every other one, for lookups with fallback.
    pub fn with_fallbacks(self) -> impl Iterator<Item = Self> {
        std::iter::once(self).chain(Self::ALL.into_iter().filter(move |n| *n != self))
    }
}

impl fmt::Display for Notation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

impl FromStr for Notation {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|n| n.tag().eq_ignore_ascii_case(s))
            .ok_or_else(|| Error::unknown_notation(s))
    }
}
