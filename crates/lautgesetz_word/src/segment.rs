//! Word segments.
//!
//! A word is one ordered sequence of segments. Phonemic segments carry a
//! phoneme and its flags; silent segments carry notation only. Grapheme
//! space is the whole sequence, phoneme space is the phonemic subsequence.

use lautgesetz_foundation::Notation;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A written unit standing for one phoneme.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PhonemicSegment {
    /// The written grapheme.
    pub grapheme: String,
    /// Canonical phoneme symbol in `notation`.
    pub phoneme: String,
    /// The notation whose inventory spells this segment.
    pub notation: Notation,
    /// Syllable nucleus.
    pub syllabic: bool,
    /// Carries the accent.
    pub accented: bool,
}

/// A written unit with no phonemic content, such as an accent mark.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SilentSegment {
    /// The written grapheme.
    pub grapheme: String,
    /// The notational role, e.g. `acute`.
    pub role: String,
    /// The notation the mark belongs to.
    pub notation: Notation,
}

/// One written unit of a word.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Segment {
    /// Stands for a phoneme.
    Phonemic(PhonemicSegment),
    /// Notation only.
    Silent(SilentSegment),
}

impl Segment {
    /// The written grapheme.
    #[must_use]
    pub fn grapheme(&self) -> &str {
        match self {
            Self::Phonemic(p) => &p.grapheme,
            Self::Silent(s) => &s.grapheme,
        }
    }

    /// The notation the grapheme is written in.
    #[must_use]
    pub const fn notation(&self) -> Notation {
        match self {
            Self::Phonemic(p) => p.notation,
            Self::Silent(s) => s.notation,
        }
    }

    /// Returns true for segments with no phonemic content.
    #[must_use]
    pub const fn is_silent(&self) -> bool {
        matches!(self, Self::Silent(_))
    }

    /// Returns the phonemic segment, if this is one.
    #[must_use]
    pub const fn as_phonemic(&self) -> Option<&PhonemicSegment> {
        match self {
            Self::Phonemic(p) => Some(p),
            Self::Silent(_) => None,
        }
    }

    /// Returns the phonemic segment mutably, if this is one.
    pub fn as_phonemic_mut(&mut self) -> Option<&mut PhonemicSegment> {
        match self {
            Self::Phonemic(p) => Some(p),
            Self::Silent(_) => None,
        }
    }
}
