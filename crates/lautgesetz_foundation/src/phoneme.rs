//! Phonemes as feature bundles.
//!
//! Two phonemes are the same sound iff every field matches. Symbols are
//! attached to bundles by the inventories, never stored here.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::features::{Backness, Height, Manner, Place};

/// Default variant number for bundles that do not name one.
pub const DEFAULT_VARIANT: u16 = 1;

/// A vowel feature bundle.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Vowel {
    /// Front, central or back.
    pub backness: Backness,
    /// Open, mid or close.
    pub height: Height,
    /// Long vowels carry distinctive length.
    pub long: bool,
    /// Disambiguator for otherwise-identical bundles.
    pub variant: u16,
}

impl Default for Vowel {
    fn default() -> Self {
        Self {
            backness: Backness::default(),
            height: Height::default(),
            long: false,
            variant: DEFAULT_VARIANT,
        }
    }
}

impl Vowel {
    /// Builds a bundle from quality tokens, starting from the defaults.
    ///
    /// # Errors
    ///
    /// Returns `UnknownQuality` for any token that is not a vowel quality.
    pub fn from_qualities<'q>(
        symbol: &str,
        qualities: impl IntoIterator<Item = &'q str>,
    ) -> Result<Self> {
        let mut vowel = Self::default();
        for quality in qualities {
            if let Some(backness) = Backness::from_name(quality) {
                vowel.backness = backness;
            } else if let Some(height) = Height::from_name(quality) {
                vowel.height = height;
            } else if quality == "long" {
                vowel.long = true;
            } else if quality == "short" {
                vowel.long = false;
            } else if let Some(variant) = parse_variant(quality) {
                vowel.variant = variant;
            } else {
                return Err(Error::unknown_quality(quality, symbol));
            }
        }
        Ok(vowel)
    }

    /// Returns the same vowel with distinctive length.
    #[must_use]
    pub fn lengthened(self) -> Self {
        Self { long: true, ..self }
    }
}

impl fmt::Display for Vowel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {} vowel",
            self.height,
            self.backness,
            if self.long { "long" } else { "short" }
        )?;
        if self.variant != DEFAULT_VARIANT {
            write!(f, " #{}", self.variant)?;
        }
        Ok(())
    }
}

/// A consonant feature bundle.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Consonant {
    /// Vocal folds vibrating.
    pub voiced: bool,
    /// Breathy or aspirated release.
    pub aspirated: bool,
    /// Place of articulation.
    pub place: Place,
    /// Manner of articulation.
    pub manner: Manner,
    /// Disambiguator for otherwise-identical bundles.
    pub variant: u16,
}

impl Default for Consonant {
    fn default() -> Self {
        Self {
            voiced: true,
            aspirated: false,
            place: Place::default(),
            manner: Manner::default(),
            variant: DEFAULT_VARIANT,
        }
    }
}

impl Consonant {
    /// Builds a bundle from quality tokens, starting from the defaults.
    ///
    /// # Errors
    ///
    /// Returns `UnknownQuality` for any token that is not a consonant quality.
    pub fn from_qualities<'q>(
        symbol: &str,
        qualities: impl IntoIterator<Item = &'q str>,
    ) -> Result<Self> {
        let mut consonant = Self::default();
        for quality in qualities {
            match quality {
                "voiced" => consonant.voiced = true,
                "voiceless" => consonant.voiced = false,
                "aspirated" => consonant.aspirated = true,
                "unaspirated" => consonant.aspirated = false,
                _ => {
                    if let Some(place) = Place::from_name(quality) {
                        consonant.place = place;
                    } else if let Some(manner) = Manner::from_name(quality) {
                        consonant.manner = manner;
                    } else if let Some(variant) = parse_variant(quality) {
                        consonant.variant = variant;
                    } else {
                        return Err(Error::unknown_quality(quality, symbol));
                    }
                }
            }
        }
        Ok(consonant)
    }

    /// Returns true for nasals, laterals, trills and semivowels.
    #[must_use]
    pub const fn is_sonorant(&self) -> bool {
        self.manner.is_sonorant()
    }

    /// Returns true for voiced stops without aspiration.
    #[must_use]
    pub fn is_plain_voiced_stop(&self) -> bool {
        self.manner == Manner::Stop && self.voiced && !self.aspirated
    }

    /// Returns the voiceless counterpart under the given policy.
    #[must_use]
    pub fn devoiced(self, policy: DevoicePolicy) -> Self {
        Self {
            voiced: false,
            aspirated: match policy {
                DevoicePolicy::Deaspirate => false,
                DevoicePolicy::KeepAspiration => self.aspirated,
            },
            ..self
        }
    }
}

impl fmt::Display for Consonant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}{} {} {}",
            if self.voiced { "voiced" } else { "voiceless" },
            if self.aspirated { " aspirated" } else { "" },
            self.place,
            self.manner
        )?;
        if self.variant != DEFAULT_VARIANT {
            write!(f, " #{}", self.variant)?;
        }
        Ok(())
    }
}

/// A phoneme: either a vowel or a consonant bundle.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Phoneme {
    /// A vowel.
    Vowel(Vowel),
    /// A consonant.
    Consonant(Consonant),
}

impl Phoneme {
    /// Returns true if this is a vowel.
    #[must_use]
    pub const fn is_vowel(&self) -> bool {
        matches!(self, Self::Vowel(_))
    }

    /// Returns the vowel bundle, if any.
    #[must_use]
    pub const fn as_vowel(&self) -> Option<&Vowel> {
        match self {
            Self::Vowel(v) => Some(v),
            Self::Consonant(_) => None,
        }
    }

    /// Returns the consonant bundle, if any.
    #[must_use]
    pub const fn as_consonant(&self) -> Option<&Consonant> {
        match self {
            Self::Consonant(c) => Some(c),
            Self::Vowel(_) => None,
        }
    }
}

impl fmt::Display for Phoneme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Vowel(v) => v.fmt(f),
            Self::Consonant(c) => c.fmt(f),
        }
    }
}

/// Whether devoicing also strips aspiration.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum DevoicePolicy {
    /// `gʰ` devoices to `k`.
    #[default]
    Deaspirate,
    /// `gʰ` devoices to a voiceless aspirate, if the inventory has one.
    KeepAspiration,
}

fn parse_variant(token: &str) -> Option<u16> {
    if token.chars().all(|c| c.is_ascii_digit()) {
        token.parse().ok()
    } else {
        None
    }
}
