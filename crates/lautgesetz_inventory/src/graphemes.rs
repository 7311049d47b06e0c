//! Grapheme inventories.
//!
//! A grapheme inventory belongs to one notation. It maps every written
//! grapheme to a `(phoneme, syllabic, accented)` triple, keeps the inverse
//! mapping for spelling synthesized phonemes, and tracks special notation
//! symbols (accent marks, boundaries) that carry no phonemic content.

use std::collections::HashMap;
use std::fmt;

use lautgesetz_foundation::{Error, Notation, Result};
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::definition::Entry;
use crate::phonemes::PhonemeInventory;

/// Token that routes an entry to the special-symbol registry.
pub const SPECIAL_MARKER: &str = "symbol";

/// What a phonemic grapheme stands for.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PhonemicGrapheme {
    /// Canonical phoneme symbol.
    pub phoneme: String,
    /// Whether the grapheme itself marks a syllable nucleus.
    pub syllabic: bool,
    /// Whether the grapheme carries the accent.
    pub accented: bool,
}

impl PhonemicGrapheme {
    /// Creates a new triple.
    #[must_use]
    pub fn new(phoneme: impl Into<String>, syllabic: bool, accented: bool) -> Self {
        Self {
            phoneme: phoneme.into(),
            syllabic,
            accented,
        }
    }
}

impl fmt::Display for PhonemicGrapheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} (syllabic={}, accented={})",
            self.phoneme, self.syllabic, self.accented
        )
    }
}

/// A written symbol that denotes notation rather than sound.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SpecialGrapheme {
    /// The written form.
    pub grapheme: String,
    /// The role it plays, e.g. `acute`.
    pub role: String,
}

/// The graphemes of one notation.
#[derive(Clone, Debug)]
pub struct GraphemeInventory {
    notation: Notation,
    phonemes: PhonemeInventory,
    /// Grapheme → triple.
    graphemes: HashMap<String, PhonemicGrapheme>,
    /// Triple → first grapheme registered for it.
    inverse: HashMap<PhonemicGrapheme, String>,
    /// Role → special symbol.
    specials: HashMap<String, SpecialGrapheme>,
    /// Written form → special symbol.
    special_graphemes: HashMap<String, SpecialGrapheme>,
}

impl GraphemeInventory {
    /// Creates an empty inventory for a notation.
    #[must_use]
    pub fn new(notation: Notation) -> Self {
        Self {
            notation,
            phonemes: PhonemeInventory::new(),
            graphemes: HashMap::new(),
            inverse: HashMap::new(),
            specials: HashMap::new(),
            special_graphemes: HashMap::new(),
        }
    }

    /// Builds an inventory from definition entries, in order.
    ///
    /// # Errors
    ///
    /// Returns the first entry error, with the entry's line attached.
    pub fn from_entries<'e>(
        notation: Notation,
        entries: impl IntoIterator<Item = &'e Entry>,
    ) -> Result<Self> {
        let mut inventory = Self::new(notation);
        for entry in entries {
            let qualities: Vec<&str> = entry.qualities.iter().map(String::as_str).collect();
            inventory
                .add(&entry.grapheme, &qualities)
                .map_err(|e| entry.annotate(e))?;
        }
        tracing::debug!(
            notation = %notation,
            graphemes = inventory.graphemes.len(),
            specials = inventory.specials.len(),
            "built grapheme inventory"
        );
        Ok(inventory)
    }

    /// Adds one grapheme definition.
    ///
    /// Entries carrying the `symbol` marker go to the special registry and
    /// must name exactly one role. Everything else registers a phoneme and
    /// wraps it with its syllabic and accented flags.
    ///
    /// # Errors
    ///
    /// Returns `MalformedEntry` for a special entry of the wrong arity and
    /// `UnknownQuality` for unrecognized phoneme qualities.
    pub fn add(&mut self, grapheme: &str, qualities: &[&str]) -> Result<()> {
        if qualities.contains(&SPECIAL_MARKER) {
            return self.add_special(grapheme, qualities);
        }

        let mut vowel = false;
        let mut syllabic = false;
        let mut accented = false;
        let mut phoneme_qualities = Vec::with_capacity(qualities.len());
        for &quality in qualities {
            match quality {
                "vowel" => {
                    vowel = true;
                    syllabic = true;
                }
                "accented" => accented = true,
                "syllabic" => syllabic = true,
                other => phoneme_qualities.push(other),
            }
        }

        let phoneme = if vowel {
            self.phonemes.register_vowel(grapheme, phoneme_qualities)?
        } else {
            self.phonemes.register_consonant(grapheme, phoneme_qualities)?
        };

        let triple = PhonemicGrapheme::new(phoneme, syllabic, accented);
        self.inverse
            .entry(triple.clone())
            .or_insert_with(|| grapheme.to_string());
        self.graphemes.insert(grapheme.to_string(), triple);
        Ok(())
    }

    fn add_special(&mut self, grapheme: &str, qualities: &[&str]) -> Result<()> {
        let roles: Vec<&str> = qualities
            .iter()
            .copied()
            .filter(|q| *q != SPECIAL_MARKER)
            .collect();
        let [role] = roles.as_slice() else {
            return Err(Error::malformed_entry(format!(
                "special symbol {grapheme:?} needs exactly one role, got {}",
                roles.len()
            )));
        };
        let special = SpecialGrapheme {
            grapheme: grapheme.to_string(),
            role: (*role).to_string(),
        };
        self.specials
            .entry(special.role.clone())
            .or_insert_with(|| special.clone());
        self.special_graphemes.insert(grapheme.to_string(), special);
        Ok(())
    }

    /// Returns the grapheme for an exact `(phoneme, syllabic, accented)` triple.
    ///
    /// # Errors
    ///
    /// Returns `MissingGraphemeForFeatures` when no grapheme was registered
    /// for the triple; there is no fuzzy fallback.
    pub fn find(&self, phoneme: &str, syllabic: bool, accented: bool) -> Result<&str> {
        let triple = PhonemicGrapheme::new(phoneme, syllabic, accented);
        self.inverse
            .get(&triple)
            .map(String::as_str)
            .ok_or_else(|| Error::missing_grapheme(triple.to_string(), self.notation))
    }

    /// Returns the special symbol playing `role`.
    ///
    /// # Errors
    ///
    /// Returns `MissingGraphemeForFeatures` if the notation has no such symbol.
    pub fn find_special(&self, role: &str) -> Result<&SpecialGrapheme> {
        self.specials
            .get(role)
            .ok_or_else(|| Error::missing_grapheme(format!("special {role:?}"), self.notation))
    }

    /// Looks up a written grapheme.
    #[must_use]
    pub fn lookup(&self, grapheme: &str) -> Option<&PhonemicGrapheme> {
        self.graphemes.get(grapheme)
    }

    /// Looks up a written special symbol.
    #[must_use]
    pub fn special(&self, grapheme: &str) -> Option<&SpecialGrapheme> {
        self.special_graphemes.get(grapheme)
    }

    /// The notation this inventory spells.
    #[must_use]
    pub const fn notation(&self) -> Notation {
        self.notation
    }

    /// The underlying phoneme registries.
    #[must_use]
    pub const fn phonemes(&self) -> &PhonemeInventory {
        &self.phonemes
    }

    /// Iterates over every phonemic grapheme and its triple.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &PhonemicGrapheme)> {
        self.graphemes.iter().map(|(g, t)| (g.as_str(), t))
    }

    /// Number of phonemic graphemes, aliases included.
    #[must_use]
    pub fn len(&self) -> usize {
        self.graphemes.len()
    }

    /// Returns true if no phonemic grapheme is defined.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.graphemes.is_empty()
    }
}
