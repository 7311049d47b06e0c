//! Canonicalizing phoneme registries.
//!
//! Each registry maps written symbols to feature bundles and keeps, for
//! every distinct bundle, the symbol that registered it first. That symbol
//! is the canonical spelling; later symbols for the same bundle are aliases.

use std::collections::HashMap;

use lautgesetz_foundation::{Consonant, DevoicePolicy, Phoneme, Place, Result, Vowel};

/// Vowel registry: symbol → bundle, bundle → canonical symbol.
#[derive(Clone, Debug, Default)]
pub struct VowelInventory {
    by_symbol: HashMap<String, Vowel>,
    canonical: HashMap<Vowel, String>,
}

impl VowelInventory {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers `symbol` with the bundle described by `qualities`.
    ///
    /// Returns the canonical symbol for that bundle.
    ///
    /// # Errors
    ///
    /// Returns `UnknownQuality` if a token is not a vowel quality.
    pub fn register<'q>(
        &mut self,
        symbol: &str,
        qualities: impl IntoIterator<Item = &'q str>,
    ) -> Result<String> {
        let vowel = Vowel::from_qualities(symbol, qualities)?;
        Ok(self.insert(symbol, vowel).to_string())
    }

    /// Registers `symbol` with an already-built bundle.
    pub fn insert(&mut self, symbol: &str, vowel: Vowel) -> &str {
        self.by_symbol.insert(symbol.to_string(), vowel);
        self.canonical
            .entry(vowel)
            .or_insert_with(|| symbol.to_string())
    }

    /// Returns the bundle for a symbol.
    #[must_use]
    pub fn get(&self, symbol: &str) -> Option<&Vowel> {
        self.by_symbol.get(symbol)
    }

    /// Returns the canonical symbol for a bundle.
    #[must_use]
    pub fn canonical(&self, vowel: &Vowel) -> Option<&str> {
        self.canonical.get(vowel).map(String::as_str)
    }

    /// Returns true if the symbol is registered.
    #[must_use]
    pub fn contains(&self, symbol: &str) -> bool {
        self.by_symbol.contains_key(symbol)
    }

    /// Iterates over every registered symbol.
    pub fn symbols(&self) -> impl Iterator<Item = &str> {
        self.by_symbol.keys().map(String::as_str)
    }

    /// Number of registered symbols, aliases included.
    #[must_use]
    pub fn len(&self) -> usize {
        self.by_symbol.len()
    }

    /// Returns true if nothing is registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.by_symbol.is_empty()
    }
}

/// Consonant registry: symbol → bundle, bundle → canonical symbol.
#[derive(Clone, Debug, Default)]
pub struct ConsonantInventory {
    by_symbol: HashMap<String, Consonant>,
    canonical: HashMap<Consonant, String>,
}

impl ConsonantInventory {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers `symbol` with the bundle described by `qualities`.
    ///
    /// Returns the canonical symbol for that bundle.
    ///
    /// # Errors
    ///
    /// Returns `UnknownQuality` if a token is not a consonant quality.
    pub fn register<'q>(
        &mut self,
        symbol: &str,
        qualities: impl IntoIterator<Item = &'q str>,
    ) -> Result<String> {
        let consonant = Consonant::from_qualities(symbol, qualities)?;
        Ok(self.insert(symbol, consonant).to_string())
    }

    /// Registers `symbol` with an already-built bundle.
    pub fn insert(&mut self, symbol: &str, consonant: Consonant) -> &str {
        self.by_symbol.insert(symbol.to_string(), consonant);
        self.canonical
            .entry(consonant)
            .or_insert_with(|| symbol.to_string())
    }

    /// Returns the bundle for a symbol.
    #[must_use]
    pub fn get(&self, symbol: &str) -> Option<&Consonant> {
        self.by_symbol.get(symbol)
    }

    /// Returns the canonical symbol for a bundle.
    #[must_use]
    pub fn canonical(&self, consonant: &Consonant) -> Option<&str> {
        self.canonical.get(consonant).map(String::as_str)
    }

    /// Returns true if the symbol is a registered sonorant.
    #[must_use]
    pub fn is_sonorant(&self, symbol: &str) -> bool {
        self.get(symbol).is_some_and(Consonant::is_sonorant)
    }

    /// Returns true if the symbol is registered with the given place.
    #[must_use]
    pub fn matches_place(&self, symbol: &str, place: Place) -> bool {
        self.get(symbol).is_some_and(|c| c.place == place)
    }

    /// Returns the canonical voiceless counterpart of `symbol`.
    ///
    /// Pure: the stored bundle is never touched. Voiceless symbols, unknown
    /// symbols and bundles with no registered voiceless form come back as
    /// they went in.
    #[must_use]
    pub fn devoice<'a>(&'a self, symbol: &'a str, policy: DevoicePolicy) -> &'a str {
        let Some(consonant) = self.get(symbol) else {
            return symbol;
        };
        if !consonant.voiced {
            return symbol;
        }
        self.canonical(&consonant.devoiced(policy)).unwrap_or(symbol)
    }

    /// Iterates over every registered symbol.
    pub fn symbols(&self) -> impl Iterator<Item = &str> {
        self.by_symbol.keys().map(String::as_str)
    }

    /// Number of registered symbols, aliases included.
    #[must_use]
    pub fn len(&self) -> usize {
        self.by_symbol.len()
    }

    /// Returns true if nothing is registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.by_symbol.is_empty()
    }
}

/// The vowel and consonant registries of one notation.
#[derive(Clone, Debug, Default)]
pub struct PhonemeInventory {
    /// Vowels.
    pub vowels: VowelInventory,
    /// Consonants.
    pub consonants: ConsonantInventory,
}

impl PhonemeInventory {
    /// Creates an empty inventory.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a vowel; see [`VowelInventory::register`].
    ///
    /// # Errors
    ///
    /// Returns `UnknownQuality` if a token is not a vowel quality.
    pub fn register_vowel<'q>(
        &mut self,
        symbol: &str,
        qualities: impl IntoIterator<Item = &'q str>,
    ) -> Result<String> {
        self.vowels.register(symbol, qualities)
    }

    /// Registers a consonant; see [`ConsonantInventory::register`].
    ///
    /// # Errors
    ///
    /// Returns `UnknownQuality` if a token is not a consonant quality.
    pub fn register_consonant<'q>(
        &mut self,
        symbol: &str,
        qualities: impl IntoIterator<Item = &'q str>,
    ) -> Result<String> {
        self.consonants.register(symbol, qualities)
    }

    /// Returns true if the symbol is a registered vowel.
    #[must_use]
    pub fn is_vowel(&self, symbol: &str) -> bool {
        self.vowels.contains(symbol)
    }

    /// Returns true if the symbol is a registered sonorant consonant.
    #[must_use]
    pub fn is_sonorant(&self, symbol: &str) -> bool {
        self.consonants.is_sonorant(symbol)
    }

    /// Returns true if the symbol is a consonant with the given place.
    #[must_use]
    pub fn matches_place(&self, symbol: &str, place: Place) -> bool {
        self.consonants.matches_place(symbol, place)
    }

    /// Returns the canonical voiceless counterpart of a consonant symbol.
    #[must_use]
    pub fn devoice<'a>(&'a self, symbol: &'a str, policy: DevoicePolicy) -> &'a str {
        self.consonants.devoice(symbol, policy)
    }

    /// Returns the vowel bundle for a symbol.
    #[must_use]
    pub fn vowel(&self, symbol: &str) -> Option<&Vowel> {
        self.vowels.get(symbol)
    }

    /// Returns the consonant bundle for a symbol.
    #[must_use]
    pub fn consonant(&self, symbol: &str) -> Option<&Consonant> {
        self.consonants.get(symbol)
    }

    /// Returns the bundle for a symbol, vowel or consonant.
    #[must_use]
    pub fn phoneme(&self, symbol: &str) -> Option<Phoneme> {
        self.vowel(symbol)
            .copied()
            .map(Phoneme::Vowel)
            .or_else(|| self.consonant(symbol).copied().map(Phoneme::Consonant))
    }

    /// Returns the canonical symbol for a vowel bundle.
    #[must_use]
    pub fn canonical_vowel(&self, vowel: &Vowel) -> Option<&str> {
        self.vowels.canonical(vowel)
    }

    /// Returns the canonical symbol for a consonant bundle.
    #[must_use]
    pub fn canonical_consonant(&self, consonant: &Consonant) -> Option<&str> {
        self.consonants.canonical(consonant)
    }
}
