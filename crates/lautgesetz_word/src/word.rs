//! The live analysis state for one input string.
//!
//! A [`Word`] owns one ordered sequence of [`Segment`]s and borrows the
//! [`Inventories`] it was parsed against. The parallel views (graphemes,
//! phonemes, syllabic and accented flags) are projections of that sequence,
//! so mutating a segment can never leave them out of step.
//!
//! Two index spaces exist:
//! - *grapheme space*: every segment, silent ones included
//! - *phoneme space*: phonemic segments only
//!
//! Mutation methods take phoneme-space indices unless noted otherwise.

use std::fmt;

use lautgesetz_foundation::{Backness, Error, Height, Manner, Notation, Phoneme, Place, Result, Vowel};
use lautgesetz_inventory::{Inventories, SpecialGrapheme};
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::extract::extract;
use crate::segment::{PhonemicSegment, Segment, SilentSegment};
use crate::syllabify::syllabify;

/// Role of the special symbol inserted by [`Word::add_acute`].
pub const ACUTE_ROLE: &str = "acute";

// =============================================================================
// Word Notation
// =============================================================================

/// The notation a word is currently written in.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum WordNotation {
    /// Every segment comes from one notation.
    Pure(Notation),
    /// Segments from more than one notation.
    Mixed,
}

impl WordNotation {
    /// Returns the single notation, if the word is not mixed.
    #[must_use]
    pub const fn notation(self) -> Option<Notation> {
        match self {
            Self::Pure(n) => Some(n),
            Self::Mixed => None,
        }
    }

    /// Returns true once segments from two notations coexist.
    #[must_use]
    pub const fn is_mixed(self) -> bool {
        matches!(self, Self::Mixed)
    }
}

impl fmt::Display for WordNotation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Pure(n) => write!(f, "{n}"),
            Self::Mixed => write!(f, "mixed"),
        }
    }
}

// =============================================================================
// Snapshot
// =============================================================================

/// An owned copy of a word's projections at one point in time.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct WordSnapshot {
    /// Rendered text.
    pub text: String,
    /// Notation tag.
    pub notation: WordNotation,
    /// Every written unit.
    pub graphemes: Vec<String>,
    /// True for units with no phonemic content.
    pub silent_graphemes: Vec<bool>,
    /// Canonical phoneme symbols.
    pub phonemes: Vec<String>,
    /// Syllabicity per phoneme.
    pub syllabic: Vec<bool>,
    /// Accent per phoneme.
    pub accented: Vec<bool>,
}

// =============================================================================
// Word
// =============================================================================

/// A parsed word.
#[derive(Clone, Debug)]
pub struct Word<'a> {
    inventories: &'a Inventories,
    segments: Vec<Segment>,
    notation: WordNotation,
    text: String,
}

impl<'a> Word<'a> {
    /// Parses `text` written in `notation`.
    ///
    /// Splits the text into units, resolves each unit against the
    /// notation's grapheme inventory and infers unwritten syllabicity.
    ///
    /// # Errors
    ///
    /// Returns `MalformedSecondaryMark` if the text starts with a secondary
    /// mark and `UnknownSymbol` for a unit the inventory does not define.
    pub fn parse(text: &str, notation: Notation, inventories: &'a Inventories) -> Result<Self> {
        let inventory = inventories.get(notation);
        let mut segments = Vec::new();
        for unit in extract(text, notation)? {
            if let Some(special) = inventory.special(&unit) {
                segments.push(Segment::Silent(SilentSegment {
                    grapheme: unit,
                    role: special.role.clone(),
                    notation,
                }));
            } else if let Some(triple) = inventory.lookup(&unit) {
                segments.push(Segment::Phonemic(PhonemicSegment {
                    phoneme: triple.phoneme.clone(),
                    syllabic: triple.syllabic,
                    accented: triple.accented,
                    grapheme: unit,
                    notation,
                }));
            } else {
                return Err(Error::unknown_symbol(unit, notation));
            }
        }

        syllabify(&mut segments, inventories);

        let mut word = Self {
            inventories,
            segments,
            notation: WordNotation::Pure(notation),
            text: String::new(),
        };
        word.render();
        tracing::debug!(
            text = %word.text,
            notation = %notation,
            phonemes = ?word.phonemes(),
            syllabic = ?word.syllabic(),
            "parsed word"
        );
        Ok(word)
    }

    // -------------------------------------------------------------------------
    // Projections
    // -------------------------------------------------------------------------

    /// Every written unit, in order.
    #[must_use]
    pub fn graphemes(&self) -> Vec<&str> {
        self.segments.iter().map(Segment::grapheme).collect()
    }

    /// True for each written unit with no phonemic content.
    #[must_use]
    pub fn silent_graphemes(&self) -> Vec<bool> {
        self.segments.iter().map(Segment::is_silent).collect()
    }

    /// Canonical phoneme symbols.
    #[must_use]
    pub fn phonemes(&self) -> Vec<&str> {
        self.phonemic().map(|p| p.phoneme.as_str()).collect()
    }

    /// Syllabicity per phoneme.
    #[must_use]
    pub fn syllabic(&self) -> Vec<bool> {
        self.phonemic().map(|p| p.syllabic).collect()
    }

    /// Accent per phoneme.
    #[must_use]
    pub fn accented(&self) -> Vec<bool> {
        self.phonemic().map(|p| p.accented).collect()
    }

    /// Takes an owned copy of every projection.
    #[must_use]
    pub fn snapshot(&self) -> WordSnapshot {
        WordSnapshot {
            text: self.text.clone(),
            notation: self.notation,
            graphemes: self.graphemes().into_iter().map(str::to_string).collect(),
            silent_graphemes: self.silent_graphemes(),
            phonemes: self.phonemes().into_iter().map(str::to_string).collect(),
            syllabic: self.syllabic(),
            accented: self.accented(),
        }
    }

    // -------------------------------------------------------------------------
    // Accessors
    // -------------------------------------------------------------------------

    /// Number of phonemes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.phonemic().count()
    }

    /// Returns true if the word has no phonemes.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.phonemic().next().is_none()
    }

    /// Rendered text: the concatenation of every grapheme.
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// The notation tag.
    #[must_use]
    pub const fn notation(&self) -> WordNotation {
        self.notation
    }

    /// The segment sequence.
    #[must_use]
    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    /// The inventories this word was parsed against.
    #[must_use]
    pub const fn inventories(&self) -> &'a Inventories {
        self.inventories
    }

    /// The phoneme symbol at `i`.
    ///
    /// # Errors
    ///
    /// Returns `IndexOutOfBounds` if `i >= len()`.
    pub fn phoneme(&self, i: usize) -> Result<&str> {
        Ok(&self.phonemic_at(i)?.phoneme)
    }

    /// The notation phoneme `i` is spelled in.
    ///
    /// # Errors
    ///
    /// Returns `IndexOutOfBounds` if `i >= len()`.
    pub fn phoneme_notation(&self, i: usize) -> Result<Notation> {
        Ok(self.phonemic_at(i)?.notation)
    }

    /// Whether phoneme `i` is a syllable nucleus.
    ///
    /// # Errors
    ///
    /// Returns `IndexOutOfBounds` if `i >= len()`.
    pub fn is_syllabic(&self, i: usize) -> Result<bool> {
        Ok(self.phonemic_at(i)?.syllabic)
    }

    /// Whether phoneme `i` carries the accent.
    ///
    /// # Errors
    ///
    /// Returns `IndexOutOfBounds` if `i >= len()`.
    pub fn is_accented(&self, i: usize) -> Result<bool> {
        Ok(self.phonemic_at(i)?.accented)
    }

    /// The feature bundle of phoneme `i`, resolved in its own notation.
    ///
    /// `None` when `i` is out of range.
    #[must_use]
    pub fn bundle(&self, i: usize) -> Option<Phoneme> {
        let segment = self.phonemic().nth(i)?;
        self.inventories
            .get(segment.notation)
            .phonemes()
            .phoneme(&segment.phoneme)
    }

    /// Translates a phoneme-space index to a grapheme-space position.
    ///
    /// # Errors
    ///
    /// Returns `IndexOutOfBounds` if `i >= len()`.
    pub fn segment_index(&self, i: usize) -> Result<usize> {
        self.segments
            .iter()
            .enumerate()
            .filter(|(_, s)| !s.is_silent())
            .nth(i)
            .map(|(pos, _)| pos)
            .ok_or_else(|| Error::index_out_of_bounds(i, self.len()))
    }

    /// Whether a silent grapheme playing `role` directly follows phoneme `i`.
    ///
    /// # Errors
    ///
    /// Returns `IndexOutOfBounds` if `i >= len()`.
    pub fn followed_by_special(&self, i: usize, role: &str) -> Result<bool> {
        let pos = self.segment_index(i)?;
        Ok(matches!(
            self.segments.get(pos + 1),
            Some(Segment::Silent(s)) if s.role == role
        ))
    }

    // -------------------------------------------------------------------------
    // Mutation
    // -------------------------------------------------------------------------

    /// Marks phoneme `i` as a syllable nucleus. The grapheme is unchanged.
    ///
    /// # Errors
    ///
    /// Returns `IndexOutOfBounds` if `i >= len()`.
    pub fn make_syllabic(&mut self, i: usize) -> Result<()> {
        self.phonemic_at_mut(i)?.syllabic = true;
        Ok(())
    }

    /// Replaces phoneme `i` with `symbol` spelled in `notation`.
    ///
    /// The grapheme is the one `notation` registers for the symbol with the
    /// segment's current syllabic and accented flags. Writing in a notation
    /// other than the word's own marks the word mixed.
    ///
    /// # Errors
    ///
    /// Returns `IndexOutOfBounds` if `i >= len()` and
    /// `MissingGraphemeForFeatures` if `notation` cannot spell the result.
    pub fn set_phoneme(&mut self, i: usize, symbol: &str, notation: Notation) -> Result<()> {
        let inventories = self.inventories;
        let segment = self.phonemic_at_mut(i)?;
        let grapheme = inventories
            .get(notation)
            .find(symbol, segment.syllabic, segment.accented)?;
        tracing::debug!(
            index = i,
            from = %segment.phoneme,
            to = symbol,
            notation = %notation,
            "set phoneme"
        );
        segment.grapheme = grapheme.to_string();
        segment.phoneme = symbol.to_string();
        segment.notation = notation;
        self.relabel(notation);
        self.render();
        Ok(())
    }

    /// Removes phoneme `i` and its grapheme.
    ///
    /// # Errors
    ///
    /// Returns `IndexOutOfBounds` if `i >= len()`.
    pub fn delete_phoneme(&mut self, i: usize) -> Result<()> {
        let pos = self.segment_index(i)?;
        let removed = self.segments.remove(pos);
        tracing::debug!(index = i, grapheme = removed.grapheme(), "deleted phoneme");
        self.render();
        Ok(())
    }

    /// Inserts a silent grapheme at grapheme-space position `pos`.
    ///
    /// `pos` may equal the number of graphemes, which appends.
    ///
    /// # Errors
    ///
    /// Returns `IndexOutOfBounds` if `pos` is past the end.
    pub fn add_special(
        &mut self,
        pos: usize,
        special: &SpecialGrapheme,
        notation: Notation,
    ) -> Result<()> {
        if pos > self.segments.len() {
            return Err(Error::index_out_of_bounds(pos, self.segments.len()));
        }
        self.segments.insert(
            pos,
            Segment::Silent(SilentSegment {
                grapheme: special.grapheme.clone(),
                role: special.role.clone(),
                notation,
            }),
        );
        tracing::debug!(pos, grapheme = %special.grapheme, role = %special.role, "added special");
        self.relabel(notation);
        self.render();
        Ok(())
    }

    /// Puts an acute accent on the nucleus whose main vowel is phoneme `i`.
    ///
    /// A monophthong (next phoneme non-syllabic or absent) is lengthened
    /// first when some notation can spell the long form. The acute mark is
    /// then inserted right after the last phoneme of the nucleus.
    ///
    /// # Errors
    ///
    /// Returns `IndexOutOfBounds` if `i >= len()` and
    /// `MissingGraphemeForFeatures` if no notation defines an acute mark.
    pub fn add_acute(&mut self, i: usize) -> Result<()> {
        let len = self.len();
        let notation = self.phoneme_notation(i)?;
        let syllabic = self.syllabic();

        if !syllabic.get(i + 1).copied().unwrap_or(false) {
            self.lengthen(i)?;
        }

        let mut last = i;
        while last + 1 < len && syllabic[last + 1] {
            last += 1;
        }

        let inventories = self.inventories;
        let (acute_notation, acute) = inventories.find_special(ACUTE_ROLE, notation)?;
        let pos = self.segment_index(last)? + 1;
        self.add_special(pos, acute, acute_notation)
    }

    /// Replaces phoneme `i` with its long counterpart, if one can be spelled.
    ///
    /// Returns whether anything changed.
    fn lengthen(&mut self, i: usize) -> Result<bool> {
        let segment = self.phonemic_at(i)?;
        let Some(long) = self.long_counterpart(segment) else {
            return Ok(false);
        };
        let (home, syllabic, accented) = (segment.notation, segment.syllabic, segment.accented);

        let inventories = self.inventories;
        for notation in home.with_fallbacks() {
            let inventory = inventories.get(notation);
            let Some(symbol) = inventory.phonemes().canonical_vowel(&long) else {
                continue;
            };
            if inventory.find(symbol, syllabic, accented).is_ok() {
                self.set_phoneme(i, symbol, notation)?;
                return Ok(true);
            }
        }
        tracing::debug!(index = i, "no long counterpart can be spelled");
        Ok(false)
    }

    fn long_counterpart(&self, segment: &PhonemicSegment) -> Option<Vowel> {
        match self
            .inventories
            .get(segment.notation)
            .phonemes()
            .phoneme(&segment.phoneme)?
        {
            Phoneme::Vowel(vowel) => Some(vowel.lengthened()),
            Phoneme::Consonant(c) if segment.syllabic && c.manner == Manner::Semivowel => {
                let backness = match c.place {
                    Place::Palatal => Backness::Front,
                    Place::Labial | Place::Labiovelar => Backness::Back,
                    _ => return None,
                };
                Some(Vowel {
                    backness,
                    height: Height::Close,
                    long: true,
                    ..Vowel::default()
                })
            }
            Phoneme::Consonant(_) => None,
        }
    }

    // -------------------------------------------------------------------------
    // Internals
    // -------------------------------------------------------------------------

    fn phonemic(&self) -> impl Iterator<Item = &PhonemicSegment> {
        self.segments.iter().filter_map(Segment::as_phonemic)
    }

    fn phonemic_at(&self, i: usize) -> Result<&PhonemicSegment> {
        self.phonemic()
            .nth(i)
            .ok_or_else(|| Error::index_out_of_bounds(i, self.len()))
    }

    fn phonemic_at_mut(&mut self, i: usize) -> Result<&mut PhonemicSegment> {
        let len = self.len();
        self.segments
            .iter_mut()
            .filter_map(Segment::as_phonemic_mut)
            .nth(i)
            .ok_or_else(|| Error::index_out_of_bounds(i, len))
    }

    fn relabel(&mut self, notation: Notation) {
        if self.notation != WordNotation::Pure(notation) && !self.notation.is_mixed() {
            tracing::debug!(from = %self.notation, to = %notation, "word is now mixed");
            self.notation = WordNotation::Mixed;
        }
    }

    fn render(&mut self) {
        self.text = self.segments.iter().map(Segment::grapheme).collect();
    }
}

impl fmt::Display for Word<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}
