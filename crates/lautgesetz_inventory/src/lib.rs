//! Phoneme and grapheme inventories for Lautgesetz.
//!
//! This crate provides:
//! - [`PhonemeInventory`] - Canonicalizing vowel and consonant registries
//! - [`GraphemeInventory`] - Per-notation grapheme ↔ phoneme mapping
//! - [`definition`] - The line-oriented definition format
//! - [`Inventories`] - One grapheme inventory per supported notation

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod definition;
pub mod graphemes;
pub mod inventories;
pub mod phonemes;

pub use definition::Entry;
pub use graphemes::{GraphemeInventory, PhonemicGrapheme, SPECIAL_MARKER, SpecialGrapheme};
pub use inventories::{DEFINITION_EXTENSION, Inventories, PBS_DEFINITION, PIE_DEFINITION};
pub use phonemes::{ConsonantInventory, PhonemeInventory, VowelInventory};
