//! Feature tables, phoneme bundles, notations, and errors for Lautgesetz.
//!
//! This crate provides:
//! - Feature tables ([`Height`], [`Backness`], [`Place`], [`Manner`])
//! - [`Phoneme`] - Vowel and consonant feature bundles
//! - [`Notation`] - The closed set of supported written conventions
//! - [`Error`] - Rich error types with context

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod error;
pub mod features;
pub mod notation;
pub mod phoneme;

pub use error::{Error, ErrorContext, ErrorKind, Result};
pub use features::{Backness, Height, Manner, Place};
pub use notation::{COMBINING_ACUTE, Notation, SYLLABIC_MARK};
pub use phoneme::{Consonant, DEFAULT_VARIANT, DevoicePolicy, Phoneme, Vowel};
