//! Word representation for Lautgesetz.
//!
//! This crate provides:
//! - [`extract`] - Splitting text into written units
//! - [`Segment`] - Phonemic and silent written units
//! - [`Word`] - Parsing, syllabification, projections and mutation

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod extract;
pub mod segment;
pub mod syllabify;
pub mod word;

pub use extract::extract;
pub use segment::{PhonemicSegment, Segment, SilentSegment};
pub use word::{ACUTE_ROLE, Word, WordNotation, WordSnapshot};
