//! Lautgesetz - Proto-Indo-European sound laws over feature-based phonemes
//!
//! This crate re-exports all layers of the Lautgesetz system for convenient access.
//! For detailed documentation, see the individual layer crates.
//!
//! # Architecture
//!
//! ```text
//! Layer 4: lautgesetz_runtime    - REPL, CLI, logging setup
//!          lautgesetz_debug      - Derivation trace buffer and formatters
//! Layer 3: lautgesetz_engine     - Sound laws and the derivation pipeline
//! Layer 2: lautgesetz_word       - Segmented words, syllabification, mutation
//! Layer 1: lautgesetz_inventory  - Phoneme and grapheme inventories
//! Layer 0: lautgesetz_foundation - Feature tables, bundles, notations, errors
//! ```

pub use lautgesetz_debug as debug;
pub use lautgesetz_engine as engine;
pub use lautgesetz_foundation as foundation;
pub use lautgesetz_inventory as inventory;
pub use lautgesetz_runtime as runtime;
pub use lautgesetz_word as word;
