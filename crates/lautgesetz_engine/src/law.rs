//! Sound laws.
//!
//! A sound law reads a word's current phonemes and syllabicity and rewrites
//! it through the word's mutation methods. Laws run in a fixed order; each
//! one sees the output of the previous.

mod laryngeal;
mod ruki;
mod winter;

use std::fmt;

use lautgesetz_foundation::Result;
use lautgesetz_word::Word;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

pub use laryngeal::LaryngealLoss;
pub use ruki::Ruki;
pub use winter::WintersLaw;

use crate::config::DerivationConfig;

// =============================================================================
// Law Outcome
// =============================================================================

/// What applying a law did to a word.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct LawOutcome {
    /// Number of rewrites performed.
    pub changes: usize,
}

impl LawOutcome {
    /// An outcome with no rewrites.
    #[must_use]
    pub const fn unchanged() -> Self {
        Self { changes: 0 }
    }

    /// Counts one rewrite.
    pub fn record(&mut self) {
        self.changes += 1;
    }

    /// Returns true if the law rewrote anything.
    #[must_use]
    pub const fn changed(&self) -> bool {
        self.changes > 0
    }
}

// =============================================================================
// Sound Law
// =============================================================================

/// A historical sound change.
pub trait SoundLaw: fmt::Debug + Send + Sync {
    /// Short machine name, e.g. `ruki`.
    fn name(&self) -> &'static str;

    /// Stage label printed after the law has run.
    fn label(&self) -> &'static str;

    /// Applies the law to `word` in place.
    ///
    /// # Errors
    ///
    /// Returns an error if a rewrite cannot be spelled.
    fn apply(&self, word: &mut Word<'_>, config: &DerivationConfig) -> Result<LawOutcome>;
}

/// Every built-in law, in historical order.
#[must_use]
pub fn balto_slavic_laws() -> Vec<Box<dyn SoundLaw>> {
    vec![Box::new(Ruki), Box::new(LaryngealLoss), Box::new(WintersLaw)]
}

/// Looks up a built-in law by its machine name.
#[must_use]
pub fn law_by_name(name: &str) -> Option<Box<dyn SoundLaw>> {
    balto_slavic_laws().into_iter().find(|law| law.name() == name)
}
