//! Configuration for derivations.

use lautgesetz_foundation::{DevoicePolicy, Notation};
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Configuration shared by every law in a derivation.
///
/// Names the ancestor notation input is parsed in, the descendant notation
/// laws write into, and how devoicing treats aspiration.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct DerivationConfig {
    /// Notation of the input forms.
    pub ancestor: Notation,

    /// Notation rewritten segments are spelled in.
    pub descendant: Notation,

    /// Whether devoicing also removes aspiration.
    pub devoice_policy: DevoicePolicy,
}

impl Default for DerivationConfig {
    fn default() -> Self {
        Self {
            ancestor: Notation::ProtoIndoEuropean,
            descendant: Notation::ProtoBaltoSlavic,
            devoice_policy: DevoicePolicy::default(),
        }
    }
}

impl DerivationConfig {
    /// Creates the default PIE → PBS configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder method to set the ancestor notation.
    #[must_use]
    pub fn with_ancestor(mut self, notation: Notation) -> Self {
        self.ancestor = notation;
        self
    }

    /// Builder method to set the descendant notation.
    #[must_use]
    pub fn with_descendant(mut self, notation: Notation) -> Self {
        self.descendant = notation;
        self
    }

    /// Builder method to set the devoicing policy.
    #[must_use]
    pub fn with_devoice_policy(mut self, policy: DevoicePolicy) -> Self {
        self.devoice_policy = policy;
        self
    }
}
