//! The RUKI rule: `*s > *š` after `r`, `u`, `K`, `i`.

use lautgesetz_foundation::Result;
use lautgesetz_word::Word;

use super::{LawOutcome, SoundLaw};
use crate::config::DerivationConfig;

/// Preceding phonemes that trigger the change, compared after devoicing.
pub const TRIGGERS: [&str; 4] = ["r", "w", "k", "y"];

/// The ancestor sibilant.
pub const SOURCE: &str = "s";

/// Its descendant reflex.
pub const TARGET: &str = "š";

/// `s` becomes `š` after `r`, `w`, velars and `y`.
///
/// Voiced velars qualify through devoicing, so `g` and `gʰ` trigger the
/// change like `k` does.
#[derive(Clone, Copy, Debug, Default)]
pub struct Ruki;

impl SoundLaw for Ruki {
    fn name(&self) -> &'static str {
        "ruki"
    }

    fn label(&self) -> &'static str {
        "After RUKI sound law"
    }

    fn apply(&self, word: &mut Word<'_>, config: &DerivationConfig) -> Result<LawOutcome> {
        let inventories = word.inventories();
        let mut outcome = LawOutcome::unchanged();
        for i in 0..word.len().saturating_sub(1) {
            if word.phoneme(i + 1)? != SOURCE || word.phoneme_notation(i + 1)? != config.ancestor {
                continue;
            }
            let before = word.phoneme(i)?;
            let devoiced = inventories
                .get(word.phoneme_notation(i)?)
                .phonemes()
                .devoice(before, config.devoice_policy);
            if TRIGGERS.contains(&devoiced) {
                tracing::trace!(index = i + 1, trigger = before, "ruki");
                word.set_phoneme(i + 1, TARGET, config.descendant)?;
                outcome.record();
            }
        }
        Ok(outcome)
    }
}
