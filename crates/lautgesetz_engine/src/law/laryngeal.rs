//! Loss of syllabic laryngeals outside the first syllable.

use lautgesetz_foundation::{Place, Result};
use lautgesetz_word::Word;

use super::{LawOutcome, SoundLaw};
use crate::config::DerivationConfig;

/// Interconsonantal laryngeals disappear in non-initial syllables.
///
/// The first syllabic run of the word is left alone; after it, every
/// laryngeal currently marked syllabic is deleted.
#[derive(Clone, Copy, Debug, Default)]
pub struct LaryngealLoss;

impl SoundLaw for LaryngealLoss {
    fn name(&self) -> &'static str {
        "laryngeal-loss"
    }

    fn label(&self) -> &'static str {
        "After loss of interconsonantal laryngeals in non-initial syllables"
    }

    fn apply(&self, word: &mut Word<'_>, _config: &DerivationConfig) -> Result<LawOutcome> {
        let mut outcome = LawOutcome::unchanged();
        let syllabic = word.syllabic();

        let mut i = syllabic.iter().take_while(|s| !**s).count();
        i += syllabic[i..].iter().take_while(|s| **s).count();

        while i < word.len() {
            if word.is_syllabic(i)? && is_laryngeal(word, i) {
                tracing::trace!(index = i, phoneme = word.phoneme(i)?, "laryngeal lost");
                word.delete_phoneme(i)?;
                outcome.record();
                continue;
            }
            i += 1;
        }
        Ok(outcome)
    }
}

fn is_laryngeal(word: &Word<'_>, i: usize) -> bool {
    word.bundle(i)
        .and_then(|p| p.as_consonant().copied())
        .is_some_and(|c| c.place == Place::Laryngeal)
}
