//! Winter's law: compensatory accentuation before plain voiced stops.

use lautgesetz_foundation::Result;
use lautgesetz_word::{ACUTE_ROLE, Word};

use super::{LawOutcome, SoundLaw};
use crate::config::DerivationConfig;

/// Nucleus-initial phonemes the law applies to.
pub const NUCLEI: [&str; 4] = ["e", "o", "y", "w"];

/// A nucleus before an unaspirated voiced stop gets the acute.
///
/// Monophthongs are lengthened as well; diphthongs (`ey`, `ow`, ...) keep
/// their length. Nuclei that already carry the acute are skipped.
#[derive(Clone, Copy, Debug, Default)]
pub struct WintersLaw;

impl SoundLaw for WintersLaw {
    fn name(&self) -> &'static str {
        "winter"
    }

    fn label(&self) -> &'static str {
        "After Winter's law"
    }

    fn apply(&self, word: &mut Word<'_>, _config: &DerivationConfig) -> Result<LawOutcome> {
        let mut outcome = LawOutcome::unchanged();
        let mut i = 0;
        while i + 1 < word.len() {
            if !word.is_syllabic(i)? {
                i += 1;
                continue;
            }

            let mut last = i;
            while last + 1 < word.len() && word.is_syllabic(last + 1)? {
                last += 1;
            }

            if NUCLEI.contains(&word.phoneme(i)?)
                && triggers(word, i)?
                && !word.followed_by_special(last, ACUTE_ROLE)?
            {
                tracing::trace!(index = i, phoneme = word.phoneme(i)?, "winter");
                word.add_acute(i)?;
                outcome.record();
            }
            i = last + 1;
        }
        Ok(outcome)
    }
}

/// A plain voiced stop follows directly, or after a second nucleus segment.
fn triggers(word: &Word<'_>, i: usize) -> Result<bool> {
    if is_plain_voiced_stop(word, i + 1) {
        return Ok(true);
    }
    Ok(i + 2 < word.len() && word.is_syllabic(i + 1)? && is_plain_voiced_stop(word, i + 2))
}

fn is_plain_voiced_stop(word: &Word<'_>, i: usize) -> bool {
    word.bundle(i)
        .and_then(|p| p.as_consonant().copied())
        .is_some_and(|c| c.is_plain_voiced_stop())
}
