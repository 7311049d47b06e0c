//! Syllabification inference.
//!
//! Written forms only mark some nuclei. Two passes infer the rest, in a
//! fixed order because the second reads the first's results:
//!
//! 1. A sonorant right after a vowel is syllabic unless a nucleus follows
//!    (`*ey`, `*em` before a consonant or at the end of the word).
//! 2. A laryngeal strictly between two non-syllabic segments is syllabic.
//!
//! Both passes run in phoneme space; silent segments are invisible.

use lautgesetz_foundation::Place;
use lautgesetz_inventory::Inventories;

use crate::segment::{PhonemicSegment, Segment};

/// Runs both passes over the phonemic segments of `segments`.
pub fn syllabify(segments: &mut [Segment], inventories: &Inventories) {
    let mut phonemic: Vec<&mut PhonemicSegment> = segments
        .iter_mut()
        .filter_map(Segment::as_phonemic_mut)
        .collect();
    post_vocalic_sonorants(&mut phonemic, inventories);
    interconsonantal_laryngeals(&mut phonemic, inventories);
}

fn post_vocalic_sonorants(phonemic: &mut [&mut PhonemicSegment], inventories: &Inventories) {
    let n = phonemic.len();
    for i in 1..n {
        let prev = &phonemic[i - 1];
        let cur = &phonemic[i];
        if !inventories.get(prev.notation).phonemes().is_vowel(&prev.phoneme)
            || !inventories.get(cur.notation).phonemes().is_sonorant(&cur.phoneme)
        {
            continue;
        }
        if i == n - 1 || !phonemic[i + 1].syllabic {
            tracing::trace!(index = i, phoneme = %phonemic[i].phoneme, "post-vocalic sonorant");
            phonemic[i].syllabic = true;
        }
    }
}

fn interconsonantal_laryngeals(phonemic: &mut [&mut PhonemicSegment], inventories: &Inventories) {
    let n = phonemic.len();
    for i in 0..n {
        let cur = &phonemic[i];
        if cur.syllabic
            || !inventories
                .get(cur.notation)
                .phonemes()
                .matches_place(&cur.phoneme, Place::Laryngeal)
        {
            continue;
        }
        if i > 0 && i + 1 < n && !phonemic[i - 1].syllabic && !phonemic[i + 1].syllabic {
            tracing::trace!(index = i, phoneme = %phonemic[i].phoneme, "interconsonantal laryngeal");
            phonemic[i].syllabic = true;
        }
    }
}
