//! Integration tests for word mutation

use lautgesetz_foundation::{ErrorKind, Notation};
use lautgesetz_inventory::Inventories;
use lautgesetz_word::{ACUTE_ROLE, Word, WordNotation};

const PIE: Notation = Notation::ProtoIndoEuropean;
const PBS: Notation = Notation::ProtoBaltoSlavic;

#[test]
fn set_phoneme_in_descendant_marks_mixed() {
    let inventories = Inventories::builtin().unwrap();
    let mut word = Word::parse("weks", PIE, &inventories).unwrap();
    word.set_phoneme(3, "š", PBS).unwrap();
    assert_eq!(word.to_string(), "wekš");
    assert_eq!(word.notation(), WordNotation::Mixed);
    assert_eq!(word.notation().to_string(), "mixed");
    assert_eq!(word.phoneme_notation(3).unwrap(), PBS);
    assert_eq!(word.phoneme_notation(2).unwrap(), PIE);
}

#[test]
fn set_phoneme_keeps_flags() {
    let inventories = Inventories::builtin().unwrap();
    let mut word = Word::parse("séd", PIE, &inventories).unwrap();
    word.set_phoneme(1, "o", PIE).unwrap();
    assert_eq!(word.to_string(), "sód");
    assert!(word.is_accented(1).unwrap());
    assert_eq!(word.notation(), WordNotation::Pure(PIE));
}

#[test]
fn set_phoneme_failure_leaves_word_alone() {
    let inventories = Inventories::builtin().unwrap();
    let mut word = Word::parse("weks", PIE, &inventories).unwrap();
    let err = word.set_phoneme(3, "š", PIE).unwrap_err();
    assert!(matches!(err.kind, ErrorKind::MissingGraphemeForFeatures { .. }));
    assert_eq!(word.to_string(), "weks");
    assert_eq!(word.notation(), WordNotation::Pure(PIE));
}

#[test]
fn delete_skips_silent_segments() {
    let inventories = Inventories::builtin().unwrap();
    let mut word = Word::parse("-h₂ent", PIE, &inventories).unwrap();
    word.delete_phoneme(0).unwrap();
    assert_eq!(word.to_string(), "-ent");
    assert_eq!(word.phonemes(), ["e", "n", "t"]);
}

#[test]
fn make_syllabic_keeps_grapheme() {
    let inventories = Inventories::builtin().unwrap();
    let mut word = Word::parse("wlkʷos", PIE, &inventories).unwrap();
    assert!(!word.is_syllabic(1).unwrap());
    word.make_syllabic(1).unwrap();
    assert!(word.is_syllabic(1).unwrap());
    assert_eq!(word.to_string(), "wlkʷos");
}

#[test]
fn add_special_from_other_notation() {
    let inventories = Inventories::builtin().unwrap();
    let (notation, acute) = inventories.find_special(ACUTE_ROLE, PIE).unwrap();
    let mut word = Word::parse("ped", PIE, &inventories).unwrap();
    word.add_special(2, acute, notation).unwrap();
    assert_eq!(word.to_string(), "peˊd");
    assert_eq!(word.len(), 3);
    assert!(word.followed_by_special(1, ACUTE_ROLE).unwrap());
    assert_eq!(word.notation(), WordNotation::Mixed);
    assert_eq!(word.segment_index(2).unwrap(), 3);
}

#[test]
fn add_acute_lengthens_monophthong() {
    let inventories = Inventories::builtin().unwrap();
    let mut word = Word::parse("sed", PIE, &inventories).unwrap();
    word.add_acute(1).unwrap();
    assert_eq!(word.to_string(), "sēˊd");
    assert_eq!(word.phonemes(), ["s", "ē", "d"]);
    // ē is spelled in the word's own notation
    assert_eq!(word.phoneme_notation(1).unwrap(), PIE);
}

#[test]
fn add_acute_marks_end_of_diphthong() {
    let inventories = Inventories::builtin().unwrap();
    let mut word = Word::parse("eyd", PIE, &inventories).unwrap();
    word.add_acute(0).unwrap();
    assert_eq!(word.to_string(), "eyˊd");
    assert_eq!(word.phonemes(), ["e", "y", "d"]);
}

#[test]
fn add_acute_falls_back_for_long_close_vowels() {
    let inventories = Inventories::builtin().unwrap();
    let mut word = Word::parse("bid", PIE, &inventories).unwrap();
    word.add_acute(1).unwrap();
    assert_eq!(word.to_string(), "bīˊd");
    assert_eq!(word.phoneme_notation(1).unwrap(), PBS);
}

#[test]
fn out_of_range() {
    let inventories = Inventories::builtin().unwrap();
    let mut word = Word::parse("sed", PIE, &inventories).unwrap();
    for err in [
        word.phoneme(3).unwrap_err(),
        word.set_phoneme(3, "t", PIE).unwrap_err(),
        word.delete_phoneme(3).unwrap_err(),
        word.add_acute(5).unwrap_err(),
    ] {
        assert!(matches!(
            err.kind,
            ErrorKind::IndexOutOfBounds { length: 3, .. }
        ));
    }
    let acute = inventories.get(PBS).find_special(ACUTE_ROLE).unwrap();
    assert!(word.add_special(4, acute, PBS).is_err());
    assert!(word.add_special(3, acute, PBS).is_ok());
}
