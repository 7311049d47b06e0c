//! Integration tests for word parsing and syllabification

use lautgesetz_foundation::{ErrorKind, Notation};
use lautgesetz_inventory::Inventories;
use lautgesetz_word::{Segment, Word, WordNotation, extract};

const PIE: Notation = Notation::ProtoIndoEuropean;
const PBS: Notation = Notation::ProtoBaltoSlavic;

fn flags(bits: &[u8]) -> Vec<bool> {
    bits.iter().map(|b| *b == 1).collect()
}

// =============================================================================
// Extraction
// =============================================================================

#[test]
fn extraction_attaches_marks() {
    assert_eq!(
        extract("gʷʰén-", PIE).unwrap(),
        ["gʷʰ", "é", "n", "-"]
    );
    assert_eq!(extract("", PIE).unwrap(), Vec::<String>::new());
}

#[test]
fn extraction_rejects_leading_mark() {
    let err = extract("₂ent", PIE).unwrap_err();
    assert!(matches!(
        err.kind,
        ErrorKind::MalformedSecondaryMark { mark: '₂', .. }
    ));
}

// =============================================================================
// Syllabification
// =============================================================================

#[test]
fn nokwts() {
    let inventories = Inventories::builtin().unwrap();
    let word = Word::parse("nókʷts", PIE, &inventories).unwrap();
    assert_eq!(word.graphemes(), ["n", "ó", "kʷ", "t", "s"]);
    assert_eq!(word.phonemes(), ["n", "o", "kʷ", "t", "s"]);
    assert_eq!(word.syllabic(), flags(&[0, 1, 0, 0, 0]));
}

#[test]
fn diphthong_offglides() {
    let inventories = Inventories::builtin().unwrap();
    let word = Word::parse("deykti", PIE, &inventories).unwrap();
    assert_eq!(word.phonemes(), ["d", "e", "y", "k", "t", "y"]);
    assert_eq!(word.syllabic(), flags(&[0, 1, 1, 0, 0, 1]));
}

#[test]
fn accented_syllabic_resonants() {
    let inventories = Inventories::builtin().unwrap();
    let word = Word::parse("w\u{13a}\u{325}kʷos", PIE, &inventories).unwrap();
    assert_eq!(word.graphemes(), ["w", "\u{13a}\u{325}", "kʷ", "o", "s"]);
    assert_eq!(word.phonemes(), ["w", "l", "kʷ", "o", "s"]);
    assert_eq!(word.syllabic(), flags(&[0, 1, 0, 1, 0]));
    assert_eq!(word.accented(), flags(&[0, 1, 0, 0, 0]));

    for text in ["\u{1e3f}\u{325}", "\u{144}\u{325}", "\u{155}\u{325}"] {
        let word = Word::parse(text, PIE, &inventories).unwrap();
        assert_eq!(word.syllabic(), [true]);
        assert_eq!(word.accented(), [true]);
    }
}

#[test]
fn interconsonantal_laryngeal() {
    let inventories = Inventories::builtin().unwrap();
    let word = Word::parse("dʰugh₂tḗr", PIE, &inventories).unwrap();
    assert_eq!(word.phonemes(), ["dʰ", "w", "g", "h₂", "t", "ē", "r"]);
    assert_eq!(word.syllabic(), flags(&[0, 1, 0, 1, 0, 1, 1]));
}

#[test]
fn initial_laryngeal_stays_consonantal() {
    let inventories = Inventories::builtin().unwrap();
    let word = Word::parse("h₂ent", PIE, &inventories).unwrap();
    assert_eq!(word.syllabic(), flags(&[0, 1, 1, 0]));
}

#[test]
fn boundary_is_silent() {
    let inventories = Inventories::builtin().unwrap();
    let word = Word::parse("ped-", PIE, &inventories).unwrap();
    assert_eq!(word.len(), 3);
    assert_eq!(word.graphemes().len(), 4);
    assert_eq!(word.silent_graphemes(), flags(&[0, 0, 0, 1]));
    assert!(matches!(word.segments()[3], Segment::Silent(_)));
    assert_eq!(word.to_string(), "ped-");
}

#[test]
fn descendant_input() {
    let inventories = Inventories::builtin().unwrap();
    let word = Word::parse("wī\u{301}\u{2ca}d", PBS, &inventories).unwrap();
    assert_eq!(word.phonemes(), ["w", "ī", "d"]);
    assert_eq!(word.accented(), flags(&[0, 1, 0]));
    assert_eq!(word.notation(), WordNotation::Pure(PBS));
    assert!(word.followed_by_special(1, "acute").unwrap());
}

#[test]
fn unknown_symbol() {
    let inventories = Inventories::builtin().unwrap();
    let err = Word::parse("wekš", PIE, &inventories).unwrap_err();
    match err.kind {
        ErrorKind::UnknownSymbol { symbol, notation } => {
            assert_eq!(symbol, "š");
            assert_eq!(notation, PIE);
        }
        other => panic!("unexpected error: {other:?}"),
    }
}
