//! Property tests for word invariants
//!
//! Every projection stays in step with the segment sequence under any
//! sequence of mutations, and parsing renders back the text it was given.

use lautgesetz_foundation::Notation;
use lautgesetz_inventory::Inventories;
use lautgesetz_word::{ACUTE_ROLE, Word, extract};
use proptest::prelude::*;

const PIE: Notation = Notation::ProtoIndoEuropean;
const PBS: Notation = Notation::ProtoBaltoSlavic;

#[derive(Clone, Debug)]
enum Mutation {
    Set(usize, &'static str, Notation),
    Delete(usize),
    MakeSyllabic(usize),
    Acute(usize),
    Boundary(usize),
}

fn mutation() -> impl Strategy<Value = Mutation> {
    let symbols = prop::sample::select(vec!["e", "o", "ē", "š", "k", "s", "r", "h₂", "y"]);
    let notation = prop_oneof![Just(PIE), Just(PBS)];
    prop_oneof![
        (0usize..8, symbols, notation).prop_map(|(i, s, n)| Mutation::Set(i, s, n)),
        (0usize..8).prop_map(Mutation::Delete),
        (0usize..8).prop_map(Mutation::MakeSyllabic),
        (0usize..8).prop_map(Mutation::Acute),
        (0usize..10).prop_map(Mutation::Boundary),
    ]
}

fn apply(word: &mut Word<'_>, mutation: &Mutation) {
    let inventories = word.inventories();
    // Failures are allowed; they must leave the invariants intact too.
    let _ = match *mutation {
        Mutation::Set(i, symbol, notation) => word.set_phoneme(i, symbol, notation),
        Mutation::Delete(i) => word.delete_phoneme(i),
        Mutation::MakeSyllabic(i) => word.make_syllabic(i),
        Mutation::Acute(i) => word.add_acute(i),
        Mutation::Boundary(pos) => {
            let boundary = inventories.get(PIE).find_special("boundary");
            match boundary {
                Ok(special) => word.add_special(pos, special, PIE),
                Err(e) => Err(e),
            }
        }
    };
}

fn check(word: &Word<'_>) -> Result<(), TestCaseError> {
    let n = word.len();
    prop_assert_eq!(word.phonemes().len(), n);
    prop_assert_eq!(word.syllabic().len(), n);
    prop_assert_eq!(word.accented().len(), n);

    let graphemes = word.graphemes();
    let silent = word.silent_graphemes();
    prop_assert_eq!(graphemes.len(), silent.len());
    prop_assert_eq!(silent.iter().filter(|s| !**s).count(), n);
    prop_assert_eq!(graphemes.concat(), word.text());

    for i in 0..n {
        let pos = word.segment_index(i).unwrap();
        prop_assert!(!silent[pos]);
        prop_assert_eq!(graphemes[pos], word.segments()[pos].grapheme());
    }
    prop_assert!(word.segment_index(n).is_err());

    let snapshot = word.snapshot();
    prop_assert_eq!(&snapshot.text, word.text());
    prop_assert_eq!(snapshot.phonemes.len(), n);
    Ok(())
}

fn words() -> impl Strategy<Value = &'static str> {
    prop::sample::select(vec![
        "sed", "weks", "nókʷts", "dʰugh₂tḗr", "ph₂tḗr", "eyd", "bid", "h₁ed", "wedh₂teks", "",
    ])
}

fn spelled_units(notation: Notation) -> Vec<String> {
    let inventories = Inventories::builtin().unwrap();
    let inventory = inventories.get(notation);
    let mut units: Vec<String> = inventory.iter().map(|(g, _)| g.to_string()).collect();
    units.extend(
        ["-", "ˊ"]
            .iter()
            .filter(|g| inventory.special(g).is_some())
            .map(|g| (*g).to_string()),
    );
    units.sort();
    units
}

proptest! {
    #[test]
    fn mutations_preserve_invariants(
        text in words(),
        mutations in prop::collection::vec(mutation(), 0..12),
    ) {
        let inventories = Inventories::builtin().unwrap();
        let mut word = Word::parse(text, PIE, &inventories).unwrap();
        check(&word)?;
        for mutation in &mutations {
            apply(&mut word, mutation);
            check(&word)?;
        }
    }

    #[test]
    fn acute_is_always_followed_by_mark(text in words(), i in 0usize..8) {
        let inventories = Inventories::builtin().unwrap();
        let mut word = Word::parse(text, PIE, &inventories).unwrap();
        if word.add_acute(i).is_ok() {
            let syllabic = word.syllabic();
            let mut last = i;
            while last + 1 < word.len() && syllabic[last + 1] {
                last += 1;
            }
            prop_assert!(word.followed_by_special(last, ACUTE_ROLE).unwrap());
        }
    }

    #[test]
    fn pie_text_round_trips(units in prop::collection::vec(prop::sample::select(spelled_units(PIE)), 0..10)) {
        let text = units.concat();
        prop_assert_eq!(extract(&text, PIE).unwrap(), units);
        let inventories = Inventories::builtin().unwrap();
        let word = Word::parse(&text, PIE, &inventories).unwrap();
        prop_assert_eq!(word.text(), text.as_str());
        prop_assert_eq!(word.graphemes().concat(), text);
    }

    #[test]
    fn pbs_text_round_trips(units in prop::collection::vec(prop::sample::select(spelled_units(PBS)), 0..10)) {
        let text = units.concat();
        prop_assert_eq!(extract(&text, PBS).unwrap(), units);
        let inventories = Inventories::builtin().unwrap();
        let word = Word::parse(&text, PBS, &inventories).unwrap();
        prop_assert_eq!(word.to_string(), text);
    }
}
