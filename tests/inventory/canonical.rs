//! Integration tests for phoneme canonicalization and devoicing

use lautgesetz_foundation::{DevoicePolicy, Notation, Place};
use lautgesetz_inventory::{Inventories, PhonemeInventory};
use proptest::prelude::*;

const STOPS: &[(&str, &[&str])] = &[
    ("p", &["labial", "stop", "voiceless"]),
    ("t", &["coronal", "stop", "voiceless"]),
    ("k", &["velar", "stop", "voiceless"]),
    ("b", &["labial", "stop", "voiced"]),
    ("d", &["coronal", "stop", "voiced"]),
    ("g", &["velar", "stop", "voiced"]),
    ("c", &["velar", "stop", "voiceless"]),
    ("ɡ", &["velar", "stop", "voiced"]),
];

fn build(order: &[usize]) -> PhonemeInventory {
    let mut inventory = PhonemeInventory::new();
    for &i in order {
        let (symbol, qualities) = STOPS[i];
        inventory
            .register_consonant(symbol, qualities.iter().copied())
            .unwrap();
    }
    inventory
}

fn symbols(notation: Notation) -> Vec<String> {
    let inventories = Inventories::builtin().unwrap();
    inventories
        .get(notation)
        .phonemes()
        .consonants
        .symbols()
        .map(str::to_string)
        .collect()
}

// =============================================================================
// Canonical symbols
// =============================================================================

#[test]
fn first_registration_wins() {
    let inventory = build(&[0, 1, 2, 6]);
    let c = *inventory.consonant("c").unwrap();
    assert_eq!(inventory.canonical_consonant(&c), Some("k"));

    let inventory = build(&[6, 2]);
    let k = *inventory.consonant("k").unwrap();
    assert_eq!(inventory.canonical_consonant(&k), Some("c"));
}

#[test]
fn register_returns_canonical() {
    let mut inventory = PhonemeInventory::new();
    let first = inventory
        .register_consonant("g", ["velar", "stop"])
        .unwrap();
    let alias = inventory
        .register_consonant("ɡ", ["velar", "stop", "voiced"])
        .unwrap();
    assert_eq!(first, "g");
    assert_eq!(alias, "g");
}

#[test]
fn builtin_aliases() {
    let inventories = Inventories::builtin().unwrap();
    let pie = inventories.get(Notation::ProtoIndoEuropean);
    assert_eq!(pie.lookup("j").unwrap().phoneme, "y");
    assert_eq!(pie.find("y", false, false).unwrap(), "y");
}

#[test]
fn place_queries() {
    let inventories = Inventories::builtin().unwrap();
    let pie = inventories.get(Notation::ProtoIndoEuropean).phonemes();
    assert!(pie.matches_place("h₂", Place::Laryngeal));
    assert!(pie.matches_place("H", Place::Laryngeal));
    assert!(!pie.matches_place("s", Place::Laryngeal));
    assert!(!pie.matches_place("e", Place::Laryngeal));
    assert!(pie.is_sonorant("r"));
    assert!(!pie.is_sonorant("t"));
    assert!(pie.is_vowel("o"));
}

// =============================================================================
// Devoicing
// =============================================================================

#[test]
fn devoicing_in_pie() {
    let inventories = Inventories::builtin().unwrap();
    let pie = inventories.get(Notation::ProtoIndoEuropean).phonemes();
    assert_eq!(pie.devoice("g", DevoicePolicy::Deaspirate), "k");
    assert_eq!(pie.devoice("gʰ", DevoicePolicy::Deaspirate), "k");
    assert_eq!(pie.devoice("gʷʰ", DevoicePolicy::Deaspirate), "kʷ");
    // no voiceless aspirates to land on
    assert_eq!(pie.devoice("gʰ", DevoicePolicy::KeepAspiration), "gʰ");
    assert_eq!(pie.devoice("k", DevoicePolicy::Deaspirate), "k");
    assert_eq!(pie.devoice("e", DevoicePolicy::Deaspirate), "e");
    assert_eq!(pie.devoice("r", DevoicePolicy::Deaspirate), "r");
}

#[test]
fn devoicing_in_pbs() {
    let inventories = Inventories::builtin().unwrap();
    let pbs = inventories.get(Notation::ProtoBaltoSlavic).phonemes();
    assert_eq!(pbs.devoice("ž", DevoicePolicy::Deaspirate), "š");
    assert_eq!(pbs.devoice("z", DevoicePolicy::Deaspirate), "s");
}

proptest! {
    #[test]
    fn canonicalization_is_deterministic(order in Just((0..STOPS.len()).collect::<Vec<_>>()).prop_shuffle()) {
        let a = build(&order);
        let b = build(&order);
        for (symbol, _) in STOPS {
            let bundle = a.consonant(symbol).unwrap();
            prop_assert_eq!(a.canonical_consonant(bundle), b.canonical_consonant(bundle));
            let canonical = a.canonical_consonant(bundle).unwrap();
            let first = order
                .iter()
                .map(|&i| STOPS[i].0)
                .find(|s| a.consonant(s) == Some(bundle))
                .unwrap();
            prop_assert_eq!(canonical, first);
        }
    }

    #[test]
    fn devoicing_is_idempotent(
        symbol in prop::sample::select(
            symbols(Notation::ProtoIndoEuropean)
                .into_iter()
                .chain(symbols(Notation::ProtoBaltoSlavic))
                .collect::<Vec<_>>()
        ),
        keep in any::<bool>(),
    ) {
        let policy = if keep { DevoicePolicy::KeepAspiration } else { DevoicePolicy::Deaspirate };
        let inventories = Inventories::builtin().unwrap();
        for notation in Notation::ALL {
            let phonemes = inventories.get(notation).phonemes();
            let once = phonemes.devoice(&symbol, policy);
            prop_assert_eq!(phonemes.devoice(once, policy), once);
        }
    }
}
