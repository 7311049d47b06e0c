//! Integration tests for grapheme inventories

use lautgesetz_foundation::{ErrorKind, Notation};
use lautgesetz_inventory::{GraphemeInventory, Inventories, PhonemicGrapheme};

fn builtin() -> Inventories {
    Inventories::builtin().unwrap()
}

#[test]
fn pie_lookup() {
    let inventories = builtin();
    let pie = inventories.get(Notation::ProtoIndoEuropean);
    assert_eq!(
        pie.lookup("ḗ"),
        Some(&PhonemicGrapheme::new("ē", true, true))
    );
    assert_eq!(pie.lookup("r̥"), Some(&PhonemicGrapheme::new("r", true, false)));
    assert_eq!(pie.lookup("kʷ"), Some(&PhonemicGrapheme::new("kʷ", false, false)));
    assert!(pie.lookup("š").is_none());
}

#[test]
fn pbs_find() {
    let inventories = builtin();
    let pbs = inventories.get(Notation::ProtoBaltoSlavic);
    assert_eq!(pbs.find("ē", true, false).unwrap(), "ē");
    assert_eq!(pbs.find("ī", true, true).unwrap(), "ī́");
    assert_eq!(pbs.find("š", false, false).unwrap(), "š");
}

#[test]
fn find_misses_are_errors() {
    let inventories = builtin();
    let pie = inventories.get(Notation::ProtoIndoEuropean);
    let err = pie.find("š", false, false).unwrap_err();
    assert!(matches!(
        err.kind,
        ErrorKind::MissingGraphemeForFeatures {
            notation: Notation::ProtoIndoEuropean,
            ..
        }
    ));
}

#[test]
fn every_grapheme_has_a_spelling() {
    let inventories = builtin();
    for notation in Notation::ALL {
        let inventory = inventories.get(notation);
        for (_, triple) in inventory.iter() {
            let spelled = inventory
                .find(&triple.phoneme, triple.syllabic, triple.accented)
                .unwrap();
            assert_eq!(inventory.lookup(spelled), Some(triple));
        }
    }
}

#[test]
fn specials() {
    let inventories = builtin();
    let pbs = inventories.get(Notation::ProtoBaltoSlavic);
    assert_eq!(pbs.find_special("acute").unwrap().grapheme, "ˊ");
    assert_eq!(pbs.special("-").unwrap().role, "boundary");
    assert!(inventories
        .get(Notation::ProtoIndoEuropean)
        .find_special("acute")
        .is_err());
}

#[test]
fn first_grapheme_is_the_spelling() {
    let mut inventory = GraphemeInventory::new(Notation::ProtoBaltoSlavic);
    inventory.add("x", &["velar", "fricative", "voiceless"]).unwrap();
    inventory.add("ch", &["velar", "fricative", "voiceless"]).unwrap();
    assert_eq!(inventory.find("x", false, false).unwrap(), "x");
    assert_eq!(inventory.lookup("ch").unwrap().phoneme, "x");
    assert_eq!(inventory.len(), 2);
}
