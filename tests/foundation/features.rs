//! Integration tests for feature tables and notations

use lautgesetz_foundation::{Backness, Height, Manner, Notation, Place};

#[test]
fn names_round_trip() {
    for height in Height::ALL {
        assert_eq!(Height::from_name(height.name()), Some(*height));
    }
    for backness in Backness::ALL {
        assert_eq!(Backness::from_name(backness.name()), Some(*backness));
    }
    for place in Place::ALL {
        assert_eq!(Place::from_name(place.name()), Some(*place));
    }
    for manner in Manner::ALL {
        assert_eq!(Manner::from_name(manner.name()), Some(*manner));
    }
}

#[test]
fn codes_are_ordered() {
    assert_eq!(Height::Open.code(), 0);
    assert_eq!(Height::Mid.code(), 3);
    assert_eq!(Height::Close.code(), 6);
    assert!(Place::Labial.code() < Place::Laryngeal.code());
}

#[test]
fn unknown_names() {
    assert_eq!(Place::from_name("uvular"), None);
    assert_eq!(Manner::from_name("affricate"), None);
    assert_eq!(Height::from_name("Close"), None);
}

#[test]
fn sonorant_manners() {
    let sonorants: Vec<_> = Manner::ALL.iter().filter(|m| m.is_sonorant()).collect();
    assert_eq!(
        sonorants,
        [
            &Manner::Nasal,
            &Manner::Lateral,
            &Manner::Trill,
            &Manner::Semivowel
        ]
    );
}

#[test]
fn notation_tags() {
    for notation in Notation::ALL {
        assert_eq!(notation.tag().parse::<Notation>().unwrap(), notation);
        assert_eq!(notation.to_string(), notation.tag());
    }
}

#[test]
fn notation_fallbacks_start_with_self() {
    for notation in Notation::ALL {
        let order: Vec<_> = notation.with_fallbacks().collect();
        assert_eq!(order[0], notation);
        assert_eq!(order.len(), Notation::ALL.len());
    }
}
