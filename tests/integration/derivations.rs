//! Known derivations from input text to Proto-Balto-Slavic

use lautgesetz::engine::Pipeline;
use lautgesetz::inventory::Inventories;

const CASES: &[(&str, &str)] = &[
    ("sed", "sēˊd"),
    ("weks", "wekš"),
    ("dʰugh₂tḗr", "dʰūˊgtḗr"),
    ("wedh₂teks", "wēˊdtekš"),
    ("eyd", "eyˊd"),
    ("bid", "bīˊd"),
    ("medʰ", "medʰ"),
    ("nókʷts", "nókʷts"),
    ("w\u{13a}\u{325}kʷos", "w\u{13a}\u{325}kʷos"),
];

#[test]
fn known_outputs() {
    let inventories = Inventories::builtin().unwrap();
    let pipeline = Pipeline::default();
    for (input, expected) in CASES {
        let derivation = pipeline.derive_text(input, &inventories).unwrap();
        assert_eq!(derivation.output(), *expected, "deriving {input}");
    }
}

#[test]
fn derivations_are_repeatable() {
    let inventories = Inventories::builtin().unwrap();
    let pipeline = Pipeline::default();
    for (input, _) in CASES {
        let a = pipeline.derive_text(input, &inventories).unwrap();
        let b = pipeline.derive_text(input, &inventories).unwrap();
        assert_eq!(a, b);
    }
}
