//! Session-level tests: output formats, analysis, custom inventories

use std::fs;

use lautgesetz::foundation::{DevoicePolicy, Notation};
use lautgesetz::inventory::{PBS_DEFINITION, PIE_DEFINITION};
use lautgesetz::runtime::{OutputFormat, Session};

#[test]
fn text_output() {
    let mut session = Session::new().unwrap();
    let out = session.run("wedh₂teks").unwrap();
    assert_eq!(
        out,
        "0 wedh₂teks Original PIE\n\
         1 wedh₂tekš After RUKI sound law\n\
         2 wedtekš After loss of interconsonantal laryngeals in non-initial syllables\n\
         3 wēˊdtekš After Winter's law"
    );
}

#[test]
fn json_output_parses() {
    let mut session = Session::new().unwrap().with_format(OutputFormat::Json);
    let out = session.run("sed").unwrap();
    let value: serde_json::Value = serde_json::from_str(&out).unwrap();
    let stages = value["stages"].as_array().unwrap();
    assert_eq!(stages.len(), 4);
    assert_eq!(stages[0]["label"], "Original PIE");
    assert_eq!(stages[3]["word"]["phonemes"][1], "ē");
    assert_eq!(stages[3]["word"]["notation"], "Mixed");
}

#[test]
fn descendant_input() {
    let mut session = Session::new().unwrap();
    session.set_notation(Notation::ProtoBaltoSlavic);
    let out = session.run("sēˊd").unwrap();
    assert!(out.starts_with("0 sēˊd Original PBS"));
}

#[test]
fn keep_aspiration() {
    let mut session = Session::new().unwrap();
    session.set_devoice_policy(DevoicePolicy::KeepAspiration);
    assert_eq!(session.derive("gʰsi").unwrap().output(), "gʰsi");
}

#[test]
fn inventories_from_directory() {
    let dir = std::env::temp_dir().join(format!("lautgesetz-session-{}", std::process::id()));
    fs::create_dir_all(&dir).unwrap();
    fs::write(dir.join("PIE.graphemes"), PIE_DEFINITION).unwrap();
    fs::write(dir.join("PBS.graphemes"), PBS_DEFINITION).unwrap();

    let mut session = Session::from_dir(&dir).unwrap();
    assert_eq!(session.derive("sed").unwrap().output(), "sēˊd");
    fs::remove_dir_all(dir).unwrap();
}

#[test]
fn bad_inventory_directory_reports_line() {
    let dir = std::env::temp_dir().join(format!("lautgesetz-bad-{}", std::process::id()));
    fs::create_dir_all(&dir).unwrap();
    fs::write(dir.join("PIE.graphemes"), PIE_DEFINITION).unwrap();
    fs::write(dir.join("PBS.graphemes"), "e vowel front mid short\n\nˊ symbol\n").unwrap();

    let err = Session::from_dir(&dir).unwrap_err();
    assert!(err.to_string().ends_with("(at PBS.graphemes:3)"), "{err}");
    fs::remove_dir_all(dir).unwrap();
}
