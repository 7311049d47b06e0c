//! Integration tests for Error types
//!
//! Tests error construction, display, context, and error kinds.

use lautgesetz_foundation::{Error, ErrorContext, ErrorKind, Notation};

// =============================================================================
// Error Construction
// =============================================================================

#[test]
fn error_unknown_symbol() {
    let err = Error::unknown_symbol("q", Notation::ProtoIndoEuropean);
    assert!(matches!(err.kind, ErrorKind::UnknownSymbol { .. }));
    let msg = format!("{err}");
    assert!(msg.contains("\"q\""));
    assert!(msg.contains("PIE"));
}

#[test]
fn error_unknown_quality() {
    let err = Error::unknown_quality("glottalic", "kʼ");
    assert!(matches!(err.kind, ErrorKind::UnknownQuality { .. }));
    assert!(format!("{err}").contains("glottalic"));
}

#[test]
fn error_missing_grapheme() {
    let err = Error::missing_grapheme("voiceless velar stop", Notation::ProtoBaltoSlavic);
    assert!(matches!(
        err.kind,
        ErrorKind::MissingGraphemeForFeatures {
            notation: Notation::ProtoBaltoSlavic,
            ..
        }
    ));
}

#[test]
fn error_malformed_secondary_mark() {
    let err = Error::malformed_secondary_mark('ʷ', Notation::ProtoIndoEuropean);
    assert!(format!("{err}").contains("beginning of word"));
}

#[test]
fn error_index_out_of_bounds() {
    let err = Error::index_out_of_bounds(7, 3);
    assert!(matches!(
        err.kind,
        ErrorKind::IndexOutOfBounds {
            index: 7,
            length: 3
        }
    ));
    assert_eq!(format!("{err}"), "index out of bounds: 7 (length 3)");
}

#[test]
fn error_unknown_notation() {
    let err = Error::unknown_notation("PGmc");
    assert_eq!(format!("{err}"), "unknown notation: PGmc");
}

#[test]
fn error_invalid_command() {
    let err = Error::invalid_command(":frobnicate");
    assert!(matches!(err.kind, ErrorKind::InvalidCommand(_)));
}

#[test]
fn error_from_io() {
    let io = std::io::Error::new(std::io::ErrorKind::NotFound, "no such file");
    let err: Error = io.into();
    assert!(matches!(err.kind, ErrorKind::Io(_)));
}

// =============================================================================
// Error Context
// =============================================================================

#[test]
fn context_carries_source_and_line() {
    let err = Error::malformed_entry("special entry needs one role").with_context(
        ErrorContext::new()
            .with_source("PIE.graphemes")
            .with_line(12),
    );
    let context = err.context.as_ref().unwrap();
    assert_eq!(context.source.as_deref(), Some("PIE.graphemes"));
    assert_eq!(context.line, Some(12));
    assert_eq!(context.to_string(), "at PIE.graphemes:12");
}

#[test]
fn context_frames() {
    let context = ErrorContext::new()
        .with_source("PBS.graphemes")
        .with_frame("winter");
    let shown = context.to_string();
    assert!(shown.contains("in winter"));
}
