//! Inventory definition parsing.
//!
//! Definitions are line-oriented UTF-8 text, one entry per line:
//!
//! ```text
//! # comment
//! kʷ labiovelar stop voiceless
//! ḗ  vowel front mid long accented
//! ˊ  symbol acute
//! ```
//!
//! Blank lines and lines starting with `#` are skipped. Entry order matters:
//! the first entry for a feature bundle fixes its canonical spelling.

use lautgesetz_foundation::{Error, ErrorContext, Result};

/// One definition line: a grapheme and its quality tokens.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Entry {
    /// The written grapheme.
    pub grapheme: String,
    /// Quality tokens, in the order written.
    pub qualities: Vec<String>,
    /// Source name, for diagnostics.
    pub source: String,
    /// 1-indexed line number.
    pub line: usize,
}

impl Entry {
    /// Attaches this entry's location to an error.
    #[must_use]
    pub fn annotate(&self, error: Error) -> Error {
        error.with_context(
            ErrorContext::new()
                .with_source(self.source.clone())
                .with_line(self.line),
        )
    }
}

/// Parses a definition into entries.
///
/// # Errors
///
/// Returns `MalformedEntry` for a line that names a grapheme but no
/// qualities.
pub fn parse(source: &str, text: &str) -> Result<Vec<Entry>> {
    let mut entries = Vec::new();
    for (index, raw) in text.lines().enumerate() {
        if raw.starts_with('#') {
            continue;
        }
        let mut words = raw.split_whitespace();
        let Some(grapheme) = words.next() else {
            continue;
        };
        let entry = Entry {
            grapheme: grapheme.to_string(),
            qualities: words.map(str::to_string).collect(),
            source: source.to_string(),
            line: index + 1,
        };
        if entry.qualities.is_empty() {
            return Err(entry.annotate(Error::malformed_entry(format!(
                "grapheme {grapheme:?} has no qualities"
            ))));
        }
        entries.push(entry);
    }
    tracing::trace!(source, entries = entries.len(), "parsed inventory definition");
    Ok(entries)
}
