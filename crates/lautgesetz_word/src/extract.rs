//! Splitting input text into written units.

use lautgesetz_foundation::{Error, Notation, Result};

/// Splits `text` into written units.
///
/// Secondary marks of the notation attach to the preceding unit; every
/// other code point starts a new one.
///
/// # Errors
///
/// Returns `MalformedSecondaryMark` if the text starts with a secondary mark.
pub fn extract(text: &str, notation: Notation) -> Result<Vec<String>> {
    let mut units: Vec<String> = Vec::new();
    for c in text.chars() {
        if notation.is_secondary_mark(c) {
            let Some(last) = units.last_mut() else {
                return Err(Error::malformed_secondary_mark(c, notation));
            };
            last.push(c);
        } else {
            units.push(c.to_string());
        }
    }
    Ok(units)
}
