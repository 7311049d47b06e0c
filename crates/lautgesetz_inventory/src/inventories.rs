//! The set of inventories a derivation runs against.
//!
//! Inventories are built once, explicitly, and passed by reference into
//! word construction and the pipeline. Nothing here is global.

use std::fs;
use std::path::Path;

use lautgesetz_foundation::{Error, ErrorContext, Notation, Result};

use crate::definition;
use crate::graphemes::{GraphemeInventory, SpecialGrapheme};

/// Built-in Proto-Indo-European definition.
pub const PIE_DEFINITION: &str = include_str!("../data/PIE.graphemes");

/// Built-in Proto-Balto-Slavic definition.
pub const PBS_DEFINITION: &str = include_str!("../data/PBS.graphemes");

/// File extension of definition files.
pub const DEFINITION_EXTENSION: &str = "graphemes";

/// One grapheme inventory per supported notation.
#[derive(Clone, Debug)]
pub struct Inventories {
    pie: GraphemeInventory,
    pbs: GraphemeInventory,
}

impl Inventories {
    /// Builds the inventories from the definitions shipped with the crate.
    ///
    /// # Errors
    ///
    /// Returns an error if a built-in definition is malformed.
    pub fn builtin() -> Result<Self> {
        Self::from_definitions(|notation| {
            Ok(match notation {
                Notation::ProtoIndoEuropean => PIE_DEFINITION.to_string(),
                Notation::ProtoBaltoSlavic => PBS_DEFINITION.to_string(),
            })
        })
    }

    /// Loads `<TAG>.graphemes` for every notation from `dir`.
    ///
    /// # Errors
    ///
    /// Returns `Io` if a file cannot be read, or the first definition error.
    pub fn from_dir(dir: impl AsRef<Path>) -> Result<Self> {
        let dir = dir.as_ref();
        Self::from_definitions(|notation| {
            let path = dir.join(format!("{}.{DEFINITION_EXTENSION}", notation.tag()));
            fs::read_to_string(&path).map_err(|e| {
                Error::from(e).with_context(ErrorContext::new().with_source(path.display().to_string()))
            })
        })
    }

    /// Builds the inventories from a definition source per notation.
    ///
    /// # Errors
    ///
    /// Returns whatever `read` or parsing reports first.
    pub fn from_definitions(mut read: impl FnMut(Notation) -> Result<String>) -> Result<Self> {
        let mut build = |notation: Notation| -> Result<GraphemeInventory> {
            let text = read(notation)?;
            let source = format!("{}.{DEFINITION_EXTENSION}", notation.tag());
            let entries = definition::parse(&source, &text)?;
            GraphemeInventory::from_entries(notation, &entries)
        };
        Ok(Self {
            pie: build(Notation::ProtoIndoEuropean)?,
            pbs: build(Notation::ProtoBaltoSlavic)?,
        })
    }

    /// Returns the inventory for a notation.
    #[must_use]
    pub const fn get(&self, notation: Notation) -> &GraphemeInventory {
        match notation {
            Notation::ProtoIndoEuropean => &self.pie,
            Notation::ProtoBaltoSlavic => &self.pbs,
        }
    }

    /// Finds a special symbol by role, trying `preferred` first.
    ///
    /// # Errors
    ///
    /// Returns `MissingGraphemeForFeatures` (for `preferred`) if no notation
    /// defines the role.
    pub fn find_special(
        &self,
        role: &str,
        preferred: Notation,
    ) -> Result<(Notation, &SpecialGrapheme)> {
        let mut first_error = None;
        for notation in preferred.with_fallbacks() {
            match self.get(notation).find_special(role) {
                Ok(special) => return Ok((notation, special)),
                Err(e) => {
                    first_error.get_or_insert(e);
                }
            }
        }
        Err(first_error.unwrap_or_else(|| {
            Error::missing_grapheme(format!("special {role:?}"), preferred)
        }))
    }
}
