//! Feature tables.
//!
//! Each articulatory axis is a closed enumeration with a fixed descriptive
//! name (as used in inventory definitions) and a small integer code.
//! Heights are spaced by three so intermediate heights can be slotted in
//! later without renumbering.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

macro_rules! feature_table {
    (
        $(#[$meta:meta])*
        $name:ident { $($(#[$vmeta:meta])* $variant:ident = ($label:literal, $code:literal)),+ $(,)? }
    ) => {
        $(#[$meta])*
        #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
        #[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
        #[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
        pub enum $name {
            $($(#[$vmeta])* $variant),+
        }

        impl $name {
            /// Every value on this axis, in code order.
            pub const ALL: &'static [Self] = &[$(Self::$variant),+];

            /// Looks up a value by its descriptive name.
            #[must_use]
            pub fn from_name(name: &str) -> Option<Self> {
                match name {
                    $($label => Some(Self::$variant),)+
                    _ => None,
                }
            }

            /// Returns the descriptive name.
            #[must_use]
            pub const fn name(self) -> &'static str {
                match self {
                    $(Self::$variant => $label),+
                }
            }

            /// Returns the integer code.
            #[must_use]
            pub const fn code(self) -> u8 {
                match self {
                    $(Self::$variant => $code),+
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.name())
            }
        }
    };
}

feature_table! {
    /// Vowel height.
    Height {
        /// Open (low) vowels.
        Open = ("open", 0),
        /// Mid vowels.
        Mid = ("mid", 3),
        /// Close (high) vowels.
        Close = ("close", 6),
    }
}

feature_table! {
    /// Vowel backness.
    Backness {
        /// Front vowels.
        Front = ("front", 0),
        /// Central vowels.
        Central = ("central", 1),
        /// Back vowels.
        Back = ("back", 2),
    }
}

feature_table! {
    /// Consonant place of articulation.
    Place {
        /// Lips.
        Labial = ("labial", 0),
        /// Tongue tip or blade.
        Coronal = ("coronal", 1),
        /// Hard palate.
        Palatal = ("palatal", 2),
        /// Soft palate.
        Velar = ("velar", 3),
        /// Soft palate with lip rounding.
        Labiovelar = ("labiovelar", 4),
        /// The reconstructed laryngeal series.
        Laryngeal = ("laryngeal", 5),
    }
}

feature_table! {
    /// Consonant manner of articulation.
    Manner {
        /// Nasal stops.
        Nasal = ("nasal", 0),
        /// Oral stops.
        Stop = ("stop", 1),
        /// Fricatives.
        Fricative = ("fricative", 2),
        /// Laterals.
        Lateral = ("lateral", 3),
        /// Trills.
        Trill = ("trill", 4),
        /// Glides.
        Semivowel = ("semivowel", 5),
    }
}

impl Manner {
    /// Returns true for the sonorant manners (nasal, lateral, trill, semivowel).
    #[must_use]
    pub const fn is_sonorant(self) -> bool {
        matches!(
            self,
            Self::Nasal | Self::Lateral | Self::Trill | Self::Semivowel
        )
    }
}

impl Default for Height {
    fn default() -> Self {
        Self::Mid
    }
}

impl Default for Backness {
    fn default() -> Self {
        Self::Central
    }
}

impl Default for Place {
    fn default() -> Self {
        Self::Coronal
    }
}

impl Default for Manner {
    fn default() -> Self {
        Self::Fricative
    }
}
