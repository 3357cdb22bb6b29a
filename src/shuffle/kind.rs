//! Shuffle style names and their resolution.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::core::error::{DeckError, DeckResult};

/// The shuffle algorithms a deck knows.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ShuffleKind {
    /// Pull chunks off the top and restack them.
    Overhand,
    /// Cut and interleave the two packets.
    #[default]
    Riffle,
    /// Uniform random permutation.
    FisherYates,
}

/// Canonical names in resolution order. A name that prefixes several entries
/// resolves to the first.
const SHUFFLE_NAMES: [(&str, ShuffleKind); 3] = [
    ("overhand", ShuffleKind::Overhand),
    ("riffle", ShuffleKind::Riffle),
    ("fisheryates", ShuffleKind::FisherYates),
];

impl ShuffleKind {
    /// All styles, in resolution order.
    pub const ALL: [ShuffleKind; 3] = [Self::Overhand, Self::Riffle, Self::FisherYates];

    /// Canonical lowercase name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Overhand => "overhand",
            Self::Riffle => "riffle",
            Self::FisherYates => "fisheryates",
        }
    }

    /// Resolve a case-insensitive, non-empty prefix of a canonical name.
    ///
    /// ```
    /// use card_deck::ShuffleKind;
    ///
    /// assert_eq!(ShuffleKind::resolve("f").unwrap(), ShuffleKind::FisherYates);
    /// assert_eq!(ShuffleKind::resolve("RIFFLE").unwrap(), ShuffleKind::Riffle);
    /// assert!(ShuffleKind::resolve("banana").is_err());
    /// ```
    pub fn resolve(name: &str) -> DeckResult<Self> {
        let wanted = name.to_lowercase();
        if wanted.is_empty() {
            return Err(DeckError::UnknownShuffleStyle(name.to_string()));
        }

        SHUFFLE_NAMES
            .iter()
            .find(|(canonical, _)| canonical.starts_with(wanted.as_str()))
            .map(|&(_, kind)| kind)
            .ok_or_else(|| DeckError::UnknownShuffleStyle(name.to_string()))
    }
}

impl FromStr for ShuffleKind {
    type Err = DeckError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::resolve(s)
    }
}

impl fmt::Display for ShuffleKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
