//! # card-deck
//!
//! An ordered, mutable card container with shuffles modelled on how people
//! actually shuffle cards.
//!
//! ## Design Principles
//!
//! 1. **Opaque Cards**: Cards only need `PartialEq`. No suits, ranks or rules.
//!
//! 2. **Injected Randomness**: Every randomized operation takes a `DeckRng`.
//!    The same seed always produces the same shuffle.
//!
//! 3. **Closed Set of Styles**: `ShuffleKind` is an enum; string names are
//!    resolved by prefix against a fixed table.
//!
//! ## Orientation
//!
//! Index 0 of a deck is the bottom and the last index is the top. `draw` and
//! `place` work on the top. `split(i)` returns the portion *above* `i` first.
//!
//! ## Modules
//!
//! - `core`: RNG and error types
//! - `deck`: The `Deck` container and its draining iterator
//! - `shuffle`: Cut, overhand, riffle and Fisher-Yates

pub mod core;
pub mod deck;
pub mod shuffle;

// Re-export commonly used types
pub use crate::core::{DeckError, DeckResult, DeckRng, DeckRngState};

pub use crate::deck::{Deck, Drain};

pub use crate::shuffle::{RiffleWeights, ShuffleKind};
