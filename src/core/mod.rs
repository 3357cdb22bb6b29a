//! Core types shared by the deck and the shuffles: RNG and errors.

pub mod error;
pub mod rng;

pub use error::{DeckError, DeckResult};
pub use rng::{DeckRng, DeckRngState};
