//! Deck container and its iterators.
//!
//! ## Key Types
//!
//! - `Deck`: ordered card sequence, index 0 = bottom, last = top
//! - `Drain`: destructive iterator yielding cards top-first
//!
//! Randomized operations (`cut`, `shuffle`) live in the `shuffle` module.

pub mod container;
pub mod drain;

pub use container::Deck;
pub use drain::Drain;
