//! Errors raised by deck operations.
//!
//! Absence is not an error: `draw` and `search` return `Option`.

use thiserror::Error;

/// Failure of a deck operation.
#[derive(Clone, Debug, Error, PartialEq)]
pub enum DeckError {
    /// The operation needs more cards than the deck holds.
    #[error("cannot cut deck of less than 2 cards (len={len})")]
    InvalidOperation { len: usize },

    /// The requested shuffle style matches no known algorithm.
    #[error("unknown shuffle style: {0:?}")]
    UnknownShuffleStyle(String),

    /// Riffle weights must be finite, non-negative and not both zero.
    #[error("invalid riffle weights (switch={switch}, stay={stay})")]
    InvalidWeights { switch: f64, stay: f64 },
}

/// Result alias for deck operations.
pub type DeckResult<T> = Result<T, DeckError>;
