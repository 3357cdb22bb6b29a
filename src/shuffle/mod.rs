//! Randomized reordering: cut and the three shuffle styles.
//!
//! ## Key Types
//!
//! - `ShuffleKind`: closed set of styles, resolved from names by prefix
//! - `RiffleWeights`: the riffle's switch/stay weighting
//!
//! ## Usage
//!
//! ```
//! use card_deck::{Deck, DeckRng, ShuffleKind};
//!
//! let mut rng = DeckRng::new(42);
//! let mut deck: Deck<u32> = (0..52).collect();
//!
//! deck.shuffle("over", None, &mut rng)?
//!     .shuffle_with(ShuffleKind::Riffle, None, &mut rng)?;
//! assert_eq!(deck.len(), 52);
//! # Ok::<(), card_deck::DeckError>(())
//! ```

pub mod cut;
pub mod fisher_yates;
pub mod kind;
pub mod overhand;
pub mod riffle;

pub use kind::ShuffleKind;
pub use riffle::RiffleWeights;

use tracing::debug;

use crate::core::error::DeckResult;
use crate::core::rng::DeckRng;
use crate::deck::Deck;

impl<C> Deck<C> {
    /// Shuffle by style name.
    ///
    /// `kind` is any case-insensitive, non-empty prefix of `"overhand"`,
    /// `"riffle"` or `"fisheryates"`. `aux` is only used by the riffle.
    ///
    /// Fails with `UnknownShuffleStyle` for an unrecognized name, and with
    /// `InvalidOperation` when riffling fewer than two cards.
    pub fn shuffle(
        &mut self,
        kind: &str,
        aux: Option<RiffleWeights>,
        rng: &mut DeckRng,
    ) -> DeckResult<&mut Self> {
        let kind = ShuffleKind::resolve(kind)?;
        self.shuffle_with(kind, aux, rng)
    }

    /// Shuffle with an already resolved style.
    pub fn shuffle_with(
        &mut self,
        kind: ShuffleKind,
        aux: Option<RiffleWeights>,
        rng: &mut DeckRng,
    ) -> DeckResult<&mut Self> {
        debug!(%kind, len = self.len(), "shuffling deck");
        match kind {
            ShuffleKind::Overhand => overhand::overhand(self, rng),
            ShuffleKind::Riffle => riffle::riffle(self, aux, rng)?,
            ShuffleKind::FisherYates => fisher_yates::fisher_yates(self, rng),
        }
        Ok(self)
    }
}
