//! Fisher-Yates shuffle: every ordering equally likely.

use crate::core::rng::DeckRng;
use crate::deck::Deck;

pub(crate) fn fisher_yates<C>(deck: &mut Deck<C>, rng: &mut DeckRng) {
    rng.shuffle(&mut deck.cards);
}
