//! Overhand shuffle.
//!
//! Repeatedly pulls a chunk off the top of what is left in the hand and drops
//! it onto a new pile. The first chunk pulled ends up at the bottom of the
//! result, and each chunk keeps its internal order.

use crate::core::rng::DeckRng;
use crate::deck::Deck;

/// Size of the next chunk for `remaining` cards: Normal(n/4, n/16), floored,
/// plus one, clamped to `1..=remaining`.
fn chunk_size(remaining: usize, rng: &mut DeckRng) -> usize {
    let n = remaining as f64;
    let drawn = rng.gauss(n / 4.0, n / 16.0).floor() + 1.0;
    if drawn < 1.0 {
        1
    } else {
        (drawn as usize).min(remaining)
    }
}

pub(crate) fn overhand<C>(deck: &mut Deck<C>, rng: &mut DeckRng) {
    let mut pile = Vec::with_capacity(deck.len());

    while !deck.is_empty() {
        let size = chunk_size(deck.len(), rng);
        let at = deck.len() - size;
        pile.append(&mut deck.cards.split_off(at));
    }

    deck.cards = pile;
}
