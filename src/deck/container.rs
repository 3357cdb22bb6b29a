//! The `Deck` container.
//!
//! A deck is an ordered `Vec` of cards where index 0 is the bottom and the
//! last index is the top. `draw` and `place` work on the top (LIFO).

use std::fmt;

use serde::{Deserialize, Serialize};

use super::drain::Drain;

/// Ordered, owned sequence of cards with stack access at the top.
///
/// Cards are opaque; only `PartialEq` is needed for `search` and `contains`.
///
/// ```
/// use card_deck::Deck;
///
/// let mut deck = Deck::from(vec![1, 2, 3]);
/// assert_eq!(deck.draw(), Some(3));
/// deck.place(9);
/// assert_eq!(deck.cards(), &[1, 2, 9]);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Deck<C> {
    pub(crate) cards: Vec<C>,
}

impl<C> Default for Deck<C> {
    fn default() -> Self {
        Self { cards: Vec::new() }
    }
}

impl<C> Deck<C> {
    /// Create a new empty deck.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of cards in the deck.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// A deck is "falsy" iff it holds no cards.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Cards from bottom (index 0) to top.
    #[must_use]
    pub fn cards(&self) -> &[C] {
        &self.cards
    }

    /// Non-destructive iteration, bottom to top.
    pub fn iter(&self) -> std::slice::Iter<'_, C> {
        self.cards.iter()
    }

    /// Peek at the top card.
    #[must_use]
    pub fn top(&self) -> Option<&C> {
        self.cards.last()
    }

    /// Peek at the bottom card.
    #[must_use]
    pub fn bottom(&self) -> Option<&C> {
        self.cards.first()
    }

    /// Remove and return the top card, if any.
    pub fn draw(&mut self) -> Option<C> {
        self.cards.pop()
    }

    /// Place a card on top of the deck.
    pub fn place(&mut self, card: C) {
        self.cards.push(card);
    }

    /// Turn the deck upside down.
    ///
    /// Same result as draining the deck top-first and placing each card in
    /// the order drawn.
    pub fn flip(&mut self) -> &mut Self {
        self.cards.reverse();
        self
    }

    /// Put `other` on top of this deck, keeping `other`'s order.
    pub fn combine(&mut self, mut other: Deck<C>) -> &mut Self {
        self.cards.append(&mut other.cards);
        self
    }

    /// Split by moving cards, without cloning.
    ///
    /// Returns `(cards[index..], cards[..index])`: the first deck is the
    /// portion *above* `index`, the second the portion below it. `index` is
    /// clamped to `len`.
    #[must_use]
    pub fn into_split(mut self, index: usize) -> (Deck<C>, Deck<C>) {
        let index = index.min(self.cards.len());
        let upper = self.cards.split_off(index);
        (Deck { cards: upper }, self)
    }

    /// Destructive iterator that draws cards top-first.
    ///
    /// Running it to completion empties the deck. Use [`Deck::iter`] to look
    /// without consuming.
    pub fn drain(&mut self) -> Drain<'_, C> {
        Drain::new(self)
    }
}

impl<C: PartialEq> Deck<C> {
    /// Check whether an equal card is anywhere in the deck.
    #[must_use]
    pub fn contains(&self, card: &C) -> bool {
        self.cards.contains(card)
    }

    /// Find, remove and return the first equal card, scanning from the bottom.
    ///
    /// Returns `None` and leaves the deck untouched if there is no match.
    pub fn search(&mut self, card: &C) -> Option<C> {
        let index = self.cards.iter().position(|c| c == card)?;
        Some(self.cards.remove(index))
    }
}

impl<C: Clone> Deck<C> {
    /// Split into `(Deck(cards[index..]), Deck(cards[..index]))`.
    ///
    /// Note the order: the *first* deck is the upper portion. `self` is left
    /// as it was. `index` is clamped to `len`, as with slicing.
    #[must_use]
    pub fn split(&self, index: usize) -> (Deck<C>, Deck<C>) {
        let index = index.min(self.cards.len());
        (
            Deck::from(self.cards[index..].to_vec()),
            Deck::from(self.cards[..index].to_vec()),
        )
    }
}

impl<C> From<Vec<C>> for Deck<C> {
    fn from(cards: Vec<C>) -> Self {
        Self { cards }
    }
}

impl<C> FromIterator<C> for Deck<C> {
    fn from_iter<I: IntoIterator<Item = C>>(iter: I) -> Self {
        Self { cards: iter.into_iter().collect() }
    }
}

impl<C> Extend<C> for Deck<C> {
    /// Places each card in turn, so the last one ends up on top.
    fn extend<I: IntoIterator<Item = C>>(&mut self, iter: I) {
        self.cards.extend(iter);
    }
}

impl<C> IntoIterator for Deck<C> {
    type Item = C;
    type IntoIter = std::iter::Rev<std::vec::IntoIter<C>>;

    /// Consumes the deck, yielding cards top-first.
    fn into_iter(self) -> Self::IntoIter {
        self.cards.into_iter().rev()
    }
}

impl<'a, C> IntoIterator for &'a Deck<C> {
    type Item = &'a C;
    type IntoIter = std::slice::Iter<'a, C>;

    fn into_iter(self) -> Self::IntoIter {
        self.cards.iter()
    }
}

impl<C: fmt::Display> fmt::Display for Deck<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (i, card) in self.cards.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{card}")?;
        }
        write!(f, "]")
    }
}
