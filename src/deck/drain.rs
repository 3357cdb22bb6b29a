//! Destructive top-first iteration.

use std::iter::FusedIterator;

use super::container::Deck;

/// Iterator that draws from a deck until it is empty.
///
/// Each step is a [`Deck::draw`]. Cards not yet drawn when the iterator is
/// dropped stay in the deck.
#[derive(Debug)]
pub struct Drain<'a, C> {
    deck: &'a mut Deck<C>,
}

impl<'a, C> Drain<'a, C> {
    pub(crate) fn new(deck: &'a mut Deck<C>) -> Self {
        Self { deck }
    }
}

impl<C> Iterator for Drain<'_, C> {
    type Item = C;

    fn next(&mut self) -> Option<C> {
        self.deck.draw()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.deck.len();
        (len, Some(len))
    }
}

impl<C> ExactSizeIterator for Drain<'_, C> {}

impl<C> FusedIterator for Drain<'_, C> {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_drain_top_first_and_empties() {
        let mut deck = Deck::from(vec!['a', 'b', 'c']);

        let drawn: Vec<_> = deck.drain().collect();

        assert_eq!(drawn, vec!['c', 'b', 'a']);
        assert!(deck.is_empty());
    }

    #[test]
    fn test_partial_drain_keeps_rest() {
        let mut deck = Deck::from(vec![1, 2, 3, 4]);

        let first_two: Vec<_> = deck.drain().take(2).collect();

        assert_eq!(first_two, vec![4, 3]);
        assert_eq!(deck.cards(), &[1, 2]);
    }

    #[test]
    fn test_len_tracks_remaining() {
        let mut deck = Deck::from(vec![1, 2, 3]);
        let mut drain = deck.drain();

        assert_eq!(drain.len(), 3);
        drain.next();
        assert_eq!(drain.len(), 2);
    }
}
