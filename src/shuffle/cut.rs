//! Probabilistic cut near the middle of the deck.
//!
//! The cut point is drawn from Normal(len / 2, sigma), where sigma is
//! `ln(len) - 2` for decks of 8 or more cards and zero (always the exact
//! middle) for smaller decks. Draws that land on or past either end are
//! redrawn, so both halves are always non-empty.

use tracing::trace;

use crate::core::error::{DeckError, DeckResult};
use crate::core::rng::DeckRng;
use crate::deck::Deck;

/// Smallest deck that gets a non-zero cut deviation.
const MIN_SPREAD_LEN: usize = 8;

/// Standard deviation of the cut point for a deck of `len` cards.
fn cut_std_dev(len: usize) -> f64 {
    if len >= MIN_SPREAD_LEN {
        (len as f64).ln() - 2.0
    } else {
        0.0
    }
}

impl<C> Deck<C> {
    /// Draw an interior cut index in `1..len`.
    ///
    /// Fails with [`DeckError::InvalidOperation`] if the deck has fewer than
    /// two cards.
    pub fn cut_index(&self, rng: &mut DeckRng) -> DeckResult<usize> {
        let len = self.len();
        if len < 2 {
            return Err(DeckError::InvalidOperation { len });
        }

        let mean = len as f64 / 2.0;
        let std_dev = cut_std_dev(len);
        let mut rejected = 0u32;

        loop {
            // Round half up
            let index = (rng.gauss(mean, std_dev) + 0.5).floor();
            if index > 0.0 && index < len as f64 {
                trace!(len, index, rejected, "cut index drawn");
                return Ok(index as usize);
            }
            rejected = rejected.saturating_add(1);
        }
    }

    /// Cut by moving cards. See [`Deck::cut`] for the result order.
    pub fn into_cut(self, rng: &mut DeckRng) -> DeckResult<(Deck<C>, Deck<C>)> {
        let index = self.cut_index(rng)?;
        Ok(self.into_split(index))
    }
}

impl<C: Clone> Deck<C> {
    /// Cut the deck near the middle.
    ///
    /// Returns `(top, bottom)` with the same convention as [`Deck::split`]:
    /// the first deck is the upper portion. `self` is left as it was.
    pub fn cut(&self, rng: &mut DeckRng) -> DeckResult<(Deck<C>, Deck<C>)> {
        let index = self.cut_index(rng)?;
        Ok(self.split(index))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cut_too_small() {
        let mut rng = DeckRng::new(42);

        let empty: Deck<u8> = Deck::new();
        assert_eq!(empty.cut(&mut rng), Err(DeckError::InvalidOperation { len: 0 }));

        let single = Deck::from(vec![1]);
        assert_eq!(single.cut(&mut rng), Err(DeckError::InvalidOperation { len: 1 }));
    }

    #[test]
    fn test_small_decks_cut_at_middle() {
        let mut rng = DeckRng::new(42);

        // Half-up rounding of len / 2
        let expected = [(2, 1), (3, 2), (4, 2), (5, 3), (6, 3), (7, 4)];
        for (len, index) in expected {
            let deck: Deck<usize> = (0..len).collect();
            for _ in 0..5 {
                assert_eq!(deck.cut_index(&mut rng), Ok(index), "len {len}");
            }
        }
    }

    #[test]
    fn test_four_card_cut() {
        let mut rng = DeckRng::new(3);
        let deck = Deck::from(vec![1, 2, 3, 4]);

        let (top, bottom) = deck.cut(&mut rng).unwrap();

        assert_eq!(top.cards(), &[3, 4]);
        assert_eq!(bottom.cards(), &[1, 2]);
    }

    #[test]
    fn test_large_cut_stays_interior_and_near_middle() {
        let mut rng = DeckRng::new(9);
        let deck: Deck<u32> = (0..52).collect();

        for _ in 0..1000 {
            let index = deck.cut_index(&mut rng).unwrap();
            assert!((1..52).contains(&index));
            // sigma = ln(52) - 2 ~ 1.95, so 8 sigma off is effectively impossible
            assert!((10..=42).contains(&index), "index {index}");
        }
    }

    #[test]
    fn test_cut_spread_matches_log_len() {
        let mut rng = DeckRng::new(13);
        let deck: Deck<u32> = (0..52).collect();
        let n = 20_000;
        let cuts: Vec<f64> = (0..n).map(|_| deck.cut_index(&mut rng).unwrap() as f64).collect();

        let mean = cuts.iter().sum::<f64>() / n as f64;
        let var = cuts.iter().map(|c| (c - mean).powi(2)).sum::<f64>() / (n - 1) as f64;

        // Rounding adds 1/12 to the variance of Normal(26, ln(52) - 2)
        let expected = (cut_std_dev(52).powi(2) + 1.0 / 12.0).sqrt();
        assert!((mean - 26.0).abs() < 0.1, "mean {mean}");
        assert!((var.sqrt() - expected).abs() < 0.1, "std dev {} vs {expected}", var.sqrt());
    }

    #[test]
    fn test_eight_card_cut_never_empty() {
        let mut rng = DeckRng::new(1);
        let deck: Deck<u32> = (0..8).collect();

        for _ in 0..500 {
            let (top, bottom) = deck.cut(&mut rng).unwrap();
            assert!(!top.is_empty());
            assert!(!bottom.is_empty());
            assert_eq!(top.len() + bottom.len(), 8);
        }
    }

    #[test]
    fn test_into_cut_matches_cut() {
        let deck: Deck<u32> = (0..30).collect();

        let copied = deck.cut(&mut DeckRng::new(5)).unwrap();
        let moved = deck.into_cut(&mut DeckRng::new(5)).unwrap();

        assert_eq!(copied, moved);
    }

    #[test]
    fn test_std_dev() {
        assert_eq!(cut_std_dev(7), 0.0);
        assert!((cut_std_dev(52) - (52f64.ln() - 2.0)).abs() < 1e-12);
    }
}
