//! Deterministic random number generation for shuffling.
//!
//! ## Key Features
//!
//! - **Deterministic**: Same seed produces identical shuffles
//! - **Serializable**: O(1) state capture and restore
//! - **Gaussian draws**: Normal samples for cut points and chunk sizes
//!
//! ## Usage
//!
//! ```
//! use card_deck::core::DeckRng;
//!
//! let mut rng = DeckRng::new(42);
//! let checkpoint = rng.state();
//!
//! let first = rng.gauss(26.0, 2.0);
//! let mut replay = DeckRng::from_state(&checkpoint);
//! assert_eq!(replay.gauss(26.0, 2.0), first);
//! ```

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use rand_distr::{Distribution, Normal};
use serde::{Deserialize, Serialize};

/// Seedable RNG injected into every randomized deck operation.
///
/// Uses ChaCha8 for speed while keeping high quality randomness.
#[derive(Clone, Debug)]
pub struct DeckRng {
    inner: ChaCha8Rng,
    seed: u64,
}

impl DeckRng {
    /// Create a new RNG with the given seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
            seed,
        }
    }

    /// Draw from Normal(`mean`, `std_dev`).
    ///
    /// A zero, negative or non-finite deviation is degenerate and returns `mean`.
    pub fn gauss(&mut self, mean: f64, std_dev: f64) -> f64 {
        if !(std_dev.is_finite() && std_dev > 0.0) {
            return mean;
        }
        match Normal::new(mean, std_dev) {
            Ok(normal) => normal.sample(&mut self.inner),
            Err(_) => mean,
        }
    }

    /// Generate a random boolean with given probability of true.
    ///
    /// `probability` is clamped to `[0, 1]`.
    pub fn gen_bool(&mut self, probability: f64) -> bool {
        self.inner.gen_bool(probability.clamp(0.0, 1.0))
    }

    /// Weighted coin: `true` with weight `true_weight`, `false` with `false_weight`.
    ///
    /// Weights do not need to sum to 1.0. Callers guarantee at least one
    /// weight is positive; if both are zero the result is `false`.
    pub fn weighted_bool(&mut self, true_weight: f64, false_weight: f64) -> bool {
        let total = true_weight + false_weight;
        if total <= 0.0 {
            return false;
        }
        self.gen_bool(true_weight / total)
    }

    /// Shuffle a slice in place (uniform Fisher-Yates).
    pub fn shuffle<T>(&mut self, slice: &mut [T]) {
        use rand::seq::SliceRandom;
        slice.shuffle(&mut self.inner);
    }

    /// Get the current state for serialization.
    #[must_use]
    pub fn state(&self) -> DeckRngState {
        DeckRngState {
            seed: self.seed,
            word_pos: self.inner.get_word_pos(),
        }
    }

    /// Restore from a saved state.
    #[must_use]
    pub fn from_state(state: &DeckRngState) -> Self {
        let mut inner = ChaCha8Rng::seed_from_u64(state.seed);
        inner.set_word_pos(state.word_pos);
        Self {
            inner,
            seed: state.seed,
        }
    }
}

/// Serializable RNG state for checkpointing.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeckRngState {
    /// Original seed
    pub seed: u64,
    /// ChaCha8 word position (128-bit counter)
    pub word_pos: u128,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_determinism() {
        let mut rng1 = DeckRng::new(42);
        let mut rng2 = DeckRng::new(42);

        for _ in 0..100 {
            assert_eq!(rng1.gauss(10.0, 2.0), rng2.gauss(10.0, 2.0));
            assert_eq!(rng1.gen_bool(0.5), rng2.gen_bool(0.5));
        }
    }

    #[test]
    fn test_different_seeds() {
        let mut rng1 = DeckRng::new(1);
        let mut rng2 = DeckRng::new(2);

        let seq1: Vec<_> = (0..10).map(|_| rng1.gauss(0.0, 1.0)).collect();
        let seq2: Vec<_> = (0..10).map(|_| rng2.gauss(0.0, 1.0)).collect();

        assert_ne!(seq1, seq2);
    }

    #[test]
    fn test_shuffle() {
        let mut rng = DeckRng::new(42);
        let mut data: Vec<u32> = (1..=10).collect();

        rng.shuffle(&mut data);

        assert_ne!(data, (1..=10).collect::<Vec<_>>());
        data.sort_unstable();
        assert_eq!(data, (1..=10).collect::<Vec<_>>());
    }

    #[test]
    fn test_gauss_degenerate_returns_mean() {
        let mut rng = DeckRng::new(7);
        assert_eq!(rng.gauss(3.5, 0.0), 3.5);
        assert_eq!(rng.gauss(3.5, -1.0), 3.5);
        assert_eq!(rng.gauss(3.5, f64::NAN), 3.5);
    }

    #[test]
    fn test_gauss_centers_on_mean() {
        let mut rng = DeckRng::new(7);
        let n = 10_000;
        let mean: f64 = (0..n).map(|_| rng.gauss(26.0, 2.0)).sum::<f64>() / n as f64;
        assert!((mean - 26.0).abs() < 0.1, "sample mean {mean}");
    }

    #[test]
    fn test_weighted_bool() {
        let mut rng = DeckRng::new(42);

        for _ in 0..10 {
            assert!(rng.weighted_bool(1.0, 0.0));
            assert!(!rng.weighted_bool(0.0, 5.0));
        }
        assert!(!rng.weighted_bool(0.0, 0.0));
    }

    #[test]
    fn test_state_serialization() {
        let mut rng = DeckRng::new(42);
        for _ in 0..100 {
            rng.gauss(0.0, 1.0);
        }

        let state = rng.state();
        let expected: Vec<_> = (0..10).map(|_| rng.gauss(0.0, 1.0)).collect();

        let mut restored = DeckRng::from_state(&state);
        let actual: Vec<_> = (0..10).map(|_| restored.gauss(0.0, 1.0)).collect();

        assert_eq!(expected, actual);
    }

    #[test]
    fn test_state_serde() {
        let state = DeckRngState {
            seed: 42,
            word_pos: 12345,
        };

        let json = serde_json::to_string(&state).unwrap();
        let deserialized: DeckRngState = serde_json::from_str(&json).unwrap();

        assert_eq!(state, deserialized);
    }
}
