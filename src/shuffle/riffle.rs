//! Riffle shuffle.
//!
//! The deck is cut into two packets which are then interleaved one card at a
//! time, starting from the bottom of each packet like a physical riffle.
//!
//! ## Procedure
//!
//! 1. Cut into `(top, bottom)` (upper portion first, see [`Deck::split`]).
//! 2. Set aside the current top card of `bottom`; it goes on top at the end.
//! 3. Flip both packets so their original bottoms are drawable.
//! 4. Place the first card from `top`, then keep drawing: on a weighted
//!    `true` switch to the other packet, otherwise draw from the same one.
//! 5. Once either packet runs out, flip both back and put the leftovers
//!    (`top` then `bottom`) on the pile.
//! 6. Place the card set aside in step 2.

use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::core::error::{DeckError, DeckResult};
use crate::core::rng::DeckRng;
use crate::deck::Deck;

/// Weighting of the per-card "switch packet?" coin.
///
/// `switch` is the weight of switching to the other packet, `stay` the
/// weight of drawing from the same packet again. They need not sum to 1.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct RiffleWeights {
    switch: f64,
    stay: f64,
}

impl RiffleWeights {
    /// Create validated weights.
    ///
    /// Both must be finite and non-negative, and at least one positive.
    pub fn new(switch: f64, stay: f64) -> DeckResult<Self> {
        Self { switch, stay }.validated()
    }

    /// Default weights for a deck of `len` cards: `[(len-1)/len, 1/len]`.
    #[must_use]
    pub fn for_len(len: usize) -> Self {
        let n = len.max(1) as f64;
        Self {
            switch: (n - 1.0) / n,
            stay: 1.0 / n,
        }
    }

    /// Weight of switching packets.
    #[must_use]
    pub fn switch(&self) -> f64 {
        self.switch
    }

    /// Weight of staying on the same packet.
    #[must_use]
    pub fn stay(&self) -> f64 {
        self.stay
    }

    // Deserialized weights skip `new`, so riffle re-checks them.
    fn validated(self) -> DeckResult<Self> {
        let ok = |w: f64| w.is_finite() && w >= 0.0;
        if ok(self.switch) && ok(self.stay) && self.switch + self.stay > 0.0 {
            Ok(self)
        } else {
            Err(DeckError::InvalidWeights {
                switch: self.switch,
                stay: self.stay,
            })
        }
    }
}

#[derive(Clone, Copy, PartialEq, Eq)]
enum Packet {
    Top,
    Bottom,
}

impl Packet {
    fn other(self) -> Self {
        match self {
            Packet::Top => Packet::Bottom,
            Packet::Bottom => Packet::Top,
        }
    }
}

pub(crate) fn riffle<C>(
    deck: &mut Deck<C>,
    weights: Option<RiffleWeights>,
    rng: &mut DeckRng,
) -> DeckResult<()> {
    let weights = match weights {
        Some(weights) => weights.validated()?,
        None => RiffleWeights::for_len(deck.len()),
    };

    let index = deck.cut_index(rng)?;
    let (mut top, mut bottom) = std::mem::take(deck).into_split(index);
    trace!(top = top.len(), bottom = bottom.len(), "riffle packets");

    let topcard = bottom.draw();
    top.flip();
    bottom.flip();

    if let Some(card) = top.draw() {
        deck.place(card);
    }
    let mut last = Packet::Top;

    while !top.is_empty() && !bottom.is_empty() {
        if rng.weighted_bool(weights.switch, weights.stay) {
            last = last.other();
        }
        let packet = match last {
            Packet::Top => &mut top,
            Packet::Bottom => &mut bottom,
        };
        if let Some(card) = packet.draw() {
            deck.place(card);
        }
    }

    top.flip();
    bottom.flip();
    deck.combine(top).combine(bottom);

    if let Some(card) = topcard {
        deck.place(card);
    }
    Ok(())
}
