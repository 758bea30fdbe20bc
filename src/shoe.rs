//! The shoe: an ordered, mutable card sequence with draw and refill.

use alloc::vec::Vec;

use rand::SeedableRng;
use rand::seq::SliceRandom;
use rand_chacha::ChaCha8Rng;

use crate::card::{Card, DECK_SIZE, Rank, Suit};

/// An ordered sequence of cards supporting draw-from-top.
///
/// Every drawn card is removed exactly once. When the shoe runs out it
/// refills itself with a complete fresh 52-card set and reshuffles before
/// the next draw, so [`Shoe::draw`] never fails. Cards already dealt are
/// unaffected by a refill.
#[derive(Debug, Clone)]
pub struct Shoe {
    /// Remaining cards; the top of the shoe is the end of the vector.
    cards: Vec<Card>,
    /// Random number generator used for shuffling.
    rng: ChaCha8Rng,
}

impl Shoe {
    /// Creates a freshly filled, shuffled shoe seeded for reproducibility.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let mut cards = full_set();
        cards.shuffle(&mut rng);
        Self { cards, rng }
    }

    /// Creates a shoe whose draws follow `draws` in order.
    ///
    /// Intended for tests and scripted play. Once the listed cards are
    /// exhausted the shoe refills and reshuffles as usual, using `seed`.
    #[must_use]
    pub fn stacked(seed: u64, draws: &[Card]) -> Self {
        let mut cards: Vec<Card> = draws.to_vec();
        cards.reverse();
        Self {
            cards,
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }

    /// Draws the top card, refilling and reshuffling first if the shoe
    /// is empty.
    #[expect(
        clippy::missing_panics_doc,
        reason = "the shoe is refilled before the pop and a fresh fill is never empty"
    )]
    pub fn draw(&mut self) -> Card {
        if self.cards.is_empty() {
            self.refill();
        }

        self.cards.pop().expect("shoe was refilled above")
    }

    /// Discards the remaining cards and refills with a fresh shuffled set.
    pub fn refill(&mut self) {
        self.cards = full_set();
        self.cards.shuffle(&mut self.rng);
    }

    /// Returns the number of cards remaining.
    #[must_use]
    pub fn cards_remaining(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the shoe is out of cards.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}

/// Builds the full 52-card set: 4 suits by 13 ranks.
fn full_set() -> Vec<Card> {
    let mut cards = Vec::with_capacity(DECK_SIZE);
    for suit in Suit::ALL {
        for rank in Rank::ALL {
            cards.push(Card::new(rank, suit));
        }
    }
    cards
}
