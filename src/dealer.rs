//! The dealer participant.

use crate::card::Card;
use crate::hand::Hand;

/// The dealer: exactly one hand, no money or betting fields.
///
/// The dealer holds no strategy of its own; the drawing policy (stand on
/// all 17s) is applied by the round orchestrator.
#[derive(Debug, Clone, Default)]
pub struct Dealer {
    /// The dealer's single hand.
    hand: Hand,
}

impl Dealer {
    /// Creates a dealer with an empty hand.
    #[must_use]
    pub const fn new() -> Self {
        Self { hand: Hand::new() }
    }

    /// Returns the dealer's hand.
    #[must_use]
    pub const fn hand(&self) -> &Hand {
        &self.hand
    }

    /// Returns the dealer's face-up card, dealt first.
    #[must_use]
    pub fn up_card(&self) -> Option<&Card> {
        self.hand.cards().first()
    }

    /// Deals a card to the dealer's hand.
    pub fn hit(&mut self, card: Card) {
        self.hand.hit(card);
    }

    /// Discards the hand for a new round.
    pub fn clear_hand(&mut self) {
        self.hand = Hand::new();
    }
}
