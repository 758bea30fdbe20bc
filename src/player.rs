//! The player participant: hands, money, and the betting rules.

use alloc::string::String;
use alloc::vec::Vec;

use crate::card::Card;
use crate::error::{BetError, DoubleDownError, SplitError};
use crate::hand::Hand;

/// A player at the table.
///
/// The player persists across rounds: money carries over while hands are
/// recreated each round. The sum of live bets can never exceed the money
/// available when they were placed; every balance check and debit below
/// is applied as a single step.
#[derive(Debug, Clone)]
pub struct Player {
    /// Player display name.
    name: String,
    /// Money available for betting.
    money: usize,
    /// Hands owned this round; splitting grows the list.
    hands: Vec<Hand>,
}

impl Player {
    /// Creates a player with a buy-in amount.
    #[must_use]
    pub const fn new(name: String, buy_in: usize) -> Self {
        Self {
            name,
            money: buy_in,
            hands: Vec::new(),
        }
    }

    /// Returns the player's name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the player's current money.
    #[must_use]
    pub const fn money(&self) -> usize {
        self.money
    }

    /// Returns the player's hands.
    #[must_use]
    pub fn hands(&self) -> &[Hand] {
        &self.hands
    }

    /// Returns the number of hands the player currently owns.
    #[must_use]
    pub fn hand_count(&self) -> usize {
        self.hands.len()
    }

    /// Returns the hand at `index`, if it exists.
    #[must_use]
    pub fn hand(&self, index: usize) -> Option<&Hand> {
        self.hands.get(index)
    }

    /// Adds winnings (or a returned stake) to the player's money.
    pub const fn credit(&mut self, amount: usize) {
        self.money += amount;
    }

    /// Creates the single fresh hand for a new round, discarding any
    /// hands from the previous round.
    pub fn deal_hand(&mut self) {
        self.hands.clear();
        self.hands.push(Hand::new());
    }

    /// Discards all hands.
    pub fn clear_hands(&mut self) {
        self.hands.clear();
    }

    /// Returns whether any hand may still take a card.
    #[must_use]
    pub fn has_playable_hand(&self) -> bool {
        self.hands.iter().any(Hand::can_hit)
    }

    /// Places the starting bet on the hand at `index`.
    ///
    /// # Errors
    ///
    /// Returns an error if the hand already carries a bet, the amount is
    /// zero, or the amount exceeds the player's money. On failure nothing
    /// changes.
    pub fn start_bet(&mut self, index: usize, amount: usize) -> Result<(), BetError> {
        let Some(hand) = self.hands.get_mut(index) else {
            return Err(BetError::InvalidBet);
        };

        if hand.bet() != 0 {
            return Err(BetError::ActiveBetExists);
        }
        if amount == 0 {
            return Err(BetError::InvalidBet);
        }
        if amount > self.money {
            return Err(BetError::InsufficientFunds);
        }

        self.money -= amount;
        hand.set_bet(amount);
        Ok(())
    }

    /// Returns whether the hand at `index` may be doubled down: exactly
    /// two cards, not already doubled, and the matching bet affordable.
    #[must_use]
    pub fn can_double_down(&self, index: usize) -> bool {
        self.hands.get(index).is_some_and(|hand| {
            hand.len() == 2 && !hand.is_doubled_down() && hand.bet() <= self.money
        })
    }

    /// Doubles down on the hand at `index`: debits a second stake equal
    /// to the current bet and doubles it. Exactly one further hit is then
    /// permitted before the hand is forced terminal.
    ///
    /// # Errors
    ///
    /// Returns an error if the hand has no bet, the matching stake is
    /// unaffordable, or the hand was already doubled. On failure nothing
    /// changes.
    pub fn double_down(&mut self, index: usize) -> Result<(), DoubleDownError> {
        let Some(hand) = self.hands.get_mut(index) else {
            return Err(DoubleDownError::NoActiveBet);
        };

        if hand.bet() == 0 {
            return Err(DoubleDownError::NoActiveBet);
        }
        if hand.bet() > self.money {
            return Err(DoubleDownError::InsufficientFunds);
        }
        if hand.is_doubled_down() {
            return Err(DoubleDownError::AlreadyDoubled);
        }

        self.money -= hand.bet();
        hand.double_bet();
        Ok(())
    }

    /// Returns whether the hand at `index` may be split: the hand itself
    /// is splittable and the player can cover an equal bet on the new
    /// hand.
    #[must_use]
    pub fn can_split_hand(&self, index: usize) -> bool {
        self.hands
            .get(index)
            .is_some_and(|hand| hand.can_split() && self.money > hand.bet())
    }

    /// Splits the hand at `index` into two one-card hands.
    ///
    /// The second card moves into a newly created hand carrying an equal
    /// bet (debited from the player's money), and both hands are marked
    /// split, which permanently disables blackjack recognition on them.
    /// The new hand is appended to the end of the hand list.
    ///
    /// # Errors
    ///
    /// Returns an error if the hand is not a splittable pair or the equal
    /// bet is unaffordable. On failure nothing changes.
    pub fn split_hand(&mut self, index: usize) -> Result<(), SplitError> {
        let Some(hand) = self.hands.get_mut(index) else {
            return Err(SplitError::CannotSplit);
        };

        if !hand.can_split() {
            return Err(SplitError::CannotSplit);
        }
        let bet = hand.bet();
        if self.money <= bet {
            return Err(SplitError::InsufficientFunds);
        }

        let Some(card) = hand.take_split_card() else {
            return Err(SplitError::CannotSplit);
        };
        hand.mark_split();

        let mut new_hand = Hand::new();
        new_hand.mark_split();
        new_hand.hit(card);
        self.money -= bet;
        new_hand.set_bet(bet);
        self.hands.push(new_hand);
        Ok(())
    }

    /// Deals a card to the hand at `index`.
    ///
    /// Card validity is enforced at construction by the type system, so
    /// unlike the bet operations this cannot fail; a hand that can no
    /// longer hit ignores the card.
    pub fn hit(&mut self, index: usize, card: Card) {
        if let Some(hand) = self.hands.get_mut(index) {
            hand.hit(card);
        }
    }

    /// Stands on the hand at `index`.
    pub fn stand(&mut self, index: usize) {
        if let Some(hand) = self.hands.get_mut(index) {
            hand.stand();
        }
    }
}
