//! Round settlement result types.

use alloc::vec::Vec;

use crate::error::BetError;

/// Outcome of a single hand.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HandOutcome {
    /// The hand beat the dealer (higher value at 21 or under, or the
    /// dealer busted) and was paid twice its stake.
    Win,
    /// The stake was forfeited.
    Lose,
    /// Both player and dealer held a blackjack; the stake was returned.
    Push,
    /// The hand was a natural blackjack and was paid at 3:2.
    Blackjack,
}

/// Settlement details for a single hand.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HandResult {
    /// Index of the hand in the player's hand list.
    pub index: usize,
    /// How the hand resolved against the dealer.
    pub outcome: HandOutcome,
    /// The final bet riding on the hand (after any double).
    pub bet: usize,
    /// Money credited back to the player for this hand.
    pub payout: usize,
    /// The hand's final value.
    pub player_value: u8,
    /// The dealer's final value.
    pub dealer_value: u8,
}

/// Settlement details for a completed round.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoundResult {
    /// One result per player hand.
    pub hands: Vec<HandResult>,
    /// The dealer's final hand value.
    pub dealer_value: u8,
    /// Whether the dealer busted.
    pub dealer_bust: bool,
    /// Total money credited back to the player.
    pub total_payout: usize,
    /// Net result of the round (positive = profit).
    pub net: isize,
}

/// How a round ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RoundOutcome {
    /// The round ran to settlement.
    Completed(RoundResult),
    /// The bet was rejected during setup; no cards were dealt and the
    /// round may simply be retried.
    BetRejected(BetError),
}
