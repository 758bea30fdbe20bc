//! Error types for game operations.
//!
//! Every error here is recoverable: the triggering action fails, state
//! is left unchanged, and the orchestrator reports the failure through
//! the display sink.

use thiserror::Error;

/// Errors that can occur when placing a bet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum BetError {
    /// The hand already carries an active bet.
    #[error("an active bet already exists on this hand")]
    ActiveBetExists,
    /// The bet is not a positive whole currency amount.
    #[error("invalid bet amount")]
    InvalidBet,
    /// The bet exceeds the player's money.
    #[error("insufficient funds")]
    InsufficientFunds,
}

/// Errors that can occur when doubling down.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DoubleDownError {
    /// The hand has no active bet to double.
    #[error("no active bet on this hand")]
    NoActiveBet,
    /// The matching bet exceeds the player's money.
    #[error("insufficient funds to double down")]
    InsufficientFunds,
    /// The hand has already been doubled down.
    #[error("this hand has already been doubled down")]
    AlreadyDoubled,
}

/// Errors that can occur when splitting a hand.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SplitError {
    /// The hand is not a splittable pair.
    #[error("this hand cannot be split")]
    CannotSplit,
    /// The matching bet for the new hand exceeds the player's money.
    #[error("insufficient funds to split")]
    InsufficientFunds,
}

/// Errors that can occur constructing cards from raw input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum CardError {
    /// The rank index is outside `1..=13`.
    #[error("invalid rank index: {0}")]
    InvalidRank(u8),
}
