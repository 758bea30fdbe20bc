//! Game configuration options.

/// Rounding mode for the half-unit left over when a 3:2 blackjack payout
/// is taken on an odd stake.
///
/// All money arithmetic is integer; `stake * 3 / 2` leaves half a unit
/// whenever the stake is odd, and this mode decides who keeps it rather
/// than truncating silently.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum RoundingMode {
    /// Round down; the house keeps the half unit.
    #[default]
    Down,
    /// Round up; the player keeps the half unit.
    Up,
}

/// Configuration options for a blackjack game.
///
/// Use the builder pattern to customize options:
///
/// ```
/// use pontoon::{GameOptions, RoundingMode};
///
/// let options = GameOptions::default().with_blackjack_rounding(RoundingMode::Up);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct GameOptions {
    /// Rounding mode for 3:2 blackjack winnings on odd stakes.
    pub blackjack_rounding: RoundingMode,
}

impl GameOptions {
    /// Sets the rounding mode for blackjack winnings.
    ///
    /// # Example
    ///
    /// ```
    /// use pontoon::{GameOptions, RoundingMode};
    ///
    /// let options = GameOptions::default().with_blackjack_rounding(RoundingMode::Up);
    /// assert_eq!(options.blackjack_rounding, RoundingMode::Up);
    /// ```
    #[must_use]
    pub const fn with_blackjack_rounding(mut self, mode: RoundingMode) -> Self {
        self.blackjack_rounding = mode;
        self
    }

    /// Computes the 3:2 winnings on `stake` under the configured
    /// rounding mode, exactly and in integers.
    #[must_use]
    pub const fn blackjack_winnings(&self, stake: usize) -> usize {
        match self.blackjack_rounding {
            RoundingMode::Down => stake * 3 / 2,
            RoundingMode::Up => (stake * 3).div_ceil(2),
        }
    }
}
