//! External interface seams: decisions in, table events out.
//!
//! The engine consumes typed answers from a [`DecisionSource`] and emits
//! typed, human-renderable [`TableEvent`]s to a [`DisplaySink`]. It never
//! formats prompts or reads input itself, which keeps the round logic
//! testable with scripted collaborators.

use core::fmt;

use alloc::vec::Vec;

use crate::card::Card;
use crate::error::{BetError, DoubleDownError, SplitError};
use crate::result::{HandOutcome, HandResult};

/// A yes/no question put to the decision source.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Prompt {
    /// Split the current hand?
    Split,
    /// Double down on the current hand?
    DoubleDown,
    /// Hit the current hand?
    Hit,
    /// Stand on the current hand?
    Stand,
    /// Play another round?
    PlayAgain,
}

/// Source of player decisions.
///
/// Calls block the round until answered; an unresponsive source stalls
/// the round indefinitely, which is acceptable for an interactive
/// single-user program.
pub trait DecisionSource {
    /// Asks for the bet amount for the coming round, given the money
    /// currently available.
    fn bet_amount(&mut self, money: usize) -> usize;

    /// Asks a yes/no question.
    fn confirm(&mut self, prompt: Prompt) -> bool;
}

/// One-way sink for table activity. Purely informational; there is no
/// return value and failures are not modeled.
pub trait DisplaySink {
    /// Reports one table event.
    fn show(&mut self, event: TableEvent);
}

/// A sink that discards every event. Useful for tests and headless runs.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullSink;

impl DisplaySink for NullSink {
    fn show(&mut self, _event: TableEvent) {}
}

/// Which side of the table drew a card.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Seat {
    /// The player's side.
    Player,
    /// The dealer's side.
    Dealer,
}

/// A line of table activity, renderable via [`Display`](fmt::Display).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TableEvent {
    /// A bet was rejected during setup; the round was aborted undealt.
    BetRejected(BetError),
    /// A split choice could not be honored.
    SplitRejected(SplitError),
    /// A double-down choice could not be honored.
    DoubleRejected(DoubleDownError),
    /// The shoe ran out and was refilled with a fresh shuffled set.
    ShoeRefilled,
    /// The opening deal: dealer's face-up card and the player's hand.
    InitialDeal {
        /// The dealer's face-up card.
        up_card: Card,
        /// The player's two cards.
        cards: Vec<Card>,
        /// The player's hand value.
        value: u8,
    },
    /// Status of the hand currently in play.
    HandStatus {
        /// Index of the hand in the player's hand list.
        index: usize,
        /// Cards in the hand.
        cards: Vec<Card>,
        /// Current hand value.
        value: u8,
        /// Bet riding on the hand.
        bet: usize,
        /// Player money remaining.
        money: usize,
    },
    /// A card came off the shoe.
    CardDrawn {
        /// Who received the card.
        seat: Seat,
        /// The card drawn.
        card: Card,
    },
    /// A player hand went over 21.
    HandBust {
        /// Index of the busted hand.
        index: usize,
        /// Its final value.
        value: u8,
    },
    /// The player doubled down.
    DoubledDown {
        /// Index of the doubled hand.
        index: usize,
        /// The new (doubled) bet.
        bet: usize,
    },
    /// The dealer's full hand, shown once the player turns are over and
    /// after each dealer draw.
    DealerHand {
        /// The dealer's cards.
        cards: Vec<Card>,
        /// The dealer's hand value.
        value: u8,
    },
    /// Both sides were dealt a blackjack; the stake is returned.
    BothBlackjack,
    /// Only the dealer was dealt a blackjack; the stake is lost.
    DealerBlackjack,
    /// Only the player was dealt a blackjack, paid at 3:2.
    PlayerBlackjack {
        /// The winnings credited on top of the returned stake.
        winnings: usize,
    },
    /// A hand was settled against the dealer.
    HandSettled(HandResult),
    /// The player has no money left to gamble.
    OutOfMoney,
}

fn write_cards(f: &mut fmt::Formatter<'_>, cards: &[Card]) -> fmt::Result {
    for (i, card) in cards.iter().enumerate() {
        if i > 0 {
            f.write_str(", ")?;
        }
        write!(f, "'{card}'")?;
    }
    Ok(())
}

impl fmt::Display for TableEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::BetRejected(err) => write!(f, "Bet rejected: {err}"),
            Self::SplitRejected(err) => write!(f, "Split rejected: {err}"),
            Self::DoubleRejected(err) => write!(f, "Double down rejected: {err}"),
            Self::ShoeRefilled => f.write_str("The shoe is empty; refilled and reshuffled"),
            Self::InitialDeal {
                up_card,
                cards,
                value,
            } => {
                write!(f, "Dealer shows '{up_card}'. Your hand: ")?;
                write_cards(f, cards)?;
                write!(f, " (value {value})")
            }
            Self::HandStatus {
                index,
                cards,
                value,
                bet,
                money,
            } => {
                write!(f, "Hand #{}: ", index + 1)?;
                write_cards(f, cards)?;
                write!(f, " (value {value}, bet ${bet}, money ${money})")
            }
            Self::CardDrawn { seat, card } => match seat {
                Seat::Player => write!(f, "You drew a '{card}'"),
                Seat::Dealer => write!(f, "The dealer drew a '{card}'"),
            },
            Self::HandBust { index, value } => {
                write!(f, "Hand #{} went over 21 (value {value})", index + 1)
            }
            Self::DoubledDown { index, bet } => {
                write!(f, "Hand #{} doubled down; bet is now ${bet}", index + 1)
            }
            Self::DealerHand { cards, value } => {
                f.write_str("Dealer's cards: ")?;
                write_cards(f, cards)?;
                write!(f, " (value {value})")
            }
            Self::BothBlackjack => {
                f.write_str("Tie! Both you and the dealer got a blackjack; stake returned")
            }
            Self::DealerBlackjack => f.write_str("The dealer won with a blackjack"),
            Self::PlayerBlackjack { winnings } => {
                write!(f, "Blackjack! Paid 3:2 (${winnings} winnings)")
            }
            Self::HandSettled(result) => {
                let verdict = match result.outcome {
                    HandOutcome::Win | HandOutcome::Blackjack => "won",
                    HandOutcome::Push => "pushed",
                    HandOutcome::Lose => "lost",
                };
                write!(
                    f,
                    "Hand #{}: you {verdict} ${} ({} vs dealer's {})",
                    result.index + 1,
                    result.bet,
                    result.player_value,
                    result.dealer_value,
                )
            }
            Self::OutOfMoney => f.write_str("You do not have any more money to gamble"),
        }
    }
}
