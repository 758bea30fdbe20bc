//! A single-player blackjack round engine with optional `no_std` support.
//!
//! The crate provides a [`Game`] type that drives one full round through
//! betting, splitting, doubling down, dealer play, and settlement. Player
//! decisions come from a [`DecisionSource`] and table activity is reported
//! through a [`DisplaySink`], so the engine itself performs no I/O.
//!
//! # Example
//!
//! ```no_run
//! use pontoon::{Game, GameOptions};
//!
//! let options = GameOptions::default();
//! let game = Game::new(options, "Alex", 1000, 42);
//! let _ = game;
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(all(not(feature = "std"), not(feature = "alloc")))]
compile_error!(
    "`std` is disabled but `alloc` feature is not enabled. Enable `alloc` or keep `std` enabled."
);

extern crate alloc;

pub mod card;
pub mod dealer;
pub mod error;
pub mod game;
pub mod hand;
pub mod io;
pub mod options;
pub mod player;
pub mod result;
pub mod shoe;

// Re-export main types
pub use card::{Card, DECK_SIZE, Rank, RankKind, Suit};
pub use dealer::Dealer;
pub use error::{BetError, CardError, DoubleDownError, SplitError};
pub use game::Game;
pub use hand::{HAND_SIZE_LIMIT, Hand};
pub use io::{DecisionSource, DisplaySink, NullSink, Prompt, Seat, TableEvent};
pub use options::{GameOptions, RoundingMode};
pub use player::Player;
pub use result::{HandOutcome, HandResult, RoundOutcome, RoundResult};
pub use shoe::Shoe;
