//! Round orchestration and the top-level continuation loop.

use alloc::string::ToString;

use crate::card::Card;
use crate::dealer::Dealer;
use crate::io::{DecisionSource, DisplaySink, Prompt, TableEvent};
use crate::options::GameOptions;
use crate::player::Player;
use crate::result::RoundOutcome;
use crate::shoe::Shoe;

mod settle;
mod turns;

/// A blackjack game: one player, the dealer, and the shoe.
///
/// The game drives each round through its phases in order (setup,
/// initial deal, blackjack check, player turns, dealer turn, payout),
/// asking the [`DecisionSource`] for every choice and reporting table
/// activity to the [`DisplaySink`]. The player persists across rounds.
#[derive(Debug, Clone)]
pub struct Game {
    /// Cards in the shoe.
    pub shoe: Shoe,
    /// Game options.
    pub options: GameOptions,
    /// The player.
    pub player: Player,
    /// The dealer.
    pub dealer: Dealer,
}

impl Game {
    /// Creates a new game with the given player name, buy-in, and shoe
    /// seed.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use pontoon::{Game, GameOptions};
    ///
    /// let game = Game::new(GameOptions::default(), "Alex", 1000, 42);
    /// let _ = game;
    /// ```
    #[must_use]
    pub fn new(options: GameOptions, name: &str, buy_in: usize, seed: u64) -> Self {
        Self {
            shoe: Shoe::new(seed),
            options,
            player: Player::new(name.to_string(), buy_in),
            dealer: Dealer::new(),
        }
    }

    /// Draws a card, reporting a shoe refill when one happens.
    pub(crate) fn draw(&mut self, output: &mut impl DisplaySink) -> Card {
        if self.shoe.is_empty() {
            output.show(TableEvent::ShoeRefilled);
        }
        self.shoe.draw()
    }

    /// Plays one full round.
    ///
    /// A zero or unaffordable bet aborts the round before any card is
    /// dealt and returns [`RoundOutcome::BetRejected`]; the game stays in
    /// a clean state and the round can simply be retried. Otherwise the
    /// round runs to settlement and the result is returned.
    pub fn play_round<D: DecisionSource, S: DisplaySink>(
        &mut self,
        input: &mut D,
        output: &mut S,
    ) -> RoundOutcome {
        // Setup: fresh hands, then the opening bet.
        self.dealer.clear_hand();
        self.player.deal_hand();

        let amount = input.bet_amount(self.player.money());
        if let Err(err) = self.player.start_bet(0, amount) {
            output.show(TableEvent::BetRejected(err));
            return RoundOutcome::BetRejected(err);
        }

        // Initial deal, alternating player and dealer.
        let card = self.draw(output);
        self.player.hit(0, card);
        let up_card = self.draw(output);
        self.dealer.hit(up_card);
        let card = self.draw(output);
        self.player.hit(0, card);
        let hole_card = self.draw(output);
        self.dealer.hit(hole_card);

        let first_hand = &self.player.hands()[0];
        output.show(TableEvent::InitialDeal {
            up_card,
            cards: first_hand.cards().to_vec(),
            value: first_hand.value(),
        });

        // Blackjack check: a natural on either side ends the round here.
        let player_blackjack = first_hand.is_blackjack();
        let dealer_blackjack = self.dealer.hand().is_blackjack();
        if player_blackjack || dealer_blackjack {
            let result = self.settle_naturals(player_blackjack, dealer_blackjack, output);
            return RoundOutcome::Completed(result);
        }

        self.player_turns(input, output);
        self.dealer_turn(output);
        RoundOutcome::Completed(self.settle(output))
    }

    /// Plays rounds until the decision source declines another one or
    /// the player runs out of money.
    pub fn run<D: DecisionSource, S: DisplaySink>(&mut self, input: &mut D, output: &mut S) {
        loop {
            let _ = self.play_round(input, output);

            if !input.confirm(Prompt::PlayAgain) {
                break;
            }
            if self.player.money() == 0 {
                output.show(TableEvent::OutOfMoney);
                break;
            }
        }
    }
}
