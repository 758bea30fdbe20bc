use alloc::vec;
use alloc::vec::Vec;

use crate::io::{DisplaySink, Seat, TableEvent};
use crate::result::{HandOutcome, HandResult, RoundResult};

use super::Game;

impl Game {
    /// Runs the dealer-turn phase.
    ///
    /// The dealer draws while under 17 and stands on any 17 or better,
    /// hard or soft; the hand value is already ace-optimal, so a soft 17
    /// reads as 17 here and stops the drawing. Drawing also stops if the
    /// hand can no longer legally take a card (the five-card limit).
    pub(super) fn dealer_turn(&mut self, output: &mut impl DisplaySink) {
        self.show_dealer(output);

        while self.dealer.hand().value() < 17 && self.dealer.hand().can_hit() {
            let card = self.draw(output);
            self.dealer.hit(card);
            output.show(TableEvent::CardDrawn {
                seat: Seat::Dealer,
                card,
            });
            self.show_dealer(output);
        }
    }

    /// Settles a round that ended at the blackjack check.
    ///
    /// Both naturals push the stake back; a dealer-only natural forfeits
    /// it; a player-only natural pays 3:2 on top of the returned stake,
    /// with the odd-stake half unit resolved by the configured rounding
    /// mode.
    pub(super) fn settle_naturals(
        &mut self,
        player_blackjack: bool,
        dealer_blackjack: bool,
        output: &mut impl DisplaySink,
    ) -> RoundResult {
        let hand = &self.player.hands()[0];
        let bet = hand.bet();
        let player_value = hand.value();
        let dealer_value = self.dealer.hand().value();

        let (outcome, payout, event) = if player_blackjack && dealer_blackjack {
            (HandOutcome::Push, bet, TableEvent::BothBlackjack)
        } else if dealer_blackjack {
            (HandOutcome::Lose, 0, TableEvent::DealerBlackjack)
        } else {
            let winnings = self.options.blackjack_winnings(bet);
            (
                HandOutcome::Blackjack,
                bet + winnings,
                TableEvent::PlayerBlackjack { winnings },
            )
        };

        output.show(event);
        self.player.credit(payout);

        #[expect(clippy::cast_possible_wrap, reason = "stakes and payouts fit in isize")]
        let net = payout as isize - bet as isize;

        RoundResult {
            hands: vec![HandResult {
                index: 0,
                outcome,
                bet,
                payout,
                player_value,
                dealer_value,
            }],
            dealer_value,
            dealer_bust: false,
            total_payout: payout,
            net,
        }
    }

    /// Settles every player hand against the dealer's final hand.
    ///
    /// A hand wins twice its stake when it has not busted and either
    /// beats the dealer's value or the dealer busted; in every other
    /// case, ties included, the stake is forfeited (it was debited at
    /// bet time, so no further deduction happens here).
    pub(super) fn settle(&mut self, output: &mut impl DisplaySink) -> RoundResult {
        let dealer_value = self.dealer.hand().value();
        let dealer_bust = dealer_value > 21;

        let mut hands = Vec::with_capacity(self.player.hand_count());
        let mut total_payout: usize = 0;
        let mut total_staked: usize = 0;

        for (index, hand) in self.player.hands().iter().enumerate() {
            let bet = hand.bet();
            let player_value = hand.value();
            total_staked += bet;

            let won = player_value <= 21 && (player_value > dealer_value || dealer_bust);
            let (outcome, payout) = if won {
                (HandOutcome::Win, bet * 2)
            } else {
                (HandOutcome::Lose, 0)
            };
            total_payout += payout;

            hands.push(HandResult {
                index,
                outcome,
                bet,
                payout,
                player_value,
                dealer_value,
            });
        }

        for result in &hands {
            output.show(TableEvent::HandSettled(*result));
        }
        self.player.credit(total_payout);

        #[expect(clippy::cast_possible_wrap, reason = "stakes and payouts fit in isize")]
        let net = total_payout as isize - total_staked as isize;

        RoundResult {
            hands,
            dealer_value,
            dealer_bust,
            total_payout,
            net,
        }
    }

    /// Reports the dealer's full hand.
    fn show_dealer(&self, output: &mut impl DisplaySink) {
        let hand = self.dealer.hand();
        output.show(TableEvent::DealerHand {
            cards: hand.cards().to_vec(),
            value: hand.value(),
        });
    }
}
