use crate::io::{DecisionSource, DisplaySink, Prompt, Seat, TableEvent};

use super::Game;

impl Game {
    /// Runs the player-turn phase.
    ///
    /// The hand list can grow mid-phase through splits, so the worklist
    /// re-reads the hand count on every step instead of snapshotting it;
    /// hands appended by a split are visited on a later pass. The phase
    /// ends when no hand can legally take another card.
    pub(super) fn player_turns<D: DecisionSource, S: DisplaySink>(
        &mut self,
        input: &mut D,
        output: &mut S,
    ) {
        while self.player.has_playable_hand() {
            let mut index = 0;
            while index < self.player.hand_count() {
                self.top_up(index, output);
                if self.player.hands()[index].can_hit() {
                    self.play_hand(index, input, output);
                }
                index += 1;
            }
        }
    }

    /// Brings an under-dealt hand (a split offspring, or the one-card
    /// remainder of a split) up to two cards.
    fn top_up(&mut self, index: usize, output: &mut impl DisplaySink) {
        while self.player.hands()[index].len() < 2 && self.player.hands()[index].can_hit() {
            let card = self.draw(output);
            self.player.hit(index, card);
        }
    }

    /// Plays a single hand to completion or until it is handed back to
    /// the worklist.
    ///
    /// Only currently legal actions are offered, in fixed order: split,
    /// double down, hit, stand. A taken split ends this hand's turn
    /// immediately; a taken double-down buys exactly one forced card.
    fn play_hand<D: DecisionSource, S: DisplaySink>(
        &mut self,
        index: usize,
        input: &mut D,
        output: &mut S,
    ) {
        let mut can_play = true;

        while can_play && self.player.hands()[index].can_hit() {
            self.show_status(index, output);

            if self.player.can_split_hand(index) && input.confirm(Prompt::Split) {
                match self.player.split_hand(index) {
                    // The two half-hands are picked up on the next pass.
                    Ok(()) => return,
                    Err(err) => output.show(TableEvent::SplitRejected(err)),
                }
            }

            if self.player.can_double_down(index) && input.confirm(Prompt::DoubleDown) {
                match self.player.double_down(index) {
                    Ok(()) => {
                        output.show(TableEvent::DoubledDown {
                            index,
                            bet: self.player.hands()[index].bet(),
                        });
                        self.deal_to_hand(index, output);
                        can_play = false;
                    }
                    Err(err) => output.show(TableEvent::DoubleRejected(err)),
                }
            }

            if can_play && self.player.hands()[index].can_hit() && input.confirm(Prompt::Hit) {
                self.deal_to_hand(index, output);
                if self.player.hands()[index].is_bust() {
                    can_play = false;
                }
            }

            if can_play && self.player.hands()[index].can_hit() && input.confirm(Prompt::Stand) {
                self.player.stand(index);
                can_play = false;
            }
        }
    }

    /// Draws one card into the player's hand at `index`, reporting the
    /// draw and any resulting bust.
    fn deal_to_hand(&mut self, index: usize, output: &mut impl DisplaySink) {
        let card = self.draw(output);
        output.show(TableEvent::CardDrawn {
            seat: Seat::Player,
            card,
        });
        self.player.hit(index, card);

        let hand = &self.player.hands()[index];
        if hand.is_bust() {
            output.show(TableEvent::HandBust {
                index,
                value: hand.value(),
            });
        }
    }

    /// Reports the status line for the hand currently in play.
    fn show_status(&self, index: usize, output: &mut impl DisplaySink) {
        let hand = &self.player.hands()[index];
        output.show(TableEvent::HandStatus {
            index,
            cards: hand.cards().to_vec(),
            value: hand.value(),
            bet: hand.bet(),
            money: self.player.money(),
        });
    }
}
