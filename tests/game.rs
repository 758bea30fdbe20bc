//! Game integration tests.

use std::collections::VecDeque;

use pontoon::{
    BetError, Card, CardError, DECK_SIZE, DecisionSource, DisplaySink, DoubleDownError, Game,
    GameOptions, Hand, HandOutcome, Player, Prompt, Rank, RankKind, RoundOutcome, RoundingMode,
    Shoe, SplitError, Suit, TableEvent,
};

const fn card(rank: Rank, suit: Suit) -> Card {
    Card::new(rank, suit)
}

/// Decision source driven by queued answers. Each confirm answer carries
/// the prompt it expects, so a drifted prompt sequence fails loudly.
struct Script {
    bets: VecDeque<usize>,
    answers: VecDeque<(Prompt, bool)>,
}

impl Script {
    fn new(bets: &[usize], answers: &[(Prompt, bool)]) -> Self {
        Self {
            bets: bets.iter().copied().collect(),
            answers: answers.iter().copied().collect(),
        }
    }

    fn is_drained(&self) -> bool {
        self.bets.is_empty() && self.answers.is_empty()
    }
}

impl DecisionSource for Script {
    fn bet_amount(&mut self, _money: usize) -> usize {
        self.bets.pop_front().expect("unexpected bet prompt")
    }

    fn confirm(&mut self, prompt: Prompt) -> bool {
        let (expected, answer) = self.answers.pop_front().expect("unexpected confirm prompt");
        assert_eq!(prompt, expected, "prompt out of order");
        answer
    }
}

#[derive(Default)]
struct Recorder {
    events: Vec<TableEvent>,
}

impl DisplaySink for Recorder {
    fn show(&mut self, event: TableEvent) {
        self.events.push(event);
    }
}

fn game_with_draws(buy_in: usize, draws: &[Card]) -> Game {
    let mut game = Game::new(GameOptions::default(), "Alex", buy_in, 1);
    game.shoe = Shoe::stacked(1, draws);
    game
}

#[test]
fn rank_from_index_rejects_out_of_range_input() {
    assert_eq!(Rank::try_from(1), Ok(Rank::Ace));
    assert_eq!(Rank::try_from(13), Ok(Rank::King));

    assert_eq!(Rank::try_from(0), Err(CardError::InvalidRank(0)));
    assert_eq!(Rank::try_from(14), Err(CardError::InvalidRank(14)));
}

#[test]
fn rank_kind_classifies_aces_faces_and_numbers() {
    assert_eq!(Rank::Ace.kind(), RankKind::Ace);
    assert_eq!(Rank::Jack.kind(), RankKind::Face);
    assert_eq!(Rank::Queen.kind(), RankKind::Face);
    assert_eq!(Rank::King.kind(), RankKind::Face);
    assert_eq!(Rank::Two.kind(), RankKind::Number);
    assert_eq!(Rank::Ten.kind(), RankKind::Number);
}

#[test]
fn hand_blackjack_valuation() {
    let mut hand = Hand::new();
    hand.hit(card(Rank::Ace, Suit::Hearts));
    hand.hit(card(Rank::King, Suit::Spades));

    assert_eq!(hand.value(), 21);
    assert!(hand.is_blackjack());
    assert!(!hand.can_hit());
}

#[test]
fn hand_value_is_best_over_all_ace_assignments() {
    let mut hand = Hand::new();
    hand.hit(card(Rank::Ace, Suit::Hearts));
    hand.hit(card(Rank::Ace, Suit::Spades));
    hand.hit(card(Rank::Nine, Suit::Clubs));

    // Assignments: 11, 21, 21, 31 -> best non-bust is 21.
    assert_eq!(hand.value(), 21);
}

#[test]
fn hand_reports_minimum_bust_total() {
    let mut hand = Hand::new();
    hand.hit(card(Rank::Ten, Suit::Hearts));
    hand.hit(card(Rank::Nine, Suit::Spades));
    hand.hit(card(Rank::Five, Suit::Clubs));

    assert_eq!(hand.value(), 24);
    assert!(hand.is_bust());
    assert!(!hand.can_hit());

    let mut aces = Hand::new();
    aces.hit(card(Rank::Ten, Suit::Hearts));
    aces.hit(card(Rank::King, Suit::Spades));
    aces.hit(card(Rank::Ace, Suit::Clubs));
    aces.hit(card(Rank::Ace, Suit::Diamonds));

    // Every assignment busts; the smallest overshoot is 1+1+20.
    assert_eq!(aces.value(), 22);
}

#[test]
fn hand_softness_requires_total_under_twelve() {
    let mut lone_ace = Hand::new();
    lone_ace.hit(card(Rank::Ace, Suit::Hearts));
    assert_eq!(lone_ace.value(), 11);
    assert!(lone_ace.is_soft());

    let mut ace_six = Hand::new();
    ace_six.hit(card(Rank::Ace, Suit::Hearts));
    ace_six.hit(card(Rank::Six, Suit::Clubs));
    assert_eq!(ace_six.value(), 17);
    assert!(!ace_six.is_soft());
}

#[test]
fn hand_stops_hitting_at_size_limit() {
    let mut hand = Hand::new();
    for suit in [Suit::Clubs, Suit::Diamonds, Suit::Hearts, Suit::Spades] {
        hand.hit(card(Rank::Two, suit));
    }
    hand.hit(card(Rank::Two, Suit::Clubs));

    assert_eq!(hand.len(), 5);
    assert!(!hand.can_hit());

    // A sixth card is silently ignored.
    hand.hit(card(Rank::Three, Suit::Hearts));
    assert_eq!(hand.len(), 5);
}

#[test]
fn hand_stand_is_terminal() {
    let mut hand = Hand::new();
    hand.hit(card(Rank::Five, Suit::Hearts));
    hand.hit(card(Rank::Six, Suit::Clubs));
    hand.stand();

    assert!(!hand.can_hit());
    hand.hit(card(Rank::Two, Suit::Spades));
    assert_eq!(hand.len(), 2);
}

#[test]
fn hand_can_split_is_sticky_but_split_is_guarded() {
    let mut player = Player::new("Alex".into(), 100);
    player.deal_hand();
    player.start_bet(0, 10).unwrap();
    player.hit(0, card(Rank::Eight, Suit::Hearts));
    player.hit(0, card(Rank::Eight, Suit::Diamonds));
    assert!(player.hands()[0].can_split());

    player.hit(0, card(Rank::Two, Suit::Clubs));

    // The flag is never re-evaluated back to false, but a three-card
    // hand cannot actually be split.
    assert!(player.hands()[0].can_split());
    assert_eq!(player.split_hand(0), Err(SplitError::CannotSplit));
}

#[test]
fn bet_rules() {
    let mut player = Player::new("Alex".into(), 100);
    player.deal_hand();

    assert_eq!(player.start_bet(0, 0), Err(BetError::InvalidBet));
    assert_eq!(player.start_bet(0, 200), Err(BetError::InsufficientFunds));
    assert_eq!(player.money(), 100);

    player.start_bet(0, 30).unwrap();
    assert_eq!(player.money(), 70);
    assert_eq!(player.hands()[0].bet(), 30);
    assert_eq!(player.start_bet(0, 10), Err(BetError::ActiveBetExists));
    assert_eq!(player.money(), 70);
}

#[test]
fn double_down_debits_and_allows_one_more_card() {
    let mut player = Player::new("Alex".into(), 100);
    player.deal_hand();
    player.start_bet(0, 20).unwrap();
    player.hit(0, card(Rank::Five, Suit::Hearts));
    player.hit(0, card(Rank::Four, Suit::Diamonds));

    assert!(player.can_double_down(0));
    player.double_down(0).unwrap();
    assert_eq!(player.money(), 60);
    assert_eq!(player.hands()[0].bet(), 40);
    assert!(player.hands()[0].is_doubled_down());
    assert_eq!(player.double_down(0), Err(DoubleDownError::AlreadyDoubled));

    // Exactly one more card, then the hand is terminal whatever it drew.
    assert!(player.hands()[0].can_hit());
    player.hit(0, card(Rank::Two, Suit::Clubs));
    assert_eq!(player.hands()[0].value(), 11);
    assert!(!player.hands()[0].can_hit());
}

#[test]
fn split_requires_money_strictly_above_the_bet() {
    let mut player = Player::new("Alex".into(), 100);
    player.deal_hand();
    player.start_bet(0, 50).unwrap();
    player.hit(0, card(Rank::Eight, Suit::Hearts));
    player.hit(0, card(Rank::Eight, Suit::Diamonds));

    // 50 left, which only matches the bet.
    assert!(!player.can_split_hand(0));
    assert_eq!(player.split_hand(0), Err(SplitError::InsufficientFunds));
    assert_eq!(player.hand_count(), 1);
}

#[test]
fn split_aces_never_make_a_blackjack() {
    let mut player = Player::new("Alex".into(), 100);
    player.deal_hand();
    player.start_bet(0, 10).unwrap();
    player.hit(0, card(Rank::Ace, Suit::Hearts));
    player.hit(0, card(Rank::Ace, Suit::Spades));

    player.split_hand(0).unwrap();
    player.hit(0, card(Rank::King, Suit::Clubs));

    let hand = &player.hands()[0];
    assert_eq!(hand.value(), 21);
    assert!(hand.is_split());
    assert!(!hand.is_blackjack());
}

#[test]
fn shoe_draws_in_stacked_order_and_refills_on_exhaustion() {
    let mut shoe = Shoe::stacked(
        3,
        &[
            card(Rank::Ace, Suit::Hearts),
            card(Rank::Two, Suit::Clubs),
        ],
    );

    assert_eq!(shoe.draw(), card(Rank::Ace, Suit::Hearts));
    assert_eq!(shoe.draw(), card(Rank::Two, Suit::Clubs));
    assert!(shoe.is_empty());

    // The next draw refills with a fresh full set first.
    let _ = shoe.draw();
    assert_eq!(shoe.cards_remaining(), DECK_SIZE - 1);
}

#[test]
fn zero_bet_aborts_the_round_before_dealing() {
    let mut game = Game::new(GameOptions::default(), "Alex", 100, 7);
    let mut script = Script::new(&[0], &[]);
    let mut sink = Recorder::default();

    let outcome = game.play_round(&mut script, &mut sink);

    assert_eq!(outcome, RoundOutcome::BetRejected(BetError::InvalidBet));
    assert_eq!(game.player.money(), 100);
    assert_eq!(game.shoe.cards_remaining(), DECK_SIZE);
    assert!(matches!(
        sink.events[..],
        [TableEvent::BetRejected(BetError::InvalidBet)]
    ));
}

#[test]
fn unaffordable_bet_aborts_the_round() {
    let mut game = Game::new(GameOptions::default(), "Alex", 100, 7);
    let mut script = Script::new(&[500], &[]);
    let mut sink = Recorder::default();

    let outcome = game.play_round(&mut script, &mut sink);

    assert_eq!(
        outcome,
        RoundOutcome::BetRejected(BetError::InsufficientFunds)
    );
    assert_eq!(game.player.money(), 100);
    assert_eq!(game.shoe.cards_remaining(), DECK_SIZE);
}

#[test]
fn dealer_hits_sixteen_and_beats_standing_seventeen() {
    let mut game = game_with_draws(
        100,
        &[
            card(Rank::Ten, Suit::Hearts),  // player
            card(Rank::Six, Suit::Clubs),   // dealer up
            card(Rank::Seven, Suit::Hearts), // player
            card(Rank::Ten, Suit::Spades),  // dealer hole
            card(Rank::Five, Suit::Clubs),  // dealer draw: 16 -> 21
        ],
    );
    let mut script = Script::new(
        &[10],
        &[
            (Prompt::DoubleDown, false),
            (Prompt::Hit, false),
            (Prompt::Stand, true),
        ],
    );

    let outcome = game.play_round(&mut script, &mut pontoon::NullSink);

    let RoundOutcome::Completed(result) = outcome else {
        panic!("round should complete");
    };
    assert_eq!(result.dealer_value, 21);
    assert!(!result.dealer_bust);
    assert_eq!(result.hands[0].outcome, HandOutcome::Lose);
    assert_eq!(result.net, -10);
    assert_eq!(game.player.money(), 90);
    assert!(script.is_drained());
}

#[test]
fn player_blackjack_pays_three_to_two_with_no_turns() {
    let mut game = game_with_draws(
        100,
        &[
            card(Rank::Ace, Suit::Hearts),  // player
            card(Rank::Nine, Suit::Clubs),  // dealer up
            card(Rank::King, Suit::Spades), // player
            card(Rank::Seven, Suit::Clubs), // dealer hole
        ],
    );
    // No confirm answers: any offered action would fail the script.
    let mut script = Script::new(&[10], &[]);
    let mut sink = Recorder::default();

    let outcome = game.play_round(&mut script, &mut sink);

    let RoundOutcome::Completed(result) = outcome else {
        panic!("round should complete");
    };
    assert_eq!(result.hands[0].outcome, HandOutcome::Blackjack);
    assert_eq!(result.hands[0].payout, 25);
    assert_eq!(game.player.money(), 115);
    assert!(
        sink.events
            .iter()
            .any(|event| matches!(event, TableEvent::PlayerBlackjack { winnings: 15 }))
    );
}

#[test]
fn odd_blackjack_stake_rounds_by_option() {
    let down = GameOptions::default();
    assert_eq!(down.blackjack_winnings(11), 16);

    let up = GameOptions::default().with_blackjack_rounding(RoundingMode::Up);
    assert_eq!(up.blackjack_winnings(11), 17);
    assert_eq!(up.blackjack_winnings(10), 15);
}

#[test]
fn both_blackjacks_push_the_stake_back() {
    let mut game = game_with_draws(
        100,
        &[
            card(Rank::Ace, Suit::Hearts),   // player
            card(Rank::Ace, Suit::Spades),   // dealer up
            card(Rank::King, Suit::Hearts),  // player
            card(Rank::Queen, Suit::Spades), // dealer hole
        ],
    );
    let mut script = Script::new(&[10], &[]);

    let outcome = game.play_round(&mut script, &mut pontoon::NullSink);

    let RoundOutcome::Completed(result) = outcome else {
        panic!("round should complete");
    };
    assert_eq!(result.hands[0].outcome, HandOutcome::Push);
    assert_eq!(result.net, 0);
    assert_eq!(game.player.money(), 100);
}

#[test]
fn dealer_blackjack_takes_the_stake_with_no_turns() {
    let mut game = game_with_draws(
        100,
        &[
            card(Rank::Nine, Suit::Hearts), // player
            card(Rank::Ace, Suit::Spades),  // dealer up
            card(Rank::Seven, Suit::Hearts), // player
            card(Rank::King, Suit::Spades), // dealer hole
        ],
    );
    let mut script = Script::new(&[10], &[]);

    let outcome = game.play_round(&mut script, &mut pontoon::NullSink);

    let RoundOutcome::Completed(result) = outcome else {
        panic!("round should complete");
    };
    assert_eq!(result.hands[0].outcome, HandOutcome::Lose);
    assert_eq!(game.player.money(), 90);
}

#[test]
fn ties_forfeit_the_stake() {
    let mut game = game_with_draws(
        100,
        &[
            card(Rank::Ten, Suit::Hearts),  // player
            card(Rank::Ten, Suit::Clubs),   // dealer up
            card(Rank::Nine, Suit::Hearts), // player
            card(Rank::Nine, Suit::Clubs),  // dealer hole
        ],
    );
    let mut script = Script::new(
        &[10],
        &[
            (Prompt::DoubleDown, false),
            (Prompt::Hit, false),
            (Prompt::Stand, true),
        ],
    );

    let outcome = game.play_round(&mut script, &mut pontoon::NullSink);

    let RoundOutcome::Completed(result) = outcome else {
        panic!("round should complete");
    };
    assert_eq!(result.dealer_value, 19);
    assert_eq!(result.hands[0].player_value, 19);
    assert_eq!(result.hands[0].outcome, HandOutcome::Lose);
    assert_eq!(game.player.money(), 90);
}

#[test]
fn split_plays_both_hands_with_equal_bets() {
    let mut game = game_with_draws(
        200,
        &[
            card(Rank::Eight, Suit::Hearts),   // player
            card(Rank::Five, Suit::Clubs),     // dealer up
            card(Rank::Eight, Suit::Diamonds), // player
            card(Rank::Nine, Suit::Spades),    // dealer hole
            card(Rank::King, Suit::Clubs),     // top-up for the new hand
            card(Rank::Ten, Suit::Hearts),     // top-up for the original hand
            card(Rank::King, Suit::Diamonds),  // dealer draw: 14 -> 24 bust
        ],
    );
    let mut script = Script::new(
        &[50],
        &[
            (Prompt::Split, true),
            // Second hand (the split offspring) plays first to 18.
            (Prompt::DoubleDown, false),
            (Prompt::Hit, false),
            (Prompt::Stand, true),
            // The original hand is revisited on the next pass.
            (Prompt::DoubleDown, false),
            (Prompt::Hit, false),
            (Prompt::Stand, true),
        ],
    );

    let outcome = game.play_round(&mut script, &mut pontoon::NullSink);

    let RoundOutcome::Completed(result) = outcome else {
        panic!("round should complete");
    };
    assert_eq!(result.hands.len(), 2);
    assert!(result.dealer_bust);
    for hand_result in &result.hands {
        assert_eq!(hand_result.bet, 50);
        assert_eq!(hand_result.outcome, HandOutcome::Win);
    }
    for hand in game.player.hands() {
        assert!(hand.is_split());
        assert!(!hand.is_blackjack());
    }
    // 200 - 50 - 50 staked, then 100 back per winning hand.
    assert_eq!(game.player.money(), 300);
    assert!(script.is_drained());
}

#[test]
fn double_down_forces_exactly_one_card_in_a_round() {
    let mut game = game_with_draws(
        100,
        &[
            card(Rank::Five, Suit::Hearts),  // player
            card(Rank::Two, Suit::Clubs),    // dealer up
            card(Rank::Four, Suit::Diamonds), // player
            card(Rank::Three, Suit::Spades), // dealer hole
            card(Rank::Ten, Suit::Hearts),   // forced double-down card
            card(Rank::King, Suit::Spades),  // dealer draw: 5 -> 15
            card(Rank::Two, Suit::Diamonds), // dealer draw: 15 -> 17
        ],
    );
    let mut script = Script::new(&[20], &[(Prompt::DoubleDown, true)]);

    let outcome = game.play_round(&mut script, &mut pontoon::NullSink);

    let RoundOutcome::Completed(result) = outcome else {
        panic!("round should complete");
    };
    assert_eq!(result.hands[0].bet, 40);
    assert_eq!(result.hands[0].player_value, 19);
    assert_eq!(result.dealer_value, 17);
    assert_eq!(result.hands[0].outcome, HandOutcome::Win);
    // 100 - 20 - 20 staked, then 80 back.
    assert_eq!(game.player.money(), 140);
    assert!(script.is_drained());
}

#[test]
fn shoe_refill_mid_round_is_reported_and_preserves_dealt_cards() {
    let mut game = game_with_draws(
        100,
        &[
            card(Rank::Ten, Suit::Hearts), // player
            card(Rank::Two, Suit::Clubs),  // dealer up
            card(Rank::Six, Suit::Hearts), // player
            card(Rank::Three, Suit::Spades), // dealer hole; shoe now empty
        ],
    );
    let mut script = Script::new(
        &[10],
        &[
            (Prompt::DoubleDown, false),
            (Prompt::Hit, true),
            (Prompt::Stand, true),
        ],
    );
    let mut sink = Recorder::default();

    // The player's hit and the dealer's draws all come from the refill.
    let outcome = game.play_round(&mut script, &mut sink);

    assert!(matches!(outcome, RoundOutcome::Completed(_)));
    assert!(
        sink.events
            .iter()
            .any(|event| matches!(event, TableEvent::ShoeRefilled))
    );
    let hand = &game.player.hands()[0];
    assert_eq!(hand.cards()[0], card(Rank::Ten, Suit::Hearts));
    assert_eq!(hand.cards()[1], card(Rank::Six, Suit::Hearts));
}

#[test]
fn run_stops_when_the_player_declines_another_round() {
    let mut game = Game::new(GameOptions::default(), "Alex", 100, 9);
    let mut script = Script::new(&[0], &[(Prompt::PlayAgain, false)]);

    game.run(&mut script, &mut pontoon::NullSink);

    assert_eq!(game.player.money(), 100);
    assert!(script.is_drained());
}

#[test]
fn run_stops_when_the_player_is_out_of_money() {
    // Dealer blackjack takes the player's whole buy-in in one round.
    let mut game = game_with_draws(
        10,
        &[
            card(Rank::Nine, Suit::Hearts),  // player
            card(Rank::Ace, Suit::Spades),   // dealer up
            card(Rank::Seven, Suit::Hearts), // player
            card(Rank::King, Suit::Spades),  // dealer hole
        ],
    );
    let mut script = Script::new(&[10], &[(Prompt::PlayAgain, true)]);
    let mut sink = Recorder::default();

    // The player wants to keep going but has nothing left to bet.
    game.run(&mut script, &mut sink);

    assert_eq!(game.player.money(), 0);
    assert!(
        sink.events
            .iter()
            .any(|event| matches!(event, TableEvent::OutOfMoney))
    );
    assert!(script.is_drained());
}
