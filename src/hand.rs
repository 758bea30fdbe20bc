//! Hand state and the dual-value ace evaluator.

use alloc::vec::Vec;

use crate::card::Card;

/// Maximum number of cards a hand may hold.
pub const HAND_SIZE_LIMIT: usize = 5;

/// Finds the best total over every ace assignment.
///
/// Each ace may count as 1 or 11, so the candidate totals are explored as
/// a depth-first walk over a binary choice per ace, tracked on an explicit
/// stack of `(running total, next card index)` frames. Completed totals at
/// or under 21 compete for the maximum; if every assignment busts, the
/// hand reports its smallest possible overshoot instead.
fn best_total(cards: &[Card]) -> u8 {
    if cards.is_empty() {
        return 0;
    }

    let mut best_safe: Option<u8> = None;
    let mut least_bust: Option<u8> = None;

    let mut stack: Vec<(u8, usize)> = Vec::new();
    stack.push((0, 0));

    while let Some((total, index)) = stack.pop() {
        if index == cards.len() {
            if total <= 21 {
                best_safe = Some(best_safe.map_or(total, |best| best.max(total)));
            } else {
                least_bust = Some(least_bust.map_or(total, |least| least.min(total)));
            }
            continue;
        }

        let rank = cards[index].rank;
        if rank.is_ace() {
            stack.push((total + 1, index + 1));
            stack.push((total + 11, index + 1));
        } else {
            stack.push((total + rank.value(), index + 1));
        }
    }

    match (best_safe, least_bust) {
        (Some(safe), _) => safe,
        (None, Some(bust)) => bust,
        (None, None) => 0,
    }
}

/// A blackjack hand.
///
/// The card list is only mutated through [`hit`](Self::hit),
/// [`stand`](Self::stand), and the split/double mutators, each of which
/// recomputes the value and legality flags synchronously, so the derived
/// state is never stale. Once `can_hit` turns false it never turns true
/// again.
#[derive(Debug, Clone)]
pub struct Hand {
    /// Cards in the hand, in deal order.
    cards: Vec<Card>,
    /// Best legal total (or smallest bust total).
    value: u8,
    /// Whether the hand may legally take another card.
    can_hit: bool,
    /// Whether the hand may legally be split. Sticky once set; cleared
    /// only by performing the split.
    can_split: bool,
    /// Whether the hand is soft (holds an ace with a total under 12).
    soft: bool,
    /// Whether the hand holds an ace.
    has_ace: bool,
    /// Whether the hand holds a ten-valued card (ten or face).
    has_ten: bool,
    /// Whether the hand came out of a split, or was split itself.
    split: bool,
    /// Whether the bet on the hand has been doubled.
    doubled_down: bool,
    /// Whether the player has stood on the hand.
    standing: bool,
    /// Current bet riding on the hand.
    bet: usize,
}

impl Hand {
    /// Creates a new empty hand with no bet.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            cards: Vec::new(),
            value: 0,
            can_hit: true,
            can_split: false,
            soft: false,
            has_ace: false,
            has_ten: false,
            split: false,
            doubled_down: false,
            standing: false,
            bet: 0,
        }
    }

    /// Adds a card to the hand, if the hand may still hit.
    ///
    /// A hand that is standing, busted, doubled-and-drawn, or at the size
    /// limit silently ignores the card; callers are expected to check
    /// [`can_hit`](Self::can_hit) first.
    pub fn hit(&mut self, card: Card) {
        if !self.can_hit {
            return;
        }

        if card.rank.is_ace() {
            self.has_ace = true;
        }
        if card.rank.is_ten_valued() {
            self.has_ten = true;
        }
        self.cards.push(card);
        self.update();
    }

    /// Stands on the hand, ending its turn.
    pub fn stand(&mut self) {
        self.standing = true;
        self.update();
    }

    /// Recomputes the value and every derived flag from the card list.
    fn update(&mut self) {
        self.value = best_total(&self.cards);

        // One extra card is allowed after doubling down; the hand doubles
        // at two cards, so the third card ends it.
        let awaiting_double_card = !self.doubled_down || self.cards.len() < 3;
        self.can_hit = self.cards.len() < HAND_SIZE_LIMIT
            && self.value < 21
            && !self.standing
            && awaiting_double_card;

        if !self.can_split
            && !self.split
            && self.cards.len() == 2
            && self.cards[0].rank == self.cards[1].rank
        {
            self.can_split = true;
        }

        self.soft = self.has_ace && self.value < 12;
    }

    /// Returns the cards in the hand.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Returns the number of cards in the hand.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the hand is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Returns the best legal total of the hand, or the smallest bust
    /// total if every ace assignment goes over 21.
    #[must_use]
    pub const fn value(&self) -> u8 {
        self.value
    }

    /// Returns whether the hand has gone over 21.
    #[must_use]
    pub const fn is_bust(&self) -> bool {
        self.value > 21
    }

    /// Returns whether the hand may legally take another card.
    #[must_use]
    pub const fn can_hit(&self) -> bool {
        self.can_hit
    }

    /// Returns whether the hand may legally be split.
    #[must_use]
    pub const fn can_split(&self) -> bool {
        self.can_split
    }

    /// Returns whether the hand is soft.
    #[must_use]
    pub const fn is_soft(&self) -> bool {
        self.soft
    }

    /// Returns whether the hand is a blackjack.
    ///
    /// Requires an ace alongside a ten-valued card, and is permanently
    /// false for any hand that has been through a split.
    #[must_use]
    pub const fn is_blackjack(&self) -> bool {
        self.has_ace && self.has_ten && !self.split
    }

    /// Returns whether the hand was split.
    #[must_use]
    pub const fn is_split(&self) -> bool {
        self.split
    }

    /// Returns whether the hand has been doubled down.
    #[must_use]
    pub const fn is_doubled_down(&self) -> bool {
        self.doubled_down
    }

    /// Returns whether the player has stood on the hand.
    #[must_use]
    pub const fn is_standing(&self) -> bool {
        self.standing
    }

    /// Returns the bet riding on the hand.
    #[must_use]
    pub const fn bet(&self) -> usize {
        self.bet
    }

    /// Places the bet for the hand. The caller is responsible for the
    /// balance check and debit.
    pub(crate) fn set_bet(&mut self, amount: usize) {
        self.bet = amount;
    }

    /// Doubles the bet and marks the hand doubled-down, after which
    /// exactly one further hit is permitted.
    pub(crate) fn double_bet(&mut self) {
        self.bet *= 2;
        self.doubled_down = true;
        self.update();
    }

    /// Removes and returns the second card for a split.
    pub(crate) fn take_split_card(&mut self) -> Option<Card> {
        if self.cards.len() != 2 {
            return None;
        }
        let card = self.cards.pop();
        // Presence flags are rebuilt from the remaining card.
        self.has_ace = self.cards[0].rank.is_ace();
        self.has_ten = self.cards[0].rank.is_ten_valued();
        self.update();
        card
    }

    /// Marks the hand as split, permanently disabling blackjack
    /// recognition and further split eligibility from this pairing.
    pub(crate) fn mark_split(&mut self) {
        self.split = true;
        self.can_split = false;
        self.update();
    }
}

impl Default for Hand {
    fn default() -> Self {
        Self::new()
    }
}
