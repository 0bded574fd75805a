//! Player and dealer hand representations.

use serde::{Deserialize, Serialize};

use crate::card::Card;

fn evaluate_cards(cards: &[Card]) -> u8 {
    let mut value: u8 = 0;
    let mut aces: u8 = 0;

    for card in cards {
        if card.is_ace() {
            aces += 1;
        }
        value = value.saturating_add(card.value());
    }

    while value > 21 && aces > 0 {
        value -= 10;
        aces -= 1;
    }

    value
}

fn hard_total(cards: &[Card]) -> u8 {
    cards.iter().fold(0u8, |total, card| {
        total.saturating_add(if card.is_ace() { 1 } else { card.value() })
    })
}

/// A hand of cards with the bet riding on it.
///
/// Cards are only ever appended during play, except for the second card of a
/// pair which [`Hand::take_split_card`] moves into a new hand.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Hand {
    /// Cards in the hand.
    cards: Vec<Card>,
    /// Whether this hand was created by a split.
    split: bool,
    /// Bet amount for this hand.
    bet: usize,
}

impl Hand {
    /// Creates a new empty hand with the given bet.
    #[must_use]
    pub const fn new(bet: usize) -> Self {
        Self {
            cards: Vec::new(),
            split: false,
            bet,
        }
    }

    /// Creates a new hand from a split with a single card.
    #[must_use]
    pub fn from_split(card: Card, bet: usize) -> Self {
        Self {
            cards: vec![card],
            split: true,
            bet,
        }
    }

    /// Adds a card to the hand.
    pub fn add_card(&mut self, card: Card) {
        self.cards.push(card);
    }

    /// Returns the cards in the hand.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Returns the bet amount for this hand.
    #[must_use]
    pub const fn bet(&self) -> usize {
        self.bet
    }

    /// Doubles the bet amount.
    pub const fn double_bet(&mut self) {
        self.bet *= 2;
    }

    /// Returns whether this hand was created by a split.
    #[must_use]
    pub const fn is_split(&self) -> bool {
        self.split
    }

    /// Best total of the hand.
    ///
    /// Aces start at 11 and drop to 1 one at a time while the total is over
    /// 21, so this is the highest total not above 21 when one exists and the
    /// smallest bust total otherwise.
    #[must_use]
    pub fn value(&self) -> u8 {
        evaluate_cards(&self.cards)
    }

    /// Total with every Ace counted as 1.
    #[must_use]
    pub fn hard_value(&self) -> u8 {
        hard_total(&self.cards)
    }

    /// Returns whether an Ace is currently counted as 11.
    ///
    /// A hand is soft exactly when its best total differs from its hard total,
    /// so `A,A,5` (17 with one Ace high) is soft while `A,6,10` is not.
    #[must_use]
    pub fn is_soft(&self) -> bool {
        self.hard_value() != self.value()
    }

    /// Returns whether the hand is over 21.
    #[must_use]
    pub fn is_bust(&self) -> bool {
        self.value() > 21
    }

    /// Returns whether the hand is a two-card 21.
    #[must_use]
    pub fn is_blackjack(&self) -> bool {
        self.cards.len() == 2 && self.value() == 21
    }

    /// Returns whether the hand is a pair of equal rank.
    #[must_use]
    pub fn can_split(&self) -> bool {
        self.cards.len() == 2 && self.cards[0].rank == self.cards[1].rank
    }

    /// Returns whether the hand is a two-card 9, 10 or 11.
    #[must_use]
    pub fn can_double_down(&self) -> bool {
        self.cards.len() == 2 && (9..=11).contains(&self.value())
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

    /// Removes and returns the second card (for splitting).
    pub fn take_split_card(&mut self) -> Option<Card> {
        if self.cards.len() == 2 {
            self.cards.pop()
        } else {
            None
        }
    }
}

/// The dealer's hand.
///
/// The first card dealt is the hole card and stays hidden until
/// [`DealerHand::reveal_hole`]; the second is the up card.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DealerHand {
    hand: Hand,
    hole_revealed: bool,
}

impl DealerHand {
    /// Creates a new empty dealer hand.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            hand: Hand::new(0),
            hole_revealed: false,
        }
    }

    /// Adds a card to the hand.
    pub fn add_card(&mut self, card: Card) {
        self.hand.add_card(card);
    }

    /// Returns all cards in the hand, hidden or not.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        self.hand.cards()
    }

    /// Returns the cards a player may see.
    #[must_use]
    pub fn visible_cards(&self) -> &[Card] {
        let cards = self.hand.cards();
        if self.hole_revealed || cards.is_empty() {
            cards
        } else {
            &cards[1..]
        }
    }

    /// The face-down card.
    #[must_use]
    pub fn hole_card(&self) -> Option<&Card> {
        self.hand.cards().first()
    }

    /// The face-up card.
    #[must_use]
    pub fn up_card(&self) -> Option<&Card> {
        self.hand.cards().get(1)
    }

    /// Returns whether the hole card is revealed.
    #[must_use]
    pub const fn is_hole_revealed(&self) -> bool {
        self.hole_revealed
    }

    /// Reveals the hole card.
    pub const fn reveal_hole(&mut self) {
        self.hole_revealed = true;
    }

    /// Value shown to the player: the up card alone until the hole card is
    /// revealed.
    #[must_use]
    pub fn visible_value(&self) -> u8 {
        if self.hole_revealed {
            self.value()
        } else {
            self.up_card().map_or(0, |card| card.value())
        }
    }

    /// The full hand as a plain [`Hand`].
    #[must_use]
    pub const fn hand(&self) -> &Hand {
        &self.hand
    }

    /// Calculates the full value of the hand.
    #[must_use]
    pub fn value(&self) -> u8 {
        self.hand.value()
    }

    /// Returns whether the hand is a blackjack.
    #[must_use]
    pub fn is_blackjack(&self) -> bool {
        self.hand.is_blackjack()
    }

    /// Returns whether the hand is bust.
    #[must_use]
    pub fn is_bust(&self) -> bool {
        self.hand.is_bust()
    }

    /// Returns whether an Ace is currently counted as 11.
    #[must_use]
    pub fn is_soft(&self) -> bool {
        self.hand.is_soft()
    }

    /// Returns the number of cards.
    #[must_use]
    pub fn len(&self) -> usize {
        self.hand.len()
    }

    /// Returns whether the hand is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.hand.is_empty()
    }

    /// Clears the hand for a new round.
    pub fn clear(&mut self) {
        self.hand = Hand::new(0);
        self.hole_revealed = false;
    }
}
