use tracing::{debug, info};

use crate::error::ActionError;
use crate::event::Event;
use crate::hand::Hand;
use crate::store::StatsStore;

use super::{Game, GameState, message};

impl<S: StatsStore> Game<S> {
    /// Checks that the player is on turn and returns the active hand index.
    fn ensure_player_turn(&self) -> Result<usize, ActionError> {
        if self.state != GameState::PlayerTurn {
            return Err(ActionError::InvalidState);
        }
        if self.active_hand >= self.hands.len() {
            return Err(ActionError::NoActiveHand);
        }
        Ok(self.active_hand)
    }

    /// Moves to the next hand, or to the dealer after the last one.
    fn advance_hand(&mut self, events: &mut Vec<Event>) {
        if self.active_hand + 1 < self.hands.len() {
            self.active_hand += 1;
            debug!(hand_index = self.active_hand, "next hand");
            message(events, format!("Now playing Hand {}", self.active_hand + 1));
            events.push(Event::HandAdvanced {
                hand_index: self.active_hand,
                snapshot: self.snapshot(),
            });
        } else {
            self.play_dealer(events);
        }
    }

    /// Player action: Hit (draw a card).
    ///
    /// Play moves on by itself once the hand busts or reaches 21.
    ///
    /// # Errors
    ///
    /// Returns an error if the player is not on turn.
    pub fn hit(&mut self) -> Result<Vec<Event>, ActionError> {
        let index = self.ensure_player_turn()?;

        let mut events = Vec::new();
        self.deal_to_player(index, &mut events);

        let hand = &self.hands[index];
        if hand.is_bust() {
            message(&mut events, "Bust!");
            self.advance_hand(&mut events);
        } else if hand.value() == 21 {
            self.advance_hand(&mut events);
        }

        Ok(events)
    }

    /// Player action: Stand (keep current hand).
    ///
    /// # Errors
    ///
    /// Returns an error if the player is not on turn.
    pub fn stand(&mut self) -> Result<Vec<Event>, ActionError> {
        self.ensure_player_turn()?;

        let mut events = Vec::new();
        self.advance_hand(&mut events);
        Ok(events)
    }

    /// Player action: Double down (double the bet, take exactly one card, then
    /// move on whatever the result).
    ///
    /// # Errors
    ///
    /// Returns an error if the player is not on turn, the hand is not a
    /// two-card 9, 10 or 11, or the balance cannot match the bet.
    pub fn double_down(&mut self) -> Result<Vec<Event>, ActionError> {
        let index = self.ensure_player_turn()?;

        let hand = &self.hands[index];
        if !hand.can_double_down() {
            return Err(ActionError::CannotDouble);
        }
        let bet = hand.bet();
        if self.balance < bet {
            return Err(ActionError::InsufficientFunds);
        }

        self.balance -= bet;
        self.hands[index].double_bet();
        info!(hand_index = index, bet = bet * 2, balance = self.balance, "doubled down");

        let mut events = Vec::new();
        self.deal_to_player(index, &mut events);

        let hand = &self.hands[index];
        if hand.is_bust() {
            message(&mut events, format!("Bust on double! Lost {}.", hand.bet()));
        }
        self.advance_hand(&mut events);

        Ok(events)
    }

    /// Player action: Split (split a pair into two hands).
    ///
    /// The second card moves into a new hand placed right after the current
    /// one, with a matching bet, and each hand receives one fresh card. Play
    /// stays on the original hand unless it now holds a natural.
    ///
    /// # Errors
    ///
    /// Returns an error if the player is not on turn, the hand is not a pair,
    /// the table already holds the maximum number of hands, or the balance
    /// cannot match the bet.
    pub fn split(&mut self) -> Result<Vec<Event>, ActionError> {
        let index = self.ensure_player_turn()?;

        let hand = &self.hands[index];
        if !hand.can_split() {
            return Err(ActionError::CannotSplit);
        }
        let max_hands = self.rules.max_hands();
        if self.hands.len() >= max_hands {
            return Err(ActionError::MaxSplitsReached(max_hands));
        }
        let bet = hand.bet();
        if self.balance < bet {
            return Err(ActionError::InsufficientFunds);
        }

        let Some(split_card) = self.hands[index].take_split_card() else {
            return Err(ActionError::CannotSplit);
        };
        self.balance -= bet;
        self.hands.insert(index + 1, Hand::from_split(split_card, bet));
        info!(
            hand_index = index,
            hands = self.hands.len(),
            balance = self.balance,
            "split"
        );

        let mut events = Vec::new();
        self.deal_to_player(index, &mut events);
        self.deal_to_player(index + 1, &mut events);
        events.push(Event::SplitOccurred(self.snapshot()));

        if self.hands[index].is_blackjack() {
            self.advance_hand(&mut events);
        }

        Ok(events)
    }
}
