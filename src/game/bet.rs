use tracing::info;

use crate::error::BetError;
use crate::event::Event;
use crate::hand::Hand;
use crate::store::StatsStore;

use super::{Game, GameState, message};

impl<S: StatsStore> Game<S> {
    /// Places a bet and deals the opening cards.
    ///
    /// Cards go player, dealer, player, dealer, so the dealer's hole card is
    /// dealt before the player's second card. If the dealer's up card is an
    /// Ace the round pauses for an insurance decision. Otherwise a natural on
    /// either side settles the round at once; if neither has one the player is
    /// on turn with the first hand.
    ///
    /// # Errors
    ///
    /// Returns an error if a round is already in progress, the bet is zero, or
    /// the bet exceeds the balance. Nothing changes when an error is returned.
    pub fn start_round(&mut self, bet: usize) -> Result<Vec<Event>, BetError> {
        if self.state != GameState::Idle {
            return Err(BetError::InvalidState);
        }
        if bet == 0 {
            return Err(BetError::ZeroBet);
        }
        if bet > self.balance {
            return Err(BetError::InsufficientFunds);
        }

        self.hands.clear();
        self.dealer.clear();
        self.insurance = 0;
        self.active_hand = 0;

        self.balance -= bet;
        self.hands.push(Hand::new(bet));
        info!(bet, balance = self.balance, "round started");

        self.set_state(GameState::Dealing);
        let mut events = Vec::new();
        self.deal_to_player(0, &mut events);
        self.deal_to_dealer(&mut events);
        self.deal_to_player(0, &mut events);
        self.deal_to_dealer(&mut events);
        events.push(Event::RoundStarted(self.snapshot()));

        if self.dealer.up_card().is_some_and(|card| card.is_ace()) {
            self.set_state(GameState::Insurance);
            events.push(Event::InsuranceOffered(self.snapshot()));
            return Ok(events);
        }

        self.check_naturals(&mut events);
        Ok(events)
    }

    /// Settles at once when either side holds a natural, otherwise hands the
    /// turn to the player's first hand.
    pub(super) fn check_naturals(&mut self, events: &mut Vec<Event>) {
        let player_natural = self.hands.first().is_some_and(Hand::is_blackjack);
        if player_natural || self.dealer.is_blackjack() {
            self.settle(events);
        } else {
            self.set_state(GameState::PlayerTurn);
            message(events, "Your turn. Hit or Stand?");
        }
    }
}
