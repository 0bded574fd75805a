use tracing::{info, warn};

use crate::error::InsuranceError;
use crate::event::Event;
use crate::store::StatsStore;

use super::{Game, GameState, message};

impl<S: StatsStore> Game<S> {
    /// Returns whether insurance is currently being offered.
    pub fn is_insurance_offered(&self) -> bool {
        self.state == GameState::Insurance
    }

    /// Cost of insuring the current hand: half its bet, rounded down.
    pub fn insurance_cost(&self) -> usize {
        self.hands.first().map_or(0, |hand| hand.bet() / 2)
    }

    /// Buys insurance for half the bet.
    ///
    /// If the balance cannot cover the cost the offer is declined instead and
    /// a message explains why. Either way the round then continues as
    /// [`Game::decline_insurance`] would.
    ///
    /// # Errors
    ///
    /// Returns an error if insurance is not being offered.
    pub fn accept_insurance(&mut self) -> Result<Vec<Event>, InsuranceError> {
        if self.state != GameState::Insurance {
            return Err(InsuranceError::InvalidState);
        }

        let cost = self.insurance_cost();
        if self.balance < cost {
            warn!(cost, balance = self.balance, "insurance declined for lack of funds");
            let mut events = Vec::new();
            message(&mut events, "Not enough balance for insurance!");
            events.extend(self.decline_insurance()?);
            return Ok(events);
        }

        self.balance -= cost;
        self.insurance = cost;
        info!(stake = cost, balance = self.balance, "insurance taken");

        let mut events = Vec::new();
        self.check_naturals(&mut events);
        Ok(events)
    }

    /// Declines insurance.
    ///
    /// # Errors
    ///
    /// Returns an error if insurance is not being offered.
    pub fn decline_insurance(&mut self) -> Result<Vec<Event>, InsuranceError> {
        if self.state != GameState::Insurance {
            return Err(InsuranceError::InvalidState);
        }

        self.insurance = 0;
        let mut events = Vec::new();
        self.check_naturals(&mut events);
        Ok(events)
    }
}
