use tracing::{error, info};

use crate::event::Event;
use crate::hand::Hand;
use crate::result::{HandResult, RoundResult, RoundVerdict};
use crate::rules::{dealer_should_hit, settle_hand, settle_insurance};
use crate::store::StatsStore;

use super::{Game, GameState, message};

impl<S: StatsStore> Game<S> {
    /// Dealer plays their hand according to the rules, then the round is
    /// settled.
    ///
    /// The dealer draws nothing when every player hand has busted. Otherwise
    /// cards are drawn one at a time while [`dealer_should_hit`] holds, each
    /// reported as its own event.
    pub(super) fn play_dealer(&mut self, events: &mut Vec<Event>) {
        self.set_state(GameState::DealerTurn);

        if self.hands.iter().all(Hand::is_bust) {
            message(events, "All player hands busted.");
            self.settle(events);
            return;
        }

        self.dealer.reveal_hole();
        while dealer_should_hit(self.dealer.hand(), &self.rules) {
            self.deal_to_dealer(events);
        }

        events.push(Event::DealerTurnFinished(self.snapshot()));
        self.settle(events);
    }

    /// Pays out every hand and the insurance stake, persists the counters and
    /// returns the table to [`GameState::Idle`].
    pub(super) fn settle(&mut self, events: &mut Vec<Event>) {
        self.set_state(GameState::Settlement);
        self.dealer.reveal_hole();

        let dealer = self.dealer.hand();
        let dealer_blackjack = dealer.is_blackjack();

        let insurance_payout = settle_insurance(self.insurance, dealer_blackjack, &self.rules);
        let mut total_payout = insurance_payout;

        let mut hands = Vec::with_capacity(self.hands.len());
        for (hand_index, hand) in self.hands.iter().enumerate() {
            let (outcome, payout) = settle_hand(hand, dealer, &self.rules);
            total_payout += payout;
            hands.push(HandResult {
                hand_index,
                outcome,
                bet: hand.bet(),
                payout,
                player_value: hand.value(),
            });
        }
        self.balance += total_payout;

        let verdict = RoundVerdict::from_hands(&hands);
        match verdict {
            RoundVerdict::Won => self.stats.total_wins += 1,
            RoundVerdict::Lost => self.stats.total_losses += 1,
            RoundVerdict::Push => {}
        }
        self.stats.balance = self.balance;

        let result = RoundResult {
            hands,
            insurance_stake: self.insurance,
            insurance_payout,
            dealer_value: dealer.value(),
            dealer_bust: dealer.is_bust(),
            dealer_blackjack,
            total_payout,
            balance: self.balance,
            verdict,
        };
        info!(
            ?verdict,
            total_payout,
            balance = self.balance,
            dealer_value = result.dealer_value,
            "round settled"
        );

        let saved = self.store.save(&self.stats);

        self.active_hand = 0;
        self.set_state(GameState::Idle);
        events.push(Event::RoundOver(Box::new(result)));

        if let Err(err) = saved {
            error!(%err, balance = self.balance, "failed to persist stats");
            events.push(Event::SaveFailed {
                reason: err.to_string(),
            });
        }
    }
}
