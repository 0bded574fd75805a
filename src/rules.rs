//! Table rules, the dealer's drawing policy and payout arithmetic.

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::hand::Hand;
use crate::result::HandOutcome;

/// House rules for the table.
///
/// The defaults are the only rules the game is designed around; the builder
/// exists so tests and front-ends can tweak them.
///
/// ```
/// use bjsolo::Rules;
///
/// let rules = Rules::default()
///     .with_decks(2)
///     .with_blackjack_payout(1.2)
///     .with_dealer_hits_on_soft_17(false);
/// assert_eq!(rules.decks, 2);
/// assert!(rules.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Rules {
    /// Profit ratio for a natural blackjack (3:2).
    pub blackjack_payout: f64,
    /// Profit ratio for an ordinary win (1:1).
    pub standard_payout: f64,
    /// Profit ratio for a winning insurance bet (2:1).
    pub insurance_payout: f64,
    /// Whether the dealer draws on soft 17.
    pub dealer_hits_on_soft_17: bool,
    /// Maximum number of splits in one round; the player holds at most
    /// `max_splits + 1` hands.
    pub max_splits: u8,
    /// Number of decks in the shoe.
    pub decks: u8,
    /// Fraction of the shoe dealt before it is rebuilt.
    pub penetration: f64,
}

impl Default for Rules {
    fn default() -> Self {
        Self {
            blackjack_payout: 1.5,
            standard_payout: 1.0,
            insurance_payout: 2.0,
            dealer_hits_on_soft_17: true,
            max_splits: 3,
            decks: 6,
            penetration: 0.75,
        }
    }
}

impl Rules {
    /// Sets the blackjack payout ratio.
    #[must_use]
    pub const fn with_blackjack_payout(mut self, ratio: f64) -> Self {
        self.blackjack_payout = ratio;
        self
    }

    /// Sets the payout ratio for ordinary wins.
    #[must_use]
    pub const fn with_standard_payout(mut self, ratio: f64) -> Self {
        self.standard_payout = ratio;
        self
    }

    /// Sets the insurance payout ratio.
    #[must_use]
    pub const fn with_insurance_payout(mut self, ratio: f64) -> Self {
        self.insurance_payout = ratio;
        self
    }

    /// Sets whether the dealer hits on soft 17.
    #[must_use]
    pub const fn with_dealer_hits_on_soft_17(mut self, hits: bool) -> Self {
        self.dealer_hits_on_soft_17 = hits;
        self
    }

    /// Sets the maximum number of splits.
    #[must_use]
    pub const fn with_max_splits(mut self, splits: u8) -> Self {
        self.max_splits = splits;
        self
    }

    /// Sets the number of decks.
    #[must_use]
    pub const fn with_decks(mut self, decks: u8) -> Self {
        self.decks = decks;
        self
    }

    /// Sets the shoe penetration.
    #[must_use]
    pub const fn with_penetration(mut self, penetration: f64) -> Self {
        self.penetration = penetration;
        self
    }

    /// Most hands the player may hold at once.
    #[must_use]
    pub const fn max_hands(&self) -> usize {
        self.max_splits as usize + 1
    }

    /// Checks that the rules describe a playable table.
    ///
    /// # Errors
    ///
    /// Returns an error if there are no decks, the penetration is outside
    /// `(0, 1]`, or a payout ratio is negative or not finite.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.decks == 0 {
            return Err(ConfigError::NoDecks);
        }
        if !(self.penetration > 0.0 && self.penetration <= 1.0) {
            return Err(ConfigError::Penetration(self.penetration));
        }
        for (name, ratio) in [
            ("blackjack_payout", self.blackjack_payout),
            ("standard_payout", self.standard_payout),
            ("insurance_payout", self.insurance_payout),
        ] {
            if !ratio.is_finite() || ratio < 0.0 {
                return Err(ConfigError::Payout { name, ratio });
            }
        }
        Ok(())
    }
}

/// Profit on `amount` at `ratio`, rounded down.
#[must_use]
pub fn payout_amount(amount: usize, ratio: f64) -> usize {
    #[expect(
        clippy::cast_precision_loss,
        reason = "f64 has sufficient precision for monetary values"
    )]
    let winnings = (amount as f64) * ratio;
    winnings.floor() as usize
}

/// Whether the dealer must take another card.
///
/// Below 17 the dealer always hits and above 17 always stands. On exactly 17
/// the dealer hits only when the hand is soft and the table hits soft 17.
#[must_use]
pub fn dealer_should_hit(dealer: &Hand, rules: &Rules) -> bool {
    let value = dealer.value();
    if value < 17 {
        return true;
    }
    if value > 17 {
        return false;
    }
    dealer.is_soft() && rules.dealer_hits_on_soft_17
}

/// Settles one player hand against the final dealer hand.
///
/// The returned amount is everything credited back to the balance, stake
/// included; zero means the stake is lost.
#[must_use]
pub fn settle_hand(player: &Hand, dealer: &Hand, rules: &Rules) -> (HandOutcome, usize) {
    let bet = player.bet();

    if player.is_blackjack() {
        if dealer.is_blackjack() {
            return (HandOutcome::BlackjackPush, bet);
        }
        return (
            HandOutcome::Blackjack,
            bet + payout_amount(bet, rules.blackjack_payout),
        );
    }

    if player.is_bust() {
        return (HandOutcome::Bust, 0);
    }

    let win = bet + payout_amount(bet, rules.standard_payout);
    if dealer.is_bust() {
        return (HandOutcome::WinDealerBust, win);
    }

    match player.value().cmp(&dealer.value()) {
        core::cmp::Ordering::Greater => (HandOutcome::WinHigher, win),
        core::cmp::Ordering::Equal => (HandOutcome::Push, bet),
        core::cmp::Ordering::Less => (HandOutcome::Lose, 0),
    }
}

/// Amount credited for an insurance stake that was already deducted.
///
/// Pays the stake back plus 2:1 when the dealer had a natural, nothing
/// otherwise.
#[must_use]
pub fn settle_insurance(stake: usize, dealer_blackjack: bool, rules: &Rules) -> usize {
    if dealer_blackjack && stake > 0 {
        stake + payout_amount(stake, rules.insurance_payout)
    } else {
        0
    }
}
