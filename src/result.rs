//! Round result types for settlement.

use core::fmt::Write as _;

use serde::{Deserialize, Serialize};

/// How a single hand finished against the dealer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum HandOutcome {
    /// Natural blackjack against a dealer without one.
    Blackjack,
    /// Both player and dealer had a natural.
    BlackjackPush,
    /// Dealer busted while the hand stood.
    WinDealerBust,
    /// Hand beat the dealer's total.
    WinHigher,
    /// Hand went over 21.
    Bust,
    /// Dealer's total was higher.
    Lose,
    /// Equal totals.
    Push,
}

impl HandOutcome {
    /// Text shown to the player for this outcome.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Blackjack => "Blackjack!",
            Self::BlackjackPush => "Push (Both Blackjack)",
            Self::WinDealerBust => "You Win! (Dealer Busted)",
            Self::WinHigher => "You Win! (Higher Hand)",
            Self::Bust => "Bust! (You Lose)",
            Self::Lose => "You Lose (Dealer Was Higher)",
            Self::Push => "Push (Tie)",
        }
    }
}

/// Result for a single hand.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct HandResult {
    /// The hand index (for split hands).
    pub hand_index: usize,
    /// The outcome of the hand.
    pub outcome: HandOutcome,
    /// The bet riding on the hand at settlement.
    pub bet: usize,
    /// Amount credited back, stake included.
    pub payout: usize,
    /// The player's hand value.
    pub player_value: u8,
}

/// Overall verdict of a round, used for the win/loss counters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RoundVerdict {
    /// At least one hand paid more than its stake.
    Won,
    /// Nothing won and at least one hand lost its stake.
    Lost,
    /// Every stake came back unchanged.
    Push,
}

impl RoundVerdict {
    /// Derives the verdict from the settled hands; insurance is ignored.
    #[must_use]
    pub fn from_hands(hands: &[HandResult]) -> Self {
        if hands.iter().any(|hand| hand.payout > hand.bet) {
            Self::Won
        } else if hands.iter().any(|hand| hand.payout == 0) {
            Self::Lost
        } else {
            Self::Push
        }
    }
}

/// Everything reported when a round is over.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundResult {
    /// Results for each player hand, in hand order.
    pub hands: Vec<HandResult>,
    /// Insurance stake taken this round (0 if declined or not offered).
    pub insurance_stake: usize,
    /// Amount credited for insurance, stake included.
    pub insurance_payout: usize,
    /// The dealer's final hand value.
    pub dealer_value: u8,
    /// Whether the dealer busted.
    pub dealer_bust: bool,
    /// Whether the dealer had a natural.
    pub dealer_blackjack: bool,
    /// Everything credited to the balance at settlement.
    pub total_payout: usize,
    /// Balance after settlement.
    pub balance: usize,
    /// Overall verdict.
    pub verdict: RoundVerdict,
}

impl RoundResult {
    /// Short label for the round.
    #[must_use]
    pub fn headline(&self) -> &'static str {
        if matches!(self.hands.as_slice(), [only] if only.outcome == HandOutcome::Blackjack) {
            return "Blackjack!";
        }
        match self.verdict {
            RoundVerdict::Won => "You Won!",
            RoundVerdict::Lost => "You Lost",
            RoundVerdict::Push => "Push (It's a Tie)",
        }
    }

    /// Multi-line breakdown: insurance first, then one line per hand.
    #[must_use]
    pub fn details(&self) -> String {
        let mut out = String::new();
        if self.insurance_stake > 0 {
            if self.insurance_payout > 0 {
                let winnings = self.insurance_payout - self.insurance_stake;
                let _ = writeln!(out, "INSURANCE WIN: +${winnings}");
            } else {
                let _ = writeln!(out, "INSURANCE LOSE: -${}", self.insurance_stake);
            }
        }
        for hand in &self.hands {
            let _ = writeln!(
                out,
                "Hand {} ({}): {} (Bet: ${}, Won: ${})",
                hand.hand_index + 1,
                hand.player_value,
                hand.outcome.label(),
                hand.bet,
                hand.payout
            );
        }
        if out.trim().is_empty() {
            return "Round over.".to_owned();
        }
        out
    }
}
