//! What the engine reports to a presentation layer, and what it accepts back.

use serde::{Deserialize, Serialize};

use crate::card::Card;
use crate::game::GameState;
use crate::hand::{DealerHand, Hand};
use crate::result::RoundResult;

/// Who received a dealt card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Seat {
    /// One of the player's hands.
    Player {
        /// Index of the receiving hand.
        hand_index: usize,
    },
    /// The dealer.
    Dealer,
}

/// An owned copy of the table at the moment an event was produced.
///
/// The dealer's hole card stays in `dealer` but front-ends should render
/// [`DealerHand::visible_cards`] until [`DealerHand::is_hole_revealed`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableSnapshot {
    /// Engine state.
    pub state: GameState,
    /// Player hands in play order.
    pub hands: Vec<Hand>,
    /// Dealer hand.
    pub dealer: DealerHand,
    /// Index of the hand being played.
    pub active_hand_index: usize,
    /// Balance after stakes already deducted this round.
    pub balance: usize,
    /// Sum of all hand bets plus insurance.
    pub total_bet: usize,
    /// Insurance stake.
    pub insurance: usize,
}

/// Something a presentation layer may want to show.
///
/// Events are returned in the order they happened, so a front-end can replay
/// them with whatever pacing it likes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Event {
    /// Initial cards are on the table.
    RoundStarted(TableSnapshot),
    /// A card went to the player or dealer.
    CardDealt {
        /// Receiving seat.
        seat: Seat,
        /// The card.
        card: Card,
        /// Table after the card landed.
        snapshot: TableSnapshot,
    },
    /// The dealer shows an Ace; waiting for an insurance decision.
    InsuranceOffered(TableSnapshot),
    /// Play moved on to the next split hand.
    HandAdvanced {
        /// The newly active hand.
        hand_index: usize,
        /// Table at the time of the move.
        snapshot: TableSnapshot,
    },
    /// A pair was split into two hands.
    SplitOccurred(TableSnapshot),
    /// The dealer stopped drawing.
    DealerTurnFinished(TableSnapshot),
    /// The round was settled.
    RoundOver(Box<RoundResult>),
    /// Advisory text for the player.
    Message(String),
    /// The settled stats could not be persisted.
    SaveFailed {
        /// Why the store refused the write.
        reason: String,
    },
}

/// A player command, as produced by a front-end.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Command {
    /// Place a bet and deal.
    StartRound(usize),
    /// Take a card on the active hand.
    Hit,
    /// Stop on the active hand.
    Stand,
    /// Double the bet and take exactly one card.
    DoubleDown,
    /// Split the active pair.
    Split,
    /// Buy insurance for half the bet.
    AcceptInsurance,
    /// Refuse insurance.
    DeclineInsurance,
}
