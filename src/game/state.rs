//! Game state types.

use serde::{Deserialize, Serialize};

/// Where the round currently stands.
///
/// `Dealing`, `DealerTurn` and `Settlement` only last for the duration of the
/// call that entered them; between calls the engine rests in `Idle`,
/// `Insurance` or `PlayerTurn`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameState {
    /// Waiting for a bet.
    Idle,
    /// Dealing the initial cards.
    Dealing,
    /// Dealer shows an Ace; waiting for the insurance decision.
    Insurance,
    /// Waiting for an action on the active hand.
    PlayerTurn,
    /// Dealer plays out their hand.
    DealerTurn,
    /// Paying out the round.
    Settlement,
}
