//! Error types for game operations.

use thiserror::Error;

/// Errors that can occur when starting a round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum BetError {
    /// A round is already in progress.
    #[error("a round is already in progress")]
    InvalidState,
    /// Bet amount is zero.
    #[error("bet amount is zero")]
    ZeroBet,
    /// Bet exceeds the balance.
    #[error("not enough balance to bet")]
    InsufficientFunds,
}

/// Errors that can occur during player actions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ActionError {
    /// It is not the player's turn.
    #[error("it is not the player's turn")]
    InvalidState,
    /// No hand is active.
    #[error("no hand is active")]
    NoActiveHand,
    /// Cannot double down on this hand.
    #[error("can only double down on a two-card 9, 10, or 11")]
    CannotDouble,
    /// Cannot split this hand.
    #[error("can only split two cards of the same rank")]
    CannotSplit,
    /// Maximum splits reached.
    #[error("cannot hold more than {0} hands")]
    MaxSplitsReached(usize),
    /// Insufficient funds for this action.
    #[error("not enough balance for this action")]
    InsufficientFunds,
}

/// Errors that can occur while insurance is offered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum InsuranceError {
    /// Insurance is not being offered.
    #[error("insurance is not being offered")]
    InvalidState,
}

/// Errors raised by a stats store.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The record could not be read or written.
    #[error("stats record i/o failed: {0}")]
    Io(#[from] std::io::Error),
    /// The record could not be encoded or decoded.
    #[error("stats record is malformed: {0}")]
    Format(#[from] serde_json::Error),
    /// The store refused the write.
    #[error("stats store unavailable: {0}")]
    Unavailable(String),
}

/// Errors in a rules configuration.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum ConfigError {
    /// The shoe has no decks.
    #[error("the shoe needs at least one deck")]
    NoDecks,
    /// Penetration outside `(0, 1]`.
    #[error("penetration must be in (0, 1], got {0}")]
    Penetration(f64),
    /// A payout ratio is negative or not finite.
    #[error("{name} must be a non-negative finite ratio, got {ratio}")]
    Payout {
        /// Which ratio is wrong.
        name: &'static str,
        /// The rejected value.
        ratio: f64,
    },
}

/// Any error the engine can return from [`crate::Game::apply`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum GameError {
    /// Starting a round failed.
    #[error(transparent)]
    Bet(#[from] BetError),
    /// A player action failed.
    #[error(transparent)]
    Action(#[from] ActionError),
    /// An insurance decision failed.
    #[error(transparent)]
    Insurance(#[from] InsuranceError),
}

impl GameError {
    /// Whether the rejection was caused by the balance being too low.
    #[must_use]
    pub const fn is_insufficient_funds(&self) -> bool {
        matches!(
            self,
            Self::Bet(BetError::InsufficientFunds) | Self::Action(ActionError::InsufficientFunds)
        )
    }
}

/// Errors that can occur when opening a table.
#[derive(Debug, Error)]
pub enum SetupError {
    /// The rules are not playable.
    #[error(transparent)]
    Config(#[from] ConfigError),
    /// The player record could not be loaded.
    #[error(transparent)]
    Store(#[from] StoreError),
}
