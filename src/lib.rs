//! A single-player blackjack round engine.
//!
//! The crate provides a [`Game`] type that runs the full round flow: betting,
//! the opening deal, insurance, split and double-down play, the dealer's
//! drawing policy and settlement. The player's balance and win/loss counters
//! are loaded from and saved to a [`StatsStore`] so they survive restarts.
//!
//! Operations return the [`Event`]s they produced instead of calling back
//! into a user interface, so any front-end can drive the engine.
//!
//! # Example
//!
//! ```
//! use bjsolo::{Command, Event, Game, MemoryStore, Rules};
//!
//! let mut game = Game::new(Rules::default(), MemoryStore::new(), 42).unwrap();
//! for event in game.apply(Command::StartRound(10)).unwrap() {
//!     if let Event::Message(text) = event {
//!         println!("{text}");
//!     }
//! }
//! ```
#![cfg_attr(docsrs, feature(doc_cfg))]

pub mod card;
pub mod error;
pub mod event;
pub mod game;
pub mod hand;
pub mod result;
pub mod rules;
pub mod shoe;
pub mod store;

// Re-export main types
pub use card::{Card, DECK_SIZE, Rank, Suit};
pub use error::{
    ActionError, BetError, ConfigError, GameError, InsuranceError, SetupError, StoreError,
};
pub use event::{Command, Event, Seat, TableSnapshot};
pub use game::{Game, GameState};
pub use hand::{DealerHand, Hand};
pub use result::{HandOutcome, HandResult, RoundResult, RoundVerdict};
pub use rules::{Rules, dealer_should_hit, payout_amount, settle_hand, settle_insurance};
pub use shoe::Shoe;
pub use store::{JsonFileStore, MemoryStore, PlayerStats, STARTING_BALANCE, StatsStore};
