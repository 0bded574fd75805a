//! Round engine and state management.

use tracing::{debug, warn};

use crate::card::Card;
use crate::error::{GameError, SetupError};
use crate::event::{Command, Event, Seat, TableSnapshot};
use crate::hand::{DealerHand, Hand};
use crate::rules::Rules;
use crate::shoe::Shoe;
use crate::store::{PlayerStats, StatsStore};

mod actions;
mod bet;
mod dealer;
mod insurance;
pub mod state;

pub use state::GameState;

/// A single-player blackjack table.
///
/// The game exclusively owns the shoe, the player's hands and balance, and
/// the dealer's hand. Every operation runs to completion and returns the
/// events it produced; callers only ever see owned snapshots.
///
/// # Example
///
/// ```
/// use bjsolo::{Command, Event, Game, GameState, MemoryStore, Rules};
///
/// let mut game = Game::new(Rules::default(), MemoryStore::new(), 42).unwrap();
/// assert_eq!(game.balance(), 1000);
///
/// let events = game.apply(Command::StartRound(50)).unwrap();
/// assert!(events.iter().any(|event| matches!(event, Event::RoundStarted(_))));
/// assert_ne!(game.state(), GameState::Dealing);
/// ```
#[derive(Debug)]
pub struct Game<S: StatsStore> {
    /// Table rules.
    rules: Rules,
    /// Cards in the shoe.
    shoe: Shoe,
    /// Current game state.
    state: GameState,
    /// Player hands, in play order.
    hands: Vec<Hand>,
    /// Dealer's hand.
    dealer: DealerHand,
    /// Index of the hand being played.
    active_hand: usize,
    /// Player money not currently staked.
    balance: usize,
    /// Insurance stake for the current round.
    insurance: usize,
    /// Persisted counters.
    stats: PlayerStats,
    /// Where `stats` is written after every round.
    store: S,
}

impl<S: StatsStore> Game<S> {
    /// Creates a game, loading the player's record from `store` (or creating
    /// it) and shuffling a fresh shoe from `seed`.
    ///
    /// # Errors
    ///
    /// Returns an error if the rules are invalid or the store cannot load or
    /// create the record.
    pub fn new(rules: Rules, mut store: S, seed: u64) -> Result<Self, SetupError> {
        rules.validate()?;
        let stats = store.load_or_create()?;
        let shoe = Shoe::new(rules.decks, rules.penetration, seed);
        debug!(balance = stats.balance, decks = rules.decks, "table opened");

        Ok(Self {
            rules,
            shoe,
            state: GameState::Idle,
            hands: Vec::new(),
            dealer: DealerHand::new(),
            active_hand: 0,
            balance: stats.balance,
            insurance: 0,
            stats,
            store,
        })
    }

    /// Dispatches a front-end command to the matching operation.
    ///
    /// # Errors
    ///
    /// Returns the operation's error; the game state is unchanged when an
    /// error is returned.
    pub fn apply(&mut self, command: Command) -> Result<Vec<Event>, GameError> {
        let result = match command {
            Command::StartRound(bet) => self.start_round(bet).map_err(GameError::from),
            Command::Hit => self.hit().map_err(GameError::from),
            Command::Stand => self.stand().map_err(GameError::from),
            Command::DoubleDown => self.double_down().map_err(GameError::from),
            Command::Split => self.split().map_err(GameError::from),
            Command::AcceptInsurance => self.accept_insurance().map_err(GameError::from),
            Command::DeclineInsurance => self.decline_insurance().map_err(GameError::from),
        };
        if let Err(err) = &result {
            warn!(?command, %err, state = ?self.state, "command rejected");
        }
        result
    }

    /// Returns the current game state.
    pub const fn state(&self) -> GameState {
        self.state
    }

    /// Returns the table rules.
    pub const fn rules(&self) -> &Rules {
        &self.rules
    }

    /// Returns the player's unstaked balance.
    pub const fn balance(&self) -> usize {
        self.balance
    }

    /// Returns the insurance stake for the current round.
    pub const fn insurance(&self) -> usize {
        self.insurance
    }

    /// Returns the player's hands.
    pub fn hands(&self) -> &[Hand] {
        &self.hands
    }

    /// Returns the dealer's hand.
    pub const fn dealer_hand(&self) -> &DealerHand {
        &self.dealer
    }

    /// Returns the index of the hand being played.
    pub const fn active_hand_index(&self) -> usize {
        self.active_hand
    }

    /// Returns the hand being played, if the player is on turn.
    pub fn active_hand(&self) -> Option<&Hand> {
        if self.state == GameState::PlayerTurn {
            self.hands.get(self.active_hand)
        } else {
            None
        }
    }

    /// Sum of every stake on the table this round.
    pub fn total_bet(&self) -> usize {
        self.hands.iter().map(Hand::bet).sum::<usize>() + self.insurance
    }

    /// Returns the persisted counters as of the last settlement.
    pub const fn stats(&self) -> &PlayerStats {
        &self.stats
    }

    /// Returns the stats store.
    pub const fn store(&self) -> &S {
        &self.store
    }

    /// Returns the stats store mutably.
    pub const fn store_mut(&mut self) -> &mut S {
        &mut self.store
    }

    /// Returns the shoe.
    pub const fn shoe(&self) -> &Shoe {
        &self.shoe
    }

    /// Returns the shoe mutably, for stacking a known deal order.
    pub const fn shoe_mut(&mut self) -> &mut Shoe {
        &mut self.shoe
    }

    /// Owned copy of the table.
    pub fn snapshot(&self) -> TableSnapshot {
        TableSnapshot {
            state: self.state,
            hands: self.hands.clone(),
            dealer: self.dealer.clone(),
            active_hand_index: self.active_hand,
            balance: self.balance,
            total_bet: self.total_bet(),
            insurance: self.insurance,
        }
    }

    fn set_state(&mut self, state: GameState) {
        debug!(from = ?self.state, to = ?state, "state change");
        self.state = state;
    }

    fn deal_to_player(&mut self, hand_index: usize, events: &mut Vec<Event>) -> Card {
        let card = self.shoe.deal();
        if let Some(hand) = self.hands.get_mut(hand_index) {
            hand.add_card(card);
        }
        events.push(Event::CardDealt {
            seat: Seat::Player { hand_index },
            card,
            snapshot: self.snapshot(),
        });
        card
    }

    fn deal_to_dealer(&mut self, events: &mut Vec<Event>) -> Card {
        let card = self.shoe.deal();
        self.dealer.add_card(card);
        events.push(Event::CardDealt {
            seat: Seat::Dealer,
            card,
            snapshot: self.snapshot(),
        });
        card
    }
}

fn message(events: &mut Vec<Event>, text: impl Into<String>) {
    events.push(Event::Message(text.into()));
}
