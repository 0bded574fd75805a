//! The multi-deck shoe the dealer deals from.

use rand::SeedableRng;
use rand::seq::SliceRandom;
use rand_chacha::ChaCha8Rng;
use tracing::{debug, info};

use crate::card::{Card, DECK_SIZE, standard_deck};

/// A shuffled pool of cards built from several standard decks.
///
/// The shoe never runs dry: once the remaining cards fall below the
/// penetration threshold it is rebuilt from fresh decks before the next card
/// is handed out.
#[derive(Debug, Clone)]
pub struct Shoe {
    cards: Vec<Card>,
    decks: u8,
    penetration: f64,
    threshold: usize,
    rebuilds: usize,
    rng: ChaCha8Rng,
}

impl Shoe {
    /// Creates a freshly shuffled shoe.
    ///
    /// `penetration` is the fraction of the shoe dealt before a reshuffle;
    /// with `0.75` the shoe is rebuilt once fewer than a quarter of the cards
    /// remain. A deck count of zero is treated as one.
    ///
    /// # Example
    ///
    /// ```
    /// use bjsolo::Shoe;
    ///
    /// let shoe = Shoe::new(6, 0.75, 7);
    /// assert_eq!(shoe.len(), 312);
    /// assert_eq!(shoe.reshuffle_threshold(), 78);
    /// ```
    #[must_use]
    pub fn new(decks: u8, penetration: f64, seed: u64) -> Self {
        let mut shoe = Self {
            cards: Vec::new(),
            decks: decks.max(1),
            penetration,
            threshold: 0,
            rebuilds: 0,
            rng: ChaCha8Rng::seed_from_u64(seed),
        };
        shoe.fill();
        shoe
    }

    #[expect(
        clippy::cast_precision_loss,
        reason = "f64 has sufficient precision for card counts"
    )]
    fn fill(&mut self) {
        let mut cards = Vec::with_capacity(self.total_size());
        for _ in 0..self.decks {
            cards.extend(standard_deck());
        }
        cards.shuffle(&mut self.rng);
        self.cards = cards;

        let threshold = (self.cards.len() as f64 * (1.0 - self.penetration)).floor();
        self.threshold = threshold.max(0.0) as usize;
    }

    /// Discards whatever is left and rebuilds the shoe from fresh decks.
    pub fn rebuild(&mut self) {
        let remaining = self.cards.len();
        self.fill();
        self.rebuilds += 1;
        info!(
            remaining,
            size = self.cards.len(),
            threshold = self.threshold,
            "shoe rebuilt"
        );
    }

    /// Returns whether the next deal will rebuild the shoe first.
    #[must_use]
    pub fn needs_rebuild(&self) -> bool {
        self.cards.len() < self.threshold || self.cards.is_empty()
    }

    /// Deals the next card, rebuilding the shoe first when it has reached the
    /// penetration marker.
    pub fn deal(&mut self) -> Card {
        if self.cards.len() < self.threshold {
            self.rebuild();
        }
        loop {
            if let Some(card) = self.cards.pop() {
                debug!(card = %card, remaining = self.cards.len(), "card drawn");
                return card;
            }
            // Only reachable with a zero threshold (full penetration).
            self.rebuild();
        }
    }

    /// Places cards on top of the shoe so they are dealt next, first element
    /// first.
    pub fn stack(&mut self, draws: &[Card]) {
        self.cards.extend(draws.iter().rev());
    }

    /// Number of cards remaining.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether no cards remain.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Number of cards in a freshly built shoe.
    #[must_use]
    pub fn total_size(&self) -> usize {
        self.decks as usize * DECK_SIZE
    }

    /// Remaining-card count below which the shoe is rebuilt.
    #[must_use]
    pub const fn reshuffle_threshold(&self) -> usize {
        self.threshold
    }

    /// Number of times the shoe has been rebuilt since it was created.
    #[must_use]
    pub const fn rebuilds(&self) -> usize {
        self.rebuilds
    }

    /// Number of decks the shoe is built from.
    #[must_use]
    pub const fn decks(&self) -> u8 {
        self.decks
    }
}
