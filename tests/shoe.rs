//! Shoe construction, dealing and the penetration rebuild.

use bjsolo::{Card, DECK_SIZE, Rank, Shoe, Suit};
use proptest::prelude::*;

#[test]
fn six_deck_shoe_defaults() {
    let shoe = Shoe::new(6, 0.75, 1);
    assert_eq!(shoe.len(), 6 * DECK_SIZE);
    assert_eq!(shoe.total_size(), 312);
    assert_eq!(shoe.reshuffle_threshold(), 78);
    assert_eq!(shoe.rebuilds(), 0);
    assert!(!shoe.needs_rebuild());
}

#[test]
fn zero_decks_means_one() {
    let shoe = Shoe::new(0, 0.75, 1);
    assert_eq!(shoe.decks(), 1);
    assert_eq!(shoe.len(), DECK_SIZE);
    assert_eq!(shoe.reshuffle_threshold(), 13);
}

#[test]
fn each_deal_removes_one_card() {
    let mut shoe = Shoe::new(1, 0.75, 3);
    for expected in (40..DECK_SIZE).rev() {
        shoe.deal();
        assert_eq!(shoe.len(), expected);
    }
}

#[test]
fn shoe_holds_every_card_once_per_deck() {
    let mut shoe = Shoe::new(2, 1.0, 9);
    let mut counts = std::collections::HashMap::new();
    for _ in 0..2 * DECK_SIZE {
        *counts.entry(shoe.deal()).or_insert(0) += 1;
    }
    assert_eq!(counts.len(), DECK_SIZE);
    assert!(counts.values().all(|&count| count == 2));
    assert_eq!(shoe.rebuilds(), 0);
}

#[test]
fn rebuilds_once_below_the_marker() {
    let mut shoe = Shoe::new(6, 0.75, 5);
    for _ in 0..234 {
        shoe.deal();
    }
    assert_eq!(shoe.len(), 78);
    assert!(!shoe.needs_rebuild());

    // Sitting exactly on the marker still deals from the old shoe.
    shoe.deal();
    assert_eq!(shoe.len(), 77);
    assert!(shoe.needs_rebuild());
    assert_eq!(shoe.rebuilds(), 0);

    shoe.deal();
    assert_eq!(shoe.rebuilds(), 1);
    assert_eq!(shoe.len(), 311);
}

#[test]
fn full_penetration_rebuilds_when_empty() {
    let mut shoe = Shoe::new(1, 1.0, 2);
    assert_eq!(shoe.reshuffle_threshold(), 0);
    for _ in 0..DECK_SIZE {
        shoe.deal();
    }
    assert!(shoe.is_empty());

    shoe.deal();
    assert_eq!(shoe.rebuilds(), 1);
    assert_eq!(shoe.len(), DECK_SIZE - 1);
}

#[test]
fn same_seed_same_order() {
    let mut a = Shoe::new(2, 0.75, 77);
    let mut b = Shoe::new(2, 0.75, 77);
    let first: Vec<Card> = (0..20).map(|_| a.deal()).collect();
    let second: Vec<Card> = (0..20).map(|_| b.deal()).collect();
    assert_eq!(first, second);
}

#[test]
fn stacked_cards_come_out_in_order() {
    let mut shoe = Shoe::new(1, 0.75, 4);
    let draws = [
        Card::new(Rank::Ace, Suit::Spades),
        Card::new(Rank::Two, Suit::Hearts),
        Card::new(Rank::King, Suit::Clubs),
    ];
    shoe.stack(&draws);
    assert_eq!(shoe.len(), DECK_SIZE + 3);

    for card in draws {
        assert_eq!(shoe.deal(), card);
    }
    assert_eq!(shoe.len(), DECK_SIZE);
}

proptest! {
    #[test]
    fn deal_shrinks_or_rebuilds(
        decks in 1u8..=4,
        penetration in 0.1f64..=1.0,
        seed in any::<u64>(),
        deals in 1usize..400,
    ) {
        let mut shoe = Shoe::new(decks, penetration, seed);
        let total = shoe.total_size();
        for _ in 0..deals {
            let before = shoe.len();
            let rebuilds = shoe.rebuilds();
            shoe.deal();
            if shoe.rebuilds() == rebuilds {
                prop_assert_eq!(shoe.len(), before - 1);
            } else {
                prop_assert_eq!(shoe.rebuilds(), rebuilds + 1);
                prop_assert_eq!(shoe.len(), total - 1);
            }
            prop_assert!(shoe.len() < total);
        }
    }
}
