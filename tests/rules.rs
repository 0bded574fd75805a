//! Hand valuation, dealer policy and payout arithmetic.

#![expect(clippy::float_cmp, reason = "exact configuration values")]

use bjsolo::{
    Card, ConfigError, Hand, HandOutcome, HandResult, Rank, RoundResult, RoundVerdict, Rules,
    Suit, dealer_should_hit, payout_amount, settle_hand, settle_insurance,
};
use proptest::prelude::*;

fn hand(ranks: &[Rank], bet: usize) -> Hand {
    let mut hand = Hand::new(bet);
    for (i, &rank) in ranks.iter().enumerate() {
        hand.add_card(Card::new(rank, Suit::ALL[i % 4]));
    }
    hand
}

fn any_card() -> impl Strategy<Value = Card> {
    (0..Rank::ALL.len(), 0..Suit::ALL.len())
        .prop_map(|(rank, suit)| Card::new(Rank::ALL[rank], Suit::ALL[suit]))
}

#[test]
fn aces_drop_to_one_only_as_needed() {
    assert_eq!(hand(&[Rank::Ace, Rank::Ace], 0).value(), 12);
    assert_eq!(
        hand(&[Rank::Ace, Rank::Ace, Rank::Ace, Rank::Eight], 0).value(),
        21
    );
    assert_eq!(hand(&[Rank::Ace, Rank::King], 0).value(), 21);
    assert_eq!(hand(&[Rank::King, Rank::Queen, Rank::Jack], 0).value(), 30);
}

#[test]
fn soft_means_an_ace_is_counted_high() {
    let soft = hand(&[Rank::Ace, Rank::Six], 0);
    assert_eq!(soft.value(), 17);
    assert_eq!(soft.hard_value(), 7);
    assert!(soft.is_soft());

    let hard = hand(&[Rank::Ten, Rank::Seven], 0);
    assert!(!hard.is_soft());

    let two_aces = hand(&[Rank::Ace, Rank::Ace, Rank::Five], 0);
    assert_eq!(two_aces.value(), 17);
    assert!(two_aces.is_soft());

    // Holds an Ace, but it has to count as 1.
    let ace_low = hand(&[Rank::Ace, Rank::Six, Rank::Ten], 0);
    assert_eq!(ace_low.value(), 17);
    assert!(!ace_low.is_soft());
}

#[test]
fn blackjack_split_and_double_eligibility() {
    assert!(hand(&[Rank::Ace, Rank::Queen], 0).is_blackjack());
    assert!(!hand(&[Rank::Seven, Rank::Seven, Rank::Seven], 0).is_blackjack());

    assert!(hand(&[Rank::Eight, Rank::Eight], 0).can_split());
    assert!(!hand(&[Rank::Eight, Rank::Nine], 0).can_split());
    // Equal value is not enough.
    assert!(!hand(&[Rank::King, Rank::Ten], 0).can_split());

    assert!(hand(&[Rank::Six, Rank::Five], 0).can_double_down());
    assert!(hand(&[Rank::Five, Rank::Four], 0).can_double_down());
    assert!(!hand(&[Rank::Six, Rank::Six], 0).can_double_down());
    assert!(!hand(&[Rank::Two, Rank::Three, Rank::Five], 0).can_double_down());
    // Soft 19 is out of range.
    assert!(!hand(&[Rank::Ace, Rank::Eight], 0).can_double_down());
}

#[test]
fn dealer_policy_around_seventeen() {
    let hits = Rules::default();
    let stands = Rules::default().with_dealer_hits_on_soft_17(false);

    let sixteen = hand(&[Rank::Ten, Rank::Six], 0);
    assert!(dealer_should_hit(&sixteen, &hits));
    assert!(dealer_should_hit(&sixteen, &stands));

    let hard_17 = hand(&[Rank::Ten, Rank::Seven], 0);
    assert!(!dealer_should_hit(&hard_17, &hits));
    assert!(!dealer_should_hit(&hard_17, &stands));

    let soft_17 = hand(&[Rank::Ace, Rank::Six], 0);
    assert!(dealer_should_hit(&soft_17, &hits));
    assert!(!dealer_should_hit(&soft_17, &stands));

    let two_aces_17 = hand(&[Rank::Ace, Rank::Ace, Rank::Five], 0);
    assert!(dealer_should_hit(&two_aces_17, &hits));

    let eighteen = hand(&[Rank::Ace, Rank::Seven], 0);
    assert!(!dealer_should_hit(&eighteen, &hits));
}

#[test]
fn settlement_covers_every_outcome() {
    let rules = Rules::default();
    let natural = hand(&[Rank::Ace, Rank::King], 10);
    let dealer_natural = hand(&[Rank::Queen, Rank::Ace], 0);
    let dealer_20 = hand(&[Rank::King, Rank::Queen], 0);
    let dealer_bust = hand(&[Rank::King, Rank::Six, Rank::Nine], 0);

    assert_eq!(
        settle_hand(&natural, &dealer_20, &rules),
        (HandOutcome::Blackjack, 25)
    );
    assert_eq!(
        settle_hand(&natural, &dealer_natural, &rules),
        (HandOutcome::BlackjackPush, 10)
    );

    let bust = hand(&[Rank::King, Rank::Six, Rank::Eight], 10);
    assert_eq!(settle_hand(&bust, &dealer_bust, &rules), (HandOutcome::Bust, 0));

    let nineteen = hand(&[Rank::King, Rank::Nine], 10);
    assert_eq!(
        settle_hand(&nineteen, &dealer_bust, &rules),
        (HandOutcome::WinDealerBust, 20)
    );
    assert_eq!(settle_hand(&nineteen, &dealer_20, &rules), (HandOutcome::Lose, 0));

    let twenty = hand(&[Rank::Jack, Rank::Ten], 10);
    assert_eq!(settle_hand(&twenty, &dealer_20, &rules), (HandOutcome::Push, 10));

    let twenty_one = hand(&[Rank::Seven, Rank::Seven, Rank::Seven], 10);
    assert_eq!(
        settle_hand(&twenty_one, &dealer_20, &rules),
        (HandOutcome::WinHigher, 20)
    );
    // A three-card 21 only ties a dealer natural.
    assert_eq!(
        settle_hand(&twenty_one, &dealer_natural, &rules),
        (HandOutcome::Push, 10)
    );
}

#[test]
fn payouts_round_down() {
    assert_eq!(payout_amount(10, 1.5), 15);
    assert_eq!(payout_amount(5, 1.5), 7);
    assert_eq!(payout_amount(7, 1.0), 7);

    let rules = Rules::default();
    let natural = hand(&[Rank::Ace, Rank::King], 5);
    let dealer = hand(&[Rank::Ten, Rank::Nine], 0);
    assert_eq!(settle_hand(&natural, &dealer, &rules).1, 12);
}

#[test]
fn insurance_settlement() {
    let rules = Rules::default();
    assert_eq!(settle_insurance(10, true, &rules), 30);
    assert_eq!(settle_insurance(10, false, &rules), 0);
    assert_eq!(settle_insurance(0, true, &rules), 0);
}

#[test]
fn rules_defaults_and_validation() {
    let rules = Rules::default();
    assert_eq!(rules.blackjack_payout, 1.5);
    assert_eq!(rules.standard_payout, 1.0);
    assert_eq!(rules.insurance_payout, 2.0);
    assert!(rules.dealer_hits_on_soft_17);
    assert_eq!(rules.max_splits, 3);
    assert_eq!(rules.max_hands(), 4);
    assert_eq!(rules.decks, 6);
    assert_eq!(rules.penetration, 0.75);
    assert!(rules.validate().is_ok());

    assert_eq!(
        Rules::default().with_decks(0).validate(),
        Err(ConfigError::NoDecks)
    );
    assert_eq!(
        Rules::default().with_penetration(0.0).validate(),
        Err(ConfigError::Penetration(0.0))
    );
    assert!(matches!(
        Rules::default().with_insurance_payout(-1.0).validate(),
        Err(ConfigError::Payout {
            name: "insurance_payout",
            ..
        })
    ));
}

#[test]
fn partial_rules_json_keeps_defaults() {
    let rules: Rules =
        serde_json::from_str(r#"{ "decks": 2, "dealer_hits_on_soft_17": false }"#).unwrap();
    assert_eq!(rules.decks, 2);
    assert!(!rules.dealer_hits_on_soft_17);
    assert_eq!(rules.blackjack_payout, 1.5);
    assert_eq!(rules.max_splits, 3);
}

fn hand_result(hand_index: usize, outcome: HandOutcome, payout: usize) -> HandResult {
    HandResult {
        hand_index,
        outcome,
        bet: 10,
        payout,
        player_value: 20,
    }
}

fn round(hands: Vec<HandResult>) -> RoundResult {
    RoundResult {
        verdict: RoundVerdict::from_hands(&hands),
        hands,
        insurance_stake: 0,
        insurance_payout: 0,
        dealer_value: 20,
        dealer_bust: false,
        dealer_blackjack: false,
        total_payout: 0,
        balance: 1000,
    }
}

#[test]
fn verdict_and_headline() {
    let natural = round(vec![hand_result(0, HandOutcome::Blackjack, 25)]);
    assert_eq!(natural.verdict, RoundVerdict::Won);
    assert_eq!(natural.headline(), "Blackjack!");

    let natural_push = round(vec![hand_result(0, HandOutcome::BlackjackPush, 10)]);
    assert_eq!(natural_push.verdict, RoundVerdict::Push);
    assert_eq!(natural_push.headline(), "Push (It's a Tie)");

    // One winning hand is enough, even next to a loss.
    let mixed = round(vec![
        hand_result(0, HandOutcome::Lose, 0),
        hand_result(1, HandOutcome::WinHigher, 20),
    ]);
    assert_eq!(mixed.verdict, RoundVerdict::Won);
    assert_eq!(mixed.headline(), "You Won!");

    let lost = round(vec![
        hand_result(0, HandOutcome::Push, 10),
        hand_result(1, HandOutcome::Bust, 0),
    ]);
    assert_eq!(lost.verdict, RoundVerdict::Lost);
    assert_eq!(lost.headline(), "You Lost");
}

#[test]
fn details_list_insurance_then_hands() {
    let mut result = round(vec![
        hand_result(0, HandOutcome::Push, 10),
        hand_result(1, HandOutcome::WinDealerBust, 20),
    ]);
    assert_eq!(
        result.details(),
        "Hand 1 (20): Push (Tie) (Bet: $10, Won: $10)\n\
         Hand 2 (20): You Win! (Dealer Busted) (Bet: $10, Won: $20)\n"
    );

    result.insurance_stake = 5;
    assert!(result.details().starts_with("INSURANCE LOSE: -$5\n"));
    result.insurance_payout = 15;
    assert!(result.details().starts_with("INSURANCE WIN: +$10\n"));

    assert_eq!(round(Vec::new()).details(), "Round over.");
}

proptest! {
    #[test]
    fn value_is_best_total(cards in proptest::collection::vec(any_card(), 0..12)) {
        let mut hand = Hand::new(0);
        for card in &cards {
            hand.add_card(*card);
        }
        let value = hand.value();
        let hard = hand.hard_value();

        prop_assert!(value >= hard);
        prop_assert_eq!((value - hard) % 10, 0);
        prop_assert!(value - hard <= 10);
        if hard > 21 {
            prop_assert_eq!(value, hard);
        } else {
            prop_assert!(value <= 21);
        }
        prop_assert_eq!(hand.is_soft(), value != hard);
    }
}
