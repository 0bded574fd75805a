//! CLI blackjack demo.

use std::io::{self, Write};
use std::path::PathBuf;
use std::time::{SystemTime, UNIX_EPOCH};

use bjsolo::{
    Card, Command, DealerHand, Event, Game, GameState, Hand, JsonFileStore, Rules, Seat, Suit,
    TableSnapshot,
};
use clap::Parser;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "cli_blackjack")]
#[command(about = "Play single-player blackjack in the terminal")]
struct Args {
    /// Shuffle seed (defaults to the current time)
    #[arg(long)]
    seed: Option<u64>,

    /// Where the balance and win/loss counters are kept
    #[arg(long, default_value = "blackjack_stats.json")]
    stats: PathBuf,

    /// JSON file overriding table rules
    #[arg(long)]
    rules: Option<PathBuf>,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let rules = match &args.rules {
        Some(path) => serde_json::from_str::<Rules>(&std::fs::read_to_string(path)?)?,
        None => Rules::default(),
    };
    let seed = args.seed.unwrap_or_else(|| {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default()
            .as_secs()
    });

    let mut game = Game::new(rules, JsonFileStore::new(&args.stats), seed)?;

    println!("Blackjack CLI demo (type 'q' to quit)");
    let stats = game.stats();
    println!(
        "Balance ${} | wins {} | losses {}",
        stats.balance, stats.total_wins, stats.total_losses
    );

    loop {
        let balance = game.balance();
        if balance == 0 {
            println!("You are out of money. Game over.");
            break;
        }

        let Some(bet) = prompt_usize(&format!("Bet amount (1-{balance}, 0 to quit): ")) else {
            break;
        };
        if bet == 0 {
            println!("Goodbye.");
            break;
        }

        let mut pending = Some(Command::StartRound(bet));
        while let Some(command) = pending.take() {
            match game.apply(command) {
                Ok(events) => render(&events),
                Err(err) => println!("{}", colorize(&err.to_string(), "33")),
            }

            pending = match game.state() {
                GameState::Insurance => Some(prompt_insurance(game.insurance_cost())),
                GameState::PlayerTurn => {
                    print_table(&game.snapshot());
                    match prompt_action() {
                        Some(command) => Some(command),
                        None => return Ok(()),
                    }
                }
                _ => None,
            };
        }
    }

    Ok(())
}

fn render(events: &[Event]) {
    for event in events {
        match event {
            Event::CardDealt {
                seat: Seat::Dealer,
                card,
                snapshot,
            } if snapshot.state == GameState::DealerTurn => {
                println!("Dealer draws {}", format_card(card));
            }
            Event::InsuranceOffered(snapshot) => {
                print_table(snapshot);
                println!("Dealer shows an Ace. Insurance offered.");
            }
            Event::HandAdvanced { snapshot, .. } | Event::SplitOccurred(snapshot) => {
                print_table(snapshot);
            }
            Event::DealerTurnFinished(snapshot) => {
                println!("Dealer: {}", format_dealer(&snapshot.dealer));
            }
            Event::RoundOver(result) => {
                println!("\n{}", colorize(result.headline(), "1"));
                print!("{}", result.details());
                println!(
                    "Dealer {} | payout ${} | balance ${}\n",
                    result.dealer_value, result.total_payout, result.balance
                );
            }
            Event::Message(text) => println!("{text}"),
            Event::SaveFailed { reason } => {
                println!("{}", colorize(&format!("Could not save stats: {reason}"), "31"));
            }
            Event::CardDealt { .. } | Event::RoundStarted(_) => {}
        }
    }
}

fn prompt_insurance(cost: usize) -> Command {
    match prompt_line(&format!("Take insurance for ${cost}? (y/n): ")).as_str() {
        "y" | "yes" => Command::AcceptInsurance,
        _ => Command::DeclineInsurance,
    }
}

fn prompt_action() -> Option<Command> {
    loop {
        let action = prompt_line("Action [h]it [s]tand [d]ouble s[p]lit: ");
        return Some(match action.as_str() {
            "h" | "hit" => Command::Hit,
            "s" | "stand" => Command::Stand,
            "d" | "double" => Command::DoubleDown,
            "p" | "split" => Command::Split,
            "q" | "quit" => return None,
            _ => {
                println!("Unknown action.");
                continue;
            }
        });
    }
}

fn prompt_line(prompt: &str) -> String {
    print!("{prompt}");
    let _ = io::stdout().flush();

    let mut input = String::new();
    if io::stdin().read_line(&mut input).is_err() {
        return String::new();
    }
    input.trim().to_lowercase()
}

fn prompt_usize(prompt: &str) -> Option<usize> {
    loop {
        let input = prompt_line(prompt);
        if input == "q" || input == "quit" {
            return None;
        }
        match input.parse::<usize>() {
            Ok(value) => return Some(value),
            Err(_) => println!("Please enter a number."),
        }
    }
}

fn print_table(snapshot: &TableSnapshot) {
    println!(
        "\nDealer: {} (value {})",
        format_dealer(&snapshot.dealer),
        snapshot.dealer.visible_value()
    );

    for (index, hand) in snapshot.hands.iter().enumerate() {
        let marker = if index == snapshot.active_hand_index { "*" } else { " " };
        println!(
            "{} Hand {}: {} | value {} | bet {}",
            marker,
            index + 1,
            format_hand(hand),
            hand.value(),
            hand.bet()
        );
    }
    println!(
        "Balance ${} | on the table ${}\n",
        snapshot.balance, snapshot.total_bet
    );
}

fn colorize(text: &str, code: &str) -> String {
    format!("\u{1b}[{code}m{text}\u{1b}[0m")
}

fn format_dealer(dealer: &DealerHand) -> String {
    if dealer.is_empty() {
        return "(no cards)".to_string();
    }

    let mut parts: Vec<String> = dealer.visible_cards().iter().map(format_card).collect();
    if !dealer.is_hole_revealed() {
        parts.insert(0, "??".to_string());
    }
    parts.join(" ")
}

fn format_hand(hand: &Hand) -> String {
    if hand.is_empty() {
        return "(empty)".to_string();
    }
    hand.cards()
        .iter()
        .map(format_card)
        .collect::<Vec<_>>()
        .join(" ")
}

fn format_card(card: &Card) -> String {
    let color_code = match card.suit {
        Suit::Hearts | Suit::Diamonds => "31",
        Suit::Clubs => "32",
        Suit::Spades => "34",
    };
    colorize(&card.short(), color_code)
}
