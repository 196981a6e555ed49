//! CLI blackjack demo.
//!
//! This is the presentation side of the engine: it renders hands, reads
//! commands, and paces the dealer's reveal with a real clock. The engine
//! itself never sleeps.

#![allow(clippy::missing_docs_in_private_items)]

use std::io::{self, Write};
use std::thread;
use std::time::{Duration, SystemTime, UNIX_EPOCH};

use twentyone::{Card, DealerHand, DealerStep, Game, Hand, RoundState, Suit};

const STARTING_MONEY: usize = 100;
const DEALER_PACE: Duration = Duration::from_millis(600);

fn main() {
    env_logger::init();

    println!("Blackjack (type 'q' to quit)");

    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs();
    let mut game = Game::new(STARTING_MONEY, seed);

    loop {
        match game.state() {
            RoundState::AwaitingBet => {
                let money = game.money();
                let Some(bet) = prompt_usize(&format!("Bet amount (1-{money}, 0 to quit): "))
                else {
                    return;
                };
                if bet == 0 {
                    println!("Goodbye.");
                    return;
                }
                if let Err(err) = game.place_bet(bet) {
                    println!("Bet error: {err}");
                    continue;
                }
                if let Err(err) = game.start_round() {
                    println!("Deal error: {err}");
                }
            }
            RoundState::PlayerTurn => {
                print_table(&game);
                match prompt_line("Action ([h]it / [s]tand / [q]uit): ").as_str() {
                    "h" | "hit" => {
                        if let Err(err) = game.hit() {
                            println!("Action error: {err}");
                        }
                    }
                    "s" | "stand" => {
                        if let Err(err) = game.stand() {
                            println!("Action error: {err}");
                        }
                    }
                    "q" | "quit" => return,
                    _ => println!("Unknown action."),
                }
            }
            RoundState::DealerTurn => {
                // One step per tick so each card can be seen landing.
                match game.dealer_step() {
                    Ok(DealerStep::Reveal(card)) => {
                        println!("Dealer reveals {}.", format_card(&card));
                    }
                    Ok(DealerStep::Draw(card)) => {
                        println!("Dealer draws {}.", format_card(&card));
                    }
                    Ok(DealerStep::Stand) => continue,
                    Err(err) => {
                        println!("Dealer error: {err}");
                        return;
                    }
                }
                thread::sleep(DEALER_PACE);
            }
            RoundState::RoundResolved => {
                print_table(&game);
                if let Some(result) = game.result() {
                    println!(
                        "Round over: {:?} (payout {}), money {}",
                        result.outcome,
                        result.payout,
                        game.money()
                    );
                }
                if let Err(err) = game.next_round() {
                    println!("Round error: {err}");
                    return;
                }
            }
            RoundState::BankruptTerminal => {
                println!("You are out of money. Game over.");
                return;
            }
            RoundState::Dealing => unreachable!("dealing completes inside start_round"),
        }
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

fn print_table(game: &Game) {
    println!("\nDeck: {} cards remaining", game.cards_remaining());
    println!(
        "Dealer: {} (value {})",
        format_dealer(game.dealer_hand()),
        game.dealer_visible_value()
    );
    println!(
        "You:    {} (value {}) | bet {} | money {}",
        format_hand(game.player_hand()),
        game.player_value(),
        game.bet(),
        game.money()
    );
    println!();
}

fn format_dealer(dealer: &DealerHand) -> String {
    if dealer.cards().is_empty() {
        return "(no cards)".to_string();
    }

    if dealer.is_hole_revealed() {
        dealer
            .cards()
            .iter()
            .map(format_card)
            .collect::<Vec<_>>()
            .join(" ")
    } else {
        let mut parts = Vec::new();
        if let Some(card) = dealer.up_card() {
            parts.push(format_card(card));
        }
        if dealer.len() > 1 {
            parts.push("??".to_string());
        }
        parts.join(" ")
    }
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
    let (suit, color_code) = match card.suit {
        Suit::Hearts => ("H", "31"),
        Suit::Diamonds => ("D", "31"),
        Suit::Clubs => ("C", "32"),
        Suit::Spades => ("S", "34"),
    };

    let (rank, is_face) = match card.rank {
        1 => ("A".to_string(), true),
        11 => ("J".to_string(), true),
        12 => ("Q".to_string(), true),
        13 => ("K".to_string(), true),
        _ => (card.rank.to_string(), false),
    };

    let colored_rank = if is_face {
        colorize(&rank, color_code)
    } else {
        rank
    };
    let colored_suit = colorize(suit, color_code);
    format!("{colored_rank}{colored_suit}")
}

fn colorize(text: &str, code: &str) -> String {
    format!("\u{1b}[{code}m{text}\u{1b}[0m")
}
