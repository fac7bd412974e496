//! CLI spider example.

#![allow(clippy::missing_docs_in_private_items)]

use std::io::{self, Write};
use std::time::{SystemTime, UNIX_EPOCH};

use solrs::{Card, GameOptions, GameState, Pile, PileId, Suit, SuitSet};

fn main() {
    env_logger::init();
    println!("Spider CLI example (type 'q' to quit)");

    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs();

    let suits = match prompt_line("Suits (1, 2 or 4): ").as_str() {
        "1" => SuitSet::One,
        "2" => SuitSet::Two,
        _ => SuitSet::Four,
    };

    let mut game = match GameState::new(GameOptions::spider(suits), seed) {
        Ok(game) => game,
        Err(err) => {
            println!("Setup error: {err}");
            return;
        }
    };

    loop {
        print_table(&game);

        if game.is_won() {
            println!("All runs complete. You win!");
            break;
        }

        println!("{}", format_commands());
        let input = prompt_line("Command: ");
        let words: Vec<&str> = input.split_whitespace().collect();

        match words.as_slice() {
            ["d" | "deal"] => match game.try_deal_next_set() {
                Ok(left) => println!("Dealt a row, {left} left in stock."),
                Err(err) => println!("Deal error: {err}"),
            },
            ["m" | "move", from, index, to] => {
                let Some((from, index, to)) = parse_move(from, index, to) else {
                    println!("Usage: m <from pile> <card> <to pile>");
                    continue;
                };
                match game.move_cards(PileId::Tableau(from), index, PileId::Tableau(to)) {
                    Ok(moved) => println!("Moved {moved} card(s)."),
                    Err(err) => println!("Move error: {err}"),
                }
            }
            ["n" | "new"] => {
                game.redeal();
                println!("New game dealt.");
            }
            ["q" | "quit"] => {
                println!("Goodbye.");
                break;
            }
            _ => println!("Unknown command."),
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

fn parse_move(from: &str, index: &str, to: &str) -> Option<(usize, usize, usize)> {
    Some((from.parse().ok()?, index.parse().ok()?, to.parse().ok()?))
}

fn print_table(game: &GameState) {
    println!(
        "\nStock: {} deal(s) left | Completed runs: {}",
        game.stock_remaining(),
        game.completed_runs()
    );

    for (index, pile) in game.tableau.iter().enumerate() {
        println!("{index:>2}: {}", format_pile(pile));
    }
    println!();
}

fn format_commands() -> String {
    let parts = [
        format_command("move <from> <card> <to>", "m"),
        format_command("deal", "d"),
        format_command("new", "n"),
        format_command("quit", "q"),
    ];
    format!("Commands: {}", parts.join(" "))
}

fn format_command(label: &str, key: &str) -> String {
    colorize(&format!("[{key}]{label}"), "32")
}

fn colorize(text: &str, code: &str) -> String {
    format!("\u{1b}[{code}m{text}\u{1b}[0m")
}

fn format_pile(pile: &Pile) -> String {
    if pile.is_empty() {
        return "(empty)".to_string();
    }
    pile.cards()
        .iter()
        .map(format_card)
        .collect::<Vec<_>>()
        .join(" ")
}

fn format_card(card: &Card) -> String {
    if !card.is_face_up() {
        return colorize("##", "90");
    }

    let (suit, color_code) = match card.suit {
        Suit::Hearts => ("H", "31"),
        Suit::Diamonds => ("D", "31"),
        Suit::Clubs => ("C", "32"),
        Suit::Spades => ("S", "34"),
    };

    let rank = match card.rank {
        1 => "A".to_string(),
        11 => "J".to_string(),
        12 => "Q".to_string(),
        13 => "K".to_string(),
        _ => card.rank.to_string(),
    };

    colorize(&format!("{rank}{suit}"), color_code)
}
