//! Console blackjack built on the round engine.
//!
//! Supplies stdin-backed decisions and a stdout display sink, then hands
//! control to [`Game::run`].

#![allow(clippy::missing_docs_in_private_items)]

use std::io::{self, Write};
use std::time::{SystemTime, UNIX_EPOCH};

use pontoon::{DecisionSource, DisplaySink, Game, GameOptions, Prompt, TableEvent};

struct StdinDecisions;

impl DecisionSource for StdinDecisions {
    fn bet_amount(&mut self, money: usize) -> usize {
        prompt_amount(&format!("You have ${money}. Bet amount: "))
    }

    fn confirm(&mut self, prompt: Prompt) -> bool {
        let question = match prompt {
            Prompt::Split => "Would you like to split your hand?",
            Prompt::DoubleDown => "Would you like to double down?",
            Prompt::Hit => "Would you like to hit?",
            Prompt::Stand => "Would you like to stand?",
            Prompt::PlayAgain => "Would you like to play another hand?",
        };
        prompt_yes_no(question)
    }
}

struct StdoutSink;

impl DisplaySink for StdoutSink {
    fn show(&mut self, event: TableEvent) {
        println!("{event}");
    }
}

fn main() {
    println!("Welcome to Blackjack!");

    print!("What is your name? ");
    let _ = io::stdout().flush();
    let mut name = read_line();
    if name.is_empty() {
        name = "Alex".to_string();
    }

    let mut buy_in = prompt_amount("How much would you like to buy in? ");
    if buy_in == 0 {
        buy_in = 1000;
    }

    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs();

    let mut game = Game::new(GameOptions::default(), &name, buy_in, seed);
    game.run(&mut StdinDecisions, &mut StdoutSink);

    println!(
        "Thanks for playing, {}! You leave with ${}.",
        game.player.name(),
        game.player.money()
    );
}

fn read_line() -> String {
    let mut input = String::new();
    if io::stdin().read_line(&mut input).is_err() {
        return String::new();
    }
    input.trim().to_string()
}

fn prompt_amount(prompt: &str) -> usize {
    loop {
        print!("{prompt}");
        let _ = io::stdout().flush();
        match read_line().parse::<usize>() {
            Ok(value) => return value,
            Err(_) => println!("Please enter a whole number."),
        }
    }
}

fn prompt_yes_no(question: &str) -> bool {
    loop {
        print!("{question} (y/n): ");
        let _ = io::stdout().flush();
        match read_line().to_lowercase().as_str() {
            "y" | "yes" => return true,
            "n" | "no" => return false,
            _ => println!("Please answer y or n."),
        }
    }
}
