//! Terminal RPN Calculator
//!
//! A line-oriented front end over the engine. Each line is split on
//! whitespace; every word becomes one or more commands:
//!
//! - a number such as `12.5` is typed and committed
//! - `+ - * /` (or `× ÷ −`) apply an operator
//! - `dup`, `drop`, `swap`, `clear` manipulate the stack
//! - `quit` exits
//!
//! Operator results are previewed before they are committed, the way a
//! graphical keypad would reveal them.
//!
//! Run with: cargo run --example repl -- --precision 4
//! Set RUST_LOG=debug to see every dispatched command.

use clap::Parser;
use rpn_engine::core::{Command, EngineState, Operator};
use rpn_engine::display::{format_stack, preview, DisplayOptions};
use rpn_engine::session::Session;
use std::io::{self, BufRead, Write};

#[derive(Parser)]
#[command(name = "repl")]
#[command(about = "Interactive RPN stack calculator")]
struct Cli {
    /// Maximum fractional digits shown for non-integer values
    #[arg(long, default_value_t = 4)]
    precision: u32,
}

enum Word {
    Commands(Vec<Command>),
    Quit,
    Unknown,
}

fn parse_word(word: &str) -> Word {
    if let Ok(op) = word.parse::<Operator>() {
        return Word::Commands(vec![Command::Apply(op)]);
    }
    match word.to_ascii_lowercase().as_str() {
        "dup" => Word::Commands(vec![Command::Duplicate]),
        "drop" => Word::Commands(vec![Command::Drop]),
        "swap" => Word::Commands(vec![Command::Swap]),
        "clear" => Word::Commands(vec![Command::Clear]),
        "quit" | "exit" => Word::Quit,
        _ if word.starts_with(|c: char| c.is_ascii_digit() || matches!(c, '.' | '-' | '+')) => {
            Word::Commands(vec![Command::append(word), Command::Commit])
        }
        _ => Word::Unknown,
    }
}

fn render(state: &EngineState, options: &DisplayOptions) -> String {
    let values = format_stack(state, options);
    let stack = if values.is_empty() {
        "Empty".to_string()
    } else {
        values.join("  ")
    };
    match state.error() {
        Some(error) => format!("[{stack}]  ! {error}"),
        None => format!("[{stack}]"),
    }
}

fn main() -> io::Result<()> {
    env_logger::init();
    let cli = Cli::parse();
    let options = DisplayOptions {
        max_decimals: cli.precision,
    };

    println!("=== RPN Stack Calculator ===");
    println!("Top of the stack is shown first.\n");

    let mut session = Session::new();
    let stdin = io::stdin();
    let mut stdout = io::stdout();

    print!("> ");
    stdout.flush()?;
    for line in stdin.lock().lines() {
        let line = line?;
        for word in line.split_whitespace() {
            match parse_word(word) {
                Word::Quit => return Ok(()),
                Word::Unknown => println!("  unknown word: {word}"),
                Word::Commands(commands) => {
                    for command in commands {
                        if let Command::Apply(op) = &command {
                            if let Some(pending) = preview(session.state(), *op) {
                                println!("  {}", pending.render(&options));
                            }
                        }
                        session.dispatch(&command);
                    }
                }
            }
        }
        println!("{}", render(session.state(), &options));
        print!("> ");
        stdout.flush()?;
    }

    Ok(())
}
