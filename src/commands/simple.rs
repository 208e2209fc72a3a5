//! Simple interactive CLI mode
//!
//! Line-oriented play without the TUI. Items are picked by their 1-based
//! position in a slot's listing.

use crate::chain::Session;
use crate::core::{LetterSource, Slot};
use crate::output::formatters::format_slot_line;
use colored::Colorize;
use std::io::{self, Write};

/// A parsed line of input
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SimpleCommand {
    /// Select the items at these 1-based positions
    Select { slot: Slot, positions: Vec<usize> },
    /// Clear a slot's selection and everything downstream of it
    Clear(Slot),
    New,
    Show,
    Help,
    Quit,
}

/// Parse one input line
///
/// # Errors
///
/// Returns a message describing what was wrong with the line.
pub fn parse_command(line: &str) -> Result<SimpleCommand, String> {
    let mut words = line.split_whitespace();
    let Some(head) = words.next() else {
        return Err("Empty command".to_string());
    };

    match head.to_lowercase().as_str() {
        "quit" | "q" | "exit" => Ok(SimpleCommand::Quit),
        "new" | "n" => Ok(SimpleCommand::New),
        "show" | "s" => Ok(SimpleCommand::Show),
        "help" | "h" | "?" => Ok(SimpleCommand::Help),
        "clear" | "c" => {
            let slot = parse_slot(words.next())?;
            Ok(SimpleCommand::Clear(slot))
        }
        "sel" | "select" => {
            let slot = parse_slot(words.next())?;
            let positions = words
                .map(|w| match w.parse::<usize>() {
                    Ok(n) if n > 0 => Ok(n),
                    _ => Err(format!("Invalid position '{w}'")),
                })
                .collect::<Result<Vec<_>, _>>()?;
            if positions.is_empty() {
                return Err(format!("Give at least one position, e.g. 'sel {slot} 1'"));
            }
            Ok(SimpleCommand::Select { slot, positions })
        }
        other => Err(format!("Unknown command '{other}'")),
    }
}

fn parse_slot(word: Option<&str>) -> Result<Slot, String> {
    word.ok_or_else(|| "Missing slot (L1, L2, L3, R1, R2 or R3)".to_string())?
        .parse::<Slot>()
        .map_err(|e| e.to_string())
}

/// Whether the loop should keep reading input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

/// Apply a command to the session
///
/// # Errors
///
/// Returns a message if a position is out of range or the session rejects the
/// selection. The session is unchanged in that case.
pub fn execute<S: LetterSource>(
    session: &mut Session<S>,
    command: &SimpleCommand,
) -> Result<Flow, String> {
    match command {
        SimpleCommand::Quit => return Ok(Flow::Quit),
        SimpleCommand::Show | SimpleCommand::Help => {}
        SimpleCommand::New => session.reset(),
        SimpleCommand::Clear(slot) => {
            session
                .select(*slot, std::iter::empty::<&str>())
                .map_err(|e| e.to_string())?;
        }
        SimpleCommand::Select { slot, positions } => {
            let candidates = session.candidates(*slot);
            let items = positions
                .iter()
                .map(|&p| {
                    candidates
                        .get(p - 1)
                        .map(str::to_string)
                        .ok_or_else(|| format!("{slot} has no item {p}"))
                })
                .collect::<Result<Vec<_>, _>>()?;
            session.select(*slot, &items).map_err(|e| e.to_string())?;
        }
    }
    Ok(Flow::Continue)
}

/// Run the simple interactive CLI mode
///
/// # Errors
///
/// Returns an error if there's an I/O error reading user input.
pub fn run_simple<S: LetterSource>(session: &mut Session<S>) -> Result<(), String> {
    println!("\n╔══════════════════════════════════════════════════════════════╗");
    println!("║                 The Wiki Game - Simple Mode                  ║");
    println!("╚══════════════════════════════════════════════════════════════╝\n");
    print_help();
    print_board(session);

    loop {
        let Some(line) = get_user_input("Command")? else {
            println!("\n👋 Thanks for playing!\n");
            return Ok(());
        };
        if line.is_empty() {
            continue;
        }

        let command = match parse_command(&line) {
            Ok(command) => command,
            Err(e) => {
                println!("{}\n", format!("❌ {e}").red());
                continue;
            }
        };

        let was_matched = session.match_result().cloned();
        match execute(session, &command) {
            Ok(Flow::Quit) => {
                println!("\n👋 Thanks for playing!\n");
                return Ok(());
            }
            Ok(Flow::Continue) => {
                if command == SimpleCommand::Help {
                    print_help();
                    continue;
                }
                if command == SimpleCommand::New {
                    println!("\n🔄 New challenge started!\n");
                }
                print_board(session);
                if let Some(result) = session.match_result()
                    && was_matched.as_ref() != Some(result)
                {
                    print_match(&result.render());
                }
            }
            Err(e) => println!("{}\n", format!("❌ {e}").red()),
        }
    }
}

fn print_help() {
    println!("Grow a chain from the Start letter (L1 → L3) and one from the End");
    println!("letter (R3 → R1). The game is won when L3 and R1 share a string.\n");
    println!("Commands:");
    println!("  sel <slot> <i> [<j> ...]   select items by position, e.g. 'sel L1 2'");
    println!("  clear <slot>               clear a selection and everything after it");
    println!("  show                       print the board");
    println!("  new                        start a new challenge");
    println!("  quit                       exit\n");
}

fn print_board<S>(session: &Session<S>) {
    println!("{}", "─".repeat(60).cyan());
    println!(
        "Start: {}   End: {}",
        session.start().to_string().bright_yellow().bold(),
        session.end().to_string().bright_yellow().bold()
    );
    println!("{}", "─".repeat(60).cyan());
    for slot in Slot::ALL {
        println!(
            "{}",
            format_slot_line(slot, session.candidates(slot), session.selected(slot))
        );
    }
    println!();
}

fn print_match(chain: &str) {
    println!("{}", "═".repeat(60).bright_cyan());
    println!("{}", "    🎉  T H E   C H A I N S   M E T !  🎉".bright_green().bold());
    println!("{}", "═".repeat(60).bright_cyan());
    println!("\n  {}\n", chain.bright_white().bold());
}

/// Get user input with a prompt; `None` at end of input
fn get_user_input(prompt: &str) -> Result<Option<String>, String> {
    print!("{prompt}: ");
    io::stdout().flush().map_err(|e| e.to_string())?;

    let mut input = String::new();
    let read = io::stdin()
        .read_line(&mut input)
        .map_err(|e| e.to_string())?;

    if read == 0 {
        return Ok(None);
    }
    Ok(Some(input.trim().to_string()))
}
