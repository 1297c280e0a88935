//! Simple interactive CLI mode
//!
//! Line-based play without the TUI: one guess per line, colon commands for
//! everything else.

use crate::config::GameConfig;
use crate::core::{WORD_LEN, Word};
use crate::game::{Game, GameError, InputEvent, MAX_ATTEMPTS};
use crate::output::formatters::{error_message, hints_label, result_message};
use crate::output::{print_guess_row, print_keyboard, print_stats};
use crate::stats::{KeyValueStore, StatsTracker};
use crate::wordlists::WordBank;
use anyhow::Result;
use colored::Colorize;
use std::io::{self, Write};

/// Run the simple interactive CLI mode
///
/// # Errors
///
/// Returns an error if reading from stdin or writing to stdout fails.
pub fn run_simple<S: KeyValueStore>(
    bank: &WordBank,
    config: GameConfig,
    stats: StatsTracker<S>,
) -> Result<()> {
    println!("\n╔══════════════════════════════════════════════════════════════╗");
    println!("║                       Wordle - Text Mode                     ║");
    println!("╚══════════════════════════════════════════════════════════════╝\n");

    println!("Guess the {WORD_LEN}-letter word in {MAX_ATTEMPTS} tries.");
    println!("Commands: ':hint' reveal a letter, ':new' new game, ':stats' statistics, ':quit' exit\n");

    let mut game = Game::new(bank, config, stats);

    loop {
        let session = game.session();
        if session.is_over() {
            match get_user_input("Play again? (yes/no)")?.to_lowercase().as_str() {
                "yes" | "y" => {
                    game.new_game();
                    println!("\n🔄 New game started!\n");
                    continue;
                }
                _ => break,
            }
        }

        let prompt = format!(
            "Guess {}/{MAX_ATTEMPTS} [{}] ({})",
            session.cursor().row + 1,
            session.grid().row_text(session.cursor().row).to_uppercase(),
            hints_label(session.hints_remaining())
        );
        let Some(input) = read_line(&prompt)? else {
            break;
        };

        match input.to_lowercase().as_str() {
            "" => {}
            ":quit" | ":q" => break,
            ":new" | ":n" => {
                game.new_game();
                println!("\n🔄 New game started!\n");
            }
            ":stats" | ":s" => {
                print_stats(game.stats().stats(), &game.stats().distribution_bars());
            }
            ":hint" | ":h" => match game.use_hint() {
                Ok(col) => {
                    let session = game.session();
                    let row = session.cursor().row;
                    let letter = session.grid().cell(row, col).letter().unwrap_or('?');
                    println!(
                        "💡 Position {} is {}\n",
                        col + 1,
                        letter.to_ascii_uppercase().to_string().bright_green().bold()
                    );
                }
                Err(e) => println!("{}\n", error_message(&e).yellow()),
            },
            guess if guess.starts_with(':') => {
                println!("{}\n", format!("Unknown command {guess}").yellow());
            }
            guess => play_guess(&mut game, guess),
        }
    }

    println!("\n👋 Thanks for playing!\n");
    Ok(())
}

/// Type `guess` into the current row and submit it
///
/// Hinted cells keep their letter; the guess's letter at those positions is
/// ignored.
fn play_guess<S: KeyValueStore>(game: &mut Game<'_, S>, guess: &str) {
    let word = match Word::new(guess) {
        Ok(word) => word,
        Err(e) => {
            println!("{}\n", format!("❌ {e}").red());
            return;
        }
    };

    if let Err(e) = enter_word(game, &word).and_then(|()| game.submit_row()) {
        println!("{}\n", format!("❌ {}", error_message(&e)).red());
        return;
    }

    let session = game.session();
    println!();
    for (i, (word, feedback)) in session.guesses().iter().enumerate() {
        print_guess_row(i + 1, word, feedback);
    }
    println!();
    print_keyboard(session.keyboard());
    println!();

    if let Some(result) = session.result() {
        let message = result_message(&result);
        if result.won {
            println!("🎉 {}\n", message.bright_green().bold());
        } else {
            println!("{}\n", message.bright_red().bold());
        }
        print_stats(game.stats().stats(), &game.stats().distribution_bars());
    }
}

fn enter_word<S: KeyValueStore>(game: &mut Game<'_, S>, word: &Word) -> Result<(), GameError> {
    while game.handle(InputEvent::Backspace).is_ok() {}

    for (col, ch) in word.text().chars().enumerate() {
        if game.session().cursor().col == col {
            game.handle(InputEvent::Letter(ch))?;
        }
    }
    Ok(())
}

/// Read one trimmed line; `None` at end of input
fn read_line(prompt: &str) -> Result<Option<String>> {
    print!("{prompt}: ");
    io::stdout().flush()?;

    let mut input = String::new();
    if io::stdin().read_line(&mut input)? == 0 {
        return Ok(None);
    }
    Ok(Some(input.trim().to_string()))
}

/// Get user input with a prompt, treating end of input as an empty answer
fn get_user_input(prompt: &str) -> Result<String> {
    Ok(read_line(prompt)?.unwrap_or_default())
}
