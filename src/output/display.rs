//! Colored printing for the text mode and the `stats` command

use super::formatters::{KEYBOARD_ROWS, progress_bar};
use crate::core::{Feedback, LetterState, Word};
use crate::game::KeyboardState;
use crate::stats::{DistributionBar, GameStats};
use colored::{ColoredString, Colorize};

fn tile(letter: char, state: Option<LetterState>) -> ColoredString {
    let text = format!(" {} ", letter.to_ascii_uppercase());
    match state {
        Some(LetterState::Correct) => text.black().on_green().bold(),
        Some(LetterState::Present) => text.black().on_yellow().bold(),
        Some(LetterState::Absent) => text.white().on_bright_black(),
        None => text.bright_white(),
    }
}

/// Print a scored guess as colored tiles
pub fn print_guess_row(turn: usize, guess: &Word, feedback: &Feedback) {
    let tiles: String = guess
        .text()
        .chars()
        .zip(feedback.states())
        .map(|(letter, &state)| tile(letter, Some(state)).to_string())
        .collect();
    println!("  {} {tiles}", format!("{turn}.").bright_black());
}

/// Print the keyboard with the best-known state of each letter
pub fn print_keyboard(keyboard: &KeyboardState) {
    for (indent, row) in KEYBOARD_ROWS.iter().enumerate() {
        let keys: String = row
            .chars()
            .map(|letter| tile(letter, keyboard.get(letter)).to_string())
            .collect();
        println!("  {}{keys}", " ".repeat(indent * 2));
    }
}

/// Print the statistics summary and guess distribution
pub fn print_stats(stats: &GameStats, bars: &[DistributionBar]) {
    println!("\n{}", "═".repeat(44).cyan());
    println!(" {} ", "STATISTICS".bright_cyan().bold());
    println!("{}", "═".repeat(44).cyan());

    println!(
        "\n  {:>6}  {:>6}  {:>6}  {:>6}",
        stats.games_played.to_string().bright_yellow().bold(),
        stats.win_percentage().to_string().bright_yellow().bold(),
        stats.current_streak.to_string().bright_yellow().bold(),
        stats.max_streak.to_string().bright_yellow().bold()
    );
    println!("  {:>6}  {:>6}  {:>6}  {:>6}", "Played", "Win %", "Streak", "Max");

    println!("\n  {}", "Guess distribution:".bright_cyan().bold());
    for bar in bars {
        let fill = progress_bar(bar.percent, 30);
        let fill = if bar.highlighted {
            fill.green()
        } else {
            fill.bright_black()
        };
        println!("   {}: {fill} {}", bar.attempts, bar.count);
    }
    println!();
}
