//! Formatting utilities for terminal output

use crate::game::{GameError, GameResult};

/// Rows of the on-screen keyboard, QWERTY order
pub const KEYBOARD_ROWS: [&str; 3] = ["qwertyuiop", "asdfghjkl", "zxcvbnm"];

/// Create a bar `width` cells wide, filled to `percent`
#[must_use]
pub fn progress_bar(percent: u8, width: usize) -> String {
    let filled = (usize::from(percent.min(100)) * width / 100).min(width);
    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// Short player-facing message for a rejected action
#[must_use]
pub fn error_message(error: &GameError) -> String {
    match error {
        GameError::InvalidWord(_) => "Not a valid word".to_string(),
        GameError::NoHintNeeded => "All letters are already correct!".to_string(),
        GameError::IllegalOperation(op) => {
            let text = op.to_string();
            let mut chars = text.chars();
            chars
                .next()
                .map(|first| first.to_uppercase().chain(chars).collect())
                .unwrap_or_default()
        }
    }
}

/// Message shown when a game ends
#[must_use]
pub fn result_message(result: &GameResult) -> String {
    if result.won {
        "Congratulations!".to_string()
    } else {
        format!("The word was: {}", result.secret.text().to_uppercase())
    }
}

/// Label for the remaining hint budget
#[must_use]
pub fn hints_label(remaining: u8) -> String {
    match remaining {
        0 => "No hints left".to_string(),
        1 => "1 hint left".to_string(),
        n => format!("{n} hints left"),
    }
}
