//! Terminal output formatting
//!
//! Colored text rendering and player-facing messages shared by both play modes.

pub mod display;
pub mod formatters;

pub use display::{print_guess_row, print_keyboard, print_stats};
