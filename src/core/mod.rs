//! Core domain types for Wordle
//!
//! Pure, dependency-light types: validated words and the per-letter feedback
//! produced when a guess is scored against a secret.

mod feedback;
mod word;

pub use feedback::{Feedback, LetterState};
pub use word::{WORD_LEN, Word, WordError};
