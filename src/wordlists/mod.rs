//! Word lists and the word bank
//!
//! Embedded lists are compiled into the binary; [`WordBank`] wraps them (or
//! lists loaded from files) behind membership and random-secret queries.

mod bank;
mod embedded;
pub mod loader;

pub use bank::{WordBank, WordBankError};
pub use embedded::{ALLOWED, ALLOWED_COUNT, ANSWERS, ANSWERS_COUNT};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn answers_count_matches_const() {
        assert_eq!(ANSWERS.len(), ANSWERS_COUNT);
    }

    #[test]
    fn allowed_count_matches_const() {
        assert_eq!(ALLOWED.len(), ALLOWED_COUNT);
    }

    #[test]
    fn embedded_words_are_valid() {
        for &word in ANSWERS.iter().chain(ALLOWED) {
            assert_eq!(word.len(), 5, "Word '{word}' is not 5 letters");
            assert!(
                word.chars().all(|c| c.is_ascii_lowercase()),
                "Word '{word}' contains non-lowercase chars"
            );
        }
    }

    #[test]
    fn allowed_and_answers_are_disjoint() {
        // Guess-only words must not leak into the secret list
        let answers: std::collections::HashSet<_> = ANSWERS.iter().collect();
        assert!(ALLOWED.iter().all(|w| !answers.contains(w)));
        assert!(ALLOWED_COUNT > 0);
    }
}
