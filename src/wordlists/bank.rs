//! Guess validation and secret selection

use super::loader::{load_from_file, words_from_slice};
use super::{ALLOWED, ANSWERS};
use crate::core::{WORD_LEN, Word};
use rand::Rng;
use rustc_hash::FxHashSet;
use std::path::Path;

/// Errors building a word bank
#[derive(Debug, thiserror::Error)]
pub enum WordBankError {
    #[error("answer list is empty")]
    EmptyAnswers,

    #[error("failed to read word list {path}: {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },
}

/// Read-only dictionary for one or more games
///
/// Guesses are checked against the union of the allowed and answer lists, so
/// acceptance alone never reveals which words can be secrets.
#[derive(Debug, Clone)]
pub struct WordBank {
    valid: FxHashSet<[u8; WORD_LEN]>,
    answers: Vec<Word>,
}

impl WordBank {
    /// Create a word bank from guess-only words and secret words
    ///
    /// # Errors
    /// Returns `WordBankError::EmptyAnswers` if `answers` is empty.
    pub fn new(allowed: Vec<Word>, answers: Vec<Word>) -> Result<Self, WordBankError> {
        if answers.is_empty() {
            return Err(WordBankError::EmptyAnswers);
        }

        let mut valid: FxHashSet<[u8; WORD_LEN]> = answers.iter().map(|w| *w.chars()).collect();
        let answer_count = valid.len();
        valid.extend(allowed.iter().map(|w| *w.chars()));

        if valid.len() == answer_count {
            log::warn!(
                "allowed words add nothing beyond the {answer_count} answers; \
                 accepted guesses reveal the answer list"
            );
        }

        log::debug!(
            "word bank ready: {} valid guesses, {} answers",
            valid.len(),
            answers.len()
        );

        Ok(Self { valid, answers })
    }

    /// Word bank over the lists compiled into the binary
    ///
    /// # Errors
    /// Only fails if the embedded answer list is empty.
    pub fn embedded() -> Result<Self, WordBankError> {
        Self::new(words_from_slice(ALLOWED), words_from_slice(ANSWERS))
    }

    /// Load a word bank from newline-delimited files
    ///
    /// A missing `allowed` path means "answers only".
    ///
    /// # Errors
    /// Returns `WordBankError::Io` if a file cannot be read, or
    /// `WordBankError::EmptyAnswers` if the answers file has no valid words.
    pub fn from_files(allowed: Option<&Path>, answers: &Path) -> Result<Self, WordBankError> {
        let read = |path: &Path| {
            load_from_file(path).map_err(|source| WordBankError::Io {
                path: path.display().to_string(),
                source,
            })
        };

        let allowed = allowed.map(read).transpose()?.unwrap_or_default();
        Self::new(allowed, read(answers)?)
    }

    /// Check whether `word` may be submitted as a guess (case-insensitive)
    #[must_use]
    pub fn is_valid_guess(&self, word: &str) -> bool {
        Word::new(word).is_ok_and(|w| self.contains(&w))
    }

    /// Check membership of an already validated word
    #[inline]
    #[must_use]
    pub fn contains(&self, word: &Word) -> bool {
        self.valid.contains(word.chars())
    }

    /// Pick a secret uniformly at random from the answer list
    pub fn pick_secret<R: Rng + ?Sized>(&self, rng: &mut R) -> Word {
        let index = rng.random_range(0..self.answers.len());
        self.answers[index].clone()
    }

    #[must_use]
    pub fn answer_count(&self) -> usize {
        self.answers.len()
    }

    #[must_use]
    pub fn valid_count(&self) -> usize {
        self.valid.len()
    }
}
