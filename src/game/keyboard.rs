//! Best-known state of each letter across submitted rows

use crate::core::{Feedback, LetterState, Word};

/// Per-letter summary used to color an on-screen keyboard
///
/// A letter only ever moves up `Absent → Present → Correct`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct KeyboardState {
    letters: [Option<LetterState>; 26],
}

impl KeyboardState {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Merge one submitted row into the summary
    pub fn record(&mut self, guess: &Word, feedback: &Feedback) {
        for (&letter, &state) in guess.chars().iter().zip(feedback.states()) {
            let slot = &mut self.letters[usize::from(letter - b'a')];
            *slot = Some(slot.map_or(state, |known| known.max(state)));
        }
    }

    /// Known state of `letter` (case-insensitive); `None` if never guessed
    #[must_use]
    pub fn get(&self, letter: char) -> Option<LetterState> {
        let letter = letter.to_ascii_lowercase();
        if letter.is_ascii_lowercase() {
            self.letters[(letter as u8 - b'a') as usize]
        } else {
            None
        }
    }

    /// Iterate `(letter, state)` for every guessed letter
    pub fn iter(&self) -> impl Iterator<Item = (char, LetterState)> + '_ {
        self.letters
            .iter()
            .zip('a'..='z')
            .filter_map(|(state, letter)| state.map(|s| (letter, s)))
    }
}
