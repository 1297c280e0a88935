//! The 6×5 letter grid and its edit cursor

use crate::core::{Feedback, LetterState, WORD_LEN, Word};

/// Number of attempts (rows) in a game
pub const MAX_ATTEMPTS: usize = 6;

/// One tile of the grid
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Cell {
    letter: Option<u8>,
    state: Option<LetterState>,
    pinned: bool,
}

impl Cell {
    /// Lowercase letter in this cell, if any
    #[inline]
    #[must_use]
    pub fn letter(&self) -> Option<char> {
        self.letter.map(char::from)
    }

    /// Classification, set once the row has been submitted
    #[inline]
    #[must_use]
    pub const fn state(&self) -> Option<LetterState> {
        self.state
    }

    /// Whether the letter was placed by a hint
    #[inline]
    #[must_use]
    pub const fn is_pinned(&self) -> bool {
        self.pinned
    }

    #[inline]
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.letter.is_none()
    }
}

/// Position of the next editable cell
///
/// `row == MAX_ATTEMPTS` only after a full board; `col == WORD_LEN` means the
/// current row is full.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Cursor {
    pub row: usize,
    pub col: usize,
}

/// Letters typed so far plus the classifications of submitted rows
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Grid {
    cells: [[Cell; WORD_LEN]; MAX_ATTEMPTS],
}

impl Grid {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    #[must_use]
    pub fn cell(&self, row: usize, col: usize) -> Cell {
        self.cells[row][col]
    }

    #[inline]
    #[must_use]
    pub fn row(&self, row: usize) -> &[Cell; WORD_LEN] {
        &self.cells[row]
    }

    pub fn rows(&self) -> impl Iterator<Item = &[Cell; WORD_LEN]> {
        self.cells.iter()
    }

    /// The row as a word, if every cell holds a letter
    #[must_use]
    pub fn row_word(&self, row: usize) -> Option<Word> {
        let mut letters = [0u8; WORD_LEN];
        for (slot, cell) in letters.iter_mut().zip(&self.cells[row]) {
            *slot = cell.letter?;
        }
        Word::from_letters(letters).ok()
    }

    /// The row's letters with `_` for empty cells
    #[must_use]
    pub fn row_text(&self, row: usize) -> String {
        self.cells[row]
            .iter()
            .map(|c| c.letter().unwrap_or('_'))
            .collect()
    }

    pub(crate) fn set_letter(&mut self, row: usize, col: usize, letter: u8) {
        self.cells[row][col].letter = Some(letter);
    }

    pub(crate) fn clear(&mut self, row: usize, col: usize) {
        self.cells[row][col] = Cell::default();
    }

    pub(crate) fn pin(&mut self, row: usize, col: usize, letter: u8) {
        let cell = &mut self.cells[row][col];
        cell.letter = Some(letter);
        cell.pinned = true;
    }

    pub(crate) fn reveal(&mut self, row: usize, feedback: &Feedback) {
        for (cell, &state) in self.cells[row].iter_mut().zip(feedback.states()) {
            cell.state = Some(state);
        }
    }
}
