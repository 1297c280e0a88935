//! Session change notifications
//!
//! Presentation code subscribes an observer to a session instead of polling
//! it after every keystroke.

use super::GameResult;
use crate::core::Feedback;

/// Something that changed inside a session
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionEvent {
    LetterEntered { row: usize, col: usize, letter: char },
    LetterDeleted { row: usize, col: usize },
    WordRejected { row: usize, word: String },
    RowRevealed { row: usize, feedback: Feedback },
    HintUsed {
        row: usize,
        col: usize,
        letter: char,
        remaining: u8,
    },
    GameOver(GameResult),
    Restarted,
}

/// Receives session events synchronously, in order
pub trait SessionObserver {
    fn on_event(&mut self, event: &SessionEvent);
}

impl<F: FnMut(&SessionEvent)> SessionObserver for F {
    fn on_event(&mut self, event: &SessionEvent) {
        self(event);
    }
}
