//! One play-through: grid, cursor, hints and outcome
//!
//! Hinted cells are pinned for the rest of their row. The cursor never rests
//! on a pinned cell, so `cursor.col == WORD_LEN` exactly when every cell of
//! the current row holds a letter, whether typed or hinted.

use super::error::{GameError, IllegalOperation};
use super::events::{SessionEvent, SessionObserver};
use super::grid::{Cursor, Grid, MAX_ATTEMPTS};
use super::keyboard::KeyboardState;
use crate::core::{Feedback, WORD_LEN, Word};
use crate::wordlists::WordBank;
use rand::Rng;

/// Hints available per game unless configured otherwise
pub const DEFAULT_MAX_HINTS: u8 = 2;

/// Where a session is in its turn cycle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    /// Accepting letters for the current row
    Entering,
    /// Scoring a submitted row; never visible between calls
    Evaluating,
    Won,
    Lost,
}

impl SessionState {
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        matches!(self, Self::Won | Self::Lost)
    }
}

/// Final outcome of a finished session
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameResult {
    pub won: bool,
    /// Rows used, 1..=6
    pub attempts_used: u8,
    pub secret: Word,
}

/// Outcome of a successful row submission
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Submission {
    pub row: usize,
    pub feedback: Feedback,
    /// Present when this row ended the game
    pub result: Option<GameResult>,
}

/// State machine for a single game
pub struct GameSession<'a> {
    bank: &'a WordBank,
    secret: Word,
    grid: Grid,
    cursor: Cursor,
    max_hints: u8,
    hints_remaining: u8,
    state: SessionState,
    guesses: Vec<(Word, Feedback)>,
    keyboard: KeyboardState,
    observers: Vec<Box<dyn SessionObserver + 'a>>,
}

impl<'a> GameSession<'a> {
    /// Start a session with a random secret from `bank`
    pub fn new<R: Rng + ?Sized>(bank: &'a WordBank, max_hints: u8, rng: &mut R) -> Self {
        let secret = bank.pick_secret(rng);
        Self::with_secret(bank, secret, max_hints)
    }

    /// Start a session with a chosen secret
    ///
    /// The secret does not have to be in the bank's answer list.
    #[must_use]
    pub fn with_secret(bank: &'a WordBank, secret: Word, max_hints: u8) -> Self {
        log::info!("new game started ({max_hints} hints)");
        Self {
            bank,
            secret,
            grid: Grid::new(),
            cursor: Cursor::default(),
            max_hints,
            hints_remaining: max_hints,
            state: SessionState::Entering,
            guesses: Vec::new(),
            keyboard: KeyboardState::new(),
            observers: Vec::new(),
        }
    }

    /// Register an observer; it stays attached across restarts
    pub fn subscribe(&mut self, observer: impl SessionObserver + 'a) {
        self.observers.push(Box::new(observer));
    }

    /// Type a letter into the cursor cell
    ///
    /// # Errors
    /// `IllegalOperation` if the game is over, the row is full, or `ch` is not
    /// an ASCII letter.
    pub fn enter_letter(&mut self, ch: char) -> Result<(), GameError> {
        self.ensure_active()?;
        if !ch.is_ascii_alphabetic() {
            return Err(IllegalOperation::NotALetter(ch).into());
        }
        if self.cursor.col >= WORD_LEN {
            return Err(IllegalOperation::RowFull.into());
        }

        let Cursor { row, col } = self.cursor;
        let letter = ch.to_ascii_lowercase();
        self.grid.set_letter(row, col, letter as u8);
        self.cursor.col += 1;
        self.skip_pinned();

        self.emit(&SessionEvent::LetterEntered { row, col, letter });
        Ok(())
    }

    /// Clear the nearest typed letter before the cursor
    ///
    /// Pinned (hinted) cells are skipped and kept.
    ///
    /// # Errors
    /// `IllegalOperation` if the game is over or nothing can be deleted.
    pub fn delete_letter(&mut self) -> Result<(), GameError> {
        self.ensure_active()?;

        let row = self.cursor.row;
        let col = (0..self.cursor.col)
            .rev()
            .find(|&c| !self.grid.cell(row, c).is_pinned())
            .ok_or(IllegalOperation::RowEmpty)?;

        self.grid.clear(row, col);
        self.cursor.col = col;

        self.emit(&SessionEvent::LetterDeleted { row, col });
        Ok(())
    }

    /// Submit the current row
    ///
    /// # Errors
    /// - `InvalidWord` if the row is not in the word bank; nothing changes
    /// - `IllegalOperation` if the game is over or the row is not full
    pub fn submit_row(&mut self) -> Result<Submission, GameError> {
        let submission = self.score_row()?;
        self.announce_result(&submission);
        Ok(submission)
    }

    /// Score the current row, emitting `RowRevealed` but not `GameOver`
    pub(crate) fn score_row(&mut self) -> Result<Submission, GameError> {
        self.ensure_active()?;

        let row = self.cursor.row;
        let guess = match self.grid.row_word(row) {
            Some(word) if self.cursor.col == WORD_LEN => word,
            _ => return Err(IllegalOperation::RowIncomplete.into()),
        };

        if !self.bank.contains(&guess) {
            log::debug!("rejected guess {guess} on row {row}");
            let word = guess.text().to_string();
            self.emit(&SessionEvent::WordRejected {
                row,
                word: word.clone(),
            });
            return Err(GameError::InvalidWord(word));
        }

        self.state = SessionState::Evaluating;
        let feedback = Feedback::evaluate(&guess, &self.secret);
        self.grid.reveal(row, &feedback);
        self.keyboard.record(&guess, &feedback);
        self.guesses.push((guess, feedback));

        if feedback.is_solved() {
            self.state = SessionState::Won;
        } else if row + 1 == MAX_ATTEMPTS {
            self.state = SessionState::Lost;
        } else {
            self.cursor = Cursor { row: row + 1, col: 0 };
            self.state = SessionState::Entering;
        }

        self.emit(&SessionEvent::RowRevealed { row, feedback });
        Ok(Submission {
            row,
            feedback,
            result: self.result(),
        })
    }

    /// Emit `GameOver` if `submission` finished the game
    pub(crate) fn announce_result(&mut self, submission: &Submission) {
        if let Some(result) = &submission.result {
            log::info!(
                "game over: {} in {} attempts",
                if result.won { "won" } else { "lost" },
                result.attempts_used
            );
            self.emit(&SessionEvent::GameOver(result.clone()));
        }
    }

    /// Reveal one letter of the current row that is empty or wrong
    ///
    /// Returns the column that was filled.
    ///
    /// # Errors
    /// - `NoHintNeeded` if every cell already holds the secret's letter
    /// - `IllegalOperation` if the game is over or no hints remain
    pub fn use_hint<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Result<usize, GameError> {
        self.ensure_active()?;
        if self.hints_remaining == 0 {
            return Err(IllegalOperation::NoHintsRemaining.into());
        }

        let row = self.cursor.row;
        let candidates: Vec<usize> = (0..WORD_LEN)
            .filter(|&c| {
                let wanted = char::from(self.secret.char_at(c));
                self.grid.cell(row, c).letter() != Some(wanted)
            })
            .collect();
        if candidates.is_empty() {
            return Err(GameError::NoHintNeeded);
        }

        let col = candidates[rng.random_range(0..candidates.len())];
        let letter = self.secret.char_at(col);
        self.grid.pin(row, col, letter);
        self.hints_remaining -= 1;
        if col == self.cursor.col {
            self.skip_pinned();
        }

        log::debug!("hint revealed column {col}, {} left", self.hints_remaining);
        self.emit(&SessionEvent::HintUsed {
            row,
            col,
            letter: char::from(letter),
            remaining: self.hints_remaining,
        });
        Ok(col)
    }

    /// Throw away this game and start another with a new random secret
    pub fn restart<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.secret = self.bank.pick_secret(rng);
        self.grid = Grid::new();
        self.cursor = Cursor::default();
        self.hints_remaining = self.max_hints;
        self.state = SessionState::Entering;
        self.guesses.clear();
        self.keyboard = KeyboardState::new();
        log::info!("game restarted");
        self.emit(&SessionEvent::Restarted);
    }

    /// Final result, once the game is over
    #[must_use]
    pub fn result(&self) -> Option<GameResult> {
        self.state.is_terminal().then(|| GameResult {
            won: self.state == SessionState::Won,
            attempts_used: self.guesses.len() as u8,
            secret: self.secret.clone(),
        })
    }

    /// The secret, once the game is over
    #[must_use]
    pub fn revealed_secret(&self) -> Option<&Word> {
        self.state.is_terminal().then_some(&self.secret)
    }

    #[must_use]
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    #[must_use]
    pub const fn cursor(&self) -> Cursor {
        self.cursor
    }

    #[must_use]
    pub const fn state(&self) -> SessionState {
        self.state
    }

    #[must_use]
    pub const fn is_over(&self) -> bool {
        self.state.is_terminal()
    }

    #[must_use]
    pub const fn hints_remaining(&self) -> u8 {
        self.hints_remaining
    }

    #[must_use]
    pub const fn max_hints(&self) -> u8 {
        self.max_hints
    }

    /// Submitted guesses with their feedback, oldest first
    #[must_use]
    pub fn guesses(&self) -> &[(Word, Feedback)] {
        &self.guesses
    }

    #[must_use]
    pub fn keyboard(&self) -> &KeyboardState {
        &self.keyboard
    }

    fn ensure_active(&self) -> Result<(), IllegalOperation> {
        if self.state.is_terminal() {
            Err(IllegalOperation::GameOver)
        } else {
            Ok(())
        }
    }

    fn skip_pinned(&mut self) {
        let row = self.cursor.row;
        while self.cursor.col < WORD_LEN && self.grid.cell(row, self.cursor.col).is_pinned() {
            self.cursor.col += 1;
        }
    }

    fn emit(&mut self, event: &SessionEvent) {
        for observer in &mut self.observers {
            observer.on_event(event);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::LetterState;
    use crate::wordlists::loader::words_from_slice;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use std::cell::RefCell;
    use std::rc::Rc;

    fn bank() -> WordBank {
        WordBank::new(
            words_from_slice(&["eagle", "adieu", "audio", "pious"]),
            words_from_slice(&["crane", "slate", "allee", "trace"]),
        )
        .unwrap()
    }

    fn session<'a>(bank: &'a WordBank, secret: &str) -> GameSession<'a> {
        GameSession::with_secret(bank, Word::new(secret).unwrap(), DEFAULT_MAX_HINTS)
    }

    fn type_word(session: &mut GameSession<'_>, word: &str) {
        for ch in word.chars() {
            session.enter_letter(ch).unwrap();
        }
    }

    #[test]
    fn typing_advances_cursor() {
        let bank = bank();
        let mut s = session(&bank, "crane");
        s.enter_letter('S').unwrap();
        s.enter_letter('l').unwrap();
        assert_eq!(s.cursor(), Cursor { row: 0, col: 2 });
        assert_eq!(s.grid().row_text(0), "sl___");
    }

    #[test]
    fn typing_into_full_row_is_rejected() {
        let bank = bank();
        let mut s = session(&bank, "crane");
        type_word(&mut s, "slate");
        assert_eq!(
            s.enter_letter('x'),
            Err(GameError::IllegalOperation(IllegalOperation::RowFull))
        );
        assert_eq!(s.grid().row_text(0), "slate");
    }

    #[test]
    fn non_letters_are_rejected() {
        let bank = bank();
        let mut s = session(&bank, "crane");
        assert_eq!(
            s.enter_letter('3'),
            Err(GameError::IllegalOperation(IllegalOperation::NotALetter('3')))
        );
        assert_eq!(s.cursor().col, 0);
    }

    #[test]
    fn delete_clears_previous_cell() {
        let bank = bank();
        let mut s = session(&bank, "crane");
        type_word(&mut s, "sla");
        s.delete_letter().unwrap();
        assert_eq!(s.cursor().col, 2);
        assert_eq!(s.grid().row_text(0), "sl___");
    }

    #[test]
    fn delete_on_empty_row_is_rejected() {
        let bank = bank();
        let mut s = session(&bank, "crane");
        assert_eq!(
            s.delete_letter(),
            Err(GameError::IllegalOperation(IllegalOperation::RowEmpty))
        );
    }

    #[test]
    fn submit_requires_full_row() {
        let bank = bank();
        let mut s = session(&bank, "crane");
        type_word(&mut s, "slat");
        assert_eq!(
            s.submit_row(),
            Err(GameError::IllegalOperation(IllegalOperation::RowIncomplete))
        );
    }

    #[test]
    fn valid_guess_advances_row() {
        let bank = bank();
        let mut s = session(&bank, "crane");
        type_word(&mut s, "slate");
        let submission = s.submit_row().unwrap();

        assert_eq!(submission.row, 0);
        assert_eq!(submission.result, None);
        assert_eq!(submission.feedback, Feedback::parse("--G-G").unwrap());
        assert_eq!(s.cursor(), Cursor { row: 1, col: 0 });
        assert_eq!(s.state(), SessionState::Entering);
        assert_eq!(s.grid().cell(0, 2).state(), Some(LetterState::Correct));
        assert_eq!(s.revealed_secret(), None);
    }

    #[test]
    fn invalid_word_changes_nothing() {
        let bank = bank();
        let mut s = session(&bank, "crane");
        type_word(&mut s, "zzzzz");
        let grid_before = s.grid().clone();

        assert_eq!(s.submit_row(), Err(GameError::InvalidWord("zzzzz".into())));
        assert_eq!(s.grid(), &grid_before);
        assert_eq!(s.cursor(), Cursor { row: 0, col: 5 });
        assert_eq!(s.state(), SessionState::Entering);
        assert!(s.guesses().is_empty());
    }

    #[test]
    fn correct_guess_wins() {
        let bank = bank();
        let mut s = session(&bank, "crane");
        type_word(&mut s, "slate");
        s.submit_row().unwrap();
        type_word(&mut s, "crane");
        let submission = s.submit_row().unwrap();

        let result = submission.result.unwrap();
        assert!(result.won);
        assert_eq!(result.attempts_used, 2);
        assert_eq!(s.state(), SessionState::Won);
        assert_eq!(s.revealed_secret().map(Word::text), Some("crane"));
    }

    #[test]
    fn sixth_miss_loses_and_reveals_secret() {
        let bank = bank();
        let mut s = session(&bank, "crane");
        for _ in 0..5 {
            type_word(&mut s, "slate");
            assert!(s.submit_row().unwrap().result.is_none());
        }
        type_word(&mut s, "audio");
        let result = s.submit_row().unwrap().result.unwrap();

        assert!(!result.won);
        assert_eq!(result.attempts_used, 6);
        assert_eq!(s.state(), SessionState::Lost);
        assert_eq!(s.cursor().row, 5);
        assert_eq!(s.revealed_secret().map(Word::text), Some("crane"));
    }

    #[test]
    fn winning_on_last_row_is_a_win() {
        let bank = bank();
        let mut s = session(&bank, "crane");
        for _ in 0..5 {
            type_word(&mut s, "slate");
            s.submit_row().unwrap();
        }
        type_word(&mut s, "crane");
        let result = s.submit_row().unwrap().result.unwrap();
        assert!(result.won);
        assert_eq!(result.attempts_used, 6);
    }

    #[test]
    fn terminal_state_rejects_everything() {
        let bank = bank();
        let mut s = session(&bank, "crane");
        type_word(&mut s, "crane");
        s.submit_row().unwrap();
        let mut rng = StdRng::seed_from_u64(1);

        let game_over = Err(GameError::IllegalOperation(IllegalOperation::GameOver));
        assert_eq!(s.enter_letter('a'), game_over.clone());
        assert_eq!(s.delete_letter(), game_over.clone());
        assert_eq!(s.submit_row().map(|_| ()), game_over.clone());
        assert_eq!(s.use_hint(&mut rng).map(|_| ()), game_over);
        assert_eq!(s.hints_remaining(), DEFAULT_MAX_HINTS);
    }

    #[test]
    fn hint_places_secret_letter() {
        let bank = bank();
        let mut s = session(&bank, "crane");
        let mut rng = StdRng::seed_from_u64(3);

        let col = s.use_hint(&mut rng).unwrap();
        let cell = s.grid().cell(0, col);
        assert_eq!(cell.letter(), Some(char::from(b"crane"[col])));
        assert!(cell.is_pinned());
        assert_eq!(s.hints_remaining(), DEFAULT_MAX_HINTS - 1);
    }

    #[test]
    fn hints_exhaust_at_zero() {
        let bank = bank();
        let mut s = session(&bank, "crane");
        let mut rng = StdRng::seed_from_u64(11);

        for _ in 0..DEFAULT_MAX_HINTS {
            s.use_hint(&mut rng).unwrap();
        }
        let grid_before = s.grid().clone();
        assert_eq!(
            s.use_hint(&mut rng),
            Err(GameError::IllegalOperation(IllegalOperation::NoHintsRemaining))
        );
        assert_eq!(s.hints_remaining(), 0);
        assert_eq!(s.grid(), &grid_before);
    }

    #[test]
    fn hint_not_needed_when_row_matches_secret() {
        let bank = bank();
        let mut s = session(&bank, "crane");
        type_word(&mut s, "crane");
        let mut rng = StdRng::seed_from_u64(5);
        assert_eq!(s.use_hint(&mut rng), Err(GameError::NoHintNeeded));
        assert_eq!(s.hints_remaining(), DEFAULT_MAX_HINTS);
    }

    #[test]
    fn hint_only_targets_wrong_or_empty_cells() {
        let bank = bank();
        let mut s = session(&bank, "crane");
        // c, r, a, n correct; last cell wrong
        type_word(&mut s, "cranx");
        let mut rng = StdRng::seed_from_u64(9);
        assert_eq!(s.use_hint(&mut rng), Ok(4));
        assert_eq!(s.grid().row_text(0), "crane");
        assert_eq!(s.cursor().col, WORD_LEN);
    }

    #[test]
    fn typing_skips_pinned_cells() {
        let bank = bank();
        let mut s = GameSession::with_secret(&bank, Word::new("crane").unwrap(), 5);
        let mut rng = StdRng::seed_from_u64(2);
        type_word(&mut s, "sla");
        // Fill the only wrong-or-empty columns until column 3 gets pinned
        while !s.grid().cell(0, 3).is_pinned() {
            s.use_hint(&mut rng).unwrap();
        }
        let pinned: Vec<bool> = s.grid().row(0).iter().map(|c| c.is_pinned()).collect();

        while s.cursor().col < WORD_LEN {
            s.enter_letter('e').unwrap();
        }
        for (col, was_pinned) in pinned.iter().enumerate() {
            if *was_pinned {
                assert_eq!(
                    s.grid().cell(0, col).letter(),
                    Some(char::from(b"crane"[col]))
                );
            }
        }
        assert!(s.grid().row_word(0).is_some());
    }

    #[test]
    fn hint_at_cursor_moves_cursor_past_pinned_run() {
        let bank = bank();
        let mut s = GameSession::with_secret(&bank, Word::new("crane").unwrap(), 5);
        let mut rng = StdRng::seed_from_u64(4);
        type_word(&mut s, "cran");
        // Only column 4 is empty and c,r,a,n are already right
        assert_eq!(s.use_hint(&mut rng), Ok(4));
        assert_eq!(s.cursor().col, WORD_LEN);
        s.submit_row().unwrap();
        assert_eq!(s.state(), SessionState::Won);
    }

    #[test]
    fn delete_skips_pinned_cells() {
        let bank = bank();
        let mut s = GameSession::with_secret(&bank, Word::new("crane").unwrap(), 4);
        let mut rng = StdRng::seed_from_u64(4);
        type_word(&mut s, "slatx");
        // Columns 0, 1, 3 and 4 are wrong, so four hints always reach column 4
        while !s.grid().cell(0, 4).is_pinned() {
            s.use_hint(&mut rng).unwrap();
        }
        s.delete_letter().unwrap();
        assert_eq!(s.grid().cell(0, 4).letter(), Some('e'));
        assert!(s.cursor().col < 4);
        assert!(s.grid().cell(0, s.cursor().col).is_empty());
    }

    #[test]
    fn pins_do_not_carry_to_next_row() {
        // Every hinted variant of TRACE is a legal guess
        let bank = WordBank::new(
            words_from_slice(&["trace", "crace", "trane"]),
            words_from_slice(&["crane"]),
        )
        .unwrap();
        let mut s = session(&bank, "crane");
        let mut rng = StdRng::seed_from_u64(6);
        type_word(&mut s, "trace");
        let col = s.use_hint(&mut rng).unwrap();
        assert!(col == 0 || col == 3);

        s.submit_row().unwrap();
        assert_eq!(s.cursor(), Cursor { row: 1, col: 0 });
        assert!(s.grid().row(1).iter().all(|c| !c.is_pinned()));

        s.enter_letter('c').unwrap();
        assert_eq!(s.cursor(), Cursor { row: 1, col: 1 });
        s.delete_letter().unwrap();
        assert_eq!(s.cursor(), Cursor { row: 1, col: 0 });
    }

    #[test]
    fn keyboard_tracks_submitted_rows() {
        let bank = bank();
        let mut s = session(&bank, "crane");
        type_word(&mut s, "trace");
        s.submit_row().unwrap();
        assert_eq!(s.keyboard().get('r'), Some(LetterState::Correct));
        assert_eq!(s.keyboard().get('c'), Some(LetterState::Present));
        assert_eq!(s.keyboard().get('t'), Some(LetterState::Absent));
        assert_eq!(s.keyboard().get('z'), None);
    }

    #[test]
    fn restart_resets_everything_but_observers() {
        let bank = bank();
        let events = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&events);
        let mut s = session(&bank, "crane");
        s.subscribe(move |e: &SessionEvent| sink.borrow_mut().push(e.clone()));

        let mut rng = StdRng::seed_from_u64(8);
        type_word(&mut s, "crane");
        s.submit_row().unwrap();
        s.restart(&mut rng);

        assert_eq!(s.state(), SessionState::Entering);
        assert_eq!(s.cursor(), Cursor::default());
        assert_eq!(s.hints_remaining(), DEFAULT_MAX_HINTS);
        assert!(s.guesses().is_empty());
        assert_eq!(s.keyboard().iter().count(), 0);

        s.enter_letter('a').unwrap();
        assert_eq!(
            events.borrow().last(),
            Some(&SessionEvent::LetterEntered {
                row: 0,
                col: 0,
                letter: 'a'
            })
        );
    }

    #[test]
    fn observer_sees_events_in_order() {
        let bank = bank();
        let events = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&events);
        let mut s = session(&bank, "crane");
        s.subscribe(move |e: &SessionEvent| sink.borrow_mut().push(e.clone()));

        type_word(&mut s, "zzzzz");
        let _ = s.submit_row();
        for _ in 0..5 {
            s.delete_letter().unwrap();
        }
        type_word(&mut s, "crane");
        s.submit_row().unwrap();

        let events = events.borrow();
        assert!(events.contains(&SessionEvent::WordRejected {
            row: 0,
            word: "zzzzz".into()
        }));
        let tail = &events[events.len() - 2..];
        assert_eq!(
            tail[0],
            SessionEvent::RowRevealed {
                row: 0,
                feedback: Feedback::SOLVED
            }
        );
        assert!(matches!(&tail[1], SessionEvent::GameOver(r) if r.won && r.attempts_used == 1));
    }
}
