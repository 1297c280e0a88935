//! Game coordinator
//!
//! Owns the current session together with the statistics tracker and the random
//! source, so a finished game is recorded and saved before `submit_row`
//! returns and before observers hear `GameOver`.

use super::error::GameError;
use super::events::SessionObserver;
use super::session::{GameSession, Submission};
use crate::config::GameConfig;
use crate::core::Word;
use crate::stats::{KeyValueStore, StatsTracker};
use crate::wordlists::WordBank;
use rand::rngs::StdRng;

/// Discrete input forwarded by a presentation layer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    Letter(char),
    Backspace,
    Submit,
    Hint,
}

/// What a successful [`Game::handle`] call did
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Response {
    /// A letter was typed or removed
    Edited,
    /// A row was scored
    Revealed(Submission),
    /// A hint filled this column
    Hinted(usize),
}

/// One player's games against a word bank
pub struct Game<'a, S: KeyValueStore> {
    session: GameSession<'a>,
    stats: StatsTracker<S>,
    config: GameConfig,
    rng: StdRng,
}

impl<'a, S: KeyValueStore> Game<'a, S> {
    pub fn new(bank: &'a WordBank, config: GameConfig, stats: StatsTracker<S>) -> Self {
        let mut rng = config.rng();
        let session = GameSession::new(bank, config.max_hints, &mut rng);
        Self {
            session,
            stats,
            config,
            rng,
        }
    }

    /// Start with a known secret; later games are still random
    pub fn with_secret(
        bank: &'a WordBank,
        secret: Word,
        config: GameConfig,
        stats: StatsTracker<S>,
    ) -> Self {
        Self {
            session: GameSession::with_secret(bank, secret, config.max_hints),
            stats,
            config,
            rng: config.rng(),
        }
    }

    /// Dispatch one input event
    ///
    /// # Errors
    /// Forwards the session's `GameError`; state is unchanged on error.
    pub fn handle(&mut self, input: InputEvent) -> Result<Response, GameError> {
        match input {
            InputEvent::Letter(ch) => self.enter_letter(ch).map(|()| Response::Edited),
            InputEvent::Backspace => self.delete_letter().map(|()| Response::Edited),
            InputEvent::Submit => self.submit_row().map(Response::Revealed),
            InputEvent::Hint => self.use_hint().map(Response::Hinted),
        }
    }

    /// Type a letter into the current row
    ///
    /// # Errors
    /// Forwards the session's `GameError`.
    pub fn enter_letter(&mut self, ch: char) -> Result<(), GameError> {
        self.session.enter_letter(ch)
    }

    /// # Errors
    /// Forwards the session's `GameError`.
    pub fn delete_letter(&mut self) -> Result<(), GameError> {
        self.session.delete_letter()
    }

    /// Submit the current row, recording the result if the game ends
    ///
    /// Statistics are saved before `GameOver` reaches observers. A failed
    /// save is logged and otherwise ignored.
    ///
    /// # Errors
    /// Forwards the session's `GameError`.
    pub fn submit_row(&mut self) -> Result<Submission, GameError> {
        let submission = self.session.score_row()?;
        if let Some(result) = &submission.result {
            self.stats.record(result);
            if let Err(e) = self.stats.save() {
                log::warn!("failed to save statistics: {e}");
            }
        }
        self.session.announce_result(&submission);
        Ok(submission)
    }

    /// Reveal one letter of the current row
    ///
    /// # Errors
    /// Forwards the session's `GameError`.
    pub fn use_hint(&mut self) -> Result<usize, GameError> {
        self.session.use_hint(&mut self.rng)
    }

    /// Abandon the current game and start a fresh one
    ///
    /// An unfinished game is not counted in the statistics.
    pub fn new_game(&mut self) {
        self.stats.clear_highlight();
        self.session.restart(&mut self.rng);
    }

    pub fn subscribe(&mut self, observer: impl SessionObserver + 'a) {
        self.session.subscribe(observer);
    }

    #[must_use]
    pub const fn session(&self) -> &GameSession<'a> {
        &self.session
    }

    #[must_use]
    pub const fn stats(&self) -> &StatsTracker<S> {
        &self.stats
    }

    #[must_use]
    pub const fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Give back the statistics tracker, ending this game
    #[must_use]
    pub fn into_stats(self) -> StatsTracker<S> {
        self.stats
    }
}
