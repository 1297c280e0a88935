//! Game engine
//!
//! [`GameSession`] is the turn state machine for a single secret word.
//! [`Game`] wraps a session with statistics and a random source and is what
//! presentation layers drive.
//!
//! # Example
//!
//! ```
//! use wordle_game::config::GameConfig;
//! use wordle_game::core::Word;
//! use wordle_game::game::{Game, InputEvent, SessionState};
//! use wordle_game::stats::{MemoryStore, StatsTracker};
//! use wordle_game::wordlists::WordBank;
//!
//! let bank = WordBank::embedded().unwrap();
//! let secret = Word::new("crane").unwrap();
//! let stats = StatsTracker::load(MemoryStore::new());
//! let mut game = Game::with_secret(&bank, secret, GameConfig::default(), stats);
//!
//! for ch in "crane".chars() {
//!     game.handle(InputEvent::Letter(ch)).unwrap();
//! }
//! game.handle(InputEvent::Submit).unwrap();
//! assert_eq!(game.session().state(), SessionState::Won);
//! assert_eq!(game.stats().stats().wins, 1);
//! ```

mod controller;
mod error;
mod events;
mod grid;
mod keyboard;
mod session;

pub use controller::{Game, InputEvent, Response};
pub use error::{GameError, IllegalOperation};
pub use events::{SessionEvent, SessionObserver};
pub use grid::{Cell, Cursor, Grid, MAX_ATTEMPTS};
pub use keyboard::KeyboardState;
pub use session::{DEFAULT_MAX_HINTS, GameResult, GameSession, SessionState, Submission};
