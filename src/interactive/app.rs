//! TUI application state and logic

use crate::config::GameConfig;
use crate::game::{Game, GameError, IllegalOperation, SessionEvent};
use crate::output::formatters::{error_message, result_message};
use crate::stats::{KeyValueStore, StatsTracker};
use crate::wordlists::WordBank;
use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::cell::RefCell;
use std::io;
use std::rc::Rc;

/// Messages kept in the message panel
const MAX_MESSAGES: usize = 5;

/// Application state
pub struct App<'a, S: KeyValueStore> {
    pub game: Game<'a, S>,
    pub messages: Vec<Message>,
    pub show_keyboard: bool,
    pub show_stats: bool,
    /// Row drawn as rejected until the next key press
    pub rejected_row: Option<usize>,
    pub should_quit: bool,
    events: Rc<RefCell<Vec<SessionEvent>>>,
}

#[derive(Debug, Clone)]
pub struct Message {
    pub text: String,
    pub style: MessageStyle,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageStyle {
    Info,
    Success,
    Error,
}

impl<'a, S: KeyValueStore> App<'a, S> {
    pub fn new(bank: &'a WordBank, config: GameConfig, stats: StatsTracker<S>) -> Self {
        Self::with_game(Game::new(bank, config, stats))
    }

    /// Wrap an existing game, subscribing to its session events
    pub fn with_game(mut game: Game<'a, S>) -> Self {
        let events = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&events);
        game.subscribe(move |event: &SessionEvent| sink.borrow_mut().push(event.clone()));

        Self {
            game,
            messages: vec![Message {
                text: "Guess the word! Tab for a hint, Ctrl-N for a new game.".to_string(),
                style: MessageStyle::Info,
            }],
            show_keyboard: true,
            show_stats: false,
            rejected_row: None,
            should_quit: false,
            events,
        }
    }

    /// Apply one key press
    pub fn handle_key(&mut self, key: KeyEvent) {
        self.rejected_row = None;
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);

        let outcome = match key.code {
            KeyCode::Esc => {
                self.should_quit = true;
                return;
            }
            KeyCode::Char('c') if ctrl => {
                self.should_quit = true;
                return;
            }
            KeyCode::Char('n') if ctrl => {
                self.game.new_game();
                Ok(None)
            }
            KeyCode::Char('s') if ctrl => {
                self.show_stats = !self.show_stats;
                Ok(None)
            }
            KeyCode::Char('k') if ctrl => {
                self.show_keyboard = !self.show_keyboard;
                Ok(None)
            }
            KeyCode::Tab => self.game.use_hint().map(Some),
            KeyCode::Enter => self.game.submit_row().map(|_| None),
            KeyCode::Backspace => self.game.delete_letter().map(|()| None),
            KeyCode::Char(c) if !ctrl => self.game.enter_letter(c).map(|()| None),
            _ => Ok(None),
        };

        // Stray keys and typing into a full row are not worth a message
        if let Err(e) = outcome
            && !matches!(
                e,
                GameError::IllegalOperation(
                    IllegalOperation::NotALetter(_) | IllegalOperation::RowFull
                )
            )
        {
            self.report_error(&e);
        }
        self.drain_events();
    }

    fn report_error(&mut self, error: &GameError) {
        let mut text = error_message(error);
        if self.game.session().is_over() {
            text.push_str(" Press Ctrl-N for a new game.");
        }
        self.add_message(&text, MessageStyle::Error);
    }

    /// Turn session events into messages and view state
    fn drain_events(&mut self) {
        let events: Vec<SessionEvent> = self.events.borrow_mut().drain(..).collect();
        for event in events {
            match event {
                SessionEvent::WordRejected { row, .. } => self.rejected_row = Some(row),
                SessionEvent::HintUsed {
                    col,
                    letter,
                    remaining,
                    ..
                } => self.add_message(
                    &format!(
                        "Hint: position {} is {} ({remaining} left)",
                        col + 1,
                        letter.to_ascii_uppercase()
                    ),
                    MessageStyle::Info,
                ),
                SessionEvent::GameOver(result) => {
                    let style = if result.won {
                        MessageStyle::Success
                    } else {
                        MessageStyle::Error
                    };
                    self.add_message(&result_message(&result), style);
                    self.show_stats = true;
                }
                SessionEvent::Restarted => {
                    self.messages.clear();
                    self.show_stats = false;
                    self.add_message("New game started!", MessageStyle::Info);
                }
                SessionEvent::LetterEntered { .. }
                | SessionEvent::LetterDeleted { .. }
                | SessionEvent::RowRevealed { .. } => {}
            }
        }
    }

    pub fn add_message(&mut self, text: &str, style: MessageStyle) {
        self.messages.push(Message {
            text: text.to_string(),
            style,
        });

        if self.messages.len() > MAX_MESSAGES {
            self.messages.remove(0);
        }
    }
}

/// Run the TUI application
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O error
/// during rendering or event handling.
pub fn run_tui<S: KeyValueStore>(app: App<'_, S>) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    res
}

fn run_app<B: ratatui::backend::Backend, S: KeyValueStore>(
    terminal: &mut Terminal<B>,
    mut app: App<'_, S>,
) -> Result<()> {
    loop {
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        if let Event::Key(key) = event::read()? {
            // Only process key press events (fixes Windows double-input bug)
            if key.kind != KeyEventKind::Press {
                continue;
            }
            app.handle_key(key);
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}
