//! Keystroke input handling using crossterm
//!
//! Features:
//! - Polling with a short timeout so the screen can refresh feedback expiry
//! - Key to game command mapping per phase
//! - Ctrl+C / Esc / q graceful exit

use crate::session::{GamePhase, Slot};
use crossterm::event::{self, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use std::io::Result as IoResult;
use std::time::Duration;

/// What the player asked for
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Command {
    Choose(Slot),
    PlayAgain,
    Quit,
}

/// Handles user input from terminal
pub struct InputHandler {
    /// Timeout for poll operations
    poll_timeout: Duration,
}

impl InputHandler {
    /// Create new input handler with default timeout (50ms for responsive input)
    pub fn new() -> Self {
        InputHandler {
            poll_timeout: Duration::from_millis(50),
        }
    }

    /// Enable raw mode for terminal input
    pub fn enable_raw_mode() -> IoResult<()> {
        crossterm::terminal::enable_raw_mode()
    }

    /// Disable raw mode and restore terminal
    pub fn disable_raw_mode() -> IoResult<()> {
        crossterm::terminal::disable_raw_mode()
    }

    /// Poll for keystroke with timeout (non-blocking)
    /// Returns Some(KeyEvent) if key pressed, None if timeout
    pub fn read_key(&self) -> Result<Option<KeyEvent>, Box<dyn std::error::Error>> {
        if event::poll(self.poll_timeout)? {
            match event::read()? {
                // Windows reports releases too
                event::Event::Key(key_event) if key_event.kind == KeyEventKind::Press => {
                    Ok(Some(key_event))
                }
                _ => Ok(None),
            }
        } else {
            Ok(None)
        }
    }

    /// Check if key event is an exit signal (Ctrl+C, Escape or q)
    pub fn is_exit(key: &KeyEvent) -> bool {
        match key.code {
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => true,
            KeyCode::Char('q') | KeyCode::Esc => true,
            _ => false,
        }
    }

    /// Map a key to a game command for the current phase
    pub fn command(key: &KeyEvent, phase: GamePhase) -> Option<Command> {
        if Self::is_exit(key) {
            return Some(Command::Quit);
        }

        match (phase, key.code) {
            (GamePhase::InProgress, KeyCode::Char('1') | KeyCode::Left) => {
                Some(Command::Choose(Slot::First))
            }
            (GamePhase::InProgress, KeyCode::Char('2') | KeyCode::Right) => {
                Some(Command::Choose(Slot::Second))
            }
            (GamePhase::GameOver, KeyCode::Char('r') | KeyCode::Enter) => Some(Command::PlayAgain),
            _ => None,
        }
    }
}

impl Default for InputHandler {
    fn default() -> Self {
        Self::new()
    }
}
