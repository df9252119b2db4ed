//! Terminal display and UI rendering
//!
//! Features:
//! - Round header and running score
//! - Tweet cards with word wrapping
//! - Colored answer feedback
//! - Game over summary

use crate::session::{Feedback, GamePhase, SessionSummary, Slot};
use crossterm::{
    cursor, execute,
    style::{Attribute, Color, Print, ResetColor, SetAttribute, SetForegroundColor},
    terminal::{self, ClearType},
};
use std::io::{stdout, Write};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Inner width of a tweet card
const CARD_WIDTH: usize = 56;

const AUTHOR_NAME: &str = "Donald J. Trump";
const AUTHOR_HANDLE: &str = "@realDonaldTrump";

/// Terminal display manager
pub struct Display;

impl Display {
    pub fn new() -> Self {
        Display
    }

    pub fn hide_cursor(&self) -> Result<(), Box<dyn std::error::Error>> {
        execute!(stdout(), cursor::Hide)?;
        Ok(())
    }

    /// Clear screen
    pub fn clear(&self) -> Result<(), Box<dyn std::error::Error>> {
        let mut stdout = stdout();
        execute!(
            stdout,
            terminal::Clear(ClearType::All),
            cursor::MoveTo(0, 0)
        )?;
        Ok(())
    }

    /// Title, round counter and score
    pub fn show_header(
        &self,
        round: u32,
        total_rounds: u32,
        score: u32,
    ) -> Result<(), Box<dyn std::error::Error>> {
        let mut stdout = stdout();

        execute!(
            stdout,
            cursor::MoveTo(0, 0),
            SetAttribute(Attribute::Bold),
            Print("🇺🇸 Tweet Trivia: can you guess which tweet is real?"),
            SetAttribute(Attribute::Reset),
            cursor::MoveTo(0, 2),
            SetForegroundColor(Color::Magenta),
            Print(format!("Round {} of {}", round, total_rounds)),
            ResetColor,
            Print("  |  Score: "),
            SetForegroundColor(Color::Cyan),
            Print(score),
            ResetColor,
        )?;
        stdout.flush()?;
        Ok(())
    }

    /// Render one tweet card starting at `row`, returns the next free row
    pub fn show_tweet(
        &self,
        row: u16,
        slot: Slot,
        text: &str,
    ) -> Result<u16, Box<dyn std::error::Error>> {
        let mut stdout = stdout();
        let border = "─".repeat(CARD_WIDTH + 2);

        execute!(
            stdout,
            cursor::MoveTo(0, row),
            SetForegroundColor(Color::Yellow),
            Print(format!("[{}] Tweet {}", slot.number(), slot.number())),
            ResetColor,
            cursor::MoveTo(0, row + 1),
            SetForegroundColor(Color::DarkGrey),
            Print(format!("┌{}┐", border)),
            ResetColor,
            cursor::MoveTo(0, row + 2),
            Print("│ "),
            SetAttribute(Attribute::Bold),
            Print(AUTHOR_NAME),
            SetAttribute(Attribute::Reset),
            SetForegroundColor(Color::DarkGrey),
            Print(format!(" {}", AUTHOR_HANDLE)),
            ResetColor,
        )?;

        let mut next = row + 3;
        for line in wrap_text(text, CARD_WIDTH) {
            execute!(stdout, cursor::MoveTo(0, next), Print("│ "), Print(line))?;
            next += 1;
        }

        execute!(
            stdout,
            cursor::MoveTo(0, next),
            SetForegroundColor(Color::DarkGrey),
            Print(format!("└{}┘", border)),
            ResetColor,
        )?;
        stdout.flush()?;
        Ok(next + 2)
    }

    /// Show the last answer's feedback, green if correct
    pub fn show_feedback(
        &self,
        row: u16,
        feedback: &Feedback,
    ) -> Result<(), Box<dyn std::error::Error>> {
        let mut stdout = stdout();
        let color = if feedback.is_correct() {
            Color::Green
        } else {
            Color::Red
        };

        execute!(
            stdout,
            cursor::MoveTo(0, row),
            SetForegroundColor(color),
            Print(&feedback.message),
            ResetColor
        )?;
        stdout.flush()?;
        Ok(())
    }

    /// Game over screen
    pub fn show_summary(&self, summary: &SessionSummary) -> Result<(), Box<dyn std::error::Error>> {
        let mut stdout = stdout();
        let color = if summary.percent >= 70 {
            Color::Green
        } else if summary.percent >= 50 {
            Color::Yellow
        } else {
            Color::Red
        };

        execute!(
            stdout,
            cursor::MoveTo(0, 0),
            SetAttribute(Attribute::Bold),
            Print("🏁 Game Over!"),
            SetAttribute(Attribute::Reset),
            cursor::MoveTo(0, 2),
            Print(format!(
                "Your final score: {} / {}",
                summary.score, summary.total_rounds
            )),
            cursor::MoveTo(0, 3),
            Print("Your accuracy: "),
            SetForegroundColor(color),
            Print(format!("{}%", summary.percent)),
            ResetColor,
            cursor::MoveTo(0, 5),
            SetAttribute(Attribute::Bold),
            Print(summary.rating.label()),
            SetAttribute(Attribute::Reset),
        )?;
        stdout.flush()?;
        Ok(())
    }

    /// Show help text for the current phase
    pub fn show_help(&self, row: u16, phase: GamePhase) -> Result<(), Box<dyn std::error::Error>> {
        let mut stdout = stdout();
        let help = match phase {
            GamePhase::InProgress => "Press 1 or 2 to pick the real tweet  |  q to quit",
            GamePhase::GameOver => "Press r to play again  |  q to quit",
        };

        execute!(
            stdout,
            cursor::MoveTo(0, row),
            SetForegroundColor(Color::DarkGrey),
            Print(help),
            ResetColor
        )?;
        stdout.flush()?;
        Ok(())
    }

    /// Reset terminal state and cleanup
    pub fn shutdown(&self) -> Result<(), Box<dyn std::error::Error>> {
        let mut stdout = stdout();
        execute!(stdout, ResetColor, cursor::Show)?;
        terminal::disable_raw_mode()?;
        Ok(())
    }
}

impl Default for Display {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for Display {
    fn drop(&mut self) {
        // Best effort cleanup
        let _ = self.shutdown();
    }
}

/// Greedy word wrap by terminal columns; words wider than `width` are
/// split across lines
fn wrap_text(text: &str, width: usize) -> Vec<String> {
    let mut lines = Vec::new();
    let mut line = String::new();

    for word in text.split_whitespace().flat_map(|word| split_wide(word, width)) {
        let needed = if line.is_empty() {
            word.width()
        } else {
            line.width() + 1 + word.width()
        };

        if needed > width && !line.is_empty() {
            lines.push(std::mem::take(&mut line));
        }
        if !line.is_empty() {
            line.push(' ');
        }
        line.push_str(word);
    }

    if !line.is_empty() || lines.is_empty() {
        lines.push(line);
    }
    lines
}

/// Cut a word into pieces no wider than `width` columns
fn split_wide(word: &str, width: usize) -> Vec<&str> {
    let mut pieces = Vec::new();
    let mut start = 0;
    let mut columns = 0;

    for (idx, c) in word.char_indices() {
        let w = c.width().unwrap_or(0);
        if columns + w > width && idx > start {
            pieces.push(&word[start..idx]);
            start = idx;
            columns = 0;
        }
        columns += w;
    }
    pieces.push(&word[start..]);
    pieces
}
