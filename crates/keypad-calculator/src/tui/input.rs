//! Keyboard input handling
//!
//! Maps crossterm key events onto calculator tokens using the same rules as
//! the browser: `Enter` evaluates, `Backspace` clears, and a key whose
//! character is a button label presses that button.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use tracing::trace;

use crate::core::Token;

/// Actions that can be triggered by keyboard input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAction {
    /// Press a calculator button
    Token(Token),
    /// Quit the application
    Quit,
    /// No action (ignored input)
    None,
}

/// Input handler that maps key events to actions
#[derive(Debug, Default)]
pub struct InputHandler;

impl InputHandler {
    /// Creates a new input handler
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Maps a key event to an action
    #[must_use]
    pub fn handle_key(&self, event: KeyEvent) -> KeyAction {
        let KeyEvent {
            code, modifiers, ..
        } = event;

        if modifiers.contains(KeyModifiers::CONTROL) {
            return match code {
                KeyCode::Char('c' | 'q') => KeyAction::Quit,
                _ => KeyAction::None,
            };
        }

        let action = match code {
            KeyCode::Enter => KeyAction::Token(Token::Equals),
            KeyCode::Backspace => KeyAction::Token(Token::Clear),
            KeyCode::Esc => KeyAction::Quit,
            KeyCode::Char(c) => Token::from_char(c).map_or(KeyAction::None, KeyAction::Token),
            _ => KeyAction::None,
        };
        if action == KeyAction::None {
            trace!(?code, "unmapped key ignored");
        }
        action
    }
}
