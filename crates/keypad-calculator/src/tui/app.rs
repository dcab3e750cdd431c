//! TUI Application State
//!
//! Wraps the engine with the bits only the terminal needs: the quit flag,
//! the last pressed button (for highlighting) and whether to draw help.

use crate::config::CalculatorConfig;
use crate::core::{CalculatorEngine, Token};

use super::input::KeyAction;

/// Calculator application state
#[derive(Debug)]
pub struct CalculatorApp {
    /// The calculator state machine
    engine: CalculatorEngine,
    /// Last token fed to the engine
    last_pressed: Option<Token>,
    /// Whether the key help line is drawn
    show_help: bool,
    /// Whether the app should quit
    should_quit: bool,
}

impl Default for CalculatorApp {
    fn default() -> Self {
        Self::new()
    }
}

impl CalculatorApp {
    /// Creates a new calculator app with default settings
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(&CalculatorConfig::default())
    }

    /// Creates a calculator app from configuration
    #[must_use]
    pub fn with_config(config: &CalculatorConfig) -> Self {
        Self {
            engine: CalculatorEngine::with_config(config),
            last_pressed: None,
            show_help: config.show_help,
            should_quit: false,
        }
    }

    /// Returns the current display text
    #[must_use]
    pub fn display(&self) -> &str {
        self.engine.display()
    }

    /// Returns the underlying engine
    #[must_use]
    pub const fn engine(&self) -> &CalculatorEngine {
        &self.engine
    }

    /// Returns the last pressed button
    #[must_use]
    pub const fn last_pressed(&self) -> Option<Token> {
        self.last_pressed
    }

    /// Returns whether the help line is drawn
    #[must_use]
    pub const fn show_help(&self) -> bool {
        self.show_help
    }

    /// Returns whether the app should quit
    #[must_use]
    pub const fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Sets the quit flag
    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    /// Presses a button
    pub fn press(&mut self, token: Token) {
        self.last_pressed = Some(token);
        self.engine.handle_input(token);
    }

    /// Applies a key action
    pub fn apply(&mut self, action: KeyAction) {
        match action {
            KeyAction::Token(token) => self.press(token),
            KeyAction::Quit => self.quit(),
            KeyAction::None => {}
        }
    }
}
