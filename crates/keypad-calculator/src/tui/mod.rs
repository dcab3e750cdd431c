//! TUI Frontend for Calculator
//!
//! Keyboard and mouse driven terminal front end built on ratatui/crossterm.

mod app;
mod input;
mod keypad;
mod ui;

pub use app::CalculatorApp;
pub use input::{InputHandler, KeyAction};
pub use keypad::{Keypad, KeypadWidget};
pub use ui::{render, CalculatorUI, UiAreas, HELP_LINE, KEYPAD_HEIGHT, KEYPAD_WIDTH, TITLE};
