//! WASM Keypad for Calculator
//!
//! Maps the two browser input sources onto tokens: button clicks by element
//! ID and window keydown events by key name.

use tracing::trace;

use crate::core::{key_to_token, KeypadLayout, Token};

/// Browser keypad: the shared layout plus click/key mapping
#[derive(Debug, Clone, Default)]
pub struct WasmKeypad {
    layout: KeypadLayout,
}

impl WasmKeypad {
    /// Creates the standard keypad
    #[must_use]
    pub fn new() -> Self {
        Self {
            layout: KeypadLayout::new(),
        }
    }

    /// Returns the button layout
    #[must_use]
    pub const fn layout(&self) -> &KeypadLayout {
        &self.layout
    }

    /// Returns the number of buttons
    #[must_use]
    pub fn button_count(&self) -> usize {
        self.layout.button_count()
    }

    /// Maps a button click to its token
    #[must_use]
    pub fn handle_click(&self, element_id: &str) -> Option<Token> {
        let token = self.layout.find_by_id(element_id).map(|b| b.token);
        if token.is_none() {
            trace!(element_id, "click outside keypad ignored");
        }
        token
    }

    /// Maps a keyboard key to its token
    #[must_use]
    pub fn handle_key(&self, key: &str) -> Option<Token> {
        let token = key_to_token(key);
        if token.is_none() {
            trace!(key, "unmapped key ignored");
        }
        token
    }
}
