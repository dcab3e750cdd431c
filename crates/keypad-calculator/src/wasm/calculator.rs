//! WASM Calculator Bindings
//!
//! Browser-facing calculator: the engine plus the keypad mapping. Both input
//! sources go through the same [`WasmCalculator::handle_token`].

use crate::config::CalculatorConfig;
use crate::core::{CalculatorEngine, EngineState, Token};

use super::keypad::WasmKeypad;

/// WASM Calculator - browser-ready calculator
#[derive(Debug, Clone, Default)]
pub struct WasmCalculator {
    engine: CalculatorEngine,
    keypad: WasmKeypad,
}

impl WasmCalculator {
    /// Creates a new WASM calculator
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(&CalculatorConfig::default())
    }

    /// Creates a calculator from configuration
    #[must_use]
    pub fn with_config(config: &CalculatorConfig) -> Self {
        Self {
            engine: CalculatorEngine::with_config(config),
            keypad: WasmKeypad::new(),
        }
    }

    /// Current display text
    #[must_use]
    pub fn display(&self) -> &str {
        self.engine.display()
    }

    /// The underlying engine
    #[must_use]
    pub const fn engine(&self) -> &CalculatorEngine {
        &self.engine
    }

    /// The keypad mapping
    #[must_use]
    pub const fn keypad(&self) -> &WasmKeypad {
        &self.keypad
    }

    /// Feeds a token and returns the new display
    pub fn handle_token(&mut self, token: Token) -> &str {
        self.engine.handle_input(token)
    }

    /// Handles a button click by element ID
    ///
    /// Returns the new display, or `None` if the ID is not a keypad button.
    pub fn handle_button(&mut self, element_id: &str) -> Option<&str> {
        let token = self.keypad.handle_click(element_id)?;
        Some(self.handle_token(token))
    }

    /// Handles a keyboard key
    ///
    /// Returns the new display, or `None` if the key is ignored.
    pub fn handle_key(&mut self, key: &str) -> Option<&str> {
        let token = self.keypad.handle_key(key)?;
        Some(self.handle_token(token))
    }

    /// Clears all state
    pub fn clear(&mut self) {
        self.engine.handle_input(Token::Clear);
    }

    /// Snapshot of the engine state
    #[must_use]
    pub fn state(&self) -> EngineState {
        self.engine.snapshot()
    }

    /// Engine state as JSON (for JS interop)
    #[must_use]
    pub fn state_json(&self) -> String {
        self.state().to_json().unwrap_or_else(|_| "{}".to_string())
    }
}
