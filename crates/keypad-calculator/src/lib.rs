//! Keypad Calculator
//!
//! A four-function calculator driven one button press at a time. The
//! [`core::CalculatorEngine`] holds the display text, the captured first
//! operand and the pending operator; every front end reduces its input to a
//! [`core::Token`] and feeds it through the same transition function.
//!
//! Front ends:
//!
//! - [`wasm`]: browser page bindings (with the `wasm` feature) and a native
//!   mock DOM that drives the same code paths in tests
//! - `tui`: terminal front end on ratatui/crossterm (the default `tui`
//!   feature)
//!
//! # Example
//!
//! ```rust
//! use keypad_calculator::prelude::*;
//!
//! let mut engine = CalculatorEngine::new();
//! for c in "3+4+5=".chars() {
//!     engine.handle_char(c);
//! }
//! assert_eq!(engine.display(), "12");
//!
//! // Division by zero is shown, not returned
//! engine.handle_input(Token::Clear);
//! for c in "7/0=".chars() {
//!     engine.handle_char(c);
//! }
//! assert_eq!(engine.display(), "Cannot divide by zero");
//! ```

#![cfg_attr(
    test,
    allow(
        clippy::unwrap_used,
        clippy::expect_used,
        clippy::panic,
        clippy::float_cmp
    )
)]
#![deny(missing_docs)]
#![deny(missing_debug_implementations)]

pub mod config;
pub mod core;
pub mod driver;

#[cfg(feature = "tui")]
pub mod tui;

/// WASM module - always available for testing
/// (Mock DOM allows testing without actual browser bindings)
pub mod wasm;

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::config::{CalculatorConfig, ConfigError, ConfigResult};
    pub use crate::core::{
        key_to_token, ArithmeticOps, CalcError, CalcResult, CalculatorEngine, EngineState,
        FirstOperand, KeypadLayout, Operator, Token,
    };
    pub use crate::driver::CalculatorDriver;

    #[cfg(feature = "tui")]
    pub use crate::driver::TuiDriver;

    pub use crate::wasm::{DomElement, DomEvent, MockDom, WasmCalculator, WasmDriver};
}

#[cfg(test)]
mod tests {
    use super::prelude::*;

    #[test]
    fn test_prelude_imports() {
        let mut engine = CalculatorEngine::new();
        engine.feed([Token::Digit(2), Token::Operator(Operator::Add), Token::Digit(3)]);
        assert_eq!(engine.handle_input(Token::Equals), "5");
    }

    #[test]
    fn test_arithmetic_direct() {
        assert_eq!(ArithmeticOps::multiply(6.0, 7.0), 42.0);
        assert_eq!(ArithmeticOps::divide(1.0, 0.0), Err(CalcError::DivisionByZero));
    }

    #[test]
    fn test_keyboard_and_button_share_vocabulary() {
        let layout = KeypadLayout::new();
        for def in layout.buttons() {
            assert_eq!(key_to_token(&def.label()), Some(def.token));
        }
    }

    #[test]
    fn test_drivers_agree() {
        let mut wasm = WasmDriver::new();
        wasm.press_all("9*9=");
        assert_eq!(wasm.display(), "81");

        #[cfg(feature = "tui")]
        {
            let mut tui = TuiDriver::new();
            tui.press_all("9*9=");
            assert_eq!(tui.display(), wasm.display());
        }
    }

    #[test]
    fn test_config_round_trip_through_engine() {
        let config = CalculatorConfig::from_json(r#"{"error_text":"E"}"#).unwrap();
        let mut calc = WasmCalculator::with_config(&config);
        for key in ["4", "/", "0", "Enter"] {
            calc.handle_key(key);
        }
        assert_eq!(calc.display(), "E");
        assert_eq!(calc.state().display, "E");
    }
}
