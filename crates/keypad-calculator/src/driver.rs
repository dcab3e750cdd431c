//! Unified calculator driver
//!
//! Both front ends implement [`CalculatorDriver`], so one set of behavioural
//! checks runs against each of them.
//!
//! ```rust
//! use keypad_calculator::driver::verify_chaining;
//! use keypad_calculator::wasm::WasmDriver;
//!
//! let mut driver = WasmDriver::new();
//! verify_chaining(&mut driver);
//! ```

use crate::core::{Operator, Token};

/// Abstract driver trait for calculator interactions
pub trait CalculatorDriver {
    /// Presses the button for a token
    fn press(&mut self, token: Token);

    /// Presses a physical key; unmapped keys are ignored
    fn press_key(&mut self, key: &str);

    /// Text currently shown on the display
    fn display(&self) -> String;

    /// Captured first operand value
    fn first_operand(&self) -> Option<f64>;

    /// Pending operator
    fn current_operation(&self) -> Option<Operator>;

    /// Presses the clear button
    fn clear(&mut self) {
        self.press(Token::Clear);
    }

    /// Presses the buttons for every character of `labels`
    fn press_all(&mut self, labels: &str) {
        for token in labels.chars().filter_map(Token::from_char) {
            self.press(token);
        }
    }
}

/// TUI Driver implementation
#[cfg(feature = "tui")]
pub mod tui_driver {
    use super::{CalculatorDriver, Operator, Token};
    use crate::tui::{CalculatorApp, InputHandler};
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

    /// TUI-specific driver wrapping the calculator app
    #[derive(Debug, Default)]
    pub struct TuiDriver {
        app: CalculatorApp,
        input: InputHandler,
    }

    impl TuiDriver {
        /// Creates a new TUI driver
        #[must_use]
        pub fn new() -> Self {
            Self::default()
        }

        /// Creates a TUI driver with an existing app
        #[must_use]
        pub fn with_app(app: CalculatorApp) -> Self {
            Self {
                app,
                input: InputHandler::new(),
            }
        }

        /// Returns a reference to the underlying app
        #[must_use]
        pub const fn app(&self) -> &CalculatorApp {
            &self.app
        }
    }

    impl CalculatorDriver for TuiDriver {
        fn press(&mut self, token: Token) {
            self.app.press(token);
        }

        fn press_key(&mut self, key: &str) {
            let code = match key {
                "Enter" => KeyCode::Enter,
                "Backspace" => KeyCode::Backspace,
                other => {
                    let mut chars = other.chars();
                    match (chars.next(), chars.next()) {
                        (Some(c), None) => KeyCode::Char(c),
                        _ => return,
                    }
                }
            };
            let action = self.input.handle_key(KeyEvent::new(code, KeyModifiers::NONE));
            self.app.apply(action);
        }

        fn display(&self) -> String {
            self.app.display().to_string()
        }

        fn first_operand(&self) -> Option<f64> {
            self.app.engine().first_operand().map(|f| f.value)
        }

        fn current_operation(&self) -> Option<Operator> {
            self.app.engine().current_operation()
        }
    }
}

#[cfg(feature = "tui")]
pub use tui_driver::TuiDriver;

// ===== Unified Behaviour Checks =====
// These work with ANY CalculatorDriver implementation

/// Verifies the four operations through `=`
pub fn verify_basic_arithmetic<D: CalculatorDriver>(driver: &mut D) {
    let cases = [
        ("2+3=", "5"),
        ("10-4=", "6"),
        ("6*7=", "42"),
        ("20/4=", "5"),
        ("1.5+1.25=", "2.75"),
    ];
    for (input, expected) in cases {
        driver.clear();
        driver.press_all(input);
        assert_eq!(driver.display(), expected, "input {input}");
    }
    driver.clear();
}

/// Verifies the division-by-zero message
pub fn verify_division_by_zero<D: CalculatorDriver>(driver: &mut D) {
    driver.clear();
    driver.press_all("9/0=");
    assert_eq!(driver.display(), "Cannot divide by zero");
    assert!(driver.first_operand().is_none());
    assert!(driver.current_operation().is_none());
    driver.clear();
}

/// Verifies left-to-right chaining
pub fn verify_chaining<D: CalculatorDriver>(driver: &mut D) {
    driver.clear();
    driver.press_all("3+4+");
    assert_eq!(driver.display(), "3+4+");
    assert_eq!(driver.first_operand(), Some(7.0));
    assert_eq!(driver.current_operation(), Some(Operator::Add));
    driver.press_all("5=");
    assert_eq!(driver.display(), "12");
    driver.clear();
}

/// Verifies clear returns to the initial state
pub fn verify_clear<D: CalculatorDriver>(driver: &mut D) {
    driver.press_all("12*3");
    driver.clear();
    assert_eq!(driver.display(), "");
    assert!(driver.first_operand().is_none());
    assert!(driver.current_operation().is_none());
}

/// Verifies `=` with nothing pending changes nothing
pub fn verify_noop_equals<D: CalculatorDriver>(driver: &mut D) {
    driver.clear();
    driver.press(Token::Equals);
    assert_eq!(driver.display(), "");
    driver.press_all("42=");
    assert_eq!(driver.display(), "42");
    driver.clear();
}

/// Verifies keyboard input matches button input
pub fn verify_keyboard<D: CalculatorDriver>(driver: &mut D) {
    driver.clear();
    for key in ["8", "*", "5", "Enter"] {
        driver.press_key(key);
    }
    assert_eq!(driver.display(), "40");

    driver.press_key("Shift");
    assert_eq!(driver.display(), "40");

    driver.press_key("Backspace");
    assert_eq!(driver.display(), "");
    assert!(driver.first_operand().is_none());
}

/// Complete verification suite
pub fn run_full_suite<D: CalculatorDriver>(driver: &mut D) {
    verify_basic_arithmetic(driver);
    verify_division_by_zero(driver);
    verify_chaining(driver);
    verify_clear(driver);
    verify_noop_equals(driver);
    verify_keyboard(driver);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wasm::WasmDriver;

    // ===== WASM Driver =====

    #[test]
    fn test_wasm_full_suite() {
        let mut driver = WasmDriver::new();
        run_full_suite(&mut driver);
    }

    #[test]
    fn test_press_all_skips_unknown_labels() {
        let mut driver = WasmDriver::new();
        driver.press_all("1 + x2");
        assert_eq!(driver.display(), "1+2");
    }

    // ===== TUI Driver =====

    #[cfg(feature = "tui")]
    mod tui_tests {
        use super::*;

        #[test]
        fn test_tui_driver_new() {
            let driver = TuiDriver::new();
            assert!(driver.display().is_empty());
        }

        #[test]
        fn test_tui_driver_with_app() {
            let mut app = crate::tui::CalculatorApp::new();
            app.press(Token::Digit(4));
            let driver = TuiDriver::with_app(app);
            assert_eq!(driver.display(), "4");
            assert_eq!(driver.app().display(), "4");
        }

        #[test]
        fn test_tui_press_key_multi_char_ignored() {
            let mut driver = TuiDriver::new();
            driver.press_key("ArrowUp");
            assert!(driver.display().is_empty());
        }

        #[test]
        fn test_unified_basic_arithmetic() {
            verify_basic_arithmetic(&mut TuiDriver::new());
        }

        #[test]
        fn test_unified_division_by_zero() {
            verify_division_by_zero(&mut TuiDriver::new());
        }

        #[test]
        fn test_unified_chaining() {
            verify_chaining(&mut TuiDriver::new());
        }

        #[test]
        fn test_unified_keyboard() {
            verify_keyboard(&mut TuiDriver::new());
        }

        #[test]
        fn test_full_suite() {
            run_full_suite(&mut TuiDriver::new());
        }

        #[test]
        fn test_button_and_key_equivalence() {
            let mut by_button = TuiDriver::new();
            let mut by_key = WasmDriver::new();
            by_button.press(Token::Digit(7));
            by_key.press_key("7");
            assert_eq!(by_button.display(), by_key.display());
            assert_eq!(by_button.first_operand(), by_key.first_operand());
            assert_eq!(by_button.current_operation(), by_key.current_operation());
        }
    }
}
