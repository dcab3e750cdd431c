//! Calculator engine state machine
//!
//! The engine owns three pieces of state: the display text, the captured
//! first operand and the pending operator. [`CalculatorEngine::handle_input`]
//! is the only transition function. Operands are read back out of the
//! display text, so the display is both the render target and the parse
//! source.
//!
//! ```text
//! display        "12+3"
//!                 ^^     first operand text (span = 2)
//!                   ^    pending operator
//!                    ^   second operand text
//! ```

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use super::number::{format_number, parse_operand};
use super::{CalcError, CalcResult, Operator, Token};
use crate::config::CalculatorConfig;

/// A captured left-hand operand
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FirstOperand {
    /// Numeric value of the operand
    pub value: f64,
    /// Number of display bytes the operand's text covers
    ///
    /// After chaining this covers the whole resolved expression
    /// (`"3+4"` for a first operand of 7).
    pub span: usize,
}

/// Read-only snapshot of the engine for renderers
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EngineState {
    /// Display text
    pub display: String,
    /// Captured first operand value
    pub first_operand: Option<f64>,
    /// Pending operator
    pub current_operation: Option<Operator>,
}

impl EngineState {
    /// Serializes the snapshot as JSON
    ///
    /// NaN operands serialize as `null`.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}

/// Calculator engine - one instance per calculator session
#[derive(Debug, Clone)]
pub struct CalculatorEngine {
    display: String,
    first_operand: Option<FirstOperand>,
    current_operation: Option<Operator>,
    error_text: String,
}

impl Default for CalculatorEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl CalculatorEngine {
    /// Creates an engine with an empty display
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(&CalculatorConfig::default())
    }

    /// Creates an engine using the configured error text
    #[must_use]
    pub fn with_config(config: &CalculatorConfig) -> Self {
        Self {
            display: String::new(),
            first_operand: None,
            current_operation: None,
            error_text: config.error_text.clone(),
        }
    }

    /// Current display text
    #[must_use]
    pub fn display(&self) -> &str {
        &self.display
    }

    /// Captured first operand, if any
    #[must_use]
    pub const fn first_operand(&self) -> Option<FirstOperand> {
        self.first_operand
    }

    /// Pending operator, if any
    #[must_use]
    pub const fn current_operation(&self) -> Option<Operator> {
        self.current_operation
    }

    /// True while a first operand and an operator await resolution
    #[must_use]
    pub const fn is_pending(&self) -> bool {
        self.first_operand.is_some() && self.current_operation.is_some()
    }

    /// Text shown when a division by zero is caught
    #[must_use]
    pub fn error_text(&self) -> &str {
        &self.error_text
    }

    /// Snapshot of the current state
    #[must_use]
    pub fn snapshot(&self) -> EngineState {
        EngineState {
            display: self.display.clone(),
            first_operand: self.first_operand.map(|f| f.value),
            current_operation: self.current_operation,
        }
    }

    /// Advances the state machine by one token and returns the new display
    pub fn handle_input(&mut self, token: Token) -> &str {
        match token {
            Token::Operator(op) => self.press_operator(op),
            Token::Equals => self.press_equals(),
            Token::Clear => self.reset(),
            Token::Digit(_) | Token::Decimal => {
                if let Some(c) = token.to_char() {
                    self.display.push(c);
                }
            }
        }
        debug!(%token, display = %self.display, pending = self.is_pending(), "handled input");
        &self.display
    }

    /// Feeds a character; characters outside the vocabulary are ignored
    pub fn handle_char(&mut self, c: char) -> Option<&str> {
        let token = Token::from_char(c)?;
        Some(self.handle_input(token))
    }

    /// Feeds a sequence of tokens and returns the final display
    pub fn feed<I>(&mut self, tokens: I) -> &str
    where
        I: IntoIterator<Item = Token>,
    {
        for token in tokens {
            self.handle_input(token);
        }
        &self.display
    }

    /// Resets to the initial state
    pub fn reset(&mut self) {
        self.display.clear();
        self.first_operand = None;
        self.current_operation = None;
    }

    fn press_operator(&mut self, op: Operator) {
        match (self.first_operand, self.current_operation) {
            (None, _) => {
                self.first_operand = Some(FirstOperand {
                    value: parse_operand(&self.display),
                    span: self.display.len(),
                });
            }
            (Some(first), Some(pending)) => match resolve(first, pending, &self.display) {
                Ok(value) => {
                    self.first_operand = Some(FirstOperand {
                        value,
                        span: self.display.len(),
                    });
                }
                Err(err) => {
                    // The stale first operand stays; only the operator moves on
                    self.current_operation = Some(op);
                    self.show_error(err);
                    return;
                }
            },
            (Some(_), None) => {}
        }
        self.current_operation = Some(op);
        self.display.push(op.symbol());
    }

    fn press_equals(&mut self) {
        let (Some(first), Some(op)) = (self.first_operand, self.current_operation) else {
            return;
        };
        let outcome = resolve(first, op, &self.display);
        self.first_operand = None;
        self.current_operation = None;
        match outcome {
            Ok(value) => self.display = format_number(value),
            Err(err) => self.show_error(err),
        }
    }

    fn show_error(&mut self, err: CalcError) {
        warn!(error = %err, display = %self.display, "calculation failed");
        self.display.clone_from(&self.error_text);
    }
}

/// Resolves the pending calculation against the display text
///
/// The second operand starts right after the first operand's text and the
/// operator character. A display too short to hold one reads as NaN.
fn resolve(first: FirstOperand, op: Operator, display: &str) -> CalcResult<f64> {
    let second = display.get(first.span + 1..).unwrap_or("");
    op.apply(first.value, parse_operand(second))
}
