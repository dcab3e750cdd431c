//! Core calculator module
//!
//! Everything here is platform independent: the arithmetic, the token
//! vocabulary and the engine state machine. Front ends in [`crate::wasm`]
//! and `crate::tui` only translate events into [`Token`]s and render
//! [`CalculatorEngine::display`].

pub mod engine;
pub mod keypad;
pub mod number;
mod operations;
pub mod token;

pub use engine::{CalculatorEngine, EngineState, FirstOperand};
pub use keypad::{button_id, KeypadButtonDef, KeypadLayout};
pub use number::{format_number, parse_operand};
pub use operations::{ArithmeticOps, Operator};
pub use token::{key_to_token, Token, UnknownToken};

use thiserror::Error;

/// Result type for calculator operations
pub type CalcResult<T> = Result<T, CalcError>;

/// Calculator error types
///
/// Division by zero is the only failure the arithmetic can produce. The
/// engine turns it into display text, so callers of
/// [`CalculatorEngine::handle_input`] never see it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum CalcError {
    /// Division by zero attempted
    #[error("Division by zero")]
    DivisionByZero,
}
