//! Input token vocabulary shared by every front end
//!
//! Buttons and keyboard keys both reduce to a [`Token`] before they reach the
//! engine, so "7" pressed on screen and "7" typed on a keyboard are the same
//! event.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::Operator;

/// A single unit of user input
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Token {
    /// A digit 0-9
    Digit(u8),
    /// The decimal point
    Decimal,
    /// One of the four binary operators
    Operator(Operator),
    /// Resolve the pending calculation
    Equals,
    /// Reset the calculator
    Clear,
}

impl Token {
    /// Parses a single character label
    #[must_use]
    pub fn from_char(c: char) -> Option<Self> {
        match c {
            '0'..='9' => c.to_digit(10).map(|d| Self::Digit(d as u8)),
            '.' => Some(Self::Decimal),
            '=' => Some(Self::Equals),
            'C' => Some(Self::Clear),
            _ => Operator::from_symbol(c).map(Self::Operator),
        }
    }

    /// Returns the character this token appends to the display, if any
    #[must_use]
    pub fn to_char(self) -> Option<char> {
        match self {
            Self::Digit(d) => char::from_digit(u32::from(d), 10),
            Self::Decimal => Some('.'),
            Self::Operator(op) => Some(op.symbol()),
            Self::Equals | Self::Clear => None,
        }
    }

    /// Returns the button label for this token
    #[must_use]
    pub fn label(self) -> String {
        match self {
            Self::Equals => "=".to_string(),
            Self::Clear => "C".to_string(),
            other => other.to_char().map(String::from).unwrap_or_default(),
        }
    }

    /// Returns true for digit and decimal-point tokens
    #[must_use]
    pub const fn is_operand_char(self) -> bool {
        matches!(self, Self::Digit(_) | Self::Decimal)
    }
}

impl std::fmt::Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.label())
    }
}

/// Error returned when a label is not part of the vocabulary
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown token: {0:?}")]
pub struct UnknownToken(pub String);

impl FromStr for Token {
    type Err = UnknownToken;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => Self::from_char(c).ok_or_else(|| UnknownToken(s.to_string())),
            _ => Err(UnknownToken(s.to_string())),
        }
    }
}

/// Maps a keyboard key name to a token
///
/// `Enter` evaluates, `Backspace` clears, and any key whose text is a button
/// label maps to that button. Everything else is ignored.
#[must_use]
pub fn key_to_token(key: &str) -> Option<Token> {
    match key {
        "Enter" => Some(Token::Equals),
        "Backspace" => Some(Token::Clear),
        other => other.parse().ok(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_char_digits() {
        for d in 0..=9u8 {
            let c = char::from_digit(u32::from(d), 10).unwrap();
            assert_eq!(Token::from_char(c), Some(Token::Digit(d)));
        }
    }

    #[test]
    fn test_from_char_symbols() {
        assert_eq!(Token::from_char('.'), Some(Token::Decimal));
        assert_eq!(Token::from_char('='), Some(Token::Equals));
        assert_eq!(Token::from_char('C'), Some(Token::Clear));
        assert_eq!(
            Token::from_char('/'),
            Some(Token::Operator(Operator::Divide))
        );
    }

    #[test]
    fn test_from_char_unknown() {
        assert_eq!(Token::from_char('c'), None);
        assert_eq!(Token::from_char('x'), None);
        assert_eq!(Token::from_char('('), None);
        assert_eq!(Token::from_char(' '), None);
    }

    #[test]
    fn test_to_char() {
        assert_eq!(Token::Digit(4).to_char(), Some('4'));
        assert_eq!(Token::Decimal.to_char(), Some('.'));
        assert_eq!(Token::Operator(Operator::Add).to_char(), Some('+'));
        assert_eq!(Token::Equals.to_char(), None);
        assert_eq!(Token::Clear.to_char(), None);
    }

    #[test]
    fn test_labels() {
        assert_eq!(Token::Digit(0).label(), "0");
        assert_eq!(Token::Equals.label(), "=");
        assert_eq!(Token::Clear.label(), "C");
        assert_eq!(Token::Operator(Operator::Multiply).to_string(), "*");
    }

    #[test]
    fn test_is_operand_char() {
        assert!(Token::Digit(1).is_operand_char());
        assert!(Token::Decimal.is_operand_char());
        assert!(!Token::Equals.is_operand_char());
        assert!(!Token::Operator(Operator::Add).is_operand_char());
    }

    #[test]
    fn test_from_str() {
        assert_eq!("7".parse::<Token>(), Ok(Token::Digit(7)));
        assert_eq!("=".parse::<Token>(), Ok(Token::Equals));
        assert!("77".parse::<Token>().is_err());
        assert!("".parse::<Token>().is_err());
        assert_eq!(
            "Enter".parse::<Token>(),
            Err(UnknownToken("Enter".to_string()))
        );
    }

    #[test]
    fn test_key_to_token_special_keys() {
        assert_eq!(key_to_token("Enter"), Some(Token::Equals));
        assert_eq!(key_to_token("Backspace"), Some(Token::Clear));
    }

    #[test]
    fn test_key_to_token_button_keys() {
        assert_eq!(key_to_token("7"), Some(Token::Digit(7)));
        assert_eq!(key_to_token("."), Some(Token::Decimal));
        assert_eq!(key_to_token("="), Some(Token::Equals));
        assert_eq!(key_to_token("C"), Some(Token::Clear));
        assert_eq!(
            key_to_token("-"),
            Some(Token::Operator(Operator::Subtract))
        );
    }

    #[test]
    fn test_key_to_token_ignored() {
        assert_eq!(key_to_token("Escape"), None);
        assert_eq!(key_to_token("Shift"), None);
        assert_eq!(key_to_token("ArrowLeft"), None);
        assert_eq!(key_to_token("a"), None);
        assert_eq!(key_to_token(""), None);
    }

    #[test]
    fn test_token_serde() {
        let json = serde_json::to_string(&Token::Operator(Operator::Add)).unwrap();
        let back: Token = serde_json::from_str(&json).unwrap();
        assert_eq!(back, Token::Operator(Operator::Add));
    }
}
