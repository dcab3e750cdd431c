//! Keypad layout shared by the browser and terminal front ends
//!
//! Layout:
//! ```text
//! [ 7 ] [ 8 ] [ 9 ] [ / ]
//! [ 4 ] [ 5 ] [ 6 ] [ * ]
//! [ 1 ] [ 2 ] [ 3 ] [ - ]
//! [ 0 ] [ . ] [ = ] [ + ]
//!                   [ C ]
//! ```

use super::{Operator, Token};

/// A single keypad button definition
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeypadButtonDef {
    /// The token this button feeds to the engine
    pub token: Token,
    /// The DOM element ID for this button
    pub id: String,
    /// Grid row (0-indexed)
    pub row: usize,
    /// Grid column (0-indexed)
    pub col: usize,
}

impl KeypadButtonDef {
    /// Creates a new button definition
    #[must_use]
    pub fn new(token: Token, row: usize, col: usize) -> Self {
        Self {
            token,
            id: button_id(token),
            row,
            col,
        }
    }

    /// Returns the button label
    #[must_use]
    pub fn label(&self) -> String {
        self.token.label()
    }
}

/// Returns the element ID for a token's button
#[must_use]
pub fn button_id(token: Token) -> String {
    match token {
        Token::Digit(d) => format!("btn-{d}"),
        Token::Decimal => "btn-decimal".to_string(),
        Token::Operator(op) => format!("btn-{}", op_name(op)),
        Token::Equals => "btn-equals".to_string(),
        Token::Clear => "btn-clear".to_string(),
    }
}

const fn op_name(op: Operator) -> &'static str {
    match op {
        Operator::Add => "plus",
        Operator::Subtract => "minus",
        Operator::Multiply => "times",
        Operator::Divide => "divide",
    }
}

/// Button grid: sixteen buttons in four rows, then the clear button alone on
/// a fifth row under the operator column
#[derive(Debug, Clone)]
pub struct KeypadLayout {
    buttons: Vec<KeypadButtonDef>,
    rows: usize,
    cols: usize,
}

impl Default for KeypadLayout {
    fn default() -> Self {
        Self::new()
    }
}

impl KeypadLayout {
    /// Labels of the sixteen grid buttons in row-major order
    pub const GRID: [char; 16] = [
        '7', '8', '9', '/', //
        '4', '5', '6', '*', //
        '1', '2', '3', '-', //
        '0', '.', '=', '+',
    ];

    /// Creates the standard layout
    #[must_use]
    pub fn new() -> Self {
        let cols = 4;
        let mut buttons: Vec<KeypadButtonDef> = Self::GRID
            .iter()
            .enumerate()
            .filter_map(|(i, &c)| {
                Token::from_char(c).map(|t| KeypadButtonDef::new(t, i / cols, i % cols))
            })
            .collect();
        buttons.push(KeypadButtonDef::new(Token::Clear, 4, cols - 1));

        Self {
            buttons,
            rows: 5,
            cols,
        }
    }

    /// Returns the number of buttons
    #[must_use]
    pub fn button_count(&self) -> usize {
        self.buttons.len()
    }

    /// Returns the grid dimensions (rows, cols)
    #[must_use]
    pub const fn dimensions(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    /// Gets all button definitions
    #[must_use]
    pub fn buttons(&self) -> &[KeypadButtonDef] {
        &self.buttons
    }

    /// Gets a button by index
    #[must_use]
    pub fn get_button(&self, index: usize) -> Option<&KeypadButtonDef> {
        self.buttons.get(index)
    }

    /// Gets a button by row and column; empty cells return `None`
    #[must_use]
    pub fn get_button_at(&self, row: usize, col: usize) -> Option<&KeypadButtonDef> {
        self.buttons.iter().find(|b| b.row == row && b.col == col)
    }

    /// Finds a button by element ID
    #[must_use]
    pub fn find_by_id(&self, id: &str) -> Option<&KeypadButtonDef> {
        self.buttons.iter().find(|b| b.id == id)
    }

    /// Finds the index of the button for a token
    #[must_use]
    pub fn position_of(&self, token: Token) -> Option<usize> {
        self.buttons.iter().position(|b| b.token == token)
    }

    /// Finds the button for a token
    #[must_use]
    pub fn find_by_token(&self, token: Token) -> Option<&KeypadButtonDef> {
        self.position_of(token).and_then(|i| self.buttons.get(i))
    }
}
