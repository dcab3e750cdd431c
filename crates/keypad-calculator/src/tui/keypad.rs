//! Numerical Keypad for TUI Calculator
//!
//! Draws the shared [`KeypadLayout`] and maps mouse clicks back onto it.
//! The button fed to the engine last is highlighted.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::Span,
    widgets::{Block, Borders, Widget},
};

use crate::core::{KeypadButtonDef, KeypadLayout, Token};

/// Terminal keypad: the shared layout plus the highlighted button
#[derive(Debug, Clone, Default)]
pub struct Keypad {
    layout: KeypadLayout,
    pressed: Option<usize>,
}

impl Keypad {
    /// Creates the standard calculator keypad with nothing highlighted
    #[must_use]
    pub fn new() -> Self {
        Self {
            layout: KeypadLayout::new(),
            pressed: None,
        }
    }

    /// Creates a keypad highlighting the button for `token`, if any
    #[must_use]
    pub fn highlighting(token: Option<Token>) -> Self {
        let mut keypad = Self::new();
        if let Some(token) = token {
            keypad.highlight(token);
        }
        keypad
    }

    /// Returns the button layout
    #[must_use]
    pub const fn layout(&self) -> &KeypadLayout {
        &self.layout
    }

    /// Returns the grid dimensions (rows, cols)
    #[must_use]
    pub const fn dimensions(&self) -> (usize, usize) {
        self.layout.dimensions()
    }

    /// Highlights the button for a token, releasing any other
    pub fn highlight(&mut self, token: Token) {
        self.pressed = self.layout.position_of(token);
    }

    /// Releases the highlighted button
    pub fn release_all(&mut self) {
        self.pressed = None;
    }

    /// Returns the highlighted button
    #[must_use]
    pub fn pressed(&self) -> Option<&KeypadButtonDef> {
        self.pressed.and_then(|i| self.layout.get_button(i))
    }

    /// Returns true if the button at `index` is highlighted
    #[must_use]
    pub fn is_pressed(&self, index: usize) -> bool {
        self.pressed == Some(index)
    }

    /// Converts a click position inside the keypad block to a token
    #[must_use]
    pub fn hit_test(&self, area: Rect, x: u16, y: u16) -> Option<Token> {
        if x < area.x || y < area.y || x >= area.x + area.width || y >= area.y + area.height {
            return None;
        }

        let rel_x = x - area.x;
        let rel_y = y - area.y;

        // Border
        if rel_x == 0 || rel_y == 0 || rel_x >= area.width - 1 || rel_y >= area.height - 1 {
            return None;
        }

        let (rows, cols) = self.dimensions();
        let btn_width = (area.width - 2) / cols as u16;
        let btn_height = (area.height - 2) / rows as u16;

        if btn_width == 0 || btn_height == 0 {
            return None;
        }

        let col = ((rel_x - 1) / btn_width) as usize;
        let row = ((rel_y - 1) / btn_height) as usize;

        self.layout.get_button_at(row, col).map(|b| b.token)
    }
}

fn button_style(token: Token) -> Style {
    match token {
        Token::Digit(_) | Token::Decimal => Style::default().fg(Color::White),
        Token::Operator(_) => Style::default().fg(Color::Yellow),
        Token::Equals => Style::default().fg(Color::Green),
        Token::Clear => Style::default().fg(Color::Red),
    }
}

/// Keypad widget for rendering
#[derive(Debug)]
pub struct KeypadWidget<'a> {
    keypad: &'a Keypad,
}

impl<'a> KeypadWidget<'a> {
    /// Creates a new keypad widget
    #[must_use]
    pub const fn new(keypad: &'a Keypad) -> Self {
        Self { keypad }
    }
}

impl Widget for KeypadWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        Block::default()
            .title(" Keypad ")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Cyan))
            .render(area, buf);

        let inner = Rect {
            x: area.x + 1,
            y: area.y + 1,
            width: area.width.saturating_sub(2),
            height: area.height.saturating_sub(2),
        };

        let (rows, cols) = self.keypad.dimensions();
        let btn_width = inner.width / cols as u16;
        let btn_height = inner.height / rows as u16;

        // Too small to render
        if btn_width < 3 || btn_height == 0 {
            return;
        }

        for (index, def) in self.keypad.layout().buttons().iter().enumerate() {
            let x = inner.x + def.col as u16 * btn_width;
            let y = inner.y + def.row as u16 * btn_height;

            let style = if self.keypad.is_pressed(index) {
                Style::default()
                    .fg(Color::Black)
                    .bg(Color::Yellow)
                    .add_modifier(Modifier::BOLD)
            } else {
                button_style(def.token)
            };

            let label = format!("[{}]", def.label());
            let label_x = x + btn_width.saturating_sub(label.len() as u16) / 2;
            let label_y = y + btn_height / 2;

            if label_y < inner.y + inner.height && label_x < inner.x + inner.width {
                buf.set_span(label_x, label_y, &Span::styled(label, style), btn_width);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Operator;

    fn buf_to_string(buf: &Buffer) -> String {
        buf.content().iter().map(|c| c.symbol()).collect()
    }

    fn render_keypad(keypad: &Keypad, area: Rect) -> Buffer {
        let mut buf = Buffer::empty(area);
        KeypadWidget::new(keypad).render(area, &mut buf);
        buf
    }

    // ===== Keypad tests =====

    #[test]
    fn test_keypad_new() {
        let keypad = Keypad::new();
        assert_eq!(keypad.dimensions(), (5, 4));
        assert_eq!(keypad.layout().button_count(), 17);
        assert!(keypad.pressed().is_none());
    }

    #[test]
    fn test_highlight() {
        let mut keypad = Keypad::new();
        keypad.highlight(Token::Digit(7));
        assert!(keypad.is_pressed(0));
        assert_eq!(keypad.pressed().map(|b| b.token), Some(Token::Digit(7)));
    }

    #[test]
    fn test_highlight_releases_previous() {
        let mut keypad = Keypad::new();
        keypad.highlight(Token::Digit(7));
        keypad.highlight(Token::Operator(Operator::Add));
        assert!(!keypad.is_pressed(0));
        assert_eq!(
            keypad.pressed().map(|b| b.token),
            Some(Token::Operator(Operator::Add))
        );
    }

    #[test]
    fn test_release_all() {
        let mut keypad = Keypad::highlighting(Some(Token::Clear));
        assert!(keypad.pressed().is_some());
        keypad.release_all();
        keypad.release_all();
        assert!(keypad.pressed().is_none());
    }

    #[test]
    fn test_highlighting_none() {
        let keypad = Keypad::highlighting(None);
        assert!(keypad.pressed().is_none());
    }

    // ===== Hit testing =====

    #[test]
    fn test_hit_test_grid_buttons() {
        let keypad = Keypad::new();
        let area = Rect::new(0, 0, 22, 12);
        assert_eq!(keypad.hit_test(area, 3, 2), Some(Token::Digit(7)));
        assert_eq!(
            keypad.hit_test(area, 18, 2),
            Some(Token::Operator(Operator::Divide))
        );
        assert_eq!(keypad.hit_test(area, 13, 8), Some(Token::Equals));
    }

    #[test]
    fn test_hit_test_clear_row() {
        let keypad = Keypad::new();
        let area = Rect::new(0, 0, 22, 12);
        assert_eq!(keypad.hit_test(area, 18, 10), Some(Token::Clear));
        assert_eq!(keypad.hit_test(area, 3, 10), None);
        assert_eq!(keypad.hit_test(area, 13, 10), None);
    }

    #[test]
    fn test_hit_test_outside() {
        let keypad = Keypad::new();
        let area = Rect::new(10, 5, 22, 12);
        assert_eq!(keypad.hit_test(area, 0, 0), None);
        assert_eq!(keypad.hit_test(area, 40, 8), None);
        assert_eq!(keypad.hit_test(area, 15, 30), None);
    }

    #[test]
    fn test_hit_test_border() {
        let keypad = Keypad::new();
        let area = Rect::new(0, 0, 22, 12);
        assert_eq!(keypad.hit_test(area, 0, 5), None);
        assert_eq!(keypad.hit_test(area, 5, 0), None);
        assert_eq!(keypad.hit_test(area, 21, 5), None);
        assert_eq!(keypad.hit_test(area, 5, 11), None);
    }

    #[test]
    fn test_hit_test_too_small() {
        let keypad = Keypad::new();
        assert_eq!(keypad.hit_test(Rect::new(0, 0, 4, 4), 1, 1), None);
    }

    #[test]
    fn test_hit_test_every_button_reachable() {
        let keypad = Keypad::new();
        let area = Rect::new(0, 0, 22, 12);
        for def in keypad.layout().buttons() {
            let x = 1 + def.col as u16 * 5 + 2;
            let y = 1 + def.row as u16 * 2;
            assert_eq!(keypad.hit_test(area, x, y), Some(def.token));
        }
    }

    // ===== KeypadWidget tests =====

    #[test]
    fn test_keypad_widget_render() {
        let keypad = Keypad::new();
        let content = buf_to_string(&render_keypad(&keypad, Rect::new(0, 0, 22, 12)));
        assert!(content.contains("Keypad"));
        for def in keypad.layout().buttons() {
            let label = format!("[{}]", def.label());
            assert!(content.contains(&label), "missing {label}");
        }
    }

    #[test]
    fn test_keypad_widget_render_small() {
        let keypad = Keypad::new();
        let content = buf_to_string(&render_keypad(&keypad, Rect::new(0, 0, 5, 5)));
        assert!(!content.contains("[7]"));
    }

    #[test]
    fn test_keypad_widget_render_pressed() {
        let keypad = Keypad::highlighting(Some(Token::Digit(7)));
        let buf = render_keypad(&keypad, Rect::new(0, 0, 22, 12));
        // "[7]" starts at column 2 of the first button row
        let cell = &buf[(2, 2)];
        assert_eq!(cell.symbol(), "[");
        assert_eq!(cell.bg, Color::Yellow);

        let other = &buf[(7, 2)];
        assert_eq!(other.symbol(), "[");
        assert_ne!(other.bg, Color::Yellow);
    }

    #[test]
    fn test_clear_renders_under_operator_column() {
        let keypad = Keypad::new();
        let buf = render_keypad(&keypad, Rect::new(0, 0, 22, 12));
        assert_eq!(buf[(18, 10)].symbol(), "C");
    }
}
