//! TUI rendering
//!
//! One column: the display readout, the keypad under it and an optional
//! help line.

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::Span,
    widgets::{Block, Borders, Paragraph, Widget},
    Frame,
};

use super::app::CalculatorApp;
use super::keypad::{Keypad, KeypadWidget};

/// Window title
pub const TITLE: &str = " Calculator App ";

/// Key help shown under the keypad
pub const HELP_LINE: &str = "Enter: =  Backspace: C  Esc/Ctrl+Q: quit";

/// Width of the keypad block
pub const KEYPAD_WIDTH: u16 = 26;

/// Height of the keypad block
pub const KEYPAD_HEIGHT: u16 = 12;

/// Screen regions for one frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UiAreas {
    /// Display readout block
    pub display: Rect,
    /// Keypad block
    pub keypad: Rect,
    /// Help line, when shown
    pub help: Option<Rect>,
}

impl UiAreas {
    /// Splits the terminal area into regions
    #[must_use]
    pub fn compute(area: Rect, show_help: bool) -> Self {
        let column = Layout::default()
            .direction(Direction::Horizontal)
            .margin(1)
            .constraints([Constraint::Length(KEYPAD_WIDTH), Constraint::Min(0)])
            .split(area)[0];

        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3),
                Constraint::Length(KEYPAD_HEIGHT),
                Constraint::Length(u16::from(show_help)),
                Constraint::Min(0),
            ])
            .split(column);

        Self {
            display: rows[0],
            keypad: rows[1],
            help: show_help.then_some(rows[2]),
        }
    }
}

/// Renders the calculator UI to the frame
pub fn render(app: &CalculatorApp, frame: &mut Frame) {
    let area = frame.area();
    frame.render_widget(CalculatorUI::new(app), area);
}

/// Calculator UI widget
#[derive(Debug)]
pub struct CalculatorUI<'a> {
    app: &'a CalculatorApp,
    keypad: Keypad,
}

impl<'a> CalculatorUI<'a> {
    /// Creates a new calculator UI widget
    #[must_use]
    pub fn new(app: &'a CalculatorApp) -> Self {
        Self {
            app,
            keypad: Keypad::highlighting(app.last_pressed()),
        }
    }

    fn render_display(&self, area: Rect, buf: &mut Buffer) {
        let text = self.app.display();
        let style = if text == self.app.engine().error_text() {
            Style::default().fg(Color::Red)
        } else {
            Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD)
        };

        Paragraph::new(Span::styled(text, style))
            .alignment(Alignment::Right)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(Color::Yellow)),
            )
            .render(area, buf);
    }

    fn render_help(area: Rect, buf: &mut Buffer) {
        Paragraph::new(Span::styled(HELP_LINE, Style::default().fg(Color::DarkGray)))
            .render(area, buf);
    }
}

impl Widget for CalculatorUI<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        Block::default()
            .title(TITLE)
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::White))
            .render(area, buf);

        let areas = UiAreas::compute(area, self.app.show_help());
        self.render_display(areas.display, buf);
        KeypadWidget::new(&self.keypad).render(areas.keypad, buf);
        if let Some(help) = areas.help {
            Self::render_help(help, buf);
        }
    }
}
