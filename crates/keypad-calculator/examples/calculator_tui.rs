//! Calculator TUI Example
//!
//! Keyboard: digits, `. + - * / = C`, Enter evaluates, Backspace clears,
//! Esc or Ctrl+Q quits. Mouse clicks press keypad buttons.
//!
//! Run with: cargo run --example calculator_tui
//!
//! Set `KEYPAD_CALC_CONFIG` to a JSON config file to override defaults.
//! Logs go to stderr; redirect them (`2>calc.log`) to keep the screen clean.

use std::io;

use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, MouseButton, MouseEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use keypad_calculator::config::CalculatorConfig;
use keypad_calculator::tui::{render, CalculatorApp, InputHandler, Keypad, UiAreas};
use ratatui::{backend::CrosstermBackend, Terminal};
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = CalculatorConfig::from_env()?;

    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.log_filter))?;
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run_app(&mut terminal, &config);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(err) = result {
        eprintln!("Error: {err}");
    }

    Ok(())
}

fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    config: &CalculatorConfig,
) -> Result<(), Box<dyn std::error::Error>> {
    let mut app = CalculatorApp::with_config(config);
    let input_handler = InputHandler::new();
    let keypad = Keypad::new();
    info!("calculator started");

    loop {
        let frame = terminal.draw(|f| render(&app, f))?;
        let keypad_area = UiAreas::compute(frame.area, app.show_help()).keypad;

        match event::read()? {
            Event::Key(key) => app.apply(input_handler.handle_key(key)),
            Event::Mouse(mouse) if mouse.kind == MouseEventKind::Down(MouseButton::Left) => {
                if let Some(token) = keypad.hit_test(keypad_area, mouse.column, mouse.row) {
                    app.press(token);
                }
            }
            _ => {}
        }

        if app.should_quit() {
            break;
        }
    }

    info!(display = app.display(), "calculator stopped");
    Ok(())
}
