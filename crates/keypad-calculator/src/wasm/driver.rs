//! WASM Driver - Unified Testing Interface
//!
//! Drives a [`WasmCalculator`] through the [`MockDom`] the way a page would:
//! clicks and key presses are dispatched as DOM events, handled, and the
//! display readout is re-rendered.
//!
//! Keyboard input only reaches the calculator while the window keydown
//! listener is subscribed. [`WasmDriver::new`] subscribes (the page is
//! mounted); [`WasmDriver::deactivate`] and `Drop` release it.

use tracing::trace;

use super::calculator::WasmCalculator;
use super::dom::{DomEvent, ListenerId, MockDom, DISPLAY_ID};
use crate::config::CalculatorConfig;
use crate::core::{button_id, Operator, Token};
use crate::driver::CalculatorDriver;

/// WASM Driver wrapping calculator and mock DOM
#[derive(Debug)]
pub struct WasmDriver {
    calculator: WasmCalculator,
    dom: MockDom,
    key_listener: Option<ListenerId>,
}

impl Default for WasmDriver {
    fn default() -> Self {
        Self::new()
    }
}

impl WasmDriver {
    /// Creates a mounted WASM driver
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(&CalculatorConfig::default())
    }

    /// Creates a mounted WASM driver from configuration
    #[must_use]
    pub fn with_config(config: &CalculatorConfig) -> Self {
        let calculator = WasmCalculator::with_config(config);
        let dom = MockDom::calculator(calculator.keypad().layout());
        let mut driver = Self {
            calculator,
            dom,
            key_listener: None,
        };
        driver.activate();
        driver.sync_dom();
        driver
    }

    /// Returns a reference to the calculator
    #[must_use]
    pub const fn calculator(&self) -> &WasmCalculator {
        &self.calculator
    }

    /// Returns a reference to the DOM
    #[must_use]
    pub const fn dom(&self) -> &MockDom {
        &self.dom
    }

    /// Subscribes the keyboard listener; no-op if already subscribed
    pub fn activate(&mut self) {
        if self.key_listener.is_none() {
            self.key_listener = Some(self.dom.add_key_listener());
        }
    }

    /// Releases the keyboard listener
    pub fn deactivate(&mut self) {
        if let Some(id) = self.key_listener.take() {
            self.dom.remove_key_listener(id);
        }
    }

    /// True while keyboard events reach the calculator
    #[must_use]
    pub const fn is_active(&self) -> bool {
        self.key_listener.is_some()
    }

    /// Simulates clicking a keypad button by element ID
    pub fn click_button(&mut self, element_id: &str) {
        self.dom.dispatch_event(DomEvent::click(element_id));
        if self.calculator.handle_button(element_id).is_some() {
            self.sync_dom();
        }
    }

    /// Simulates a window keydown event
    pub fn key_down(&mut self, key: &str) {
        self.dom.dispatch_event(DomEvent::key_down(key));
        if !self.is_active() {
            trace!(key, "keydown with no listener");
            return;
        }
        if self.calculator.handle_key(key).is_some() {
            self.sync_dom();
        }
    }

    /// Synchronizes the display readout with calculator state
    fn sync_dom(&mut self) {
        self.dom
            .set_element_text(DISPLAY_ID, self.calculator.display());
    }

    /// Gets the display element's text
    #[must_use]
    pub fn display_element_text(&self) -> Option<&str> {
        self.dom.get_element_text(DISPLAY_ID)
    }
}

impl Drop for WasmDriver {
    fn drop(&mut self) {
        self.deactivate();
    }
}

impl CalculatorDriver for WasmDriver {
    fn press(&mut self, token: Token) {
        self.click_button(&button_id(token));
    }

    fn press_key(&mut self, key: &str) {
        self.key_down(key);
    }

    fn display(&self) -> String {
        self.calculator.display().to_string()
    }

    fn first_operand(&self) -> Option<f64> {
        self.calculator.engine().first_operand().map(|f| f.value)
    }

    fn current_operation(&self) -> Option<Operator> {
        self.calculator.engine().current_operation()
    }
}
