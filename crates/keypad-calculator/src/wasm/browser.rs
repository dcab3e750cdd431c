//! Browser WASM bindings for Calculator
//!
//! The real-page counterpart of [`super::WasmDriver`]. Button clicks arrive
//! through the exported methods; keyboard input through a window `keydown`
//! listener that lives exactly as long as the [`KeyboardListener`] guard.

use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{console, KeyboardEvent, Window};

use super::calculator::WasmCalculator;
use super::dom::DISPLAY_ID;
use crate::core::Token;

/// Browser Calculator - the main WASM entry point
#[derive(Debug)]
#[wasm_bindgen]
pub struct BrowserCalculator {
    calculator: Rc<RefCell<WasmCalculator>>,
    listener: Option<KeyboardListener>,
}

#[wasm_bindgen]
impl BrowserCalculator {
    /// Create a new browser calculator
    #[wasm_bindgen(constructor)]
    pub fn new() -> Self {
        console_error_panic_hook::set_once();

        Self {
            calculator: Rc::new(RefCell::new(WasmCalculator::new())),
            listener: None,
        }
    }

    /// Current display text
    #[wasm_bindgen(getter)]
    pub fn display(&self) -> String {
        self.calculator.borrow().display().to_string()
    }

    /// Press a button by its one-character label
    ///
    /// Returns the new display, or `undefined` if the label is unknown.
    pub fn press(&self, label: &str) -> Option<String> {
        let token: Token = label.parse().ok()?;
        let display = self.calculator.borrow_mut().handle_token(token).to_string();
        render_display(&display);
        Some(display)
    }

    /// Handle a keypad button click by element ID
    pub fn handle_button(&self, button_id: &str) -> Option<String> {
        let display = self
            .calculator
            .borrow_mut()
            .handle_button(button_id)?
            .to_string();
        render_display(&display);
        Some(display)
    }

    /// Handle a keyboard key press
    pub fn handle_key(&self, key: &str) -> Option<String> {
        handle_key_shared(&self.calculator, key)
    }

    /// Clear all state
    pub fn clear(&self) {
        self.calculator.borrow_mut().clear();
        render_display("");
    }

    /// Engine state as JSON
    pub fn state_json(&self) -> String {
        self.calculator.borrow().state_json()
    }

    /// Subscribe to window keydown events
    ///
    /// # Errors
    ///
    /// Fails when there is no window or the listener cannot be registered.
    pub fn activate(&mut self) -> Result<(), JsValue> {
        if self.listener.is_none() {
            self.listener = Some(KeyboardListener::attach(Rc::clone(&self.calculator))?);
        }
        Ok(())
    }

    /// Release the keydown subscription
    pub fn deactivate(&mut self) {
        self.listener = None;
    }

    /// Whether the keydown subscription is held
    #[wasm_bindgen(getter)]
    pub fn active(&self) -> bool {
        self.listener.is_some()
    }
}

impl Default for BrowserCalculator {
    fn default() -> Self {
        Self::new()
    }
}

/// Window `keydown` subscription; removed from the window on drop
struct KeyboardListener {
    window: Window,
    callback: Closure<dyn FnMut(KeyboardEvent)>,
}

impl KeyboardListener {
    fn attach(calculator: Rc<RefCell<WasmCalculator>>) -> Result<Self, JsValue> {
        let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;
        let callback = Closure::<dyn FnMut(KeyboardEvent)>::new(move |event: KeyboardEvent| {
            handle_key_shared(&calculator, &event.key());
        });
        window.add_event_listener_with_callback("keydown", callback.as_ref().unchecked_ref())?;
        Ok(Self { window, callback })
    }
}

impl Drop for KeyboardListener {
    fn drop(&mut self) {
        let removed = self.window.remove_event_listener_with_callback(
            "keydown",
            self.callback.as_ref().unchecked_ref(),
        );
        if removed.is_err() {
            console::warn_1(&"failed to remove keydown listener".into());
        }
    }
}

impl fmt::Debug for KeyboardListener {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("KeyboardListener").finish_non_exhaustive()
    }
}

fn handle_key_shared(calculator: &RefCell<WasmCalculator>, key: &str) -> Option<String> {
    let display = calculator.borrow_mut().handle_key(key)?.to_string();
    render_display(&display);
    Some(display)
}

/// Writes the display text into the page's readout element, if present
fn render_display(text: &str) {
    let element = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id(DISPLAY_ID));
    if let Some(element) = element {
        element.set_text_content(Some(text));
    }
}

/// Initialize the calculator in the browser
#[wasm_bindgen(start)]
pub fn init() {
    console_error_panic_hook::set_once();
    console::log_1(&"Calculator WASM initialized".into());
}
