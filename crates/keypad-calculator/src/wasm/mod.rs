//! WASM Frontend for Calculator
//!
//! The browser page: a display readout above the keypad, fed by button
//! clicks and window keydown events. [`MockDom`] models the page natively;
//! `BrowserCalculator` binds to a real page with the `wasm` feature.

#[cfg(feature = "wasm")]
mod browser;
mod calculator;
mod dom;
mod driver;
mod keypad;

#[cfg(feature = "wasm")]
pub use browser::BrowserCalculator;
pub use calculator::WasmCalculator;
pub use dom::{
    DomElement, DomEvent, ListenerId, MockDom, CLEAR_ROW_ID, DISPLAY_ID, KEYPAD_ID, PAGE_TITLE,
};
pub use driver::WasmDriver;
pub use keypad::WasmKeypad;
