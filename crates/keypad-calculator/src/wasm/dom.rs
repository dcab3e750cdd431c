//! Mock DOM for WASM testing
//!
//! A native model of the calculator page: a display readout above the
//! keypad. Lets the browser front end be exercised without web-sys.

use std::collections::HashMap;

use crate::core::KeypadLayout;

/// Element ID of the display readout
pub const DISPLAY_ID: &str = "calc-display";
/// Element ID of the keypad grid container
pub const KEYPAD_ID: &str = "calc-keypad";
/// Element ID of the row holding the clear button
pub const CLEAR_ROW_ID: &str = "calc-clear-row";
/// Page title
pub const PAGE_TITLE: &str = "Calculator App";

/// Represents a DOM element for testing
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DomElement {
    /// Element ID
    pub id: String,
    /// Element tag name
    pub tag: String,
    /// Text content
    pub text_content: String,
    /// Element attributes
    pub attributes: HashMap<String, String>,
    /// CSS classes
    pub classes: Vec<String>,
    /// Child elements
    pub children: Vec<DomElement>,
}

impl Default for DomElement {
    fn default() -> Self {
        Self::new("div")
    }
}

impl DomElement {
    /// Creates a new DOM element with the given tag
    #[must_use]
    pub fn new(tag: &str) -> Self {
        Self {
            id: String::new(),
            tag: tag.to_string(),
            text_content: String::new(),
            attributes: HashMap::new(),
            classes: Vec::new(),
            children: Vec::new(),
        }
    }

    /// Creates an element with an ID
    #[must_use]
    pub fn with_id(mut self, id: &str) -> Self {
        self.id = id.to_string();
        self
    }

    /// Sets the text content
    #[must_use]
    pub fn with_text(mut self, text: &str) -> Self {
        self.text_content = text.to_string();
        self
    }

    /// Adds a class
    #[must_use]
    pub fn with_class(mut self, class: &str) -> Self {
        self.classes.push(class.to_string());
        self
    }

    /// Sets an attribute
    #[must_use]
    pub fn with_attr(mut self, key: &str, value: &str) -> Self {
        self.attributes.insert(key.to_string(), value.to_string());
        self
    }

    /// Adds a child element
    #[must_use]
    pub fn with_child(mut self, child: Self) -> Self {
        self.children.push(child);
        self
    }

    /// Sets text content
    pub fn set_text(&mut self, text: &str) {
        self.text_content = text.to_string();
    }

    /// Checks if element has a class
    #[must_use]
    pub fn has_class(&self, class: &str) -> bool {
        self.classes.iter().any(|c| c == class)
    }

    /// Gets an attribute value
    #[must_use]
    pub fn get_attr(&self, key: &str) -> Option<&str> {
        self.attributes.get(key).map(String::as_str)
    }
}

/// DOM events that can be dispatched
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DomEvent {
    /// Click event on an element
    Click {
        /// The ID of the clicked element
        element_id: String,
    },
    /// Key press on the window
    KeyDown {
        /// The key name (`"7"`, `"Enter"`, `"Backspace"`, ...)
        key: String,
    },
}

impl DomEvent {
    /// Creates a click event
    #[must_use]
    pub fn click(element_id: &str) -> Self {
        Self::Click {
            element_id: element_id.to_string(),
        }
    }

    /// Creates a key down event
    #[must_use]
    pub fn key_down(key: &str) -> Self {
        Self::KeyDown {
            key: key.to_string(),
        }
    }
}

/// Handle for a registered keyboard listener
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ListenerId(u64);

/// Mock DOM for testing the calculator without a browser
#[derive(Debug)]
pub struct MockDom {
    /// Root element
    pub root: DomElement,
    /// Elements by ID for quick lookup
    elements: HashMap<String, DomElement>,
    /// Event history for verification
    event_history: Vec<DomEvent>,
    /// Registered window keydown listeners
    key_listeners: Vec<ListenerId>,
    next_listener: u64,
}

impl Default for MockDom {
    fn default() -> Self {
        Self::new()
    }
}

impl MockDom {
    /// Creates a new mock DOM
    #[must_use]
    pub fn new() -> Self {
        Self {
            root: DomElement::new("div").with_id("root"),
            elements: HashMap::new(),
            event_history: Vec::new(),
            key_listeners: Vec::new(),
            next_listener: 0,
        }
    }

    /// Creates the calculator page: display readout, keypad grid and the
    /// clear row
    #[must_use]
    pub fn calculator(layout: &KeypadLayout) -> Self {
        let mut dom = Self::new();

        let display = DomElement::new("div")
            .with_id(DISPLAY_ID)
            .with_class("display");

        let mut keypad = DomElement::new("div").with_id(KEYPAD_ID).with_class("keypad");
        let mut clear_row = DomElement::new("div")
            .with_id(CLEAR_ROW_ID)
            .with_class("clear-row");

        let mut buttons = Vec::with_capacity(layout.button_count());
        for def in layout.buttons() {
            let button = DomElement::new("button")
                .with_id(&def.id)
                .with_text(&def.label())
                .with_class("keypad-btn")
                .with_attr("data-token", &def.label());
            if def.row < 4 {
                keypad = keypad.with_child(button.clone());
            } else {
                clear_row = clear_row.with_child(button.clone());
            }
            buttons.push(button);
        }

        let calculator = DomElement::new("div")
            .with_id("calculator")
            .with_class("calculator")
            .with_child(display.clone())
            .with_child(keypad.clone())
            .with_child(clear_row.clone());

        dom.root = DomElement::new("div")
            .with_id("root")
            .with_attr("title", PAGE_TITLE)
            .with_child(calculator.clone());

        dom.register_element(calculator);
        dom.register_element(display);
        dom.register_element(keypad);
        dom.register_element(clear_row);
        for button in buttons {
            dom.register_element(button);
        }

        dom
    }

    /// Registers an element for ID lookup
    pub fn register_element(&mut self, element: DomElement) {
        if !element.id.is_empty() {
            self.elements.insert(element.id.clone(), element);
        }
    }

    /// Gets an element by ID
    #[must_use]
    pub fn get_element(&self, id: &str) -> Option<&DomElement> {
        self.elements.get(id)
    }

    /// Dispatches an event and records it
    pub fn dispatch_event(&mut self, event: DomEvent) {
        self.event_history.push(event);
    }

    /// Gets the event history
    #[must_use]
    pub fn event_history(&self) -> &[DomEvent] {
        &self.event_history
    }

    /// Clears event history
    pub fn clear_event_history(&mut self) {
        self.event_history.clear();
    }

    /// Updates element text by ID
    pub fn set_element_text(&mut self, id: &str, text: &str) {
        if let Some(elem) = self.elements.get_mut(id) {
            elem.set_text(text);
        }
    }

    /// Gets element text by ID
    #[must_use]
    pub fn get_element_text(&self, id: &str) -> Option<&str> {
        self.elements.get(id).map(|e| e.text_content.as_str())
    }

    /// Registers a window keydown listener
    pub fn add_key_listener(&mut self) -> ListenerId {
        let id = ListenerId(self.next_listener);
        self.next_listener += 1;
        self.key_listeners.push(id);
        id
    }

    /// Removes a keydown listener; returns false if it was not registered
    pub fn remove_key_listener(&mut self, id: ListenerId) -> bool {
        let before = self.key_listeners.len();
        self.key_listeners.retain(|l| *l != id);
        self.key_listeners.len() != before
    }

    /// Number of registered keydown listeners
    #[must_use]
    pub fn key_listener_count(&self) -> usize {
        self.key_listeners.len()
    }
}
