//! Headless driver for the form.
//!
//! [`Screen`] plays the part of a user in front of the terminal: it focuses
//! inputs by their label, types one key at a time and presses the submit
//! button, then lets callers query the rendered element tree the way they
//! would look at the screen.

use thiserror::Error;

use crate::app::FormApp;
use crate::config::FormConfig;
use crate::element::{Element, Role};
use crate::event::{Key, Modifiers};
use crate::form::ContactForm;
use crate::render::{render_lines, Line};
use crate::view::SUBMIT_ID;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ScreenError {
    #[error("no input labelled {0:?}")]
    NoSuchLabel(String),
    #[error("no button on screen")]
    NoButton,
}

pub struct Screen {
    app: FormApp,
    tree: Element,
}

impl Screen {
    pub fn new() -> Self {
        Self::with_config(FormConfig::default())
    }

    pub fn with_config(config: FormConfig) -> Self {
        let app = FormApp::with_config(config);
        let tree = app.element();
        Self { app, tree }
    }

    pub fn form(&self) -> &ContactForm {
        self.app.form()
    }

    pub fn root(&self) -> &Element {
        &self.tree
    }

    fn refresh(&mut self) {
        self.tree = self.app.element();
    }

    fn press(&mut self, key: Key) {
        self.app.handle_key(key, Modifiers::new());
    }

    // -------------------------------------------------------------------------
    // User actions
    // -------------------------------------------------------------------------

    /// Focus the input labelled `label` and type `text` one key at a time.
    pub fn type_into(&mut self, label: &str, text: &str) -> Result<(), ScreenError> {
        let id = self.input_id(label)?;
        self.app.focus(&id);
        for c in text.chars() {
            self.press(Key::Char(c));
        }
        self.refresh();
        Ok(())
    }

    /// Focus the input labelled `label` and erase its value.
    pub fn clear(&mut self, label: &str) -> Result<(), ScreenError> {
        let id = self.input_id(label)?;
        self.app.focus(&id);
        let len = self
            .tree
            .descendants()
            .into_iter()
            .find(|e| e.id == id)
            .map_or(0, |e| e.text.chars().count());
        for _ in 0..len {
            self.press(Key::Backspace);
        }
        self.refresh();
        Ok(())
    }

    /// Focus the submit button and press Enter.
    pub fn click_button(&mut self) -> Result<(), ScreenError> {
        if self.query_by_role(Role::Button).is_none() {
            return Err(ScreenError::NoButton);
        }
        self.app.focus(SUBMIT_ID);
        self.press(Key::Enter);
        self.refresh();
        Ok(())
    }

    /// Send a raw key, as a terminal would.
    pub fn key(&mut self, key: Key, modifiers: Modifiers) {
        self.app.handle_key(key, modifiers);
        self.refresh();
    }

    fn input_id(&self, label: &str) -> Result<String, ScreenError> {
        self.query_by_label(label)
            .map(|e| e.id.clone())
            .ok_or_else(|| ScreenError::NoSuchLabel(label.to_string()))
    }

    // -------------------------------------------------------------------------
    // Queries
    // -------------------------------------------------------------------------

    /// Input whose label equals `label`, ignoring case.
    pub fn query_by_label(&self, label: &str) -> Option<&Element> {
        self.tree.descendants().into_iter().find(|e| {
            e.role == Role::Input
                && e.label
                    .as_deref()
                    .is_some_and(|l| l.eq_ignore_ascii_case(label))
        })
    }

    pub fn query_by_role(&self, role: Role) -> Option<&Element> {
        self.tree.descendants().into_iter().find(|e| e.role == role)
    }

    pub fn query_all_by_test_id(&self, test_id: &str) -> Vec<&Element> {
        self.tree
            .descendants()
            .into_iter()
            .filter(|e| e.test_id.as_deref() == Some(test_id))
            .collect()
    }

    pub fn query_by_test_id(&self, test_id: &str) -> Option<&Element> {
        self.query_all_by_test_id(test_id).into_iter().next()
    }

    /// Leaf text node whose text is exactly `text`.
    pub fn query_by_text(&self, text: &str) -> Option<&Element> {
        self.tree
            .descendants()
            .into_iter()
            .find(|e| is_text_leaf(e) && e.text == text)
    }

    /// Leaf text node containing `needle`, ignoring case.
    pub fn query_by_text_containing(&self, needle: &str) -> Option<&Element> {
        let needle = needle.to_lowercase();
        self.tree
            .descendants()
            .into_iter()
            .find(|e| is_text_leaf(e) && e.text.to_lowercase().contains(&needle))
    }

    /// The screen as it would be drawn `width` columns wide.
    pub fn lines(&self, width: u16) -> Vec<Line> {
        render_lines(&self.tree, width)
    }
}

impl Default for Screen {
    fn default() -> Self {
        Self::new()
    }
}

fn is_text_leaf(element: &Element) -> bool {
    matches!(element.role, Role::Text | Role::Heading | Role::Button) && element.children.is_empty()
}
