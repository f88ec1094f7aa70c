use log::{debug, warn};

use crate::config::FormConfig;
use crate::element::Element;
use crate::event::{FocusState, Key, Modifiers};
use crate::form::{ContactForm, SubmitOutcome};
use crate::view::{self, SUBMIT_ID};

/// What the caller should do after a key was handled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Control {
    Continue,
    Quit,
}

/// Keyboard-driven contact form: form state plus focus.
#[derive(Debug)]
pub struct FormApp {
    form: ContactForm,
    focus: FocusState,
}

impl FormApp {
    pub fn new() -> Self {
        Self::with_config(FormConfig::default())
    }

    /// Start with the first input focused.
    pub fn with_config(config: FormConfig) -> Self {
        let mut app = Self {
            form: ContactForm::with_config(config),
            focus: FocusState::new(),
        };
        let root = app.element();
        app.focus.focus_next(&root);
        app
    }

    pub fn form(&self) -> &ContactForm {
        &self.form
    }

    pub fn focused(&self) -> Option<&str> {
        self.focus.focused()
    }

    pub fn focus(&mut self, id: &str) -> bool {
        self.focus.focus(id)
    }

    /// Current element tree.
    pub fn element(&self) -> Element {
        view::render_form(&self.form, self.focus.focused())
    }

    pub fn handle_key(&mut self, key: Key, modifiers: Modifiers) -> Control {
        if modifiers.ctrl {
            return self.handle_shortcut(key);
        }

        match key {
            Key::Escape => return Control::Quit,
            Key::Tab | Key::Down => self.focus_next(),
            Key::BackTab | Key::Up => self.focus_prev(),
            Key::Enter if self.focused() == Some(SUBMIT_ID) => self.submit(),
            Key::Enter => self.focus_next(),
            Key::Char(c) => self.edit(|value| value.push(c)),
            Key::Backspace => self.edit(|value| {
                value.pop();
            }),
            Key::Other => {}
        }
        Control::Continue
    }

    fn handle_shortcut(&mut self, key: Key) -> Control {
        match key {
            Key::Char('c') => return Control::Quit,
            Key::Char('s') => self.submit(),
            Key::Char('r') => {
                self.form.reset();
                let root = self.element();
                self.focus = FocusState::new();
                self.focus.focus_next(&root);
            }
            other => debug!("unbound shortcut: ctrl+{other:?}"),
        }
        Control::Continue
    }

    fn focus_next(&mut self) {
        let root = self.element();
        self.focus.focus_next(&root);
    }

    fn focus_prev(&mut self) {
        let root = self.element();
        self.focus.focus_prev(&root);
    }

    /// Edit the focused input's value and push the result through `set_field`.
    fn edit(&mut self, f: impl FnOnce(&mut String)) {
        let Some(field) = self.focus.focused().and_then(view::field_for_input) else {
            warn!("typing ignored: no input focused");
            return;
        };
        let mut value = self.form.value(field).to_string();
        f(&mut value);
        self.form.set_field(field, value);
    }

    fn submit(&mut self) {
        let first_invalid = match self.form.submit() {
            SubmitOutcome::Submitted(_) => None,
            SubmitOutcome::Rejected(errors) => errors.first_field(),
        };
        if let Some(field) = first_invalid {
            self.focus.focus(&view::input_id(field));
        }
    }
}

impl Default for FormApp {
    fn default() -> Self {
        Self::new()
    }
}
