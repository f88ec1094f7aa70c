//! Element tree for the contact form.
//!
//! The tree is rebuilt from [`ContactForm`] state after every event; nothing
//! in it is kept between frames except the IDs below.

use crate::element::{Element, Tone};
use crate::field::Field;
use crate::form::ContactForm;
use crate::snapshot::SubmissionSnapshot;

pub const FORM_ID: &str = "contact-form";
pub const SUBMIT_ID: &str = "submit";
pub const DISPLAY_ID: &str = "display";

/// Test id carried by every inline error node.
pub const ERROR_TEST_ID: &str = "error";

const INPUT_PREFIX: &str = "input-";

/// ID of the input bound to `field`.
pub fn input_id(field: Field) -> String {
    format!("{INPUT_PREFIX}{}", field.name())
}

/// Field bound to an input ID produced by [`input_id`].
pub fn field_for_input(id: &str) -> Option<Field> {
    id.strip_prefix(INPUT_PREFIX)?.parse().ok()
}

/// Build the form's element tree. `focused` is the ID of the focused element.
pub fn render_form(form: &ContactForm, focused: Option<&str>) -> Element {
    let is_focused = |id: &str| focused == Some(id);

    let fields = Field::ALL.into_iter().map(|field| {
        let id = input_id(field);
        let input = Element::input(field.label(), form.value(field))
            .focused(is_focused(&id))
            .id(id);

        let group = Element::col().id(format!("field-{}", field.name())).child(input);
        match form.error(field) {
            Some(err) => group.child(
                Element::text(format!("Error: {}", err.message))
                    .test_id(ERROR_TEST_ID)
                    .tone(Tone::Error),
            ),
            None => group,
        }
    });

    let root = Element::col()
        .id(FORM_ID)
        .child(Element::heading(form.config().header.clone()))
        .children(fields)
        .child(
            Element::button(form.config().submit_label.clone())
                .focused(is_focused(SUBMIT_ID))
                .id(SUBMIT_ID),
        );

    match form.snapshot() {
        Some(snapshot) => root.child(render_snapshot(snapshot)),
        None => root,
    }
}

fn render_snapshot(snapshot: &SubmissionSnapshot) -> Element {
    let entries = snapshot.entries().map(|(field, value)| {
        Element::row()
            .test_id(field.display_test_id())
            .child(Element::text(format!("{}:", field.display_title())).tone(Tone::Muted))
            .child(Element::text(value))
    });

    Element::col()
        .id(DISPLAY_ID)
        .child(
            Element::text("You Submitted:")
                .bold(true)
                .tone(Tone::Success),
        )
        .children(entries)
}
