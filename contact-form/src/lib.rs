pub mod app;
pub mod config;
pub mod element;
pub mod event;
pub mod field;
pub mod form;
pub mod render;
pub mod screen;
pub mod snapshot;
pub mod validation;
pub mod view;

pub use app::{Control, FormApp};
pub use config::FormConfig;
pub use element::{find_element, Element, Role, Tone};
pub use event::{FocusState, Key, Modifiers};
pub use field::{Field, FieldParseError, FieldValues};
pub use form::{ContactForm, Phase, SubmitOutcome};
pub use render::{render_lines, Line, Span};
pub use screen::{Screen, ScreenError};
pub use snapshot::SubmissionSnapshot;
pub use validation::{ErrorKind, FieldError, ValidationErrors};
