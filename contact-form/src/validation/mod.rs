//! Field validation for the contact form.
//!
//! Each field owns an ordered list of [`Rule`]s. The first failing rule
//! decides the error shown for that field.
//!
//! # Example
//!
//! ```
//! use contact_form::validation::{ErrorKind, FieldRules};
//! use contact_form::Field;
//!
//! let rules = FieldRules::new(Field::FirstName).required().min_length(5);
//!
//! let err = rules.check("Tom").unwrap();
//! assert_eq!(err.kind, ErrorKind::InvalidFormat);
//! assert_eq!(err.message, "firstName must have at least 5 characters");
//! assert!(rules.check("Tyler").is_none());
//! ```

mod errors;
mod result;
mod rules;

pub use errors::{ErrorKind, FieldError};
pub use result::ValidationErrors;
pub use rules::{FieldRules, Rule, RuleBook};
