use std::sync::LazyLock;

use regex::Regex;

use super::{ErrorKind, FieldError};
use crate::config::FormConfig;
use crate::field::Field;

/// Local part, `@`, and a domain with at least one dot.
static EMAIL_SHAPE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[^@\s]+@[^@\s.]+(\.[^@\s.]+)+$").expect("Invalid email shape pattern")
});

/// A single validation rule applied to a string value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Rule {
    /// Value must be non-empty after trimming.
    Required,
    /// Value must have at least this many characters.
    MinLength(usize),
    /// Value must be a well-formed email address. Empty passes; pair with
    /// [`Rule::Required`] to reject it.
    Email,
}

impl Rule {
    fn check(&self, field: Field, value: &str) -> Option<FieldError> {
        match self {
            Self::Required => value.trim().is_empty().then(|| {
                FieldError::new(
                    field,
                    ErrorKind::RequiredFieldMissing,
                    format!("{field} is a required field"),
                )
            }),
            Self::MinLength(min) => (value.chars().count() < *min).then(|| {
                FieldError::new(
                    field,
                    ErrorKind::InvalidFormat,
                    format!("{field} must have at least {min} characters"),
                )
            }),
            Self::Email => (!value.is_empty() && !is_email(value)).then(|| {
                FieldError::new(
                    field,
                    ErrorKind::InvalidFormat,
                    format!("{field} must be a valid email address"),
                )
            }),
        }
    }
}

fn is_email(value: &str) -> bool {
    email_address::EmailAddress::is_valid(value) && EMAIL_SHAPE.is_match(value)
}

/// Ordered rules for one field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldRules {
    field: Field,
    rules: Vec<Rule>,
}

impl FieldRules {
    pub fn new(field: Field) -> Self {
        Self {
            field,
            rules: Vec::new(),
        }
    }

    pub fn field(&self) -> Field {
        self.field
    }

    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }

    pub fn rule(mut self, rule: Rule) -> Self {
        self.rules.push(rule);
        self
    }

    pub fn required(self) -> Self {
        self.rule(Rule::Required)
    }

    pub fn min_length(self, min: usize) -> Self {
        self.rule(Rule::MinLength(min))
    }

    pub fn email(self) -> Self {
        self.rule(Rule::Email)
    }

    /// Run the rules in order and return the first failure.
    pub fn check(&self, value: &str) -> Option<FieldError> {
        self.rules.iter().find_map(|rule| rule.check(self.field, value))
    }
}

/// Rules for every field of the form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuleBook {
    fields: [FieldRules; 4],
}

impl RuleBook {
    pub fn new(config: &FormConfig) -> Self {
        Self {
            fields: [
                FieldRules::new(Field::FirstName)
                    .required()
                    .min_length(config.first_name_min_chars),
                FieldRules::new(Field::LastName).required(),
                FieldRules::new(Field::Email).required().email(),
                FieldRules::new(Field::Message),
            ],
        }
    }

    pub fn for_field(&self, field: Field) -> &FieldRules {
        &self.fields[field.index()]
    }

    pub fn check(&self, field: Field, value: &str) -> Option<FieldError> {
        self.for_field(field).check(value)
    }
}

impl Default for RuleBook {
    fn default() -> Self {
        Self::new(&FormConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_email_shape() {
        assert!(is_email("thomson@email.com"));
        assert!(is_email("first.last+tag@sub.example.org"));
        assert!(!is_email("email"));
        assert!(!is_email("user@localhost"));
        assert!(!is_email("user@@email.com"));
        assert!(!is_email("us er@email.com"));
        assert!(!is_email("user@email."));
    }

    #[test]
    fn test_min_length_counts_chars_not_bytes() {
        let rules = FieldRules::new(Field::FirstName).min_length(5);
        assert!(rules.check("Zoë").is_some());
        assert!(rules.check("Zoëëë").is_none());
    }

    #[test]
    fn test_first_failing_rule_wins() {
        let book = RuleBook::default();
        let rules = book.for_field(Field::FirstName);
        assert_eq!(rules.field(), Field::FirstName);
        assert_eq!(rules.rules(), &[Rule::Required, Rule::MinLength(5)]);

        let err = book.check(Field::FirstName, "").unwrap();
        assert_eq!(err.kind, ErrorKind::RequiredFieldMissing);
        assert_eq!(err.message, "firstName is a required field");
    }

    #[test]
    fn test_whitespace_only_is_missing() {
        let book = RuleBook::default();
        let err = book.check(Field::LastName, "   ").unwrap();
        assert_eq!(err.kind, ErrorKind::RequiredFieldMissing);
    }
}
