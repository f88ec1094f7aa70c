use crate::field::{Field, FieldValues};

/// Values captured by the last accepted submit.
///
/// Built once from the form's values and never modified afterwards; the next
/// accepted submit replaces it wholesale.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmissionSnapshot {
    first_name: String,
    last_name: String,
    email: String,
    message: Option<String>,
}

impl SubmissionSnapshot {
    pub(crate) fn capture(values: &FieldValues) -> Self {
        let message = values.get(Field::Message);
        Self {
            first_name: values.get(Field::FirstName).to_string(),
            last_name: values.get(Field::LastName).to_string(),
            email: values.get(Field::Email).to_string(),
            message: (!message.is_empty()).then(|| message.to_string()),
        }
    }

    pub fn first_name(&self) -> &str {
        &self.first_name
    }

    pub fn last_name(&self) -> &str {
        &self.last_name
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    /// Submitted message, or `None` when it was left empty.
    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    pub fn get(&self, field: Field) -> Option<&str> {
        match field {
            Field::FirstName => Some(&self.first_name),
            Field::LastName => Some(&self.last_name),
            Field::Email => Some(&self.email),
            Field::Message => self.message(),
        }
    }

    /// Fields to display, skipping an empty message.
    pub fn entries(&self) -> impl Iterator<Item = (Field, &str)> {
        Field::ALL
            .into_iter()
            .filter_map(move |field| self.get(field).map(|value| (field, value)))
    }
}
