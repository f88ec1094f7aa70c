use std::collections::BTreeMap;

use super::FieldError;
use crate::field::Field;

/// Current per-field errors. A field without an entry is valid.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationErrors {
    errors: BTreeMap<Field, FieldError>,
}

impl ValidationErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    pub fn get(&self, field: Field) -> Option<&FieldError> {
        self.errors.get(&field)
    }

    pub fn contains(&self, field: Field) -> bool {
        self.errors.contains_key(&field)
    }

    /// Record the outcome of validating `field`: store the error, or drop
    /// any stale one when the field now passes.
    pub fn apply(&mut self, field: Field, outcome: Option<FieldError>) {
        match outcome {
            Some(err) => {
                self.errors.insert(field, err);
            }
            None => {
                self.errors.remove(&field);
            }
        }
    }

    /// Errors in field display order.
    pub fn iter(&self) -> impl Iterator<Item = &FieldError> {
        self.errors.values()
    }

    /// First invalid field in display order (for focusing).
    pub fn first_field(&self) -> Option<Field> {
        self.errors.keys().next().copied()
    }

    pub fn clear(&mut self) {
        self.errors.clear();
    }
}

impl FromIterator<FieldError> for ValidationErrors {
    fn from_iter<T: IntoIterator<Item = FieldError>>(iter: T) -> Self {
        Self {
            errors: iter.into_iter().map(|e| (e.field, e)).collect(),
        }
    }
}
