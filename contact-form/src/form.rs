use log::{debug, info};

use crate::config::FormConfig;
use crate::field::{Field, FieldValues};
use crate::snapshot::SubmissionSnapshot;
use crate::validation::{FieldError, RuleBook, ValidationErrors};

/// Where the form is in its lifecycle.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Phase {
    /// Nothing typed yet.
    #[default]
    Idle,
    /// At least one field changed since the form was created or submitted.
    Editing,
    /// The last submit was accepted and nothing has changed since.
    Submitted,
}

/// Result of [`ContactForm::submit`].
#[derive(Debug, PartialEq, Eq)]
pub enum SubmitOutcome<'a> {
    Submitted(&'a SubmissionSnapshot),
    Rejected(&'a ValidationErrors),
}

impl SubmitOutcome<'_> {
    pub fn is_submitted(&self) -> bool {
        matches!(self, Self::Submitted(_))
    }
}

/// Contact form state: values, per-field errors and the last submission.
#[derive(Debug, Clone)]
pub struct ContactForm {
    config: FormConfig,
    rules: RuleBook,
    values: FieldValues,
    errors: ValidationErrors,
    snapshot: Option<SubmissionSnapshot>,
    phase: Phase,
}

impl ContactForm {
    pub fn new() -> Self {
        Self::with_config(FormConfig::default())
    }

    pub fn with_config(config: FormConfig) -> Self {
        Self {
            rules: RuleBook::new(&config),
            config,
            values: FieldValues::new(),
            errors: ValidationErrors::new(),
            snapshot: None,
            phase: Phase::Idle,
        }
    }

    pub fn config(&self) -> &FormConfig {
        &self.config
    }

    pub fn value(&self, field: Field) -> &str {
        self.values.get(field)
    }

    pub fn values(&self) -> &FieldValues {
        &self.values
    }

    pub fn error(&self, field: Field) -> Option<&FieldError> {
        self.errors.get(field)
    }

    pub fn errors(&self) -> &ValidationErrors {
        &self.errors
    }

    pub fn snapshot(&self) -> Option<&SubmissionSnapshot> {
        self.snapshot.as_ref()
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Validate `value` as if it were entered into `field`, without touching
    /// the form's state.
    pub fn validate_field(&self, field: Field, value: &str) -> Option<FieldError> {
        self.rules.check(field, value)
    }

    /// Store a new value and revalidate that field only.
    pub fn set_field(&mut self, field: Field, value: impl Into<String>) {
        let value = value.into();
        let outcome = self.validate_field(field, &value);
        debug!(
            "set {field} ({} chars), valid: {}",
            value.chars().count(),
            outcome.is_none()
        );
        self.values.set(field, value);
        self.errors.apply(field, outcome);
        self.phase = Phase::Editing;
    }

    /// Validate every required field. On success the current values become
    /// the new snapshot; on failure the errors are replaced by exactly the
    /// failing fields and the previous snapshot is kept.
    pub fn submit(&mut self) -> SubmitOutcome<'_> {
        let failures: ValidationErrors = Field::REQUIRED
            .into_iter()
            .filter_map(|field| self.validate_field(field, self.values.get(field)))
            .collect();

        if !failures.is_empty() {
            info!("submit rejected with {} error(s)", failures.len());
            self.errors = failures;
            return SubmitOutcome::Rejected(&self.errors);
        }

        info!("submit accepted");
        self.errors.clear();
        self.phase = Phase::Submitted;
        SubmitOutcome::Submitted(self.snapshot.insert(SubmissionSnapshot::capture(&self.values)))
    }

    /// Back to a blank, never-submitted form.
    pub fn reset(&mut self) {
        debug!("form reset");
        self.values.clear();
        self.errors.clear();
        self.snapshot = None;
        self.phase = Phase::Idle;
    }
}

impl Default for ContactForm {
    fn default() -> Self {
        Self::new()
    }
}
