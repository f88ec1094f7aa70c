use contact_form::{ContactForm, ErrorKind, Field, FormConfig, Phase, SubmitOutcome};

fn filled() -> ContactForm {
    let mut form = ContactForm::new();
    form.set_field(Field::FirstName, "Tyler");
    form.set_field(Field::LastName, "Thomson");
    form.set_field(Field::Email, "thomson@email.com");
    form
}

// ============================================================================
// validate_field
// ============================================================================

#[test]
fn test_validate_first_name() {
    let form = ContactForm::new();

    let err = form.validate_field(Field::FirstName, "").unwrap();
    assert_eq!(err.kind, ErrorKind::RequiredFieldMissing);
    assert_eq!(err.message, "firstName is a required field");

    let err = form.validate_field(Field::FirstName, "Tom").unwrap();
    assert_eq!(err.kind, ErrorKind::InvalidFormat);
    assert_eq!(err.message, "firstName must have at least 5 characters");

    assert!(form.validate_field(Field::FirstName, "Tyler").is_none());
}

#[test]
fn test_validate_last_name_has_no_minimum() {
    let form = ContactForm::new();

    let err = form.validate_field(Field::LastName, "").unwrap();
    assert_eq!(err.message, "lastName is a required field");
    assert!(form.validate_field(Field::LastName, "Doe").is_none());
}

#[test]
fn test_validate_email() {
    let form = ContactForm::new();

    let err = form.validate_field(Field::Email, "").unwrap();
    assert_eq!(err.kind, ErrorKind::RequiredFieldMissing);
    assert_eq!(err.message, "email is a required field");

    let err = form.validate_field(Field::Email, "email").unwrap();
    assert_eq!(err.kind, ErrorKind::InvalidFormat);
    assert_eq!(err.message, "email must be a valid email address");

    assert!(form.validate_field(Field::Email, "address@email.com").is_none());
}

#[test]
fn test_message_is_never_invalid() {
    let form = ContactForm::new();
    assert!(form.validate_field(Field::Message, "").is_none());
    assert!(form.validate_field(Field::Message, "x").is_none());
}

#[test]
fn test_validate_field_does_not_touch_state() {
    let form = ContactForm::new();
    form.validate_field(Field::FirstName, "");
    assert!(form.errors().is_empty());
    assert_eq!(form.phase(), Phase::Idle);
}

#[test]
fn test_min_length_from_config() {
    let form = ContactForm::with_config(FormConfig {
        first_name_min_chars: 2,
        ..FormConfig::default()
    });
    assert!(form.validate_field(Field::FirstName, "Al").is_none());
    assert_eq!(
        form.validate_field(Field::FirstName, "A").unwrap().message,
        "firstName must have at least 2 characters"
    );
}

// ============================================================================
// set_field
// ============================================================================

#[test]
fn test_set_field_revalidates_only_that_field() {
    let mut form = ContactForm::new();
    form.set_field(Field::FirstName, "Ty");

    assert_eq!(form.errors().len(), 1);
    assert!(form.errors().contains(Field::FirstName));
    assert!(form.error(Field::LastName).is_none());
    assert_eq!(form.phase(), Phase::Editing);
}

#[test]
fn test_set_field_removes_corrected_error() {
    let mut form = ContactForm::new();
    form.set_field(Field::Email, "nope");
    assert!(form.error(Field::Email).is_some());

    form.set_field(Field::Email, "yes@email.com");
    assert!(form.error(Field::Email).is_none());
    assert_eq!(form.value(Field::Email), "yes@email.com");
}

// ============================================================================
// submit
// ============================================================================

#[test]
fn test_submit_empty_form_reports_required_fields() {
    let mut form = ContactForm::new();

    match form.submit() {
        SubmitOutcome::Rejected(errors) => {
            let fields: Vec<_> = errors.iter().map(|e| e.field).collect();
            assert_eq!(fields, vec![Field::FirstName, Field::LastName, Field::Email]);
            assert!(errors
                .iter()
                .all(|e| e.kind == ErrorKind::RequiredFieldMissing));
        }
        other => panic!("expected rejection, got {other:?}"),
    }
    assert!(form.snapshot().is_none());
    assert_eq!(form.phase(), Phase::Idle);
}

#[test]
fn test_submit_creates_snapshot_without_empty_message() {
    let mut form = filled();
    assert!(form.submit().is_submitted());

    let snapshot = form.snapshot().unwrap();
    assert_eq!(snapshot.first_name(), "Tyler");
    assert_eq!(snapshot.last_name(), "Thomson");
    assert_eq!(snapshot.email(), "thomson@email.com");
    assert_eq!(snapshot.message(), None);
    assert_eq!(snapshot.entries().count(), 3);
    assert_eq!(form.phase(), Phase::Submitted);
}

#[test]
fn test_submit_keeps_message() {
    let mut form = filled();
    form.set_field(Field::Message, "hello there");
    form.submit();

    assert_eq!(form.snapshot().unwrap().message(), Some("hello there"));
}

#[test]
fn test_rejected_submit_keeps_previous_snapshot() {
    let mut form = filled();
    form.submit();
    let before = form.snapshot().cloned();

    form.set_field(Field::Email, "broken");
    assert_eq!(form.phase(), Phase::Editing);
    assert!(!form.submit().is_submitted());

    assert_eq!(form.snapshot().cloned(), before);
    assert_eq!(form.phase(), Phase::Editing);
}

#[test]
fn test_next_submit_replaces_snapshot() {
    let mut form = filled();
    form.submit();
    form.set_field(Field::FirstName, "Johnny");
    form.submit();

    assert_eq!(form.snapshot().unwrap().first_name(), "Johnny");
}

#[test]
fn test_snapshot_is_detached_from_later_edits() {
    let mut form = filled();
    form.submit();
    form.set_field(Field::LastName, "Changed");

    assert_eq!(form.snapshot().unwrap().last_name(), "Thomson");
}

#[test]
fn test_reset() {
    let mut form = filled();
    form.submit();
    form.set_field(Field::Email, "x");
    form.reset();

    assert!(form.errors().is_empty());
    assert!(form.snapshot().is_none());
    assert_eq!(form.value(Field::FirstName), "");
    assert_eq!(form.phase(), Phase::Idle);
}
