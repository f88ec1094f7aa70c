use contact_form::{Role, Screen};

const FIRST_NAME: &str = "First Name*";
const LAST_NAME: &str = "Last Name*";
const EMAIL: &str = "Email*";
const MESSAGE: &str = "Message";

// ============================================================================
// Initial Render
// ============================================================================

#[test]
fn test_renders_without_errors() {
    let screen = Screen::new();
    assert!(screen.query_all_by_test_id("error").is_empty());
    assert!(screen.query_by_test_id("firstnameDisplay").is_none());
}

#[test]
fn test_renders_header() {
    let screen = Screen::new();
    let header = screen.query_by_text_containing("contact form").unwrap();
    assert_eq!(header.role, Role::Heading);
    assert_eq!(header.text, "Contact Form");
}

#[test]
fn test_renders_labelled_inputs_and_button() {
    let screen = Screen::new();
    for label in [FIRST_NAME, LAST_NAME, EMAIL, MESSAGE] {
        let input = screen.query_by_label(label).unwrap();
        assert_eq!(input.role, Role::Input);
    }
    // Labels match case-insensitively.
    assert!(screen.query_by_label("first name*").is_some());
    assert_eq!(screen.query_by_role(Role::Button).unwrap().text, "Submit");
}

// ============================================================================
// Validation Errors
// ============================================================================

#[test]
fn test_one_error_for_short_first_name() {
    let mut screen = Screen::new();
    screen.type_into(FIRST_NAME, "123").unwrap();

    let errors = screen.query_all_by_test_id("error");
    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].text, "Error: firstName must have at least 5 characters");
}

#[test]
fn test_three_errors_for_empty_submit() {
    let mut screen = Screen::new();
    screen.click_button().unwrap();

    assert_eq!(screen.query_all_by_test_id("error").len(), 3);
}

#[test]
fn test_one_error_when_email_missing() {
    let mut screen = Screen::new();
    screen.type_into(FIRST_NAME, "Tyler").unwrap();
    screen.type_into(LAST_NAME, "Thomson").unwrap();
    screen.click_button().unwrap();

    let errors = screen.query_all_by_test_id("error");
    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].text, "Error: email is a required field");
}

#[test]
fn test_invalid_email_message() {
    let mut screen = Screen::new();
    screen.type_into(EMAIL, "email").unwrap();

    assert!(screen
        .query_by_text_containing("email must be a valid email address")
        .is_some());
}

#[test]
fn test_last_name_required_message() {
    let mut screen = Screen::new();
    screen.click_button().unwrap();

    assert!(screen
        .query_by_text_containing("lastName is a required field")
        .is_some());
}

#[test]
fn test_error_clears_once_corrected() {
    let mut screen = Screen::new();
    screen.type_into(FIRST_NAME, "Ty").unwrap();
    assert_eq!(screen.query_all_by_test_id("error").len(), 1);

    screen.type_into(FIRST_NAME, "ler").unwrap();
    assert!(screen.query_all_by_test_id("error").is_empty());
}

#[test]
fn test_clearing_required_field_shows_required_error() {
    let mut screen = Screen::new();
    screen.type_into(LAST_NAME, "Doe").unwrap();
    screen.clear(LAST_NAME).unwrap();

    assert_eq!(screen.form().value(contact_form::Field::LastName), "");
    assert!(screen
        .query_by_text_containing("lastName is a required field")
        .is_some());
}

// ============================================================================
// Submitted Display
// ============================================================================

#[test]
fn test_submitted_display_without_message() {
    let mut screen = Screen::new();
    screen.type_into(FIRST_NAME, "Tyler").unwrap();
    screen.type_into(LAST_NAME, "Thomson").unwrap();
    screen.type_into(EMAIL, "thomson@email.com").unwrap();
    screen.click_button().unwrap();

    assert!(screen.query_all_by_test_id("error").is_empty());
    assert!(screen.query_by_text("Tyler").is_some());
    assert!(screen.query_by_text("Thomson").is_some());
    assert!(screen.query_by_text("thomson@email.com").is_some());
    assert!(screen.query_by_test_id("messageDisplay").is_none());
}

#[test]
fn test_submitted_display_with_message() {
    let mut screen = Screen::new();
    screen.type_into(FIRST_NAME, "Johnny").unwrap();
    screen.type_into(LAST_NAME, "Doe").unwrap();
    screen.type_into(EMAIL, "address@email.com").unwrap();
    screen.type_into(MESSAGE, "message").unwrap();
    screen.click_button().unwrap();

    assert!(screen.query_by_text_containing("john").is_some());
    assert!(screen.query_by_text_containing("doe").is_some());
    assert!(screen.query_by_text_containing("address@email.com").is_some());

    let message = screen.query_by_test_id("messageDisplay").unwrap();
    assert_eq!(message.text_content(), "Message:message");
}

#[test]
fn test_display_region_has_one_node_per_field() {
    let mut screen = Screen::new();
    screen.type_into(FIRST_NAME, "Johnny").unwrap();
    screen.type_into(LAST_NAME, "Doe").unwrap();
    screen.type_into(EMAIL, "address@email.com").unwrap();
    screen.click_button().unwrap();

    for test_id in ["firstnameDisplay", "lastnameDisplay", "emailDisplay"] {
        assert_eq!(screen.query_all_by_test_id(test_id).len(), 1, "{test_id}");
    }
}

#[test]
fn test_unknown_label_is_an_error() {
    let mut screen = Screen::new();
    let err = screen.type_into("Phone", "123").unwrap_err();
    assert_eq!(err, contact_form::ScreenError::NoSuchLabel("Phone".to_string()));
}
