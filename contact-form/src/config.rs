/// Tunables for a [`ContactForm`](crate::ContactForm).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormConfig {
    /// Minimum number of characters accepted for the first name.
    pub first_name_min_chars: usize,
    /// Heading rendered above the inputs.
    pub header: String,
    /// Label of the submit button.
    pub submit_label: String,
}

impl Default for FormConfig {
    fn default() -> Self {
        Self {
            first_name_min_chars: 5,
            header: "Contact Form".to_string(),
            submit_label: "Submit".to_string(),
        }
    }
}
