pub mod customer;
pub mod dashboard;
pub mod provider;
pub mod public;

/// One field of a rendered form: the echoed value plus its validation
/// message, flattened for the templates.
#[derive(Clone, Debug, Default)]
pub struct FieldView {
    pub value: String,
    pub error: String,
    pub has_error: bool,
}

impl FieldView {
    pub fn new(value: &str, error: Option<&str>) -> FieldView {
        FieldView {
            value: value.to_string(),
            error: error.unwrap_or_default().to_string(),
            has_error: error.is_some(),
        }
    }
}
