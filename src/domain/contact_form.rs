//! src/domain/contact_form.rs

use serde_json::Value;

/// Raw fields pulled out of a submitted JSON document.
///
/// Extraction never fails: a missing key, a non-string value or a document
/// that is not an object all yield an empty string for that field.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl From<&Value> for ContactForm {
    fn from(document: &Value) -> Self {
        let field = |key: &str| {
            document
                .get(key)
                .and_then(Value::as_str)
                .unwrap_or_default()
                .to_string()
        };

        Self {
            name: field("name"),
            email: field("email"),
            message: field("message"),
        }
    }
}
