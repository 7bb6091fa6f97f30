use serde::Serialize;
use std::collections::BTreeMap;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum BoardError {
    #[error("company with this name already exists: {name}")]
    DuplicateName { name: String },

    #[error("storage error: {message}")]
    Storage { message: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid value {value:?} for {field}: {reason}")]
    InvalidConfigValue {
        field: String,
        value: String,
        reason: String,
    },
}

pub type Result<T> = std::result::Result<T, BoardError>;

/// Field-scoped validation errors: field name mapped to one or more
/// human-readable messages. Serializes as a plain JSON object, which is
/// exactly the shape the create endpoint returns with a 400.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct FieldErrors(BTreeMap<String, Vec<String>>);

impl FieldErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn single(field: &str, message: impl Into<String>) -> Self {
        let mut errors = Self::new();
        errors.push(field, message);
        errors
    }

    pub fn push(&mut self, field: &str, message: impl Into<String>) {
        self.0
            .entry(field.to_string())
            .or_default()
            .push(message.into());
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn messages(&self, field: &str) -> Option<&[String]> {
        self.0.get(field).map(Vec::as_slice)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn field_errors_collect_multiple_messages_per_field() {
        let mut errors = FieldErrors::new();
        errors.push("name", "first");
        errors.push("name", "second");
        assert_eq!(
            errors.messages("name"),
            Some(&["first".to_string(), "second".to_string()][..])
        );
        assert_eq!(errors.messages("status"), None);
    }

    #[test]
    fn field_errors_serialize_as_plain_object() {
        let errors = FieldErrors::single("name", "This field is required.");
        let json = serde_json::to_value(&errors).unwrap();
        assert_eq!(
            json,
            serde_json::json!({ "name": ["This field is required."] })
        );
    }
}
