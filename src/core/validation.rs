//! Validation for contact form submissions
//!
//! Checks the shape of a JSON body only: `name`, `email` and `message` must be
//! present and be strings. Unknown keys are ignored. Every problem is reported,
//! not just the first, using the issue format the site's front end renders
//! next to form fields.

use serde::Serialize;
use serde_json::{Map, Value};

use crate::core::models::NewContactMessage;

/// Fields a contact submission must carry, in reporting order
pub const CONTACT_FIELDS: [&str; 3] = ["name", "email", "message"];

/// A single validation issue
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldError {
    pub code: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expected: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub received: Option<&'static str>,
    /// Empty for issues about the body as a whole
    pub path: Vec<String>,
    pub message: String,
}

impl FieldError {
    /// Field is absent from the body
    pub fn required(field: &str, expected: &'static str) -> Self {
        Self {
            code: "invalid_type",
            expected: Some(expected),
            received: Some("undefined"),
            path: vec![field.to_string()],
            message: "Required".to_string(),
        }
    }

    /// Value has the wrong JSON type. `field` is `None` for the body itself.
    pub fn invalid_type(field: Option<&str>, expected: &'static str, received: &Value) -> Self {
        let received = json_type_name(received);
        Self {
            code: "invalid_type",
            expected: Some(expected),
            received: Some(received),
            path: field.map(|f| vec![f.to_string()]).unwrap_or_default(),
            message: format!("Expected {}, received {}", expected, received),
        }
    }

    /// Body could not be read as JSON at all
    pub fn malformed_body(detail: impl Into<String>) -> Self {
        Self {
            code: "invalid_json",
            expected: None,
            received: None,
            path: Vec::new(),
            message: detail.into(),
        }
    }
}

impl std::fmt::Display for FieldError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.path.is_empty() {
            write!(f, "{}", self.message)
        } else {
            write!(f, "{}: {}", self.path.join("."), self.message)
        }
    }
}

/// Non-empty list of issues for one submission
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ValidationErrors(Vec<FieldError>);

impl ValidationErrors {
    pub fn single(error: FieldError) -> Self {
        Self(vec![error])
    }

    pub fn issues(&self) -> &[FieldError] {
        &self.0
    }
}

impl std::fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let issues: Vec<String> = self.0.iter().map(ToString::to_string).collect();
        write!(f, "{}", issues.join("; "))
    }
}

impl std::error::Error for ValidationErrors {}

/// JSON type name as reported in `received`
fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

fn required_string(
    fields: &Map<String, Value>,
    field: &str,
    errors: &mut Vec<FieldError>,
) -> Option<String> {
    match fields.get(field) {
        Some(Value::String(s)) => Some(s.clone()),
        Some(other) => {
            errors.push(FieldError::invalid_type(Some(field), "string", other));
            None
        }
        None => {
            errors.push(FieldError::required(field, "string"));
            None
        }
    }
}

/// Validate a contact form body and extract the fields to store
pub fn validate_contact(body: &Value) -> Result<NewContactMessage, ValidationErrors> {
    let Some(fields) = body.as_object() else {
        return Err(ValidationErrors::single(FieldError::invalid_type(
            None, "object", body,
        )));
    };

    let mut errors = Vec::new();
    let [name, email, message] =
        CONTACT_FIELDS.map(|field| required_string(fields, field, &mut errors));

    match (name, email, message) {
        (Some(name), Some(email), Some(message)) => Ok(NewContactMessage {
            name,
            email,
            message,
        }),
        _ => Err(ValidationErrors(errors)),
    }
}
