//! Uniform response envelope and the normalizer that produces it.
//!
//! Every facade operation returns an [`ApiResponse`]. Upstream success codes
//! (200, 201, 204) collapse to status 200 with an optional payload; any other
//! status is passed through alongside the upstream `error` and
//! `error_description` fields.
//!
//! # Example
//!
//! ```
//! use chatkit_core::response::normalize;
//! use serde_json::json;
//!
//! let ok = normalize(201, Some(json!({"id": "u1"}))).unwrap();
//! assert_eq!(ok.status(), 200);
//!
//! let err = normalize(404, Some(json!({"error": "not_found"}))).unwrap();
//! assert_eq!(err.error_code(), Some("not_found"));
//! ```

use serde::Serialize;
use serde_json::{Map, Value};

use crate::errors::ChatkitError;

/// Upstream status codes treated as success.
pub const SUCCESS_CODES: [u16; 3] = [200, 201, 204];

/// Whether `status` is one of [`SUCCESS_CODES`].
pub fn is_success_status(status: u16) -> bool {
    SUCCESS_CODES.contains(&status)
}

/// Status reported for every successful envelope.
pub const STATUS_OK: u16 = 200;

/// A JSON object as returned by the upstream API.
pub type JsonObject = Map<String, Value>;

/// Successful response data: one object or an ordered list of objects.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Payload {
    Object(JsonObject),
    List(Vec<JsonObject>),
}

impl Payload {
    pub fn as_object(&self) -> Option<&JsonObject> {
        match self {
            Self::Object(object) => Some(object),
            Self::List(_) => None,
        }
    }

    pub fn as_list(&self) -> Option<&[JsonObject]> {
        match self {
            Self::List(items) => Some(items),
            Self::Object(_) => None,
        }
    }
}

/// Either a payload or an upstream error code, never both.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Outcome {
    Payload(Option<Payload>),
    Error(String),
}

/// The envelope returned by every SDK operation.
///
/// Serializes as `{"status", "message", "payload"}` on success and
/// `{"status", "message", "error"}` on failure.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ApiResponse {
    status: u16,
    message: String,
    #[serde(flatten)]
    outcome: Outcome,
}

impl ApiResponse {
    /// Builds a success envelope (status 200, empty message).
    pub fn success(payload: Option<Payload>) -> Self {
        Self {
            status: STATUS_OK,
            message: String::new(),
            outcome: Outcome::Payload(payload),
        }
    }

    /// Builds an upstream-error envelope.
    pub fn failure(status: u16, error: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            status,
            message: message.into(),
            outcome: Outcome::Error(error.into()),
        }
    }

    pub fn status(&self) -> u16 {
        self.status
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn outcome(&self) -> &Outcome {
        &self.outcome
    }

    pub fn is_success(&self) -> bool {
        matches!(self.outcome, Outcome::Payload(_))
    }

    pub fn payload(&self) -> Option<&Payload> {
        match &self.outcome {
            Outcome::Payload(payload) => payload.as_ref(),
            Outcome::Error(_) => None,
        }
    }

    pub fn error_code(&self) -> Option<&str> {
        match &self.outcome {
            Outcome::Error(code) => Some(code),
            Outcome::Payload(_) => None,
        }
    }

    pub fn into_payload(self) -> Option<Payload> {
        match self.outcome {
            Outcome::Payload(payload) => payload,
            Outcome::Error(_) => None,
        }
    }

    /// Renders the envelope as a JSON value.
    pub fn to_json(&self) -> Value {
        serde_json::to_value(self).unwrap_or(Value::Null)
    }
}

/// Converts a raw upstream status and body into an [`ApiResponse`].
///
/// # Errors
///
/// Returns [`ChatkitError::MalformedResponse`] when a success body is neither
/// null, an object, nor an array of objects, or when an error body is not an
/// object.
pub fn normalize(status: u16, body: Option<Value>) -> Result<ApiResponse, ChatkitError> {
    if is_success_status(status) {
        let payload = success_payload(body)?;
        return Ok(ApiResponse::success(payload));
    }

    let fields = match body {
        None | Some(Value::Null) => JsonObject::new(),
        Some(Value::Object(fields)) => fields,
        Some(other) => {
            return Err(ChatkitError::malformed(format!(
                "expected an error object for status {status}, got {}",
                kind_of(&other)
            )));
        }
    };

    tracing::debug!(status, "Upstream returned an error envelope");

    Ok(ApiResponse::failure(
        status,
        field_as_string(&fields, "error"),
        field_as_string(&fields, "error_description"),
    ))
}

fn success_payload(body: Option<Value>) -> Result<Option<Payload>, ChatkitError> {
    match body {
        None | Some(Value::Null) => Ok(None),
        Some(Value::Object(object)) => Ok(Some(Payload::Object(object))),
        Some(Value::Array(items)) => items
            .into_iter()
            .enumerate()
            .map(|(index, item)| match item {
                Value::Object(object) => Ok(object),
                other => Err(ChatkitError::malformed(format!(
                    "expected an object at index {index}, got {}",
                    kind_of(&other)
                ))),
            })
            .collect::<Result<Vec<_>, _>>()
            .map(|items| Some(Payload::List(items))),
        Some(other) => Err(ChatkitError::malformed(format!(
            "expected an object or array, got {}",
            kind_of(&other)
        ))),
    }
}

// Missing and null read as empty; non-string scalars keep their JSON text.
fn field_as_string(fields: &JsonObject, key: &str) -> String {
    match fields.get(key) {
        None | Some(Value::Null) => String::new(),
        Some(Value::String(text)) => text.clone(),
        Some(other) => other.to_string(),
    }
}

fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
