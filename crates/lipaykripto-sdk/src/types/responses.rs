/*
[INPUT]:  Provider API schema definitions and serde requirements
[OUTPUT]: Typed Rust response structs with serialization support
[POS]:    Data layer - type definitions for API communication
[UPDATE]: When API schema changes or new types added
*/

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Response of `POST /auth/token`
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct TokenResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub token: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl TokenResponse {
    /// Interpret a provider body; anything but an object reads as empty
    pub fn from_value(value: Value) -> Self {
        let Value::Object(object) = value else {
            return Self::default();
        };
        let token = match object.get("token") {
            Some(Value::String(token)) => Some(token.clone()),
            _ => None,
        };
        Self {
            token,
            error: object.get("error").and_then(provider_text),
        }
    }

    /// Token, if the provider issued a non-empty one
    pub fn into_token(self) -> std::result::Result<String, Option<String>> {
        match self.token {
            Some(token) if !token.is_empty() => Ok(token),
            _ => Err(self.error),
        }
    }
}

/// Generic provider response: `{ success, error?, ...provider fields }`
///
/// The provider object is kept exactly as received.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ApiResponse {
    raw: Map<String, Value>,
}

impl ApiResponse {
    /// Wrap a provider body; anything but an object reads as empty
    pub fn from_value(value: Value) -> Self {
        match value {
            Value::Object(raw) => Self { raw },
            _ => Self::default(),
        }
    }

    /// True only when the provider sent the JSON literal `true`
    pub fn is_success(&self) -> bool {
        matches!(self.raw.get("success"), Some(Value::Bool(true)))
    }

    /// Provider error text; non-string values are rendered as JSON
    pub fn error(&self) -> Option<String> {
        self.raw.get("error").and_then(provider_text)
    }

    /// Provider field by name
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.raw.get(key)
    }

    pub fn as_map(&self) -> &Map<String, Value> {
        &self.raw
    }

    /// Whole response as a JSON value
    pub fn to_value(&self) -> Value {
        Value::Object(self.raw.clone())
    }

    pub fn into_value(self) -> Value {
        Value::Object(self.raw)
    }
}

// Providers occasionally send numbers or objects where text is expected.
pub(crate) fn provider_text(value: &Value) -> Option<String> {
    match value {
        Value::Null => None,
        Value::String(text) => Some(text.clone()),
        other => Some(other.to_string()),
    }
}
