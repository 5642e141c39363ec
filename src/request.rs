// Greeter - Request payload parsing

use serde::{Deserialize, Deserializer};
use serde_json::Value;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum RequestError {
    #[error("input is empty")]
    Empty,
    #[error("input is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("input is JSON but not an object")]
    NotObject,
}

/// The optional payload a caller pipes in, e.g. `{"name": "Ada"}`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct GreetingRequest {
    #[serde(default, deserialize_with = "lenient_string")]
    pub name: Option<String>,
}

/// Accept any JSON value for a string field; non-strings become `None`.
fn lenient_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    match Value::deserialize(deserializer)? {
        Value::String(s) => Ok(Some(s)),
        _ => Ok(None),
    }
}

impl GreetingRequest {
    pub fn parse(bytes: &[u8]) -> Result<Self, RequestError> {
        if bytes.iter().all(u8::is_ascii_whitespace) {
            return Err(RequestError::Empty);
        }

        let value: Value = serde_json::from_slice(bytes)?;
        if !value.is_object() {
            return Err(RequestError::NotObject);
        }
        Ok(serde_json::from_value(value)?)
    }

    /// The requested name, if present and non-empty.
    pub fn display_name(&self) -> Option<&str> {
        self.name.as_deref().filter(|n| !n.is_empty())
    }
}
