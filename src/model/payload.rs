use std::fmt;

use chrono::{DateTime, Utc};
use serde::Serialize;
use serde_json::Value;

/// Placeholder written in place of secret values when a submission is logged.
pub const REDACTED: &str = "********";

/// Keys whose values never reach the log.
const SECRET_KEYS: &[&str] = &["password"];

/// Data collected by the contact form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactPayload {
    pub name: String,
    pub email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub company: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub service: Option<String>,
    pub message: String,
}

/// Data collected by the login tab.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LoginPayload {
    pub email: String,
    pub password: String,
}

/// Data collected by the signup tab. The confirmation field is not sent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SignupPayload {
    pub name: String,
    pub email: String,
    pub password: String,
}

/// Which form produced a [`Payload`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FormKind {
    Contact,
    Login,
    Signup,
}

impl fmt::Display for FormKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Contact => "contact",
            Self::Login => "login",
            Self::Signup => "signup",
        })
    }
}

/// A validated form payload ready for the submit handler.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "form", rename_all = "camelCase")]
pub enum Payload {
    Contact(ContactPayload),
    Login(LoginPayload),
    Signup(SignupPayload),
}

impl Payload {
    /// Returns the form this payload came from.
    pub fn kind(&self) -> FormKind {
        match self {
            Self::Contact(_) => FormKind::Contact,
            Self::Login(_) => FormKind::Login,
            Self::Signup(_) => FormKind::Signup,
        }
    }
}

/// A payload stamped with the moment it was accepted for submission.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Submission {
    pub payload: Payload,
    pub submitted_at: DateTime<Utc>,
}

impl Submission {
    /// Wraps `payload` with the time it was submitted.
    pub fn new(payload: Payload, submitted_at: DateTime<Utc>) -> Self {
        Self {
            payload,
            submitted_at,
        }
    }

    /// Returns the form this submission came from.
    pub fn kind(&self) -> FormKind {
        self.payload.kind()
    }

    /// Serializes the submission with every secret value replaced by [`REDACTED`].
    pub fn redacted_json(&self) -> Result<Value, serde_json::Error> {
        let mut value = serde_json::to_value(self)?;
        redact(&mut value);
        Ok(value)
    }
}

fn redact(value: &mut Value) {
    match value {
        Value::Object(map) => {
            for (key, inner) in map.iter_mut() {
                if SECRET_KEYS.contains(&key.as_str()) {
                    *inner = Value::String(REDACTED.into());
                } else {
                    redact(inner);
                }
            }
        }
        Value::Array(items) => items.iter_mut().for_each(redact),
        _ => {}
    }
}
