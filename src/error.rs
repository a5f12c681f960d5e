//! Error taxonomy shared by every page controller.
//!
//! Flows return [`ClientError`]; the DOM glue converts it into a `JsValue`
//! only at the wasm boundary.

use thiserror::Error;
use wasm_bindgen::{JsCast, JsValue};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ClientError {
    /// No bearer token in the session store.
    #[error("no session token stored")]
    MissingSession,

    /// The server answered 401 to an authenticated request.
    #[error("Unauthorized - Token is invalid or expired")]
    Unauthorized,

    #[error("HTTP error! status: {status}")]
    Status { status: u16, body: String },

    #[error("network error: {0}")]
    Network(String),

    #[error("could not decode response: {0}")]
    Decode(String),

    #[error("DOM error: {0}")]
    Dom(String),
}

impl ClientError {
    pub fn network(err: JsValue) -> Self {
        Self::Network(js_error_message(&err))
    }

    pub fn dom(err: JsValue) -> Self {
        Self::Dom(js_error_message(&err))
    }

    /// Text shown to the user. Prefers the `message` / `error` field the
    /// backend puts in its JSON error bodies.
    pub fn user_message(&self) -> String {
        match self {
            Self::Status { status, body } => server_message(body)
                .unwrap_or_else(|| format!("HTTP error! status: {}", status)),
            other => other.to_string(),
        }
    }
}

/// Pull a human readable message out of a JSON error body.
pub fn server_message(body: &str) -> Option<String> {
    let value: serde_json::Value = serde_json::from_str(body).ok()?;
    ["message", "error"]
        .iter()
        .find_map(|key| value.get(key).and_then(|v| v.as_str()).map(str::to_owned))
}

pub fn js_error_message(value: &JsValue) -> String {
    if let Some(text) = value.as_string() {
        return text;
    }
    if let Some(err) = value.dyn_ref::<js_sys::Error>() {
        return String::from(err.message());
    }
    format!("{:?}", value)
}

impl From<ClientError> for JsValue {
    fn from(err: ClientError) -> Self {
        JsValue::from_str(&err.to_string())
    }
}

impl From<serde_json::Error> for ClientError {
    fn from(err: serde_json::Error) -> Self {
        Self::Decode(err.to_string())
    }
}
