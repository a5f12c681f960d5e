//! Wire types exchanged with the two backend services.

use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::ClientError;
use crate::utils::parse_leading_int;

/// Body of `/api/login` and `/api/register`.
#[derive(Clone, PartialEq, Eq, Serialize)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

impl Credentials {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }
}

// Passwords must never reach the console through `{:?}`.
impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .finish()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct LoginResponse {
    #[serde(default)]
    pub token: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
}

/// `{ "message": ... }` as returned by register, update and delete.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct MessageResponse {
    #[serde(default)]
    pub message: Option<String>,
}

/// Character as stored by the backend (`/api/all_characters`, create).
/// Only the fields the gallery displays are decoded.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct CharacterRecord {
    #[serde(default)]
    pub id: Option<u64>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub age: Option<i64>,
    #[serde(default)]
    pub role: Option<String>,
    #[serde(default)]
    pub house: Option<String>,
}

/// Entry of the pictures service listing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct CharacterPicture {
    #[serde(default)]
    pub id: Option<u64>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default, rename = "imageUrl")]
    pub image_url: Option<String>,
}

/// PUT body for `/api/characters/{id}`. Unset fields are left out so the
/// backend keeps its stored value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CharacterUpdate {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub age: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub house: Option<String>,
}

/// Create-character body built from whatever fields the form carries.
///
/// Blank values become `null` and `age` is coerced to an integer.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct CharacterPayload(Map<String, Value>);

impl CharacterPayload {
    pub fn from_form_fields<I, K, V>(fields: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let mut map = Map::new();
        for (key, value) in fields {
            let value: String = value.into();
            let value = if value.trim().is_empty() {
                Value::Null
            } else {
                Value::String(value)
            };
            map.insert(key.into(), value);
        }

        if let Some(age) = map.get_mut("age") {
            let parsed = age.as_str().map(parse_leading_int);
            if let Some(parsed) = parsed {
                *age = parsed.map(Value::from).unwrap_or(Value::Null);
            }
        }

        Self(map)
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    pub fn to_json(&self) -> Result<String, ClientError> {
        Ok(serde_json::to_string(&self.0)?)
    }
}
