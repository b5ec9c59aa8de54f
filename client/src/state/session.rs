//! Session record for the signed-in hospital user.
//!
//! SYSTEM CONTEXT
//! ==============
//! The record is written to browser storage at login and read back by the
//! navigation guard on every route change. The 401 interceptor and logout
//! remove it. Only `role` is required; everything else is display data taken
//! from the backend's user payload. A display field of an unexpected type
//! decodes as `None` instead of invalidating the whole record.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize};

/// Storage key holding the serialized [`SessionUser`].
pub const SESSION_KEY: &str = "user";

/// Access role attached to a hospital account.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Admin,
    Doctor,
    Patient,
    /// Any role string this client does not know about. Never matches an
    /// allowed-role set.
    #[serde(other)]
    Unknown,
}

impl Role {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Admin => "admin",
            Self::Doctor => "doctor",
            Self::Patient => "patient",
            Self::Unknown => "unknown",
        }
    }

    /// Human-readable label for headers and badges.
    pub fn label(self) -> &'static str {
        match self {
            Self::Admin => "Administrator",
            Self::Doctor => "Doctor",
            Self::Patient => "Patient",
            Self::Unknown => "Unknown role",
        }
    }
}

/// Logged-in user as persisted in browser storage.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionUser {
    pub role: Role,
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub full_name: Option<String>,
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub is_active: Option<bool>,
}

impl SessionUser {
    /// Minimal record carrying only a role.
    pub fn with_role(role: Role) -> Self {
        Self {
            role,
            id: None,
            username: None,
            email: None,
            full_name: None,
            phone: None,
            is_active: None,
        }
    }

    /// Best available name for greeting the user.
    pub fn display_name(&self) -> &str {
        self.full_name
            .as_deref()
            .or(self.username.as_deref())
            .unwrap_or_else(|| self.role.label())
    }
}

/// Decode an optional display field, mapping a type mismatch to `None`.
fn lenient<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(serde_json::from_value(value).ok())
}

/// Decode a stored session record. Absent or malformed input means no session.
pub fn decode_session(raw: Option<&str>) -> Option<SessionUser> {
    // The stored value may be the literal `null` written by other clients.
    serde_json::from_str::<Option<SessionUser>>(raw?).ok().flatten()
}
