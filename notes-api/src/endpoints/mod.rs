pub mod notes;
pub mod users;

use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// Server-assigned note identifier (an opaque string such as a database
/// object id).
#[derive(Default, Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NoteId(String);

impl NoteId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Display for NoteId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for NoteId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<String> for NoteId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl PartialEq<str> for NoteId {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for NoteId {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

/// Body of calls whose only payload is a status message.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MessageResponse {
    #[serde(default)]
    pub success: Option<bool>,
    #[serde(default)]
    pub message: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn note_id_is_a_bare_json_string() {
        let id: NoteId = serde_json::from_str(r#""665f1c2ab3e4""#).unwrap();
        assert_eq!(id, "665f1c2ab3e4");
        assert_eq!(serde_json::to_string(&id).unwrap(), r#""665f1c2ab3e4""#);
    }

    #[test]
    fn message_response_tolerates_missing_fields() {
        let resp: MessageResponse = serde_json::from_str("{}").unwrap();
        assert!(resp.message.is_none());

        let resp: MessageResponse =
            serde_json::from_str(r#"{"success":true,"message":"OTP sent"}"#).unwrap();
        assert_eq!(resp.message.as_deref(), Some("OTP sent"));
    }
}
