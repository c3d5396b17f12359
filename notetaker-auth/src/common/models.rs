use chrono::{serde::ts_seconds, DateTime, Utc};
use notes_api::endpoints::users::{SigninData, User};
use secrecy::SecretString;
use serde::{Deserialize, Serialize};

/// The signed-in user as persisted between runs
#[derive(Clone, PartialEq, Serialize, Deserialize)]
pub struct StoredSession {
    pub user: User,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    token: Option<String>,
    #[serde(with = "ts_seconds")]
    pub saved_at: DateTime<Utc>,
}

impl StoredSession {
    pub fn new(user: User, token: Option<String>) -> Self {
        Self {
            user,
            token,
            saved_at: Utc::now(),
        }
    }

    pub fn bearer_token(&self) -> Option<SecretString> {
        self.token.clone().map(SecretString::from)
    }

    pub fn has_token(&self) -> bool {
        self.token.is_some()
    }
}

impl From<SigninData> for StoredSession {
    fn from(data: SigninData) -> Self {
        Self::new(data.user, data.token)
    }
}

impl std::fmt::Debug for StoredSession {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StoredSession")
            .field("user", &self.user)
            .field("token", &self.token.as_ref().map(|_| "[REDACTED]"))
            .field("saved_at", &self.saved_at)
            .finish()
    }
}
