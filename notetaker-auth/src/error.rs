use notes_api::NotesApiError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AuthError {
    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("Session storage error: {0}")]
    SessionStorage(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("API error: {0}")]
    Api(#[from] NotesApiError),

    #[error("Signout failed: {remote}; {storage}")]
    Logout {
        remote: NotesApiError,
        storage: Box<AuthError>,
    },
}

impl AuthError {
    /// Text for a user-facing notification: the server's own message when
    /// it sent one, `fallback` otherwise.
    pub fn user_message(&self, fallback: &str) -> String {
        match self {
            AuthError::Api(e) | AuthError::Logout { remote: e, .. } => e.user_message(fallback),
            _ => fallback.to_string(),
        }
    }
}

impl From<config::ConfigError> for AuthError {
    fn from(err: config::ConfigError) -> Self {
        AuthError::Configuration(err.to_string())
    }
}
