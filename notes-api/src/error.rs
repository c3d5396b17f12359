use serde::{Deserialize, Serialize};
use tower_api_client::{Error as ApiError, StatusCode};

#[derive(Debug)]
pub enum NotesApiError {
    /// The server answered with a non-success status.
    Api { status: StatusCode, message: String },
    Internal(ApiError),
}

impl NotesApiError {
    /// Message suitable for a user-facing notification.
    ///
    /// Prefers what the server said; falls back to `fallback` for transport
    /// failures and for error bodies that carry no message.
    pub fn user_message(&self, fallback: &str) -> String {
        match self {
            NotesApiError::Api { message, .. } if !message.trim().is_empty() => message.clone(),
            _ => fallback.to_string(),
        }
    }

    pub fn status(&self) -> Option<StatusCode> {
        match self {
            NotesApiError::Api { status, .. } => Some(*status),
            NotesApiError::Internal(_) => None,
        }
    }
}

impl From<ApiError> for NotesApiError {
    fn from(value: ApiError) -> Self {
        match value {
            ApiError::ClientError(status, detail) | ApiError::ServerError(status, detail) => {
                NotesApiError::Api {
                    status,
                    message: message_from_body(&detail),
                }
            }
            e => NotesApiError::Internal(e),
        }
    }
}

impl std::fmt::Display for NotesApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            NotesApiError::Internal(e) => write!(f, "Internal error: {}", e),
            NotesApiError::Api { status, message } => write!(f, "({}) {}", status, message),
        }
    }
}

impl std::error::Error for NotesApiError {}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ErrorResponse {
    #[serde(default)]
    pub success: Option<bool>,
    #[serde(default)]
    pub message: Option<String>,
}

/// Pull `message` out of a JSON error body, or keep the raw body when it
/// is not JSON.
fn message_from_body(body: &str) -> String {
    match serde_json::from_str::<ErrorResponse>(body) {
        Ok(response) => response.message.unwrap_or_default(),
        Err(_) => body.trim().to_string(),
    }
}
