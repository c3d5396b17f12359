pub mod endpoints;
mod error;
mod macros;
pub mod repositories;

pub use crate::error::NotesApiError;
pub use tower_api_client::StatusCode;
use repositories::*;
use secrecy::{ExposeSecret, SecretString};
use tower_api_client::{Client as ApiClient, Request as ApiRequest};

pub const DEFAULT_BASE_URL: &str = "http://localhost:3000";

pub struct Client {
    inner: ApiClient,
    authenticated: bool,
}

impl Client {
    /// Client for calls that need no credentials (OTP, signup, signin).
    pub fn new(base_url: &str) -> Self {
        Self {
            inner: ApiClient::new(trim_base_url(base_url)),
            authenticated: false,
        }
    }

    /// Client that sends the session's bearer token with every request.
    pub fn with_token(base_url: &str, token: &SecretString) -> Self {
        Self {
            inner: ApiClient::new(trim_base_url(base_url)).bearer_auth(token.expose_secret()),
            authenticated: true,
        }
    }

    pub fn is_authenticated(&self) -> bool {
        self.authenticated
    }

    pub async fn send<R>(&self, request: R) -> Result<R::Response, NotesApiError>
    where
        R: ApiRequest,
    {
        self.inner.send(request).await.map_err(From::from)
    }
}

fn trim_base_url(base_url: &str) -> &str {
    base_url.trim_end_matches('/')
}

pub struct Request;

impl Request {
    pub fn users() -> UserRepository {
        UserRepository::new()
    }

    pub fn notes() -> NoteRepository {
        NoteRepository::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn base_url_trailing_slashes_are_dropped() {
        assert_eq!(trim_base_url("http://localhost:3000/"), "http://localhost:3000");
        assert_eq!(trim_base_url("https://notes.example.com"), "https://notes.example.com");
    }

    #[test]
    fn token_client_is_authenticated() {
        let anonymous = Client::new(DEFAULT_BASE_URL);
        assert!(!anonymous.is_authenticated());

        let token = SecretString::from("abc123".to_string());
        let authed = Client::with_token(DEFAULT_BASE_URL, &token);
        assert!(authed.is_authenticated());
    }
}
