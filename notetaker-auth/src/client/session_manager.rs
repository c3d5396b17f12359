use crate::common::StoredSession;
use crate::error::AuthError;
use crate::{SessionStore, Settings};
use notes_api::{Client, Request};
use std::sync::{Arc, RwLock};

/// Form values needed to create an account
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SignupDetails {
    pub full_name: String,
    pub email: String,
    pub dob: String,
    pub otp: String,
}

struct Current {
    session: Option<StoredSession>,
    client: Arc<Client>,
}

/// Owns the signed-in identity: keeps it in memory, mirrors it to the
/// session file and hands out an API client carrying its credentials.
pub struct SessionManager {
    settings: Settings,
    store: SessionStore,
    current: RwLock<Current>,
}

impl SessionManager {
    pub fn new(settings: Settings) -> Result<Self, AuthError> {
        let store = SessionStore::new()?;
        Ok(Self::with_store(settings, store))
    }

    pub fn with_store(settings: Settings, store: SessionStore) -> Self {
        let client = Arc::new(Client::new(&settings.api_url));
        Self {
            settings,
            store,
            current: RwLock::new(Current {
                session: None,
                client,
            }),
        }
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Load a session saved by an earlier run.
    ///
    /// An unreadable session file is discarded rather than reported, so a
    /// corrupt file only costs the user a fresh sign-in.
    pub fn restore(&self) -> Result<Option<StoredSession>, AuthError> {
        let session = match self.store.load() {
            Ok(session) => session,
            Err(AuthError::Json(e)) => {
                tracing::warn!("Discarding unreadable session file: {}", e);
                self.store.delete()?;
                None
            }
            Err(e) => return Err(e),
        };

        if let Some(ref session) = session {
            tracing::info!("Restored session for {}", session.user.email);
            self.set_current(Some(session.clone()));
        }
        Ok(session)
    }

    pub fn current(&self) -> Option<StoredSession> {
        self.read_current(|current| current.session.clone())
    }

    pub fn is_authenticated(&self) -> bool {
        self.read_current(|current| current.session.is_some())
    }

    /// Client for the current session (anonymous when signed out)
    pub fn api_client(&self) -> Arc<Client> {
        self.read_current(|current| current.client.clone())
    }

    pub async fn send_otp(&self, email: &str) -> Result<(), AuthError> {
        let client = self.anonymous_client();
        client.send(Request::users().send_otp(email)).await?;
        tracing::info!("OTP requested for {}", email);
        Ok(())
    }

    /// Create the account, then sign straight in with the same passcode.
    pub async fn signup(&self, details: &SignupDetails) -> Result<StoredSession, AuthError> {
        let client = self.anonymous_client();
        let req = Request::users().signup(
            details.full_name.as_str(),
            details.email.as_str(),
            details.otp.as_str(),
            details.dob.as_str(),
        );
        client.send(req).await?;
        tracing::info!("Account created for {}", details.email);

        self.login(&details.email, &details.otp).await
    }

    pub async fn login(&self, email: &str, otp: &str) -> Result<StoredSession, AuthError> {
        let client = self.anonymous_client();
        let response = client.send(Request::users().signin(email, otp)).await?;
        let session = StoredSession::from(response.data);

        self.store.save(&session)?;
        self.set_current(Some(session.clone()));
        tracing::info!(
            "Signed in as {} (bearer token: {})",
            session.user.email,
            session.has_token()
        );
        Ok(session)
    }

    /// Sign out remotely and forget the local session.
    ///
    /// The local session is cleared even when the server call fails; the
    /// failure is still returned so it can be reported.
    pub async fn logout(&self) -> Result<(), AuthError> {
        let client = self.api_client();
        let remote = client.send(Request::users().signout()).await;

        self.set_current(None);
        let cleared = self.store.delete();
        if cleared.is_ok() {
            tracing::info!("Local session cleared");
        }

        match (remote, cleared) {
            (Ok(_), Ok(())) => Ok(()),
            (Err(remote), Ok(())) => Err(remote.into()),
            (Ok(_), Err(storage)) => Err(storage),
            (Err(remote), Err(storage)) => Err(AuthError::Logout {
                remote,
                storage: Box::new(storage),
            }),
        }
    }

    fn anonymous_client(&self) -> Client {
        Client::new(&self.settings.api_url)
    }

    fn set_current(&self, session: Option<StoredSession>) {
        let client = match session.as_ref().and_then(StoredSession::bearer_token) {
            Some(token) => Client::with_token(&self.settings.api_url, &token),
            None => Client::new(&self.settings.api_url),
        };

        let mut current = self
            .current
            .write()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        current.session = session;
        current.client = Arc::new(client);
    }

    fn read_current<T>(&self, f: impl FnOnce(&Current) -> T) -> T {
        let current = self
            .current
            .read()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        f(&current)
    }
}
