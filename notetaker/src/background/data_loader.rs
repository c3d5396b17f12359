use crate::events::{DataEvent, RemoteCall};
use chrono::Utc;
use notes_api::{endpoints::NoteId, NotesApiError, Request, StatusCode};
use notetaker_auth::{SessionManager, SignupDetails};
use std::sync::Arc;
use tokio::sync::mpsc;

/// Runs remote calls against the backend and reports each result as a
/// `DataEvent`
#[derive(Clone)]
pub struct DataLoader {
    pub session: Arc<SessionManager>,
    pub data_tx: mpsc::UnboundedSender<DataEvent>,
}

impl DataLoader {
    pub fn new(session: Arc<SessionManager>, data_tx: mpsc::UnboundedSender<DataEvent>) -> Self {
        Self { session, data_tx }
    }

    pub async fn perform(&self, call: RemoteCall) {
        match call {
            RemoteCall::SendOtp { email } => self.send_otp(email).await,
            RemoteCall::Signup { details } => self.signup(details).await,
            RemoteCall::Signin { email, otp } => self.signin(email, otp).await,
            RemoteCall::Signout => self.signout().await,
            RemoteCall::LoadNotes => self.load_notes().await,
            RemoteCall::AddNote { title, content } => self.add_note(title, content).await,
            RemoteCall::UpdateNote { id, title, content } => {
                self.update_note(id, title, content).await
            }
            RemoteCall::DeleteNote { id } => self.delete_note(id).await,
        }
    }

    fn send(&self, event: DataEvent) {
        // The receiver only goes away while the app is shutting down
        let _ = self.data_tx.send(event);
    }

    async fn send_otp(&self, email: String) {
        tracing::info!("Requesting OTP for {}", email);
        match self.session.send_otp(&email).await {
            Ok(()) => self.send(DataEvent::OtpSent),
            Err(e) => {
                tracing::error!("Failed to send OTP: {}", e);
                self.send(DataEvent::OtpFailed {
                    error: e.user_message("Failed to send OTP. Please try again."),
                });
            }
        }
    }

    async fn signup(&self, details: SignupDetails) {
        tracing::info!("Creating account for {}", details.email);
        match self.session.signup(&details).await {
            Ok(session) => self.send(DataEvent::SignedIn {
                session,
                new_account: true,
            }),
            Err(e) => {
                tracing::error!("Signup failed: {}", e);
                self.send(DataEvent::AuthFailed {
                    error: e.user_message("Signup failed. Please try again."),
                });
            }
        }
    }

    async fn signin(&self, email: String, otp: String) {
        tracing::info!("Signing in {}", email);
        match self.session.login(&email, &otp).await {
            Ok(session) => self.send(DataEvent::SignedIn {
                session,
                new_account: false,
            }),
            Err(e) => {
                tracing::error!("Signin failed: {}", e);
                self.send(DataEvent::AuthFailed {
                    error: e.user_message("Invalid email or OTP."),
                });
            }
        }
    }

    async fn signout(&self) {
        tracing::info!("Signing out");
        let error = match self.session.logout().await {
            Ok(()) => None,
            Err(e) => {
                tracing::error!("Signout failed, session cleared locally anyway: {}", e);
                Some(e.user_message("Error while logging out"))
            }
        };
        self.send(DataEvent::SignedOut { error });
    }

    async fn load_notes(&self) {
        tracing::info!("Loading notes");
        let client = self.session.api_client();
        match client.send(Request::notes().list()).await {
            Ok(response) => {
                tracing::info!("Loaded {} notes", response.data.len());
                self.send(DataEvent::NotesLoaded {
                    notes: response.data,
                });
            }
            Err(e) => {
                log_notes_failure("load notes", &e);
                self.send(DataEvent::NotesLoadFailed {
                    error: e.user_message("Error while fetching notes."),
                });
            }
        }
    }

    async fn add_note(&self, title: String, content: String) {
        tracing::info!("Creating note '{}'", title);
        let client = self.session.api_client();
        match client.send(Request::notes().add(title, content)).await {
            Ok(response) => {
                if response.data.is_none() {
                    tracing::debug!("Server did not echo the new note");
                }
                self.send(DataEvent::NoteCreated {
                    note: response.data,
                });
            }
            Err(e) => {
                log_notes_failure("create note", &e);
                self.send(DataEvent::NoteCreateFailed {
                    error: e.user_message("Error while creating note."),
                });
            }
        }
    }

    async fn update_note(&self, id: NoteId, title: String, content: String) {
        tracing::info!("Updating note {}", id);
        let client = self.session.api_client();
        let request = Request::notes()
            .update(id.clone())
            .title(title.clone())
            .content(content.clone());

        match client.send(request).await {
            Ok(response) => {
                // Prefer the server's copy; fall back to what was submitted
                let event = match response.data {
                    Some(note) => DataEvent::NoteUpdated {
                        id: note.id,
                        title: note.title,
                        content: note.content,
                        updated_at: note.updated_at,
                    },
                    None => DataEvent::NoteUpdated {
                        id,
                        title,
                        content,
                        updated_at: Utc::now(),
                    },
                };
                self.send(event);
            }
            Err(e) => {
                log_notes_failure(&format!("update note {}", id), &e);
                self.send(DataEvent::NoteUpdateFailed {
                    id,
                    error: e.user_message("Error while updating note."),
                });
            }
        }
    }

    async fn delete_note(&self, id: NoteId) {
        tracing::info!("Deleting note {}", id);
        let client = self.session.api_client();
        match client.send(Request::notes().delete(id.clone())).await {
            Ok(_) => self.send(DataEvent::NoteDeleted { id }),
            Err(e) => {
                log_notes_failure(&format!("delete note {}", id), &e);
                self.send(DataEvent::NoteDeleteFailed {
                    id,
                    error: e.user_message("Error while deleting note."),
                });
            }
        }
    }
}

/// A 401 on a notes call means the stored session is no longer accepted
fn session_rejected(e: &NotesApiError) -> bool {
    e.status() == Some(StatusCode::UNAUTHORIZED)
}

fn log_notes_failure(action: &str, e: &NotesApiError) {
    tracing::error!("Failed to {}: {}", action, e);
    if session_rejected(e) {
        tracing::warn!("Server rejected the session; log out and sign in again");
    }
}
