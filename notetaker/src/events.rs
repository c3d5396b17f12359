use crate::router::Route;
use chrono::{DateTime, Utc};
use notes_api::endpoints::{notes::Note, NoteId};
use notetaker_auth::{SignupDetails, StoredSession};

/// Commands to execute (user actions → state changes and remote calls)
#[derive(Debug, Clone, PartialEq)]
pub enum AppCommand {
    SelectNext,
    SelectPrevious,
    NavigateToTop,
    NavigateToBottom,

    // Navigation
    NavigateBack,
    Open(Route),

    // Form editing (auth forms and the note dialog)
    NavigateFormField { forward: bool },
    AppendFormChar(char),
    DeleteFormChar,
    ClearFormField,

    // Authentication
    SendOtp,
    SubmitAuthForm,
    Logout,

    // Notes
    LoadNotes,
    EnterNoteCreateMode,
    EnterNoteEditMode,
    ExitNoteForm,
    SubmitNoteForm,
    InitiateNoteDelete,
    ConfirmNoteDelete,
    CancelNoteDelete,

    // Search mode
    EnterSearchMode,
    ExitSearchMode,
    AppendSearchChar(char),
    DeleteSearchChar,
    ClearSearch,

    // View toggles
    ToggleHelp,

    // Log screen
    NavigateToLogs,
    ScrollLogsUp,
    ScrollLogsDown,
    ScrollLogsPageUp,
    ScrollLogsPageDown,
    ScrollLogsToTop,
    ScrollLogsToBottom,

    // Key sequence state
    SetPendingKey(char),
    ClearPendingKey,

    // System
    Quit,
}

/// A call to the backend, issued by a command and performed off the UI task
#[derive(Debug, Clone, PartialEq)]
pub enum RemoteCall {
    SendOtp { email: String },
    Signup { details: SignupDetails },
    Signin { email: String, otp: String },
    Signout,
    LoadNotes,
    AddNote { title: String, content: String },
    UpdateNote { id: NoteId, title: String, content: String },
    DeleteNote { id: NoteId },
}

impl RemoteCall {
    /// Identifies the background task and its progress entry
    pub fn task_id(&self) -> String {
        match self {
            RemoteCall::SendOtp { .. } => "send_otp".to_string(),
            RemoteCall::Signup { .. } | RemoteCall::Signin { .. } => "auth".to_string(),
            RemoteCall::Signout => "signout".to_string(),
            RemoteCall::LoadNotes => "load_notes".to_string(),
            RemoteCall::AddNote { .. } => "add_note".to_string(),
            RemoteCall::UpdateNote { id, .. } => format!("update_note:{}", id),
            RemoteCall::DeleteNote { id } => format!("delete_note:{}", id),
        }
    }

    /// Whether a new call may take over a running one with the same id.
    ///
    /// Only reads qualify. A write already sent runs to completion, and a
    /// second identical write is not issued while it is in flight.
    pub fn replaces_running(&self) -> bool {
        matches!(self, RemoteCall::LoadNotes)
    }
}

/// Events from background tasks (responses to remote calls)
#[derive(Debug, Clone)]
pub enum DataEvent {
    // Authentication
    OtpSent,
    OtpFailed {
        error: String,
    },
    SignedIn {
        session: StoredSession,
        new_account: bool,
    },
    AuthFailed {
        error: String,
    },
    SignedOut {
        error: Option<String>,
    },

    // Notes
    NotesLoaded {
        notes: Vec<Note>,
    },
    NotesLoadFailed {
        error: String,
    },
    NoteCreated {
        note: Option<Note>,
    },
    NoteCreateFailed {
        error: String,
    },
    NoteUpdated {
        id: NoteId,
        title: String,
        content: String,
        updated_at: DateTime<Utc>,
    },
    NoteUpdateFailed {
        id: NoteId,
        error: String,
    },
    NoteDeleted {
        id: NoteId,
    },
    NoteDeleteFailed {
        id: NoteId,
        error: String,
    },
}

impl DataEvent {
    /// Id of the task that produced this event
    pub fn task_id(&self) -> String {
        match self {
            DataEvent::OtpSent | DataEvent::OtpFailed { .. } => "send_otp".to_string(),
            DataEvent::SignedIn { .. } | DataEvent::AuthFailed { .. } => "auth".to_string(),
            DataEvent::SignedOut { .. } => "signout".to_string(),
            DataEvent::NotesLoaded { .. } | DataEvent::NotesLoadFailed { .. } => {
                "load_notes".to_string()
            }
            DataEvent::NoteCreated { .. } | DataEvent::NoteCreateFailed { .. } => {
                "add_note".to_string()
            }
            DataEvent::NoteUpdated { id, .. } | DataEvent::NoteUpdateFailed { id, .. } => {
                format!("update_note:{}", id)
            }
            DataEvent::NoteDeleted { id } | DataEvent::NoteDeleteFailed { id, .. } => {
                format!("delete_note:{}", id)
            }
        }
    }
}
