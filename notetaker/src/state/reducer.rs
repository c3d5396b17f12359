use super::{notes::Note, AppState, AuthField, InputMode, LoadingState, Scrollable};
use crate::events::{AppCommand, DataEvent};
use crate::router::Route;
use crate::ui::screens::Screen;

pub const NOTE_NOT_FOUND: &str = "Note not found";

/// Pure state transition function for data events.
///
/// Returns a follow-up command when the result calls for another remote
/// call, which the caller executes like any user command.
pub fn reduce_data_event(state: &mut AppState, event: DataEvent) -> Option<AppCommand> {
    state.progress.finish(&event.task_id());

    // Notes belong to the session; results landing after logout are stale
    if concerns_notes(&event) && !state.is_authenticated() {
        tracing::debug!("Dropping {} result received while signed out", event.task_id());
        return None;
    }

    match event {
        DataEvent::OtpSent => {
            if let Screen::Auth(form) = state.current_screen_mut() {
                form.otp_sent = true;
                form.focus = AuthField::Otp;
            }
            state.notify_success("OTP sent to your email!");
            None
        }

        DataEvent::OtpFailed { error } | DataEvent::AuthFailed { error } => {
            state.notify_error(error);
            None
        }

        DataEvent::SignedIn {
            session,
            new_account,
        } => {
            tracing::info!("Signed in as {}", session.user.email);
            state.notes.clear();
            state.session = Some(session);
            state.notify_success(if new_account {
                "Account created successfully!"
            } else {
                "Signed in successfully!"
            });
            Some(AppCommand::Open(Route::Dashboard))
        }

        DataEvent::SignedOut { error } => {
            state.clear_session();
            if let Some(error) = error {
                state.notify_error(error);
            }
            state.notify_success("Logged out successfully");
            state.open(Route::Landing);
            None
        }

        DataEvent::NotesLoaded { notes } => {
            state.notes.replace_all(notes);
            tracing::debug!("Notes store holds {} notes", state.notes.len());

            let missing_note = match state.current_screen() {
                Screen::NoteDetail(detail) => state.notes.get(&detail.note_id).is_none(),
                _ => false,
            };

            if missing_note {
                state.notify_error(NOTE_NOT_FOUND);
                state.open(Route::Dashboard);
            }
            sync_dashboard(state);
            None
        }

        DataEvent::NotesLoadFailed { error } => {
            if let Screen::Dashboard(dashboard) = state.current_screen_mut() {
                dashboard.notes_loading = LoadingState::Error(error.clone());
            }
            state.notify_error(error);
            None
        }

        DataEvent::NoteCreated { note } => {
            if let Screen::Dashboard(dashboard) = state.current_screen_mut() {
                if dashboard.input_mode == InputMode::NoteForm {
                    dashboard.form = None;
                    dashboard.input_mode = InputMode::Normal;
                }
            }
            state.notify_success("Note created successfully!");

            match note {
                Some(note) => {
                    state.notes.insert(Note::from(note));
                    if let Screen::Dashboard(dashboard) = state.current_screen() {
                        dashboard.select_first(1);
                    }
                    None
                }
                // Nothing echoed: fetch the list so the note shows up with
                // its server id
                None => Some(AppCommand::LoadNotes),
            }
        }

        DataEvent::NoteCreateFailed { error } => {
            state.notify_error(error);
            None
        }

        DataEvent::NoteUpdated {
            id,
            title,
            content,
            updated_at,
        } => {
            if !state.notes.apply_update(&id, title, content, updated_at) {
                tracing::warn!("Updated note {} is not in the local store", id);
            }
            if let Screen::NoteDetail(detail) = state.current_screen_mut() {
                let editing_this = detail
                    .form
                    .as_ref()
                    .is_some_and(|form| form.editing.as_ref() == Some(&id));
                if editing_this {
                    detail.form = None;
                    detail.input_mode = InputMode::Normal;
                }
            }
            state.notify_success("Note updated successfully!");
            None
        }

        DataEvent::NoteUpdateFailed { error, .. } => {
            state.notify_error(error);
            None
        }

        DataEvent::NoteDeleted { id } => {
            state.notes.remove(&id);
            state.notify_success("Note deleted successfully!");

            let viewing_deleted = matches!(
                state.current_screen(),
                Screen::NoteDetail(detail) if detail.note_id == id
            );
            if viewing_deleted {
                state.open(Route::Dashboard);
                sync_dashboard(state);
            }
            None
        }

        DataEvent::NoteDeleteFailed { error, .. } => {
            if let Screen::NoteDetail(detail) = state.current_screen_mut() {
                detail.input_mode = InputMode::Normal;
            }
            state.notify_error(error);
            None
        }
    }
}

/// Bring a dashboard on top of the stack in line with the notes store
fn sync_dashboard(state: &mut AppState) {
    let notes = &state.notes;
    if let Some(Screen::Dashboard(dashboard)) = state.history.last_mut() {
        if notes.is_loaded() {
            dashboard.notes_loading = LoadingState::Loaded;
        }
        let visible = dashboard.visible_notes(notes).len();
        dashboard.clamp_selection(visible);
    }
}

fn concerns_notes(event: &DataEvent) -> bool {
    matches!(
        event,
        DataEvent::NotesLoaded { .. }
            | DataEvent::NotesLoadFailed { .. }
            | DataEvent::NoteCreated { .. }
            | DataEvent::NoteCreateFailed { .. }
            | DataEvent::NoteUpdated { .. }
            | DataEvent::NoteUpdateFailed { .. }
            | DataEvent::NoteDeleted { .. }
            | DataEvent::NoteDeleteFailed { .. }
    )
}
