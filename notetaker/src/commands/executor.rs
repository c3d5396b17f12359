use crate::background::{data_loader::DataLoader, BackgroundTaskManager};
use crate::events::{AppCommand, RemoteCall};
use crate::router::Route;
use crate::state::reducer::NOTE_NOT_FOUND;
use crate::state::validators;
use crate::state::*;
use crate::ui::screens::Screen;

/// Number of log entries moved by a page scroll
const LOG_PAGE_SIZE: usize = 20;

/// Execute a command, running any remote call it issues as a background task
pub fn execute_command(
    command: AppCommand,
    state: &mut AppState,
    task_manager: &mut BackgroundTaskManager,
    data_loader: &DataLoader,
) {
    if let Some(call) = execute_command_sync(command, state) {
        let task_id = call.task_id();
        let replace = call.replaces_running();
        let data_loader = data_loader.clone();
        task_manager.spawn_task(task_id, replace, async move {
            data_loader.perform(call).await;
        });
    }
}

/// Apply a command to the state.
///
/// Never performs I/O: a command that needs the backend returns the
/// `RemoteCall` to make, and the progress indicator is started for it.
pub fn execute_command_sync(command: AppCommand, state: &mut AppState) -> Option<RemoteCall> {
    // Save whether we're setting a pending key (we don't want to clear it in that case)
    let is_setting_pending_key = matches!(command, AppCommand::SetPendingKey(_));

    let call = match command {
        AppCommand::Quit => {
            state.should_quit = true;
            None
        }
        AppCommand::ToggleHelp => {
            state.help_visible = !state.help_visible;
            None
        }
        AppCommand::SetPendingKey(c) => {
            state.pending_key = Some(c);
            None
        }
        AppCommand::ClearPendingKey => {
            state.pending_key = None;
            None
        }

        // Navigation
        AppCommand::NavigateBack => {
            state.navigate_back();
            None
        }
        AppCommand::Open(route) => open_route(state, route),
        AppCommand::SelectNext => {
            match state.current_screen() {
                Screen::Landing(s) => s.select_next(LANDING_ACTIONS.len()),
                Screen::Dashboard(s) => s.select_next(s.visible_notes(&state.notes).len()),
                _ => {}
            }
            None
        }
        AppCommand::SelectPrevious => {
            match state.current_screen() {
                Screen::Landing(s) => s.select_prev(LANDING_ACTIONS.len()),
                Screen::Dashboard(s) => s.select_prev(s.visible_notes(&state.notes).len()),
                _ => {}
            }
            None
        }
        AppCommand::NavigateToTop => {
            match state.current_screen_mut() {
                Screen::Landing(s) => s.select_first(LANDING_ACTIONS.len()),
                Screen::Logs(s) => s.scroll_offset = s.total_entries.saturating_sub(1),
                _ => {}
            }
            if let Screen::Dashboard(s) = state.current_screen() {
                s.select_first(s.visible_notes(&state.notes).len());
            }
            None
        }
        AppCommand::NavigateToBottom => {
            match state.current_screen_mut() {
                Screen::Landing(s) => s.select_last(LANDING_ACTIONS.len()),
                Screen::Logs(s) => s.scroll_offset = 0,
                _ => {}
            }
            if let Screen::Dashboard(s) = state.current_screen() {
                s.select_last(s.visible_notes(&state.notes).len());
            }
            None
        }

        // Form editing
        AppCommand::NavigateFormField { forward } => {
            match state.current_screen_mut() {
                Screen::Auth(form) if forward => form.focus_next(),
                Screen::Auth(form) => form.focus_prev(),
                Screen::Dashboard(DashboardState {
                    form: Some(form), ..
                })
                | Screen::NoteDetail(NoteDetailState {
                    form: Some(form), ..
                }) => form.toggle_focus(),
                _ => {}
            }
            None
        }
        AppCommand::AppendFormChar(c) => {
            if let Some(value) = focused_value_mut(state) {
                value.push(c);
            }
            None
        }
        AppCommand::DeleteFormChar => {
            if let Some(value) = focused_value_mut(state) {
                value.pop();
            }
            None
        }
        AppCommand::ClearFormField => {
            if let Some(value) = focused_value_mut(state) {
                value.clear();
            }
            None
        }

        // Authentication
        AppCommand::SendOtp => send_otp(state),
        AppCommand::SubmitAuthForm => submit_auth_form(state),
        AppCommand::Logout => {
            if state.is_authenticated() {
                Some(RemoteCall::Signout)
            } else {
                None
            }
        }

        // Notes
        AppCommand::LoadNotes => load_notes(state),
        AppCommand::EnterNoteCreateMode => {
            if let Screen::Dashboard(dashboard) = state.current_screen_mut() {
                dashboard.form = Some(NoteFormState::new());
                dashboard.input_mode = InputMode::NoteForm;
            }
            None
        }
        AppCommand::EnterNoteEditMode => {
            let note = match state.current_screen() {
                Screen::NoteDetail(detail) => state.notes.get(&detail.note_id).cloned(),
                _ => None,
            };
            if let (Some(note), Screen::NoteDetail(detail)) = (note, state.current_screen_mut()) {
                detail.form = Some(NoteFormState::for_note(&note));
                detail.input_mode = InputMode::NoteForm;
            }
            None
        }
        AppCommand::ExitNoteForm => {
            match state.current_screen_mut() {
                Screen::Dashboard(DashboardState {
                    form, input_mode, ..
                })
                | Screen::NoteDetail(NoteDetailState {
                    form, input_mode, ..
                }) => {
                    *form = None;
                    *input_mode = InputMode::Normal;
                }
                _ => {}
            }
            None
        }
        AppCommand::SubmitNoteForm => submit_note_form(state),
        AppCommand::InitiateNoteDelete => {
            if let Screen::NoteDetail(detail) = state.current_screen_mut() {
                detail.input_mode = InputMode::DeleteConfirmation;
            }
            None
        }
        AppCommand::ConfirmNoteDelete => match state.current_screen_mut() {
            Screen::NoteDetail(detail) if detail.input_mode == InputMode::DeleteConfirmation => {
                detail.input_mode = InputMode::Normal;
                Some(RemoteCall::DeleteNote {
                    id: detail.note_id.clone(),
                })
            }
            _ => None,
        },
        AppCommand::CancelNoteDelete => {
            if let Screen::NoteDetail(detail) = state.current_screen_mut() {
                detail.input_mode = InputMode::Normal;
            }
            None
        }

        // Search mode
        AppCommand::EnterSearchMode => {
            if let Screen::Dashboard(s) = state.current_screen_mut() {
                s.input_mode = InputMode::Search;
            }
            None
        }
        AppCommand::ExitSearchMode => {
            if let Screen::Dashboard(s) = state.current_screen_mut() {
                s.input_mode = InputMode::Normal;
            }
            None
        }
        AppCommand::AppendSearchChar(c) => {
            if let Screen::Dashboard(s) = state.current_screen_mut() {
                s.search_query.push(c);
            }
            reset_dashboard_selection(state);
            None
        }
        AppCommand::DeleteSearchChar => {
            if let Screen::Dashboard(s) = state.current_screen_mut() {
                s.search_query.pop();
            }
            reset_dashboard_selection(state);
            None
        }
        AppCommand::ClearSearch => {
            if let Screen::Dashboard(s) = state.current_screen_mut() {
                s.search_query.clear();
                s.input_mode = InputMode::Normal;
            }
            reset_dashboard_selection(state);
            None
        }

        // Log screen
        AppCommand::NavigateToLogs => {
            // No logging here; the log screen would log its own opening
            if !matches!(state.current_screen(), Screen::Logs(_)) {
                state.navigate_to(Screen::Logs(LogsState::default()));
            }
            None
        }
        AppCommand::ScrollLogsUp => {
            if let Screen::Logs(s) = state.current_screen_mut() {
                // Scroll up means going back in time (increase offset)
                if s.scroll_offset < s.total_entries.saturating_sub(1) {
                    s.scroll_offset += 1;
                }
            }
            None
        }
        AppCommand::ScrollLogsDown => {
            if let Screen::Logs(s) = state.current_screen_mut() {
                s.scroll_offset = s.scroll_offset.saturating_sub(1);
            }
            None
        }
        AppCommand::ScrollLogsPageUp => {
            if let Screen::Logs(s) = state.current_screen_mut() {
                s.scroll_offset =
                    (s.scroll_offset + LOG_PAGE_SIZE).min(s.total_entries.saturating_sub(1));
            }
            None
        }
        AppCommand::ScrollLogsPageDown => {
            if let Screen::Logs(s) = state.current_screen_mut() {
                s.scroll_offset = s.scroll_offset.saturating_sub(LOG_PAGE_SIZE);
            }
            None
        }
        AppCommand::ScrollLogsToTop => {
            if let Screen::Logs(s) = state.current_screen_mut() {
                s.scroll_offset = s.total_entries.saturating_sub(1);
            }
            None
        }
        AppCommand::ScrollLogsToBottom => {
            if let Screen::Logs(s) = state.current_screen_mut() {
                s.scroll_offset = 0;
            }
            None
        }
    };

    // Clear pending key after any command except SetPendingKey
    // This ensures multi-key sequences are properly reset after completion
    if !is_setting_pending_key && state.pending_key.is_some() {
        state.pending_key = None;
    }

    let call = call?;
    let task_id = call.task_id();
    if !call.replaces_running() && state.progress.is_pending(&task_id) {
        tracing::debug!("Ignoring {}, the previous one is still in flight", task_id);
        return None;
    }

    tracing::debug!("Issuing remote call {}", task_id);
    state.progress.begin(task_id);
    Some(call)
}

fn open_route(state: &mut AppState, route: Route) -> Option<RemoteCall> {
    match state.open(route) {
        Route::Dashboard => load_notes(state),
        Route::Note(id) if !state.notes.is_loaded() => {
            // Deep link: the note can only be resolved once notes are loaded
            tracing::debug!("Waiting on notes to resolve note {}", id);
            load_notes(state)
        }
        Route::Note(id) if state.notes.get(&id).is_none() => {
            state.notify_error(NOTE_NOT_FOUND);
            state.open(Route::Dashboard);
            load_notes(state)
        }
        _ => None,
    }
}

fn load_notes(state: &mut AppState) -> Option<RemoteCall> {
    if !state.is_authenticated() {
        return None;
    }
    let loaded = state.notes.is_loaded();
    if let Screen::Dashboard(dashboard) = state.current_screen_mut() {
        // Notes already on screen stay visible while refreshing
        if !loaded {
            dashboard.notes_loading = LoadingState::Loading;
        }
    }
    Some(RemoteCall::LoadNotes)
}

fn send_otp(state: &mut AppState) -> Option<RemoteCall> {
    let Screen::Auth(form) = state.current_screen() else {
        return None;
    };
    match validators::validate_otp_email(form) {
        Ok(email) => Some(RemoteCall::SendOtp { email }),
        Err(message) => {
            state.notify_error(message);
            None
        }
    }
}

fn submit_auth_form(state: &mut AppState) -> Option<RemoteCall> {
    let Screen::Auth(form) = state.current_screen() else {
        return None;
    };
    if !form.otp_sent {
        state.notify_error(validators::OTP_NOT_SENT);
        return None;
    }
    let result = match form.mode {
        AuthMode::Signup => {
            validators::validate_signup(form).map(|details| RemoteCall::Signup { details })
        }
        AuthMode::Signin => {
            validators::validate_signin(form).map(|(email, otp)| RemoteCall::Signin { email, otp })
        }
    };
    match result {
        Ok(call) => Some(call),
        Err(message) => {
            state.notify_error(message);
            None
        }
    }
}

fn submit_note_form(state: &mut AppState) -> Option<RemoteCall> {
    let form = match state.current_screen() {
        Screen::Dashboard(DashboardState {
            form: Some(form), ..
        })
        | Screen::NoteDetail(NoteDetailState {
            form: Some(form), ..
        }) => form,
        _ => return None,
    };

    let result = validators::validate_note(form).map(|(title, content)| match &form.editing {
        Some(id) => RemoteCall::UpdateNote {
            id: id.clone(),
            title,
            content,
        },
        None => RemoteCall::AddNote { title, content },
    });

    match result {
        Ok(call) => Some(call),
        Err(message) => {
            state.notify_error(message);
            None
        }
    }
}

fn focused_value_mut(state: &mut AppState) -> Option<&mut String> {
    match state.current_screen_mut() {
        Screen::Auth(form) => Some(form.focused_value_mut()),
        Screen::Dashboard(DashboardState {
            form: Some(form), ..
        })
        | Screen::NoteDetail(NoteDetailState {
            form: Some(form), ..
        }) => Some(form.focused_value_mut()),
        _ => None,
    }
}

/// Reset table selection when the search changes
fn reset_dashboard_selection(state: &AppState) {
    if let Screen::Dashboard(s) = state.current_screen() {
        s.select_first(s.visible_notes(&state.notes).len());
    }
}
