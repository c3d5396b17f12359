pub mod components;
pub mod layouts;
pub mod screens;
pub mod theme;
pub mod utils;

use crate::log_buffer::LogBuffer;
use crate::state::{AppState, InputMode};
use ratatui::Frame;
use screens::*;

/// Pure render dispatcher - routes to appropriate screen renderer
/// This function is read-only and never mutates state
pub fn render_app(f: &mut Frame, state: &AppState, log_buffer: &LogBuffer) {
    match state.current_screen() {
        Screen::Landing(landing_state) => {
            landing_screen::render(f, landing_state, &state.progress);
        }
        Screen::Auth(form) => {
            auth_screen::render(f, form, &state.progress);
        }
        Screen::Dashboard(dashboard_state) => {
            dashboard_screen::render(
                f,
                dashboard_state,
                &state.notes,
                state.session.as_ref(),
                &state.progress,
            );

            if let Some(form) = &dashboard_state.form {
                components::note_form::render_note_form(f, form);
            }
        }
        Screen::NoteDetail(detail_state) => {
            note_screen::render(f, detail_state, &state.notes, &state.progress);

            if let Some(form) = &detail_state.form {
                components::note_form::render_note_form(f, form);
            }

            if detail_state.input_mode == InputMode::DeleteConfirmation {
                if let Some(note) = state.notes.get(&detail_state.note_id) {
                    components::delete_confirmation::render_delete_confirmation(f, &note.title);
                }
            }
        }
        Screen::Logs(logs_state) => {
            logs_screen::render(f, logs_state, log_buffer);
        }
    }

    // Help popup on top of any dialog, toasts above everything
    if state.help_visible {
        components::help_popup::render_help_popup(f, state.current_screen());
    }

    components::toast::render_toasts(f, &state.toasts);
}
