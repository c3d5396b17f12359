use crate::events::AppCommand;
use crate::input::{Key, KeyEvent};
use crate::router::Route;
use crate::state::*;
use crate::ui::screens::Screen;

/// Map user input (KeyEvent) to AppCommand based on current UI state
/// Returns None if the key should be ignored
pub fn handle_key_input(event: KeyEvent, state: &AppState) -> Option<AppCommand> {
    let key = event.key;

    // Ctrl+C always quits, even from a text field
    if event.is_ctrl('c') {
        return Some(AppCommand::Quit);
    }

    // Priority 1: text entry swallows every other key
    match state.current_screen() {
        Screen::Auth(form) => return handle_auth_form_keys(event, form),
        Screen::Dashboard(DashboardState {
            input_mode: InputMode::NoteForm,
            form: Some(form),
            ..
        })
        | Screen::NoteDetail(NoteDetailState {
            input_mode: InputMode::NoteForm,
            form: Some(form),
            ..
        }) => return handle_note_form_keys(event, form),
        Screen::Dashboard(DashboardState {
            input_mode: InputMode::Search,
            ..
        }) => {
            return match key {
                Key::Enter => Some(AppCommand::ExitSearchMode),
                Key::Backspace => Some(AppCommand::DeleteSearchChar),
                Key::Char(c) => Some(AppCommand::AppendSearchChar(c)),
                Key::Esc => Some(AppCommand::ClearSearch),
                _ => None,
            };
        }
        _ => {}
    }

    // Priority 2: Delete confirmation popup
    if let Screen::NoteDetail(detail) = state.current_screen() {
        if detail.input_mode == InputMode::DeleteConfirmation {
            return match key {
                Key::Char('y') | Key::Enter => Some(AppCommand::ConfirmNoteDelete),
                Key::Char('n') | Key::Esc => Some(AppCommand::CancelNoteDelete),
                _ => None,
            };
        }
    }

    // Priority 3: help popup takes precedence over screen-specific Esc
    if state.help_visible {
        return match key {
            Key::Char('?') | Key::Esc => Some(AppCommand::ToggleHelp),
            Key::Char('q') => Some(AppCommand::Quit),
            _ => None,
        };
    }

    // Handle multi-key sequences
    if let Some(pending) = state.pending_key {
        return match (pending, key) {
            // 'g' followed by 'g' -> navigate to top of list
            ('g', Key::Char('g')) => Some(AppCommand::NavigateToTop),
            // 'g' followed by 'l' -> go to logs
            ('g', Key::Char('l')) => Some(AppCommand::NavigateToLogs),
            // 'g' followed by 'd' -> go to dashboard
            ('g', Key::Char('d')) => Some(AppCommand::Open(Route::Dashboard)),
            // Any other key clears the pending key
            _ => Some(AppCommand::ClearPendingKey),
        };
    }

    match (state.current_screen(), key) {
        // Global help toggle
        (_, Key::Char('?')) => Some(AppCommand::ToggleHelp),

        // Global quit command
        (_, Key::Char('q')) => Some(AppCommand::Quit),

        // Multi-key sequence initiator: 'g' sets pending key
        (_, Key::Char('g')) => Some(AppCommand::SetPendingKey('g')),

        // List ends
        (_, Key::Char('G') | Key::End) => Some(AppCommand::NavigateToBottom),
        (_, Key::Home) => Some(AppCommand::NavigateToTop),

        // Landing screen
        (Screen::Landing(..), Key::Up | Key::Char('k')) => Some(AppCommand::SelectPrevious),
        (Screen::Landing(..), Key::Down | Key::Char('j')) => Some(AppCommand::SelectNext),
        (Screen::Landing(landing), Key::Enter | Key::Right | Key::Char('l')) => {
            landing.selected_action().map(|action| match action {
                LandingAction::Signup => AppCommand::Open(Route::Signup),
                LandingAction::Signin => AppCommand::Open(Route::Signin),
            })
        }
        (Screen::Landing(..), Key::Char('s')) => Some(AppCommand::Open(Route::Signup)),
        (Screen::Landing(..), Key::Char('i')) => Some(AppCommand::Open(Route::Signin)),

        // Dashboard
        (Screen::Dashboard(..), Key::Up | Key::Char('k')) => Some(AppCommand::SelectPrevious),
        (Screen::Dashboard(..), Key::Down | Key::Char('j')) => Some(AppCommand::SelectNext),
        (Screen::Dashboard(dashboard), Key::Enter | Key::Right | Key::Char('l')) => dashboard
            .selected_note_id(&state.notes)
            .map(|id| AppCommand::Open(Route::Note(id))),
        (Screen::Dashboard(..), Key::Char('n')) => Some(AppCommand::EnterNoteCreateMode),
        (Screen::Dashboard(..), Key::Char('/')) => Some(AppCommand::EnterSearchMode),
        (Screen::Dashboard(..), Key::Char('r')) => Some(AppCommand::LoadNotes),
        (Screen::Dashboard(..), Key::Char('L')) => Some(AppCommand::Logout),
        (Screen::Dashboard(..), Key::Esc) => Some(AppCommand::ClearSearch),

        // Note detail
        (Screen::NoteDetail(detail), Key::Char('e')) => state
            .notes
            .get(&detail.note_id)
            .map(|_| AppCommand::EnterNoteEditMode),
        (Screen::NoteDetail(detail), Key::Char('d') | Key::Backspace) => state
            .notes
            .get(&detail.note_id)
            .map(|_| AppCommand::InitiateNoteDelete),
        (Screen::NoteDetail(..), Key::Char('L')) => Some(AppCommand::Logout),
        (Screen::NoteDetail(..), Key::Esc) => Some(AppCommand::NavigateBack),

        // Logs screen
        (Screen::Logs(..), Key::Up | Key::Char('k')) => Some(AppCommand::ScrollLogsUp),
        (Screen::Logs(..), Key::Down | Key::Char('j')) => Some(AppCommand::ScrollLogsDown),
        (Screen::Logs(..), Key::PageUp) => Some(AppCommand::ScrollLogsPageUp),
        (Screen::Logs(..), Key::PageDown) => Some(AppCommand::ScrollLogsPageDown),
        (Screen::Logs(..), Key::Esc) => Some(AppCommand::NavigateBack),

        // Global back navigation (left/h)
        (_, Key::Left | Key::Char('h')) => Some(AppCommand::NavigateBack),

        // Ignore other keys
        _ => None,
    }
}

/// Handle keyboard input on the signup and signin forms
fn handle_auth_form_keys(event: KeyEvent, form: &AuthFormState) -> Option<AppCommand> {
    // Ctrl+O to (re)send the OTP from any field
    if event.is_ctrl('o') {
        return Some(AppCommand::SendOtp);
    }

    // Ctrl+L to clear current field
    if event.is_ctrl('l') {
        return Some(AppCommand::ClearFormField);
    }

    if event.modifiers.ctrl {
        return None;
    }

    match event.key {
        Key::Esc => Some(AppCommand::NavigateBack),
        Key::Tab | Key::Down => Some(AppCommand::NavigateFormField { forward: true }),
        Key::BackTab | Key::Up => Some(AppCommand::NavigateFormField { forward: false }),
        Key::Enter => match form.focus {
            AuthField::Email if !form.otp_sent => Some(AppCommand::SendOtp),
            AuthField::Otp => Some(AppCommand::SubmitAuthForm),
            _ => Some(AppCommand::NavigateFormField { forward: true }),
        },
        Key::Backspace => Some(AppCommand::DeleteFormChar),
        Key::Char(c) => Some(AppCommand::AppendFormChar(c)),
        _ => None,
    }
}

/// Handle keyboard input in the create/edit note dialog
fn handle_note_form_keys(event: KeyEvent, form: &NoteFormState) -> Option<AppCommand> {
    // Ctrl+S submits from either field
    if event.is_ctrl('s') {
        return Some(AppCommand::SubmitNoteForm);
    }

    // Ctrl+L to clear current field
    if event.is_ctrl('l') {
        return Some(AppCommand::ClearFormField);
    }

    if event.modifiers.ctrl {
        return None;
    }

    match event.key {
        Key::Esc => Some(AppCommand::ExitNoteForm),
        Key::Tab | Key::BackTab => Some(AppCommand::NavigateFormField { forward: true }),
        Key::Enter => match form.focus {
            NoteField::Title => Some(AppCommand::NavigateFormField { forward: true }),
            NoteField::Content => Some(AppCommand::AppendFormChar('\n')),
        },
        Key::Backspace => Some(AppCommand::DeleteFormChar),
        Key::Char(c) => Some(AppCommand::AppendFormChar(c)),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use notes_api::endpoints::NoteId;

    fn press(key: Key, state: &AppState) -> Option<AppCommand> {
        handle_key_input(KeyEvent::new(key), state)
    }

    #[test]
    fn landing_keys_open_auth_routes() {
        let state = AppState::new();
        assert_eq!(
            press(Key::Char('s'), &state),
            Some(AppCommand::Open(Route::Signup))
        );
        assert_eq!(
            press(Key::Char('i'), &state),
            Some(AppCommand::Open(Route::Signin))
        );
        assert_eq!(
            press(Key::Enter, &state),
            Some(AppCommand::Open(Route::Signup))
        );
    }

    #[test]
    fn auth_form_captures_letters() {
        let mut state = AppState::new();
        state.open(Route::Signin);
        assert_eq!(
            press(Key::Char('q'), &state),
            Some(AppCommand::AppendFormChar('q'))
        );
        assert_eq!(press(Key::Enter, &state), Some(AppCommand::SendOtp));
        assert_eq!(
            handle_key_input(KeyEvent::with_ctrl(Key::Char('c')), &state),
            Some(AppCommand::Quit)
        );
    }

    #[test]
    fn enter_on_otp_submits() {
        let mut state = AppState::new();
        state.open(Route::Signin);
        if let Screen::Auth(form) = state.current_screen_mut() {
            form.focus = AuthField::Otp;
        }
        assert_eq!(press(Key::Enter, &state), Some(AppCommand::SubmitAuthForm));
    }

    #[test]
    fn note_form_enter_inserts_newline_in_content() {
        let mut form = NoteFormState::new();
        assert_eq!(
            handle_note_form_keys(KeyEvent::new(Key::Enter), &form),
            Some(AppCommand::NavigateFormField { forward: true })
        );
        form.focus = NoteField::Content;
        assert_eq!(
            handle_note_form_keys(KeyEvent::new(Key::Enter), &form),
            Some(AppCommand::AppendFormChar('\n'))
        );
        assert_eq!(
            handle_note_form_keys(KeyEvent::with_ctrl(Key::Char('s')), &form),
            Some(AppCommand::SubmitNoteForm)
        );
    }

    #[test]
    fn pending_g_sequences() {
        let mut state = AppState::new();
        state.pending_key = Some('g');
        assert_eq!(press(Key::Char('l'), &state), Some(AppCommand::NavigateToLogs));
        assert_eq!(press(Key::Char('g'), &state), Some(AppCommand::NavigateToTop));
        assert_eq!(press(Key::Char('x'), &state), Some(AppCommand::ClearPendingKey));
    }

    #[test]
    fn delete_confirmation_keys() {
        let mut state = AppState::new();
        state.navigate_to(Screen::NoteDetail(NoteDetailState {
            note_id: NoteId::from("n1"),
            input_mode: InputMode::DeleteConfirmation,
            form: None,
        }));
        assert_eq!(press(Key::Char('y'), &state), Some(AppCommand::ConfirmNoteDelete));
        assert_eq!(press(Key::Esc, &state), Some(AppCommand::CancelNoteDelete));
        assert_eq!(press(Key::Char('q'), &state), None);
    }
}
