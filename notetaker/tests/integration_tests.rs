use chrono::{DateTime, TimeZone, Utc};
use notes_api::endpoints::{notes::Note, users::User, NoteId};
use notetaker::events::{DataEvent, RemoteCall};
use notetaker::input::{Key, KeyEvent};
use notetaker::router::Route;
use notetaker::state::{InputMode, TOAST_TICKS};
use notetaker::testing::TestApp;
use notetaker::ui::screens::Screen;
use notetaker_auth::{SignupDetails, StoredSession};

fn day(d: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 3, d, 9, 0, 0).unwrap()
}

fn session() -> StoredSession {
    StoredSession::new(
        User {
            id: "u1".to_string(),
            full_name: "Ada Lovelace".to_string(),
            email: "ada@example.com".to_string(),
            dob: Some("1815-12-10".to_string()),
            avatar: None,
        },
        Some("token".to_string()),
    )
}

fn note(id: &str, title: &str, content: &str, updated: u32) -> Note {
    Note {
        id: NoteId::from(id),
        title: title.to_string(),
        content: content.to_string(),
        created_at: day(1),
        updated_at: day(updated),
    }
}

fn sample_notes() -> Vec<Note> {
    vec![
        note("a", "Groceries", "milk, eggs", 2),
        note("b", "Ideas", "a grocery list app", 3),
        note("c", "Reading", "Notes on the analytical engine", 4),
    ]
}

/// Signed-in app on a loaded dashboard
fn dashboard_app() -> TestApp {
    let mut app = TestApp::start(Some(session()), None);
    app.send_data_event(DataEvent::NotesLoaded {
        notes: sample_notes(),
    });
    app.take_calls();
    app
}

fn ctrl(c: char) -> KeyEvent {
    KeyEvent::with_ctrl(Key::Char(c))
}

#[test]
fn test_quit_flow() {
    let mut app = TestApp::new();

    app.assert_not_quit();
    app.send_key(Key::Char('q'));
    app.assert_should_quit();
}

#[test]
fn test_help_toggle() {
    let mut app = TestApp::new();

    assert!(!app.state().help_visible);

    app.send_key(Key::Char('?'));
    assert!(app.state().help_visible);

    // Help swallows screen keys until closed
    app.send_key(Key::Char('s'));
    app.assert_route(Route::Landing);

    app.send_key(Key::Esc);
    assert!(!app.state().help_visible);
}

#[test]
fn test_startup_route_depends_on_session() {
    let app = TestApp::start(None, None);
    app.assert_route(Route::Landing);
    assert!(app.issued_calls().is_empty());

    let app = TestApp::start(Some(session()), None);
    app.assert_route(Route::Dashboard);
    assert_eq!(app.issued_calls(), &[RemoteCall::LoadNotes]);
}

#[test]
fn test_signup_flow() {
    let mut app = TestApp::new();

    // Landing -> signup
    app.send_key(Key::Char('s'));
    app.assert_route(Route::Signup);

    app.type_text("Ada Lovelace");
    app.send_key(Key::Tab);
    app.type_text("ada@example.com");

    // Enter on the email field asks for the OTP
    app.send_key(Key::Enter);
    assert_eq!(
        app.last_call(),
        Some(&RemoteCall::SendOtp {
            email: "ada@example.com".to_string()
        })
    );
    assert!(app.state().progress.is_pending("send_otp"));

    app.send_data_event(DataEvent::OtpSent);
    app.assert_last_toast("OTP sent to your email!");
    assert!(!app.state().progress.is_active());

    // Focus jumped to the OTP field; step back to fill in the date of birth
    app.type_text("123456");
    app.send_key(Key::BackTab);
    app.type_text("1815-12-10");
    app.send_key(Key::Tab);
    app.send_key(Key::Enter);

    assert_eq!(
        app.last_call(),
        Some(&RemoteCall::Signup {
            details: SignupDetails {
                full_name: "Ada Lovelace".to_string(),
                email: "ada@example.com".to_string(),
                dob: "1815-12-10".to_string(),
                otp: "123456".to_string(),
            }
        })
    );

    app.send_data_event(DataEvent::SignedIn {
        session: session(),
        new_account: true,
    });

    app.assert_route(Route::Dashboard);
    app.assert_last_toast("Account created successfully!");
    assert!(app.state().is_authenticated());
    assert_eq!(app.last_call(), Some(&RemoteCall::LoadNotes));
}

#[test]
fn test_signup_requires_every_field() {
    let mut app = TestApp::start(None, Some(Route::Signup));

    app.send_key(Key::Tab);
    app.type_text("ada@example.com");
    app.send_key_event(ctrl('o'));
    app.send_data_event(DataEvent::OtpSent);
    app.type_text("123456");
    app.take_calls();

    // Name and date of birth are still empty
    app.send_key(Key::Enter);
    assert!(app.issued_calls().is_empty());
    app.assert_last_toast("Please fill in all fields");
    app.assert_route(Route::Signup);
}

#[test]
fn test_signin_flow_and_failure() {
    let mut app = TestApp::new();
    app.send_key(Key::Char('i'));
    app.assert_route(Route::Signin);

    // No email yet
    app.send_key_event(ctrl('o'));
    app.assert_last_toast("Please enter your email first");
    assert!(app.issued_calls().is_empty());

    app.type_text("ada@example.com");
    app.send_key(Key::Enter);
    app.send_data_event(DataEvent::OtpSent);
    app.type_text("000000");
    app.send_key(Key::Enter);

    assert_eq!(
        app.last_call(),
        Some(&RemoteCall::Signin {
            email: "ada@example.com".to_string(),
            otp: "000000".to_string(),
        })
    );

    app.send_data_event(DataEvent::AuthFailed {
        error: "Invalid email or OTP.".to_string(),
    });
    app.assert_route(Route::Signin);
    app.assert_last_toast("Invalid email or OTP.");
    assert!(!app.state().is_authenticated());

    // Fix the OTP and retry
    app.send_key_event(ctrl('l'));
    app.type_text("123456");
    app.send_key(Key::Enter);
    app.send_data_event(DataEvent::SignedIn {
        session: session(),
        new_account: false,
    });

    app.assert_route(Route::Dashboard);
    app.assert_last_toast("Signed in successfully!");
}

#[test]
fn test_typing_q_in_a_form_does_not_quit() {
    let mut app = TestApp::start(None, Some(Route::Signin));

    app.type_text("q?g");
    app.assert_not_quit();
    assert!(!app.state().help_visible);

    let Screen::Auth(form) = app.state().current_screen() else {
        panic!("expected auth form");
    };
    assert_eq!(form.email, "q?g");
}

#[test]
fn test_dashboard_load_and_open_note() {
    let mut app = TestApp::start(Some(session()), None);

    let Screen::Dashboard(dashboard) = app.state().current_screen() else {
        panic!("expected dashboard");
    };
    assert_eq!(
        dashboard.notes_loading,
        notetaker::state::LoadingState::Loading
    );

    app.send_data_event(DataEvent::NotesLoaded {
        notes: sample_notes(),
    });

    // Most recently updated first
    let titles: Vec<&str> = app
        .state()
        .notes
        .all()
        .iter()
        .map(|n| n.title.as_str())
        .collect();
    assert_eq!(titles, vec!["Reading", "Ideas", "Groceries"]);

    app.send_key(Key::Char('j'));
    app.send_key(Key::Enter);
    app.assert_route(Route::Note(NoteId::from("b")));

    app.send_key(Key::Esc);
    app.assert_route(Route::Dashboard);
}

#[test]
fn test_refresh_keeps_notes_visible() {
    let mut app = dashboard_app();

    app.send_key(Key::Char('r'));
    assert_eq!(app.last_call(), Some(&RemoteCall::LoadNotes));

    let Screen::Dashboard(dashboard) = app.state().current_screen() else {
        panic!("expected dashboard");
    };
    assert_eq!(dashboard.notes_loading, notetaker::state::LoadingState::Loaded);
    assert_eq!(app.state().notes.len(), 3);
}

#[test]
fn test_load_failure_is_reported() {
    let mut app = TestApp::start(Some(session()), None);

    app.send_data_event(DataEvent::NotesLoadFailed {
        error: "Error while fetching notes.".to_string(),
    });

    app.assert_last_toast("Error while fetching notes.");
    assert!(!app.state().progress.is_active());
}

#[test]
fn test_search_filters_title_and_content() {
    let mut app = dashboard_app();

    app.send_key(Key::Char('/'));
    app.type_text("GROC");

    let visible = |app: &TestApp| -> Vec<String> {
        let Screen::Dashboard(dashboard) = app.state().current_screen() else {
            panic!("expected dashboard");
        };
        dashboard
            .visible_notes(&app.state().notes)
            .iter()
            .map(|n| n.id.to_string())
            .collect()
    };

    assert_eq!(visible(&app), vec!["b", "a"]);

    app.type_text("zz");
    assert!(visible(&app).is_empty());

    // Enter keeps the query, Esc clears it
    app.send_key(Key::Backspace);
    app.send_key(Key::Backspace);
    app.send_key(Key::Enter);
    assert_eq!(visible(&app).len(), 2);

    app.send_key(Key::Esc);
    assert_eq!(visible(&app).len(), 3);
}

#[test]
fn test_create_note_with_echo() {
    let mut app = dashboard_app();

    app.send_key(Key::Char('n'));
    app.type_text("Shopping");
    app.send_key(Key::Enter);
    app.type_text("bread");
    app.send_key(Key::Enter);
    app.type_text("butter");
    app.send_key_event(ctrl('s'));

    assert_eq!(
        app.last_call(),
        Some(&RemoteCall::AddNote {
            title: "Shopping".to_string(),
            content: "bread\nbutter".to_string(),
        })
    );

    let created = note("d", "Shopping", "bread\nbutter", 5);
    app.send_data_event(DataEvent::NoteCreated {
        note: Some(created.clone()),
    });

    app.assert_last_toast("Note created successfully!");
    let Screen::Dashboard(dashboard) = app.state().current_screen() else {
        panic!("expected dashboard");
    };
    assert!(dashboard.form.is_none());
    assert_eq!(dashboard.input_mode, InputMode::Normal);
    assert_eq!(app.state().notes.all()[0].id, "d");

    // A later fetch that includes the note lists it once
    let mut notes = sample_notes();
    notes.push(created);
    app.send_data_event(DataEvent::NotesLoaded { notes });
    let count = app
        .state()
        .notes
        .all()
        .iter()
        .filter(|n| n.id == "d")
        .count();
    assert_eq!(count, 1);
}

#[test]
fn test_create_note_without_echo_reloads() {
    let mut app = dashboard_app();

    app.send_key(Key::Char('n'));
    app.type_text("Shopping");
    app.send_key(Key::Tab);
    app.type_text("bread");
    app.send_key_event(ctrl('s'));
    app.take_calls();

    app.send_data_event(DataEvent::NoteCreated { note: None });

    // Nothing inserted locally; the list is fetched instead
    assert_eq!(app.state().notes.len(), 3);
    assert_eq!(app.issued_calls(), &[RemoteCall::LoadNotes]);

    let mut notes = sample_notes();
    notes.push(note("d", "Shopping", "bread", 5));
    app.send_data_event(DataEvent::NotesLoaded { notes });
    assert_eq!(app.state().notes.len(), 4);
}

#[test]
fn test_create_note_validation_and_failure() {
    let mut app = dashboard_app();

    app.send_key(Key::Char('n'));
    app.type_text("Only a title");
    app.send_key_event(ctrl('s'));

    assert!(app.issued_calls().is_empty());
    app.assert_last_toast("Please fill in both title and content");

    app.send_key(Key::Tab);
    app.type_text("and content");
    app.send_key_event(ctrl('s'));
    app.send_data_event(DataEvent::NoteCreateFailed {
        error: "Error while creating note.".to_string(),
    });

    // The dialog stays open for another try
    app.assert_last_toast("Error while creating note.");
    let Screen::Dashboard(dashboard) = app.state().current_screen() else {
        panic!("expected dashboard");
    };
    assert!(dashboard.form.is_some());
}

#[test]
fn test_edit_note_flow() {
    let mut app = dashboard_app();
    app.send_key(Key::Enter);
    app.assert_route(Route::Note(NoteId::from("c")));

    app.send_key(Key::Char('e'));
    let Screen::NoteDetail(detail) = app.state().current_screen() else {
        panic!("expected note detail");
    };
    let form = detail.form.as_ref().expect("edit form open");
    assert_eq!(form.title, "Reading");
    assert_eq!(form.content, "Notes on the analytical engine");

    app.send_key_event(ctrl('l'));
    app.type_text("Reading list");
    app.send_key_event(ctrl('s'));

    assert_eq!(
        app.last_call(),
        Some(&RemoteCall::UpdateNote {
            id: NoteId::from("c"),
            title: "Reading list".to_string(),
            content: "Notes on the analytical engine".to_string(),
        })
    );

    app.send_data_event(DataEvent::NoteUpdated {
        id: NoteId::from("c"),
        title: "Reading list".to_string(),
        content: "Notes on the analytical engine".to_string(),
        updated_at: day(6),
    });

    app.assert_last_toast("Note updated successfully!");
    let updated = app.state().notes.get(&NoteId::from("c")).unwrap();
    assert_eq!(updated.title, "Reading list");
    assert_eq!(updated.created_at, day(1));
    assert_eq!(updated.updated_at, day(6));

    let Screen::NoteDetail(detail) = app.state().current_screen() else {
        panic!("expected note detail");
    };
    assert!(detail.form.is_none());
}

#[test]
fn test_delete_note_flow() {
    let mut app = dashboard_app();
    app.send_key(Key::Enter);

    app.send_key(Key::Char('d'));
    let Screen::NoteDetail(detail) = app.state().current_screen() else {
        panic!("expected note detail");
    };
    assert_eq!(detail.input_mode, InputMode::DeleteConfirmation);

    // Cancel first, then confirm
    app.send_key(Key::Char('n'));
    assert!(app.issued_calls().is_empty());

    app.send_key(Key::Char('d'));
    app.send_key(Key::Char('y'));
    assert_eq!(
        app.last_call(),
        Some(&RemoteCall::DeleteNote {
            id: NoteId::from("c")
        })
    );

    app.send_data_event(DataEvent::NoteDeleted {
        id: NoteId::from("c"),
    });

    app.assert_route(Route::Dashboard);
    app.assert_last_toast("Note deleted successfully!");
    assert!(app.state().notes.get(&NoteId::from("c")).is_none());
    assert_eq!(app.state().notes.len(), 2);
}

#[test]
fn test_deep_link_to_unknown_note() {
    let mut app = TestApp::start(Some(session()), Some(Route::Note(NoteId::from("zzz"))));

    // Waits for the list before deciding
    app.assert_route(Route::Note(NoteId::from("zzz")));
    assert_eq!(app.issued_calls(), &[RemoteCall::LoadNotes]);

    app.send_data_event(DataEvent::NotesLoaded {
        notes: sample_notes(),
    });

    app.assert_route(Route::Dashboard);
    app.assert_last_toast("Note not found");
}

#[test]
fn test_deep_link_to_known_note() {
    let mut app = TestApp::start(Some(session()), Some(Route::Note(NoteId::from("a"))));

    app.send_data_event(DataEvent::NotesLoaded {
        notes: sample_notes(),
    });

    app.assert_route(Route::Note(NoteId::from("a")));
    assert!(app.state().toasts.is_empty());
}

#[test]
fn test_logout_blocks_authenticated_routes() {
    let mut app = dashboard_app();

    app.send_key(Key::Char('L'));
    assert_eq!(app.last_call(), Some(&RemoteCall::Signout));

    app.send_data_event(DataEvent::SignedOut { error: None });
    app.assert_route(Route::Landing);
    app.assert_last_toast("Logged out successfully");
    assert!(!app.state().is_authenticated());
    assert!(app.state().notes.is_empty());
    app.take_calls();

    // g d tries the dashboard and is sent to sign in
    app.send_key(Key::Char('g'));
    app.send_key(Key::Char('d'));
    app.assert_route(Route::Signin);
    assert!(app.issued_calls().is_empty());
}

#[test]
fn test_logout_clears_session_even_when_server_fails() {
    let mut app = dashboard_app();

    app.send_key(Key::Char('L'));
    app.send_data_event(DataEvent::SignedOut {
        error: Some("Error while logging out".to_string()),
    });

    app.assert_route(Route::Landing);
    assert!(!app.state().is_authenticated());
    let messages: Vec<&str> = app
        .state()
        .toasts
        .iter()
        .map(|t| t.message.as_str())
        .collect();
    assert_eq!(
        messages,
        vec!["Error while logging out", "Logged out successfully"]
    );
}

#[test]
fn test_toasts_expire() {
    let mut app = TestApp::start(None, Some(Route::Signin));
    app.send_key_event(ctrl('o'));
    assert_eq!(app.state().toasts.len(), 1);

    for _ in 0..TOAST_TICKS - 1 {
        app.tick();
    }
    assert_eq!(app.state().toasts.len(), 1);

    app.tick();
    assert!(app.state().toasts.is_empty());
}

#[test]
fn test_logs_screen_round_trip() {
    let mut app = dashboard_app();

    app.send_key(Key::Char('g'));
    app.send_key(Key::Char('l'));
    assert!(matches!(app.state().current_screen(), Screen::Logs(..)));
    assert_eq!(app.state().current_route(), None);

    app.send_key(Key::Esc);
    app.assert_route(Route::Dashboard);
}

#[test]
fn test_pending_key_cleared_after_invalid_sequence() {
    let mut app = dashboard_app();

    app.send_key(Key::Char('g'));
    assert_eq!(app.state().pending_key, Some('g'));

    app.send_key(Key::Char('x'));
    assert_eq!(app.state().pending_key, None);
    app.assert_route(Route::Dashboard);
}

#[test]
fn test_second_save_while_create_in_flight_is_ignored() {
    let mut app = dashboard_app();

    app.send_key(Key::Char('n'));
    app.type_text("Shopping");
    app.send_key(Key::Tab);
    app.type_text("bread");
    app.send_key_event(ctrl('s'));
    app.send_key_event(ctrl('s'));

    let adds = app
        .issued_calls()
        .iter()
        .filter(|call| matches!(call, RemoteCall::AddNote { .. }))
        .count();
    assert_eq!(adds, 1);

    app.send_data_event(DataEvent::NoteCreated {
        note: Some(note("d", "Shopping", "bread", 5)),
    });
    assert_eq!(app.state().notes.len(), 4);

    // Once the first one is answered a new note can be saved
    app.take_calls();
    app.send_key(Key::Char('n'));
    app.type_text("Another");
    app.send_key(Key::Tab);
    app.type_text("note");
    app.send_key_event(ctrl('s'));
    assert!(matches!(app.last_call(), Some(RemoteCall::AddNote { .. })));
}

#[test]
fn test_repeated_delete_confirmation_sends_one_request() {
    let mut app = dashboard_app();
    app.send_key(Key::Enter);

    app.send_keys(&[Key::Char('d'), Key::Char('y')]);
    app.send_keys(&[Key::Char('d'), Key::Char('y')]);

    assert_eq!(
        app.issued_calls(),
        &[RemoteCall::DeleteNote {
            id: NoteId::from("c")
        }]
    );

    app.send_data_event(DataEvent::NoteDeleted {
        id: NoteId::from("c"),
    });
    assert!(app.state().notes.get(&NoteId::from("c")).is_none());
    app.assert_route(Route::Dashboard);
}

#[test]
fn test_refresh_can_be_repeated() {
    let mut app = dashboard_app();

    app.send_keys(&[Key::Char('r'), Key::Char('r')]);
    assert_eq!(
        app.issued_calls(),
        &[RemoteCall::LoadNotes, RemoteCall::LoadNotes]
    );
}

#[test]
fn test_results_arriving_after_logout_are_ignored() {
    let mut app = dashboard_app();

    // A refresh and a create are still out when the user logs out
    app.send_key(Key::Char('r'));
    app.send_key(Key::Char('n'));
    app.type_text("Late");
    app.send_key(Key::Tab);
    app.type_text("note");
    app.send_key_event(ctrl('s'));
    app.send_key(Key::Esc);
    app.send_key(Key::Char('L'));
    app.send_data_event(DataEvent::SignedOut { error: None });
    app.take_calls();

    app.send_data_event(DataEvent::NotesLoaded {
        notes: sample_notes(),
    });
    app.send_data_event(DataEvent::NoteCreated { note: None });

    app.assert_route(Route::Landing);
    app.assert_last_toast("Logged out successfully");
    assert!(app.state().notes.is_empty());
    assert!(app.issued_calls().is_empty());
    assert!(!app.state().progress.is_active());
}
