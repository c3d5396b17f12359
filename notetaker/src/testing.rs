use crate::app_core::{AppCore, DataEventHandler};
use crate::commands::executor;
use crate::events::{AppCommand, DataEvent, RemoteCall};
use crate::input::{Key, KeyEvent};
use crate::router::Route;
use crate::state::AppState;
use notetaker_auth::StoredSession;

/// Mock data event handler for tests (no real async tasks)
///
/// Commands run through `execute_command_sync`; the remote calls they issue
/// are recorded instead of performed.
#[derive(Debug, Default)]
pub struct MockDataHandler {
    pub issued: Vec<RemoteCall>,
}

impl MockDataHandler {
    pub fn new() -> Self {
        Self::default()
    }
}

impl DataEventHandler for MockDataHandler {
    fn execute_with_context(&mut self, command: AppCommand, state: &mut AppState) {
        if let Some(call) = executor::execute_command_sync(command, state) {
            self.issued.push(call);
        }
    }
}

pub struct TestApp {
    core: AppCore<MockDataHandler>,
}

impl TestApp {
    /// Signed-out app on the landing screen
    pub fn new() -> Self {
        Self::start(None, None)
    }

    /// App started the way `main` starts it: restored session plus an
    /// optional requested route
    pub fn start(session: Option<StoredSession>, route: Option<Route>) -> Self {
        let state = AppState::with_session(session);
        let route = route.unwrap_or_else(|| Route::initial(state.is_authenticated()));
        let mut core = AppCore::with_state(MockDataHandler::new(), state);
        core.execute(AppCommand::Open(route));
        Self { core }
    }

    pub fn send_key(&mut self, key: Key) {
        self.core.handle_key(KeyEvent::new(key));
    }

    pub fn send_key_event(&mut self, event: KeyEvent) {
        self.core.handle_key(event);
    }

    pub fn send_keys(&mut self, keys: &[Key]) {
        for key in keys {
            self.send_key(*key);
        }
    }

    /// Type text into whatever field has focus
    pub fn type_text(&mut self, text: &str) {
        for c in text.chars() {
            self.send_key(Key::Char(c));
        }
    }

    /// Inject a data event (simulate an API response)
    pub fn send_data_event(&mut self, event: DataEvent) {
        self.core.handle_data_event(event);
    }

    pub fn tick(&mut self) {
        self.core.tick();
    }

    pub fn state(&self) -> &AppState {
        self.core.state()
    }

    /// Remote calls issued so far, oldest first
    pub fn issued_calls(&self) -> &[RemoteCall] {
        &self.core.handler().issued
    }

    pub fn last_call(&self) -> Option<&RemoteCall> {
        self.issued_calls().last()
    }

    /// Drain the recorded calls
    pub fn take_calls(&mut self) -> Vec<RemoteCall> {
        std::mem::take(&mut self.core.handler_mut().issued)
    }

    pub fn assert_route(&self, expected: Route) {
        assert_eq!(
            self.state().current_route(),
            Some(expected),
            "Expected different screen. Current: {:?}",
            self.state().current_screen()
        );
    }

    pub fn assert_last_toast(&self, expected: &str) {
        let last = self.state().toasts.back().map(|t| t.message.as_str());
        assert_eq!(last, Some(expected), "Toasts: {:?}", self.state().toasts);
    }

    pub fn assert_should_quit(&self) {
        assert!(
            self.core.should_quit(),
            "App should be marked for quit but is not"
        );
    }

    pub fn assert_not_quit(&self) {
        assert!(
            !self.core.should_quit(),
            "App should NOT be marked for quit but is"
        );
    }
}

impl Default for TestApp {
    fn default() -> Self {
        Self::new()
    }
}
