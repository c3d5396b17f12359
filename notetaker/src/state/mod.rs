pub mod notes;
pub mod reducer;
pub mod validators;

use crate::router::Route;
use crate::ui::screens::Screen;
use notes::{Note, NotesStore};
use notes_api::endpoints::NoteId;
use notetaker_auth::StoredSession;
use ratatui::widgets::TableState;
use std::cell::RefCell;
use std::collections::{BTreeSet, VecDeque};
use throbber_widgets_tui::ThrobberState;

/// How long a toast stays up, in 100ms UI ticks
pub const TOAST_TICKS: u16 = 30;

/// Older toasts are dropped once this many are showing
pub const MAX_TOASTS: usize = 3;

/// Represents loading state separate from data state
#[derive(Default, Debug, Clone, PartialEq)]
pub enum LoadingState {
    #[default]
    NotStarted,
    Loading,
    Loaded,
    Error(String),
}

/// Represents input mode for screens that support editing
#[derive(Default, Debug, Clone, PartialEq)]
pub enum InputMode {
    #[default]
    Normal,
    Search,
    NoteForm,
    DeleteConfirmation,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
}

/// Transient notification shown in the corner of the screen
#[derive(Debug, Clone, PartialEq)]
pub struct Toast {
    pub kind: ToastKind,
    pub message: String,
    pub ticks_left: u16,
}

/// Remote calls still waiting for a result, driving the progress throbber
#[derive(Debug, Clone, Default)]
pub struct Progress {
    in_flight: BTreeSet<String>,
    pub throbber: ThrobberState,
}

impl Progress {
    pub fn begin(&mut self, task_id: impl Into<String>) {
        self.in_flight.insert(task_id.into());
    }

    pub fn finish(&mut self, task_id: &str) {
        self.in_flight.remove(task_id);
    }

    pub fn is_active(&self) -> bool {
        !self.in_flight.is_empty()
    }

    pub fn is_pending(&self, task_id: &str) -> bool {
        self.in_flight.contains(task_id)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthMode {
    Signup,
    Signin,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthField {
    FullName,
    Email,
    Dob,
    Otp,
}

impl AuthField {
    pub fn label(&self) -> &'static str {
        match self {
            AuthField::FullName => "Full name",
            AuthField::Email => "Email",
            AuthField::Dob => "Date of birth",
            AuthField::Otp => "OTP",
        }
    }
}

const SIGNUP_FIELDS: &[AuthField] = &[
    AuthField::FullName,
    AuthField::Email,
    AuthField::Dob,
    AuthField::Otp,
];
const SIGNIN_FIELDS: &[AuthField] = &[AuthField::Email, AuthField::Otp];

/// State for the signup and signin forms
#[derive(Debug, Clone, PartialEq)]
pub struct AuthFormState {
    pub mode: AuthMode,
    pub full_name: String,
    pub email: String,
    pub dob: String,
    pub otp: String,
    pub focus: AuthField,
    pub otp_sent: bool,
}

impl AuthFormState {
    pub fn new(mode: AuthMode) -> Self {
        Self {
            mode,
            full_name: String::new(),
            email: String::new(),
            dob: String::new(),
            otp: String::new(),
            focus: match mode {
                AuthMode::Signup => AuthField::FullName,
                AuthMode::Signin => AuthField::Email,
            },
            otp_sent: false,
        }
    }

    pub fn fields(&self) -> &'static [AuthField] {
        match self.mode {
            AuthMode::Signup => SIGNUP_FIELDS,
            AuthMode::Signin => SIGNIN_FIELDS,
        }
    }

    pub fn route(&self) -> Route {
        match self.mode {
            AuthMode::Signup => Route::Signup,
            AuthMode::Signin => Route::Signin,
        }
    }

    pub fn value(&self, field: AuthField) -> &str {
        match field {
            AuthField::FullName => &self.full_name,
            AuthField::Email => &self.email,
            AuthField::Dob => &self.dob,
            AuthField::Otp => &self.otp,
        }
    }

    pub fn focused_value_mut(&mut self) -> &mut String {
        match self.focus {
            AuthField::FullName => &mut self.full_name,
            AuthField::Email => &mut self.email,
            AuthField::Dob => &mut self.dob,
            AuthField::Otp => &mut self.otp,
        }
    }

    pub fn focus_next(&mut self) {
        let fields = self.fields();
        let index = fields.iter().position(|f| *f == self.focus).unwrap_or(0);
        self.focus = fields[(index + 1) % fields.len()];
    }

    pub fn focus_prev(&mut self) {
        let fields = self.fields();
        let index = fields.iter().position(|f| *f == self.focus).unwrap_or(0);
        self.focus = fields[(index + fields.len() - 1) % fields.len()];
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NoteField {
    #[default]
    Title,
    Content,
}

/// State for the create/edit note dialog
#[derive(Debug, Clone, PartialEq, Default)]
pub struct NoteFormState {
    pub editing: Option<NoteId>,
    pub title: String,
    pub content: String,
    pub focus: NoteField,
}

impl NoteFormState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Dialog pre-filled with an existing note
    pub fn for_note(note: &Note) -> Self {
        Self {
            editing: Some(note.id.clone()),
            title: note.title.clone(),
            content: note.content().to_string(),
            focus: NoteField::Title,
        }
    }

    pub fn is_edit_mode(&self) -> bool {
        self.editing.is_some()
    }

    pub fn toggle_focus(&mut self) {
        self.focus = match self.focus {
            NoteField::Title => NoteField::Content,
            NoteField::Content => NoteField::Title,
        };
    }

    pub fn focused_value_mut(&mut self) -> &mut String {
        match self.focus {
            NoteField::Title => &mut self.title,
            NoteField::Content => &mut self.content,
        }
    }
}

#[derive(Debug, Clone)]
pub struct AppState {
    pub history: Vec<Screen>,

    // Session and data mirrored from the server
    pub session: Option<StoredSession>,
    pub notes: NotesStore,

    // UI state
    pub toasts: VecDeque<Toast>,
    pub progress: Progress,
    pub help_visible: bool,
    pub pending_key: Option<char>,

    // System
    pub should_quit: bool,
}

impl AppState {
    pub fn new() -> Self {
        Self {
            history: vec![Screen::Landing(LandingState::default())],

            session: None,
            notes: NotesStore::new(),

            toasts: VecDeque::new(),
            progress: Progress::default(),
            help_visible: false,
            pending_key: None,

            should_quit: false,
        }
    }

    /// State for a run that restored a saved session
    pub fn with_session(session: Option<StoredSession>) -> Self {
        Self {
            session,
            ..Self::new()
        }
    }

    pub fn is_authenticated(&self) -> bool {
        self.session.is_some()
    }

    /// Get the current screen (last in navigation stack)
    pub fn current_screen(&self) -> &Screen {
        self.history
            .last()
            .expect("Navigation stack should never be empty")
    }

    /// Get mutable reference to current screen
    pub fn current_screen_mut(&mut self) -> &mut Screen {
        self.history
            .last_mut()
            .expect("Navigation stack should never be empty")
    }

    pub fn current_route(&self) -> Option<Route> {
        self.current_screen().route()
    }

    /// Navigate to a new screen (push to stack)
    pub fn navigate_to(&mut self, screen: Screen) {
        tracing::debug!(
            "Navigating to new screen, stack depth: {} -> {}",
            self.history.len(),
            self.history.len() + 1
        );
        self.history.push(screen);
    }

    /// Navigate back (pop from stack)
    /// Returns true if navigation succeeded, false if already at root
    pub fn navigate_back(&mut self) -> bool {
        if self.history.len() > 1 {
            tracing::debug!(
                "Navigating back, stack depth: {} -> {}",
                self.history.len(),
                self.history.len() - 1
            );
            self.history.pop();
            true
        } else {
            tracing::debug!("Cannot navigate back, already at root screen");
            false
        }
    }

    /// Replace the whole navigation stack with a single screen
    pub fn reset_to(&mut self, screen: Screen) {
        tracing::debug!("Resetting navigation stack");
        self.history.clear();
        self.history.push(screen);
    }

    /// Open a route the way a browser would follow a link.
    ///
    /// The route guard applies first. A route already on the stack is
    /// returned to rather than pushed again. Landing and dashboard are
    /// roots and replace the stack. Returns the route actually opened.
    pub fn open(&mut self, route: Route) -> Route {
        let route = route.guard(self.is_authenticated());

        if let Some(index) = self
            .history
            .iter()
            .rposition(|screen| screen.route().as_ref() == Some(&route))
        {
            tracing::debug!("Returning to {} already on the stack", route);
            self.history.truncate(index + 1);
            return route;
        }

        let screen = Screen::for_route(&route);
        match route {
            Route::Landing | Route::Dashboard => self.reset_to(screen),
            Route::Signup | Route::Signin | Route::Note(_) => self.navigate_to(screen),
        }
        tracing::info!("Opened {}", route);
        route
    }

    /// Forget the session and everything loaded with it
    pub fn clear_session(&mut self) {
        self.session = None;
        self.notes.clear();
    }

    pub fn notify_success(&mut self, message: impl Into<String>) {
        self.push_toast(ToastKind::Success, message.into());
    }

    pub fn notify_error(&mut self, message: impl Into<String>) {
        self.push_toast(ToastKind::Error, message.into());
    }

    fn push_toast(&mut self, kind: ToastKind, message: String) {
        match kind {
            ToastKind::Success => tracing::info!("Toast: {}", message),
            ToastKind::Error => tracing::warn!("Toast: {}", message),
        }
        if self.toasts.len() >= MAX_TOASTS {
            self.toasts.pop_front();
        }
        self.toasts.push_back(Toast {
            kind,
            message,
            ticks_left: TOAST_TICKS,
        });
    }

    /// Advance timers: expire toasts and spin the progress throbber
    pub fn tick(&mut self) {
        for toast in self.toasts.iter_mut() {
            toast.ticks_left = toast.ticks_left.saturating_sub(1);
        }
        self.toasts.retain(|toast| toast.ticks_left > 0);

        if self.progress.is_active() {
            self.progress.throbber.calc_next();
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

/// Entries offered on the landing screen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LandingAction {
    Signup,
    Signin,
}

pub const LANDING_ACTIONS: [LandingAction; 2] = [LandingAction::Signup, LandingAction::Signin];

#[derive(Debug, Clone)]
pub struct LandingState {
    pub table_state: RefCell<TableState>,
}

impl Default for LandingState {
    fn default() -> Self {
        Self {
            table_state: RefCell::new(TableState::default().with_selected(0)),
        }
    }
}

impl LandingState {
    pub fn selected_action(&self) -> Option<LandingAction> {
        let index = self.table_state.borrow().selected()?;
        LANDING_ACTIONS.get(index).copied()
    }
}

#[derive(Default, Debug, Clone)]
pub struct DashboardState {
    pub notes_loading: LoadingState,
    pub search_query: String,
    pub input_mode: InputMode,
    pub table_state: RefCell<TableState>,
    pub form: Option<NoteFormState>,
}

impl DashboardState {
    /// Notes matching the search box, in display order
    pub fn visible_notes<'a>(&self, notes: &'a NotesStore) -> Vec<&'a Note> {
        notes.search(&self.search_query)
    }

    pub fn selected_note_id(&self, notes: &NotesStore) -> Option<NoteId> {
        let index = self.table_state.borrow().selected()?;
        self.visible_notes(notes)
            .get(index)
            .map(|note| note.id.clone())
    }
}

#[derive(Debug, Clone)]
pub struct NoteDetailState {
    pub note_id: NoteId,
    pub input_mode: InputMode,
    pub form: Option<NoteFormState>,
}

impl NoteDetailState {
    pub fn new(note_id: NoteId) -> Self {
        Self {
            note_id,
            input_mode: InputMode::Normal,
            form: None,
        }
    }
}

#[derive(Default, Debug, Clone)]
pub struct LogsState {
    pub scroll_offset: usize,
    pub total_entries: usize,
}

pub trait Scrollable {
    fn table_state(&self) -> &RefCell<TableState>;

    fn select_prev(&self, num_items: usize) {
        let mut table_state = self.table_state().borrow_mut();
        if num_items > 0 {
            if table_state.selected().unwrap_or(0) == 0 {
                table_state.select(Some(num_items - 1));
            } else {
                table_state.scroll_up_by(1)
            }
        }
    }

    fn select_next(&self, num_items: usize) {
        let mut table_state = self.table_state().borrow_mut();
        if num_items > 0 {
            if table_state.selected().unwrap_or(num_items - 1) >= num_items - 1 {
                table_state.select_first();
            } else {
                table_state.scroll_down_by(1)
            }
        }
    }

    fn select_first(&self, num_items: usize) {
        let mut table_state = self.table_state().borrow_mut();
        if num_items > 0 {
            table_state.select_first();
        } else {
            table_state.select(None);
        }
    }

    fn select_last(&self, num_items: usize) {
        let mut table_state = self.table_state().borrow_mut();
        if num_items > 0 {
            table_state.select(Some(num_items - 1));
        } else {
            table_state.select(None);
        }
    }

    /// Keep the selection inside a list that may have shrunk
    fn clamp_selection(&self, num_items: usize) {
        let mut table_state = self.table_state().borrow_mut();
        match (table_state.selected(), num_items) {
            (_, 0) => table_state.select(None),
            (None, _) => table_state.select_first(),
            (Some(index), n) if index >= n => table_state.select(Some(n - 1)),
            _ => {}
        }
    }
}

impl Scrollable for LandingState {
    fn table_state(&self) -> &RefCell<TableState> {
        &self.table_state
    }
}

impl Scrollable for DashboardState {
    fn table_state(&self) -> &RefCell<TableState> {
        &self.table_state
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use notes_api::endpoints::users::User;

    fn session() -> StoredSession {
        StoredSession::new(
            User {
                id: "u1".to_string(),
                full_name: "Ada Lovelace".to_string(),
                email: "ada@example.com".to_string(),
                dob: None,
                avatar: None,
            },
            None,
        )
    }

    #[test]
    fn open_guards_authenticated_routes() {
        let mut state = AppState::new();
        assert_eq!(state.open(Route::Dashboard), Route::Signin);
        assert_eq!(state.current_route(), Some(Route::Signin));
        assert_eq!(state.history.len(), 2);
    }

    #[test]
    fn open_returns_to_route_already_on_stack() {
        let mut state = AppState::with_session(Some(session()));
        state.open(Route::Dashboard);
        state.open(Route::Note(NoteId::from("n1")));
        assert_eq!(state.history.len(), 2);

        state.open(Route::Dashboard);
        assert_eq!(state.history.len(), 1);
        assert_eq!(state.current_route(), Some(Route::Dashboard));
    }

    #[test]
    fn landing_replaces_stack() {
        let mut state = AppState::new();
        state.open(Route::Signup);
        state.open(Route::Signin);
        state.open(Route::Landing);
        assert_eq!(state.history.len(), 1);
        assert_eq!(state.current_route(), Some(Route::Landing));
    }

    #[test]
    fn toasts_expire_after_their_ticks() {
        let mut state = AppState::new();
        state.notify_success("Saved");
        for _ in 0..TOAST_TICKS - 1 {
            state.tick();
        }
        assert_eq!(state.toasts.len(), 1);
        state.tick();
        assert!(state.toasts.is_empty());
    }

    #[test]
    fn toast_queue_is_bounded() {
        let mut state = AppState::new();
        for i in 0..MAX_TOASTS + 2 {
            state.notify_error(format!("error {}", i));
        }
        assert_eq!(state.toasts.len(), MAX_TOASTS);
        assert_eq!(state.toasts[0].message, "error 2");
    }

    #[test]
    fn progress_tracks_in_flight_tasks() {
        let mut progress = Progress::default();
        progress.begin("load_notes");
        progress.begin("load_notes");
        assert!(progress.is_active());
        progress.finish("load_notes");
        assert!(!progress.is_active());
    }

    #[test]
    fn auth_focus_wraps_over_mode_fields() {
        let mut form = AuthFormState::new(AuthMode::Signin);
        assert_eq!(form.focus, AuthField::Email);
        form.focus_next();
        assert_eq!(form.focus, AuthField::Otp);
        form.focus_next();
        assert_eq!(form.focus, AuthField::Email);
        form.focus_prev();
        assert_eq!(form.focus, AuthField::Otp);

        let mut form = AuthFormState::new(AuthMode::Signup);
        form.focus_prev();
        assert_eq!(form.focus, AuthField::Otp);
    }

    #[test]
    fn selection_wraps_and_clamps() {
        let dashboard = DashboardState::default();
        dashboard.select_next(3);
        assert_eq!(dashboard.table_state.borrow().selected(), Some(0));
        dashboard.select_prev(3);
        assert_eq!(dashboard.table_state.borrow().selected(), Some(2));

        dashboard.clamp_selection(2);
        assert_eq!(dashboard.table_state.borrow().selected(), Some(1));
        dashboard.clamp_selection(0);
        assert_eq!(dashboard.table_state.borrow().selected(), None);
    }
}
