pub mod auth_screen;
pub mod dashboard_screen;
pub mod landing_screen;
pub mod logs_screen;
pub mod note_screen;

use crate::router::Route;
use crate::state::{
    AuthFormState, AuthMode, DashboardState, LandingState, LogsState, NoteDetailState,
};

#[derive(Debug, Clone)]
pub enum Screen {
    Landing(LandingState),
    Auth(AuthFormState),
    Dashboard(DashboardState),
    NoteDetail(NoteDetailState),
    Logs(LogsState),
}

impl Screen {
    /// Fresh screen state for a route
    pub fn for_route(route: &Route) -> Screen {
        match route {
            Route::Landing => Screen::Landing(LandingState::default()),
            Route::Signup => Screen::Auth(AuthFormState::new(AuthMode::Signup)),
            Route::Signin => Screen::Auth(AuthFormState::new(AuthMode::Signin)),
            Route::Dashboard => Screen::Dashboard(DashboardState::default()),
            Route::Note(id) => Screen::NoteDetail(NoteDetailState::new(id.clone())),
        }
    }

    /// The route this screen is reachable at; the log screen has none
    pub fn route(&self) -> Option<Route> {
        match self {
            Screen::Landing(_) => Some(Route::Landing),
            Screen::Auth(form) => Some(form.route()),
            Screen::Dashboard(_) => Some(Route::Dashboard),
            Screen::NoteDetail(detail) => Some(Route::Note(detail.note_id.clone())),
            Screen::Logs(_) => None,
        }
    }
}
