//! URL-style routes for the screens the user can open directly.

use notes_api::endpoints::NoteId;
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    Landing,
    Signup,
    Signin,
    Dashboard,
    Note(NoteId),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteParseError(String);

impl fmt::Display for RouteParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "unknown route '{}' (expected /, /signup, /signin, /dashboard or /note/<id>)",
            self.0
        )
    }
}

impl std::error::Error for RouteParseError {}

impl Route {
    pub fn path(&self) -> String {
        match self {
            Route::Landing => "/".to_string(),
            Route::Signup => "/signup".to_string(),
            Route::Signin => "/signin".to_string(),
            Route::Dashboard => "/dashboard".to_string(),
            Route::Note(id) => format!("/note/{}", id),
        }
    }

    pub fn requires_auth(&self) -> bool {
        matches!(self, Route::Dashboard | Route::Note(_))
    }

    /// The route actually shown: authenticated routes send a signed-out
    /// user to the signin screen.
    pub fn guard(self, authenticated: bool) -> Route {
        if self.requires_auth() && !authenticated {
            tracing::info!("Route {} requires a session, redirecting to signin", self);
            Route::Signin
        } else {
            self
        }
    }

    /// Where the app opens when no route is requested
    pub fn initial(authenticated: bool) -> Route {
        if authenticated {
            Route::Dashboard
        } else {
            Route::Landing
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.path())
    }
}

impl FromStr for Route {
    type Err = RouteParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let path = match trimmed.trim_end_matches('/') {
            "" => "/",
            p => p,
        };

        match path {
            "/" => Ok(Route::Landing),
            "/signup" => Ok(Route::Signup),
            "/signin" => Ok(Route::Signin),
            "/dashboard" => Ok(Route::Dashboard),
            _ => match path.strip_prefix("/note/") {
                Some(id) if !id.is_empty() && !id.contains('/') => Ok(Route::Note(NoteId::from(id))),
                _ => Err(RouteParseError(trimmed.to_string())),
            },
        }
    }
}
