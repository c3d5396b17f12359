mod config;
mod session_manager;
mod session_storage;

pub use config::Settings;
pub use session_manager::{SessionManager, SignupDetails};
pub use session_storage::SessionStore;

use crate::error::AuthError;

/// Load configuration and the session store before the UI starts.
///
/// A session saved by an earlier run is restored, so a returning user
/// lands straight on their notes.
pub fn init() -> Result<SessionManager, AuthError> {
    let settings = Settings::new().map_err(|e| {
        eprintln!("Failed to load configuration: {}", e);
        eprintln!("\nPlease create a config.toml file with the following content:");
        eprintln!("\napi_url = \"http://localhost:3000\"  # For local development");
        eprintln!("# api_url = \"https://notes.example.com\"  # For production");
        AuthError::Configuration(e.to_string())
    })?;

    settings.validate().map_err(|e| {
        eprintln!("Configuration validation failed: {}", e);
        AuthError::Configuration(e)
    })?;

    let manager = SessionManager::new(settings)?;
    manager.restore()?;

    Ok(manager)
}
