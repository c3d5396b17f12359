use crate::common::StoredSession;
use crate::error::AuthError;
use std::fs;
use std::path::{Path, PathBuf};

pub struct SessionStore {
    session_path: PathBuf,
}

impl SessionStore {
    pub fn new() -> Result<Self, AuthError> {
        let cache_dir = Self::get_cache_dir()?;
        Ok(Self::at(cache_dir.join("session.json")))
    }

    /// Store backed by an explicit file path.
    pub fn at(session_path: impl Into<PathBuf>) -> Self {
        Self {
            session_path: session_path.into(),
        }
    }

    fn get_cache_dir() -> Result<PathBuf, AuthError> {
        let cache_dir = dirs::cache_dir()
            .ok_or_else(|| AuthError::Configuration("Could not find cache directory".to_string()))?
            .join("notetaker");
        Ok(cache_dir)
    }

    pub fn path(&self) -> &Path {
        &self.session_path
    }

    pub fn save(&self, session: &StoredSession) -> Result<(), AuthError> {
        if let Some(parent) = self.session_path.parent() {
            if !parent.exists() {
                fs::create_dir_all(parent).map_err(|e| {
                    AuthError::SessionStorage(format!("Failed to create cache directory: {}", e))
                })?;
            }
        }

        let json = serde_json::to_string_pretty(session)?;

        fs::write(&self.session_path, json)
            .map_err(|e| AuthError::SessionStorage(format!("Failed to save session: {}", e)))?;

        // Owner read/write only: the file may hold a bearer token
        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            let mut perms = fs::metadata(&self.session_path)
                .map_err(|e| {
                    AuthError::SessionStorage(format!("Failed to get file permissions: {}", e))
                })?
                .permissions();
            perms.set_mode(0o600);
            fs::set_permissions(&self.session_path, perms).map_err(|e| {
                AuthError::SessionStorage(format!("Failed to set file permissions: {}", e))
            })?;
        }

        Ok(())
    }

    pub fn load(&self) -> Result<Option<StoredSession>, AuthError> {
        if !self.session_path.exists() {
            return Ok(None);
        }

        let json = fs::read_to_string(&self.session_path)
            .map_err(|e| AuthError::SessionStorage(format!("Failed to read session: {}", e)))?;

        let session: StoredSession = serde_json::from_str(&json)?;
        Ok(Some(session))
    }

    pub fn delete(&self) -> Result<(), AuthError> {
        if self.session_path.exists() {
            fs::remove_file(&self.session_path)
                .map_err(|e| AuthError::SessionStorage(format!("Failed to delete session: {}", e)))?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use notes_api::endpoints::users::User;

    fn temp_store() -> SessionStore {
        let dir = std::env::temp_dir().join(format!("notetaker-test-{}", uuid::Uuid::new_v4()));
        SessionStore::at(dir.join("session.json"))
    }

    fn session() -> StoredSession {
        StoredSession::new(
            User {
                id: "u1".to_string(),
                full_name: "Ada Lovelace".to_string(),
                email: "ada@example.com".to_string(),
                dob: None,
                avatar: None,
            },
            Some("tok".to_string()),
        )
    }

    #[test]
    fn load_without_file_is_none() {
        let store = temp_store();
        assert!(store.load().unwrap().is_none());
    }

    #[test]
    fn saved_session_is_loaded_back() {
        let store = temp_store();
        let session = session();
        store.save(&session).unwrap();

        let loaded = store.load().unwrap().expect("session should exist");
        assert_eq!(loaded.user, session.user);
        assert!(loaded.has_token());

        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            let mode = fs::metadata(store.path()).unwrap().permissions().mode();
            assert_eq!(mode & 0o777, 0o600);
        }
    }

    #[test]
    fn delete_removes_the_file_and_is_idempotent() {
        let store = temp_store();
        store.save(&session()).unwrap();
        store.delete().unwrap();
        assert!(!store.path().exists());
        store.delete().unwrap();
        assert!(store.load().unwrap().is_none());
    }

    #[test]
    fn corrupt_file_is_a_json_error() {
        let store = temp_store();
        fs::create_dir_all(store.path().parent().unwrap()).unwrap();
        fs::write(store.path(), "not json").unwrap();
        assert!(matches!(store.load(), Err(AuthError::Json(_))));
    }
}
