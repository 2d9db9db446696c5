//! Session store: the single persisted record describing the signed-in user.
//!
//! There is no real credential check. Any non-empty id/password pair yields a
//! session; logout deletes the record. The store is created once at startup
//! and handed to handlers through `AppState`.

pub mod handlers;

use std::io::{self, Write};
use std::path::{Path, PathBuf};

use chrono::Utc;
use tempfile::NamedTempFile;
use thiserror::Error;
use tracing::{info, warn};

use crate::models::session::SessionRecord;

/// Role assigned to every session.
pub const SESSION_ROLE: &str = "Personnel Analyst";

#[derive(Debug, Error)]
pub enum SessionError {
    #[error("Invalid credentials")]
    InvalidCredentials,

    #[error("session file I/O failed: {0}")]
    Storage(#[from] io::Error),

    #[error("session record could not be encoded: {0}")]
    Encode(#[from] serde_json::Error),
}

#[derive(Debug, Clone)]
pub struct SessionStore {
    path: PathBuf,
}

impl SessionStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Creates and persists a session for any non-empty credentials.
    /// On failure nothing already stored is touched.
    pub fn login(&self, id: &str, password: &str) -> Result<SessionRecord, SessionError> {
        if id.is_empty() || password.is_empty() {
            return Err(SessionError::InvalidCredentials);
        }

        let record = SessionRecord {
            id: id.to_string(),
            name: format!("Officer {id}"),
            role: SESSION_ROLE.to_string(),
            token: format!("demo-token-{}", Utc::now().timestamp_millis()),
        };
        self.persist(&record)?;

        info!("Session opened for {}", record.id);
        Ok(record)
    }

    /// Removes the stored record. Succeeds when nothing is stored.
    pub fn logout(&self) -> Result<(), SessionError> {
        match std::fs::remove_file(&self.path) {
            Ok(()) => {
                info!("Session closed");
                Ok(())
            }
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }

    /// Reads the stored record. A record that no longer parses counts as absent.
    pub fn current_user(&self) -> Result<Option<SessionRecord>, SessionError> {
        let raw = match std::fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(e.into()),
        };

        match serde_json::from_str(&raw) {
            Ok(record) => Ok(Some(record)),
            Err(e) => {
                warn!("Ignoring unreadable session record at {}: {e}", self.path.display());
                Ok(None)
            }
        }
    }

    pub fn is_authenticated(&self) -> Result<bool, SessionError> {
        Ok(self.current_user()?.is_some())
    }

    // Write to a sibling temp file, then rename over the target.
    fn persist(&self, record: &SessionRecord) -> Result<(), SessionError> {
        let dir = match self.path.parent() {
            Some(p) if !p.as_os_str().is_empty() => p,
            _ => Path::new("."),
        };
        let mut tmp = NamedTempFile::new_in(dir)?;
        serde_json::to_writer(&mut tmp, record)?;
        tmp.flush()?;
        tmp.persist(&self.path).map_err(|e| e.error)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn store_in(dir: &tempfile::TempDir) -> SessionStore {
        SessionStore::new(dir.path().join("iaf-user.json"))
    }

    #[test]
    fn test_login_with_credentials_authenticates() {
        let dir = tempdir().unwrap();
        let store = store_in(&dir);

        let record = store.login("4471", "hunter2").unwrap();
        assert_eq!(record.id, "4471");
        assert_eq!(record.name, "Officer 4471");
        assert_eq!(record.role, "Personnel Analyst");
        assert!(record.token.starts_with("demo-token-"));

        assert!(store.is_authenticated().unwrap());
        assert_eq!(store.current_user().unwrap(), Some(record));
    }

    #[test]
    fn test_login_rejects_empty_id_or_password() {
        let dir = tempdir().unwrap();
        let store = store_in(&dir);

        for (id, password) in [("", "pw"), ("4471", ""), ("", "")] {
            assert!(matches!(
                store.login(id, password),
                Err(SessionError::InvalidCredentials)
            ));
        }
        assert!(!store.is_authenticated().unwrap());
    }

    #[test]
    fn test_failed_login_keeps_existing_session() {
        let dir = tempdir().unwrap();
        let store = store_in(&dir);
        let original = store.login("alpha", "pw").unwrap();

        assert!(store.login("", "pw").is_err());
        assert_eq!(store.current_user().unwrap(), Some(original));
    }

    #[test]
    fn test_logout_clears_and_is_idempotent() {
        let dir = tempdir().unwrap();
        let store = store_in(&dir);

        store.logout().unwrap();
        assert_eq!(store.current_user().unwrap(), None);

        store.login("alpha", "pw").unwrap();
        store.logout().unwrap();
        store.logout().unwrap();
        assert_eq!(store.current_user().unwrap(), None);
        assert!(!store.path().exists());
    }

    #[test]
    fn test_relogin_replaces_record() {
        let dir = tempdir().unwrap();
        let store = store_in(&dir);
        store.login("alpha", "pw").unwrap();
        store.login("bravo", "pw").unwrap();

        assert_eq!(store.current_user().unwrap().unwrap().id, "bravo");
    }

    #[test]
    fn test_corrupt_record_reads_as_absent() {
        let dir = tempdir().unwrap();
        let store = store_in(&dir);
        std::fs::write(store.path(), "{not json").unwrap();

        assert_eq!(store.current_user().unwrap(), None);
        assert!(!store.is_authenticated().unwrap());
    }
}
