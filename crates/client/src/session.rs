//! Persisted login identity.
//!
//! The browser front-end kept one identity record in local storage under
//! a well-known key; here the same record lives as a single JSON file.
//! Nothing else is persisted across runs - the cart in particular stays
//! in memory.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use cafenet_core::{Role, UserId};

use crate::error::SessionError;

/// The logged-in identity, exactly as returned by `POST /auth/login`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    pub id: UserId,
    pub name: String,
    pub role: Role,
}

/// File-backed store holding at most one [`Session`] record.
#[derive(Debug, Clone)]
pub struct SessionStore {
    path: PathBuf,
}

impl SessionStore {
    /// Create a store backed by `path`.
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Path of the backing file.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Persist `session`, overwriting any prior record.
    ///
    /// Creates the parent directory if missing.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError`] if the record cannot be encoded or the
    /// file cannot be written.
    pub fn save(&self, session: &Session) -> Result<(), SessionError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).map_err(|source| SessionError::Write {
                path: self.path.clone(),
                source,
            })?;
        }
        let encoded = serde_json::to_string_pretty(session)?;
        fs::write(&self.path, encoded).map_err(|source| SessionError::Write {
            path: self.path.clone(),
            source,
        })
    }

    /// Load the stored session.
    ///
    /// An absent or malformed record (unreadable file, non-JSON content,
    /// missing fields) reads as "no session"; this never fails to the
    /// caller.
    #[must_use]
    pub fn load(&self) -> Option<Session> {
        let raw = fs::read_to_string(&self.path).ok()?;
        serde_json::from_str(&raw).ok()
    }

    /// Remove the stored session. Idempotent: a missing record is Ok.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError`] if the file exists but cannot be removed.
    pub fn clear(&self) -> Result<(), SessionError> {
        match fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(()),
            Err(source) => Err(SessionError::Remove {
                path: self.path.clone(),
                source,
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store_in(dir: &tempfile::TempDir) -> SessionStore {
        SessionStore::new(dir.path().join("session.json"))
    }

    fn sample_session() -> Session {
        Session {
            id: UserId::new(7),
            name: "Budi".to_string(),
            role: Role::Customer,
        }
    }

    #[test]
    fn test_save_then_load_round_trips() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir);

        store.save(&sample_session()).unwrap();
        assert_eq!(store.load(), Some(sample_session()));
    }

    #[test]
    fn test_save_overwrites_prior_record() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir);

        store.save(&sample_session()).unwrap();
        let replacement = Session {
            id: UserId::new(1),
            name: "Sari".to_string(),
            role: Role::Admin,
        };
        store.save(&replacement).unwrap();

        assert_eq!(store.load(), Some(replacement));
    }

    #[test]
    fn test_save_creates_parent_directory() {
        let dir = tempfile::tempdir().unwrap();
        let store = SessionStore::new(dir.path().join("nested").join("session.json"));

        store.save(&sample_session()).unwrap();
        assert_eq!(store.load(), Some(sample_session()));
    }

    #[test]
    fn test_load_absent_is_none() {
        let dir = tempfile::tempdir().unwrap();
        assert_eq!(store_in(&dir).load(), None);
    }

    #[test]
    fn test_load_malformed_is_none() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir);

        for garbage in ["not json at all", "{\"id\": 3}", "{\"role\": \"wizard\"}", ""] {
            fs::write(store.path(), garbage).unwrap();
            assert_eq!(store.load(), None, "input {garbage:?} must read as no session");
        }
    }

    #[test]
    fn test_clear_is_idempotent() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir);

        store.save(&sample_session()).unwrap();
        store.clear().unwrap();
        assert_eq!(store.load(), None);

        // Second clear with nothing stored is still Ok.
        store.clear().unwrap();
    }
}
