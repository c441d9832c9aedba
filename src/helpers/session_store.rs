use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use anyhow::Context;
use serde::{Deserialize, Serialize};
use time::OffsetDateTime;
use crate::models::user::{AuthResponse, SessionUser};

#[derive(Clone, Serialize, Deserialize, Debug)]
pub struct StoredSession {
    pub auth_token: String,
    pub user: SessionUser,
    #[serde(with = "time::serde::rfc3339")]
    pub saved_at: OffsetDateTime,
}

impl From<AuthResponse> for StoredSession {
    fn from(response: AuthResponse) -> Self {
        Self {
            auth_token: response.token,
            user: response.user,
            saved_at: OffsetDateTime::now_utc(),
        }
    }
}

/// JSON file holding the bearer credential between invocations.
#[derive(Clone, Debug)]
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

    pub fn load(&self) -> anyhow::Result<Option<StoredSession>> {
        let raw = match fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
            Err(e) => {
                return Err(e).with_context(|| format!("Failed to read session file {}", self.path.display()));
            }
        };

        let session = serde_json::from_str(&raw)
            .with_context(|| format!("Session file {} is corrupted", self.path.display()))?;
        Ok(Some(session))
    }

    pub fn save(&self, session: &StoredSession) -> anyhow::Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)
                    .with_context(|| format!("Failed to create session directory {}", parent.display()))?;
            }
        }

        let raw = serde_json::to_string_pretty(session).context("Failed to serialize session")?;
        fs::write(&self.path, raw)
            .with_context(|| format!("Failed to write session file {}", self.path.display()))
    }

    pub fn clear(&self) -> anyhow::Result<()> {
        match fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e).with_context(|| format!("Failed to remove session file {}", self.path.display())),
        }
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;
    use crate::models::user::Role;
    use super::*;

    fn session() -> StoredSession {
        let response: AuthResponse = serde_json::from_value(json!({
            "token": "tok-123",
            "user": {
                "id": 9,
                "email": "duena@hotel.mx",
                "role": "hotel_owner",
                "first_name": "Lucia",
                "last_name": "Canul",
                "phone": null,
            }
        }))
        .unwrap();
        response.into()
    }

    #[test]
    fn empty_store_loads_none() {
        let dir = tempfile::tempdir().unwrap();
        let store = SessionStore::new(dir.path().join("session.json"));
        assert!(store.load().unwrap().is_none());
    }

    #[test]
    fn save_then_load_then_clear() {
        let dir = tempfile::tempdir().unwrap();
        let store = SessionStore::new(dir.path().join("nested").join("session.json"));

        store.save(&session()).unwrap();
        let loaded = store.load().unwrap().unwrap();
        assert_eq!(loaded.auth_token, "tok-123");
        assert_eq!(loaded.user.role, Role::HotelOwner);

        store.clear().unwrap();
        assert!(store.load().unwrap().is_none());
        store.clear().unwrap();
    }

    #[test]
    fn corrupted_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("session.json");
        fs::write(&path, "not json").unwrap();
        assert!(SessionStore::new(path).load().is_err());
    }
}
