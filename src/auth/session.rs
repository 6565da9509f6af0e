use std::path::PathBuf;

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Session file name in the state directory
const SESSION_FILE: &str = "session.json";

/// Persisted session state: the bearer token plus login metadata.
/// Tokens are opaque to the client; the server decides validity.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionData {
    pub token: String,
    #[serde(default)]
    pub username: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl SessionData {
    pub fn new(token: String, username: Option<String>) -> Self {
        Self {
            token,
            username,
            created_at: Utc::now(),
        }
    }
}

/// Durable session storage, one JSON file in an injectable state
/// directory so tests can point it at a temp dir.
pub struct Session {
    state_dir: PathBuf,
    pub data: Option<SessionData>,
}

impl Session {
    pub fn new(state_dir: PathBuf) -> Self {
        Self {
            state_dir,
            data: None,
        }
    }

    /// Load session from disk. Returns whether a session was found.
    pub fn load(&mut self) -> Result<bool> {
        let path = self.session_path();
        if path.exists() {
            let contents =
                std::fs::read_to_string(&path).context("Failed to read session file")?;
            let data: SessionData =
                serde_json::from_str(&contents).context("Failed to parse session file")?;
            if !data.token.is_empty() {
                self.data = Some(data);
                return Ok(true);
            }
        }
        Ok(false)
    }

    /// Save session to disk
    pub fn save(&self) -> Result<()> {
        if let Some(ref data) = self.data {
            let path = self.session_path();
            if let Some(parent) = path.parent() {
                std::fs::create_dir_all(parent)?;
            }
            let contents = serde_json::to_string_pretty(data)?;
            std::fs::write(path, contents)?;
        }
        Ok(())
    }

    /// Clear session data in memory and on disk
    pub fn clear(&mut self) -> Result<()> {
        self.data = None;
        let path = self.session_path();
        if path.exists() {
            std::fs::remove_file(path)?;
        }
        Ok(())
    }

    /// Replace the session with new data
    pub fn update(&mut self, data: SessionData) {
        self.data = Some(data);
    }

    /// Get the bearer token if a session is held
    pub fn token(&self) -> Option<&str> {
        self.data.as_ref().map(|d| d.token.as_str())
    }

    fn session_path(&self) -> PathBuf {
        self.state_dir.join(SESSION_FILE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn save_and_load_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let mut session = Session::new(dir.path().to_path_buf());
        session.update(SessionData::new("abc".into(), Some("admin".into())));
        session.save().unwrap();

        let mut restored = Session::new(dir.path().to_path_buf());
        assert!(restored.load().unwrap());
        assert_eq!(restored.token(), Some("abc"));
        assert_eq!(restored.data.unwrap().username.as_deref(), Some("admin"));
    }

    #[test]
    fn load_without_file_yields_empty_session() {
        let dir = tempfile::tempdir().unwrap();
        let mut session = Session::new(dir.path().to_path_buf());
        assert!(!session.load().unwrap());
        assert!(session.token().is_none());
    }

    #[test]
    fn empty_token_on_disk_is_ignored() {
        let dir = tempfile::tempdir().unwrap();
        let mut session = Session::new(dir.path().to_path_buf());
        session.update(SessionData::new(String::new(), None));
        session.save().unwrap();

        let mut restored = Session::new(dir.path().to_path_buf());
        assert!(!restored.load().unwrap());
        assert!(restored.token().is_none());
    }

    #[test]
    fn clear_removes_the_file() {
        let dir = tempfile::tempdir().unwrap();
        let mut session = Session::new(dir.path().to_path_buf());
        session.update(SessionData::new("abc".into(), None));
        session.save().unwrap();
        session.clear().unwrap();

        let mut restored = Session::new(dir.path().to_path_buf());
        assert!(!restored.load().unwrap());
    }
}
