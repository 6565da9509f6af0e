//! The session manager: single source of truth for "is the current
//! user authenticated", with durable persistence across restarts.
//!
//! State transitions happen in exactly three places: `restore` (disk
//! to memory, no network), `login` (populate on success only) and
//! `logout` (unconditional clear). Session-mutating operations take
//! `&mut self`, so the borrow checker serializes overlapping calls;
//! reads of the token stay lock-free for the guard and for outbound
//! requests.

use std::path::PathBuf;

use anyhow::Result;
use tracing::{debug, warn};

use crate::api::ApiClient;
use crate::models::{LoginRequest, LoginResponse, User};

use super::credentials::CredentialStore;
use super::session::{Session, SessionData};

pub struct SessionManager {
    client: ApiClient,
    session: Session,
    profile: Option<User>,
}

impl SessionManager {
    /// `client` shares its token cell with every other clone, so a
    /// login here is visible to all resource groups immediately.
    pub fn new(client: ApiClient, state_dir: PathBuf) -> Self {
        Self {
            client,
            session: Session::new(state_dir),
            profile: None,
        }
    }

    /// Load a previously persisted session into memory. No network
    /// call. Never fails: a missing or unreadable session file just
    /// yields an unauthenticated session. Returns whether a token was
    /// restored.
    pub fn restore(&mut self) -> bool {
        match self.session.load() {
            Ok(true) => {
                if let Some(token) = self.session.token() {
                    self.client.set_token(token);
                }
                debug!("session restored from disk");
                true
            }
            Ok(false) => false,
            Err(e) => {
                warn!(error = %e, "failed to restore session, starting unauthenticated");
                false
            }
        }
    }

    /// Exchange credentials for a token. On success the token is held
    /// in memory and persisted; on any failure the previous session
    /// state is left untouched and the error is returned to the caller.
    pub async fn login(&mut self, username: &str, password: &str) -> Result<LoginResponse> {
        let request = LoginRequest {
            username: username.to_string(),
            password: password.to_string(),
        };
        let response = self.client.auth().login(&request).await?;

        self.client.set_token(response.token.clone());
        self.session.update(SessionData::new(
            response.token.clone(),
            Some(username.to_string()),
        ));
        if let Err(e) = self.session.save() {
            // The in-memory session is still valid; only persistence
            // across restarts is lost.
            warn!(error = %e, "failed to persist session");
        }
        self.profile = response.user.clone();

        Ok(response)
    }

    /// Log in with a password previously stored in the OS keychain.
    /// Fails without touching session state when nothing is stored
    /// for the username.
    pub async fn login_remembered(&mut self, username: &str) -> Result<LoginResponse> {
        let password = CredentialStore::get_password(username)?;
        self.login(username, &password).await
    }

    /// Store credentials in the OS keychain so `login_remembered` can
    /// sign in without prompting for a password.
    pub fn remember_credentials(username: &str, password: &str) -> Result<()> {
        CredentialStore::store(username, password)
    }

    /// Remove remembered credentials for a username.
    pub fn forget_credentials(username: &str) -> Result<()> {
        CredentialStore::delete(username)
    }

    /// Terminate the session. The remote invalidation is best-effort:
    /// its failure is logged and absorbed, and the local clear runs
    /// unconditionally so the user can never be stuck logged in.
    pub async fn logout(&mut self) {
        if let Err(e) = self.client.auth().logout().await {
            warn!(error = %e, "remote logout failed, clearing local session anyway");
        }

        self.client.clear_token();
        self.profile = None;
        if let Err(e) = self.session.clear() {
            warn!(error = %e, "failed to remove persisted session");
        }
    }

    /// Whether a non-empty token is currently held.
    pub fn is_authenticated(&self) -> bool {
        self.client.has_token()
    }

    /// Profile returned by the last successful login, if any.
    pub fn profile(&self) -> Option<&User> {
        self.profile.as_ref()
    }

    /// Username of the restored or logged-in session, if known.
    pub fn username(&self) -> Option<&str> {
        self.session
            .data
            .as_ref()
            .and_then(|d| d.username.as_deref())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // A closed local port: connections are refused immediately, which
    // stands in for the remote service being unreachable.
    const UNREACHABLE_URL: &str = "http://127.0.0.1:9/api/v1";

    fn manager(dir: &std::path::Path) -> SessionManager {
        let client = ApiClient::new(UNREACHABLE_URL).unwrap();
        SessionManager::new(client, dir.to_path_buf())
    }

    /// Serve exactly one canned HTTP response on an ephemeral local
    /// port and return the base URL pointing at it.
    async fn serve_once(status_line: &str, body: &str) -> String {
        use tokio::io::{AsyncReadExt, AsyncWriteExt};

        let response = format!(
            "HTTP/1.1 {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
            status_line,
            body.len(),
            body
        );
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            let (mut socket, _) = listener.accept().await.unwrap();
            let mut buf = [0u8; 4096];
            let _ = socket.read(&mut buf).await;
            socket.write_all(response.as_bytes()).await.unwrap();
            let _ = socket.shutdown().await;
        });
        format!("http://{}/api/v1", addr)
    }

    #[test]
    fn restore_with_no_persisted_token_is_unauthenticated() {
        let dir = tempfile::tempdir().unwrap();
        let mut mgr = manager(dir.path());
        assert!(!mgr.restore());
        assert!(!mgr.is_authenticated());
    }

    #[test]
    fn restore_picks_up_persisted_token() {
        let dir = tempfile::tempdir().unwrap();
        {
            let mut session = Session::new(dir.path().to_path_buf());
            session.update(SessionData::new("abc".into(), Some("admin".into())));
            session.save().unwrap();
        }

        let client = ApiClient::new(UNREACHABLE_URL).unwrap();
        let requester = client.clone();
        let mut mgr = SessionManager::new(client, dir.path().to_path_buf());
        assert!(mgr.restore());
        assert!(mgr.is_authenticated());
        assert_eq!(mgr.username(), Some("admin"));
        // Subsequent requests from any clone carry the restored token.
        assert_eq!(requester.token().as_deref(), Some("abc"));
    }

    #[test]
    fn restore_survives_a_corrupt_session_file() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("session.json"), "not json").unwrap();

        let mut mgr = manager(dir.path());
        assert!(!mgr.restore());
        assert!(!mgr.is_authenticated());
    }

    #[tokio::test]
    async fn successful_login_stores_token_in_memory_and_on_disk() {
        let dir = tempfile::tempdir().unwrap();
        let base_url = serve_once(
            "200 OK",
            r#"{"token":"T1","user":{"username":"admin","role":"admin"}}"#,
        )
        .await;

        let client = ApiClient::new(base_url).unwrap();
        let mut mgr = SessionManager::new(client.clone(), dir.path().to_path_buf());

        let response = mgr.login("admin", "secret").await.unwrap();
        assert_eq!(response.token, "T1");

        assert!(mgr.is_authenticated());
        assert_eq!(client.token().as_deref(), Some("T1"));
        assert_eq!(mgr.profile().map(|u| u.username.as_str()), Some("admin"));

        // Durable storage holds the new token.
        let mut session = Session::new(dir.path().to_path_buf());
        assert!(session.load().unwrap());
        assert_eq!(session.token(), Some("T1"));
        assert_eq!(session.data.unwrap().username.as_deref(), Some("admin"));
    }

    #[tokio::test]
    async fn rejected_login_propagates_and_leaves_session_empty() {
        let dir = tempfile::tempdir().unwrap();
        let base_url = serve_once("401 Unauthorized", r#"{"error":"invalid credentials"}"#).await;

        let client = ApiClient::new(base_url).unwrap();
        let mut mgr = SessionManager::new(client, dir.path().to_path_buf());

        assert!(mgr.login("admin", "wrong").await.is_err());
        assert!(!mgr.is_authenticated());
        let mut session = Session::new(dir.path().to_path_buf());
        assert!(!session.load().unwrap());
    }

    #[tokio::test]
    async fn login_remembered_without_stored_credentials_fails_untouched() {
        let dir = tempfile::tempdir().unwrap();
        let mut mgr = manager(dir.path());

        let result = mgr
            .login_remembered("mbmanager-client-missing-test-user")
            .await;
        assert!(result.is_err());
        assert!(!mgr.is_authenticated());
    }

    #[tokio::test]
    async fn failed_login_leaves_session_state_unchanged() {
        let dir = tempfile::tempdir().unwrap();
        {
            let mut session = Session::new(dir.path().to_path_buf());
            session.update(SessionData::new("existing".into(), None));
            session.save().unwrap();
        }

        let mut mgr = manager(dir.path());
        mgr.restore();
        assert!(mgr.is_authenticated());

        // The unreachable base URL makes login fail at the transport.
        let result = mgr.login("u", "p").await;
        assert!(result.is_err());

        // Prior state is preserved, in memory and on disk.
        assert!(mgr.is_authenticated());
        let mut session = Session::new(dir.path().to_path_buf());
        assert!(session.load().unwrap());
        assert_eq!(session.token(), Some("existing"));
    }

    #[tokio::test]
    async fn logout_clears_session_even_when_remote_call_fails() {
        let dir = tempfile::tempdir().unwrap();
        {
            let mut session = Session::new(dir.path().to_path_buf());
            session.update(SessionData::new("abc".into(), None));
            session.save().unwrap();
        }

        let mut mgr = manager(dir.path());
        mgr.restore();
        assert!(mgr.is_authenticated());

        // Remote logout cannot succeed against the unreachable URL;
        // local sign-out must happen regardless.
        mgr.logout().await;

        assert!(!mgr.is_authenticated());
        assert!(mgr.profile().is_none());
        let mut session = Session::new(dir.path().to_path_buf());
        assert!(!session.load().unwrap());
    }
}
