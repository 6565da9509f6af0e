//! Authentication: session state, durable persistence and credentials.
//!
//! - `SessionManager`: restore / login / logout / is_authenticated
//! - `Session`: the on-disk session file
//! - `CredentialStore`: optional remember-me storage via the OS keychain

pub mod credentials;
pub mod manager;
pub mod session;

pub use credentials::CredentialStore;
pub use manager::SessionManager;
pub use session::{Session, SessionData};
