//! Client library for the mbmanager backup-orchestration console.
//!
//! Three cooperating pieces:
//!
//! - [`api`]: the shared HTTP transport plus nine resource groups
//!   (auth, hosts, tasks, storages, notifications, logs, backups,
//!   users, dashboard) with a uniform list/get/create/update/delete
//!   vocabulary and resource-specific actions.
//! - [`auth`]: the session manager owning authentication state, with
//!   durable persistence across restarts and optional keychain-backed
//!   remembered credentials (`SessionManager::login_remembered`).
//! - [`router`]: the static route table and the navigation guard that
//!   gates every transition on session state.
//!
//! ```no_run
//! use mbmanager_client::{api::ApiClient, auth::SessionManager, config::Config};
//!
//! # async fn example() -> anyhow::Result<()> {
//! let config = Config::load()?;
//! let client = ApiClient::new(&config.base_url)?;
//! let mut session = SessionManager::new(client.clone(), config.state_dir()?);
//!
//! if !session.restore() {
//!     session.login("admin", "secret").await?;
//! }
//! let tasks = client.tasks().list().await?;
//! # let _ = tasks;
//! # Ok(())
//! # }
//! ```

pub mod api;
pub mod auth;
pub mod config;
pub mod models;
pub mod router;

pub use api::{ApiClient, ApiError};
pub use auth::SessionManager;
pub use config::Config;
pub use router::{check, Decision, RouteTable};
