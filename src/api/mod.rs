//! REST API access layer for the mbmanager service.
//!
//! `ApiClient` is the shared transport: it owns the connection pool
//! and the bearer token, and maps response statuses to `ApiError`.
//! The resource groups in `resources` expose the uniform
//! list/get/create/update/delete/action vocabulary over it.

pub mod client;
pub mod endpoint;
pub mod error;
pub mod resources;

pub use client::ApiClient;
pub use endpoint::Endpoint;
pub use error::ApiError;
pub use resources::{
    AuthApi, BackupApi, DashboardApi, HostApi, LogApi, NotificationApi, StorageApi, TaskApi,
    UserApi,
};
