//! Resource groups: one uniform calling convention over every backend
//! domain entity, so callers never build request paths by hand.
//!
//! Each group is a thin borrow of the shared `ApiClient`. Every
//! operation constructs its `Endpoint` first (pure, deterministic in
//! the arguments) and then dispatches it; nothing here caches, retries
//! or interprets failures.

use anyhow::Result;

use crate::models::{
    BackupLog, DashboardStats, DiskSpace, Host, LogPage, LogQuery, LoginRequest, LoginResponse,
    MessageResponse, Notification, PageQuery, Storage, Task, TestResult, User,
};

use super::{ApiClient, Endpoint};

impl ApiClient {
    pub fn auth(&self) -> AuthApi<'_> {
        AuthApi { client: self }
    }

    pub fn hosts(&self) -> HostApi<'_> {
        HostApi { client: self }
    }

    pub fn tasks(&self) -> TaskApi<'_> {
        TaskApi { client: self }
    }

    pub fn storages(&self) -> StorageApi<'_> {
        StorageApi { client: self }
    }

    pub fn notifications(&self) -> NotificationApi<'_> {
        NotificationApi { client: self }
    }

    pub fn logs(&self) -> LogApi<'_> {
        LogApi { client: self }
    }

    pub fn backups(&self) -> BackupApi<'_> {
        BackupApi { client: self }
    }

    pub fn users(&self) -> UserApi<'_> {
        UserApi { client: self }
    }

    pub fn dashboard(&self) -> DashboardApi<'_> {
        DashboardApi { client: self }
    }
}

/// Authentication endpoints. The session manager is the usual caller;
/// views talk to `SessionManager`, not to this group directly.
pub struct AuthApi<'a> {
    client: &'a ApiClient,
}

impl AuthApi<'_> {
    fn login_endpoint() -> Endpoint {
        Endpoint::post("/auth/login")
    }

    fn logout_endpoint() -> Endpoint {
        Endpoint::post("/auth/logout")
    }

    pub async fn login(&self, request: &LoginRequest) -> Result<LoginResponse> {
        self.client.send_json(Self::login_endpoint(), request).await
    }

    pub async fn logout(&self) -> Result<MessageResponse> {
        self.client.send(Self::logout_endpoint()).await
    }
}

/// MySQL source hosts: CRUD plus a connectivity probe.
pub struct HostApi<'a> {
    client: &'a ApiClient,
}

impl HostApi<'_> {
    fn list_endpoint() -> Endpoint {
        Endpoint::get("/hosts")
    }

    fn item_endpoint(id: u64) -> Endpoint {
        Endpoint::get(format!("/hosts/{}", id))
    }

    fn test_endpoint(id: u64) -> Endpoint {
        Endpoint::post(format!("/hosts/{}/test", id))
    }

    pub async fn list(&self) -> Result<Vec<Host>> {
        self.client.send(Self::list_endpoint()).await
    }

    pub async fn get(&self, id: u64) -> Result<Host> {
        self.client.send(Self::item_endpoint(id)).await
    }

    pub async fn create(&self, host: &Host) -> Result<Host> {
        self.client
            .send_json(Self::list_endpoint().into_post(), host)
            .await
    }

    pub async fn update(&self, id: u64, host: &Host) -> Result<Host> {
        self.client
            .send_json(Self::item_endpoint(id).into_put(), host)
            .await
    }

    pub async fn delete(&self, id: u64) -> Result<MessageResponse> {
        self.client.send(Self::item_endpoint(id).into_delete()).await
    }

    /// Probe connectivity; a successful probe also reports the server
    /// version and the list of databases visible to the account.
    pub async fn test(&self, id: u64) -> Result<TestResult> {
        self.client.send(Self::test_endpoint(id)).await
    }
}

/// Backup tasks: CRUD plus run-now, per-task logs, and deletion of a
/// backup artifact by its log id (the artifact lives under /backups,
/// but the operation is exposed here because only the task views use
/// it).
pub struct TaskApi<'a> {
    client: &'a ApiClient,
}

impl TaskApi<'_> {
    fn list_endpoint() -> Endpoint {
        Endpoint::get("/tasks")
    }

    fn item_endpoint(id: u64) -> Endpoint {
        Endpoint::get(format!("/tasks/{}", id))
    }

    fn run_endpoint(id: u64) -> Endpoint {
        Endpoint::post(format!("/tasks/{}/run", id))
    }

    fn logs_endpoint(id: u64) -> Endpoint {
        Endpoint::get(format!("/tasks/{}/logs", id))
    }

    fn delete_backup_endpoint(log_id: u64) -> Endpoint {
        Endpoint::delete(format!("/backups/{}", log_id))
    }

    pub async fn list(&self) -> Result<Vec<Task>> {
        self.client.send(Self::list_endpoint()).await
    }

    pub async fn get(&self, id: u64) -> Result<Task> {
        self.client.send(Self::item_endpoint(id)).await
    }

    pub async fn create(&self, task: &Task) -> Result<Task> {
        self.client
            .send_json(Self::list_endpoint().into_post(), task)
            .await
    }

    pub async fn update(&self, id: u64, task: &Task) -> Result<Task> {
        self.client
            .send_json(Self::item_endpoint(id).into_put(), task)
            .await
    }

    pub async fn delete(&self, id: u64) -> Result<MessageResponse> {
        self.client.send(Self::item_endpoint(id).into_delete()).await
    }

    /// Trigger an immediate run of the task.
    pub async fn run(&self, id: u64) -> Result<MessageResponse> {
        self.client.send(Self::run_endpoint(id)).await
    }

    /// Paginated backup logs for one task.
    pub async fn logs(&self, id: u64, query: &PageQuery) -> Result<LogPage> {
        self.client.send_query(Self::logs_endpoint(id), query).await
    }

    /// Delete the backup artifact (and its log entry) for a log id.
    pub async fn delete_backup(&self, log_id: u64) -> Result<MessageResponse> {
        self.client.send(Self::delete_backup_endpoint(log_id)).await
    }
}

/// Storage targets: CRUD plus a connectivity probe and disk usage.
pub struct StorageApi<'a> {
    client: &'a ApiClient,
}

impl StorageApi<'_> {
    fn list_endpoint() -> Endpoint {
        Endpoint::get("/storages")
    }

    fn item_endpoint(id: u64) -> Endpoint {
        Endpoint::get(format!("/storages/{}", id))
    }

    fn test_endpoint(id: u64) -> Endpoint {
        Endpoint::post(format!("/storages/{}/test", id))
    }

    fn disk_space_endpoint(id: u64) -> Endpoint {
        Endpoint::get(format!("/storages/{}/diskspace", id))
    }

    pub async fn list(&self) -> Result<Vec<Storage>> {
        self.client.send(Self::list_endpoint()).await
    }

    pub async fn get(&self, id: u64) -> Result<Storage> {
        self.client.send(Self::item_endpoint(id)).await
    }

    pub async fn create(&self, storage: &Storage) -> Result<Storage> {
        self.client
            .send_json(Self::list_endpoint().into_post(), storage)
            .await
    }

    pub async fn update(&self, id: u64, storage: &Storage) -> Result<Storage> {
        self.client
            .send_json(Self::item_endpoint(id).into_put(), storage)
            .await
    }

    pub async fn delete(&self, id: u64) -> Result<MessageResponse> {
        self.client.send(Self::item_endpoint(id).into_delete()).await
    }

    pub async fn test(&self, id: u64) -> Result<TestResult> {
        self.client.send(Self::test_endpoint(id)).await
    }

    /// Disk usage for the target. Backends without usage reporting
    /// (s3, oss) return zeroes.
    pub async fn disk_space(&self, id: u64) -> Result<DiskSpace> {
        self.client.send(Self::disk_space_endpoint(id)).await
    }
}

/// Notification channels: CRUD plus a delivery probe.
pub struct NotificationApi<'a> {
    client: &'a ApiClient,
}

impl NotificationApi<'_> {
    fn list_endpoint() -> Endpoint {
        Endpoint::get("/notifications")
    }

    fn item_endpoint(id: u64) -> Endpoint {
        Endpoint::get(format!("/notifications/{}", id))
    }

    fn test_endpoint(id: u64) -> Endpoint {
        Endpoint::post(format!("/notifications/{}/test", id))
    }

    pub async fn list(&self) -> Result<Vec<Notification>> {
        self.client.send(Self::list_endpoint()).await
    }

    pub async fn get(&self, id: u64) -> Result<Notification> {
        self.client.send(Self::item_endpoint(id)).await
    }

    pub async fn create(&self, notification: &Notification) -> Result<Notification> {
        self.client
            .send_json(Self::list_endpoint().into_post(), notification)
            .await
    }

    pub async fn update(&self, id: u64, notification: &Notification) -> Result<Notification> {
        self.client
            .send_json(Self::item_endpoint(id).into_put(), notification)
            .await
    }

    pub async fn delete(&self, id: u64) -> Result<MessageResponse> {
        self.client.send(Self::item_endpoint(id).into_delete()).await
    }

    /// Send a test message through the channel.
    pub async fn test(&self, id: u64) -> Result<TestResult> {
        self.client.send(Self::test_endpoint(id)).await
    }
}

/// Backup run logs, filtered and paginated server-side.
pub struct LogApi<'a> {
    client: &'a ApiClient,
}

impl LogApi<'_> {
    fn list_endpoint() -> Endpoint {
        Endpoint::get("/logs")
    }

    fn item_endpoint(id: u64) -> Endpoint {
        Endpoint::get(format!("/logs/{}", id))
    }

    pub async fn list(&self, query: &LogQuery) -> Result<LogPage> {
        self.client.send_query(Self::list_endpoint(), query).await
    }

    pub async fn get(&self, id: u64) -> Result<BackupLog> {
        self.client.send(Self::item_endpoint(id)).await
    }

    /// Delete the log entry only; the artifact is removed through the
    /// backup group.
    pub async fn delete(&self, id: u64) -> Result<MessageResponse> {
        self.client.send(Self::item_endpoint(id).into_delete()).await
    }
}

/// Backup artifacts, addressed by the log entry that produced them.
pub struct BackupApi<'a> {
    client: &'a ApiClient,
}

impl BackupApi<'_> {
    fn item_endpoint(id: u64) -> Endpoint {
        Endpoint::delete(format!("/backups/{}", id))
    }

    fn download_endpoint(id: u64) -> Endpoint {
        Endpoint::get(format!("/backups/{}/download", id))
    }

    pub async fn delete(&self, id: u64) -> Result<MessageResponse> {
        self.client.send(Self::item_endpoint(id)).await
    }

    /// Fetch the raw artifact bytes.
    pub async fn download(&self, id: u64) -> Result<Vec<u8>> {
        self.client.send_bytes(Self::download_endpoint(id)).await
    }
}

/// Console accounts.
pub struct UserApi<'a> {
    client: &'a ApiClient,
}

impl UserApi<'_> {
    fn list_endpoint() -> Endpoint {
        Endpoint::get("/users")
    }

    fn item_endpoint(id: u64) -> Endpoint {
        Endpoint::get(format!("/users/{}", id))
    }

    pub async fn list(&self) -> Result<Vec<User>> {
        self.client.send(Self::list_endpoint()).await
    }

    pub async fn get(&self, id: u64) -> Result<User> {
        self.client.send(Self::item_endpoint(id)).await
    }

    pub async fn create(&self, user: &User) -> Result<User> {
        self.client
            .send_json(Self::list_endpoint().into_post(), user)
            .await
    }

    pub async fn update(&self, id: u64, user: &User) -> Result<User> {
        self.client
            .send_json(Self::item_endpoint(id).into_put(), user)
            .await
    }

    pub async fn delete(&self, id: u64) -> Result<MessageResponse> {
        self.client.send(Self::item_endpoint(id).into_delete()).await
    }
}

/// Dashboard aggregates.
pub struct DashboardApi<'a> {
    client: &'a ApiClient,
}

impl DashboardApi<'_> {
    fn stats_endpoint() -> Endpoint {
        Endpoint::get("/dashboard/stats")
    }

    pub async fn stats(&self) -> Result<DashboardStats> {
        self.client.send(Self::stats_endpoint()).await
    }
}
