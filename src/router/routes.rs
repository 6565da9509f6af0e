//! The static route tree for the console.
//!
//! Routes are declared once at startup and never mutated. Each entry
//! carries `requires_auth` (default true, inherited by children) plus
//! presentational metadata (title, icon) that the guard ignores.

/// Path of the login view.
pub const LOGIN_PATH: &str = "/login";

/// Default landing route for authenticated users.
pub const HOME_PATH: &str = "/";

/// Per-route metadata.
#[derive(Debug, Clone, Default)]
pub struct RouteMeta {
    /// `None` inherits from the parent; the tree-wide default is true.
    pub requires_auth: Option<bool>,
    pub title: Option<&'static str>,
    pub icon: Option<&'static str>,
}

/// One node of the route tree. Child paths are relative to the parent.
#[derive(Debug, Clone)]
pub struct RouteEntry {
    pub path: &'static str,
    pub name: &'static str,
    pub redirect: Option<&'static str>,
    pub meta: RouteMeta,
    pub children: Vec<RouteEntry>,
}

impl RouteEntry {
    pub fn new(path: &'static str, name: &'static str) -> Self {
        Self {
            path,
            name,
            redirect: None,
            meta: RouteMeta::default(),
            children: Vec::new(),
        }
    }

    fn titled(path: &'static str, name: &'static str, title: &'static str, icon: &'static str) -> Self {
        Self {
            meta: RouteMeta {
                requires_auth: None,
                title: Some(title),
                icon: Some(icon),
            },
            ..Self::new(path, name)
        }
    }
}

/// A route matched against the tree, with inherited metadata applied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedRoute {
    pub name: &'static str,
    pub full_path: String,
    pub requires_auth: bool,
    pub title: Option<&'static str>,
    pub redirect: Option<&'static str>,
}

/// The immutable route tree, built once at startup.
pub struct RouteTable {
    routes: Vec<RouteEntry>,
}

impl RouteTable {
    pub fn new(routes: Vec<RouteEntry>) -> Self {
        Self { routes }
    }

    /// The console's route tree: a public login view and an
    /// auth-required layout that redirects to the dashboard and holds
    /// the eight resource views.
    pub fn standard() -> Self {
        let mut login = RouteEntry::new(LOGIN_PATH, "Login");
        login.meta.requires_auth = Some(false);

        let mut root = RouteEntry::new(HOME_PATH, "Layout");
        root.meta.requires_auth = Some(true);
        root.redirect = Some("/dashboard");
        root.children = vec![
            RouteEntry::titled("dashboard", "Dashboard", "Dashboard", "DataAnalysis"),
            RouteEntry::titled("hosts", "Hosts", "Host Management", "Monitor"),
            RouteEntry::titled("tasks", "Tasks", "Task Management", "Calendar"),
            RouteEntry::titled("backups", "Backups", "Backup Management", "Files"),
            RouteEntry::titled("storages", "Storages", "Storage Management", "FolderOpened"),
            RouteEntry::titled("notifications", "Notifications", "Notification Management", "Bell"),
            RouteEntry::titled("logs", "Logs", "Backup Logs", "Document"),
            RouteEntry::titled("users", "Users", "User Management", "User"),
        ];

        Self::new(vec![login, root])
    }

    /// Match a target path against the tree. Trailing slashes are
    /// ignored; metadata is inherited top-down with `requires_auth`
    /// defaulting to true.
    pub fn resolve(&self, path: &str) -> Option<ResolvedRoute> {
        let target = normalize(path);
        for route in &self.routes {
            if let Some(found) = resolve_in(route, "", true, &target) {
                return Some(found);
            }
        }
        None
    }
}

fn normalize(path: &str) -> String {
    if path.len() > 1 && path.ends_with('/') {
        path.trim_end_matches('/').to_string()
    } else {
        path.to_string()
    }
}

fn join(parent: &str, child: &str) -> String {
    if child.starts_with('/') {
        child.to_string()
    } else if parent.ends_with('/') {
        format!("{}{}", parent, child)
    } else {
        format!("{}/{}", parent, child)
    }
}

fn resolve_in(
    entry: &RouteEntry,
    parent_path: &str,
    inherited_auth: bool,
    target: &str,
) -> Option<ResolvedRoute> {
    let full_path = normalize(&join(parent_path, entry.path));
    let requires_auth = entry.meta.requires_auth.unwrap_or(inherited_auth);

    if full_path == target {
        return Some(ResolvedRoute {
            name: entry.name,
            full_path,
            requires_auth,
            title: entry.meta.title,
            redirect: entry.redirect,
        });
    }

    for child in &entry.children {
        if let Some(found) = resolve_in(child, &full_path, requires_auth, target) {
            return Some(found);
        }
    }
    None
}
