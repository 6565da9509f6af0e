//! Request planning: the pure (verb, path) product of a resource
//! operation, separated from dispatch so it can be tested without I/O.

use std::fmt;

use reqwest::Method;

/// One planned outbound request: an HTTP verb plus a path relative to
/// the API base URL. Construction is deterministic in the operation's
/// arguments and has no side effects.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoint {
    pub method: Method,
    pub path: String,
}

impl Endpoint {
    pub fn new(method: Method, path: impl Into<String>) -> Self {
        Self {
            method,
            path: path.into(),
        }
    }

    pub fn get(path: impl Into<String>) -> Self {
        Self::new(Method::GET, path)
    }

    pub fn post(path: impl Into<String>) -> Self {
        Self::new(Method::POST, path)
    }

    pub fn put(path: impl Into<String>) -> Self {
        Self::new(Method::PUT, path)
    }

    pub fn delete(path: impl Into<String>) -> Self {
        Self::new(Method::DELETE, path)
    }

    // Collection and item paths serve several operations; re-verbing a
    // planned endpoint keeps each path template defined exactly once.

    pub fn into_post(self) -> Self {
        Self::new(Method::POST, self.path)
    }

    pub fn into_put(self) -> Self {
        Self::new(Method::PUT, self.path)
    }

    pub fn into_delete(self) -> Self {
        Self::new(Method::DELETE, self.path)
    }
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.method, self.path)
    }
}
