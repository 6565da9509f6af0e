//! Route table and navigation guard.
//!
//! The tree is declared once (`RouteTable::standard`) and the guard is
//! a pure function over it; view construction and lazy loading are a
//! presentation concern outside this crate.

pub mod guard;
pub mod routes;

pub use guard::{check, Decision};
pub use routes::{ResolvedRoute, RouteEntry, RouteMeta, RouteTable, HOME_PATH, LOGIN_PATH};
