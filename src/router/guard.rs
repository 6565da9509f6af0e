//! The navigation guard: a pure function of (target route, session
//! state), evaluated synchronously on every transition.

use super::routes::{RouteTable, HOME_PATH, LOGIN_PATH};

/// Outcome of a navigation attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Decision {
    /// Render the target route unchanged.
    Allow,
    /// Abort the transition and navigate here instead.
    Redirect(String),
}

/// Gate a navigation to `target`.
///
/// The auth-required check runs strictly before the
/// login-while-authenticated check. Swapping them would send a route
/// that is both the login page and (incorrectly) auth-required into a
/// redirect loop; with this order it resolves to the login redirect.
/// Paths that match nothing in the table fall back to requiring
/// authentication.
pub fn check(table: &RouteTable, target: &str, authenticated: bool) -> Decision {
    let resolved = table.resolve(target);
    let requires_auth = resolved
        .as_ref()
        .map(|r| r.requires_auth)
        .unwrap_or(true);

    if requires_auth && !authenticated {
        return Decision::Redirect(LOGIN_PATH.to_string());
    }

    let is_login = resolved
        .as_ref()
        .map(|r| r.full_path == LOGIN_PATH)
        .unwrap_or(target == LOGIN_PATH);
    if is_login && authenticated {
        return Decision::Redirect(HOME_PATH.to_string());
    }

    Decision::Allow
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table() -> RouteTable {
        RouteTable::standard()
    }

    #[test]
    fn unauthenticated_hosts_redirects_to_login() {
        assert_eq!(
            check(&table(), "/hosts", false),
            Decision::Redirect("/login".into())
        );
    }

    #[test]
    fn authenticated_hosts_is_allowed() {
        assert_eq!(check(&table(), "/hosts", true), Decision::Allow);
    }

    #[test]
    fn unauthenticated_login_is_allowed() {
        assert_eq!(check(&table(), "/login", false), Decision::Allow);
    }

    #[test]
    fn authenticated_login_redirects_home_not_back_to_login() {
        assert_eq!(
            check(&table(), "/login", true),
            Decision::Redirect("/".into())
        );
    }

    #[test]
    fn unknown_path_defaults_to_requiring_auth() {
        assert_eq!(
            check(&table(), "/definitely-not-a-route", false),
            Decision::Redirect("/login".into())
        );
        assert_eq!(check(&table(), "/definitely-not-a-route", true), Decision::Allow);
    }

    #[test]
    fn root_requires_auth() {
        assert_eq!(
            check(&table(), "/", false),
            Decision::Redirect("/login".into())
        );
        assert_eq!(check(&table(), "/", true), Decision::Allow);
    }

    #[test]
    fn misconfigured_auth_required_login_route_does_not_loop_when_authenticated() {
        use crate::router::routes::RouteEntry;

        // A table where the login route is wrongly marked as
        // requiring auth. Rule ordering keeps the authenticated case
        // loop-free: the auth check passes, then the login check
        // redirects home exactly once.
        let mut login = RouteEntry::new("/login", "Login");
        login.meta.requires_auth = Some(true);
        let broken = RouteTable::new(vec![login]);

        assert_eq!(
            check(&broken, "/login", true),
            Decision::Redirect("/".into())
        );
    }
}
