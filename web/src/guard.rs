//! Route access control: a pure function of (path, auth state).

/// Where a navigation is allowed to go.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Gate {
    /// Render the requested screen.
    Allow,
    /// Unauthenticated visitor on a protected path.
    ToLanding,
    /// Signed-in user on a public entry path.
    ToFeed,
}

/// The only two paths an unauthenticated session may reach.
fn is_public(path: &str) -> bool {
    matches!(path, "/" | "/auth")
}

/// Decide what to do with a navigation. A single boolean gate — no roles,
/// no per-route permissions.
pub fn gate(path: &str, authenticated: bool) -> Gate {
    match (is_public(path), authenticated) {
        (true, true) => Gate::ToFeed,
        (false, false) => Gate::ToLanding,
        _ => Gate::Allow,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PROTECTED: &[&str] = &[
        "/feed",
        "/profile/u1",
        "/messages",
        "/stories",
        "/reels",
        "/groups",
        "/marketplace",
        "/events",
        "/jobs",
        "/notifications",
        "/search",
    ];

    #[test]
    fn test_unauthenticated_is_sent_to_landing_from_every_protected_path() {
        for path in PROTECTED {
            assert_eq!(gate(path, false), Gate::ToLanding, "path {path}");
        }
    }

    #[test]
    fn test_unauthenticated_may_reach_public_paths() {
        assert_eq!(gate("/", false), Gate::Allow);
        assert_eq!(gate("/auth", false), Gate::Allow);
    }

    #[test]
    fn test_authenticated_is_sent_from_public_paths_to_feed() {
        assert_eq!(gate("/", true), Gate::ToFeed);
        assert_eq!(gate("/auth", true), Gate::ToFeed);
    }

    #[test]
    fn test_authenticated_may_reach_every_protected_path() {
        for path in PROTECTED {
            assert_eq!(gate(path, true), Gate::Allow, "path {path}");
        }
    }

    #[test]
    fn test_unknown_paths_are_protected_by_default() {
        assert_eq!(gate("/admin", false), Gate::ToLanding);
        assert_eq!(gate("/admin", true), Gate::Allow);
    }
}
