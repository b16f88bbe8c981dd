//! Route Table
//!
//! Static path-to-page mapping, declared once and shared by the router
//! declaration in `app` and the navigation header.

/// The four routable pages.
///
/// The table is built at application start and is immutable for the process
/// lifetime; there is no dynamic route registration.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Page {
    Home,
    Login,
    Dashboard,
    SignUp,
}

impl Page {
    /// Every page, in declaration order.
    pub const ALL: [Page; 4] = [Page::Home, Page::Login, Page::Dashboard, Page::SignUp];

    /// URL path the page is mounted at.
    pub fn path(self) -> &'static str {
        match self {
            Page::Home => "/",
            Page::Login => "/login",
            Page::Dashboard => "/dashboard",
            Page::SignUp => "/signup",
        }
    }

    /// Label shown in the navigation header.
    pub fn title(self) -> &'static str {
        match self {
            Page::Home => "Home",
            Page::Login => "Log In",
            Page::Dashboard => "Dashboard",
            Page::SignUp => "Sign Up",
        }
    }

    /// Exact-match lookup. Paths are matched literally: no trailing-slash
    /// normalization, no case folding, no wildcards.
    pub fn from_path(path: &str) -> Option<Page> {
        Page::ALL.into_iter().find(|page| page.path() == path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_each_declared_path_resolves_to_its_page() {
        for page in Page::ALL {
            assert_eq!(Page::from_path(page.path()), Some(page));
        }
    }

    #[test]
    fn test_paths_are_unique() {
        for (i, a) in Page::ALL.into_iter().enumerate() {
            for b in Page::ALL.into_iter().skip(i + 1) {
                assert_ne!(a.path(), b.path());
            }
        }
    }

    #[test]
    fn test_unknown_path_resolves_to_nothing() {
        assert_eq!(Page::from_path("/unknown"), None);
        assert_eq!(Page::from_path(""), None);
    }

    #[test]
    fn test_matching_is_exact() {
        // No trailing-slash normalization, no case folding, no prefixes.
        assert_eq!(Page::from_path("/login/"), None);
        assert_eq!(Page::from_path("/LOGIN"), None);
        assert_eq!(Page::from_path("/dashboard/settings"), None);
        assert_eq!(Page::from_path("login"), None);
    }

    #[test]
    fn test_no_prefix_collisions() {
        // Order independence: no non-root path is a prefix of another.
        for a in Page::ALL {
            for b in Page::ALL {
                if a != b && a.path() != "/" {
                    assert!(!b.path().starts_with(a.path()));
                }
            }
        }
    }
}
