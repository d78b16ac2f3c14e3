//! Route table for the admin console.
//!
//! Each route carries metadata the navigation guard reads: whether it needs
//! an authenticated session and which page layout wraps it.

#[cfg(test)]
#[path = "routes_test.rs"]
mod routes_test;

/// Page chrome a route is rendered in.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Layout {
    /// Navigation bar and content area.
    #[default]
    Default,
    /// Bare page without navigation chrome (login).
    Empty,
}

/// Per-route flags consulted by the guard.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RouteMeta {
    pub needs_auth: bool,
    pub layout: Layout,
}

/// Named destinations of the console.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum RouteName {
    Dashboard,
    Profile,
    Users,
    Login,
}

/// A routable page.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Route {
    pub name: RouteName,
    /// Absolute location path, e.g. `/users`.
    pub path: &'static str,
    /// Path segment as registered with the router (`""` for the root).
    pub segment: &'static str,
    pub meta: RouteMeta,
}

pub const ROUTES: &[Route] = &[
    Route {
        name: RouteName::Dashboard,
        path: "/",
        segment: "",
        meta: RouteMeta { needs_auth: false, layout: Layout::Default },
    },
    Route {
        name: RouteName::Profile,
        path: "/myprofile",
        segment: "myprofile",
        meta: RouteMeta { needs_auth: true, layout: Layout::Default },
    },
    Route {
        name: RouteName::Users,
        path: "/users",
        segment: "users",
        meta: RouteMeta { needs_auth: true, layout: Layout::Default },
    },
    Route {
        name: RouteName::Login,
        path: "/login",
        segment: "login",
        meta: RouteMeta { needs_auth: false, layout: Layout::Empty },
    },
];

impl RouteName {
    #[must_use]
    pub fn route(self) -> &'static Route {
        // Every variant has exactly one entry in ROUTES.
        match self {
            Self::Dashboard => &ROUTES[0],
            Self::Profile => &ROUTES[1],
            Self::Users => &ROUTES[2],
            Self::Login => &ROUTES[3],
        }
    }

    #[must_use]
    pub fn path(self) -> &'static str {
        self.route().path
    }

    #[must_use]
    pub fn segment(self) -> &'static str {
        self.route().segment
    }
}

/// Find the route serving a location path. Query strings, fragments and a
/// trailing slash are ignored. Returns `None` for unknown paths.
#[must_use]
pub fn resolve(location: &str) -> Option<&'static Route> {
    let path = location.split(['?', '#']).next().unwrap_or_default();
    let trimmed = path.trim_end_matches('/');
    let normalized = if trimmed.is_empty() { "/" } else { trimmed };
    ROUTES.iter().find(|route| route.path == normalized)
}
