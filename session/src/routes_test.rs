use super::*;

#[test]
fn route_name_lookup_matches_table() {
    for route in ROUTES {
        assert_eq!(route.name.route(), route);
    }
}

#[test]
fn protected_routes_are_profile_and_users() {
    let protected: Vec<RouteName> = ROUTES.iter().filter(|r| r.meta.needs_auth).map(|r| r.name).collect();
    assert_eq!(protected, vec![RouteName::Profile, RouteName::Users]);
}

#[test]
fn login_uses_empty_layout() {
    assert_eq!(RouteName::Login.route().meta.layout, Layout::Empty);
    assert_eq!(RouteName::Dashboard.route().meta.layout, Layout::Default);
}

#[test]
fn segments_are_paths_without_leading_slash() {
    for route in ROUTES {
        assert_eq!(format!("/{}", route.segment), route.path);
    }
}

#[test]
fn resolve_exact_paths() {
    assert_eq!(resolve("/").map(|r| r.name), Some(RouteName::Dashboard));
    assert_eq!(resolve("/users").map(|r| r.name), Some(RouteName::Users));
    assert_eq!(resolve("/login").map(|r| r.name), Some(RouteName::Login));
}

#[test]
fn resolve_ignores_trailing_slash_query_and_fragment() {
    assert_eq!(resolve("/users/").map(|r| r.name), Some(RouteName::Users));
    assert_eq!(resolve("/myprofile?tab=1").map(|r| r.name), Some(RouteName::Profile));
    assert_eq!(resolve("/login#top").map(|r| r.name), Some(RouteName::Login));
    assert_eq!(resolve("").map(|r| r.name), Some(RouteName::Dashboard));
}

#[test]
fn resolve_unknown_path_is_none() {
    assert_eq!(resolve("/nope"), None);
    assert_eq!(resolve("/users/42"), None);
}
