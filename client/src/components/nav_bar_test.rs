use super::*;

#[test]
fn nav_hidden_on_login() {
    assert!(!shows_nav("/login"));
}

#[test]
fn nav_shown_on_default_layout_routes() {
    assert!(shows_nav("/"));
    assert!(shows_nav("/users"));
    assert!(shows_nav("/myprofile"));
}

#[test]
fn nav_shown_on_unknown_paths() {
    assert!(shows_nav("/does-not-exist"));
}
