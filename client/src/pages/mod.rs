//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns route-scoped orchestration and delegates rendering details
//! to `components`. Access control is not a page concern; `RouteGuard`
//! decides whether a page renders at all.

pub mod dashboard;
pub mod login;
pub mod not_found;
pub mod profile;
pub mod users;
