//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components read the shared session from Leptos context; pages compose
//! them inside the guarded router.

pub mod nav_bar;
pub mod route_guard;
pub mod user_table;
