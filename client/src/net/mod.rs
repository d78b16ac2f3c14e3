//! Networking for the browser build.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` implements the shared `session::Transport` over the Fetch API so the
//! session core, guard and users client run unchanged in the browser.

pub mod api;
