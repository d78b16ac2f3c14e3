//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! The session is the only cross-page state; page-local form state lives in
//! the pages themselves.

pub mod auth;
