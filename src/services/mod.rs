//! Domain services used by the HTTP routes.
//!
//! ARCHITECTURE
//! ============
//! Service modules own business logic and persistence concerns so route
//! handlers can stay focused on request decoding and auth plumbing.

pub mod auth;
pub mod order;
pub mod session;
