//! Networking modules for server REST calls.

pub mod api;
