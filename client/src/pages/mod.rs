//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns route-scoped orchestration and renders inside the layout
//! shell's outlet.

pub mod home;
pub mod not_found;
pub mod register;
