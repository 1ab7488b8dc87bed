//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! The layout shell wraps every routed page; pages render into its outlet.

pub mod layout;
