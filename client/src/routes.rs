//! Route table constants.
//!
//! DESIGN
//! ======
//! Path strings live here and nowhere else: the router builds its segments
//! from these constants and views link with them, so a route move cannot
//! leave a stale `href` behind. Sibling uniqueness is enforced by test.

/// Index route under the layout root.
pub const HOME_PATH: &str = "/";

/// Path segment of the registration route, relative to the layout root.
pub const REGISTER_SEGMENT: &str = "register";

/// Absolute path of the registration route. Must stay `"/" + REGISTER_SEGMENT`
/// (checked by test).
pub const REGISTER_PATH: &str = "/register";

/// Child segments declared under the layout root, index route first.
/// The empty segment is the index route matching the parent path exactly.
pub const CHILD_SEGMENTS: &[&str] = &["", REGISTER_SEGMENT];

#[cfg(test)]
#[path = "routes_test.rs"]
mod tests;
