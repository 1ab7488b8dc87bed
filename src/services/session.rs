//! Session token management.
//!
//! ARCHITECTURE
//! ============
//! HTTP auth uses opaque session tokens stored in Postgres with a 24-hour
//! expiry (enforced by the `sessions` table default). Validation joins the
//! `users` table so handlers get the authenticated identity in one query.

use std::fmt::Write;

use rand::Rng;
use sqlx::{PgPool, Row};
use uuid::Uuid;

pub(crate) fn bytes_to_hex(bytes: &[u8]) -> String {
    let mut s = String::with_capacity(bytes.len() * 2);
    for b in bytes {
        let _ = write!(s, "{b:02x}");
    }
    s
}

/// Generate a cryptographically random 32-byte hex token.
#[must_use]
pub fn generate_token() -> String {
    let bytes: [u8; 32] = rand::rng().random();
    bytes_to_hex(&bytes)
}

/// User row returned from session validation.
#[derive(Debug, Clone, serde::Serialize)]
pub struct SessionUser {
    /// Unique user identifier.
    pub id: Uuid,
    /// Normalized account email.
    pub email: String,
}

/// Create a session for the given user, returning the token.
pub async fn create_session(pool: &PgPool, user_id: Uuid) -> Result<String, sqlx::Error> {
    let token = generate_token();
    sqlx::query("INSERT INTO sessions (token, user_id) VALUES ($1, $2)")
        .bind(&token)
        .bind(user_id)
        .execute(pool)
        .await?;
    Ok(token)
}

/// Validate a session token and return the associated user.
pub async fn validate_session(pool: &PgPool, token: &str) -> Result<Option<SessionUser>, sqlx::Error> {
    let row = sqlx::query(
        r"SELECT u.id, u.email
          FROM sessions s
          JOIN users u ON u.id = s.user_id
          WHERE s.token = $1 AND s.expires_at > now()",
    )
    .bind(token)
    .fetch_optional(pool)
    .await?;

    Ok(row.map(|r| SessionUser { id: r.get("id"), email: r.get("email") }))
}

/// Delete a session by token.
pub async fn delete_session(pool: &PgPool, token: &str) -> Result<(), sqlx::Error> {
    sqlx::query("DELETE FROM sessions WHERE token = $1")
        .bind(token)
        .execute(pool)
        .await?;
    Ok(())
}

#[cfg(test)]
#[path = "session_test.rs"]
mod tests;
