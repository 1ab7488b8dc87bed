//! Account service — registration, credential checks, password hashing.
//!
//! DESIGN
//! ======
//! Passwords are hashed with Argon2 in PHC string format before storage.
//! Unknown email and wrong password both surface as `InvalidCredentials`
//! so login responses never reveal which part was wrong.

use argon2::Argon2;
use argon2::password_hash::rand_core::OsRng;
use argon2::password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString};
use sqlx::{PgPool, Row};
use uuid::Uuid;

#[derive(Debug, thiserror::Error)]
pub enum AuthError {
    #[error("invalid email")]
    InvalidEmail,
    #[error("invalid password")]
    InvalidPassword,
    #[error("email already registered")]
    EmailTaken,
    #[error("invalid credentials")]
    InvalidCredentials,
    #[error("password hashing failed: {0}")]
    Hash(String),
    #[error("database error: {0}")]
    Db(#[from] sqlx::Error),
}

/// Normalize an email address: trim, lowercase, require exactly one `@`
/// with non-empty local and domain parts. Returns `None` if malformed.
#[must_use]
pub fn normalize_email(email: &str) -> Option<String> {
    let normalized = email.trim().to_ascii_lowercase();
    if normalized.is_empty() || !normalized.contains('@') {
        return None;
    }
    let parts = normalized.split('@').collect::<Vec<_>>();
    if parts.len() != 2 || parts[0].is_empty() || parts[1].is_empty() {
        return None;
    }
    Some(normalized)
}

/// Hash a password into an Argon2 PHC string.
///
/// # Errors
///
/// Returns `AuthError::Hash` if the hasher rejects the input.
pub fn hash_password(password: &str) -> Result<String, AuthError> {
    let salt = SaltString::generate(&mut OsRng);
    Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map(|h| h.to_string())
        .map_err(|e| AuthError::Hash(e.to_string()))
}

/// Verify a password against a stored PHC string.
#[must_use]
pub fn verify_password(password: &str, stored_hash: &str) -> bool {
    let Ok(parsed) = PasswordHash::new(stored_hash) else {
        return false;
    };
    Argon2::default()
        .verify_password(password.as_bytes(), &parsed)
        .is_ok()
}

fn is_unique_violation(err: &sqlx::Error) -> bool {
    matches!(err, sqlx::Error::Database(db) if db.code().as_deref() == Some("23505"))
}

/// Register a new user. Returns the new user's UUID.
///
/// # Errors
///
/// `InvalidEmail` or `InvalidPassword` on malformed input, `EmailTaken`
/// when the email already exists, or a database error.
pub async fn register_user(pool: &PgPool, email: &str, password: &str) -> Result<Uuid, AuthError> {
    let normalized = normalize_email(email).ok_or(AuthError::InvalidEmail)?;
    if password.is_empty() {
        return Err(AuthError::InvalidPassword);
    }

    let password_hash = hash_password(password)?;
    let id = Uuid::new_v4();

    sqlx::query("INSERT INTO users (id, email, password_hash) VALUES ($1, $2, $3)")
        .bind(id)
        .bind(&normalized)
        .bind(&password_hash)
        .execute(pool)
        .await
        .map_err(|e| {
            if is_unique_violation(&e) {
                AuthError::EmailTaken
            } else {
                AuthError::Db(e)
            }
        })?;

    Ok(id)
}

/// Check credentials and create a session, returning the token.
///
/// # Errors
///
/// `InvalidCredentials` for an unknown email or a wrong password, or a
/// database error.
pub async fn login_user(pool: &PgPool, email: &str, password: &str) -> Result<String, AuthError> {
    let normalized = normalize_email(email).ok_or(AuthError::InvalidCredentials)?;

    let row = sqlx::query("SELECT id, password_hash FROM users WHERE email = $1")
        .bind(&normalized)
        .fetch_optional(pool)
        .await?;

    let Some(row) = row else {
        return Err(AuthError::InvalidCredentials);
    };

    let stored_hash: String = row.get("password_hash");
    if !verify_password(password, &stored_hash) {
        return Err(AuthError::InvalidCredentials);
    }

    let user_id: Uuid = row.get("id");
    let token = super::session::create_session(pool, user_id).await?;
    Ok(token)
}

#[cfg(test)]
#[path = "auth_test.rs"]
mod tests;
