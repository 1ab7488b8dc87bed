//! Auth routes — registration, login, session introspection, logout.

use axum::extract::{FromRef, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Json};
use axum_extra::extract::cookie::{Cookie, CookieJar};
use serde::Deserialize;
use time::Duration;

use crate::services::{auth as auth_svc, session};
use crate::state::AppState;

const COOKIE_NAME: &str = "session_token";

pub(crate) fn env_bool(key: &str) -> Option<bool> {
    std::env::var(key)
        .ok()
        .and_then(|raw| match raw.trim().to_ascii_lowercase().as_str() {
            "1" | "true" | "yes" | "on" => Some(true),
            "0" | "false" | "no" | "off" => Some(false),
            _ => None,
        })
}

pub(crate) fn cookie_secure() -> bool {
    if let Some(value) = env_bool("COOKIE_SECURE") {
        return value;
    }

    std::env::var("PUBLIC_URL")
        .map(|url| url.starts_with("https://"))
        .unwrap_or(false)
}

/// Extract a session token from an `Authorization` header value.
/// The `Bearer ` prefix is optional; a bare token is accepted as-is.
pub(crate) fn bearer_token(header: &str) -> Option<&str> {
    let token = header.strip_prefix("Bearer ").unwrap_or(header).trim();
    if token.is_empty() { None } else { Some(token) }
}

fn session_cookie(token: String, secure: bool) -> Cookie<'static> {
    Cookie::build((COOKIE_NAME, token))
        .path("/")
        .http_only(true)
        .same_site(axum_extra::extract::cookie::SameSite::Lax)
        .secure(secure)
        .max_age(Duration::hours(24))
        .build()
}

fn clear_session_cookie(secure: bool) -> Cookie<'static> {
    Cookie::build((COOKIE_NAME, ""))
        .path("/")
        .http_only(true)
        .same_site(axum_extra::extract::cookie::SameSite::Lax)
        .secure(secure)
        .max_age(Duration::ZERO)
        .build()
}

// =============================================================================
// AUTH EXTRACTOR
// =============================================================================

/// Authenticated user extracted from the `Authorization` header or the
/// session cookie. Use as a handler parameter to require authentication.
pub struct AuthUser {
    pub user: session::SessionUser,
    pub token: String,
}

impl<S> axum::extract::FromRequestParts<S> for AuthUser
where
    AppState: FromRef<S>,
    S: Send + Sync,
{
    type Rejection = StatusCode;

    async fn from_request_parts(parts: &mut axum::http::request::Parts, state: &S) -> Result<Self, Self::Rejection> {
        let header_token = parts
            .headers
            .get(axum::http::header::AUTHORIZATION)
            .and_then(|v| v.to_str().ok())
            .and_then(bearer_token)
            .map(str::to_owned);

        let token = match header_token {
            Some(t) => t,
            None => {
                let jar = CookieJar::from_headers(&parts.headers);
                let cookie_token = jar.get(COOKIE_NAME).map(Cookie::value).unwrap_or_default();
                if cookie_token.is_empty() {
                    return Err(StatusCode::UNAUTHORIZED);
                }
                cookie_token.to_owned()
            }
        };

        let app_state = AppState::from_ref(state);
        let user = session::validate_session(&app_state.pool, &token)
            .await
            .map_err(|_| StatusCode::INTERNAL_SERVER_ERROR)?
            .ok_or(StatusCode::UNAUTHORIZED)?;

        Ok(Self { user, token })
    }
}

// =============================================================================
// ERROR MAPPING
// =============================================================================

pub(crate) fn auth_error_to_status(err: auth_svc::AuthError) -> StatusCode {
    match err {
        auth_svc::AuthError::InvalidEmail | auth_svc::AuthError::InvalidPassword => StatusCode::BAD_REQUEST,
        auth_svc::AuthError::EmailTaken => StatusCode::CONFLICT,
        auth_svc::AuthError::InvalidCredentials => StatusCode::UNAUTHORIZED,
        auth_svc::AuthError::Hash(_) | auth_svc::AuthError::Db(_) => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

// =============================================================================
// HANDLERS
// =============================================================================

#[derive(Deserialize)]
pub struct CredentialsBody {
    pub email: String,
    pub password: String,
}

/// `POST /api/auth/register` — create an account.
pub async fn register(
    State(state): State<AppState>,
    Json(body): Json<CredentialsBody>,
) -> Result<Json<serde_json::Value>, StatusCode> {
    let user_id = auth_svc::register_user(&state.pool, &body.email, &body.password)
        .await
        .map_err(|e| {
            tracing::info!(error = %e, "registration rejected");
            auth_error_to_status(e)
        })?;

    tracing::info!(%user_id, "user registered");
    Ok(Json(serde_json::json!({ "message": "Registration successful" })))
}

/// `POST /api/auth/login` — check credentials, create a session.
/// Returns the token in the body and as an HttpOnly cookie.
pub async fn login(
    State(state): State<AppState>,
    Json(body): Json<CredentialsBody>,
) -> Result<impl IntoResponse, StatusCode> {
    let token = auth_svc::login_user(&state.pool, &body.email, &body.password)
        .await
        .map_err(|e| {
            tracing::info!(error = %e, "login rejected");
            auth_error_to_status(e)
        })?;

    let jar = CookieJar::new().add(session_cookie(token.clone(), cookie_secure()));
    Ok((jar, Json(serde_json::json!({ "token": token }))))
}

/// `GET /api/auth/me` — return current user.
pub async fn me(auth: AuthUser) -> Json<session::SessionUser> {
    Json(auth.user)
}

/// `POST /api/auth/logout` — delete session, clear cookie.
pub async fn logout(State(state): State<AppState>, auth: AuthUser) -> impl IntoResponse {
    if let Err(e) = session::delete_session(&state.pool, &auth.token).await {
        tracing::error!(error = %e, "session delete failed");
    }

    let jar = CookieJar::new().add(clear_session_cookie(cookie_secure()));
    (jar, StatusCode::NO_CONTENT)
}

#[cfg(test)]
#[path = "auth_test.rs"]
mod tests;
