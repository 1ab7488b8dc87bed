//! REST API helpers for communicating with the server.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): stubs returning errors since these endpoints are
//! only meaningful in the browser.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

#[cfg(any(test, feature = "hydrate"))]
fn register_failed_message(status: u16) -> String {
    match status {
        409 => "that email is already registered".to_owned(),
        400 => "check your email and password".to_owned(),
        other => format!("server returned {other}"),
    }
}

/// Register a new account via `POST /api/auth/register`.
/// Returns the server's confirmation message.
///
/// # Errors
///
/// Returns a human-readable error string if the request fails or the
/// server rejects the input.
pub async fn register(email: &str, password: &str) -> Result<String, String> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::post("/api/auth/register")
            .json(&serde_json::json!({ "email": email, "password": password }))
            .map_err(|e| e.to_string())?
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(register_failed_message(resp.status()));
        }

        #[derive(serde::Deserialize)]
        struct RegisterResponse {
            message: String,
        }
        let body: RegisterResponse = resp.json().await.map_err(|e| e.to_string())?;
        Ok(body.message)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (email, password);
        Err("not available on server".to_owned())
    }
}
