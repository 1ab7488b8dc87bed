//! Router assembly.
//!
//! SYSTEM CONTEXT
//! ==============
//! This module binds the JSON API and the Leptos SSR storefront under a
//! single Axum router. API routes live under `/api`, Leptos renders the
//! pages (including the not-found fallback), and static assets are served
//! from the site root at `/pkg`.

pub mod auth;
pub mod orders;

use std::path::PathBuf;

use axum::Router;
use axum::http::{HeaderValue, Method, StatusCode, header};
use axum::routing::{get, post};
use leptos::prelude::*;
use leptos_axum::{LeptosRoutes, generate_route_list};
use tower_http::cors::CorsLayer;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::state::AppState;

const DEFAULT_CORS_ORIGINS: &[&str] = &["http://localhost:3000", "http://localhost:5173"];

/// Parse a comma-separated origin list, falling back to the dev defaults
/// when the variable is unset or contains nothing usable.
fn parse_cors_origins(raw: Option<String>) -> Vec<String> {
    raw.map(|value| {
        value
            .split(',')
            .map(|origin| origin.trim().to_owned())
            .filter(|origin| !origin.is_empty())
            .collect::<Vec<_>>()
    })
    .filter(|origins| !origins.is_empty())
    .unwrap_or_else(|| DEFAULT_CORS_ORIGINS.iter().map(|s| (*s).to_owned()).collect())
}

fn cors_layer() -> CorsLayer {
    let origins: Vec<HeaderValue> = parse_cors_origins(std::env::var("CORS_ALLOWED_ORIGINS").ok())
        .iter()
        .filter_map(|origin| origin.parse().ok())
        .collect();

    CorsLayer::new()
        .allow_origin(origins)
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE, Method::OPTIONS])
        .allow_headers([header::AUTHORIZATION, header::CONTENT_TYPE])
        .allow_credentials(true)
}

/// JSON API routes shared by the SSR app and external frontends.
fn api_routes(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/api/auth/register", post(auth::register))
        .route("/api/auth/login", post(auth::login))
        .route("/api/auth/me", get(auth::me))
        .route("/api/auth/logout", post(auth::logout))
        .route("/api/orders", post(orders::create_order))
        .route("/api/orders/{id}", get(orders::get_order))
        .layer(cors_layer())
        .with_state(state)
}

/// Full application router: JSON API + Leptos SSR storefront.
///
/// # Errors
///
/// Returns an error if the Leptos configuration cannot be loaded (missing or
/// malformed `Cargo.toml` `[workspace.metadata.leptos]` section).
pub fn app(state: AppState) -> Result<Router, String> {
    let conf = get_configuration(None).map_err(|e| format!("leptos configuration: {e}"))?;
    let leptos_options = conf.leptos_options;
    let routes = generate_route_list(client::app::App);

    let site_root_path = PathBuf::from(leptos_options.site_root.as_ref());

    // Unmatched paths fall through to the shell so the client router's
    // not-found view renders with an HTTP 404 status.
    let leptos_router = Router::new()
        .leptos_routes(&leptos_options, routes, {
            let opts = leptos_options.clone();
            move || client::app::shell(opts.clone())
        })
        .fallback(leptos_axum::file_and_error_handler(client::app::shell))
        .with_state(leptos_options);

    Ok(api_routes(state)
        .merge(leptos_router)
        .nest_service("/pkg", ServeDir::new(site_root_path.join("pkg")))
        .layer(TraceLayer::new_for_http()))
}

async fn health() -> StatusCode {
    StatusCode::OK
}

#[cfg(test)]
#[path = "mod_test.rs"]
mod tests;
