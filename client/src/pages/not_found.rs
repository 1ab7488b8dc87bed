//! Not-found page for unmatched navigation paths.

use leptos::prelude::*;

use crate::routes;

/// Rendered for any path with no declared route. During SSR the response
/// status is set to 404 so crawlers and probes see the miss.
#[component]
pub fn NotFoundPage() -> impl IntoView {
    #[cfg(feature = "ssr")]
    {
        if let Some(resp) = use_context::<leptos_axum::ResponseOptions>() {
            resp.set_status(http::StatusCode::NOT_FOUND);
        }
    }

    view! {
        <div class="not-found">
            <h1>"Page not found"</h1>
            <p>"The page you are looking for does not exist."</p>
            <a href=routes::HOME_PATH>"Back to the homepage"</a>
        </div>
    }
}

#[cfg(test)]
#[path = "not_found_test.rs"]
mod tests;
