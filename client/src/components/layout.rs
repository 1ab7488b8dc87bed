//! Layout shell — header, navigation, footer, and the routed-page outlet.

use leptos::prelude::*;
use leptos_router::components::Outlet;

use crate::routes;

/// Persistent chrome around every routed page. The matched child route
/// renders into the outlet; the shell itself has no terminal content.
#[component]
pub fn Layout() -> impl IntoView {
    view! {
        <div class="layout">
            <header class="layout__header">
                <a href=routes::HOME_PATH class="layout__brand">
                    "MyStore"
                </a>
                <nav class="layout__nav">
                    <a href=routes::HOME_PATH>"Home"</a>
                    <a href=routes::REGISTER_PATH>"Register"</a>
                </nav>
            </header>
            <main class="layout__content">
                <Outlet/>
            </main>
            <footer class="layout__footer">
                <p>"© 2026 MyStore"</p>
            </footer>
        </div>
    }
}
