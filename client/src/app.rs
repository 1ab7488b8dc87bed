//! Root application component with routing.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment, WildcardSegment,
    components::{ParentRoute, Route, Router, Routes},
};

use crate::components::layout::Layout;
use crate::pages::{home::HomePage, not_found::NotFoundPage, register::RegisterPage};
use crate::routes;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Declares the route tree: a layout root whose outlet hosts the homepage
/// (index), the registration page, and a wildcard not-found view so every
/// navigation input resolves to a defined page.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    view! {
        <Stylesheet id="leptos" href="/pkg/mystore.css"/>
        <Title text="MyStore"/>

        <Router>
            <Routes fallback=NotFoundPage>
                <ParentRoute path=StaticSegment("") view=Layout>
                    <Route path=StaticSegment("") view=HomePage/>
                    <Route path=StaticSegment(routes::REGISTER_SEGMENT) view=RegisterPage/>
                    <Route path=WildcardSegment("any") view=NotFoundPage/>
                </ParentRoute>
            </Routes>
        </Router>
    }
}
