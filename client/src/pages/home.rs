//! Homepage — static hero with the registration call to action.

use leptos::prelude::*;

use crate::routes;

/// Anchor target of the secondary "Learn more" link. Same-page jump to the
/// about section below the hero.
pub const LEARN_MORE_HREF: &str = "#about";

/// Homepage hero. Pure static render; the primary call to action links to
/// the registration route via the shared route constants.
#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <div class="home">
            <section class="home__hero">
                <h1>"Welcome to MyStore"</h1>
                <p class="home__tagline">"The best place to buy things online."</p>
                <div class="home__actions">
                    <a href=routes::REGISTER_PATH class="button button--primary">
                        "Get started"
                    </a>
                    <a href=LEARN_MORE_HREF class="button button--secondary">
                        "Learn more " <span aria-hidden="true">"→"</span>
                    </a>
                </div>
            </section>
            <section id="about" class="home__about">
                <h2>"About MyStore"</h2>
                <p>
                    "MyStore is a small storefront. Create an account, place an "
                    "order, and track it from one place."
                </p>
            </section>
        </div>
    }
}

#[cfg(test)]
#[path = "home_test.rs"]
mod tests;
