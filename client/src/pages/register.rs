//! Registration page — email + password signup form.

use leptos::prelude::*;

/// Validate the signup form. Returns trimmed-email + password on success.
fn validate_register_input(email: &str, password: &str) -> Result<(String, String), &'static str> {
    let email = email.trim();
    if email.is_empty() || password.is_empty() {
        return Err("Enter both email and password.");
    }
    Ok((email.to_owned(), password.to_owned()))
}

/// Registration form. Posts to `/api/auth/register` and surfaces the
/// outcome inline; a new account still signs in through the login flow.
#[component]
pub fn RegisterPage() -> impl IntoView {
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let info = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let (email_value, password_value) = match validate_register_input(&email.get(), &password.get()) {
            Ok(values) => values,
            Err(message) => {
                info.set(message.to_owned());
                return;
            }
        };
        busy.set(true);
        info.set("Creating account...".to_owned());

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::api::register(&email_value, &password_value).await {
                Ok(message) => info.set(message),
                Err(e) => info.set(format!("Registration failed: {e}")),
            }
            busy.set(false);
        });
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (email_value, password_value);
        }
    };

    view! {
        <div class="register">
            <h1>"Create your account"</h1>
            <form class="register__form" on:submit=on_submit>
                <input
                    class="register__input"
                    type="email"
                    placeholder="you@example.com"
                    prop:value=move || email.get()
                    on:input=move |ev| email.set(event_target_value(&ev))
                />
                <input
                    class="register__input"
                    type="password"
                    placeholder="Password"
                    prop:value=move || password.get()
                    on:input=move |ev| password.set(event_target_value(&ev))
                />
                <button class="button button--primary" type="submit" disabled=move || busy.get()>
                    "Sign up"
                </button>
            </form>
            <Show when=move || !info.get().is_empty()>
                <p class="register__message">{move || info.get()}</p>
            </Show>
        </div>
    }
}

#[cfg(test)]
#[path = "register_test.rs"]
mod tests;
