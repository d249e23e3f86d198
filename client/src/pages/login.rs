//! Login page: exchanges username and password for a token pair.
//!
//! SYSTEM CONTEXT
//! ==============
//! On success the pair is persisted through `AuthState` and the user lands on
//! their role home. Every failure shows one inline message; nothing retries.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use leptos::prelude::*;

use leptos_router::hooks::use_navigate;

use crate::net::types::Credentials;
use crate::state::auth::AuthState;
use crate::util::auth::{login_bounce_target, replace_navigation, use_browser_ready};

pub const LOGIN_FAILED_MESSAGE: &str = "Invalid username or password";

/// Trim the username and require both fields.
///
/// # Errors
///
/// Returns the message to show when either field is empty.
pub fn validate_login_input(username: &str, password: &str) -> Result<Credentials, &'static str> {
    let username = username.trim();
    if username.is_empty() || password.is_empty() {
        return Err("Enter both username and password.");
    }
    Ok(Credentials { username: username.to_owned(), password: password.to_owned() })
}

#[component]
pub fn LoginPage() -> impl IntoView {
    let username = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let info = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    let auth = expect_context::<AuthState>();
    let navigate = use_navigate();
    #[cfg(feature = "hydrate")]
    let api = expect_context::<crate::net::api::ApiClient>();

    // A stored session with a role home skips the form.
    let ready = use_browser_ready();
    let bounce_auth = auth.clone();
    let bounce_navigate = navigate.clone();
    Effect::new(move || {
        if !ready.get() {
            return;
        }
        if let Some(path) = login_bounce_target(&bounce_auth) {
            bounce_navigate(path, replace_navigation());
        }
    });

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let credentials = match validate_login_input(&username.get(), &password.get()) {
            Ok(c) => c,
            Err(message) => {
                info.set(message.to_owned());
                return;
            }
        };
        busy.set(true);
        info.set(String::new());

        #[cfg(feature = "hydrate")]
        {
            let (auth, api, navigate) = (auth.clone(), api.clone(), navigate.clone());
            leptos::task::spawn_local(async move {
                match api.obtain_token(&credentials).await {
                    Ok(pair) => {
                        let role = auth.sign_in(&pair);
                        password.set(String::new());
                        navigate(crate::state::auth::post_login_path(role), replace_navigation());
                    }
                    Err(e) => {
                        log::warn!("login failed: {e}");
                        info.set(LOGIN_FAILED_MESSAGE.to_owned());
                    }
                }
                busy.set(false);
            });
        }
        #[cfg(not(feature = "hydrate"))]
        let _ = (credentials, &auth, &navigate);
    };

    view! {
        <div class="login-page">
            <div class="login-card">
                <h1>"AgriMon"</h1>
                <p class="login-card__subtitle">"Sign in to monitor your plots"</p>
                <form class="login-form" on:submit=on_submit>
                    <input
                        class="login-input"
                        type="text"
                        placeholder="Username"
                        autocomplete="username"
                        prop:value=move || username.get()
                        on:input=move |ev| username.set(event_target_value(&ev))
                    />
                    <input
                        class="login-input"
                        type="password"
                        placeholder="Password"
                        autocomplete="current-password"
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                    />
                    <button class="login-button" type="submit" disabled=move || busy.get()>
                        {move || if busy.get() { "Signing in..." } else { "Sign In" }}
                    </button>
                </form>
                <Show when=move || !info.get().is_empty()>
                    <p class="login-message">{move || info.get()}</p>
                </Show>
            </div>
        </div>
    }
}
