//! Username badge and logout button for page headers.

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::state::auth::AuthState;
use crate::util::auth::sign_out_and_leave;

#[component]
pub fn SessionControls() -> impl IntoView {
    let auth = expect_context::<AuthState>();
    let navigate = use_navigate();
    let name_auth = auth.clone();

    view! {
        <div class="session-controls">
            <span class="session-controls__user">{move || name_auth.display_name()}</span>
            <button
                class="btn session-controls__logout"
                on:click=move |_| sign_out_and_leave(&auth, &navigate)
                title="Logout"
            >
                "Logout"
            </button>
        </div>
    }
}
