//! Access-denied page for signed-in users without a permitted role.

use leptos::prelude::*;

use crate::app::LOGIN_PATH;

#[component]
pub fn UnauthorizedPage() -> impl IntoView {
    view! {
        <div class="unauthorized-page">
            <div class="unauthorized-card">
                <h1>"Access Denied"</h1>
                <p>"Your account does not have permission to view this page."</p>
                <a class="btn" href=LOGIN_PATH>"Back to login"</a>
            </div>
        </div>
    }
}
