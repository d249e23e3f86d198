//! Route guards and shared sign-out behavior.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every protected route wraps its page in `ProtectedRoute`, so all views
//! apply the same render-or-redirect decision from `AuthState`. Tokens live
//! in browser storage, so the decision is only taken after hydration; the
//! server renders a pending placeholder and never redirects. Navigations
//! replace the current history entry.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::app::LOGIN_PATH;
use crate::session::Role;
use crate::state::auth::AuthState;

/// Navigation options used by every guard redirect.
#[must_use]
pub fn replace_navigation() -> NavigateOptions {
    NavigateOptions { replace: true, ..NavigateOptions::default() }
}

/// Redirect target for a view admitting `roles`, or `None` to render it.
#[must_use]
pub fn guard_target(auth: &AuthState, roles: &[Role]) -> Option<&'static str> {
    auth.authorize(roles).redirect_path()
}

/// Redirect target for an unmatched path. Always `Some`.
#[must_use]
pub fn fallback_target(auth: &AuthState) -> Option<&'static str> {
    auth.authorize_fallback().redirect_path()
}

/// What a guard shows for one evaluation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GuardView {
    /// Storage has not been read yet (server render, first client frame).
    Pending,
    Render,
    Redirect(&'static str),
}

/// Combine browser readiness with the authorization target.
#[must_use]
pub fn guard_view(ready: bool, target: Option<&'static str>) -> GuardView {
    match (ready, target) {
        (false, _) => GuardView::Pending,
        (true, None) => GuardView::Render,
        (true, Some(path)) => GuardView::Redirect(path),
    }
}

/// Where the login page sends a user who already holds a session with a
/// role home. Users without a home stay on the form.
#[must_use]
pub fn login_bounce_target(auth: &AuthState) -> Option<&'static str> {
    auth.role().home_path()
}

/// `true` once running in the browser after hydration. Effects never run
/// during server rendering, so the server always sees `false`.
pub fn use_browser_ready() -> RwSignal<bool> {
    let ready = RwSignal::new(false);
    Effect::new(move || ready.set(true));
    ready
}

/// Navigate to `path` with history replacement.
fn navigate_replacing<F>(navigate: &F, path: &str)
where
    F: Fn(&str, NavigateOptions),
{
    navigate(path, replace_navigation());
}

fn pending_view() -> AnyView {
    view! { <p class="route-guard__pending">"Loading..."</p> }.into_any()
}

/// Renders `children` only when the session role is in `roles`.
///
/// The decision is made in the browser: the server render and the first
/// client frame show a pending placeholder, then the guard either renders or
/// navigates away.
#[component]
pub fn ProtectedRoute(roles: &'static [Role], children: ChildrenFn) -> impl IntoView {
    let auth = expect_context::<AuthState>();
    let navigate = use_navigate();
    let ready = use_browser_ready();
    let target = Memo::new(move |_| guard_target(&auth, roles));
    let view_state = Memo::new(move |_| guard_view(ready.get(), target.get()));

    Effect::new(move || {
        if let GuardView::Redirect(path) = view_state.get() {
            navigate_replacing(&navigate, path);
        }
    });

    move || match view_state.get() {
        GuardView::Render => children().into_any(),
        GuardView::Pending | GuardView::Redirect(_) => pending_view(),
    }
}

/// Body of the catch-all route: sends the user to their role home, or to
/// `/unauthorized` when the role has none. Always mounted inside a
/// `ProtectedRoute`, so the session is already known to exist.
#[component]
pub fn RoleHomeRedirect() -> impl IntoView {
    let auth = expect_context::<AuthState>();
    let navigate = use_navigate();
    let ready = use_browser_ready();

    Effect::new(move || {
        if !ready.get() {
            return;
        }
        if let Some(path) = fallback_target(&auth) {
            navigate_replacing(&navigate, path);
        }
    });

    pending_view()
}

/// Clear the session and return to the login page.
pub fn sign_out_and_leave<F>(auth: &AuthState, navigate: F)
where
    F: Fn(&str, NavigateOptions),
{
    auth.sign_out();
    navigate(LOGIN_PATH, replace_navigation());
}
