use super::*;

use base64::Engine as _;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use std::cell::RefCell;

use crate::app::{ADMIN_HOME_PATH, ADMIN_ONLY, FARMER_HOME_PATH, FARMER_OR_WORKER, UNAUTHORIZED_PATH};
use crate::net::types::TokenPair;
use crate::session::{MemoryStorage, TokenStore};

fn signed_in(role: &str) -> AuthState {
    let auth = AuthState::new(TokenStore::new(MemoryStorage::new()));
    let payload = serde_json::json!({ "role": role, "username": "sam" }).to_string();
    auth.sign_in(&TokenPair { access: format!("h.{}.s", URL_SAFE_NO_PAD.encode(payload)), refresh: None });
    auth
}

// =============================================================
// Guards
// =============================================================

#[test]
fn guard_sends_anonymous_users_to_login() {
    let auth = AuthState::new(TokenStore::new(MemoryStorage::new()));
    assert_eq!(guard_target(&auth, ADMIN_ONLY), Some(LOGIN_PATH));
    assert_eq!(fallback_target(&auth), Some(LOGIN_PATH));
}

#[test]
fn guard_renders_for_allowed_role() {
    assert_eq!(guard_target(&signed_in("admin"), ADMIN_ONLY), None);
    assert_eq!(guard_target(&signed_in("worker"), FARMER_OR_WORKER), None);
}

#[test]
fn guard_redirects_disallowed_roles() {
    assert_eq!(guard_target(&signed_in("admin"), FARMER_OR_WORKER), Some(ADMIN_HOME_PATH));
    assert_eq!(guard_target(&signed_in("farmer"), ADMIN_ONLY), Some(UNAUTHORIZED_PATH));
    assert_eq!(guard_target(&signed_in("guest"), ADMIN_ONLY), Some(UNAUTHORIZED_PATH));
}

#[test]
fn fallback_goes_to_role_home() {
    assert_eq!(fallback_target(&signed_in("admin")), Some(ADMIN_HOME_PATH));
    assert_eq!(fallback_target(&signed_in("farmer")), Some(FARMER_HOME_PATH));
    assert_eq!(fallback_target(&signed_in("guest")), Some(UNAUTHORIZED_PATH));
}

#[test]
fn guard_is_pending_until_browser_ready() {
    assert_eq!(guard_view(false, None), GuardView::Pending);
    assert_eq!(guard_view(false, Some(LOGIN_PATH)), GuardView::Pending);
}

#[test]
fn guard_renders_or_redirects_once_ready() {
    assert_eq!(guard_view(true, None), GuardView::Render);
    assert_eq!(guard_view(true, Some(UNAUTHORIZED_PATH)), GuardView::Redirect(UNAUTHORIZED_PATH));
}

#[test]
fn stored_session_survives_reload_into_guard() {
    // A second AuthState over the same storage stands in for a page reload.
    let storage = MemoryStorage::new();
    let first = AuthState::new(TokenStore::new(storage.clone()));
    let payload = serde_json::json!({ "role": "admin" }).to_string();
    first.sign_in(&TokenPair { access: format!("h.{}.s", URL_SAFE_NO_PAD.encode(payload)), refresh: None });

    let reloaded = AuthState::new(TokenStore::new(storage));
    assert_eq!(guard_view(true, guard_target(&reloaded, ADMIN_ONLY)), GuardView::Render);
}

// =============================================================
// Login bounce
// =============================================================

#[test]
fn login_bounces_signed_in_users_home() {
    assert_eq!(login_bounce_target(&signed_in("admin")), Some(ADMIN_HOME_PATH));
    assert_eq!(login_bounce_target(&signed_in("worker")), Some(FARMER_HOME_PATH));
}

#[test]
fn login_keeps_anonymous_and_homeless_users_on_form() {
    let anonymous = AuthState::new(TokenStore::new(MemoryStorage::new()));
    assert_eq!(login_bounce_target(&anonymous), None);
    assert_eq!(login_bounce_target(&signed_in("guest")), None);
}

// =============================================================
// Sign-out
// =============================================================

#[test]
fn redirects_replace_history() {
    assert!(replace_navigation().replace);
}

#[test]
fn sign_out_clears_session_and_navigates_to_login() {
    let auth = signed_in("admin");
    let visited = RefCell::new(Vec::new());
    sign_out_and_leave(&auth, |path, options| visited.borrow_mut().push((path.to_owned(), options.replace)));
    assert_eq!(auth.store().access(), None);
    assert_eq!(visited.into_inner(), vec![(LOGIN_PATH.to_owned(), true)]);
}
