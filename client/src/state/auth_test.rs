use super::*;

use base64::Engine as _;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;

use crate::session::MemoryStorage;

fn pair_for(payload: &serde_json::Value) -> TokenPair {
    TokenPair {
        access: format!("h.{}.s", URL_SAFE_NO_PAD.encode(payload.to_string())),
        refresh: Some("refresh-token".to_owned()),
    }
}

fn auth() -> AuthState {
    AuthState::new(TokenStore::new(MemoryStorage::new()))
}

#[test]
fn new_state_is_signed_out() {
    let auth = auth();
    assert_eq!(auth.role(), Role::None);
    assert_eq!(auth.authorize(&[Role::Farmer]), Outcome::RedirectLogin);
}

#[test]
fn sign_in_stores_pair_and_returns_role() {
    let auth = auth();
    let role = auth.sign_in(&pair_for(&serde_json::json!({ "role": "farmer" })));
    assert_eq!(role, Role::Farmer);
    assert_eq!(auth.store().refresh().as_deref(), Some("refresh-token"));
    assert_eq!(auth.authorize(&[Role::Farmer, Role::Worker]), Outcome::Render);
}

#[test]
fn sign_out_clears_tokens() {
    let auth = auth();
    auth.sign_in(&pair_for(&serde_json::json!({ "role": "admin" })));
    auth.sign_out();
    assert_eq!(auth.store().access(), None);
    assert_eq!(auth.store().refresh(), None);
    assert_eq!(auth.authorize(&[Role::Admin]), Outcome::RedirectLogin);
}

#[test]
fn replacing_token_changes_role() {
    let auth = auth();
    auth.sign_in(&pair_for(&serde_json::json!({ "role": "admin" })));
    assert_eq!(auth.authorize_fallback(), Outcome::RedirectRoleHome(Role::Admin));
    auth.sign_in(&pair_for(&serde_json::json!({ "role": "worker" })));
    assert_eq!(auth.authorize_fallback(), Outcome::RedirectRoleHome(Role::Worker));
}

#[test]
fn display_name_prefers_username_claim() {
    let auth = auth();
    auth.sign_in(&pair_for(&serde_json::json!({ "role": "farmer", "username": "menyar" })));
    assert_eq!(auth.display_name(), "menyar");
}

#[test]
fn display_name_falls_back_to_role() {
    let auth = auth();
    auth.sign_in(&pair_for(&serde_json::json!({ "role": "admin" })));
    assert_eq!(auth.display_name(), "admin");
}

#[test]
fn post_login_path_by_role() {
    assert_eq!(post_login_path(Role::Admin), "/admin");
    assert_eq!(post_login_path(Role::Farmer), "/dashboard");
    assert_eq!(post_login_path(Role::Worker), "/dashboard");
    assert_eq!(post_login_path(Role::None), "/unauthorized");
}
