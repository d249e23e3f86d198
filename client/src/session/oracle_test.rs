use super::*;

use base64::Engine as _;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;

use crate::session::token_store::MemoryStorage;

fn token_with_payload(payload: &str) -> String {
    format!("header.{}.signature", URL_SAFE_NO_PAD.encode(payload))
}

fn oracle_with(access: Option<&str>) -> (SessionOracle, TokenStore) {
    let store = TokenStore::new(MemoryStorage::new());
    if let Some(access) = access {
        store.set(access, Some("refresh"));
    }
    (SessionOracle::new(store.clone()), store)
}

#[test]
fn absent_token_is_unauthenticated_with_no_role() {
    let (oracle, _) = oracle_with(None);
    assert!(!oracle.is_authenticated());
    assert_eq!(oracle.current_role(), Role::None);
    assert_eq!(oracle.claims(), None);
}

#[test]
fn empty_token_is_unauthenticated() {
    let (oracle, _) = oracle_with(Some(""));
    assert!(!oracle.is_authenticated());
    assert_eq!(oracle.current_role(), Role::None);
}

#[test]
fn any_non_empty_token_is_authenticated() {
    let (oracle, _) = oracle_with(Some("garbage"));
    assert!(oracle.is_authenticated());
    assert_eq!(oracle.current_role(), Role::None);
}

#[test]
fn current_role_reads_each_known_role() {
    for (payload, role) in [
        (r#"{"role":"admin"}"#, Role::Admin),
        (r#"{"role":"farmer"}"#, Role::Farmer),
        (r#"{"role":"worker"}"#, Role::Worker),
    ] {
        let (oracle, _) = oracle_with(Some(&token_with_payload(payload)));
        assert_eq!(oracle.current_role(), role, "payload {payload}");
    }
}

#[test]
fn current_role_defaults_to_none() {
    for payload in ["{}", r#"{"role":"superuser"}"#, r#"{"role":null}"#] {
        let (oracle, _) = oracle_with(Some(&token_with_payload(payload)));
        assert!(oracle.is_authenticated());
        assert_eq!(oracle.current_role(), Role::None, "payload {payload}");
    }
}

#[test]
fn answers_follow_token_replacement() {
    let (oracle, store) = oracle_with(Some(&token_with_payload(r#"{"role":"admin"}"#)));
    assert_eq!(oracle.current_role(), Role::Admin);

    store.set(&token_with_payload(r#"{"role":"worker"}"#), None);
    assert_eq!(oracle.current_role(), Role::Worker);

    store.clear();
    assert!(!oracle.is_authenticated());
    assert_eq!(oracle.current_role(), Role::None);
}

#[test]
fn oracle_does_not_mutate_store() {
    let token = token_with_payload(r#"{"role":"farmer"}"#);
    let (oracle, store) = oracle_with(Some(&token));
    let _ = oracle.is_authenticated();
    let _ = oracle.current_role();
    let _ = oracle.claims();
    assert_eq!(store.access().as_deref(), Some(token.as_str()));
    assert_eq!(store.refresh().as_deref(), Some("refresh"));
}
