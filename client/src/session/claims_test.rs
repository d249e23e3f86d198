use super::*;

use base64::Engine as _;
use base64::engine::general_purpose::{URL_SAFE, URL_SAFE_NO_PAD};

fn token_with_payload(payload: &str) -> String {
    format!("eyJhbGciOiJIUzI1NiJ9.{}.sig", URL_SAFE_NO_PAD.encode(payload))
}

// =============================================================
// Role mapping
// =============================================================

#[test]
fn role_from_known_claims() {
    assert_eq!(Role::from_claim(Some("admin")), Role::Admin);
    assert_eq!(Role::from_claim(Some("farmer")), Role::Farmer);
    assert_eq!(Role::from_claim(Some("worker")), Role::Worker);
}

#[test]
fn role_from_unknown_or_missing_claim_is_none() {
    assert_eq!(Role::from_claim(Some("superuser")), Role::None);
    assert_eq!(Role::from_claim(Some("Admin")), Role::None);
    assert_eq!(Role::from_claim(Some("")), Role::None);
    assert_eq!(Role::from_claim(None), Role::None);
}

#[test]
fn role_home_paths() {
    assert_eq!(Role::Admin.home_path(), Some("/admin"));
    assert_eq!(Role::Farmer.home_path(), Some("/dashboard"));
    assert_eq!(Role::Worker.home_path(), Some("/dashboard"));
    assert_eq!(Role::None.home_path(), None);
}

#[test]
fn role_display_matches_wire_value() {
    assert_eq!(Role::Farmer.to_string(), "farmer");
    assert_eq!(Role::None.to_string(), "none");
}

// =============================================================
// decode: success
// =============================================================

#[test]
fn decode_reads_role_claim() {
    let token = token_with_payload(r#"{"user_id":7,"role":"admin"}"#);
    let claims = decode(Some(&token)).unwrap();
    assert_eq!(claims.role.as_deref(), Some("admin"));
    assert_eq!(claims.role(), Role::Admin);
}

#[test]
fn decode_reads_username_claim() {
    let token = token_with_payload(r#"{"role":"farmer","username":"menyar"}"#);
    let claims = decode(Some(&token)).unwrap();
    assert_eq!(claims.username.as_deref(), Some("menyar"));
}

#[test]
fn decode_empty_object_has_no_role() {
    let token = token_with_payload("{}");
    let claims = decode(Some(&token)).unwrap();
    assert_eq!(claims.role, None);
    assert_eq!(claims.role(), Role::None);
}

#[test]
fn decode_non_string_role_is_absent() {
    let token = token_with_payload(r#"{"role":3}"#);
    assert_eq!(decode(Some(&token)).unwrap().role, None);
}

#[test]
fn decode_accepts_padded_payload() {
    let token = format!("h.{}.s", URL_SAFE.encode(r#"{"role":"worker"}"#));
    assert!(token.contains('='));
    assert_eq!(decode(Some(&token)).unwrap().role(), Role::Worker);
}

#[test]
fn decode_ignores_signature_contents() {
    let token = format!("x.{}.", URL_SAFE_NO_PAD.encode(r#"{"role":"farmer"}"#));
    assert_eq!(decode(Some(&token)).unwrap().role(), Role::Farmer);
}

// =============================================================
// decode: failures are "no claims"
// =============================================================

#[test]
fn decode_absent_token_is_none() {
    assert_eq!(decode(None), None);
}

#[test]
fn decode_malformed_tokens_are_none() {
    let bad_json = format!("h.{}.s", URL_SAFE_NO_PAD.encode("{not json"));
    let array = format!("h.{}.s", URL_SAFE_NO_PAD.encode("[1,2]"));
    for token in ["", "no-dots", "only.two", "a.b.c.d", "h.!!!.s", "h..s", bad_json.as_str(), array.as_str()] {
        assert_eq!(decode(Some(token)), None, "expected no claims for {token:?}");
    }
}

#[test]
fn try_decode_reports_structure_error() {
    assert_eq!(try_decode("abc"), Err(ClaimsError::Structure { parts: 1 }));
    assert_eq!(try_decode("a.b.c.d"), Err(ClaimsError::Structure { parts: 4 }));
}

#[test]
fn try_decode_reports_encoding_error() {
    assert!(matches!(try_decode("h.***.s"), Err(ClaimsError::Encoding(_))));
}

#[test]
fn try_decode_reports_json_error() {
    let token = format!("h.{}.s", URL_SAFE_NO_PAD.encode("nope"));
    assert!(matches!(try_decode(&token), Err(ClaimsError::Json(_))));
}

#[test]
fn try_decode_reports_non_object_payload() {
    let token = format!("h.{}.s", URL_SAFE_NO_PAD.encode("\"admin\""));
    assert_eq!(try_decode(&token), Err(ClaimsError::NotAnObject));
}

#[test]
fn decode_is_total_over_arbitrary_strings() {
    let samples = ["...", "\u{1F33F}.\u{1F33F}.\u{1F33F}", "a.=.b", "a.e30.b", " . . "];
    for token in samples {
        let _ = decode(Some(token));
    }
    // "e30" is base64url for "{}".
    assert_eq!(decode(Some("a.e30.b")), Some(Claims::default()));
}
