//! Structural decoding of an access token into role claims.
//!
//! The token is expected to be a JWT (`header.payload.signature`) whose
//! payload is base64url-encoded JSON. Only the payload is read; the signature
//! is never checked, so the result carries no security guarantee.
//!
//! ERROR HANDLING
//! ==============
//! `decode` is total: every failure is logged and reported as "no claims".
//! `try_decode` exposes the typed reason for callers that need it.

#[cfg(test)]
#[path = "claims_test.rs"]
mod claims_test;

use base64::Engine as _;
use base64::alphabet;
use base64::engine::{DecodePaddingMode, GeneralPurpose, GeneralPurposeConfig};

/// base64url that accepts payloads with or without `=` padding.
const PAYLOAD_ENGINE: GeneralPurpose = GeneralPurpose::new(
    &alphabet::URL_SAFE,
    GeneralPurposeConfig::new().with_decode_padding_mode(DecodePaddingMode::Indifferent),
);

/// Coarse authorization category read from the `role` claim.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Role {
    Admin,
    Farmer,
    Worker,
    /// Unauthenticated, undecodable token, or unrecognized role value.
    #[default]
    None,
}

impl Role {
    /// Map a raw claim value onto a role. Matching is exact.
    #[must_use]
    pub fn from_claim(raw: Option<&str>) -> Self {
        match raw {
            Some("admin") => Self::Admin,
            Some("farmer") => Self::Farmer,
            Some("worker") => Self::Worker,
            _ => Self::None,
        }
    }

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Admin => "admin",
            Self::Farmer => "farmer",
            Self::Worker => "worker",
            Self::None => "none",
        }
    }

    /// Landing route for the role, if it has one.
    #[must_use]
    pub fn home_path(self) -> Option<&'static str> {
        match self {
            Self::Admin => Some(crate::app::ADMIN_HOME_PATH),
            Self::Farmer | Self::Worker => Some(crate::app::FARMER_HOME_PATH),
            Self::None => None,
        }
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Decoded token payload, reduced to the fields the UI reads.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Claims {
    /// Raw `role` claim, if present and a string.
    pub role: Option<String>,
    /// Raw `username` claim, if present and a string.
    pub username: Option<String>,
}

impl Claims {
    #[must_use]
    pub fn role(&self) -> Role {
        Role::from_claim(self.role.as_deref())
    }
}

/// Why a token could not be decoded.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ClaimsError {
    #[error("token has {parts} dot-separated parts, expected 3")]
    Structure { parts: usize },
    #[error("payload is not valid base64url: {0}")]
    Encoding(String),
    #[error("payload is not valid JSON: {0}")]
    Json(String),
    #[error("payload is not a JSON object")]
    NotAnObject,
}

/// Decode `token` into claims without ever failing.
///
/// Absent tokens yield `None` silently; malformed tokens yield `None` and a
/// warning in the log.
#[must_use]
pub fn decode(token: Option<&str>) -> Option<Claims> {
    let token = token?;
    match try_decode(token) {
        Ok(claims) => Some(claims),
        Err(e) => {
            log::warn!("ignoring undecodable access token: {e}");
            None
        }
    }
}

/// Decode `token`, reporting the failure reason.
///
/// # Errors
///
/// Returns a `ClaimsError` when the token is not three dot-separated parts,
/// the payload is not base64url, or the payload is not a JSON object.
pub fn try_decode(token: &str) -> Result<Claims, ClaimsError> {
    let parts: Vec<&str> = token.split('.').collect();
    let [_, payload, _] = parts.as_slice() else {
        return Err(ClaimsError::Structure { parts: parts.len() });
    };

    let bytes = PAYLOAD_ENGINE
        .decode(payload)
        .map_err(|e| ClaimsError::Encoding(e.to_string()))?;
    let value: serde_json::Value =
        serde_json::from_slice(&bytes).map_err(|e| ClaimsError::Json(e.to_string()))?;
    let serde_json::Value::Object(map) = value else {
        return Err(ClaimsError::NotAnObject);
    };

    let string_claim = |key: &str| map.get(key).and_then(serde_json::Value::as_str).map(str::to_owned);
    Ok(Claims { role: string_claim("role"), username: string_claim("username") })
}
