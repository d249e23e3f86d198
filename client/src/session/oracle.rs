//! Authentication and role answers derived from the token store.

#[cfg(test)]
#[path = "oracle_test.rs"]
mod oracle_test;

use super::claims::{self, Claims, Role};
use super::token_store::TokenStore;

/// Read-only view over the current credential.
///
/// Nothing is cached: each call reads the store and decodes again, so answers
/// track token replacement immediately.
#[derive(Clone, Debug)]
pub struct SessionOracle {
    store: TokenStore,
}

impl SessionOracle {
    #[must_use]
    pub fn new(store: TokenStore) -> Self {
        Self { store }
    }

    /// True iff a non-empty access token is stored. Expiry is not checked.
    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        self.store.access().is_some_and(|token| !token.is_empty())
    }

    /// Role claim of the stored token, or `Role::None`.
    #[must_use]
    pub fn current_role(&self) -> Role {
        self.claims().as_ref().map_or(Role::None, Claims::role)
    }

    /// Decoded claims of the stored token, if authenticated and decodable.
    #[must_use]
    pub fn claims(&self) -> Option<Claims> {
        if !self.is_authenticated() {
            return None;
        }
        claims::decode(self.store.access().as_deref())
    }
}
