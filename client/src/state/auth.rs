//! Auth-session state for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! Provided once by `App` through Leptos context. Route guards, the login page
//! and the layout header all read the session through this handle.
//!
//! The token store itself is not reactive, so every write bumps `revision`
//! and every read tracks it: guards and headers re-run after login/logout.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use leptos::prelude::*;

use crate::net::types::TokenPair;
use crate::session::{Claims, Outcome, Role, RouteAuthorizer, SessionOracle, TokenStore};

#[derive(Clone, Debug)]
pub struct AuthState {
    store: TokenStore,
    authorizer: RouteAuthorizer,
    revision: RwSignal<u64>,
}

impl AuthState {
    #[must_use]
    pub fn new(store: TokenStore) -> Self {
        let authorizer = RouteAuthorizer::new(SessionOracle::new(store.clone()));
        Self { store, authorizer, revision: RwSignal::new(0) }
    }

    #[must_use]
    pub fn store(&self) -> &TokenStore {
        &self.store
    }

    /// Persist a freshly issued token pair and return the role it carries.
    pub fn sign_in(&self, pair: &TokenPair) -> Role {
        self.store.set(&pair.access, pair.refresh.as_deref());
        self.revision.update(|r| *r += 1);
        let role = self.authorizer.oracle().current_role();
        log::info!("signed in with role {role}");
        role
    }

    /// Drop both stored tokens.
    pub fn sign_out(&self) {
        self.store.clear();
        self.revision.update(|r| *r += 1);
        log::info!("signed out");
    }

    /// Decide a navigation to a view admitting `allowed` roles.
    #[must_use]
    pub fn authorize(&self, allowed: &[Role]) -> Outcome {
        self.revision.track();
        self.authorizer.authorize(allowed)
    }

    /// Decide a navigation to an unmatched path.
    #[must_use]
    pub fn authorize_fallback(&self) -> Outcome {
        self.revision.track();
        self.authorizer.authorize_fallback()
    }

    #[must_use]
    pub fn role(&self) -> Role {
        self.revision.track();
        self.authorizer.oracle().current_role()
    }

    #[must_use]
    pub fn claims(&self) -> Option<Claims> {
        self.revision.track();
        self.authorizer.oracle().claims()
    }

    /// Name shown in the page header.
    #[must_use]
    pub fn display_name(&self) -> String {
        let claims = self.claims().unwrap_or_default();
        claims.username.clone().unwrap_or_else(|| claims.role().as_str().to_owned())
    }
}

/// Where to send a user right after login.
#[must_use]
pub fn post_login_path(role: Role) -> &'static str {
    role.home_path().unwrap_or(crate::app::UNAUTHORIZED_PATH)
}
