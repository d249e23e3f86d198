//! Render-or-redirect policy for role-gated routes.
//!
//! DESIGN
//! ======
//! Rules are checked in a fixed order and the first match wins:
//! 1. no access token -> `RedirectLogin`
//! 2. role outside a non-empty allowed set -> `RedirectRoleHome(Admin)` for
//!    admins, `RedirectUnauthorized` for everyone else
//! 3. otherwise -> `Render`
//!
//! An empty allowed set admits any authenticated user, including one whose
//! role is `none`.
//!
//! The catch-all route never renders content of its own: `authorize_fallback`
//! turns its `Render` into `RedirectRoleHome` so unmatched paths land on the
//! user's dashboard.

#[cfg(test)]
#[path = "authorizer_test.rs"]
mod authorizer_test;

use super::claims::Role;
use super::oracle::SessionOracle;
use crate::app::{ANY_ROLE, LOGIN_PATH, UNAUTHORIZED_PATH};

/// Decision for one navigation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Outcome {
    Render,
    RedirectLogin,
    RedirectUnauthorized,
    RedirectRoleHome(Role),
}

impl Outcome {
    /// Redirect target, or `None` when the view should render.
    #[must_use]
    pub fn redirect_path(self) -> Option<&'static str> {
        match self {
            Self::Render => None,
            Self::RedirectLogin => Some(LOGIN_PATH),
            Self::RedirectUnauthorized => Some(UNAUTHORIZED_PATH),
            Self::RedirectRoleHome(role) => Some(role.home_path().unwrap_or(UNAUTHORIZED_PATH)),
        }
    }
}

#[derive(Clone, Debug)]
pub struct RouteAuthorizer {
    oracle: SessionOracle,
}

impl RouteAuthorizer {
    #[must_use]
    pub fn new(oracle: SessionOracle) -> Self {
        Self { oracle }
    }

    /// Decide a navigation to a view that admits `allowed` roles.
    #[must_use]
    pub fn authorize(&self, allowed: &[Role]) -> Outcome {
        if !self.oracle.is_authenticated() {
            return Outcome::RedirectLogin;
        }
        let role = self.oracle.current_role();
        if !allowed.is_empty() && !allowed.contains(&role) {
            if role == Role::Admin {
                return Outcome::RedirectRoleHome(Role::Admin);
            }
            return Outcome::RedirectUnauthorized;
        }
        Outcome::Render
    }

    /// Decide a navigation to an unmatched path.
    #[must_use]
    pub fn authorize_fallback(&self) -> Outcome {
        match self.authorize(ANY_ROLE) {
            Outcome::Render => Outcome::RedirectRoleHome(self.oracle.current_role()),
            other => other,
        }
    }

    #[must_use]
    pub fn oracle(&self) -> &SessionOracle {
        &self.oracle
    }
}
