//! Client-side session: persisted credentials, decoded claims, and the
//! route authorization policy built on top of them.
//!
//! SYSTEM CONTEXT
//! ==============
//! `token_store` owns the two persisted values, `claims` turns the access
//! token into a role, `oracle` answers identity questions from the store, and
//! `authorizer` maps a route's allowed roles onto a render/redirect outcome.
//!
//! TRADE-OFFS
//! ==========
//! The role is read from an unverified token payload. It only drives UI
//! routing; the Remote API enforces authorization on every request.

pub mod authorizer;
pub mod claims;
pub mod oracle;
pub mod token_store;

pub use authorizer::{Outcome, RouteAuthorizer};
pub use claims::{Claims, ClaimsError, Role};
pub use oracle::SessionOracle;
pub use token_store::{BrowserStorage, MemoryStorage, StorageBackend, TokenStore};
