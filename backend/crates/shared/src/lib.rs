//! Shared Kernel - Domain-crossing minimal core
//!
//! This crate contains the "smallest core" of vocabulary shared by the
//! `auth` and `dice` crates:
//! - Common error types and result aliases
//! - Typed numeric IDs (`IdentityId`)
//! - The sign-out hook that lets per-identity state follow the login lifecycle
//!
//! **Design Principle**: Only include things that are "hard to change"
//! and have consistent meaning across all domains.

pub mod error {
    pub mod app_error;
    pub mod conversions;
    pub mod kind;
}
pub mod id;
pub mod session;
