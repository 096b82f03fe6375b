//! Auth (Authentication) Backend Module
//!
//! Clean Architecture structure:
//! - `domain/` - Identities, sessions, repository traits
//! - `application/` - Use cases and session tokens
//! - `infra/` - In-memory identity and session store
//! - `presentation/` - HTTP handlers, DTOs, router, middleware
//!
//! ## Features
//! - Sign in with user name + password against a fixed identity list
//! - Server-side sessions referenced by HMAC-signed cookie tokens
//! - Sign-out hook so other crates can drop per-identity state
//!
//! ## Security Model
//! - Passwords are stored and compared as plaintext (demo identities only)
//! - Every sign-in failure returns the same message
//! - Tampered or expired session tokens are rejected; expired sessions are removed

pub mod application;
pub mod domain;
pub mod error;
pub mod infra;
pub mod presentation;

// Re-exports for convenience
pub use application::config::AuthConfig;
pub use application::SignOutListeners;
pub use error::{AuthError, AuthResult};
pub use infra::memory::InMemoryAuthRepository;
pub use presentation::router::auth_router;

// Re-export kernel error types for unified error handling
pub use kernel::error::{
    app_error::{AppError, AppResult},
    kind::ErrorKind,
};

pub mod middleware {
    pub use crate::presentation::middleware::*;
}

#[cfg(test)]
mod tests;
