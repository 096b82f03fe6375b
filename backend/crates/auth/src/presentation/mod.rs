//! Presentation Layer
//!
//! HTTP handlers, DTOs, middleware and router.

pub mod dto;
pub mod handlers;
pub mod middleware;
pub mod router;

pub use handlers::AuthAppState;
pub use middleware::{AuthMiddlewareState, require_auth_session};
pub use router::auth_router;
