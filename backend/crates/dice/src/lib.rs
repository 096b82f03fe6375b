//! Dice Backend Module
//!
//! Clean Architecture structure:
//! - `domain/` - Roll engine, statistics, registry trait
//! - `application/` - Use cases
//! - `infra/` - In-memory registry
//! - `presentation/` - HTTP handlers
//!
//! ## State Model
//! - Every signed-in identity owns exactly one roll engine, created lazily
//! - History only grows, except through an explicit clear
//! - Signing out discards the identity's engine; the next sign-in starts empty

pub mod application;
pub mod domain;
pub mod error;
pub mod infra;
pub mod presentation;

// Re-exports for convenience
pub use application::config::DiceConfig;
pub use domain::entities::{RollEngine, RollStats};
pub use domain::services::{DieRoller, ThreadRngRoller};
pub use error::{DiceError, DiceResult};
pub use infra::memory::InMemoryRollEngineRepository;
pub use presentation::router::{dice_router, dice_router_with_roller};
