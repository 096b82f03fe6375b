//! Application Layer - Use Cases
//!
//! This layer orchestrates domain logic and infrastructure.
//! Contains use case implementations.

pub mod clear_history;
pub mod config;
pub mod roll_dice;
pub mod view_history;
