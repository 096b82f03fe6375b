//! Domain Layer - Business logic and entities
//!
//! This layer contains:
//! - Domain entities (RollEngine, RollStats)
//! - Domain value objects (RollRequest)
//! - Domain services (die rolling, statistics)
//! - Repository traits (engine registry)

pub mod entities;
pub mod repository;
pub mod services;
pub mod value_objects;
