//! Infrastructure Layer
//!
//! Registry implementations.

pub mod memory;
