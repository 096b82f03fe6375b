//! Platform Crate - Technical Infrastructure
//!
//! This crate provides shared technical foundations:
//! - Cryptographic utilities (HMAC-SHA256, Base64, random bytes)
//! - Cookie management

pub mod cookie;
pub mod crypto;
