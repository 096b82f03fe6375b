//! Plain Password Value Object
//!
//! Identity secrets are held and compared as plaintext. This is a known
//! weakness of the in-memory identity store and is kept out of logs.

use std::fmt;

/// A secret compared as an exact string
#[derive(Clone, PartialEq, Eq)]
pub struct PlainPassword(String);

impl PlainPassword {
    pub fn new(secret: impl Into<String>) -> Self {
        Self(secret.into())
    }

    /// Exact string comparison
    pub fn matches(&self, candidate: &str) -> bool {
        self.0 == candidate
    }
}

impl fmt::Debug for PlainPassword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("PlainPassword(***)")
    }
}
