//! Identity Entity
//!
//! A principal that can sign in.

use kernel::id::IdentityId;

use crate::domain::value_object::{plain_password::PlainPassword, user_name::UserName};

/// Identity entity
#[derive(Debug, Clone)]
pub struct Identity {
    pub identity_id: IdentityId,
    pub user_name: UserName,
    pub password: PlainPassword,
}

impl Identity {
    pub fn new(identity_id: IdentityId, user_name: UserName, password: PlainPassword) -> Self {
        Self {
            identity_id,
            user_name,
            password,
        }
    }
}
