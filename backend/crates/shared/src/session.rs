//! Session vocabulary shared between crates
//!
//! - [`CurrentIdentity`] is what the auth middleware attaches to a request
//!   once its login session has been verified.
//! - [`SignOutListener`] lets per-identity state owned by other crates
//!   (e.g. dice roll history) be dropped when the identity signs out.

use crate::id::IdentityId;

/// The signed-in identity of the current request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CurrentIdentity {
    pub identity_id: IdentityId,
    pub user_name: String,
}

/// Observer notified when an identity signs out.
///
/// Called inline in the sign-out request after the login session has been
/// deleted, so implementations must not block.
pub trait SignOutListener: Send + Sync + 'static {
    fn on_sign_out(&self, identity_id: IdentityId);
}
