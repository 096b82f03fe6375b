//! In-memory identity store and session store

use std::collections::HashMap;

use chrono::Utc;
use kernel::id::IdentityId;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::domain::entity::{auth_session::AuthSession, identity::Identity};
use crate::domain::repository::{AuthSessionRepository, IdentityRepository};
use crate::domain::value_object::{plain_password::PlainPassword, user_name::UserName};
use crate::error::{AuthError, AuthResult};

/// Identities are fixed at construction; sessions come and go.
#[derive(Debug)]
pub struct InMemoryAuthRepository {
    by_name: HashMap<UserName, Identity>,
    by_id: HashMap<IdentityId, UserName>,
    sessions: RwLock<HashMap<Uuid, AuthSession>>,
}

impl InMemoryAuthRepository {
    /// Build a store from a fixed identity list. Ids and names must be unique.
    pub fn new(identities: Vec<Identity>) -> AuthResult<Self> {
        let mut by_name = HashMap::with_capacity(identities.len());
        let mut by_id = HashMap::with_capacity(identities.len());

        for identity in identities {
            if by_id.contains_key(&identity.identity_id) {
                return Err(AuthError::DuplicateIdentity(format!(
                    "id {}",
                    identity.identity_id
                )));
            }
            if by_name.contains_key(&identity.user_name) {
                return Err(AuthError::DuplicateIdentity(format!(
                    "name {}",
                    identity.user_name
                )));
            }

            by_id.insert(identity.identity_id, identity.user_name.clone());
            by_name.insert(identity.user_name.clone(), identity);
        }

        Ok(Self {
            by_name,
            by_id,
            sessions: RwLock::new(HashMap::new()),
        })
    }

    /// The two built-in demo identities: `user` / `password` and
    /// `admin` / `admin123`
    pub fn with_default_identities() -> AuthResult<Self> {
        Self::new(default_identities()?)
    }

    pub fn identity_count(&self) -> usize {
        self.by_name.len()
    }

    pub async fn session_count(&self) -> usize {
        self.sessions.read().await.len()
    }
}

fn default_identities() -> AuthResult<Vec<Identity>> {
    [(1, "user", "password"), (2, "admin", "admin123")]
        .into_iter()
        .map(|(id, name, password)| -> AuthResult<Identity> {
            let user_name =
                UserName::new(name).map_err(|e| AuthError::InvalidUserName(e.to_string()))?;
            Ok(Identity::new(
                IdentityId::new(id),
                user_name,
                PlainPassword::new(password),
            ))
        })
        .collect()
}

impl IdentityRepository for InMemoryAuthRepository {
    async fn find_by_user_name(&self, user_name: &UserName) -> AuthResult<Option<Identity>> {
        Ok(self.by_name.get(user_name).cloned())
    }

    async fn find_by_id(&self, identity_id: IdentityId) -> AuthResult<Option<Identity>> {
        Ok(self
            .by_id
            .get(&identity_id)
            .and_then(|name| self.by_name.get(name))
            .cloned())
    }
}

impl AuthSessionRepository for InMemoryAuthRepository {
    async fn create(&self, session: &AuthSession) -> AuthResult<()> {
        let mut sessions = self.sessions.write().await;
        if sessions.contains_key(&session.session_id) {
            return Err(AuthError::Internal("Session id collision".to_string()));
        }
        sessions.insert(session.session_id, session.clone());
        Ok(())
    }

    async fn find_by_id(&self, session_id: Uuid) -> AuthResult<Option<AuthSession>> {
        Ok(self.sessions.read().await.get(&session_id).cloned())
    }

    async fn update(&self, session: &AuthSession) -> AuthResult<()> {
        // A session deleted by a concurrent sign-out stays deleted
        if let Some(stored) = self.sessions.write().await.get_mut(&session.session_id) {
            *stored = session.clone();
        }
        Ok(())
    }

    async fn delete(&self, session_id: Uuid) -> AuthResult<Option<AuthSession>> {
        Ok(self.sessions.write().await.remove(&session_id))
    }

    async fn cleanup_expired(&self) -> AuthResult<u64> {
        let now = Utc::now();
        let mut sessions = self.sessions.write().await;
        let before = sessions.len();
        sessions.retain(|_, session| !session.is_expired_at(now));
        Ok((before - sessions.len()) as u64)
    }
}
