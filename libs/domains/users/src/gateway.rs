use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;

use crate::error::UserResult;
use crate::models::{User, UserId};

/// Read access to stored users
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserQueryGateway: Send + Sync {
    /// `Ok(None)` when no user has this id
    async fn read_by_id(&self, user_id: &UserId) -> UserResult<Option<User>>;
}

/// In-memory implementation of UserQueryGateway (for development/testing)
///
/// Seeded once at construction; clones share the same users.
#[derive(Debug, Default, Clone)]
pub struct InMemoryUserQueryGateway {
    users: Arc<HashMap<UserId, User>>,
}

impl InMemoryUserQueryGateway {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_users(users: impl IntoIterator<Item = User>) -> Self {
        let users = users.into_iter().map(|u| (u.id, u)).collect();
        Self {
            users: Arc::new(users),
        }
    }
}

#[async_trait]
impl UserQueryGateway for InMemoryUserQueryGateway {
    async fn read_by_id(&self, user_id: &UserId) -> UserResult<Option<User>> {
        Ok(self.users.get(user_id).cloned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{UserRole, Username};
    use uuid::Uuid;

    fn user(name: &str) -> User {
        User::new(
            UserId::new(Uuid::now_v7()),
            Username::new(name).unwrap(),
            "hash".to_string(),
            UserRole::User,
        )
    }

    #[tokio::test]
    async fn test_read_by_id_finds_seeded_user() {
        let alice = user("alice");
        let gateway = InMemoryUserQueryGateway::with_users([alice.clone(), user("bobby")]);

        let found = gateway.read_by_id(&alice.id).await.unwrap().unwrap();
        assert_eq!(found.username, alice.username);
    }

    #[tokio::test]
    async fn test_read_by_id_missing_user_is_none() {
        let gateway = InMemoryUserQueryGateway::new();
        let missing = UserId::new(Uuid::now_v7());
        assert!(gateway.read_by_id(&missing).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_clones_share_seeded_users() {
        let alice = user("alice");
        let gateway = InMemoryUserQueryGateway::with_users([alice.clone()]);
        let clone = gateway.clone();

        assert!(clone.read_by_id(&alice.id).await.unwrap().is_some());
    }
}
