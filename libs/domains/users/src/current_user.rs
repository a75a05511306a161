use async_trait::async_trait;
use axum_helpers::Principal;

use crate::error::{UserError, UserResult};
use crate::gateway::UserQueryGateway;
use crate::models::{User, UserId};

/// Resolves the user behind the current request
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CurrentUserService: Send + Sync {
    async fn get_current_user(&self) -> UserResult<User>;
}

/// Request-scoped [`CurrentUserService`] backed by the session principal.
///
/// Borrows the shared gateway and the request's principal, so it cannot
/// outlive the request it was built for.
pub struct SessionCurrentUserService<'a, G: ?Sized> {
    gateway: &'a G,
    principal: Option<&'a Principal>,
}

impl<'a, G: UserQueryGateway + ?Sized> SessionCurrentUserService<'a, G> {
    pub fn new(gateway: &'a G, principal: Option<&'a Principal>) -> Self {
        Self { gateway, principal }
    }
}

#[async_trait]
impl<'a, G: UserQueryGateway + ?Sized> CurrentUserService for SessionCurrentUserService<'a, G> {
    async fn get_current_user(&self) -> UserResult<User> {
        let principal = self
            .principal
            .ok_or_else(|| UserError::Authentication("Not authenticated.".to_string()))?;

        let user_id = UserId::new(principal.user_id);

        match self.gateway.read_by_id(&user_id).await? {
            Some(user) => Ok(user),
            None => {
                tracing::info!(
                    user_id = %user_id,
                    session_id = %principal.session_id,
                    "Session refers to a user that no longer exists"
                );
                Err(UserError::Authentication("Not authenticated.".to_string()))
            }
        }
    }
}
