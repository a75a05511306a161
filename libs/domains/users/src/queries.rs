use crate::current_user::CurrentUserService;
use crate::error::UserResult;
use crate::models::UserQueryModel;

/// Operation description, also published in the OpenAPI document
pub const GET_CURRENT_USER_DESCRIPTION: &str = "- Open to any authenticated user.\n\
     - Retrieves the current authenticated user's information.";

/// Projects the current user for the `GET /me` endpoint
pub struct GetCurrentUserQueryService<S> {
    current_user_service: S,
}

impl<S: CurrentUserService> GetCurrentUserQueryService<S> {
    pub fn new(current_user_service: S) -> Self {
        Self {
            current_user_service,
        }
    }

    /// Errors from the current user service are returned unchanged.
    pub async fn execute(&self) -> UserResult<UserQueryModel> {
        tracing::info!("Get current user: started.");

        let current_user = self.current_user_service.get_current_user().await?;
        let model = UserQueryModel::from(current_user);

        tracing::info!(
            user_id = %model.id,
            username = %model.username,
            "Get current user: done."
        );
        Ok(model)
    }
}
