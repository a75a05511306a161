use axum::{Json, Router, extract::State, routing::get};
use axum_helpers::{
    MaybePrincipal,
    errors::responses::{
        ForbiddenResponse, InternalServerErrorResponse, ServiceUnavailableResponse,
        UnauthorizedResponse,
    },
};
use std::sync::Arc;
use utoipa::OpenApi;

use crate::current_user::SessionCurrentUserService;
use crate::error::UserResult;
use crate::gateway::UserQueryGateway;
use crate::models::{UserQueryModel, UserRole};
use crate::queries::{GET_CURRENT_USER_DESCRIPTION, GetCurrentUserQueryService};

/// Mount point of the account router
pub const URL: &str = "/account";

/// OpenAPI tag for account endpoints
pub const TAG: &str = "Account";

/// Security scheme name of the session cookie
pub const COOKIE_AUTH: &str = "cookie_auth";

/// OpenAPI documentation for the Account API
#[derive(OpenApi)]
#[openapi(
    paths(get_me),
    components(
        schemas(UserQueryModel, UserRole),
        responses(
            UnauthorizedResponse,
            ForbiddenResponse,
            ServiceUnavailableResponse,
            InternalServerErrorResponse
        )
    ),
    tags(
        (name = TAG, description = "Current account endpoints")
    )
)]
pub struct ApiDoc;

/// Create the account router
///
/// Expects a session middleware upstream to attach the request principal.
pub fn router<G: UserQueryGateway + 'static>(gateway: G) -> Router {
    Router::new()
        .route("/me", get(get_me::<G>))
        .with_state(Arc::new(gateway))
}

/// Get the current user
#[utoipa::path(
    get,
    path = "/me",
    tag = TAG,
    operation_id = "get_me",
    description = GET_CURRENT_USER_DESCRIPTION,
    security(("cookie_auth" = [])),
    responses(
        (status = 200, description = "Current authenticated user", body = UserQueryModel),
        (status = 401, response = UnauthorizedResponse),
        (status = 403, response = ForbiddenResponse),
        (status = 503, response = ServiceUnavailableResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn get_me<G: UserQueryGateway>(
    State(gateway): State<Arc<G>>,
    MaybePrincipal(principal): MaybePrincipal,
) -> UserResult<Json<UserQueryModel>> {
    let current_user_service = SessionCurrentUserService::new(gateway.as_ref(), principal.as_ref());
    let query = GetCurrentUserQueryService::new(current_user_service);

    Ok(Json(query.execute().await?))
}
