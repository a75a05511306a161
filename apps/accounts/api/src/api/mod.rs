use axum::{Router, routing::get};
use axum_helpers::JwtAuth;
use domain_users::UserQueryGateway;

pub mod account;
pub mod health;

/// Creates the API routes without the `/api` prefix.
/// The `/api` prefix is added by the `create_router` helper.
pub fn routes<G: UserQueryGateway + 'static>(gateway: G, jwt_auth: JwtAuth) -> Router {
    Router::new().nest(
        domain_users::handlers::URL,
        account::router(gateway, jwt_auth),
    )
}

/// Router with the `/ready` endpoint, checking the database connection.
pub fn ready_router(state: crate::state::AppState) -> Router {
    Router::new()
        .route("/ready", get(health::ready_handler))
        .with_state(state)
}
