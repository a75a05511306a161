use axum::{Router, middleware};
use axum_helpers::{JwtAuth, session_auth_middleware};
use domain_users::{UserQueryGateway, handlers};

/// Account routes behind the session cookie middleware.
///
/// The middleware only resolves the principal; rejecting anonymous requests
/// is left to the handlers.
pub fn router<G: UserQueryGateway + 'static>(gateway: G, jwt_auth: JwtAuth) -> Router {
    handlers::router(gateway).layer(middleware::from_fn_with_state(
        jwt_auth,
        session_auth_middleware,
    ))
}
