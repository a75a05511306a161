//! Accounts API
//!
//! HTTP service exposing `GET /api/account/me`, the account of the user
//! behind the session cookie.

use axum::Router;
use axum_helpers::{JwtAuth, create_router, health_router};
use core_config::AppInfo;
use domain_users::UserQueryGateway;
use tower_http::cors::CorsLayer;

pub mod api;
pub mod config;
pub mod openapi;
pub mod state;

/// Assemble the application router around `gateway`.
///
/// Includes docs, fallbacks and `/health`. `root` carries extra top-level
/// routes such as `/ready`, which needs a live database; they get the same
/// CORS, trace and security-header layers as the API.
pub fn build_app<G>(
    gateway: G,
    jwt_auth: JwtAuth,
    cors: CorsLayer,
    app: AppInfo,
    root: Router,
) -> Router
where
    G: UserQueryGateway + 'static,
{
    create_router::<openapi::ApiDoc>(
        api::routes(gateway, jwt_auth),
        health_router(app).merge(root),
        cors,
    )
}
