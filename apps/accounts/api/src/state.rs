//! Shared application state.

use axum_helpers::JwtAuth;

/// State shared by the readiness check and shutdown cleanup.
///
/// Cloning is cheap: the connection pool and signing keys are reference counted.
#[derive(Clone)]
pub struct AppState {
    pub config: crate::config::Config,
    /// PostgreSQL connection pool
    pub db: database::postgres::DatabaseConnection,
    /// Session token verifier
    pub jwt_auth: JwtAuth,
}
