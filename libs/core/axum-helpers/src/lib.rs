//! # Axum Helpers
//!
//! Shared building blocks for the accounts HTTP service.
//!
//! - **[`auth`]**: Session cookie verification and the request [`Principal`]
//! - **[`server`]**: Router assembly, health checks, graceful shutdown
//! - **[`http`]**: CORS configuration and security headers
//! - **[`errors`]**: Structured error responses with error codes
//! - **[`extractors`]**: Custom extractors
//!
//! ## Quick Start
//!
//! ```ignore
//! use axum_helpers::{CorsConfig, create_production_app, create_router, health_router};
//! use core_config::{FromEnv, app_info, server::ServerConfig};
//!
//! let cors = CorsConfig::from_env()?.into_layer()?;
//! let router = create_router::<ApiDoc>(api_routes, health_router(app_info!()), cors);
//! create_production_app(router, &ServerConfig::from_env()?, async {}).await?;
//! ```

pub mod auth;
pub mod errors;
pub mod extractors;
pub mod http;
pub mod server;

pub use auth::{JwtAuth, JwtClaims, JwtConfig, Principal, SESSION_COOKIE, session_auth_middleware};

pub use server::{
    HealthCheckFuture, HealthResponse, ShutdownCoordinator, create_production_app, create_router,
    health_router, run_health_checks,
};

pub use http::{CorsConfig, security_headers};

pub use errors::{ErrorCode, ErrorResponse, error_response};

pub use extractors::MaybePrincipal;
