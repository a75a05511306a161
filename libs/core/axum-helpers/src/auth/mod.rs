//! Session authentication.
//!
//! - HS256 session tokens carried in the `access_token` cookie
//! - Middleware that resolves the cookie into a [`Principal`]
//!
//! The middleware never rejects a request. Anonymous and invalid sessions
//! reach handlers without a principal and the domain decides what that means.
//!
//! # Example
//!
//! ```ignore
//! use axum_helpers::auth::{JwtAuth, JwtConfig, session_auth_middleware};
//! use core_config::FromEnv;
//!
//! let auth = JwtAuth::new(&JwtConfig::from_env()?);
//!
//! let routes = Router::new()
//!     .route("/me", get(handler))
//!     .layer(axum::middleware::from_fn_with_state(auth, session_auth_middleware));
//! ```

pub mod config;
pub mod jwt;
pub mod middleware;
pub mod principal;

pub use config::JwtConfig;
pub use jwt::{JwtAuth, JwtClaims, SESSION_TOKEN_TTL};
pub use middleware::{SESSION_COOKIE, session_auth_middleware, session_token_from_headers};
pub use principal::Principal;
