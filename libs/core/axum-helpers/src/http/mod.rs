//! HTTP middleware module.
//!
//! - CORS configured from the environment
//! - Security headers
//!
//! ```ignore
//! use axum_helpers::http::{CorsConfig, security_headers};
//!
//! let cors = CorsConfig::from_env()?.into_layer()?;
//! let app = Router::new()
//!     .layer(axum::middleware::from_fn(security_headers))
//!     .layer(cors);
//! ```

pub mod cors;
pub mod security;

pub use cors::CorsConfig;
pub use security::security_headers;
