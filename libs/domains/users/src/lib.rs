//! Users Domain
//!
//! Read side of the accounts service: resolving the authenticated user of a
//! request and projecting it for the `GET /me` endpoint.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────────────┐
//! │      Handlers        │  ← GET /me, error → status mapping
//! └──────────┬───────────┘
//!            │
//! ┌──────────▼───────────┐
//! │    Query service     │  ← GetCurrentUserQueryService → UserQueryModel
//! └──────────┬───────────┘
//!            │
//! ┌──────────▼───────────┐
//! │ Current user service │  ← principal → User, authentication failures
//! └──────────┬───────────┘
//!            │
//! ┌──────────▼───────────┐
//! │       Gateway        │  ← UserQueryGateway (in-memory, PostgreSQL)
//! └──────────────────────┘
//! ```
//!
//! # Usage
//!
//! ```rust,no_run
//! use domain_users::{handlers, InMemoryUserQueryGateway};
//!
//! let router = handlers::router(InMemoryUserQueryGateway::new());
//! ```

pub mod current_user;
pub mod error;
pub mod gateway;
pub mod handlers;
pub mod models;
pub mod postgres;
pub mod queries;

#[cfg(test)]
mod test_support;

pub use current_user::{CurrentUserService, SessionCurrentUserService};
pub use error::{UserError, UserResult};
pub use gateway::{InMemoryUserQueryGateway, UserQueryGateway};
pub use models::{User, UserId, UserQueryModel, UserRole, Username};
pub use postgres::PostgresUserQueryGateway;
pub use queries::{GET_CURRENT_USER_DESCRIPTION, GetCurrentUserQueryService};
