//! PostgreSQL connectivity for the accounts service.
//!
//! Wraps SeaORM connection setup with pool settings loaded from the
//! environment, startup retries, migration running and a readiness probe.
//!
//! ```ignore
//! use database::postgres::{self, PostgresConfig};
//! use core_config::FromEnv;
//!
//! let db = postgres::connect_from_config_with_retry(PostgresConfig::from_env()?, None).await?;
//! postgres::run_migrations::<migration::Migrator>(&db, "accounts_api").await?;
//! ```

pub mod common;
pub mod postgres;

pub use common::{DatabaseError, DatabaseResult};
