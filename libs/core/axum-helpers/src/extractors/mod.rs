//! Custom extractors for Axum handlers.

pub mod principal;

pub use principal::MaybePrincipal;
