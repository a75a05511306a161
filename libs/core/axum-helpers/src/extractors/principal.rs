//! Principal extractor backed by the session middleware.

use crate::auth::Principal;
use axum::{extract::FromRequestParts, http::request::Parts};
use std::convert::Infallible;

/// Optional principal of the current request.
///
/// Never rejects: `None` means the request is anonymous, either because no
/// session middleware ran or because the session was missing or invalid.
///
/// ```ignore
/// async fn me(MaybePrincipal(principal): MaybePrincipal) -> String {
///     principal.map(|p| p.user_id.to_string()).unwrap_or_default()
/// }
/// ```
#[derive(Debug, Clone)]
pub struct MaybePrincipal(pub Option<Principal>);

impl<S> FromRequestParts<S> for MaybePrincipal
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        Ok(MaybePrincipal(parts.extensions.get::<Principal>().cloned()))
    }
}
