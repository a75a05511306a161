use super::jwt::JwtAuth;
use axum::{
    extract::{Request, State},
    http::{HeaderMap, header},
    middleware::Next,
    response::Response,
};

/// Name of the cookie carrying the session token
pub const SESSION_COOKIE: &str = "access_token";

/// Extract the session token from the `access_token` cookie
pub fn session_token_from_headers(headers: &HeaderMap) -> Option<String> {
    headers
        .get_all(header::COOKIE)
        .iter()
        .filter_map(|v| v.to_str().ok())
        .flat_map(|cookies| cookies.split(';'))
        .find_map(|cookie| {
            let (name, value) = cookie.trim().split_once('=')?;
            (name == SESSION_COOKIE && !value.is_empty()).then(|| value.to_string())
        })
}

/// Session authentication middleware
///
/// Verifies the session cookie and inserts a [`Principal`](super::Principal)
/// into request extensions on success. Requests without a valid session pass
/// through unauthenticated.
///
/// ```ignore
/// let routes = Router::new()
///     .route("/me", get(get_me))
///     .layer(axum::middleware::from_fn_with_state(auth, session_auth_middleware));
/// ```
pub async fn session_auth_middleware(
    State(auth): State<JwtAuth>,
    mut request: Request,
    next: Next,
) -> Response {
    let Some(token) = session_token_from_headers(request.headers()) else {
        tracing::debug!("No session cookie on request");
        return next.run(request).await;
    };

    match auth
        .verify_token(&token)
        .and_then(|claims| claims.principal())
    {
        Ok(principal) => {
            tracing::debug!(user_id = %principal.user_id, "Session resolved");
            request.extensions_mut().insert(principal);
        }
        Err(e) => {
            tracing::debug!("Session token rejected: {}", e);
        }
    }

    next.run(request).await
}
