use uuid::Uuid;

/// Authenticated identity attached to a request by the session middleware.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Principal {
    pub user_id: Uuid,
    /// `jti` of the session token
    pub session_id: String,
}
