use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use axum_helpers::errors::{ErrorCode, error_response};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum UserError {
    /// No principal, or the principal no longer maps to a user
    #[error("Authentication failed: {0}")]
    Authentication(String),

    #[error("Authorization failed: {0}")]
    Authorization(String),

    /// Persistence layer failure
    #[error("Data access error: {0}")]
    DataMapper(String),

    #[error("Invalid input: {0}")]
    Validation(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

pub type UserResult<T> = Result<T, UserError>;

impl IntoResponse for UserError {
    fn into_response(self) -> Response {
        match self {
            UserError::Authentication(msg) => {
                tracing::info!(
                    error_code = ErrorCode::Unauthorized.code(),
                    "Authentication failed: {}",
                    msg
                );
                error_response(StatusCode::UNAUTHORIZED, msg, ErrorCode::Unauthorized)
            }
            UserError::DataMapper(msg) => {
                tracing::error!(
                    error_code = ErrorCode::DatabaseError.code(),
                    "Data access failed: {}",
                    msg
                );
                error_response(
                    StatusCode::SERVICE_UNAVAILABLE,
                    ErrorCode::ServiceUnavailable.default_message().to_string(),
                    ErrorCode::ServiceUnavailable,
                )
            }
            UserError::Authorization(msg) => {
                tracing::info!(
                    error_code = ErrorCode::Forbidden.code(),
                    "Authorization failed: {}",
                    msg
                );
                error_response(StatusCode::FORBIDDEN, msg, ErrorCode::Forbidden)
            }
            other @ (UserError::Validation(_) | UserError::Internal(_)) => {
                tracing::info!(
                    error_code = ErrorCode::InternalError.code(),
                    "Unhandled error: {}",
                    other
                );
                error_response(
                    StatusCode::INTERNAL_SERVER_ERROR,
                    ErrorCode::InternalError.default_message().to_string(),
                    ErrorCode::InternalError,
                )
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::CapturedLogs;
    use http_body_util::BodyExt;

    async fn body(error: UserError) -> (StatusCode, serde_json::Value) {
        let response = error.into_response();
        let status = response.status();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn test_authentication_maps_to_401() {
        let (status, json) = body(UserError::Authentication("Not authenticated.".into())).await;
        assert_eq!(status, StatusCode::UNAUTHORIZED);
        assert_eq!(json["error"], "UNAUTHORIZED");
        assert_eq!(json["message"], "Not authenticated.");
    }

    #[tokio::test]
    async fn test_authorization_maps_to_403() {
        let (status, json) = body(UserError::Authorization("Not allowed.".into())).await;
        assert_eq!(status, StatusCode::FORBIDDEN);
        assert_eq!(json["error"], "FORBIDDEN");
    }

    #[tokio::test]
    async fn test_data_mapper_maps_to_503_without_leaking() {
        let (status, json) =
            body(UserError::DataMapper("relation \"users\" does not exist".into())).await;
        assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
        assert_eq!(json["error"], "SERVICE_UNAVAILABLE");
        assert_eq!(json["message"], "Service is temporarily unavailable");
        assert!(!json.to_string().contains("relation"));
    }

    #[tokio::test]
    async fn test_unmapped_errors_map_to_500() {
        for error in [
            UserError::Internal("boom".into()),
            UserError::Validation("bad".into()),
        ] {
            let (status, json) = body(error).await;
            assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
            assert_eq!(json["error"], "INTERNAL_ERROR");
            assert_eq!(json["message"], "An internal server error occurred");
        }
    }

    #[tokio::test]
    async fn test_data_mapper_logs_at_error_level() {
        let (logs, _guard) = CapturedLogs::install();

        let (status, _) = body(UserError::DataMapper("pool timed out".into())).await;

        assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
        let errors = logs.lines_at("ERROR");
        assert_eq!(errors.len(), 1);
        assert!(errors[0].contains("Data access failed: pool timed out"));
        assert!(errors[0].contains("error_code=2003"));
        assert!(logs.lines_at("INFO").is_empty());
    }

    #[tokio::test]
    async fn test_client_errors_log_at_info_level() {
        let (logs, _guard) = CapturedLogs::install();

        body(UserError::Authentication("Not authenticated.".into())).await;
        body(UserError::Authorization("Not allowed.".into())).await;

        let infos = logs.lines_at("INFO");
        assert_eq!(infos.len(), 2);
        assert!(infos[0].contains("Authentication failed: Not authenticated."));
        assert!(infos[1].contains("Authorization failed: Not allowed."));
        assert!(logs.lines_at("ERROR").is_empty());
    }
}
