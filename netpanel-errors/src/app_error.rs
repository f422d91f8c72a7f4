use serde::{Deserialize, Serialize};
use std::str::FromStr;

const CONNECTION_FAILED_PREFIX: &str = "Connection failed: ";
const UNREACHABLE_MESSAGE: &str = "Cannot connect to server";
const SERVER_FN_PREFIX: &str = "error running server function: ";
const SERVER_FN_REQUEST_MARKER: &str = "error reaching server";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, thiserror::Error)]
pub enum AppError {
    #[error("Cannot connect to server")]
    Unreachable,

    #[error("Connection failed: {0}")]
    ConnectionFailed(String),

    #[error("Request timeout")]
    Timeout,

    #[error("Internal error: {0}")]
    Internal(String),
}

/// Recovers an `AppError` from text that crossed the server-function
/// boundary, with or without the `ServerFnError` wrapper around it.
impl FromStr for AppError {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if let Some(idx) = s.find(CONNECTION_FAILED_PREFIX) {
            let detail = &s[idx + CONNECTION_FAILED_PREFIX.len()..];
            Ok(AppError::ConnectionFailed(detail.to_string()))
        } else if s.contains(UNREACHABLE_MESSAGE) || s.contains(SERVER_FN_REQUEST_MARKER) {
            Ok(AppError::Unreachable)
        } else if s.to_lowercase().contains("timeout") {
            Ok(AppError::Timeout)
        } else {
            let inner = s.strip_prefix(SERVER_FN_PREFIX).unwrap_or(s);
            let inner = inner.strip_prefix("Internal error: ").unwrap_or(inner);
            Ok(AppError::Internal(inner.to_string()))
        }
    }
}

impl AppError {
    pub fn from_server_message(message: &str) -> Self {
        message
            .parse::<AppError>()
            .unwrap_or_else(|never| match never {})
    }

    /// Text shown in the body of the error panel.
    pub fn user_message(&self) -> &str {
        match self {
            Self::Unreachable => UNREACHABLE_MESSAGE,
            Self::ConnectionFailed(detail) => detail,
            Self::Timeout => "Request timed out",
            Self::Internal(_) => "Something went wrong on the server",
        }
    }
}

#[cfg(feature = "ssr")]
mod ssr_impl {
    use super::AppError;
    use axum::http::StatusCode;
    use axum::response::{IntoResponse, Response};
    use axum::Json;

    #[derive(serde::Serialize)]
    struct ErrorResponse {
        message: String,
    }

    impl IntoResponse for AppError {
        fn into_response(self) -> Response {
            let status = match &self {
                AppError::Unreachable => StatusCode::SERVICE_UNAVAILABLE,
                AppError::ConnectionFailed(_) => StatusCode::BAD_GATEWAY,
                AppError::Timeout => StatusCode::GATEWAY_TIMEOUT,
                AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
            };
            let message = self.to_string();
            (status, Json(ErrorResponse { message })).into_response()
        }
    }

    #[cfg(test)]
    mod tests {
        use super::*;

        #[test]
        fn test_status_codes() {
            let status = |e: AppError| e.into_response().status();

            assert_eq!(status(AppError::Unreachable), StatusCode::SERVICE_UNAVAILABLE);
            assert_eq!(
                status(AppError::ConnectionFailed("refused".to_string())),
                StatusCode::BAD_GATEWAY
            );
            assert_eq!(status(AppError::Timeout), StatusCode::GATEWAY_TIMEOUT);
            assert_eq!(
                status(AppError::Internal("boom".to_string())),
                StatusCode::INTERNAL_SERVER_ERROR
            );
        }
    }
}
