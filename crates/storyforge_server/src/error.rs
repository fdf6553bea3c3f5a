//! Mapping pipeline errors onto HTTP responses.

use axum::{
    Json,
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;
use storyforge_error::{GatewayErrorKind, StoryforgeError, StoryforgeErrorKind};

/// An error response: a status code and a user-facing message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiError {
    /// HTTP status
    pub status: StatusCode,
    /// Value of the `error` field
    pub message: String,
}

impl ApiError {
    /// 400 with the given message.
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            message: message.into(),
        }
    }

    /// 404 with the given message.
    pub fn not_found(message: impl Into<String>) -> Self {
        Self {
            status: StatusCode::NOT_FOUND,
            message: message.into(),
        }
    }
}

impl From<StoryforgeError> for ApiError {
    fn from(err: StoryforgeError) -> Self {
        let status = match err.kind() {
            StoryforgeErrorKind::Input(_) | StoryforgeErrorKind::Request(_) => {
                StatusCode::BAD_REQUEST
            }
            StoryforgeErrorKind::Gateway(e) => match &e.kind {
                GatewayErrorKind::MissingCredential(_) => {
                    tracing::error!("Completion credential missing");
                    return Self {
                        status: StatusCode::INTERNAL_SERVER_ERROR,
                        message: "Server configuration error".to_string(),
                    };
                }
                GatewayErrorKind::Status { status, .. } => {
                    StatusCode::from_u16(*status).unwrap_or(StatusCode::BAD_GATEWAY)
                }
                GatewayErrorKind::Unreachable(_) | GatewayErrorKind::MalformedResponse(_) => {
                    StatusCode::BAD_GATEWAY
                }
                GatewayErrorKind::RequestConversion(_) => StatusCode::INTERNAL_SERVER_ERROR,
            },
            StoryforgeErrorKind::Extraction(_)
            | StoryforgeErrorKind::Config(_)
            | StoryforgeErrorKind::Json(_)
            | StoryforgeErrorKind::Storage(_)
            | StoryforgeErrorKind::Server(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        if status.is_server_error() {
            tracing::error!(status = status.as_u16(), error = %err, "Request failed");
        } else {
            tracing::debug!(status = status.as_u16(), error = %err.message(), "Request rejected");
        }

        Self {
            status,
            message: err.message(),
        }
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        Self::bad_request(rejection.body_text())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status, Json(json!({ "error": self.message }))).into_response()
    }
}
