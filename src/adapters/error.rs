use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use tracing::{error, warn};

use crate::application::error::ApplicationError;

impl IntoResponse for ApplicationError {
    fn into_response(self) -> Response {
        match self {
            ApplicationError::BadRequest(ref msg) => {
                warn!("Bad request: {}", msg);
                (StatusCode::BAD_REQUEST, Json(json!({ "error": "Bad request" })))
                    .into_response()
            }
            ApplicationError::Unauthorized => {
                warn!("Unauthorized webhook sender");
                StatusCode::UNAUTHORIZED.into_response()
            }
            ApplicationError::UpstreamError { status, details } => {
                warn!("Ocrolus token request failed with status {}", status);
                let status =
                    StatusCode::from_u16(status).unwrap_or(StatusCode::BAD_GATEWAY);
                (
                    status,
                    Json(json!({
                        "error": "Failed to get token from Ocrolus",
                        "details": details,
                    })),
                )
                    .into_response()
            }
            ApplicationError::InternalError(ref msg) => {
                error!("Internal server error: {}", msg);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(json!({
                        "error": "Internal server error",
                        "message": msg,
                    })),
                )
                    .into_response()
            }
            ApplicationError::WebhookError(ref msg) => {
                error!("Webhook processing failed: {}", msg);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(json!({
                        "status": "error",
                        "message": msg,
                    })),
                )
                    .into_response()
            }
        }
    }
}
