use axum::{body::Bytes, extract::State, Json};
use chrono::Utc;
use tracing::{error, info};

use crate::{
    adapters::{
        dto::token_dto::{TokenRequest, TokenResponse},
        state::AppState,
    },
    application::error::ApplicationError,
};

const DEFAULT_BOOK_NAME: &str = "Widget Book";

pub struct TokenController;

impl TokenController {
    /// Exchanges the stored client credentials for a short-lived widget
    /// session token.
    /// POST /token
    /// Body: {} or {"userId": "...", "bookName": "..."} - both optional
    pub async fn issue_token(
        State(app_state): State<AppState>,
        body: Bytes,
    ) -> Result<Json<TokenResponse>, ApplicationError> {
        // The frontend may POST with no body at all; treat that the same as
        // an empty JSON object.
        let request: TokenRequest = if body.is_empty() {
            TokenRequest::default()
        } else {
            serde_json::from_slice(&body).map_err(|e| {
                ApplicationError::BadRequest(format!("Invalid JSON body: {}", e))
            })?
        };

        let custom_id = request
            .user_id
            .unwrap_or_else(|| format!("user-{}", Utc::now().timestamp()));
        let book_name = request
            .book_name
            .unwrap_or_else(|| DEFAULT_BOOK_NAME.to_string());

        info!("Issuing widget token for custom_id: {}", custom_id);

        let token = app_state
            .ocrolus
            .issue_widget_token(&custom_id, &book_name)
            .await
            .map_err(|e| {
                error!("Ocrolus token request failed: {}", e);
                ApplicationError::from(e)
            })?;

        Ok(Json(TokenResponse {
            access_token: token.access_token,
            expires_in: token.expires_in,
            token_type: token.token_type,
        }))
    }
}
