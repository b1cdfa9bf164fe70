use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize, Default)]
pub struct TokenRequest {
    #[serde(rename = "userId")]
    pub user_id: Option<String>,
    #[serde(rename = "bookName")]
    pub book_name: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct TokenResponse {
    #[serde(rename = "accessToken")]
    pub access_token: String,
    #[serde(rename = "expiresIn")]
    pub expires_in: u64,
    #[serde(rename = "tokenType")]
    pub token_type: String,
}
