use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde_json::{json, Value};

use crate::{
    application::services::OcrolusApi,
    domain::{
        config::Config,
        models::{
            book::BookInfo,
            token::{ApiToken, WidgetToken},
        },
    },
    services::error::OcrolusError,
};

const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Reqwest-backed client for the three vendor services: the widget token
/// issuer, the OAuth issuer and the document API.
pub struct OcrolusClient {
    client: Client,
    widget_url: String,
    auth_url: String,
    api_url: String,
    widget_uuid: String,
    client_id: String,
    client_secret: String,
}

impl OcrolusClient {
    pub fn new(config: &Config) -> Result<Self, OcrolusError> {
        let client = Client::builder().timeout(REQUEST_TIMEOUT).build()?;

        Ok(Self {
            client,
            widget_url: config.widget_url.trim_end_matches('/').to_string(),
            auth_url: config.auth_url.trim_end_matches('/').to_string(),
            api_url: config.api_url.trim_end_matches('/').to_string(),
            widget_uuid: config.widget_uuid.clone(),
            client_id: config.client_id.clone(),
            client_secret: config.client_secret.clone(),
        })
    }
}

async fn reject_non_2xx(response: reqwest::Response) -> Result<reqwest::Response, OcrolusError> {
    if response.status().is_success() {
        return Ok(response);
    }

    let status = response.status().as_u16();
    let body = response.text().await.unwrap_or_default();
    Err(OcrolusError::Upstream { status, body })
}

#[async_trait]
impl OcrolusApi for OcrolusClient {
    async fn issue_widget_token(
        &self,
        custom_id: &str,
        book_name: &str,
    ) -> Result<WidgetToken, OcrolusError> {
        let url = format!("{}/v1/widget/{}/token", self.widget_url, self.widget_uuid);

        let response = self
            .client
            .post(&url)
            .json(&json!({
                "client_id": self.client_id,
                "client_secret": self.client_secret,
                "custom_id": custom_id,
                "grant_type": "client_credentials",
                "book_name": book_name,
            }))
            .send()
            .await?;

        let token: WidgetToken = reject_non_2xx(response)
            .await?
            .json()
            .await
            .map_err(|e| OcrolusError::InvalidResponse(e.to_string()))?;

        if token.access_token.is_empty() {
            return Err(OcrolusError::InvalidResponse(
                "Issuer returned an empty access token".to_string(),
            ));
        }

        Ok(token)
    }

    async fn fetch_api_token(&self) -> Result<ApiToken, OcrolusError> {
        let url = format!("{}/oauth/token", self.auth_url);

        let response = self
            .client
            .post(&url)
            .json(&json!({
                "client_id": self.client_id,
                "client_secret": self.client_secret,
                "grant_type": "client_credentials",
                "audience": self.api_url,
            }))
            .send()
            .await?;

        reject_non_2xx(response)
            .await?
            .json()
            .await
            .map_err(|e| OcrolusError::InvalidResponse(e.to_string()))
    }

    async fn get_book_info(
        &self,
        token: &str,
        book_uuid: &str,
    ) -> Result<BookInfo, OcrolusError> {
        let url = format!("{}/v2/book/info", self.api_url);

        let response = self
            .client
            .get(&url)
            .query(&[("book_uuid", book_uuid)])
            .bearer_auth(token)
            .send()
            .await?;

        let body: Value = reject_non_2xx(response)
            .await?
            .json()
            .await
            .map_err(|e| OcrolusError::InvalidResponse(e.to_string()))?;

        // The API wraps payloads in a `response` envelope; tolerate a bare
        // body as well.
        let payload = body.get("response").cloned().unwrap_or(body);
        serde_json::from_value(payload)
            .map_err(|e| OcrolusError::InvalidResponse(format!("Malformed book info: {}", e)))
    }

    async fn download_document(
        &self,
        token: &str,
        doc_uuid: &str,
    ) -> Result<Vec<u8>, OcrolusError> {
        let url = format!("{}/v1/document/download", self.api_url);

        let response = self
            .client
            .get(&url)
            .query(&[("doc_uuid", doc_uuid)])
            .bearer_auth(token)
            .send()
            .await?;

        let bytes = reject_non_2xx(response)
            .await?
            .bytes()
            .await
            .map_err(|e| OcrolusError::Network(e.to_string()))?;

        Ok(bytes.to_vec())
    }
}
