use async_trait::async_trait;

use crate::{
    domain::models::{
        book::BookInfo,
        token::{ApiToken, WidgetToken},
    },
    services::OcrolusError,
};

/// Outbound vendor API surface. Controllers depend on this trait so the
/// reqwest client can be swapped out at the seam.
#[async_trait]
pub trait OcrolusApi: Send + Sync {
    /// Mints a widget session token scoped to one upload session,
    /// correlated to the host application via `custom_id`.
    async fn issue_widget_token(
        &self,
        custom_id: &str,
        book_name: &str,
    ) -> Result<WidgetToken, OcrolusError>;

    /// Exchanges the stored client credentials for a general API token.
    async fn fetch_api_token(&self) -> Result<ApiToken, OcrolusError>;

    async fn get_book_info(&self, token: &str, book_uuid: &str)
        -> Result<BookInfo, OcrolusError>;

    async fn download_document(&self, token: &str, doc_uuid: &str)
        -> Result<Vec<u8>, OcrolusError>;
}
