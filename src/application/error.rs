use serde_json::Value;

#[derive(Debug)]
pub enum ApplicationError {
    BadRequest(String),
    Unauthorized,
    /// Non-2xx from the vendor while issuing a widget token. The upstream
    /// status code is propagated to the caller verbatim.
    UpstreamError { status: u16, details: Value },
    InternalError(String),
    /// Failure while processing an accepted webhook event (token fetch,
    /// metadata fetch or download).
    WebhookError(String),
}
