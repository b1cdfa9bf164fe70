use serde::{Deserialize, Serialize};

/// Payload delivered by the vendor webhook. Field names are the vendor's
/// own (snake_case).
#[derive(Debug, Deserialize)]
pub struct WebhookPayload {
    pub event_name: String,
    #[serde(default)]
    pub book_uuid: Option<String>,
    #[serde(default)]
    pub doc_uuid: Option<String>,
    #[serde(default)]
    pub mixed_uploaded_doc_uuid: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct WebhookResponse {
    pub status: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub event: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub book_uuid: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub doc_uuid: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub filename: Option<String>,
}

impl WebhookResponse {
    pub fn ignored_event(event: &str) -> Self {
        Self {
            status: "ignored".to_string(),
            event: Some(event.to_string()),
            reason: None,
            book_uuid: None,
            doc_uuid: None,
            filename: None,
        }
    }

    pub fn ignored(reason: String) -> Self {
        Self {
            status: "ignored".to_string(),
            event: None,
            reason: Some(reason),
            book_uuid: None,
            doc_uuid: None,
            filename: None,
        }
    }

    pub fn success(event: &str, book_uuid: String, doc_uuid: String, filename: String) -> Self {
        Self {
            status: "success".to_string(),
            event: Some(event.to_string()),
            reason: None,
            book_uuid: Some(book_uuid),
            doc_uuid: Some(doc_uuid),
            filename: Some(filename),
        }
    }
}
