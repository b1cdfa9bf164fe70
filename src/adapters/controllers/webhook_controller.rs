use axum::{extract::State, Json};
use tracing::{error, info};

use crate::{
    adapters::{
        dto::webhook_dto::{WebhookPayload, WebhookResponse},
        state::AppState,
    },
    application::error::ApplicationError,
    domain::models::webhook::WebhookEventName,
};

pub struct WebhookController;

impl WebhookController {
    /// Handles document lifecycle callbacks from the vendor: filters by
    /// event type, guards on the book classification and downloads the
    /// finished document to local storage.
    /// POST /webhook
    pub async fn handle_event(
        State(app_state): State<AppState>,
        Json(payload): Json<WebhookPayload>,
    ) -> Result<Json<WebhookResponse>, ApplicationError> {
        info!(
            "Received webhook: {} for book {}",
            payload.event_name,
            payload.book_uuid.as_deref().unwrap_or("<unknown>")
        );

        if let Some(ref mixed) = payload.mixed_uploaded_doc_uuid {
            info!("Event references mixed uploaded doc {}", mixed);
        }

        let event = WebhookEventName::parse(&payload.event_name);
        if !event.is_accepted() {
            return Ok(Json(WebhookResponse::ignored_event(&payload.event_name)));
        }

        let book_uuid = payload
            .book_uuid
            .ok_or_else(|| ApplicationError::BadRequest("Missing book_uuid".to_string()))?;
        let doc_uuid = payload
            .doc_uuid
            .ok_or_else(|| ApplicationError::BadRequest("Missing doc_uuid".to_string()))?;

        let api_token = app_state.ocrolus.fetch_api_token().await.map_err(|e| {
            error!("API token fetch failed: {}", e);
            ApplicationError::WebhookError(e.to_string())
        })?;

        let book = app_state
            .ocrolus
            .get_book_info(&api_token.access_token, &book_uuid)
            .await
            .map_err(|e| {
                error!("Book info fetch failed for {}: {}", book_uuid, e);
                ApplicationError::WebhookError(e.to_string())
            })?;

        if !book.is_widget_book() {
            info!(
                "Ignoring event for book {}: book_type is {}, not WIDGET",
                book_uuid, book.book_type
            );
            return Ok(Json(WebhookResponse::ignored(format!(
                "Book {} is not a widget book",
                book_uuid
            ))));
        }

        let content = app_state
            .ocrolus
            .download_document(&api_token.access_token, &doc_uuid)
            .await
            .map_err(|e| {
                error!("Document download failed for {}: {}", doc_uuid, e);
                ApplicationError::WebhookError(e.to_string())
            })?;

        let filename = format!("downloaded_{}.pdf", doc_uuid);
        let target = app_state.config.download_dir.join(&filename);

        tokio::fs::create_dir_all(&app_state.config.download_dir)
            .await
            .map_err(|e| ApplicationError::WebhookError(e.to_string()))?;
        tokio::fs::write(&target, &content)
            .await
            .map_err(|e| ApplicationError::WebhookError(e.to_string()))?;

        info!(
            "Saved document {} ({} bytes) to {}",
            doc_uuid,
            content.len(),
            target.display()
        );

        Ok(Json(WebhookResponse::success(
            &payload.event_name,
            book_uuid,
            doc_uuid,
            filename,
        )))
    }
}

#[cfg(test)]
mod tests {
    use std::net::IpAddr;
    use std::path::PathBuf;
    use std::sync::Arc;

    use axum::{
        body::Body,
        http::{Request, StatusCode},
        Router,
    };
    use http_body_util::BodyExt;
    use serde_json::{json, Value};
    use tower::ServiceExt;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    use crate::{
        adapters::state::AppState,
        application::services::OcrolusApi,
        build_router,
        domain::config::Config,
        services::OcrolusClient,
    };

    fn test_config(mock_uri: &str, download_dir: PathBuf) -> Config {
        Config {
            client_id: "client-id".to_string(),
            client_secret: "client-secret".to_string(),
            widget_uuid: "widget-1".to_string(),
            port: 0,
            widget_url: mock_uri.to_string(),
            auth_url: mock_uri.to_string(),
            api_url: mock_uri.to_string(),
            allowed_ips: vec!["127.0.0.1".parse::<IpAddr>().unwrap()],
            download_dir,
        }
    }

    fn test_router(config: Config) -> Router {
        let ocrolus =
            Arc::new(OcrolusClient::new(&config).unwrap()) as Arc<dyn OcrolusApi>;
        build_router(AppState {
            config: Arc::new(config),
            ocrolus,
        })
    }

    fn webhook_request(sender_ip: &str, payload: Value) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri("/webhook")
            .header("content-type", "application/json")
            .header("X-Forwarded-For", sender_ip)
            .body(Body::from(payload.to_string()))
            .unwrap()
    }

    async fn json_body(response: axum::http::Response<Body>) -> Value {
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        serde_json::from_slice(&bytes).unwrap()
    }

    async fn mount_api_token(mock_server: &MockServer) {
        Mock::given(method("POST"))
            .and(path("/oauth/token"))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(json!({ "access_token": "api-tok" })),
            )
            .mount(mock_server)
            .await;
    }

    #[tokio::test]
    async fn unrelated_events_are_acknowledged_without_outbound_calls() {
        let mock_server = MockServer::start().await;
        let app = test_router(test_config(&mock_server.uri(), PathBuf::from("downloads")));

        let response = app
            .oneshot(webhook_request(
                "127.0.0.1",
                json!({
                    "event_name": "document.uploaded",
                    "book_uuid": "b-1",
                    "doc_uuid": "d-1",
                }),
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = json_body(response).await;
        assert_eq!(body["status"], "ignored");
        assert_eq!(body["event"], "document.uploaded");
        assert!(mock_server.received_requests().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn non_widget_books_are_ignored_without_download() {
        let mock_server = MockServer::start().await;
        mount_api_token(&mock_server).await;
        Mock::given(method("GET"))
            .and(path("/v2/book/info"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "response": { "book_uuid": "b-1", "name": "Manual Book", "book_type": "COMPLETE" },
            })))
            .mount(&mock_server)
            .await;

        let app = test_router(test_config(&mock_server.uri(), PathBuf::from("downloads")));
        let response = app
            .oneshot(webhook_request(
                "127.0.0.1",
                json!({
                    "event_name": "document.verification_succeeded",
                    "book_uuid": "b-1",
                    "doc_uuid": "d-1",
                }),
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = json_body(response).await;
        assert_eq!(body["status"], "ignored");
        assert!(body["reason"].as_str().unwrap().contains("b-1"));

        let received = mock_server.received_requests().await.unwrap();
        assert!(received
            .iter()
            .all(|r| r.url.path() != "/v1/document/download"));
    }

    #[tokio::test]
    async fn downloads_widget_book_document_to_disk() {
        let mock_server = MockServer::start().await;
        mount_api_token(&mock_server).await;
        Mock::given(method("GET"))
            .and(path("/v2/book/info"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "response": { "book_uuid": "b-2", "name": "Widget Book", "book_type": "WIDGET" },
            })))
            .mount(&mock_server)
            .await;
        let content = b"%PDF-1.4 verified document".to_vec();
        Mock::given(method("GET"))
            .and(path("/v1/document/download"))
            .respond_with(ResponseTemplate::new(200).set_body_bytes(content.clone()))
            .mount(&mock_server)
            .await;

        let download_dir = tempfile::tempdir().unwrap();
        let app = test_router(test_config(
            &mock_server.uri(),
            download_dir.path().to_path_buf(),
        ));

        let response = app
            .oneshot(webhook_request(
                "127.0.0.1",
                json!({
                    "event_name": "document.classification_succeeded",
                    "book_uuid": "b-2",
                    "doc_uuid": "d-2",
                }),
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = json_body(response).await;
        assert_eq!(body["status"], "success");
        assert_eq!(body["event"], "document.classification_succeeded");
        assert_eq!(body["book_uuid"], "b-2");
        assert_eq!(body["doc_uuid"], "d-2");
        assert_eq!(body["filename"], "downloaded_d-2.pdf");

        let written =
            std::fs::read(download_dir.path().join("downloaded_d-2.pdf")).unwrap();
        assert_eq!(written, content);

        // The download must carry the freshly minted API token.
        let received = mock_server.received_requests().await.unwrap();
        let download = received
            .iter()
            .find(|r| r.url.path() == "/v1/document/download")
            .unwrap();
        assert_eq!(
            download
                .headers
                .get("authorization")
                .unwrap()
                .to_str()
                .unwrap(),
            "Bearer api-tok"
        );
        assert_eq!(
            download.url.query_pairs().find(|(k, _)| k == "doc_uuid"),
            Some(("doc_uuid".into(), "d-2".into()))
        );
    }

    #[tokio::test]
    async fn unrecognized_sender_is_rejected_before_any_outbound_call() {
        let mock_server = MockServer::start().await;
        let app = test_router(test_config(&mock_server.uri(), PathBuf::from("downloads")));

        let response = app
            .oneshot(webhook_request(
                "203.0.113.9",
                json!({
                    "event_name": "document.verification_succeeded",
                    "book_uuid": "b-1",
                    "doc_uuid": "d-1",
                }),
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        assert!(bytes.is_empty());
        assert!(mock_server.received_requests().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn upstream_failure_surfaces_as_webhook_error() {
        let mock_server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/oauth/token"))
            .respond_with(ResponseTemplate::new(503))
            .mount(&mock_server)
            .await;

        let app = test_router(test_config(&mock_server.uri(), PathBuf::from("downloads")));
        let response = app
            .oneshot(webhook_request(
                "127.0.0.1",
                json!({
                    "event_name": "document.verification_succeeded",
                    "book_uuid": "b-1",
                    "doc_uuid": "d-1",
                }),
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let body = json_body(response).await;
        assert_eq!(body["status"], "error");
        assert!(body["message"].as_str().is_some());
    }
}
