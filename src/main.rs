mod adapters;
mod application;
mod domain;
mod services;

use std::net::SocketAddr;
use std::sync::Arc;

use adapters::{
    controllers::{
        health_controller::HealthController, token_controller::TokenController,
        webhook_controller::WebhookController,
    },
    middleware::verify_webhook_source,
    state::AppState,
};
use application::services::OcrolusApi;
use axum::{
    middleware,
    routing::{get, post},
    Router,
};
use domain::config::Config;
use services::OcrolusClient;
use tower_http::cors::{Any, CorsLayer};

fn build_router(app_state: AppState) -> Router {
    // Webhook deliveries must come from an allowlisted vendor address.
    let webhook_routes = Router::new()
        .route("/webhook", post(WebhookController::handle_event))
        .route_layer(middleware::from_fn_with_state(
            app_state.clone(),
            verify_webhook_source,
        ));

    let public_routes = Router::new()
        .route("/", get(HealthController::service_info))
        .route("/health", get(HealthController::health_check))
        .route("/token", post(TokenController::issue_token));

    Router::new()
        .merge(webhook_routes)
        .merge(public_routes)
        .with_state(app_state)
}

#[tokio::main]
async fn main() {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    // Credentials must be present before any port is bound
    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            tracing::error!("ERROR: {}", e);
            std::process::exit(1);
        }
    };

    tracing::info!(
        "Starting ocrolus-widget-proxy for widget {}",
        config.widget_uuid
    );

    // Configure CORS
    let cors = if let Ok(allowed_origins) = std::env::var("CORS_ALLOWED_ORIGINS") {
        // Parse comma-separated origins
        let origins: Vec<_> = allowed_origins
            .split(',')
            .map(|s| s.trim().parse().expect("Invalid CORS origin"))
            .collect();
        CorsLayer::new()
            .allow_origin(origins)
            .allow_methods(Any)
            .allow_headers(Any)
    } else {
        // Allow all origins if not specified (only for development)
        CorsLayer::permissive()
    };

    let ocrolus = match OcrolusClient::new(&config) {
        Ok(client) => Arc::new(client) as Arc<dyn OcrolusApi>,
        Err(e) => {
            tracing::error!("ERROR: Failed to create Ocrolus client: {}", e);
            std::process::exit(1);
        }
    };

    let port = config.port;
    let app_state = AppState {
        config: Arc::new(config),
        ocrolus,
    };

    let router = build_router(app_state).layer(cors);

    // Start the server
    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{}", port))
        .await
        .expect("Failed to bind to port");

    tracing::info!("Server listening on 0.0.0.0:{}", port);

    axum::serve(
        listener,
        router.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .await
    .expect("Failed to start server");
}
