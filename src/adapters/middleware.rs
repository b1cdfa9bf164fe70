use std::net::{IpAddr, SocketAddr};
use std::sync::Arc;

use axum::{
    body::Body,
    extract::{ConnectInfo, Request, State},
    http::{HeaderMap, StatusCode},
    middleware::Next,
    response::{IntoResponse, Response},
};
use tracing::warn;

use crate::domain::config::Config;

/// Middleware guarding the webhook route: the sender must resolve to one of
/// the allowlisted vendor egress addresses or the request is rejected with
/// an empty 401 before the handler runs. The check cannot be disabled.
pub async fn verify_webhook_source(
    State(config): State<Arc<Config>>,
    headers: HeaderMap,
    request: Request<Body>,
    next: Next,
) -> Response {
    let forwarded = headers
        .get("X-Forwarded-For")
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.split(',').next())
        .map(str::trim)
        .and_then(|s| s.parse::<IpAddr>().ok());

    // Behind a proxy the first X-Forwarded-For hop is the original sender;
    // without one, fall back to the peer address.
    let sender = forwarded.or_else(|| {
        request
            .extensions()
            .get::<ConnectInfo<SocketAddr>>()
            .map(|info| info.0.ip())
    });

    match sender {
        Some(ip) if config.allowed_ips.contains(&ip) => next.run(request).await,
        Some(ip) => {
            warn!("Rejected webhook from unrecognized sender {}", ip);
            StatusCode::UNAUTHORIZED.into_response()
        }
        None => {
            warn!("Rejected webhook with no resolvable sender address");
            StatusCode::UNAUTHORIZED.into_response()
        }
    }
}
