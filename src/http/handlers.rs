//! API route handlers.

use std::time::Instant;

use axum::{
    extract::{Request, State},
    http::{Method, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use serde_json::{json, Value};

use crate::http::request::RequestIdExt;
use crate::http::response::{method_not_allowed, preflight};
use crate::http::server::AppState;
use crate::observability::metrics;
use crate::relay::ProxyEnvelope;

/// Liveness check; answers the same for every method.
pub async fn health() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}

/// Relay endpoint.
/// Accepts POSTed envelopes; OPTIONS is answered without reading the body.
/// Every outcome is counted in `relay_requests_total`.
pub async fn proxy(State(state): State<AppState>, request: Request) -> Response {
    let start_time = Instant::now();
    let method = request.method().clone();

    let response = relay_request(&state, request).await;
    metrics::record_request(method.as_str(), response.status().as_u16(), start_time);
    response
}

async fn relay_request(state: &AppState, request: Request) -> Response {
    if request.method() == Method::OPTIONS {
        return preflight();
    }
    if request.method() != Method::POST {
        return method_not_allowed();
    }

    let request_id = request.request_id().to_string();
    let limit = state.max_body_bytes.unwrap_or(usize::MAX);

    let bytes = match axum::body::to_bytes(request.into_body(), limit).await {
        Ok(bytes) => bytes,
        Err(e) => {
            tracing::warn!(request_id = %request_id, error = %e, "Failed to read envelope");
            return (StatusCode::BAD_REQUEST, format!("Invalid request: {}", e)).into_response();
        }
    };

    let result = match ProxyEnvelope::from_slice(&bytes) {
        Ok(envelope) => {
            tracing::debug!(
                request_id = %request_id,
                method = %envelope.method,
                endpoint = %envelope.endpoint,
                "Relaying envelope"
            );
            state.relay.handle(envelope).await
        }
        Err(e) => Err(e),
    };

    match result {
        Ok(relayed) => {
            for path in &relayed.degraded {
                metrics::record_degraded(*path);
            }
            tracing::info!(
                request_id = %request_id,
                status = %relayed.status,
                bytes = relayed.body.len(),
                "Upstream responded"
            );
            relayed.into_response()
        }
        Err(e) => {
            if e.status().is_server_error() {
                tracing::error!(request_id = %request_id, error = %e, "Relay failed");
            } else {
                tracing::warn!(request_id = %request_id, error = %e, "Rejected envelope");
            }
            e.into_response()
        }
    }
}
