use axum::{body::Body, http::Request, middleware::Next, response::Response};
use std::time::Instant;
use tracing::Instrument;

/// Log method, path, status and latency of every request under a request id
pub async fn log_request(req: Request<Body>, next: Next) -> Response {
    let request_id = uuid::Uuid::new_v4();
    let method = req.method().clone();
    let path = req.uri().path().to_string();
    let started = Instant::now();

    let span = tracing::info_span!("request", %request_id, %method, %path);
    let response = next.run(req).instrument(span).await;

    let status = response.status().as_u16();
    let latency_ms = started.elapsed().as_millis() as u64;

    if response.status().is_server_error() {
        tracing::error!(%request_id, %method, %path, status, latency_ms, "Request failed");
    } else if response.status().is_client_error() {
        tracing::warn!(%request_id, %method, %path, status, latency_ms, "Request rejected");
    } else {
        tracing::info!(%request_id, %method, %path, status, latency_ms, "Request completed");
    }

    response
}
