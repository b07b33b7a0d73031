use axum::{http::Request, middleware::Next, response::Response};
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Instant;
use tracing::info;

static REQUEST_COUNTER: AtomicU64 = AtomicU64::new(0);

pub async fn logger<B>(req: Request<B>, next: Next<B>) -> Response {
    let request_id = REQUEST_COUNTER.fetch_add(1, Ordering::Relaxed);
    let method = req.method().clone();
    let uri = req.uri().clone();
    let start = Instant::now();

    let response = next.run(req).await;
    let status = response.status().as_u16();
    let elapsed = start.elapsed().as_millis();

    info!(request_id = request_id, method = %method, uri = %uri, status = status, elapsed_ms = elapsed, "Request log");
    response
}
