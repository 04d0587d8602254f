//! Request counters and latency histograms.
//!
//! Records through the `metrics` facade; nothing is exported unless the
//! binary installs a recorder.

use axum::{
    extract::{MatchedPath, Request, State},
    middleware::Next,
    response::Response,
};
use metrics::Label;
use std::sync::Arc;
use std::time::Instant;

/// Labels shared by every recorded sample.
#[derive(Debug, Clone)]
pub struct MetricsConfig {
    pub application: Arc<str>,
}

impl MetricsConfig {
    pub fn new(application: impl Into<Arc<str>>) -> Self {
        Self {
            application: application.into(),
        }
    }
}

/// Records `http_requests_total` and `http_requests_duration_seconds`.
///
/// Labels: `application`, `method`, `path` (the matched route template, so
/// ids do not explode cardinality) and `status`.
///
/// Install with `route_layer` so [`MatchedPath`] is available.
pub async fn layer(State(config): State<MetricsConfig>, req: Request, next: Next) -> Response {
    let start = Instant::now();
    let method = req.method().to_string();
    let path = req
        .extensions()
        .get::<MatchedPath>()
        .map(|p| p.as_str().to_owned())
        .unwrap_or_else(|| req.uri().path().to_owned());

    let response = next.run(req).await;

    let labels = vec![
        Label::new("application", config.application.to_string()),
        Label::new("method", method),
        Label::new("path", path),
        Label::new("status", response.status().as_u16().to_string()),
    ];

    metrics::counter!("http_requests_total", labels.clone()).increment(1);
    metrics::histogram!("http_requests_duration_seconds", labels)
        .record(start.elapsed().as_secs_f64());

    response
}
