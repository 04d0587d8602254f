//! Top-level router configuration.
//!
//! # Route Structure
//!
//! - `GET /health`        - Store reachability and version (public, not rate limited)
//! - customers routes     - Owners, pets, pet types (when `customers` is served)
//! - visits routes        - Visits (when `visits` is served)
//!
//! # Middleware
//!
//! - **Tracing** - Structured request/response logging
//! - **Metrics** - Request counter and latency histogram per matched route
//! - **Rate limiting** - Per-IP token bucket (configurable for proxy deployments)
//! - **Path normalization** - Trailing slash handling

use crate::api::handlers::health_handler;
use crate::api::middleware::http_metrics::{self, MetricsConfig};
use crate::api::middleware::{rate_limit, tracing};
use crate::api::routes::{customer_routes, visit_routes};
use crate::config::{Config, ServiceKind};
use crate::state::AppState;
use axum::routing::get;
use axum::{Router, middleware};
use tower::Layer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};

/// Route groups of the selected services, without middleware or `/health`.
pub fn service_routes(services: &[ServiceKind]) -> Router<AppState> {
    services
        .iter()
        .fold(Router::new(), |router, kind| match kind {
            ServiceKind::Customers => router.merge(customer_routes()),
            ServiceKind::Visits => router.merge(visit_routes()),
        })
}

/// Constructs the application router with all routes and middleware.
///
/// # Arguments
///
/// - `state` - shared application state injected into all handlers
/// - `config` - selects the served route groups, the metrics `application`
///   label and the rate limit key; with `behind_proxy` the client IP comes
///   from `X-Forwarded-For` / `X-Real-IP`
///
/// The returned service must be served with connect info, since the rate
/// limiter keys on the peer address.
pub fn app_router(state: AppState, config: &Config) -> NormalizePath<Router> {
    let metrics = MetricsConfig::new(config.metrics_application.as_str());

    let services = service_routes(&config.services)
        .route_layer(middleware::from_fn_with_state(metrics, http_metrics::layer));

    let services = if config.behind_proxy {
        services.layer(rate_limit::proxied_layer())
    } else {
        services.layer(rate_limit::layer())
    };

    let router = Router::new()
        .route("/health", get(health_handler))
        .merge(services)
        .with_state(state)
        .layer(tracing::layer());

    NormalizePathLayer::trim_trailing_slash().layer(router)
}
