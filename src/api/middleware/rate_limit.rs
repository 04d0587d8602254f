//! Rate limiting middleware using token bucket algorithm.

use governor::clock::QuantaInstant;
use governor::middleware::NoOpMiddleware;
use std::sync::Arc;
use std::time::Duration;
use tower_governor::{
    GovernorLayer,
    governor::{GovernorConfig, GovernorConfigBuilder},
    key_extractor::{KeyExtractor, PeerIpKeyExtractor, SmartIpKeyExtractor},
};

/// Requests per second replenished per client.
const PER_SECOND: u64 = 10;
/// Requests a client may send in a burst.
const BURST_SIZE: u32 = 100;

/// Interval after which one request of the quota is replenished.
const REPLENISH_PERIOD: Duration = Duration::from_millis(1000 / PER_SECOND);

fn governor_config<K>(key_extractor: K) -> GovernorConfig<K, NoOpMiddleware<QuantaInstant>>
where
    K: KeyExtractor + Clone,
{
    GovernorConfigBuilder::default()
        .key_extractor(key_extractor)
        .period(REPLENISH_PERIOD)
        .burst_size(BURST_SIZE)
        .finish()
        .expect("rate limit quota is non-zero")
}

fn governor_layer<K>(key_extractor: K) -> GovernorLayer<K, NoOpMiddleware<QuantaInstant>, axum::body::Body>
where
    K: KeyExtractor + Clone,
{
    GovernorLayer::new(Arc::new(governor_config(key_extractor)))
}

/// Creates a rate limiter keyed by the socket peer address.
///
/// # Limits
///
/// - **Rate**: 10 requests per second (one every 100 ms)
/// - **Burst**: 100 requests
///
/// Requests exceeding the limit receive `429 Too Many Requests`.
///
/// The router must be served with `into_make_service_with_connect_info`.
pub fn layer() -> GovernorLayer<PeerIpKeyExtractor, NoOpMiddleware<QuantaInstant>, axum::body::Body>
{
    governor_layer(PeerIpKeyExtractor)
}

/// Same limits as [`layer`], keyed by `X-Forwarded-For`, `X-Real-IP` or
/// `Forwarded`, falling back to the peer address.
///
/// Only use behind a trusted reverse proxy; clients can forge these headers.
pub fn proxied_layer()
-> GovernorLayer<SmartIpKeyExtractor, NoOpMiddleware<QuantaInstant>, axum::body::Body> {
    governor_layer(SmartIpKeyExtractor)
}
