//! HTTP middleware for request processing and protection.
//!
//! Provides rate limiting, request metrics and request tracing.

pub mod http_metrics;
pub mod rate_limit;
pub mod tracing;
