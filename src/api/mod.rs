//! REST API layer for HTTP request/response handling.
//!
//! This layer translates HTTP requests into service calls and formats
//! responses according to API contracts.
//!
//! # Modules
//!
//! - [`dto`] - Data Transfer Objects for request/response serialization
//! - [`extract`] - Path, query and body extractors with JSON rejections
//! - [`handlers`] - HTTP request handlers
//! - [`middleware`] - Rate limiting, metrics and request tracing
//! - [`routes`] - Route configuration and composition
//! - [`validation`] - Path parameter checks

pub mod dto;
pub mod extract;
pub mod handlers;
pub mod middleware;
pub mod routes;
pub mod validation;
