//! Infrastructure layer for external integrations.
//!
//! This layer implements the repository traits defined by the domain layer.
//!
//! # Modules
//!
//! - [`memory`] - In-process store for the `memory` backend and tests
//! - [`persistence`] - PostgreSQL repository implementations
//! - [`seed`] - Pet type catalogue and sample clinic data

pub mod memory;
pub mod persistence;
pub mod seed;
