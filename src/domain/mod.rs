//! Domain layer containing the clinic's entities and store contracts.
//!
//! # Architecture
//!
//! - [`entities`] - Owner aggregate, pet types, and visits
//! - [`repositories`] - Entity store trait definitions
//!
//! The domain layer has no dependencies on infrastructure or presentation
//! layers; services in [`crate::application`] orchestrate it.

pub mod entities;
pub mod repositories;
