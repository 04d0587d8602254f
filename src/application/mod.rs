//! Application layer services implementing the resource orchestration.
//!
//! Services consume repository traits and provide the operations HTTP
//! handlers call. They translate request projections into entity changes,
//! raise [`crate::error::AppError::NotFound`] for missing owners and pets, and
//! pass store failures through unchanged.
//!
//! # Available Services
//!
//! - [`services::OwnerService`] - Owner creation, lookup and full update
//! - [`services::PetService`] - Pet types, pet creation, update and details
//! - [`services::VisitService`] - Visit recording and lookups by pet

pub mod mappers;
pub mod services;
