//! Repository trait definitions for the domain layer.
//!
//! These traits are the entity store the services depend on. Concrete stores
//! live in `crate::infrastructure`.
//!
//! # Available Repositories
//!
//! - [`OwnerRepository`] - Owner aggregate (owners with their pets)
//! - [`PetRepository`] - Pets and the pet type catalogue
//! - [`VisitRepository`] - Visit records keyed by pet identifier
//!
//! Mock implementations are generated with `mockall` for unit tests.

pub mod owner_repository;
pub mod pet_repository;
pub mod visit_repository;

pub use owner_repository::OwnerRepository;
pub use pet_repository::PetRepository;
pub use visit_repository::VisitRepository;

#[cfg(test)]
pub use owner_repository::MockOwnerRepository;
#[cfg(test)]
pub use pet_repository::MockPetRepository;
#[cfg(test)]
pub use visit_repository::MockVisitRepository;
