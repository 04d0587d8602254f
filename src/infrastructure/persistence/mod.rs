//! PostgreSQL repository implementations.
//!
//! Concrete implementations of the domain repository traits using SQLx
//! runtime queries mapped through `FromRow` row structs.
//!
//! # Repositories
//!
//! - [`PgOwnerRepository`] - Owners with their pets
//! - [`PgPetRepository`] - Pets and the pet type catalogue
//! - [`PgVisitRepository`] - Visits keyed by pet id

pub mod pg_owner_repository;
pub mod pg_pet_repository;
pub mod pg_visit_repository;

pub use pg_owner_repository::PgOwnerRepository;
pub use pg_pet_repository::PgPetRepository;
pub use pg_visit_repository::PgVisitRepository;
