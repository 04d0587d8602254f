//! HTTP request handlers for API endpoints.
//!
//! Each handler module corresponds to a logical grouping of endpoints.

pub mod health;
pub mod owners;
pub mod pets;
pub mod visits;

pub use health::health_handler;
pub use owners::{create_owner_handler, find_owner_handler, owner_list_handler, update_owner_handler};
pub use pets::{create_pet_handler, pet_details_handler, pet_types_handler, update_pet_handler};
pub use visits::{create_visit_handler, pet_visits_handler, visits_by_pets_handler};
