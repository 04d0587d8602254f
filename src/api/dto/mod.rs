//! Data Transfer Objects for API requests and responses.
//!
//! All DTOs use Serde for JSON serialization/deserialization and validator
//! for input validation. Field names are camelCase on the wire and dates
//! use the `yyyy-MM-dd` format.

pub mod health;
pub mod owner;
pub mod pet;
pub mod visit;

pub use owner::{OwnerRequest, OwnerResponse, PetResponse};
pub use pet::{PetDetails, PetRequest};
pub use visit::{VisitRequest, VisitResponse, Visits, VisitsQuery};
