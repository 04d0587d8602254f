//! Business logic services for the application layer.

pub mod owner_service;
pub mod pet_service;
pub mod visit_service;

pub use owner_service::OwnerService;
pub use pet_service::PetService;
pub use visit_service::VisitService;
