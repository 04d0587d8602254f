//! Core domain entities of the clinic.
//!
//! # Entity Types
//!
//! - [`Owner`] - Aggregate root owning a set of pets
//! - [`Pet`] - Member of the owner aggregate, with a back-reference to its owner
//! - [`PetType`] - Immutable classification value referenced by pets
//! - [`Visit`] - Separate aggregate referring to a pet by identifier only
//!
//! # Identity
//!
//! Owners and pets carry an [`Identity`]: transient until the store assigns
//! an identifier, durable afterwards. Equality of those entities follows the
//! identity, never the field values.

pub mod identity;
pub mod owner;
pub mod pet;
pub mod pet_type;
pub mod visit;

pub use identity::{Identity, InstanceToken};
pub use owner::{Owner, OwnerRef, PetList};
pub use pet::Pet;
pub use pet_type::PetType;
pub use visit::Visit;
