//! Pet entity, a member of the owner aggregate.

use std::hash::{Hash, Hasher};

use chrono::NaiveDate;

use super::identity::Identity;
use super::owner::OwnerRef;
use super::pet_type::PetType;

/// A pet registered at the clinic.
///
/// Equality is deferred to the persisted identifier: two pets are equal when
/// both carry the same store-assigned id, or when they are the same instance.
/// Field values (name, birth date, type, owner) never take part in equality,
/// so two transient pets with matching fields are still different pets.
#[derive(Debug, Clone)]
pub struct Pet {
    identity: Identity,
    pub name: String,
    pub birth_date: Option<NaiveDate>,
    pub pet_type: Option<PetType>,
    owner: Option<OwnerRef>,
}

impl Pet {
    /// Creates a transient pet with no owner and no type.
    pub fn new() -> Self {
        Self {
            identity: Identity::transient(),
            name: String::new(),
            birth_date: None,
            pet_type: None,
            owner: None,
        }
    }

    /// Creates a pet that already carries a persisted identifier.
    pub fn with_id(id: i32) -> Self {
        Self {
            identity: Identity::assigned(id),
            ..Self::new()
        }
    }

    pub fn id(&self) -> Option<i32> {
        self.identity.id()
    }

    pub fn identity(&self) -> Identity {
        self.identity
    }

    /// Records the identifier assigned by the store.
    pub fn assign_id(&mut self, id: i32) {
        self.identity = Identity::assigned(id);
    }

    /// Back-reference to the owning owner, if the pet has been associated.
    pub fn owner(&self) -> Option<&OwnerRef> {
        self.owner.as_ref()
    }

    /// Points the back-reference at `owner`.
    ///
    /// This does not register the pet with the owner's collection; use
    /// [`super::Owner::add_pet`] for that.
    pub fn set_owner(&mut self, owner: OwnerRef) {
        self.owner = Some(owner);
    }
}

impl Default for Pet {
    fn default() -> Self {
        Self::new()
    }
}

impl PartialEq for Pet {
    fn eq(&self, other: &Self) -> bool {
        self.identity == other.identity
    }
}

impl Eq for Pet {}

impl Hash for Pet {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.identity.hash(state);
    }
}
