//! Conversions between request projections and domain entities.

use crate::api::dto::{OwnerRequest, PetDetails};
use crate::domain::entities::{Owner, Pet};

/// Copies the request's fields onto `owner`, overwriting every one of them.
///
/// Identity and pets are left alone. Returns the same owner for chaining.
pub fn map_owner<'a>(owner: &'a mut Owner, request: &OwnerRequest) -> &'a mut Owner {
    owner.first_name = request.first_name.clone();
    owner.last_name = request.last_name.clone();
    owner.address = request.address.clone();
    owner.city = request.city.clone();
    owner.telephone = request.telephone.clone();
    owner
}

/// Read projection of a pet with its owner's full name.
pub fn to_pet_details(pet: &Pet) -> PetDetails {
    PetDetails {
        id: pet.id(),
        name: pet.name.clone(),
        owner: pet.owner().map(|owner| owner.full_name()),
        birth_date: pet.birth_date,
        pet_type: pet.pet_type.clone(),
    }
}
