//! Pet resource orchestration.
//!
//! Pets are created under an existing owner. The owner lookup happens first,
//! so a missing owner never leads to pet type lookups or writes.

use crate::api::dto::{PetDetails, PetRequest};
use crate::application::mappers::to_pet_details;
use crate::domain::entities::{Owner, Pet, PetType};
use crate::domain::repositories::{OwnerRepository, PetRepository};
use crate::error::AppError;
use std::sync::Arc;

/// Service for pet types, pet creation, pet updates and pet details.
pub struct PetService<O: OwnerRepository + ?Sized, P: PetRepository + ?Sized> {
    owners: Arc<O>,
    pets: Arc<P>,
}

impl<O: OwnerRepository + ?Sized, P: PetRepository + ?Sized> PetService<O, P> {
    /// Creates a new pet service.
    pub fn new(owners: Arc<O>, pets: Arc<P>) -> Self {
        Self { owners, pets }
    }

    /// Lists the pet type catalogue.
    ///
    /// # Errors
    ///
    /// Returns the store's error if the lookup fails.
    pub async fn get_pet_types(&self) -> Result<Vec<PetType>, AppError> {
        self.pets.find_pet_types().await
    }

    /// Registers a new pet for an existing owner.
    ///
    /// An unknown `typeId` leaves the pet without a type.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] with `"Owner {id} not found"` if the owner
    /// does not exist.
    pub async fn create_pet(&self, owner_id: i32, request: &PetRequest) -> Result<Pet, AppError> {
        let mut owner = self
            .owners
            .find_by_id(owner_id)
            .await?
            .ok_or_else(|| AppError::entity_not_found("Owner", owner_id))?;

        let pet_type = self.pets.find_pet_type_by_id(request.type_id).await?;
        let pet = register_pet(&mut owner, request, pet_type);

        tracing::info!(owner_id, name = %pet.name, "Saving new pet");
        self.pets.save(pet).await
    }

    /// Overwrites an existing pet, identified by `request.id`.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] with `"Pet {id} not found"` if the pet
    /// does not exist.
    pub async fn update_pet(&self, request: &PetRequest) -> Result<(), AppError> {
        let mut pet = self.find_pet(request.id).await?;
        self.apply(&mut pet, request).await?;
        Ok(())
    }

    /// Details projection of a pet, including its owner's full name.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] with `"Pet {id} not found"` if the pet
    /// does not exist.
    pub async fn find_pet_details(&self, pet_id: i32) -> Result<PetDetails, AppError> {
        let pet = self.find_pet(pet_id).await?;
        Ok(to_pet_details(&pet))
    }

    async fn find_pet(&self, pet_id: i32) -> Result<Pet, AppError> {
        self.pets
            .find_by_id(pet_id)
            .await?
            .ok_or_else(|| AppError::entity_not_found("Pet", pet_id))
    }

    async fn apply(&self, pet: &mut Pet, request: &PetRequest) -> Result<Pet, AppError> {
        let pet_type = self.pets.find_pet_type_by_id(request.type_id).await?;
        fill_pet(pet, request, pet_type);

        tracing::info!(pet_id = ?pet.id(), name = %pet.name, "Saving pet");
        self.pets.save(pet.clone()).await
    }
}

/// Copies the request onto `pet`; an unresolved type leaves the current one.
fn fill_pet(pet: &mut Pet, request: &PetRequest, pet_type: Option<PetType>) {
    pet.name = request.name.clone();
    pet.birth_date = request.birth_date;
    if let Some(pet_type) = pet_type {
        pet.pet_type = Some(pet_type);
    }
}

/// Builds a fully populated pet and only then adds it to `owner`, so the
/// owner's set holds the same field values that get persisted.
fn register_pet(owner: &mut Owner, request: &PetRequest, pet_type: Option<PetType>) -> Pet {
    let mut pet = Pet::new();
    fill_pet(&mut pet, request, pet_type);
    owner.add_pet(&mut pet);
    pet
}
