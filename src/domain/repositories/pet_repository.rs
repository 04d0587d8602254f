//! Repository trait for pets and pet types.

use crate::domain::entities::{Pet, PetType};
use crate::error::AppError;
use async_trait::async_trait;

/// Persistence contract for pets and the pet type catalogue.
///
/// Loaded pets carry their type and a reference to their owner.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait PetRepository: Send + Sync {
    /// Finds a pet by its identifier.
    ///
    /// # Errors
    ///
    /// Returns an error only when the store itself fails.
    async fn find_by_id(&self, id: i32) -> Result<Option<Pet>, AppError>;

    /// Inserts a transient pet or overwrites a durable one.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if the pet has no persisted owner.
    /// Returns [`AppError::NotFound`] if a durable pet no longer exists.
    async fn save(&self, pet: Pet) -> Result<Pet, AppError>;

    /// Lists all pet types ordered by name.
    ///
    /// # Errors
    ///
    /// Returns an error when the store fails.
    async fn find_pet_types(&self) -> Result<Vec<PetType>, AppError>;

    /// Resolves a pet type by identifier.
    ///
    /// # Errors
    ///
    /// Returns an error only when the store itself fails.
    async fn find_pet_type_by_id(&self, id: i32) -> Result<Option<PetType>, AppError>;
}
