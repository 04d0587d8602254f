//! Owner resource orchestration.

use crate::api::dto::OwnerRequest;
use crate::application::mappers::map_owner;
use crate::domain::entities::Owner;
use crate::domain::repositories::OwnerRepository;
use crate::error::AppError;
use std::sync::Arc;

/// Service for creating, finding and updating owners.
pub struct OwnerService<R: OwnerRepository + ?Sized> {
    repository: Arc<R>,
}

impl<R: OwnerRepository + ?Sized> OwnerService<R> {
    /// Creates a new owner service.
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    /// Creates an owner from the request and returns its durable form.
    ///
    /// # Errors
    ///
    /// Returns the store's error if saving fails.
    pub async fn create_owner(&self, request: &OwnerRequest) -> Result<Owner, AppError> {
        let mut owner = Owner::new();
        map_owner(&mut owner, request);

        let saved = self.repository.save(owner).await?;
        tracing::info!(owner_id = ?saved.id(), "Saving owner");
        Ok(saved)
    }

    /// Looks up an owner. Absence is not an error.
    ///
    /// # Errors
    ///
    /// Returns the store's error if the lookup fails.
    pub async fn find_owner(&self, owner_id: i32) -> Result<Option<Owner>, AppError> {
        self.repository.find_by_id(owner_id).await
    }

    /// Lists all owners in store order.
    ///
    /// # Errors
    ///
    /// Returns the store's error if the lookup fails.
    pub async fn find_all(&self) -> Result<Vec<Owner>, AppError> {
        self.repository.find_all().await
    }

    /// Overwrites every field of an existing owner.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] with `"Owner {id} not found"` if the owner
    /// does not exist; nothing is saved in that case.
    pub async fn update_owner(&self, owner_id: i32, request: &OwnerRequest) -> Result<(), AppError> {
        let mut owner = self
            .repository
            .find_by_id(owner_id)
            .await?
            .ok_or_else(|| AppError::entity_not_found("Owner", owner_id))?;

        map_owner(&mut owner, request);
        tracing::info!(owner_id, "Saving owner");
        self.repository.save(owner).await?;
        Ok(())
    }
}
