//! Repository trait for visits.

use crate::domain::entities::Visit;
use crate::error::AppError;
use async_trait::async_trait;

/// Persistence contract for visits, queried by pet identifier value.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait VisitRepository: Send + Sync {
    /// Visits of one pet.
    ///
    /// # Errors
    ///
    /// Returns an error when the store fails.
    async fn find_by_pet_id(&self, pet_id: i32) -> Result<Vec<Visit>, AppError>;

    /// Visits of any of the given pets.
    ///
    /// # Errors
    ///
    /// Returns an error when the store fails.
    async fn find_by_pet_id_in(&self, pet_ids: Vec<i32>) -> Result<Vec<Visit>, AppError>;

    /// Persists a visit and returns it with its identifier assigned.
    ///
    /// # Errors
    ///
    /// Returns an error when the store fails.
    async fn save(&self, visit: Visit) -> Result<Visit, AppError>;
}
