//! Repository trait for the owner aggregate.

use crate::domain::entities::Owner;
use crate::error::AppError;
use async_trait::async_trait;

/// Persistence contract for owners.
///
/// Owners are returned with their pets loaded.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgOwnerRepository`] - PostgreSQL implementation
/// - [`crate::infrastructure::memory::InMemoryStore`] - In-process store
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait OwnerRepository: Send + Sync {
    /// Finds an owner by its identifier.
    ///
    /// # Errors
    ///
    /// Returns an error only when the store itself fails; a missing owner is `Ok(None)`.
    async fn find_by_id(&self, id: i32) -> Result<Option<Owner>, AppError>;

    /// Lists every owner in store order.
    ///
    /// # Errors
    ///
    /// Returns an error when the store fails.
    async fn find_all(&self) -> Result<Vec<Owner>, AppError>;

    /// Inserts a transient owner or overwrites a durable one, together with
    /// its pets, and returns the durable form.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if a durable owner no longer exists.
    /// Returns [`AppError::Database`] on database errors.
    async fn save(&self, owner: Owner) -> Result<Owner, AppError>;
}
