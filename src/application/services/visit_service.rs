//! Visit resource orchestration.

use crate::domain::entities::Visit;
use crate::domain::repositories::VisitRepository;
use crate::error::AppError;
use std::sync::Arc;

/// Service for recording and listing visits.
pub struct VisitService<R: VisitRepository + ?Sized> {
    repository: Arc<R>,
}

impl<R: VisitRepository + ?Sized> VisitService<R> {
    /// Creates a new visit service.
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    /// Records a visit for `pet_id`.
    ///
    /// The pet id from the caller replaces whatever the visit carried.
    ///
    /// # Errors
    ///
    /// Returns the store's error if saving fails.
    pub async fn create_visit(&self, pet_id: i32, mut visit: Visit) -> Result<Visit, AppError> {
        visit.pet_id = pet_id;
        tracing::info!(pet_id, "Saving visit");
        self.repository.save(visit).await
    }

    /// Visits of a single pet.
    ///
    /// # Errors
    ///
    /// Returns the store's error if the lookup fails.
    pub async fn find_by_pet_id(&self, pet_id: i32) -> Result<Vec<Visit>, AppError> {
        self.repository.find_by_pet_id(pet_id).await
    }

    /// Visits of any of the given pets.
    ///
    /// # Errors
    ///
    /// Returns the store's error if the lookup fails.
    pub async fn find_by_pet_ids(&self, pet_ids: Vec<i32>) -> Result<Vec<Visit>, AppError> {
        self.repository.find_by_pet_id_in(pet_ids).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::repositories::MockVisitRepository;

    #[tokio::test]
    async fn test_create_visit_uses_path_pet_id() {
        let mut mock_repo = MockVisitRepository::new();
        mock_repo
            .expect_save()
            .withf(|visit| visit.pet_id == 333 && visit.description == "Checkup")
            .times(1)
            .returning(|visit| Ok(visit.with_id(1)));

        let service = VisitService::new(Arc::new(mock_repo));

        let saved = service
            .create_visit(333, Visit::new(0, "Checkup"))
            .await
            .unwrap();

        assert_eq!(saved.pet_id, 333);
        assert_eq!(saved.id, Some(1));
    }

    #[tokio::test]
    async fn test_find_by_pet_id_empty() {
        let mut mock_repo = MockVisitRepository::new();
        mock_repo
            .expect_find_by_pet_id()
            .withf(|id| *id == 8)
            .times(1)
            .returning(|_| Ok(vec![]));

        let service = VisitService::new(Arc::new(mock_repo));

        assert!(service.find_by_pet_id(8).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_find_by_pet_ids_delegates() {
        let mut mock_repo = MockVisitRepository::new();
        mock_repo
            .expect_find_by_pet_id_in()
            .withf(|ids| ids == &vec![7, 8])
            .times(1)
            .returning(|_| {
                Ok(vec![
                    Visit::new(7, "rabies shot").with_id(1),
                    Visit::new(8, "neutered").with_id(3),
                ])
            });

        let service = VisitService::new(Arc::new(mock_repo));

        let visits = service.find_by_pet_ids(vec![7, 8]).await.unwrap();

        assert_eq!(visits.len(), 2);
        assert_eq!(visits[1].pet_id, 8);
    }
}
