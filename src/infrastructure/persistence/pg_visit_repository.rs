//! PostgreSQL implementation of the visit repository.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use std::sync::Arc;

use crate::domain::entities::Visit;
use crate::domain::repositories::VisitRepository;
use crate::error::AppError;

#[derive(sqlx::FromRow)]
struct VisitRow {
    id: i32,
    pet_id: i32,
    visit_date: DateTime<Utc>,
    description: String,
}

impl From<VisitRow> for Visit {
    fn from(row: VisitRow) -> Self {
        Visit::new(row.pet_id, row.description)
            .with_id(row.id)
            .with_date(row.visit_date)
    }
}

/// PostgreSQL repository for visits.
///
/// `pet_id` is a plain column with no foreign key.
pub struct PgVisitRepository {
    pool: Arc<PgPool>,
}

impl PgVisitRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl VisitRepository for PgVisitRepository {
    async fn find_by_pet_id(&self, pet_id: i32) -> Result<Vec<Visit>, AppError> {
        let rows = sqlx::query_as::<_, VisitRow>(
            r#"
            SELECT id, pet_id, visit_date, description
            FROM visits
            WHERE pet_id = $1
            ORDER BY id
            "#,
        )
        .bind(pet_id)
        .fetch_all(self.pool.as_ref())
        .await?;

        Ok(rows.into_iter().map(Visit::from).collect())
    }

    async fn find_by_pet_id_in(&self, pet_ids: Vec<i32>) -> Result<Vec<Visit>, AppError> {
        let rows = sqlx::query_as::<_, VisitRow>(
            r#"
            SELECT id, pet_id, visit_date, description
            FROM visits
            WHERE pet_id = ANY($1)
            ORDER BY id
            "#,
        )
        .bind(&pet_ids)
        .fetch_all(self.pool.as_ref())
        .await?;

        Ok(rows.into_iter().map(Visit::from).collect())
    }

    async fn save(&self, visit: Visit) -> Result<Visit, AppError> {
        let row = match visit.id {
            Some(id) => {
                sqlx::query_as::<_, VisitRow>(
                    r#"
                    UPDATE visits
                    SET pet_id = $2, visit_date = $3, description = $4
                    WHERE id = $1
                    RETURNING id, pet_id, visit_date, description
                    "#,
                )
                .bind(id)
                .bind(visit.pet_id)
                .bind(visit.date)
                .bind(&visit.description)
                .fetch_optional(self.pool.as_ref())
                .await?
                .ok_or_else(|| AppError::entity_not_found("Visit", id))?
            }
            None => {
                sqlx::query_as::<_, VisitRow>(
                    r#"
                    INSERT INTO visits (pet_id, visit_date, description)
                    VALUES ($1, $2, $3)
                    RETURNING id, pet_id, visit_date, description
                    "#,
                )
                .bind(visit.pet_id)
                .bind(visit.date)
                .bind(&visit.description)
                .fetch_one(self.pool.as_ref())
                .await?
            }
        };

        Ok(Visit::from(row))
    }
}
