//! PostgreSQL implementation of the owner repository.

use async_trait::async_trait;
use sqlx::PgPool;
use std::collections::HashMap;
use std::sync::Arc;

use super::pg_pet_repository::{PET_SELECT, PetRow, write_pet};
use crate::domain::entities::Owner;
use crate::domain::repositories::OwnerRepository;
use crate::error::AppError;

#[derive(sqlx::FromRow)]
struct OwnerRow {
    id: i32,
    first_name: String,
    last_name: String,
    address: String,
    city: String,
    telephone: String,
}

impl OwnerRow {
    fn into_owner(self, pets: Vec<PetRow>) -> Owner {
        let mut owner = Owner::with_id(self.id);
        owner.first_name = self.first_name;
        owner.last_name = self.last_name;
        owner.address = self.address;
        owner.city = self.city;
        owner.telephone = self.telephone;
        for row in pets {
            let mut pet = row.into_pet();
            owner.add_pet(&mut pet);
        }
        owner
    }
}

/// PostgreSQL repository for the owner aggregate.
///
/// Owners are loaded with their pets; saving an owner writes its pets in the
/// same transaction.
pub struct PgOwnerRepository {
    pool: Arc<PgPool>,
}

impl PgOwnerRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl OwnerRepository for PgOwnerRepository {
    async fn find_by_id(&self, id: i32) -> Result<Option<Owner>, AppError> {
        let row = sqlx::query_as::<_, OwnerRow>(
            "SELECT id, first_name, last_name, address, city, telephone FROM owners WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(self.pool.as_ref())
        .await?;

        let Some(row) = row else {
            return Ok(None);
        };

        let pets = sqlx::query_as::<_, PetRow>(&format!("{PET_SELECT} WHERE p.owner_id = $1"))
            .bind(id)
            .fetch_all(self.pool.as_ref())
            .await?;

        Ok(Some(row.into_owner(pets)))
    }

    async fn find_all(&self) -> Result<Vec<Owner>, AppError> {
        let rows = sqlx::query_as::<_, OwnerRow>(
            "SELECT id, first_name, last_name, address, city, telephone FROM owners ORDER BY id",
        )
        .fetch_all(self.pool.as_ref())
        .await?;

        let ids: Vec<i32> = rows.iter().map(|r| r.id).collect();
        let pet_rows = sqlx::query_as::<_, PetRow>(&format!("{PET_SELECT} WHERE p.owner_id = ANY($1)"))
            .bind(&ids)
            .fetch_all(self.pool.as_ref())
            .await?;

        let mut pets_by_owner: HashMap<i32, Vec<PetRow>> = HashMap::new();
        for pet in pet_rows {
            pets_by_owner.entry(pet.owner_id).or_default().push(pet);
        }

        Ok(rows
            .into_iter()
            .map(|row| {
                let pets = pets_by_owner.remove(&row.id).unwrap_or_default();
                row.into_owner(pets)
            })
            .collect())
    }

    async fn save(&self, owner: Owner) -> Result<Owner, AppError> {
        let mut tx = self.pool.begin().await?;

        let owner_id = match owner.id() {
            Some(id) => {
                let result = sqlx::query(
                    r#"
                    UPDATE owners
                    SET first_name = $2, last_name = $3, address = $4, city = $5, telephone = $6
                    WHERE id = $1
                    "#,
                )
                .bind(id)
                .bind(&owner.first_name)
                .bind(&owner.last_name)
                .bind(&owner.address)
                .bind(&owner.city)
                .bind(&owner.telephone)
                .execute(&mut *tx)
                .await?;

                if result.rows_affected() == 0 {
                    return Err(AppError::entity_not_found("Owner", id));
                }
                id
            }
            None => {
                sqlx::query_scalar::<_, i32>(
                    r#"
                    INSERT INTO owners (first_name, last_name, address, city, telephone)
                    VALUES ($1, $2, $3, $4, $5)
                    RETURNING id
                    "#,
                )
                .bind(&owner.first_name)
                .bind(&owner.last_name)
                .bind(&owner.address)
                .bind(&owner.city)
                .bind(&owner.telephone)
                .fetch_one(&mut *tx)
                .await?
            }
        };

        let mut saved = Owner::with_id(owner_id);
        saved.first_name = owner.first_name.clone();
        saved.last_name = owner.last_name.clone();
        saved.address = owner.address.clone();
        saved.city = owner.city.clone();
        saved.telephone = owner.telephone.clone();

        for pet in owner.pets_internal() {
            let pet_id = write_pet(&mut tx, pet, owner_id).await?;
            let mut pet = pet.clone();
            pet.assign_id(pet_id);
            saved.add_pet(&mut pet);
        }

        tx.commit().await?;
        Ok(saved)
    }
}
