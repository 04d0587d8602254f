//! PostgreSQL implementation of the pet repository.

use async_trait::async_trait;
use chrono::NaiveDate;
use sqlx::{PgConnection, PgPool};
use std::sync::Arc;

use crate::domain::entities::{OwnerRef, Pet, PetType};
use crate::domain::repositories::PetRepository;
use crate::error::AppError;
use serde_json::json;

/// Pet columns joined with their type and owner name.
pub(crate) const PET_SELECT: &str = r#"
    SELECT p.id, p.name, p.birth_date, p.owner_id,
           t.id AS type_id, t.name AS type_name,
           o.first_name AS owner_first_name, o.last_name AS owner_last_name
    FROM pets p
    JOIN owners o ON o.id = p.owner_id
    LEFT JOIN types t ON t.id = p.type_id
"#;

#[derive(sqlx::FromRow)]
pub(crate) struct PetRow {
    pub id: i32,
    pub name: String,
    pub birth_date: Option<NaiveDate>,
    pub owner_id: i32,
    pub type_id: Option<i32>,
    pub type_name: Option<String>,
    pub owner_first_name: String,
    pub owner_last_name: String,
}

impl PetRow {
    /// Builds the pet with its type and a reference to its owner.
    pub(crate) fn into_pet(self) -> Pet {
        let mut pet = Pet::with_id(self.id);
        pet.name = self.name;
        pet.birth_date = self.birth_date;
        pet.pet_type = self.type_id.zip(self.type_name).map(|(id, name)| PetType::new(id, name));
        pet.set_owner(OwnerRef::persisted(
            self.owner_id,
            self.owner_first_name,
            self.owner_last_name,
        ));
        pet
    }
}

#[derive(sqlx::FromRow)]
struct PetTypeRow {
    id: i32,
    name: String,
}

impl From<PetTypeRow> for PetType {
    fn from(row: PetTypeRow) -> Self {
        PetType::new(row.id, row.name)
    }
}

/// Inserts or updates a pet row for `owner_id` and returns the pet id.
///
/// Shared by the pet repository and the owner save cascade.
pub(crate) async fn write_pet(
    conn: &mut PgConnection,
    pet: &Pet,
    owner_id: i32,
) -> Result<i32, AppError> {
    let type_id = pet.pet_type.as_ref().map(|t| t.id);

    match pet.id() {
        Some(id) => {
            let result = sqlx::query(
                r#"
                UPDATE pets
                SET name = $2, birth_date = $3, type_id = $4, owner_id = $5
                WHERE id = $1
                "#,
            )
            .bind(id)
            .bind(&pet.name)
            .bind(pet.birth_date)
            .bind(type_id)
            .bind(owner_id)
            .execute(&mut *conn)
            .await?;

            if result.rows_affected() == 0 {
                return Err(AppError::entity_not_found("Pet", id));
            }
            Ok(id)
        }
        None => {
            let id: i32 = sqlx::query_scalar(
                r#"
                INSERT INTO pets (name, birth_date, type_id, owner_id)
                VALUES ($1, $2, $3, $4)
                RETURNING id
                "#,
            )
            .bind(&pet.name)
            .bind(pet.birth_date)
            .bind(type_id)
            .bind(owner_id)
            .fetch_one(&mut *conn)
            .await?;
            Ok(id)
        }
    }
}

/// PostgreSQL repository for pets and pet types.
pub struct PgPetRepository {
    pool: Arc<PgPool>,
}

impl PgPetRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl PetRepository for PgPetRepository {
    async fn find_by_id(&self, id: i32) -> Result<Option<Pet>, AppError> {
        let row = sqlx::query_as::<_, PetRow>(&format!("{PET_SELECT} WHERE p.id = $1"))
            .bind(id)
            .fetch_optional(self.pool.as_ref())
            .await?;

        Ok(row.map(PetRow::into_pet))
    }

    async fn save(&self, mut pet: Pet) -> Result<Pet, AppError> {
        let owner_id = pet.owner().and_then(|owner| owner.id()).ok_or_else(|| {
            AppError::bad_request(
                "Pet must belong to a persisted owner",
                json!({ "pet": pet.name }),
            )
        })?;

        let mut conn = self.pool.acquire().await?;
        let id = write_pet(&mut conn, &pet, owner_id).await?;
        pet.assign_id(id);
        Ok(pet)
    }

    async fn find_pet_types(&self) -> Result<Vec<PetType>, AppError> {
        let rows = sqlx::query_as::<_, PetTypeRow>("SELECT id, name FROM types ORDER BY name")
            .fetch_all(self.pool.as_ref())
            .await?;

        Ok(rows.into_iter().map(PetType::from).collect())
    }

    async fn find_pet_type_by_id(&self, id: i32) -> Result<Option<PetType>, AppError> {
        let row = sqlx::query_as::<_, PetTypeRow>("SELECT id, name FROM types WHERE id = $1")
            .bind(id)
            .fetch_optional(self.pool.as_ref())
            .await?;

        Ok(row.map(PetType::from))
    }
}
