//! In-process entity store.
//!
//! Keeps canonical rows keyed by identifier, the same shape the database
//! uses, and rebuilds owners, pets and their references on every read. Used
//! by the `memory` store backend and by the HTTP tests.

use async_trait::async_trait;
use chrono::NaiveDate;
use serde_json::json;
use std::collections::BTreeMap;
use tokio::sync::RwLock;
use tracing::debug;

use crate::domain::entities::{Owner, OwnerRef, Pet, PetType, Visit};
use crate::domain::repositories::{OwnerRepository, PetRepository, VisitRepository};
use crate::error::AppError;
use crate::infrastructure::seed::PET_TYPES;

#[derive(Debug, Clone)]
struct OwnerRecord {
    first_name: String,
    last_name: String,
    address: String,
    city: String,
    telephone: String,
}

#[derive(Debug, Clone)]
struct PetRecord {
    name: String,
    birth_date: Option<NaiveDate>,
    type_id: Option<i32>,
    owner_id: i32,
}

#[derive(Default)]
struct Tables {
    owners: BTreeMap<i32, OwnerRecord>,
    pets: BTreeMap<i32, PetRecord>,
    types: BTreeMap<i32, PetType>,
    visits: BTreeMap<i32, Visit>,
    last_owner_id: i32,
    last_pet_id: i32,
    last_visit_id: i32,
}

impl Tables {
    fn load_pet(&self, id: i32, record: &PetRecord) -> Pet {
        let mut pet = Pet::with_id(id);
        pet.name = record.name.clone();
        pet.birth_date = record.birth_date;
        pet.pet_type = record.type_id.and_then(|t| self.types.get(&t).cloned());
        if let Some(owner) = self.owners.get(&record.owner_id) {
            pet.set_owner(OwnerRef::persisted(
                record.owner_id,
                owner.first_name.clone(),
                owner.last_name.clone(),
            ));
        }
        pet
    }

    fn load_owner(&self, id: i32, record: &OwnerRecord) -> Owner {
        let mut owner = Owner::with_id(id);
        owner.first_name = record.first_name.clone();
        owner.last_name = record.last_name.clone();
        owner.address = record.address.clone();
        owner.city = record.city.clone();
        owner.telephone = record.telephone.clone();

        for (pet_id, pet) in self.pets.iter().filter(|(_, p)| p.owner_id == id) {
            let mut pet = self.load_pet(*pet_id, pet);
            owner.add_pet(&mut pet);
        }
        owner
    }

    /// Inserts or overwrites the pet row and returns its id.
    fn write_pet(&mut self, pet: &Pet, owner_id: i32) -> Result<i32, AppError> {
        let record = PetRecord {
            name: pet.name.clone(),
            birth_date: pet.birth_date,
            type_id: pet.pet_type.as_ref().map(|t| t.id),
            owner_id,
        };

        let id = match pet.id() {
            Some(id) if self.pets.contains_key(&id) => id,
            Some(id) => return Err(AppError::entity_not_found("Pet", id)),
            None => {
                self.last_pet_id += 1;
                self.last_pet_id
            }
        };
        self.pets.insert(id, record);
        Ok(id)
    }
}

/// Entity store backed by in-process maps behind a [`RwLock`].
///
/// Implements all three repository traits over one set of tables, so a pet
/// created through [`PetRepository`] shows up on its owner.
pub struct InMemoryStore {
    tables: RwLock<Tables>,
}

impl InMemoryStore {
    /// Creates a store holding only the pet type catalogue.
    pub fn new() -> Self {
        let types = PET_TYPES
            .iter()
            .zip(1..)
            .map(|(name, id)| (id, PetType::new(id, *name)))
            .collect();

        debug!("Using in-memory store");
        Self {
            tables: RwLock::new(Tables {
                types,
                ..Tables::default()
            }),
        }
    }
}

impl Default for InMemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl OwnerRepository for InMemoryStore {
    async fn find_by_id(&self, id: i32) -> Result<Option<Owner>, AppError> {
        let tables = self.tables.read().await;
        Ok(tables.owners.get(&id).map(|o| tables.load_owner(id, o)))
    }

    async fn find_all(&self) -> Result<Vec<Owner>, AppError> {
        let tables = self.tables.read().await;
        Ok(tables
            .owners
            .iter()
            .map(|(id, o)| tables.load_owner(*id, o))
            .collect())
    }

    async fn save(&self, owner: Owner) -> Result<Owner, AppError> {
        let mut tables = self.tables.write().await;

        let id = match owner.id() {
            Some(id) if tables.owners.contains_key(&id) => id,
            Some(id) => return Err(AppError::entity_not_found("Owner", id)),
            None => {
                tables.last_owner_id += 1;
                tables.last_owner_id
            }
        };

        // Validate every pet before touching any row.
        if let Some(missing) = owner
            .pets_internal()
            .iter()
            .filter_map(Pet::id)
            .find(|pet_id| !tables.pets.contains_key(pet_id))
        {
            return Err(AppError::entity_not_found("Pet", missing));
        }

        tables.owners.insert(
            id,
            OwnerRecord {
                first_name: owner.first_name.clone(),
                last_name: owner.last_name.clone(),
                address: owner.address.clone(),
                city: owner.city.clone(),
                telephone: owner.telephone.clone(),
            },
        );
        for pet in owner.pets_internal() {
            tables.write_pet(pet, id)?;
        }

        let record = &tables.owners[&id];
        Ok(tables.load_owner(id, record))
    }
}

#[async_trait]
impl PetRepository for InMemoryStore {
    async fn find_by_id(&self, id: i32) -> Result<Option<Pet>, AppError> {
        let tables = self.tables.read().await;
        Ok(tables.pets.get(&id).map(|p| tables.load_pet(id, p)))
    }

    async fn save(&self, pet: Pet) -> Result<Pet, AppError> {
        let owner_id = pet
            .owner()
            .and_then(|owner| owner.id())
            .ok_or_else(|| {
                AppError::bad_request(
                    "Pet must belong to a persisted owner",
                    json!({ "pet": pet.name }),
                )
            })?;

        let mut tables = self.tables.write().await;
        if !tables.owners.contains_key(&owner_id) {
            return Err(AppError::entity_not_found("Owner", owner_id));
        }

        let id = tables.write_pet(&pet, owner_id)?;
        let record = &tables.pets[&id];
        Ok(tables.load_pet(id, record))
    }

    async fn find_pet_types(&self) -> Result<Vec<PetType>, AppError> {
        let tables = self.tables.read().await;
        let mut types: Vec<PetType> = tables.types.values().cloned().collect();
        types.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(types)
    }

    async fn find_pet_type_by_id(&self, id: i32) -> Result<Option<PetType>, AppError> {
        Ok(self.tables.read().await.types.get(&id).cloned())
    }
}

#[async_trait]
impl VisitRepository for InMemoryStore {
    async fn find_by_pet_id(&self, pet_id: i32) -> Result<Vec<Visit>, AppError> {
        let tables = self.tables.read().await;
        Ok(tables
            .visits
            .values()
            .filter(|v| v.pet_id == pet_id)
            .cloned()
            .collect())
    }

    async fn find_by_pet_id_in(&self, pet_ids: Vec<i32>) -> Result<Vec<Visit>, AppError> {
        let tables = self.tables.read().await;
        Ok(tables
            .visits
            .values()
            .filter(|v| pet_ids.contains(&v.pet_id))
            .cloned()
            .collect())
    }

    async fn save(&self, mut visit: Visit) -> Result<Visit, AppError> {
        let mut tables = self.tables.write().await;

        let id = match visit.id {
            Some(id) if tables.visits.contains_key(&id) => id,
            Some(id) => return Err(AppError::entity_not_found("Visit", id)),
            None => {
                tables.last_visit_id += 1;
                tables.last_visit_id
            }
        };

        visit.id = Some(id);
        tables.visits.insert(id, visit.clone());
        Ok(visit)
    }
}
