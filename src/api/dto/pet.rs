//! DTOs for pet endpoints.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::domain::entities::PetType;

/// Request body for creating or updating a pet.
///
/// On update, `id` names the pet to change. On creation it is ignored.
/// `birthDate` uses the `yyyy-MM-dd` format.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct PetRequest {
    #[serde(default)]
    pub id: i32,

    #[serde(default)]
    pub birth_date: Option<NaiveDate>,

    #[serde(default)]
    #[validate(length(min = 1, max = 30, message = "Name must be 1 to 30 characters"))]
    pub name: String,

    #[serde(default)]
    pub type_id: i32,
}

impl PetRequest {
    pub fn new(id: i32, birth_date: Option<NaiveDate>, name: impl Into<String>, type_id: i32) -> Self {
        Self {
            id,
            birth_date,
            name: name.into(),
            type_id,
        }
    }
}

/// Read projection of a pet, with its owner's full name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PetDetails {
    pub id: Option<i32>,
    pub name: String,
    /// `"{first} {last}"` of the owner; absent for a pet without owner.
    pub owner: Option<String>,
    pub birth_date: Option<NaiveDate>,
    #[serde(rename = "type")]
    pub pet_type: Option<PetType>,
}
