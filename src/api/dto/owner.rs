//! DTOs for owner endpoints.

use chrono::NaiveDate;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;
use validator::{Validate, ValidationError};

use crate::domain::entities::{Owner, Pet, PetType};

/// Up to twelve digits, no separators.
static TELEPHONE_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d{1,12}$").expect("telephone pattern is valid"));

/// Request body for creating or updating an owner.
///
/// Every field is required; an update overwrites all of them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct OwnerRequest {
    #[validate(custom(function = "not_blank"), length(max = 30))]
    pub first_name: String,

    #[validate(custom(function = "not_blank"), length(max = 30))]
    pub last_name: String,

    #[validate(custom(function = "not_blank"), length(max = 255))]
    pub address: String,

    #[validate(custom(function = "not_blank"), length(max = 80))]
    pub city: String,

    /// Digits only, at most 12 of them.
    #[validate(regex(path = *TELEPHONE_REGEX, message = "Telephone must be 1 to 12 digits"))]
    pub telephone: String,
}

impl OwnerRequest {
    pub fn new(
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        address: impl Into<String>,
        city: impl Into<String>,
        telephone: impl Into<String>,
    ) -> Self {
        Self {
            first_name: first_name.into(),
            last_name: last_name.into(),
            address: address.into(),
            city: city.into(),
            telephone: telephone.into(),
        }
    }
}

fn not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::new("blank").with_message("must not be blank".into()));
    }
    Ok(())
}

/// Owner with its pets, as returned by the owner endpoints.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OwnerResponse {
    pub id: Option<i32>,
    pub first_name: String,
    pub last_name: String,
    pub address: String,
    pub city: String,
    pub telephone: String,
    pub pets: Vec<PetResponse>,
}

impl From<&Owner> for OwnerResponse {
    fn from(owner: &Owner) -> Self {
        Self {
            id: owner.id(),
            first_name: owner.first_name.clone(),
            last_name: owner.last_name.clone(),
            address: owner.address.clone(),
            city: owner.city.clone(),
            telephone: owner.telephone.clone(),
            pets: owner.pets().iter().map(|pet| PetResponse::from(*pet)).collect(),
        }
    }
}

/// Pet as embedded in owner responses and returned on creation.
///
/// The owner back-reference is not serialized.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PetResponse {
    pub id: Option<i32>,
    pub name: String,
    pub birth_date: Option<NaiveDate>,
    #[serde(rename = "type")]
    pub pet_type: Option<PetType>,
}

impl From<&Pet> for PetResponse {
    fn from(pet: &Pet) -> Self {
        Self {
            id: pet.id(),
            name: pet.name.clone(),
            birth_date: pet.birth_date,
            pet_type: pet.pet_type.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_request() -> OwnerRequest {
        OwnerRequest::new("George", "Franklin", "110 W. Liberty St.", "Madison", "6085551023")
    }

    #[test]
    fn test_valid_request_passes() {
        assert!(valid_request().validate().is_ok());
    }

    #[test]
    fn test_blank_first_name_rejected() {
        let mut request = valid_request();
        request.first_name = "   ".to_string();

        let errors = request.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("first_name"));
    }

    #[test]
    fn test_lengths_fit_columns() {
        let mut request = valid_request();
        request.first_name = "x".repeat(30);
        request.city = "y".repeat(80);
        assert!(request.validate().is_ok());

        request.last_name = "x".repeat(31);
        request.city = "y".repeat(81);
        request.address = "z".repeat(256);
        let errors = request.validate().unwrap_err();
        let fields = errors.field_errors();
        assert!(fields.contains_key("last_name"));
        assert!(fields.contains_key("city"));
        assert!(fields.contains_key("address"));
        assert!(!fields.contains_key("first_name"));
    }

    #[test]
    fn test_telephone_must_be_digits() {
        let mut request = valid_request();

        request.telephone = "608-555-1023".to_string();
        assert!(request.validate().is_err());

        request.telephone = "1234567890123".to_string();
        assert!(request.validate().is_err());

        request.telephone = String::new();
        assert!(request.validate().is_err());
    }

    #[test]
    fn test_request_uses_camel_case() {
        let request: OwnerRequest = serde_json::from_value(serde_json::json!({
            "firstName": "Betty",
            "lastName": "Davis",
            "address": "638 Cardinal Ave.",
            "city": "Sun Prairie",
            "telephone": "6085551749"
        }))
        .unwrap();

        assert_eq!(request.first_name, "Betty");
        assert_eq!(request.last_name, "Davis");
    }

    #[test]
    fn test_owner_response_lists_pets_by_name() {
        let mut owner = Owner::with_id(1);
        owner.first_name = "George".to_string();
        for name in ["Max", "Leo"] {
            let mut pet = Pet::new();
            pet.name = name.to_string();
            owner.add_pet(&mut pet);
        }

        let response = OwnerResponse::from(&owner);
        let json = serde_json::to_value(&response).unwrap();

        assert_eq!(json["id"], 1);
        assert_eq!(json["firstName"], "George");
        assert_eq!(json["pets"][0]["name"], "Leo");
        assert_eq!(json["pets"][1]["name"], "Max");
        assert!(json["pets"][0].get("owner").is_none());
    }
}
