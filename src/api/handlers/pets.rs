//! Handlers for pet and pet type endpoints.
//!
//! Routes under `/owners/{ownerId}/pets/{petId}` ignore the owner segment;
//! only the pet id (or, on update, the body's `id`) selects the pet.

use axum::{
    Json,
    extract::State,
    http::StatusCode,
};
use validator::Validate;

use crate::api::dto::{PetDetails, PetRequest, PetResponse};
use crate::api::extract::{ApiJson, ApiPath};
use crate::api::validation::require_min_id;
use crate::domain::entities::PetType;
use crate::error::AppError;
use crate::state::AppState;

/// Lists pet types ordered by name.
///
/// # Endpoint
///
/// `GET /petTypes`
pub async fn pet_types_handler(
    State(state): State<AppState>,
) -> Result<Json<Vec<PetType>>, AppError> {
    Ok(Json(state.pet_service.get_pet_types().await?))
}

/// Registers a pet for an owner.
///
/// # Endpoint
///
/// `POST /owners/{ownerId}/pets`
///
/// # Errors
///
/// Returns 404 if the owner does not exist. An unknown `typeId` is not an
/// error; the pet is created without a type.
pub async fn create_pet_handler(
    State(state): State<AppState>,
    ApiPath(owner_id): ApiPath<i32>,
    ApiJson(payload): ApiJson<PetRequest>,
) -> Result<(StatusCode, Json<PetResponse>), AppError> {
    let owner_id = require_min_id("ownerId", owner_id)?;
    payload.validate()?;

    let pet = state.pet_service.create_pet(owner_id, &payload).await?;

    Ok((StatusCode::CREATED, Json(PetResponse::from(&pet))))
}

/// Overwrites the pet named by the body's `id`.
///
/// # Endpoint
///
/// `PUT /owners/{ownerId}/pets/{petId}`
///
/// # Errors
///
/// Returns 404 if the pet does not exist.
pub async fn update_pet_handler(
    State(state): State<AppState>,
    ApiPath((_, pet_id)): ApiPath<(String, i32)>,
    ApiJson(payload): ApiJson<PetRequest>,
) -> Result<StatusCode, AppError> {
    require_min_id("petId", pet_id)?;
    payload.validate()?;

    state.pet_service.update_pet(&payload).await?;

    Ok(StatusCode::NO_CONTENT)
}

/// Returns a pet with its owner's full name.
///
/// # Endpoint
///
/// `GET /owners/{ownerId}/pets/{petId}`
///
/// # Response
///
/// ```json
/// {
///   "id": 7,
///   "name": "Samantha",
///   "owner": "Jean Coleman",
///   "birthDate": "2012-09-04",
///   "type": { "id": 1, "name": "cat" }
/// }
/// ```
pub async fn pet_details_handler(
    State(state): State<AppState>,
    ApiPath((_, pet_id)): ApiPath<(String, i32)>,
) -> Result<Json<PetDetails>, AppError> {
    let pet_id = require_min_id("petId", pet_id)?;

    Ok(Json(state.pet_service.find_pet_details(pet_id).await?))
}
