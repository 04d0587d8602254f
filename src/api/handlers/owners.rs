//! Handlers for owner endpoints.

use axum::{
    Json,
    extract::State,
    http::StatusCode,
};
use validator::Validate;

use crate::api::dto::{OwnerRequest, OwnerResponse};
use crate::api::extract::{ApiJson, ApiPath};
use crate::api::validation::require_min_id;
use crate::error::AppError;
use crate::state::AppState;

/// Creates an owner.
///
/// # Endpoint
///
/// `POST /owners`
///
/// # Request Body
///
/// ```json
/// {
///   "firstName": "George",
///   "lastName": "Franklin",
///   "address": "110 W. Liberty St.",
///   "city": "Madison",
///   "telephone": "6085551023"
/// }
/// ```
///
/// # Errors
///
/// Returns 400 Bad Request if validation fails.
pub async fn create_owner_handler(
    State(state): State<AppState>,
    ApiJson(payload): ApiJson<OwnerRequest>,
) -> Result<(StatusCode, Json<OwnerResponse>), AppError> {
    payload.validate()?;

    let owner = state.owner_service.create_owner(&payload).await?;

    Ok((StatusCode::CREATED, Json(OwnerResponse::from(&owner))))
}

/// Returns an owner with its pets, or `null` when no such owner exists.
///
/// # Endpoint
///
/// `GET /owners/{ownerId}`
pub async fn find_owner_handler(
    State(state): State<AppState>,
    ApiPath(owner_id): ApiPath<i32>,
) -> Result<Json<Option<OwnerResponse>>, AppError> {
    let owner_id = require_min_id("ownerId", owner_id)?;

    let owner = state.owner_service.find_owner(owner_id).await?;

    Ok(Json(owner.as_ref().map(OwnerResponse::from)))
}

/// Lists all owners.
///
/// # Endpoint
///
/// `GET /owners`
pub async fn owner_list_handler(
    State(state): State<AppState>,
) -> Result<Json<Vec<OwnerResponse>>, AppError> {
    let owners = state.owner_service.find_all().await?;

    Ok(Json(owners.iter().map(OwnerResponse::from).collect()))
}

/// Overwrites an owner's fields.
///
/// # Endpoint
///
/// `PUT /owners/{ownerId}`
///
/// # Errors
///
/// Returns 400 if the id or body is invalid.
/// Returns 404 if the owner does not exist.
pub async fn update_owner_handler(
    State(state): State<AppState>,
    ApiPath(owner_id): ApiPath<i32>,
    ApiJson(payload): ApiJson<OwnerRequest>,
) -> Result<StatusCode, AppError> {
    let owner_id = require_min_id("ownerId", owner_id)?;
    payload.validate()?;

    state.owner_service.update_owner(owner_id, &payload).await?;

    Ok(StatusCode::NO_CONTENT)
}
