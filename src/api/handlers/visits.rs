//! Handlers for visit endpoints.

use axum::{
    Json,
    extract::State,
    http::StatusCode,
};
use validator::Validate;

use crate::api::dto::{VisitRequest, VisitResponse, Visits, VisitsQuery};
use crate::api::extract::{ApiJson, ApiPath, ApiQuery};
use crate::api::validation::require_min_id;
use crate::error::AppError;
use crate::state::AppState;

/// Records a visit for a pet.
///
/// # Endpoint
///
/// `POST /owners/{ownerId}/pets/{petId}/visits`
///
/// # Request Body
///
/// ```json
/// { "date": "2013-01-01", "description": "rabies shot" }
/// ```
///
/// The pet id from the path wins over any `petId` in the body.
pub async fn create_visit_handler(
    State(state): State<AppState>,
    ApiPath((_, pet_id)): ApiPath<(String, i32)>,
    ApiJson(payload): ApiJson<VisitRequest>,
) -> Result<(StatusCode, Json<VisitResponse>), AppError> {
    let pet_id = require_min_id("petId", pet_id)?;
    payload.validate()?;

    let visit = state
        .visit_service
        .create_visit(pet_id, payload.into_visit())
        .await?;

    Ok((StatusCode::CREATED, Json(VisitResponse::from(&visit))))
}

/// Lists the visits of one pet as a bare array.
///
/// # Endpoint
///
/// `GET /owners/{ownerId}/pets/{petId}/visits`
pub async fn pet_visits_handler(
    State(state): State<AppState>,
    ApiPath((_, pet_id)): ApiPath<(String, i32)>,
) -> Result<Json<Vec<VisitResponse>>, AppError> {
    let pet_id = require_min_id("petId", pet_id)?;

    let visits = state.visit_service.find_by_pet_id(pet_id).await?;

    Ok(Json(visits.iter().map(VisitResponse::from).collect()))
}

/// Lists the visits of several pets.
///
/// # Endpoint
///
/// `GET /pets/visits?petId=7,8`
///
/// # Response
///
/// ```json
/// { "items": [ { "id": 1, "date": "2013-01-01", "description": "rabies shot", "petId": 7 } ] }
/// ```
pub async fn visits_by_pets_handler(
    State(state): State<AppState>,
    ApiQuery(query): ApiQuery<VisitsQuery>,
) -> Result<Json<Visits>, AppError> {
    let visits = state.visit_service.find_by_pet_ids(query.pet_ids).await?;

    Ok(Json(Visits {
        items: visits.iter().map(VisitResponse::from).collect(),
    }))
}
