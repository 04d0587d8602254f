//! API route configuration.
//!
//! The customers and visits services are separate route groups so a process
//! can serve either or both. Both groups use `{owner_id}` for the owner
//! segment; pet routes accept any value there.

use crate::api::handlers::{
    create_owner_handler, create_pet_handler, create_visit_handler, find_owner_handler,
    owner_list_handler, pet_details_handler, pet_types_handler, pet_visits_handler,
    update_owner_handler, update_pet_handler, visits_by_pets_handler,
};
use crate::state::AppState;
use axum::{
    Router,
    routing::{get, post},
};

/// Owner, pet and pet type routes.
///
/// # Endpoints
///
/// - `POST /owners`                            - Create an owner
/// - `GET  /owners`                            - List owners
/// - `GET  /owners/{ownerId}`                  - Find an owner (`null` if absent)
/// - `PUT  /owners/{ownerId}`                  - Overwrite an owner
/// - `GET  /petTypes`                          - List pet types
/// - `POST /owners/{ownerId}/pets`             - Register a pet
/// - `GET  /owners/{ownerId}/pets/{petId}`     - Pet details
/// - `PUT  /owners/{ownerId}/pets/{petId}`     - Overwrite a pet
pub fn customer_routes() -> Router<AppState> {
    Router::new()
        .route("/owners", get(owner_list_handler).post(create_owner_handler))
        .route(
            "/owners/{owner_id}",
            get(find_owner_handler).put(update_owner_handler),
        )
        .route("/petTypes", get(pet_types_handler))
        .route("/owners/{owner_id}/pets", post(create_pet_handler))
        .route(
            "/owners/{owner_id}/pets/{pet_id}",
            get(pet_details_handler).put(update_pet_handler),
        )
}

/// Visit routes.
///
/// # Endpoints
///
/// - `GET  /owners/{ownerId}/pets/{petId}/visits` - Visits of one pet
/// - `POST /owners/{ownerId}/pets/{petId}/visits` - Record a visit
/// - `GET  /pets/visits?petId=1,2`                - Visits of several pets
pub fn visit_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/owners/{owner_id}/pets/{pet_id}/visits",
            get(pet_visits_handler).post(create_visit_handler),
        )
        .route("/pets/visits", get(visits_by_pets_handler))
}
