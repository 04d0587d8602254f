//! DTOs for visit endpoints.

use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};
use serde_with::{StringWithSeparator, formats::CommaSeparator, serde_as};
use validator::Validate;

use crate::domain::entities::Visit;

/// Request body for recording a visit.
///
/// `petId` is accepted for compatibility but replaced by the pet id from the
/// path. A missing `date` means "now".
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct VisitRequest {
    #[serde(default)]
    pub date: Option<NaiveDate>,

    #[serde(default)]
    #[validate(length(max = 8192))]
    pub description: String,

    #[serde(default)]
    pub pet_id: i32,
}

impl VisitRequest {
    /// Builds the transient visit described by this body.
    pub fn into_visit(self) -> Visit {
        let visit = Visit::new(self.pet_id, self.description);
        match self.date {
            Some(date) => visit.with_date(date.and_time(NaiveTime::MIN).and_utc()),
            None => visit,
        }
    }
}

/// Visit as returned by the visit endpoints.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VisitResponse {
    pub id: Option<i32>,
    pub date: NaiveDate,
    pub description: String,
    pub pet_id: i32,
}

impl From<&Visit> for VisitResponse {
    fn from(visit: &Visit) -> Self {
        Self {
            id: visit.id,
            date: visit.date.date_naive(),
            description: visit.description.clone(),
            pet_id: visit.pet_id,
        }
    }
}

/// Wrapper for multi-pet visit lookups.
#[derive(Debug, Serialize)]
pub struct Visits {
    pub items: Vec<VisitResponse>,
}

/// Query string of `GET /pets/visits`, e.g. `?petId=7,8`.
#[serde_as]
#[derive(Debug, Deserialize)]
pub struct VisitsQuery {
    #[serde(rename = "petId")]
    #[serde_as(as = "StringWithSeparator::<CommaSeparator, i32>")]
    pub pet_ids: Vec<i32>,
}
