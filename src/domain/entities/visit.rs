//! Visit entity, a separate aggregate keyed by pet identifier.

use chrono::{DateTime, Utc};

/// A visit of a pet to the clinic.
///
/// Refers to its pet by plain identifier only; visits are owned by the
/// visits service, not by the owner/pet aggregate.
#[derive(Debug, Clone)]
pub struct Visit {
    pub id: Option<i32>,
    pub date: DateTime<Utc>,
    pub description: String,
    pub pet_id: i32,
}

impl Visit {
    /// Creates a transient visit dated at the current time.
    ///
    /// Callers that need a deterministic date set it with [`Visit::with_date`].
    pub fn new(pet_id: i32, description: impl Into<String>) -> Self {
        Self {
            id: None,
            date: Utc::now(),
            description: description.into(),
            pet_id,
        }
    }

    pub fn with_id(mut self, id: i32) -> Self {
        self.id = Some(id);
        self
    }

    pub fn with_date(mut self, date: DateTime<Utc>) -> Self {
        self.date = date;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};

    #[test]
    fn test_visit_creation_with_builder() {
        let date = Utc.with_ymd_and_hms(2024, 5, 1, 9, 30, 0).unwrap();
        let visit = Visit::new(5, "Regular checkup").with_id(1).with_date(date);

        assert_eq!(visit.id, Some(1));
        assert_eq!(visit.date, date);
        assert_eq!(visit.description, "Regular checkup");
        assert_eq!(visit.pet_id, 5);
    }

    #[test]
    fn test_visit_fields_are_updatable() {
        let mut visit = Visit::new(1, "Checkup");
        let date = Utc::now() + Duration::seconds(10);

        visit.id = Some(2);
        visit.date = date;
        visit.description = "Vaccination".to_string();
        visit.pet_id = 10;

        assert_eq!(visit.id, Some(2));
        assert_eq!(visit.date, date);
        assert_eq!(visit.description, "Vaccination");
        assert_eq!(visit.pet_id, 10);
    }

    #[test]
    fn test_default_date_is_now() {
        let before = Utc::now();
        let visit = Visit::new(1, "Checkup");
        let after = Utc::now();

        assert!(visit.id.is_none());
        assert!(visit.date >= before && visit.date <= after);
    }
}
