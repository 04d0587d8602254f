//! Boundary checks applied before a request reaches the services.

use serde_json::json;

use crate::error::AppError;

/// Rejects path identifiers below 1.
///
/// # Errors
///
/// Returns [`AppError::Validation`] naming the offending parameter.
pub fn require_min_id(name: &str, id: i32) -> Result<i32, AppError> {
    if id < 1 {
        return Err(AppError::bad_request(
            format!("{name} must be greater than or equal to 1"),
            json!({ name: id }),
        ));
    }
    Ok(id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_require_min_id() {
        assert_eq!(require_min_id("ownerId", 1).unwrap(), 1);
        assert_eq!(require_min_id("petId", 42).unwrap(), 42);

        let err = require_min_id("ownerId", 0).unwrap_err();
        assert!(matches!(err, AppError::Validation { .. }));
        assert_eq!(err.to_string(), "ownerId must be greater than or equal to 1");

        assert!(require_min_id("petId", -5).is_err());
    }
}
