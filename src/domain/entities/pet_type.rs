//! Pet classification value.

use serde::{Deserialize, Serialize};

/// Classification of a pet (cat, dog, ...).
///
/// Referenced by [`super::Pet`], never owned by it.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PetType {
    pub id: i32,
    pub name: String,
}

impl PetType {
    pub fn new(id: i32, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }
}
