use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// A vehicle owned by a person, independent of any coverage.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq, Hash)]
pub struct OwnedVehicle {
    pub person_id: String,
    pub vehicle_id: String,
}

impl OwnedVehicle {
    pub fn new(person_id: impl Into<String>, vehicle_id: impl Into<String>) -> Self {
        Self {
            person_id: person_id.into(),
            vehicle_id: vehicle_id.into(),
        }
    }

    /// Borrowed `(person_id, vehicle_id)` pair for set membership checks.
    #[must_use]
    pub fn key(&self) -> (&str, &str) {
        (&self.person_id, &self.vehicle_id)
    }
}
