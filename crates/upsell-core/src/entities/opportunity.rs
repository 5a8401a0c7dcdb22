use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::OwnedVehicle;

/// An owned vehicle with no policy for the same person. Candidate for
/// additional coverage.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq, Hash)]
pub struct UpsellOpportunity {
    pub person_id: String,
    pub vehicle_id: String,
}

impl UpsellOpportunity {
    pub fn new(person_id: impl Into<String>, vehicle_id: impl Into<String>) -> Self {
        Self {
            person_id: person_id.into(),
            vehicle_id: vehicle_id.into(),
        }
    }
}

impl From<OwnedVehicle> for UpsellOpportunity {
    fn from(vehicle: OwnedVehicle) -> Self {
        Self {
            person_id: vehicle.person_id,
            vehicle_id: vehicle.vehicle_id,
        }
    }
}
