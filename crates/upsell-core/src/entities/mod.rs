//! Value records exchanged by the upsell pipeline.
//!
//! Every record is a `(person_id, vehicle_id)` pair with structural equality
//! and hashing. None of them carry identity beyond their field values.

mod opportunity;
mod owned_vehicle;
mod policy;

pub use opportunity::UpsellOpportunity;
pub use owned_vehicle::OwnedVehicle;
pub use policy::Policy;

use crate::errors::CoreError;

/// Reject identifiers that are empty or whitespace only.
pub(crate) fn require_id(field: &str, value: &str) -> Result<(), CoreError> {
    if value.trim().is_empty() {
        return Err(CoreError::Validation(format!("{field} must not be empty")));
    }
    Ok(())
}
