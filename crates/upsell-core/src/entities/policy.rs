use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::require_id;
use crate::errors::CoreError;

/// Confirmed coverage: `person_id` already holds a policy for `vehicle_id`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq, Hash)]
pub struct Policy {
    pub person_id: String,
    pub vehicle_id: String,
}

impl Policy {
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

    /// Check that both identifiers are present.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::Validation`] if either identifier is empty or
    /// whitespace only.
    pub fn validate(&self) -> Result<(), CoreError> {
        require_id("person_id", &self.person_id)?;
        require_id("vehicle_id", &self.vehicle_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validate_accepts_populated_ids() {
        assert!(Policy::new("P1", "V8").validate().is_ok());
    }

    #[test]
    fn validate_rejects_blank_person() {
        let err = Policy::new("  ", "V8").validate().unwrap_err();
        assert!(err.to_string().contains("person_id"));
    }

    #[test]
    fn validate_rejects_empty_vehicle() {
        let err = Policy::new("P1", "").validate().unwrap_err();
        assert!(matches!(err, CoreError::Validation(ref msg) if msg.contains("vehicle_id")));
    }

    #[test]
    fn key_borrows_both_ids() {
        let policy = Policy::new("P1", "V8");
        assert_eq!(policy.key(), ("P1", "V8"));
    }
}
