//! In-process ownership lookups.

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};

use upsell_core::OwnedVehicle;

use crate::error::LookupError;
use crate::lookup::VehicleOwnershipLookup;

/// Ownership records held in memory and indexed by person.
///
/// Answers only for the requested persons: records come back in request
/// order, then in insertion order for each person.
#[derive(Debug, Clone, Default)]
pub struct InMemoryOwnershipLookup {
    by_person: HashMap<String, Vec<String>>,
    len: usize,
}

impl InMemoryOwnershipLookup {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn from_records(records: impl IntoIterator<Item = OwnedVehicle>) -> Self {
        let mut lookup = Self::new();
        for record in records {
            lookup.insert(record);
        }
        lookup
    }

    /// Record that `vehicle.person_id` owns `vehicle.vehicle_id`. Repeats are
    /// kept as-is.
    pub fn insert(&mut self, vehicle: OwnedVehicle) {
        self.by_person
            .entry(vehicle.person_id)
            .or_default()
            .push(vehicle.vehicle_id);
        self.len += 1;
    }

    #[must_use]
    pub const fn len(&self) -> usize {
        self.len
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    fn owned_by(&self, person_ids: &[String]) -> Vec<OwnedVehicle> {
        person_ids
            .iter()
            .filter_map(|person_id| {
                self.by_person
                    .get(person_id)
                    .map(|vehicles| (person_id, vehicles))
            })
            .flat_map(|(person_id, vehicles)| {
                vehicles
                    .iter()
                    .map(move |vehicle_id| OwnedVehicle::new(person_id.clone(), vehicle_id.clone()))
            })
            .collect()
    }
}

impl FromIterator<OwnedVehicle> for InMemoryOwnershipLookup {
    fn from_iter<I: IntoIterator<Item = OwnedVehicle>>(iter: I) -> Self {
        Self::from_records(iter)
    }
}

impl VehicleOwnershipLookup for InMemoryOwnershipLookup {
    async fn lookup_owned_vehicles(
        &self,
        person_ids: &[String],
    ) -> Result<Vec<OwnedVehicle>, LookupError> {
        Ok(self.owned_by(person_ids))
    }
}

/// Returns the same records for every call, whichever persons are asked for.
///
/// Stands in for a backend during demos and tests. The finder drops the
/// records that belong to persons outside each queried chunk.
#[derive(Debug, Default)]
pub struct FixedOwnershipLookup {
    records: Vec<OwnedVehicle>,
    calls: AtomicUsize,
}

impl FixedOwnershipLookup {
    #[must_use]
    pub fn new(records: Vec<OwnedVehicle>) -> Self {
        Self {
            records,
            calls: AtomicUsize::new(0),
        }
    }

    /// Number of lookup calls served so far.
    #[must_use]
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl VehicleOwnershipLookup for FixedOwnershipLookup {
    async fn lookup_owned_vehicles(
        &self,
        _person_ids: &[String],
    ) -> Result<Vec<OwnedVehicle>, LookupError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(self.records.clone())
    }
}
