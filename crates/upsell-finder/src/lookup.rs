//! The ownership lookup seam consumed by the finder.

use std::future::Future;
use std::sync::Arc;

use upsell_core::OwnedVehicle;

use crate::error::LookupError;

/// Resolves person ids to the vehicles they own.
///
/// The finder calls this once per chunk with a non-empty slice of at most
/// `chunk_size` distinct person ids. Implementations return every ownership
/// record for those persons, zero or more per person. Records for persons
/// outside the slice are tolerated and ignored by the finder. The filter
/// applies per chunk: a record for a policy holder who belongs to a
/// different chunk is dropped here and counted on that chunk's own call.
pub trait VehicleOwnershipLookup: Send + Sync {
    fn lookup_owned_vehicles(
        &self,
        person_ids: &[String],
    ) -> impl Future<Output = Result<Vec<OwnedVehicle>, LookupError>> + Send;
}

impl<T: VehicleOwnershipLookup + ?Sized> VehicleOwnershipLookup for &T {
    fn lookup_owned_vehicles(
        &self,
        person_ids: &[String],
    ) -> impl Future<Output = Result<Vec<OwnedVehicle>, LookupError>> + Send {
        (**self).lookup_owned_vehicles(person_ids)
    }
}

impl<T: VehicleOwnershipLookup + ?Sized> VehicleOwnershipLookup for Arc<T> {
    fn lookup_owned_vehicles(
        &self,
        person_ids: &[String],
    ) -> impl Future<Output = Result<Vec<OwnedVehicle>, LookupError>> + Send {
        (**self).lookup_owned_vehicles(person_ids)
    }
}
