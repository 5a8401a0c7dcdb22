//! Lookup and finder error types.

use std::time::Duration;

use thiserror::Error;
use upsell_core::CoreError;

/// Failures reported by a [`VehicleOwnershipLookup`](crate::VehicleOwnershipLookup).
///
/// A person with no vehicles is an empty result, never an error.
#[derive(Debug, Error)]
pub enum LookupError {
    /// The backing store could not be reached. Retrying may succeed.
    #[error("ownership source unavailable: {0}")]
    Unavailable(String),

    /// The backing store rejected the request or returned unusable data.
    #[error("ownership source error: {0}")]
    Backend(String),
}

impl LookupError {
    /// Whether a retry of the same call could succeed.
    #[must_use]
    pub const fn is_transient(&self) -> bool {
        matches!(self, Self::Unavailable(_))
    }
}

/// Errors that abort a whole `find_potential_upsells` call.
///
/// No partial result is ever returned alongside one of these.
#[derive(Debug, Error)]
pub enum FinderError {
    /// A policy in the input failed validation.
    #[error("invalid policy at index {index}: {source}")]
    InvalidInput {
        index: usize,
        #[source]
        source: CoreError,
    },

    /// The ownership lookup failed for one chunk of person ids.
    #[error("ownership lookup failed for chunk {chunk}: {source}")]
    Lookup {
        chunk: usize,
        #[source]
        source: LookupError,
    },

    /// The ownership lookup for one chunk did not finish in time.
    #[error("ownership lookup for chunk {chunk} timed out after {timeout:?}")]
    Timeout { chunk: usize, timeout: Duration },

    /// Finder options cannot be used (zero chunk size or concurrency).
    #[error("invalid finder options: {0}")]
    InvalidOptions(String),
}
