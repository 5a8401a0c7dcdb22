//! The upsell pipeline: distinct persons, chunked lookups, coverage filter,
//! dedup.

use std::collections::HashSet;
use std::time::Duration;

use futures_util::{StreamExt, stream};
use upsell_config::FinderConfig;
use upsell_core::{OwnedVehicle, Policy, UpsellOpportunity, UpsellReport, UpsellStats};

use crate::batch::{DEFAULT_CHUNK_SIZE, chunk_person_ids, distinct_person_ids};
use crate::error::FinderError;
use crate::lookup::VehicleOwnershipLookup;

/// Batching, timeout, and concurrency settings for [`UpsellFinder`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FinderOptions {
    /// Maximum distinct person ids per lookup call.
    pub chunk_size: usize,
    /// Applied to each lookup call separately.
    pub lookup_timeout: Option<Duration>,
    /// Chunk lookups allowed in flight at once.
    pub max_concurrent_lookups: usize,
}

impl Default for FinderOptions {
    fn default() -> Self {
        Self {
            chunk_size: DEFAULT_CHUNK_SIZE,
            lookup_timeout: None,
            max_concurrent_lookups: 1,
        }
    }
}

impl From<&FinderConfig> for FinderOptions {
    fn from(config: &FinderConfig) -> Self {
        Self {
            chunk_size: config.chunk_size,
            lookup_timeout: config.lookup_timeout(),
            max_concurrent_lookups: config.max_concurrent_lookups,
        }
    }
}

impl FinderOptions {
    fn validate(&self) -> Result<(), FinderError> {
        if self.chunk_size == 0 {
            return Err(FinderError::InvalidOptions(
                "chunk_size must be at least 1".to_string(),
            ));
        }
        if self.max_concurrent_lookups == 0 {
            return Err(FinderError::InvalidOptions(
                "max_concurrent_lookups must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}

/// Finds owned vehicles that no input policy covers.
///
/// ```no_run
/// use upsell_core::{OwnedVehicle, Policy};
/// use upsell_finder::{InMemoryOwnershipLookup, UpsellFinder};
///
/// # async fn run() -> Result<(), upsell_finder::FinderError> {
/// let lookup = InMemoryOwnershipLookup::from_records([
///     OwnedVehicle::new("P1", "V8"),
///     OwnedVehicle::new("P1", "V3"),
/// ]);
/// let finder = UpsellFinder::new(lookup);
/// let upsells = finder
///     .find_potential_upsells(&[Policy::new("P1", "V8")])
///     .await?;
/// assert_eq!(upsells.len(), 1);
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct UpsellFinder<L> {
    lookup: L,
    options: FinderOptions,
}

impl<L: VehicleOwnershipLookup> UpsellFinder<L> {
    pub fn new(lookup: L) -> Self {
        Self::with_options(lookup, FinderOptions::default())
    }

    pub const fn with_options(lookup: L, options: FinderOptions) -> Self {
        Self { lookup, options }
    }

    #[must_use]
    pub const fn options(&self) -> &FinderOptions {
        &self.options
    }

    pub const fn lookup(&self) -> &L {
        &self.lookup
    }

    /// Owned vehicles of the policy holders that none of `policies` covers.
    ///
    /// Output is unique by `(person_id, vehicle_id)`, ordered by chunk, then
    /// by the order the lookup returned records within the chunk.
    ///
    /// # Errors
    ///
    /// Returns [`FinderError`] if a policy is invalid, the options are
    /// unusable, or any chunk lookup fails or times out. No partial result
    /// is returned.
    pub async fn find_potential_upsells(
        &self,
        policies: &[Policy],
    ) -> Result<Vec<UpsellOpportunity>, FinderError> {
        Ok(self.find_with_report(policies).await?.opportunities)
    }

    /// Same as [`Self::find_potential_upsells`], with pipeline counters.
    ///
    /// # Errors
    ///
    /// See [`Self::find_potential_upsells`].
    pub async fn find_with_report(
        &self,
        policies: &[Policy],
    ) -> Result<UpsellReport, FinderError> {
        self.options.validate()?;
        for (index, policy) in policies.iter().enumerate() {
            policy
                .validate()
                .map_err(|source| FinderError::InvalidInput { index, source })?;
        }

        let person_ids = distinct_person_ids(policies);
        let chunks = chunk_person_ids(&person_ids, self.options.chunk_size);
        let mut stats = UpsellStats {
            policies: policies.len(),
            distinct_persons: person_ids.len(),
            chunks: chunks.len(),
            ..UpsellStats::default()
        };

        let covered: HashSet<(&str, &str)> = policies.iter().map(Policy::key).collect();
        let mut seen = HashSet::new();
        let mut opportunities = Vec::new();

        // `buffered` yields in submission order, so concurrency never changes
        // the output order. Dropping the stream on error cancels in-flight
        // lookups.
        let mut lookups = stream::iter(chunks.iter().enumerate())
            .map(|(index, chunk)| self.lookup_chunk(index, chunk))
            .buffered(self.options.max_concurrent_lookups);

        while let Some(result) = lookups.next().await {
            let (index, vehicles) = result?;
            let members: HashSet<&str> = chunks[index].iter().map(String::as_str).collect();
            stats.ownerships_returned += vehicles.len();

            let mut extraneous = 0;
            for vehicle in vehicles {
                if !members.contains(vehicle.person_id.as_str()) {
                    extraneous += 1;
                    continue;
                }
                if covered.contains(&vehicle.key()) {
                    stats.already_covered += 1;
                    continue;
                }
                let opportunity = UpsellOpportunity::from(vehicle);
                if seen.insert(opportunity.clone()) {
                    opportunities.push(opportunity);
                } else {
                    stats.duplicates_dropped += 1;
                }
            }

            if extraneous > 0 {
                tracing::debug!(
                    chunk = index,
                    extraneous,
                    "ignored records for persons outside chunk"
                );
            }
            stats.extraneous_ignored += extraneous;
        }

        stats.opportunities = opportunities.len();
        tracing::info!(
            policies = stats.policies,
            persons = stats.distinct_persons,
            chunks = stats.chunks,
            opportunities = stats.opportunities,
            "upsell search complete"
        );

        Ok(UpsellReport {
            opportunities,
            stats,
        })
    }

    async fn lookup_chunk(
        &self,
        index: usize,
        chunk: &[String],
    ) -> Result<(usize, Vec<OwnedVehicle>), FinderError> {
        tracing::debug!(
            chunk = index,
            persons = chunk.len(),
            "looking up owned vehicles"
        );

        let lookup = self.lookup.lookup_owned_vehicles(chunk);
        let result = match self.options.lookup_timeout {
            Some(timeout) => tokio::time::timeout(timeout, lookup).await.map_err(|_| {
                tracing::warn!(chunk = index, ?timeout, "ownership lookup timed out");
                FinderError::Timeout {
                    chunk: index,
                    timeout,
                }
            })?,
            None => lookup.await,
        };

        result.map(|vehicles| (index, vehicles)).map_err(|source| {
            tracing::warn!(chunk = index, error = %source, "ownership lookup failed");
            FinderError::Lookup {
                chunk: index,
                source,
            }
        })
    }
}
