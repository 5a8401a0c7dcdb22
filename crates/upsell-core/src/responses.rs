//! Report types returned by `UpsellFinder::find_with_report` and printed by
//! `upsell find --stats`.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::entities::UpsellOpportunity;

/// Counters collected while running the upsell pipeline once.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct UpsellStats {
    /// Input policies, duplicates included.
    pub policies: usize,
    /// Distinct person identifiers extracted from the policies.
    pub distinct_persons: usize,
    /// Lookup calls issued (one per chunk).
    pub chunks: usize,
    /// Ownership records returned by the lookup, extraneous ones included.
    pub ownerships_returned: usize,
    /// Records for persons outside the queried chunk.
    pub extraneous_ignored: usize,
    /// Records dropped because a policy already covers the pair.
    pub already_covered: usize,
    /// Records dropped as repeats of an earlier uncovered pair.
    pub duplicates_dropped: usize,
    pub opportunities: usize,
}

/// Opportunities plus the counters that produced them.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct UpsellReport {
    pub opportunities: Vec<UpsellOpportunity>,
    pub stats: UpsellStats,
}
