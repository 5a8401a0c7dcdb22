//! Person id extraction and fixed-size batching.

use std::collections::HashSet;

use upsell_core::Policy;

/// Default number of distinct person ids sent per lookup call.
pub const DEFAULT_CHUNK_SIZE: usize = 100;

/// Distinct person ids in first-seen order.
#[must_use]
pub fn distinct_person_ids(policies: &[Policy]) -> Vec<String> {
    let mut seen = HashSet::with_capacity(policies.len());
    policies
        .iter()
        .filter(|&policy| seen.insert(policy.person_id.as_str()))
        .map(|policy| policy.person_id.clone())
        .collect()
}

/// Split `person_ids` into contiguous chunks of at most `chunk_size`.
///
/// Empty input yields no chunks.
///
/// # Panics
///
/// Panics if `chunk_size` is zero.
#[must_use]
pub fn chunk_person_ids(person_ids: &[String], chunk_size: usize) -> Vec<&[String]> {
    person_ids.chunks(chunk_size).collect()
}
