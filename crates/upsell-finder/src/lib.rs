//! # upsell-finder
//!
//! Finds upsell opportunities: vehicles a policy holder owns that none of
//! their policies cover.
//!
//! The pipeline extracts the distinct person ids from a batch of policies,
//! splits them into chunks of at most `chunk_size` (100 by default), asks a
//! [`VehicleOwnershipLookup`] for each chunk's owned vehicles, drops the
//! ones already covered by a policy for the same person, and dedups the
//! rest.
//!
//! Any chunk failure aborts the whole call. A silently skipped chunk would
//! look the same as "no upsell" for every person in it.

mod batch;
mod error;
mod finder;
mod lookup;
mod memory;

pub use batch::{DEFAULT_CHUNK_SIZE, chunk_person_ids, distinct_person_ids};
pub use error::{FinderError, LookupError};
pub use finder::{FinderOptions, UpsellFinder};
pub use lookup::VehicleOwnershipLookup;
pub use memory::{FixedOwnershipLookup, InMemoryOwnershipLookup};
