//! Cross-cutting error types.
//!
//! Lookup and pipeline failures are defined in `upsell-finder`. A unified
//! error is deferred to `upsell-cli` where all crate errors converge.

use thiserror::Error;

/// Errors that can be raised by any upsell crate.
#[derive(Debug, Error)]
pub enum CoreError {
    /// Data failed validation (empty identifiers, malformed records).
    #[error("Validation error: {0}")]
    Validation(String),
}
