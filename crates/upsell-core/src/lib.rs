//! # upsell-core
//!
//! Core value types and error types for upsell discovery.
//!
//! This crate provides the types shared across all upsell crates:
//! - Value records for policies, owned vehicles, and upsell opportunities
//! - Report types returned by the finder and rendered by the CLI
//! - Cross-cutting error types

pub mod entities;
pub mod errors;
pub mod responses;

pub use entities::{OwnedVehicle, Policy, UpsellOpportunity};
pub use errors::CoreError;
pub use responses::{UpsellReport, UpsellStats};
