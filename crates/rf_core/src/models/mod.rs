//! Data model for the rank selection pipeline
//!
//! All entities are transient: created by the caller, consumed by one
//! selection call, discarded. Nothing here is persisted.

pub mod person;

pub use person::{CountryRanking, Person, RankedResult};
