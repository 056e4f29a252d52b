//! # rf_core - Deterministic Country-Filtered Rank Selection
//!
//! This library selects and orders a bounded subset of people by their
//! per-country rank, with JSON API for easy integration with host
//! applications.
//!
//! ## Features
//! - 100% deterministic output (no reliance on hash-map iteration order)
//! - Case-insensitive country and name matching
//! - Global output cap with full-ordering truncation
//! - JSON API for easy integration

// Selection entry points take the full query as positional arguments
#![allow(clippy::too_many_arguments)]

pub mod api;
pub mod error;
pub mod models;
pub mod selection;

// Re-export main API functions
pub use api::{select_ranked_json, SelectRequest, SelectResponse};
pub use error::{RankingError, Result};
pub use models::{CountryRanking, Person, RankedResult};
pub use selection::filter_by_country_with_rank;
