use serde::{Deserialize, Serialize};

/// A person eligible for selection. Identity is the `id` field; `name` is
/// only used as an ordering key and carries no uniqueness guarantee.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Person {
    pub id: i64,
    pub name: String,
}

impl Person {
    pub fn new(id: i64, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }
}

/// Per-country competitive standing for one person. Lower rank is better.
///
/// Zero or one row per person is the expected shape. The selector tolerates
/// zero (the person is simply unranked) and, defensively, takes the first
/// matching row when duplicates exist.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CountryRanking {
    pub person_id: i64,
    pub country: String,
    pub rank: i32,
}

impl CountryRanking {
    pub fn new(person_id: i64, country: impl Into<String>, rank: i32) -> Self {
        Self {
            person_id,
            country: country.into(),
            rank,
        }
    }
}

/// One entry of the selector's output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RankedResult {
    pub person_id: i64,
    pub rank: i32,
}

impl RankedResult {
    pub fn new(person_id: i64, rank: i32) -> Self {
        Self { person_id, rank }
    }
}
