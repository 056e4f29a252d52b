//! JSON boundary for the selector
//!
//! One request in, one response out, both as JSON strings. The host
//! application owns transport and storage; this module only owns the
//! schema and the mapping onto [`filter_by_country_with_rank`].

use log::debug;
use serde::{Deserialize, Serialize};

use crate::error::{RankingError, Result};
use crate::models::{CountryRanking, Person, RankedResult};
use crate::selection::filter_by_country_with_rank;

/// Current request schema version.
pub const SCHEMA_VERSION: u8 = 1;

#[derive(Debug, Deserialize)]
pub struct SelectRequest {
    pub schema_version: u8,
    pub people: Vec<Person>,
    pub rankings: Vec<CountryRanking>,
    pub country_filter: Vec<String>,
    pub min_rank: i32,
    pub max_rank: i32,
    pub max_count: i64,
}

#[derive(Debug, Serialize)]
pub struct SelectResponse {
    pub count: usize,
    pub results: Vec<RankedResult>,
}

/// Run one selection over a JSON-encoded [`SelectRequest`] and return the
/// JSON-encoded [`SelectResponse`].
///
/// Fails only on malformed JSON or an unsupported `schema_version`; every
/// degenerate selection input still produces a well-formed empty response.
pub fn select_ranked_json(request_json: &str) -> Result<String> {
    let request: SelectRequest = serde_json::from_str(request_json)?;

    if request.schema_version != SCHEMA_VERSION {
        debug!(
            "select_ranked_json: rejected schema_version {}",
            request.schema_version
        );
        return Err(RankingError::InvalidParameter(format!(
            "unsupported schema_version: expected {}, got {}",
            SCHEMA_VERSION, request.schema_version
        )));
    }

    let results = filter_by_country_with_rank(
        &request.people,
        &request.rankings,
        &request.country_filter,
        request.min_rank,
        request.max_rank,
        request.max_count,
    );

    let response = SelectResponse {
        count: results.len(),
        results,
    };
    Ok(serde_json::to_string(&response)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scenario_request() -> String {
        serde_json::json!({
            "schema_version": 1,
            "people": [
                { "id": 1, "name": "Bob" },
                { "id": 2, "name": "Amy" }
            ],
            "rankings": [
                { "person_id": 1, "country": "US", "rank": 5 },
                { "person_id": 2, "country": "US", "rank": 5 }
            ],
            "country_filter": ["US"],
            "min_rank": 0,
            "max_rank": 10,
            "max_count": 10
        })
        .to_string()
    }

    #[test]
    fn round_trips_a_selection() {
        let response_json = select_ranked_json(&scenario_request()).unwrap();
        let response: serde_json::Value = serde_json::from_str(&response_json).unwrap();

        assert_eq!(response["count"], 2);
        assert_eq!(response["results"][0]["person_id"], 2);
        assert_eq!(response["results"][0]["rank"], 5);
        assert_eq!(response["results"][1]["person_id"], 1);
    }

    #[test]
    fn rejects_unknown_schema_version() {
        let request = scenario_request().replace("\"schema_version\":1", "\"schema_version\":9");
        let err = select_ranked_json(&request).unwrap_err();
        assert!(matches!(err, RankingError::InvalidParameter(_)));
    }

    #[test]
    fn malformed_payload_is_a_deserialization_error() {
        let err = select_ranked_json("{\"schema_version\": 1}").unwrap_err();
        assert!(matches!(err, RankingError::DeserializationError(_)));
    }
}
