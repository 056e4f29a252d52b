//! Selector/Ranker core
//!
//! Joins people to their ranking record, filters by country and rank
//! bounds, and emits a capped, deterministically ordered result list.
//!
//! Ordering is rank ascending, then country in filter-declaration order,
//! then case-insensitive name. The cap truncates that fully-ordered
//! sequence globally; no round-robin interleaving across countries.

mod order;


use std::collections::BTreeMap;

use log::debug;

use crate::models::{CountryRanking, Person, RankedResult};
use order::{fold, CountryOrder};

/// Person joined to its first matching ranking, after filtering.
struct JoinRecord {
    person_id: i64,
    name_key: String,
    country_pos: usize,
    rank: i32,
}

/// Select up to `max_count` people ranked in one of the filter countries
/// within `[min_rank, max_rank]`, ordered by ascending rank, then country
/// in filter-declaration order, then case-insensitive name.
///
/// Every degenerate input resolves to an empty list rather than an error:
/// an empty `country_filter`, `max_count <= 0` (negatives are treated as
/// zero), `min_rank > max_rank`, or no eligible record after filtering.
///
/// A person with no ranking row is excluded. When duplicate ranking rows
/// exist for one person the first row wins; when the same person id is
/// listed twice in `people` it is emitted at most once. Two people whose
/// folded names are equal within the same rank and country keep their
/// relative order from the `people` input.
pub fn filter_by_country_with_rank(
    people: &[Person],
    rankings: &[CountryRanking],
    country_filter: &[String],
    min_rank: i32,
    max_rank: i32,
    max_count: i64,
) -> Vec<RankedResult> {
    // No countries to filter returns an empty list
    if country_filter.is_empty() {
        debug!("selection: empty country filter, returning empty result");
        return Vec::new();
    }
    let cap = max_count.max(0) as usize;
    if cap == 0 {
        debug!("selection: non-positive max_count {}, returning empty result", max_count);
        return Vec::new();
    }
    if min_rank > max_rank {
        debug!(
            "selection: inverted rank bounds [{}, {}], returning empty result",
            min_rank, max_rank
        );
        return Vec::new();
    }

    let country_order = CountryOrder::from_filter(country_filter);

    // Left-join each person to its first ranking row, dropping the
    // unranked, the out-of-filter, and the out-of-range. Grouping by rank
    // in an ordered map keeps the ascending-rank iteration explicit.
    let mut by_rank: BTreeMap<i32, Vec<JoinRecord>> = BTreeMap::new();
    let mut seen_ids = std::collections::HashSet::new();
    let mut eligible = 0usize;
    for person in people {
        let Some(ranking) = rankings.iter().find(|r| r.person_id == person.id) else {
            continue;
        };
        let Some(country_pos) = country_order.position(&ranking.country) else {
            continue;
        };
        if ranking.rank < min_rank || ranking.rank > max_rank {
            continue;
        }
        if !seen_ids.insert(person.id) {
            continue;
        }
        by_rank.entry(ranking.rank).or_default().push(JoinRecord {
            person_id: person.id,
            name_key: fold(&person.name),
            country_pos,
            rank: ranking.rank,
        });
        eligible += 1;
    }

    if by_rank.is_empty() {
        debug!("selection: no eligible records");
        return Vec::new();
    }

    // Emit rank groups in ascending order; within a group, bucket by the
    // filter-declared country position, sort each bucket by folded name
    // (stable, so equal names keep people-input order), and truncate the
    // whole sequence at the cap.
    let mut results = Vec::with_capacity(cap.min(eligible));
    'emit: for group in by_rank.values() {
        let mut buckets: Vec<Vec<&JoinRecord>> = vec![Vec::new(); country_order.len()];
        for record in group {
            buckets[record.country_pos].push(record);
        }
        for bucket in &mut buckets {
            bucket.sort_by(|a, b| a.name_key.cmp(&b.name_key));
            for record in bucket.iter() {
                if results.len() == cap {
                    break 'emit;
                }
                results.push(RankedResult::new(record.person_id, record.rank));
            }
        }
    }

    debug!(
        "selection: {} eligible, emitted {} (cap {})",
        eligible,
        results.len(),
        cap
    );
    results
}
