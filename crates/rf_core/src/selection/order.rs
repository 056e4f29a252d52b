//! Case folding and country ordering helpers
//!
//! One shared lowercase fold is used for every country and name comparison
//! so the two code paths can never diverge on locale behavior.

use std::collections::HashMap;

/// Simple lowercase fold used for all case-insensitive comparisons.
pub(crate) fn fold(s: &str) -> String {
    s.to_lowercase()
}

/// First-occurrence position of each filter country, keyed by folded name.
///
/// The position doubles as the secondary sort key: within a rank group,
/// countries are emitted in the order the caller declared them in the
/// filter, not in any map iteration order. Duplicate filter entries keep
/// the position of their first occurrence.
#[derive(Debug)]
pub(crate) struct CountryOrder {
    positions: HashMap<String, usize>,
    len: usize,
}

impl CountryOrder {
    pub(crate) fn from_filter(country_filter: &[String]) -> Self {
        let mut positions = HashMap::with_capacity(country_filter.len());
        for country in country_filter {
            let key = fold(country);
            let next = positions.len();
            positions.entry(key).or_insert(next);
        }
        let len = positions.len();
        Self { positions, len }
    }

    /// Position of `country` in the filter, or `None` if it was not listed.
    pub(crate) fn position(&self, country: &str) -> Option<usize> {
        self.positions.get(&fold(country)).copied()
    }

    /// Number of distinct (folded) countries in the filter.
    pub(crate) fn len(&self) -> usize {
        self.len
    }
}
