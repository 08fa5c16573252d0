//! Rank-character search over the chart index.
//!
//! A query is a multiset of rank characters. A combination matches when it
//! holds at least as many of each queried character; a full four-character
//! query asks for the exact multiset instead.

use std::collections::HashMap;

use itertools::Itertools;
use tracing::debug;

use crate::chart::StrategyIndex;

/// Query length at which matching switches from superset to exact.
const FULL_HAND_LEN: usize = 4;

pub fn search(query: &str, index: &StrategyIndex) -> Vec<String> {
    let query = query.trim().to_lowercase();
    let Some(probe) = query.chars().next() else {
        return Vec::new();
    };

    let wanted: HashMap<char, usize> = query.chars().counts();
    let exact = query.chars().count() == FULL_HAND_LEN;

    let candidates = index.candidates(probe);
    let matches: Vec<String> = candidates
        .iter()
        .filter(|combo| {
            let have: HashMap<char, usize> = combo.to_lowercase().chars().counts();
            wanted.iter().all(|(c, &need)| {
                let n = have.get(c).copied().unwrap_or(0);
                n >= need && (!exact || n == need)
            })
        })
        .cloned()
        .collect();

    debug!(
        query = query.as_str(),
        probe = %probe,
        candidates = candidates.len(),
        matches = matches.len(),
        "search"
    );
    matches
}
