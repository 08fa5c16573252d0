//! The precomputed strategy chart.
//!
//! The JSON file has three maps: `hands` (rank combination -> pattern id ->
//! decision key -> percentage), `index` (rank character -> combinations
//! containing it) and a legacy `patterns` table. Everything is validated
//! once on load into a read-only `StrategyIndex`.

use std::collections::{BTreeMap, HashMap};
use std::fs;
use std::path::Path;

use serde::Deserialize;
use serde_json::{Map, Value};
use tracing::{debug, info, warn};

use crate::cards::Hand;
use crate::error::{ChartError, ChartResult};
use crate::suit_pattern::SuitPattern;

// ---------------------------------------------------------------------------
// Decision points
// ---------------------------------------------------------------------------

/// Every frequency the chart records, at 100bb effective.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum DecisionPoint {
    /// SB first in: raise frequency.
    SbOpen,
    /// SB facing a 3-bet: 4-bet frequency.
    Sb4Bet,
    /// SB facing a 3-bet: call frequency.
    SbCall3Bet,
    /// BB facing the open: 3-bet frequency.
    Bb3Bet,
    /// BB facing the open: call frequency.
    BbCall,
    /// BB facing a 4-bet: 5-bet frequency.
    Bb5Bet,
    /// BB facing a 4-bet: call frequency.
    BbCall4Bet,
    /// BB facing a 4-bet: fold frequency.
    BbFold4Bet,
}

pub const ALL_DECISION_POINTS: [DecisionPoint; 8] = [
    DecisionPoint::SbOpen,
    DecisionPoint::Sb4Bet,
    DecisionPoint::SbCall3Bet,
    DecisionPoint::Bb3Bet,
    DecisionPoint::BbCall,
    DecisionPoint::Bb5Bet,
    DecisionPoint::BbCall4Bet,
    DecisionPoint::BbFold4Bet,
];

impl DecisionPoint {
    /// Key used in the chart file.
    pub fn key(self) -> &'static str {
        match self {
            DecisionPoint::SbOpen => "100BB SB open",
            DecisionPoint::Sb4Bet => "100BB SB 4bet",
            DecisionPoint::SbCall3Bet => "100BB SB Cv3bet",
            DecisionPoint::Bb3Bet => "100BB BB 3bet",
            DecisionPoint::BbCall => "100BB BB call",
            DecisionPoint::Bb5Bet => "100BB BB 5bet",
            DecisionPoint::BbCall4Bet => "100BB BB Cv4bet",
            DecisionPoint::BbFold4Bet => "100BB BB Fv4bet",
        }
    }

    pub fn from_key(key: &str) -> Option<DecisionPoint> {
        let key = key.trim();
        ALL_DECISION_POINTS.iter().copied().find(|d| d.key() == key)
    }
}

/// Percentages per decision point. Points absent from the data read as 0.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ActionFrequencies {
    values: BTreeMap<DecisionPoint, f64>,
}

impl ActionFrequencies {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, point: DecisionPoint, pct: f64) -> Self {
        self.values.insert(point, pct);
        self
    }

    pub fn get(&self, point: DecisionPoint) -> f64 {
        self.values.get(&point).copied().unwrap_or(0.0)
    }

    pub fn contains(&self, point: DecisionPoint) -> bool {
        self.values.contains_key(&point)
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    fn from_raw(combo: &str, raw: &HashMap<String, f64>) -> ChartResult<Self> {
        let mut values = BTreeMap::new();
        for (key, &pct) in raw {
            let point = DecisionPoint::from_key(key).ok_or_else(|| {
                ChartError::InvalidData(format!("{}: unknown decision point '{}'", combo, key))
            })?;
            if !pct.is_finite() || !(0.0..=100.0).contains(&pct) {
                return Err(ChartError::InvalidData(format!(
                    "{}: '{}' = {} is outside 0-100",
                    combo, key, pct
                )));
            }
            values.insert(point, pct);
        }
        Ok(ActionFrequencies { values })
    }
}

// ---------------------------------------------------------------------------
// Strategy index
// ---------------------------------------------------------------------------

#[derive(Deserialize)]
struct RawChart {
    hands: HashMap<String, HashMap<String, HashMap<String, f64>>>,
    index: Map<String, Value>,
    #[serde(default)]
    patterns: Map<String, Value>,
}

pub type PatternStrategies = BTreeMap<SuitPattern, ActionFrequencies>;

#[derive(Debug, Clone, Default)]
pub struct StrategyIndex {
    hands: HashMap<String, PatternStrategies>,
    index: HashMap<char, Vec<String>>,
}

impl StrategyIndex {
    pub fn load(path: &Path) -> ChartResult<StrategyIndex> {
        debug!(path = %path.display(), "reading chart data");
        let contents = fs::read_to_string(path).map_err(|source| ChartError::DataRead {
            path: path.to_path_buf(),
            source,
        })?;
        let chart = StrategyIndex::from_json_str(&contents)?;
        info!(
            path = %path.display(),
            hands = chart.hands.len(),
            index_keys = chart.index.len(),
            "chart loaded"
        );
        Ok(chart)
    }

    pub fn from_json_str(json: &str) -> ChartResult<StrategyIndex> {
        let raw: RawChart = serde_json::from_str(json)?;
        StrategyIndex::from_raw(raw)
    }

    fn from_raw(raw: RawChart) -> ChartResult<StrategyIndex> {
        for (id, name) in legacy_pattern_mismatches(&raw.patterns) {
            let expected = id.and_then(SuitPattern::from_id).map(|p| p.name());
            warn!(?id, pattern = name.as_str(), ?expected, "legacy pattern table disagrees with built-in ids");
        }

        let mut hands = HashMap::with_capacity(raw.hands.len());
        for (combo, by_pattern) in &raw.hands {
            Hand::parse(combo).map_err(|e| {
                ChartError::InvalidData(format!("hand key '{}': {}", combo, e))
            })?;
            let mut strategies = PatternStrategies::new();
            for (id, freqs) in by_pattern {
                let pattern = id
                    .trim()
                    .parse::<u8>()
                    .ok()
                    .and_then(SuitPattern::from_id)
                    .ok_or_else(|| {
                        ChartError::InvalidData(format!("{}: unknown pattern id '{}'", combo, id))
                    })?;
                strategies.insert(pattern, ActionFrequencies::from_raw(combo, freqs)?);
            }
            hands.insert(combo.clone(), strategies);
        }

        let mut index: HashMap<char, Vec<String>> = HashMap::with_capacity(raw.index.len());
        for (key, combos) in raw.index {
            let combos: Vec<String> = serde_json::from_value(combos)?;
            let mut chars = key.chars();
            let c = match (chars.next(), chars.next()) {
                (Some(c), None) => c.to_ascii_lowercase(),
                _ => {
                    return Err(ChartError::InvalidData(format!(
                        "index key '{}' is not a single rank character",
                        key
                    )))
                }
            };
            let bucket = index.entry(c).or_default();
            for combo in combos {
                if !bucket.contains(&combo) {
                    bucket.push(combo);
                }
            }
        }

        Ok(StrategyIndex { hands, index })
    }

    /// Combinations listed under a rank character, in file order.
    pub fn candidates(&self, c: char) -> &[String] {
        self.index
            .get(&c.to_ascii_lowercase())
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Pattern strategies for a combination, if the chart has any.
    pub fn strategies(&self, combo: &str) -> Option<&PatternStrategies> {
        self.hands.get(combo)
    }

    pub fn num_hands(&self) -> usize {
        self.hands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.hands.is_empty() && self.index.is_empty()
    }
}

/// The file's own id/name table predates the built-in one. Either direction
/// (id -> name or name -> id) is accepted. Returns the entries that disagree
/// with the built-in ids; `None` marks an id that is missing or out of range.
fn legacy_pattern_mismatches(patterns: &Map<String, Value>) -> Vec<(Option<u8>, String)> {
    let mut mismatches = Vec::new();
    for (key, value) in patterns {
        let (id, name) = match value {
            Value::String(name) => (key.trim().parse::<u8>().ok(), name.as_str()),
            Value::Number(n) => (n.as_u64().and_then(|id| u8::try_from(id).ok()), key.as_str()),
            _ => (None, key.as_str()),
        };
        let expected = id.and_then(SuitPattern::from_id).map(|p| p.name());
        if expected != Some(name) {
            mismatches.push((id, name.to_string()));
        }
    }
    mismatches
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    const SMALL: &str = r#"{
        "hands": {
            "AAKQ": {
                "4": { "100BB SB open": 100, "100BB BB 3bet": 62.5 },
                "1": {}
            }
        },
        "index": { "a": ["AAKQ"], "K": ["AAKQ"], "q": ["AAKQ"] },
        "patterns": { "1": "mono", "4": "double" }
    }"#;

    #[test]
    fn loads_small_chart() {
        let chart = StrategyIndex::from_json_str(SMALL).unwrap();
        assert_eq!(chart.num_hands(), 1);
        let strategies = chart.strategies("AAKQ").unwrap();
        assert_eq!(strategies.len(), 2);
        let double = &strategies[&SuitPattern::Double];
        assert_relative_eq!(double.get(DecisionPoint::SbOpen), 100.0);
        assert_relative_eq!(double.get(DecisionPoint::Bb3Bet), 62.5);
        assert_relative_eq!(double.get(DecisionPoint::BbCall), 0.0);
        assert!(strategies[&SuitPattern::Mono].is_empty());
    }

    #[test]
    fn index_keys_are_case_insensitive() {
        let chart = StrategyIndex::from_json_str(SMALL).unwrap();
        assert_eq!(chart.candidates('k'), ["AAKQ".to_string()]);
        assert_eq!(chart.candidates('A'), ["AAKQ".to_string()]);
        assert!(chart.candidates('2').is_empty());
    }

    #[test]
    fn decision_keys_roundtrip() {
        for point in ALL_DECISION_POINTS {
            assert_eq!(DecisionPoint::from_key(point.key()), Some(point));
        }
    }

    #[test]
    fn case_variant_index_keys_merge_in_file_order() {
        let json = r#"{
            "hands": {},
            "index": { "A": ["AKQJ"], "k": ["AKQJ"], "a": ["AAKQ", "AKQJ", "AAAK"] }
        }"#;
        for _ in 0..20 {
            let chart = StrategyIndex::from_json_str(json).unwrap();
            assert_eq!(chart.candidates('a'), ["AKQJ", "AAKQ", "AAAK"].map(String::from));
        }
    }

    #[test]
    fn legacy_ids_out_of_range_are_reported() {
        let patterns: Map<String, Value> =
            serde_json::from_str(r#"{ "double": 260, "4": "double", "mono": 1, "7": "rainbows" }"#)
                .unwrap();
        let mismatches = legacy_pattern_mismatches(&patterns);
        assert_eq!(
            mismatches,
            vec![(None, "double".to_string()), (Some(7), "rainbows".to_string())]
        );
    }
}
