//! Tests for chart loading and validation.

use std::path::Path;

use approx::assert_relative_eq;

use plo_chart::chart::{DecisionPoint, StrategyIndex};
use plo_chart::error::ChartError;
use plo_chart::suit_pattern::SuitPattern;

const SAMPLE: &str = include_str!("../data/sample_chart.json");

fn invalid_data(json: &str) -> String {
    match StrategyIndex::from_json_str(json) {
        Err(ChartError::InvalidData(msg)) => msg,
        other => panic!("expected InvalidData, got {:?}", other.map(|c| c.num_hands())),
    }
}

// ---------------------------------------------------------------------------
// Loading
// ---------------------------------------------------------------------------

#[test]
fn sample_chart_loads() {
    let chart = StrategyIndex::from_json_str(SAMPLE).unwrap();
    assert_eq!(chart.num_hands(), 11);

    let aakq = chart.strategies("AAKQ").unwrap();
    assert_eq!(aakq.len(), 7);
    let single_high = &aakq[&SuitPattern::SingleHigh];
    assert_relative_eq!(single_high.get(DecisionPoint::Sb4Bet), 72.4);
    assert_relative_eq!(single_high.get(DecisionPoint::SbCall3Bet), 27.6);
    assert_relative_eq!(single_high.get(DecisionPoint::BbFold4Bet), 0.0);
    assert!(!single_high.contains(DecisionPoint::BbFold4Bet));
}

#[test]
fn index_only_combo_has_no_strategies() {
    let chart = StrategyIndex::from_json_str(SAMPLE).unwrap();
    assert!(chart.candidates('j').contains(&"QJT9".to_string()));
    assert!(chart.strategies("QJT9").is_none());
}

#[test]
fn load_from_disk() {
    let path = Path::new(env!("CARGO_MANIFEST_DIR")).join("data/sample_chart.json");
    let chart = StrategyIndex::load(&path).unwrap();
    assert_eq!(chart.num_hands(), 11);
}

#[test]
fn missing_file_is_read_error() {
    let err = StrategyIndex::load(Path::new("/definitely/not/here.json")).unwrap_err();
    assert!(matches!(err, ChartError::DataRead { .. }));
    assert!(err.to_string().contains("/definitely/not/here.json"));
}

#[test]
fn malformed_json_is_parse_error() {
    let err = StrategyIndex::from_json_str("{ \"hands\": ").unwrap_err();
    assert!(matches!(err, ChartError::DataParse(_)));
}

#[test]
fn missing_section_is_parse_error() {
    let err = StrategyIndex::from_json_str(r#"{ "hands": {} }"#).unwrap_err();
    assert!(matches!(err, ChartError::DataParse(_)));
}

#[test]
fn patterns_section_is_optional() {
    let chart = StrategyIndex::from_json_str(r#"{ "hands": {}, "index": {} }"#).unwrap();
    assert!(chart.is_empty());
}

#[test]
fn legacy_pattern_disagreement_is_tolerated() {
    let json = r#"{ "hands": {}, "index": {}, "patterns": { "1": "rainbow", "double": 4 } }"#;
    assert!(StrategyIndex::from_json_str(json).is_ok());
}

// ---------------------------------------------------------------------------
// Validation
// ---------------------------------------------------------------------------

#[test]
fn unknown_decision_point_is_rejected() {
    let msg = invalid_data(
        r#"{ "hands": { "AAKQ": { "4": { "100BB SB limp": 50 } } }, "index": {} }"#,
    );
    assert!(msg.contains("100BB SB limp"));
}

#[test]
fn out_of_range_percentage_is_rejected() {
    let msg = invalid_data(
        r#"{ "hands": { "AAKQ": { "4": { "100BB SB open": 120 } } }, "index": {} }"#,
    );
    assert!(msg.contains("0-100"));
    invalid_data(r#"{ "hands": { "AAKQ": { "4": { "100BB SB open": -1 } } }, "index": {} }"#);
}

#[test]
fn unknown_pattern_id_is_rejected() {
    let msg = invalid_data(r#"{ "hands": { "AAKQ": { "8": {} } }, "index": {} }"#);
    assert!(msg.contains("'8'"));
    invalid_data(r#"{ "hands": { "AAKQ": { "double": {} } }, "index": {} }"#);
}

#[test]
fn bad_hand_key_is_rejected() {
    invalid_data(r#"{ "hands": { "AAK": {} }, "index": {} }"#);
    invalid_data(r#"{ "hands": { "AAKX": {} }, "index": {} }"#);
}

#[test]
fn multi_character_index_key_is_rejected() {
    let msg = invalid_data(r#"{ "hands": {}, "index": { "ak": ["AAKQ"] } }"#);
    assert!(msg.contains("'ak'"));
}
