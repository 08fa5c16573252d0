//! Turns a pattern's action frequencies into short per-position labels.
//!
//! Each position gets two labels, one per decision: `SB: Raise | 4bet[40%]/call[55%]`
//! and `BB: call[70%] | fold`. Percentages are rounded half-up; a
//! frequency of 99% or more is shown as a bare action.

use crate::chart::{ActionFrequencies, DecisionPoint};

/// Frequencies below this are left out of mixed labels.
const MIN_SHOWN_PCT: f64 = 5.0;
/// Frequencies at or above this are shown without a percentage.
const PURE_PCT: f64 = 99.0;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActionLabels {
    pub sb_open: String,
    pub sb_vs_3bet: String,
    pub bb_vs_open: String,
    pub bb_vs_4bet: String,
}

impl ActionLabels {
    pub fn sb_line(&self) -> String {
        format!("SB: {} | {}", self.sb_open, self.sb_vs_3bet)
    }

    pub fn bb_line(&self) -> String {
        format!("BB: {} | {}", self.bb_vs_open, self.bb_vs_4bet)
    }
}

pub fn action_labels(freqs: &ActionFrequencies) -> ActionLabels {
    ActionLabels {
        sb_open: sb_open_label(freqs),
        sb_vs_3bet: sb_vs_3bet_label(freqs),
        bb_vs_open: bb_vs_open_label(freqs),
        bb_vs_4bet: bb_vs_4bet_label(freqs),
    }
}

fn pct(value: f64) -> i64 {
    // Half-up, matching how the chart was published.
    (value + 0.5).floor() as i64
}

fn tagged(action: &str, value: f64) -> String {
    format!("{}[{}%]", action, pct(value))
}

fn pure_or_tagged(action: &str, value: f64) -> String {
    if value >= PURE_PCT {
        action.to_string()
    } else {
        tagged(action, value)
    }
}

/// Lists every option at or above the display threshold, `/`-joined.
fn mixed_label(options: &[(&str, f64)]) -> String {
    let shown: Vec<String> = options
        .iter()
        .filter(|(_, v)| *v >= MIN_SHOWN_PCT)
        .map(|(a, v)| pure_or_tagged(a, *v))
        .collect();
    if shown.is_empty() {
        "Fold".to_string()
    } else {
        shown.join("/")
    }
}

pub fn sb_open_label(freqs: &ActionFrequencies) -> String {
    let open = freqs.get(DecisionPoint::SbOpen);
    if open <= 0.0 {
        "Fold".to_string()
    } else if open < PURE_PCT {
        tagged("Raise", open)
    } else {
        "Raise".to_string()
    }
}

pub fn sb_vs_3bet_label(freqs: &ActionFrequencies) -> String {
    let four_bet = freqs.get(DecisionPoint::Sb4Bet);
    let call = freqs.get(DecisionPoint::SbCall3Bet);
    let fold = 100.0 - four_bet - call;
    mixed_label(&[("4bet", four_bet), ("call", call), ("fold", fold)])
}

/// BB facing the open shows the majority action, or the tied leaders.
pub fn bb_vs_open_label(freqs: &ActionFrequencies) -> String {
    let three_bet = freqs.get(DecisionPoint::Bb3Bet);
    let call = freqs.get(DecisionPoint::BbCall);
    let fold = 100.0 - three_bet - call;

    if three_bet > call && three_bet > fold {
        pure_or_tagged("3bet", three_bet)
    } else if call > three_bet && call > fold {
        pure_or_tagged("call", call)
    } else if fold > three_bet && fold > call {
        pure_or_tagged("fold", fold)
    } else if three_bet == call && three_bet > fold {
        format!("{}/{}", tagged("3bet", three_bet), tagged("call", call))
    } else if three_bet == fold && three_bet > call {
        format!("{}/{}", tagged("3bet", three_bet), tagged("fold", fold))
    } else if call == fold && call > three_bet {
        format!("{}/{}", tagged("call", call), tagged("fold", fold))
    } else if three_bet == call && three_bet == fold {
        format!(
            "{}/{}/{}",
            tagged("3bet", three_bet),
            tagged("call", call),
            tagged("fold", fold)
        )
    } else {
        "Fold".to_string()
    }
}

pub fn bb_vs_4bet_label(freqs: &ActionFrequencies) -> String {
    mixed_label(&[
        ("5bet", freqs.get(DecisionPoint::Bb5Bet)),
        ("call", freqs.get(DecisionPoint::BbCall4Bet)),
        ("fold", freqs.get(DecisionPoint::BbFold4Bet)),
    ])
}
