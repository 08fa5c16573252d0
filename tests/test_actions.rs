//! Tests for action label formatting.

use plo_chart::actions::{
    action_labels, bb_vs_4bet_label, bb_vs_open_label, sb_open_label, sb_vs_3bet_label,
};
use plo_chart::chart::{ActionFrequencies, DecisionPoint};

fn freqs(pairs: &[(DecisionPoint, f64)]) -> ActionFrequencies {
    pairs
        .iter()
        .fold(ActionFrequencies::new(), |f, &(p, v)| f.with(p, v))
}

// ---------------------------------------------------------------------------
// SB
// ---------------------------------------------------------------------------

#[test]
fn sb_open_pure_mixed_and_fold() {
    assert_eq!(sb_open_label(&freqs(&[(DecisionPoint::SbOpen, 100.0)])), "Raise");
    assert_eq!(sb_open_label(&freqs(&[(DecisionPoint::SbOpen, 99.0)])), "Raise");
    assert_eq!(sb_open_label(&freqs(&[(DecisionPoint::SbOpen, 64.5)])), "Raise[65%]");
    assert_eq!(sb_open_label(&freqs(&[(DecisionPoint::SbOpen, 0.4)])), "Raise[0%]");
    assert_eq!(sb_open_label(&freqs(&[])), "Fold");
}

#[test]
fn sb_vs_3bet_lists_options_above_threshold() {
    let f = freqs(&[(DecisionPoint::Sb4Bet, 72.4), (DecisionPoint::SbCall3Bet, 27.6)]);
    // Residual fold is 0%.
    assert_eq!(sb_vs_3bet_label(&f), "4bet[72%]/call[28%]");

    let f = freqs(&[(DecisionPoint::Sb4Bet, 40.0), (DecisionPoint::SbCall3Bet, 55.0)]);
    assert_eq!(sb_vs_3bet_label(&f), "4bet[40%]/call[55%]/fold[5%]");

    let f = freqs(&[(DecisionPoint::Sb4Bet, 3.0), (DecisionPoint::SbCall3Bet, 96.0)]);
    assert_eq!(sb_vs_3bet_label(&f), "call[96%]");

    let f = freqs(&[(DecisionPoint::Sb4Bet, 100.0)]);
    assert_eq!(sb_vs_3bet_label(&f), "4bet");
}

// ---------------------------------------------------------------------------
// BB
// ---------------------------------------------------------------------------

#[test]
fn bb_vs_open_shows_majority() {
    let f = freqs(&[(DecisionPoint::Bb3Bet, 88.0), (DecisionPoint::BbCall, 12.0)]);
    assert_eq!(bb_vs_open_label(&f), "3bet[88%]");

    let f = freqs(&[(DecisionPoint::Bb3Bet, 20.0), (DecisionPoint::BbCall, 70.0)]);
    assert_eq!(bb_vs_open_label(&f), "call[70%]");

    let f = freqs(&[(DecisionPoint::BbCall, 25.0)]);
    assert_eq!(bb_vs_open_label(&f), "fold[75%]");

    let f = freqs(&[(DecisionPoint::Bb3Bet, 100.0)]);
    assert_eq!(bb_vs_open_label(&f), "3bet");
}

#[test]
fn bb_vs_open_shows_ties() {
    let f = freqs(&[(DecisionPoint::Bb3Bet, 50.0), (DecisionPoint::BbCall, 50.0)]);
    assert_eq!(bb_vs_open_label(&f), "3bet[50%]/call[50%]");

    let f = freqs(&[(DecisionPoint::Bb3Bet, 40.0), (DecisionPoint::BbCall, 20.0)]);
    assert_eq!(bb_vs_open_label(&f), "3bet[40%]/fold[40%]");

    let f = freqs(&[(DecisionPoint::Bb3Bet, 10.0), (DecisionPoint::BbCall, 45.0)]);
    assert_eq!(bb_vs_open_label(&f), "call[45%]/fold[45%]");

    let f = freqs(&[(DecisionPoint::Bb3Bet, 25.0), (DecisionPoint::BbCall, 25.0)]);
    // Fold (50%) is the strict majority here.
    assert_eq!(bb_vs_open_label(&f), "fold[50%]");
}

#[test]
fn bb_vs_4bet_uses_explicit_fold() {
    let f = freqs(&[(DecisionPoint::BbCall4Bet, 80.0), (DecisionPoint::BbFold4Bet, 20.0)]);
    assert_eq!(bb_vs_4bet_label(&f), "call[80%]/fold[20%]");

    let f = freqs(&[(DecisionPoint::BbFold4Bet, 100.0)]);
    assert_eq!(bb_vs_4bet_label(&f), "fold");

    // No implied residual for this decision.
    assert_eq!(bb_vs_4bet_label(&freqs(&[])), "Fold");
}

#[test]
fn lines_join_both_decisions() {
    let f = freqs(&[
        (DecisionPoint::SbOpen, 100.0),
        (DecisionPoint::Sb4Bet, 100.0),
        (DecisionPoint::Bb3Bet, 100.0),
        (DecisionPoint::Bb5Bet, 100.0),
    ]);
    let labels = action_labels(&f);
    assert_eq!(labels.sb_line(), "SB: Raise | 4bet");
    assert_eq!(labels.bb_line(), "BB: 3bet | 5bet");
}
