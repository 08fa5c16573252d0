//! Suit assignment for a (suit pattern, hand) pair.
//!
//! Hard constraint: two cards of the same rank never share a suit. The
//! pattern's grouping is kept as closely as that constraint allows, and when
//! no grouping of the pattern's kind exists the pair is unresolvable.
//!
//! Lookup is a fixed 8 x 7 table keyed by rank shape and pattern. Codes are
//! written for the hand sorted highest rank first, using the suit letters
//! g (club), r (heart), b (diamond), y (spade). Each entry was chosen as:
//!
//!   1. partition the four positions into suit groups whose sizes match the
//!      pattern (e.g. 3+1 for trips), with no repeated rank inside a group;
//!   2. `*_high` needs the top card in the largest group, `*_low` needs it
//!      alone in its suit;
//!   3. letter groups g, r, b, y by size then first position, and keep the
//!      candidate nearest the pattern template (ties: earlier suit letters).
//!
//! `None` marks combinations with no candidate.

use std::fmt;

use once_cell::sync::Lazy;

use crate::cards::{Hand, Suit};
use crate::error::{ChartError, ChartResult};
use crate::rank_shape::{classify, RankShape, ALL_SHAPES};
use crate::suit_pattern::{SuitPattern, ALL_PATTERNS};

// -------------------------------------------------------------------------
// Static table
// -------------------------------------------------------------------------

/// Rows follow `ALL_SHAPES`, columns follow `ALL_PATTERNS`:
/// mono, trip_high, trip_low, double, single_high, single_low, rainbow.
const ASSIGNMENT_CODES: [[Option<&str>; 7]; 8] = [
    // ABCD
    [Some("gggg"), Some("gggr"), Some("rggg"), Some("ggrr"), Some("ggrb"), Some("rggb"), Some("grby")],
    // AABC
    [None, Some("grgg"), Some("rggg"), Some("grgr"), Some("grgb"), Some("rggb"), Some("grby")],
    // ABBC
    [None, Some("ggrg"), None, Some("ggrr"), Some("ggrb"), Some("rgbg"), Some("grby")],
    // ABCC
    [None, Some("gggr"), None, Some("grgr"), Some("ggrb"), Some("rggb"), Some("grby")],
    // AABB
    [None, None, None, Some("grgr"), Some("grgb"), Some("rggb"), Some("grby")],
    // AAAB
    [None, None, None, None, Some("grbg"), Some("rgbg"), Some("grby")],
    // ABBB
    [None, None, None, None, Some("ggrb"), None, Some("grby")],
    // AAAA
    [None, None, None, None, None, None, Some("grby")],
];

fn decode(code: &str) -> Option<[Suit; 4]> {
    let mut suits = [Suit::Club; 4];
    let mut chars = code.chars();
    for slot in suits.iter_mut() {
        *slot = Suit::from_code(chars.next()?)?;
    }
    if chars.next().is_some() {
        return None;
    }
    Some(suits)
}

static ASSIGNMENT_TABLE: Lazy<[[Option<[Suit; 4]>; 7]; 8]> = Lazy::new(|| {
    let mut table = [[None; 7]; 8];
    for (row, codes) in ASSIGNMENT_CODES.iter().enumerate() {
        for (col, &code) in codes.iter().enumerate() {
            table[row][col] = code.and_then(decode);
        }
    }
    table
});

// -------------------------------------------------------------------------
// Assignment
// -------------------------------------------------------------------------

/// Four suits, one per hand position, in the hand's own order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SuitAssignment {
    suits: [Suit; 4],
}

impl SuitAssignment {
    pub fn suits(&self) -> &[Suit; 4] {
        &self.suits
    }

    pub fn colors(&self) -> [(u8, u8, u8); 4] {
        self.suits.map(Suit::color)
    }

    /// Four-letter g/r/b/y code.
    pub fn code(&self) -> String {
        self.suits.iter().map(|s| s.code()).collect()
    }
}

impl fmt::Display for SuitAssignment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.code())
    }
}

/// Table entry for a shape, written for the hand in descending rank order.
pub fn table_entry(shape: RankShape, pattern: SuitPattern) -> Option<SuitAssignment> {
    ASSIGNMENT_TABLE[shape.index()][pattern.index()].map(|suits| SuitAssignment { suits })
}

/// Every (shape, pattern) pair with its entry, shapes outermost.
pub fn assignment_table() -> Vec<(RankShape, SuitPattern, Option<SuitAssignment>)> {
    ALL_SHAPES
        .iter()
        .flat_map(|&shape| {
            ALL_PATTERNS
                .iter()
                .map(move |&pattern| (shape, pattern, table_entry(shape, pattern)))
        })
        .collect()
}

pub fn assign(pattern: SuitPattern, hand: &Hand) -> ChartResult<SuitAssignment> {
    let shape = classify(hand);
    let sorted = ASSIGNMENT_TABLE[shape.index()][pattern.index()].ok_or_else(|| {
        ChartError::UnresolvableAssignment {
            pattern,
            hand: hand.to_string(),
            shape,
        }
    })?;

    // Map the descending-order entry back onto the caller's positions.
    let mut suits = [Suit::Club; 4];
    for (slot, &pos) in hand.descending_order().iter().enumerate() {
        suits[pos] = sorted[slot];
    }
    Ok(SuitAssignment { suits })
}
