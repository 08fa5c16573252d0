//! Rank repetition shape of a four-card hand.
//!
//! Ranks are sorted highest first and each distinct rank is lettered A, B,
//! C, D in order of first appearance, so `KKQ2` and `AAJ3` both read
//! `AABC`. Only the eight shapes below are possible for four cards.

use std::fmt;

use crate::cards::{Hand, Rank};
use crate::error::{ChartError, ChartResult};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum RankShape {
    ABCD,
    AABC,
    ABBC,
    ABCC,
    AABB,
    AAAB,
    ABBB,
    AAAA,
}

pub const ALL_SHAPES: [RankShape; 8] = [
    RankShape::ABCD,
    RankShape::AABC,
    RankShape::ABBC,
    RankShape::ABCC,
    RankShape::AABB,
    RankShape::AAAB,
    RankShape::ABBB,
    RankShape::AAAA,
];

impl RankShape {
    pub fn as_str(self) -> &'static str {
        match self {
            RankShape::ABCD => "ABCD",
            RankShape::AABC => "AABC",
            RankShape::ABBC => "ABBC",
            RankShape::ABCC => "ABCC",
            RankShape::AABB => "AABB",
            RankShape::AAAB => "AAAB",
            RankShape::ABBB => "ABBB",
            RankShape::AAAA => "AAAA",
        }
    }

    fn from_letters(letters: &str) -> Option<RankShape> {
        ALL_SHAPES.iter().copied().find(|s| s.as_str() == letters)
    }

    pub fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for RankShape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

pub fn classify(hand: &Hand) -> RankShape {
    let mut sorted = *hand.ranks();
    sorted.sort_unstable_by(|a, b| b.cmp(a));

    let mut seen: Vec<Rank> = Vec::with_capacity(4);
    let letters: String = sorted
        .iter()
        .map(|r| {
            let idx = match seen.iter().position(|s| s == r) {
                Some(i) => i,
                None => {
                    seen.push(*r);
                    seen.len() - 1
                }
            };
            (b'A' + idx as u8) as char
        })
        .collect();

    // Sorting guarantees equal ranks are adjacent, so the letter string is
    // always one of the eight shapes.
    RankShape::from_letters(&letters).unwrap_or(RankShape::ABCD)
}

/// Classify a loose slice of ranks, rejecting anything but four.
pub fn classify_ranks(ranks: &[Rank]) -> ChartResult<RankShape> {
    if ranks.len() != 4 {
        return Err(ChartError::InvalidHand(
            ranks.iter().map(|r| r.symbol()).collect(),
        ));
    }
    Ok(classify(&Hand::from_ranks(ranks)?))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn shape(s: &str) -> RankShape {
        classify(&Hand::parse(s).unwrap())
    }

    #[test]
    fn every_shape_reachable() {
        assert_eq!(shape("AKQJ"), RankShape::ABCD);
        assert_eq!(shape("AAKQ"), RankShape::AABC);
        assert_eq!(shape("AKKQ"), RankShape::ABBC);
        assert_eq!(shape("AKQQ"), RankShape::ABCC);
        assert_eq!(shape("AAKK"), RankShape::AABB);
        assert_eq!(shape("AAAK"), RankShape::AAAB);
        assert_eq!(shape("AKKK"), RankShape::ABBB);
        assert_eq!(shape("AAAA"), RankShape::AAAA);
    }

    #[test]
    fn shape_ignores_input_order() {
        assert_eq!(shape("QKAA"), RankShape::AABC);
        assert_eq!(shape("2AA2"), RankShape::AABB);
        assert_eq!(shape("3332"), RankShape::AAAB);
        assert_eq!(shape("2333"), RankShape::AAAB);
    }

    #[test]
    fn classify_ranks_rejects_short_input() {
        let err = classify_ranks(&[Rank::Ace, Rank::King]).unwrap_err();
        assert!(matches!(err, ChartError::InvalidHand(ref s) if s == "AK"));
    }
}
