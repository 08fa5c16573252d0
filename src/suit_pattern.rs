//! Suitedness patterns as they appear in the chart data.

use std::fmt;
use std::str::FromStr;

use crate::error::ChartError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum SuitPattern {
    Mono,
    TripHigh,
    TripLow,
    Double,
    SingleHigh,
    SingleLow,
    Rainbow,
}

/// Patterns in id order (1..=7).
pub const ALL_PATTERNS: [SuitPattern; 7] = [
    SuitPattern::Mono,
    SuitPattern::TripHigh,
    SuitPattern::TripLow,
    SuitPattern::Double,
    SuitPattern::SingleHigh,
    SuitPattern::SingleLow,
    SuitPattern::Rainbow,
];

/// Order in which a hand's patterns are listed in search results.
pub const DISPLAY_ORDER: [SuitPattern; 7] = [
    SuitPattern::Double,
    SuitPattern::SingleHigh,
    SuitPattern::SingleLow,
    SuitPattern::TripHigh,
    SuitPattern::TripLow,
    SuitPattern::Mono,
    SuitPattern::Rainbow,
];

impl SuitPattern {
    pub fn id(self) -> u8 {
        match self {
            SuitPattern::Mono => 1,
            SuitPattern::TripHigh => 2,
            SuitPattern::TripLow => 3,
            SuitPattern::Double => 4,
            SuitPattern::SingleHigh => 5,
            SuitPattern::SingleLow => 6,
            SuitPattern::Rainbow => 7,
        }
    }

    pub fn from_id(id: u8) -> Option<SuitPattern> {
        ALL_PATTERNS.iter().copied().find(|p| p.id() == id)
    }

    pub fn name(self) -> &'static str {
        match self {
            SuitPattern::Mono => "mono",
            SuitPattern::TripHigh => "trip_high",
            SuitPattern::TripLow => "trip_low",
            SuitPattern::Double => "double",
            SuitPattern::SingleHigh => "single_high",
            SuitPattern::SingleLow => "single_low",
            SuitPattern::Rainbow => "rainbow",
        }
    }

    /// Ideal suit code for four distinct ranks, highest rank first.
    pub fn template(self) -> &'static str {
        match self {
            SuitPattern::Mono => "gggg",
            SuitPattern::TripHigh => "gggr",
            SuitPattern::TripLow => "rggg",
            SuitPattern::Double => "ggrr",
            SuitPattern::SingleHigh => "ggrb",
            SuitPattern::SingleLow => "rggb",
            SuitPattern::Rainbow => "grby",
        }
    }

    /// Suit-group sizes, largest first.
    pub fn profile(self) -> &'static [usize] {
        match self {
            SuitPattern::Mono => &[4],
            SuitPattern::TripHigh | SuitPattern::TripLow => &[3, 1],
            SuitPattern::Double => &[2, 2],
            SuitPattern::SingleHigh | SuitPattern::SingleLow => &[2, 1, 1],
            SuitPattern::Rainbow => &[1, 1, 1, 1],
        }
    }

    pub fn index(self) -> usize {
        self.id() as usize - 1
    }
}

impl fmt::Display for SuitPattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for SuitPattern {
    type Err = ChartError;

    /// Accepts the numeric id or the name (`-` and `_` interchangeable).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if let Ok(id) = trimmed.parse::<u8>() {
            return SuitPattern::from_id(id).ok_or_else(|| ChartError::UnknownPattern(s.to_string()));
        }
        let normalized = trimmed.to_ascii_lowercase().replace('-', "_");
        ALL_PATTERNS
            .iter()
            .copied()
            .find(|p| p.name() == normalized)
            .ok_or_else(|| ChartError::UnknownPattern(s.to_string()))
    }
}
