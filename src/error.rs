use std::path::PathBuf;

use thiserror::Error;

use crate::rank_shape::RankShape;
use crate::suit_pattern::SuitPattern;

#[derive(Debug, Error)]
pub enum ChartError {
    #[error("Invalid hand '{0}': expected exactly 4 ranks")]
    InvalidHand(String),

    #[error("Invalid rank: {0}")]
    InvalidRank(String),

    #[error("Unknown suit pattern: {0}")]
    UnknownPattern(String),

    #[error("Cannot assign suits for {pattern} pattern on {hand} (shape {shape})")]
    UnresolvableAssignment {
        pattern: SuitPattern,
        hand: String,
        shape: RankShape,
    },

    #[error("Could not read chart data from {}: {source}", .path.display())]
    DataRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Chart data is not valid JSON: {0}")]
    DataParse(#[from] serde_json::Error),

    #[error("Invalid chart data: {0}")]
    InvalidData(String),
}

pub type ChartResult<T> = Result<T, ChartError>;
