//! Runtime configuration: where the chart lives, how long to debounce
//! interactive input, whether to colour output.
//!
//! The data path comes from `--data`, then `PLO_CHART_DATA` (both handled by
//! clap), then the first existing default location.

use std::path::{Path, PathBuf};
use std::time::Duration;

pub const DATA_FILE_NAME: &str = "comprangedict.json";
pub const DEFAULT_DEBOUNCE_MS: u64 = 100;

#[derive(Debug, Clone)]
pub struct Config {
    pub data_path: PathBuf,
    pub debounce: Duration,
    pub color: bool,
}

impl Config {
    pub fn new(data_path: Option<PathBuf>, debounce_ms: u64, color: bool) -> Self {
        Config {
            data_path: data_path.unwrap_or_else(default_data_path),
            debounce: Duration::from_millis(debounce_ms),
            color,
        }
    }
}

/// `$HOME/.plo-chart/`, or the working directory when HOME is unset.
pub fn home_dir() -> PathBuf {
    let home = std::env::var("HOME").unwrap_or_else(|_| ".".to_string());
    Path::new(&home).join(".plo-chart")
}

/// First existing candidate, else the working-directory file so the load
/// error names the path users most likely expect.
pub fn default_data_path() -> PathBuf {
    let local = PathBuf::from(DATA_FILE_NAME);
    let candidates = [local.clone(), home_dir().join(DATA_FILE_NAME)];
    candidates
        .into_iter()
        .find(|p| p.is_file())
        .unwrap_or(local)
}
