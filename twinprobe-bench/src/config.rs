//! Run configuration
//!
//! Assembled by the binary from its command line; library callers can start
//! from `ExperimentConfig::default()`.

use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

use twinprobe_core::SizerConfig;

use crate::error::BenchError;

/// Where keys come from
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SourceKind {
    RandomInts = 1,
    Timestamps = 2,
    WordList = 3,
}

impl SourceKind {
    /// Name printed in the summary header
    pub fn label(&self) -> &'static str {
        match self {
            SourceKind::RandomInts => "Random Integer",
            SourceKind::Timestamps => "Current Time Millis",
            SourceKind::WordList => "word-list",
        }
    }
}

impl fmt::Display for SourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Accepts the numeric codes `1`, `2`, `3` or the names `random`, `time`, `words`
impl FromStr for SourceKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "1" | "random" => Ok(SourceKind::RandomInts),
            "2" | "time" => Ok(SourceKind::Timestamps),
            "3" | "words" => Ok(SourceKind::WordList),
            other => Err(format!(
                "unknown input type '{}': expected 1 (random), 2 (time) or 3 (words)",
                other
            )),
        }
    }
}

/// Everything a run needs
#[derive(Clone, Debug)]
pub struct ExperimentConfig {
    pub source: SourceKind,

    /// Fraction of the table to fill, in (0, 1]
    pub load_factor: f64,

    /// Write `linear-dump` and `double-dump` after the run
    pub debug: bool,

    /// Seed for keys and primality bases; entropy when `None`
    pub seed: Option<u64>,

    /// Word file read by `SourceKind::WordList`
    pub word_list: PathBuf,

    /// Directory receiving dump files
    pub output_dir: PathBuf,

    pub sizer: SizerConfig,
}

impl Default for ExperimentConfig {
    fn default() -> Self {
        ExperimentConfig {
            source: SourceKind::RandomInts,
            load_factor: 0.5,
            debug: false,
            seed: None,
            word_list: PathBuf::from("word-list"),
            output_dir: PathBuf::from("."),
            sizer: SizerConfig::default(),
        }
    }
}

impl ExperimentConfig {
    pub fn validate(&self) -> Result<(), BenchError> {
        if self.load_factor > 0.0 && self.load_factor <= 1.0 {
            Ok(())
        } else {
            Err(BenchError::InvalidLoadFactor(self.load_factor))
        }
    }

    /// Insertions needed to reach the load factor: `ceil(alpha * m)`
    pub fn target_insertions(&self, capacity: usize) -> usize {
        let target = (self.load_factor * capacity as f64).ceil() as usize;
        target.min(capacity)
    }
}
