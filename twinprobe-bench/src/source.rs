//! Key sources
//!
//! Each source yields keys of a single type, so a run never mixes key kinds
//! within one table.

use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::{Path, PathBuf};
use std::time::{SystemTime, UNIX_EPOCH};

use rand::Rng;

use crate::error::BenchError;

/// Endless stream of uniformly random `i32` keys
pub struct RandomInts<R> {
    rng: R,
}

impl<R: Rng> RandomInts<R> {
    pub fn new(rng: R) -> Self {
        RandomInts { rng }
    }
}

impl<R: Rng> Iterator for RandomInts<R> {
    type Item = i32;

    fn next(&mut self) -> Option<i32> {
        Some(self.rng.gen())
    }
}

/// Endless stream of wall-clock milliseconds since the Unix epoch
///
/// Consecutive reads inside one millisecond repeat, so this source produces
/// long runs of duplicates.
#[derive(Clone, Copy, Debug, Default)]
pub struct Timestamps;

impl Iterator for Timestamps {
    type Item = i64;

    fn next(&mut self) -> Option<i64> {
        let millis = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map_or(0, |elapsed| elapsed.as_millis() as i64);
        Some(millis)
    }
}

/// One key per line of a text file
pub struct WordList<B> {
    lines: io::Lines<B>,
    path: PathBuf,
}

impl WordList<BufReader<File>> {
    pub fn open(path: impl AsRef<Path>) -> Result<Self, BenchError> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|source| BenchError::WordList {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(Self::from_reader(BufReader::new(file), path))
    }
}

impl<B: BufRead> WordList<B> {
    /// Read lines from any buffered reader; `path` is only used in errors
    pub fn from_reader(reader: B, path: impl Into<PathBuf>) -> Self {
        WordList {
            lines: reader.lines(),
            path: path.into(),
        }
    }
}

impl<B: BufRead> Iterator for WordList<B> {
    type Item = Result<String, BenchError>;

    fn next(&mut self) -> Option<Self::Item> {
        let line = self.lines.next()?;
        Some(line.map_err(|source| BenchError::WordList {
            path: self.path.clone(),
            source,
        }))
    }
}
