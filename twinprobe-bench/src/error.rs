//! Error type for experiment runs

use std::io;
use std::path::PathBuf;

use thiserror::Error;
use twinprobe_core::TableError;

#[derive(Debug, Error)]
pub enum BenchError {
    #[error(transparent)]
    Table(#[from] TableError),

    #[error("load factor must be in (0, 1], got {0}")]
    InvalidLoadFactor(f64),

    #[error("failed to read word list {}", .path.display())]
    WordList {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to write dump file {}", .path.display())]
    Dump {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}
