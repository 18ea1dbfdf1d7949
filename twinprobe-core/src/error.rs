//! Errors raised while sizing or filling a table

use thiserror::Error;

/// Failure modes of the hashing engine
///
/// Only [`TableError::SizingFailure`] is fatal to an experiment. A full table
/// tells the caller to skip the current key and carry on.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TableError {
    /// Capacity leaves no room for the secondary modulus `capacity - 2`
    #[error("invalid table capacity {0}: must be greater than 2")]
    InvalidCapacity(usize),

    /// Every slot was probed without finding a vacancy
    #[error("table of capacity {capacity} has no empty slot")]
    TableFull { capacity: usize },

    /// No twin-prime pair in the scanned range
    #[error("no twin primes found in [{lower}, {upper})")]
    SizingFailure { lower: u64, upper: u64 },
}
