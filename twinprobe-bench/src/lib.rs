//! Linear probing vs double hashing, measured on real key streams
//!
//! Provides:
//! - Key sources: random integers, wall-clock milliseconds, word lists
//! - A two-table experiment fed from one key stream
//! - The console summary and per-slot dump files
//! - `run`, wiring sizing, sources and output together

pub mod config;
pub mod dump;
pub mod error;
pub mod experiment;
pub mod report;
pub mod runner;
pub mod source;

pub use config::{ExperimentConfig, SourceKind};
pub use error::BenchError;
pub use experiment::{Experiment, ModeStats, Outcome};
pub use report::Summary;
pub use runner::run;
