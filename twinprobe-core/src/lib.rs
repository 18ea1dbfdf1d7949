//! Twinprobe - fixed-capacity open-addressing tables for collision studies
//!
//! Core library providing:
//! - Keyed entries carrying probe and duplicate counters
//! - Fixed-size slot storage in linear-probing or double-hashing mode
//! - Primary/secondary hashing and the probe sequences built on them
//! - Twin-prime table sizing via a repeated Fermat test

pub mod entry;
pub mod error;
pub mod hash_code;
pub mod hashtable;
pub mod engine;
pub mod prime;

pub use entry::KeyedEntry;
pub use error::TableError;
pub use hash_code::HashCode;
pub use hashtable::{OpenAddressingTable, ProbeMode};
pub use engine::{insert, primary_hash, search, secondary_hash, ProbeSequence, SearchResult};
pub use prime::{FermatTester, SizerConfig, TableSizer};
