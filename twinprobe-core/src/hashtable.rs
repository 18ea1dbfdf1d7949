//! Fixed-capacity open-addressing storage
//!
//! Provides:
//! - A slot array sized once at construction, never resized
//! - A probing mode flag read by the engine
//! - Occupancy and load-factor queries
//!
//! The table holds no hashing logic. Placement is driven by [`crate::engine`],
//! and slots are never cleared once filled.

use crate::entry::KeyedEntry;
use crate::error::TableError;
use std::fmt;

/// Collision-resolution scheme a table is probed with
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ProbeMode {
    /// Step by one slot per attempt
    Linear,
    /// Step by the key's secondary hash per attempt
    Double,
}

impl ProbeMode {
    pub const ALL: [ProbeMode; 2] = [ProbeMode::Linear, ProbeMode::Double];

    /// Long name used in reports
    pub fn label(&self) -> &'static str {
        match self {
            ProbeMode::Linear => "Linear Hashing",
            ProbeMode::Double => "Double Hashing",
        }
    }
}

impl fmt::Display for ProbeMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProbeMode::Linear => write!(f, "linear"),
            ProbeMode::Double => write!(f, "double"),
        }
    }
}

/// Open-addressing table with a fixed number of slots
pub struct OpenAddressingTable<K> {
    /// One cell per slot, `None` while empty
    pub(crate) slots: Vec<Option<KeyedEntry<K>>>,

    /// Number of occupied slots
    pub(crate) len: usize,

    pub(crate) mode: ProbeMode,
}

impl<K> OpenAddressingTable<K> {
    /// Create an empty table
    ///
    /// # Arguments
    /// * `capacity` - Number of slots, must exceed 2 so that the double-hashing
    ///   step modulus `capacity - 2` is non-zero
    /// * `mode` - Probing scheme used for every insert and search
    pub fn new(capacity: usize, mode: ProbeMode) -> Result<Self, TableError> {
        if capacity <= 2 {
            return Err(TableError::InvalidCapacity(capacity));
        }

        let slots = std::iter::repeat_with(|| None).take(capacity).collect();

        Ok(OpenAddressingTable {
            slots,
            len: 0,
            mode,
        })
    }

    pub fn linear(capacity: usize) -> Result<Self, TableError> {
        Self::new(capacity, ProbeMode::Linear)
    }

    pub fn double(capacity: usize) -> Result<Self, TableError> {
        Self::new(capacity, ProbeMode::Double)
    }

    /// Total number of slots
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    pub fn mode(&self) -> ProbeMode {
        self.mode
    }

    pub fn is_linear(&self) -> bool {
        self.mode == ProbeMode::Linear
    }

    /// Number of occupied slots
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn is_full(&self) -> bool {
        self.len == self.capacity()
    }

    /// Occupied fraction of the table
    pub fn load_factor(&self) -> f64 {
        self.len as f64 / self.capacity() as f64
    }

    /// Entry stored at `slot`, or `None` if the slot is empty or out of range
    pub fn get(&self, slot: usize) -> Option<&KeyedEntry<K>> {
        self.slots.get(slot).and_then(Option::as_ref)
    }

    pub(crate) fn get_mut(&mut self, slot: usize) -> Option<&mut KeyedEntry<K>> {
        self.slots.get_mut(slot).and_then(Option::as_mut)
    }

    pub fn is_vacant(&self, slot: usize) -> bool {
        matches!(self.slots.get(slot), Some(None))
    }

    /// Put `entry` into an empty slot
    ///
    /// Returns false and leaves the table untouched if the slot is occupied
    /// or out of range.
    pub(crate) fn place(&mut self, slot: usize, entry: KeyedEntry<K>) -> bool {
        match self.slots.get_mut(slot) {
            Some(cell) if cell.is_none() => {
                *cell = Some(entry);
                self.len += 1;
                true
            }
            _ => false,
        }
    }

    /// Iterate over occupied slots in increasing index order
    pub fn occupied(&self) -> impl Iterator<Item = (usize, &KeyedEntry<K>)> {
        self.slots
            .iter()
            .enumerate()
            .filter_map(|(slot, cell)| cell.as_ref().map(|entry| (slot, entry)))
    }

    /// Iterate over stored keys in slot order
    pub fn keys(&self) -> impl Iterator<Item = &K> {
        self.occupied().map(|(_, entry)| entry.key())
    }

    /// Sum of recorded insertion probes across all entries
    pub fn total_probes(&self) -> usize {
        self.occupied().map(|(_, entry)| entry.probe_count()).sum()
    }

    /// Sum of duplicate counts across all entries
    pub fn total_duplicates(&self) -> usize {
        self.occupied().map(|(_, entry)| entry.duplicate_count()).sum()
    }
}

impl<K: fmt::Debug> fmt::Debug for OpenAddressingTable<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OpenAddressingTable")
            .field("mode", &self.mode)
            .field("capacity", &self.capacity())
            .field("len", &self.len)
            .finish()
    }
}
