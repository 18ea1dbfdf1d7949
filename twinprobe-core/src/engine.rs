//! Hash functions and probe algorithms
//!
//! Provides:
//! - Primary hash: the starting slot for a key
//! - Secondary hash: the double-hashing step, never zero
//! - Probe sequences for both modes
//! - `search` and `insert` walking the identical sequence
//!
//! With a prime capacity `m` and a prime `m - 2`, every step in `[1, m-2]` is
//! coprime to `m`, so both sequences visit each slot exactly once.

use crate::entry::KeyedEntry;
use crate::error::TableError;
use crate::hash_code::HashCode;
use crate::hashtable::{OpenAddressingTable, ProbeMode};

/// Starting slot: `((h mod m) + m) mod m`, always in `[0, m)`
#[inline]
pub fn primary_hash(hash_code: i32, capacity: usize) -> usize {
    debug_assert!(capacity > 0);
    i64::from(hash_code).rem_euclid(capacity as i64) as usize
}

/// Double-hashing step: `1 + (((h mod (m-2)) + (m-2)) mod (m-2))`, always in `[1, m-2]`
#[inline]
pub fn secondary_hash(hash_code: i32, capacity: usize) -> usize {
    debug_assert!(capacity > 2);
    let modulus = (capacity - 2) as i64;
    1 + i64::from(hash_code).rem_euclid(modulus) as usize
}

/// Slots visited for one key, attempt `i` in `[0, capacity)`
///
/// Linear mode yields `(start + i) mod m`, double mode
/// `(start + i * step) mod m`. Arithmetic is done in 64 bits so `i * step`
/// cannot overflow for any realistic capacity.
#[derive(Clone, Debug)]
pub struct ProbeSequence {
    start: u64,
    step: u64,
    capacity: u64,
    attempt: u64,
}

impl ProbeSequence {
    pub fn new(hash_code: i32, capacity: usize, mode: ProbeMode) -> Self {
        let step = match mode {
            ProbeMode::Linear => 1,
            ProbeMode::Double => secondary_hash(hash_code, capacity),
        };

        ProbeSequence {
            start: primary_hash(hash_code, capacity) as u64,
            step: step as u64,
            capacity: capacity as u64,
            attempt: 0,
        }
    }

    /// Sequence for `key` in `table`
    pub fn for_key<K, Q>(table: &OpenAddressingTable<K>, key: &Q) -> Self
    where
        Q: HashCode + ?Sized,
    {
        Self::new(key.hash_code(), table.capacity(), table.mode())
    }

    pub fn start(&self) -> usize {
        self.start as usize
    }

    pub fn step(&self) -> usize {
        self.step as usize
    }
}

impl Iterator for ProbeSequence {
    type Item = usize;

    #[inline]
    fn next(&mut self) -> Option<usize> {
        if self.attempt >= self.capacity {
            return None;
        }
        let slot = (self.start + self.attempt * self.step) % self.capacity;
        self.attempt += 1;
        Some(slot as usize)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = (self.capacity - self.attempt) as usize;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for ProbeSequence {}

/// Outcome of a lookup
#[derive(Debug, PartialEq)]
pub enum SearchResult<'a, K> {
    /// Key already present; its duplicate count has been bumped
    Found(&'a KeyedEntry<K>),

    /// Key absent; `slot` is the first empty slot, reached after `probes` probes
    Empty { slot: usize, probes: usize },

    /// All slots probed, none empty and none matching
    TableFull,
}

impl<'a, K> SearchResult<'a, K> {
    pub fn is_found(&self) -> bool {
        matches!(self, SearchResult::Found(_))
    }

    pub fn is_absent(&self) -> bool {
        matches!(self, SearchResult::Empty { .. })
    }

    pub fn is_table_full(&self) -> bool {
        matches!(self, SearchResult::TableFull)
    }
}

/// Look `key` up, stopping at the first empty slot or the first match
///
/// A match increments the stored entry's duplicate count.
pub fn search<'a, K>(table: &'a mut OpenAddressingTable<K>, key: &K) -> SearchResult<'a, K>
where
    K: HashCode + PartialEq,
{
    let sequence = ProbeSequence::for_key(table, key);

    // Find location without holding the mutable borrow across iterations
    let mut location = None;
    for (attempt, slot) in sequence.enumerate() {
        match table.get_mut(slot) {
            None => {
                return SearchResult::Empty {
                    slot,
                    probes: attempt + 1,
                }
            }
            Some(entry) => {
                if entry.matches(key) {
                    location = Some(slot);
                    break;
                }
            }
        }
    }

    let table: &'a OpenAddressingTable<K> = table;
    match location.and_then(move |slot| table.get(slot)) {
        Some(entry) => SearchResult::Found(entry),
        None => {
            log::trace!(
                "{} table of capacity {} is full",
                table.mode(),
                table.capacity()
            );
            SearchResult::TableFull
        }
    }
}

/// Place `entry` in the first empty slot of its probe sequence
///
/// Does not check for duplicates; call [`search`] first. Returns the number
/// of probes spent (at least 1), which is also recorded on the stored entry.
pub fn insert<K>(
    table: &mut OpenAddressingTable<K>,
    mut entry: KeyedEntry<K>,
) -> Result<usize, TableError>
where
    K: HashCode,
{
    let sequence = ProbeSequence::for_key(table, entry.key());

    for (attempt, slot) in sequence.enumerate() {
        if table.is_vacant(slot) {
            let probes = attempt + 1;
            entry.set_probes(probes);
            table.place(slot, entry);
            return Ok(probes);
        }
    }

    Err(TableError::TableFull {
        capacity: table.capacity(),
    })
}
