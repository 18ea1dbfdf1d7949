//! Stored element plus the counters an experiment reads back
//!
//! Entries compare by key alone. A successful match during a lookup bumps the
//! stored entry's duplicate counter, so the counter records how many later
//! attempts collided with a key already in the table.

use std::fmt;

/// A key together with its insertion cost and duplicate tally
#[derive(Clone, Debug)]
pub struct KeyedEntry<K> {
    key: K,

    /// Probes spent on the first successful insertion (0 until inserted)
    probe_count: usize,

    /// Lookups that matched this entry
    duplicate_count: usize,
}

impl<K> KeyedEntry<K> {
    /// Create a fresh entry with both counters at zero
    pub fn new(key: K) -> Self {
        KeyedEntry {
            key,
            probe_count: 0,
            duplicate_count: 0,
        }
    }

    pub fn key(&self) -> &K {
        &self.key
    }

    pub fn into_key(self) -> K {
        self.key
    }

    pub fn probe_count(&self) -> usize {
        self.probe_count
    }

    pub fn duplicate_count(&self) -> usize {
        self.duplicate_count
    }

    /// Record the insertion cost. Only the first call takes effect.
    pub(crate) fn set_probes(&mut self, probes: usize) {
        debug_assert!(probes >= 1, "an insertion costs at least one probe");
        if self.probe_count == 0 {
            self.probe_count = probes;
        }
    }

    /// Compare against `key`, counting a duplicate on match
    pub fn matches(&mut self, key: &K) -> bool
    where
        K: PartialEq,
    {
        let hit = self.key == *key;
        if hit {
            self.duplicate_count += 1;
        }
        hit
    }
}

impl<K: PartialEq> PartialEq for KeyedEntry<K> {
    fn eq(&self, other: &Self) -> bool {
        self.key == other.key
    }
}

impl<K: Eq> Eq for KeyedEntry<K> {}

/// `<key> <duplicates> <probes>`, the per-slot dump format
impl<K: fmt::Display> fmt::Display for KeyedEntry<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.key, self.duplicate_count, self.probe_count)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_entry() {
        let entry = KeyedEntry::new(17);
        assert_eq!(*entry.key(), 17);
        assert_eq!(entry.probe_count(), 0);
        assert_eq!(entry.duplicate_count(), 0);
    }

    #[test]
    fn test_matches_counts_duplicates() {
        let mut entry = KeyedEntry::new("apple".to_string());
        assert!(!entry.matches(&"pear".to_string()));
        assert_eq!(entry.duplicate_count(), 0);

        assert!(entry.matches(&"apple".to_string()));
        assert!(entry.matches(&"apple".to_string()));
        assert_eq!(entry.duplicate_count(), 2);
    }

    #[test]
    fn test_probes_set_once() {
        let mut entry = KeyedEntry::new(3i64);
        entry.set_probes(4);
        entry.set_probes(9);
        assert_eq!(entry.probe_count(), 4);
    }

    #[test]
    fn test_equality_ignores_counters() {
        let mut a = KeyedEntry::new(5);
        let b = KeyedEntry::new(5);
        a.set_probes(3);
        a.matches(&5);
        assert_eq!(a, b);
        assert_ne!(a, KeyedEntry::new(6));
    }

    #[test]
    fn test_display() {
        let mut entry = KeyedEntry::new(-12);
        entry.set_probes(2);
        entry.matches(&-12);
        assert_eq!(entry.to_string(), "-12 1 2");
    }
}
