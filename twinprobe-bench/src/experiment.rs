//! Two tables, one key stream
//!
//! Every key is offered to a linear-probing table and a double-hashing table
//! of the same capacity. Each table gets its own entry, so probe and
//! duplicate counts stay local to the table that produced them.

use std::convert::Infallible;

use twinprobe_core::{
    insert, search, HashCode, KeyedEntry, OpenAddressingTable, ProbeMode, SearchResult, TableError,
};

/// What happened to one key in one table
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Outcome {
    Inserted { probes: usize },
    Duplicate,
    /// Table saturated; neither a duplicate nor an insertion
    Full,
}

/// Running totals for one table
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ModeStats {
    pub inserted: usize,
    pub duplicates: usize,
    pub probes: usize,
    pub full_skips: usize,
}

impl ModeStats {
    /// Mean probes per successful insertion (0 when nothing was inserted)
    pub fn average_probes(&self) -> f64 {
        if self.inserted == 0 {
            0.0
        } else {
            self.probes as f64 / self.inserted as f64
        }
    }

    fn record(&mut self, outcome: Outcome) {
        match outcome {
            Outcome::Inserted { probes } => {
                self.inserted += 1;
                self.probes += probes;
            }
            Outcome::Duplicate => self.duplicates += 1,
            Outcome::Full => self.full_skips += 1,
        }
    }
}

/// Search, and insert on a miss
fn offer_to<K>(table: &mut OpenAddressingTable<K>, key: K) -> Outcome
where
    K: HashCode + PartialEq,
{
    match search(table, &key) {
        SearchResult::Found(_) => Outcome::Duplicate,
        SearchResult::Empty { .. } => match insert(table, KeyedEntry::new(key)) {
            Ok(probes) => Outcome::Inserted { probes },
            Err(_) => Outcome::Full,
        },
        SearchResult::TableFull => Outcome::Full,
    }
}

/// Linear and double-hashing tables filled side by side
pub struct Experiment<K> {
    linear: OpenAddressingTable<K>,
    double: OpenAddressingTable<K>,
    linear_stats: ModeStats,
    double_stats: ModeStats,

    /// Keys drawn, minus those skipped because the linear table was full
    total_inputs: usize,
}

impl<K> Experiment<K>
where
    K: HashCode + PartialEq + Clone,
{
    pub fn new(capacity: usize) -> Result<Self, TableError> {
        Ok(Experiment {
            linear: OpenAddressingTable::linear(capacity)?,
            double: OpenAddressingTable::double(capacity)?,
            linear_stats: ModeStats::default(),
            double_stats: ModeStats::default(),
            total_inputs: 0,
        })
    }

    /// Offer one key to both tables
    pub fn offer(&mut self, key: K) -> (Outcome, Outcome) {
        let linear = offer_to(&mut self.linear, key.clone());
        let double = offer_to(&mut self.double, key);

        self.linear_stats.record(linear);
        self.double_stats.record(double);

        if linear != Outcome::Full {
            self.total_inputs += 1;
        } else {
            log::warn!("linear table full, key skipped");
        }
        if double == Outcome::Full {
            log::warn!("double-hashing table full, key skipped");
        }

        (linear, double)
    }

    /// Offer keys until the linear table has `target` new entries or the
    /// keys run out. Returns the number of keys drawn.
    pub fn run<I>(&mut self, keys: I, target: usize) -> usize
    where
        I: IntoIterator<Item = K>,
    {
        match self.try_run(keys.into_iter().map(Ok::<K, Infallible>), target) {
            Ok(drawn) => drawn,
            Err(never) => match never {},
        }
    }

    /// Like [`Experiment::run`] over a fallible key stream; stops at the first error
    pub fn try_run<I, E>(&mut self, keys: I, target: usize) -> Result<usize, E>
    where
        I: IntoIterator<Item = Result<K, E>>,
    {
        let mut drawn = 0;
        let mut keys = keys.into_iter();

        while self.linear_stats.inserted < target && !self.linear.is_full() {
            let Some(key) = keys.next() else {
                log::warn!(
                    "key source exhausted after {} keys, {} of {} insertions made",
                    drawn,
                    self.linear_stats.inserted,
                    target
                );
                break;
            };
            self.offer(key?);
            drawn += 1;
        }

        log::debug!(
            "run finished: {} keys drawn, linear {:?}, double {:?}",
            drawn,
            self.linear_stats,
            self.double_stats
        );
        Ok(drawn)
    }

    pub fn capacity(&self) -> usize {
        self.linear.capacity()
    }
}

impl<K> Experiment<K> {
    pub fn table(&self, mode: ProbeMode) -> &OpenAddressingTable<K> {
        match mode {
            ProbeMode::Linear => &self.linear,
            ProbeMode::Double => &self.double,
        }
    }

    pub fn stats(&self, mode: ProbeMode) -> ModeStats {
        match mode {
            ProbeMode::Linear => self.linear_stats,
            ProbeMode::Double => self.double_stats,
        }
    }

    pub fn total_inputs(&self) -> usize {
        self.total_inputs
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_offer_records_both_tables() {
        let mut experiment = Experiment::new(7).unwrap();

        assert_eq!(
            experiment.offer(10),
            (Outcome::Inserted { probes: 1 }, Outcome::Inserted { probes: 1 })
        );
        assert_eq!(
            experiment.offer(17),
            (Outcome::Inserted { probes: 2 }, Outcome::Inserted { probes: 2 })
        );
        assert_eq!(
            experiment.offer(24),
            (Outcome::Inserted { probes: 3 }, Outcome::Inserted { probes: 2 })
        );
        assert_eq!(experiment.offer(17), (Outcome::Duplicate, Outcome::Duplicate));

        let linear = experiment.stats(ProbeMode::Linear);
        assert_eq!(linear.inserted, 3);
        assert_eq!(linear.probes, 6);
        assert_eq!(linear.duplicates, 1);
        assert_eq!(experiment.stats(ProbeMode::Double).probes, 5);
        assert_eq!(experiment.total_inputs(), 4);
    }

    #[test]
    fn test_tables_hold_separate_entries() {
        let mut experiment = Experiment::new(7).unwrap();
        experiment.offer(3);
        experiment.offer(3);

        for mode in ProbeMode::ALL {
            let table = experiment.table(mode);
            assert_eq!(table.get(3).unwrap().duplicate_count(), 1);
        }
    }

    #[test]
    fn test_run_stops_at_target() {
        let mut experiment = Experiment::new(13).unwrap();
        let drawn = experiment.run(0.., 5);
        assert_eq!(drawn, 5);
        assert_eq!(experiment.table(ProbeMode::Linear).len(), 5);
        assert_eq!(experiment.table(ProbeMode::Double).len(), 5);
    }

    #[test]
    fn test_run_counts_duplicates_toward_inputs() {
        let mut experiment = Experiment::new(13).unwrap();
        let keys = [1, 1, 2, 2, 2, 3];
        let drawn = experiment.run(keys, 3);
        assert_eq!(drawn, 6);
        assert_eq!(experiment.total_inputs(), 6);
        assert_eq!(experiment.stats(ProbeMode::Linear).duplicates, 3);
        assert_eq!(experiment.stats(ProbeMode::Double).duplicates, 3);
    }

    #[test]
    fn test_run_stops_when_keys_exhausted() {
        let mut experiment = Experiment::new(13).unwrap();
        let drawn = experiment.run(vec![4, 5], 10);
        assert_eq!(drawn, 2);
        assert_eq!(experiment.stats(ProbeMode::Linear).inserted, 2);
    }

    #[test]
    fn test_try_run_propagates_errors() {
        let mut experiment = Experiment::new(13).unwrap();
        let keys = vec![Ok(1), Err("bad line"), Ok(2)];
        assert_eq!(experiment.try_run(keys, 10), Err("bad line"));
        assert_eq!(experiment.stats(ProbeMode::Linear).inserted, 1);
    }

    #[test]
    fn test_fill_completely() {
        let mut experiment = Experiment::new(7).unwrap();
        experiment.run(0.., 7);
        assert!(experiment.table(ProbeMode::Linear).is_full());
        assert!(experiment.table(ProbeMode::Double).is_full());
        assert_eq!(experiment.offer(100), (Outcome::Full, Outcome::Full));
        assert_eq!(experiment.stats(ProbeMode::Linear).full_skips, 1);
        assert_eq!(experiment.total_inputs(), 7);
    }

    #[test]
    fn test_average_probes() {
        let stats = ModeStats {
            inserted: 4,
            probes: 10,
            ..ModeStats::default()
        };
        assert_eq!(stats.average_probes(), 2.5);
        assert_eq!(ModeStats::default().average_probes(), 0.0);
    }
}
