//! Console summary of a finished run

use std::fmt;

use twinprobe_core::ProbeMode;

use crate::config::SourceKind;
use crate::experiment::{Experiment, ModeStats};

/// Snapshot of an experiment, rendered by `Display`
#[derive(Clone, Debug, PartialEq)]
pub struct Summary {
    pub capacity: usize,
    pub source: SourceKind,
    pub load_factor: f64,
    pub total_inputs: usize,
    pub linear: ModeStats,
    pub double: ModeStats,
}

impl Summary {
    pub fn new<K>(experiment: &Experiment<K>, source: SourceKind, load_factor: f64) -> Self {
        Summary {
            capacity: experiment.table(ProbeMode::Linear).capacity(),
            source,
            load_factor,
            total_inputs: experiment.total_inputs(),
            linear: experiment.stats(ProbeMode::Linear),
            double: experiment.stats(ProbeMode::Double),
        }
    }

    pub fn stats(&self, mode: ProbeMode) -> &ModeStats {
        match mode {
            ProbeMode::Linear => &self.linear,
            ProbeMode::Double => &self.double,
        }
    }
}

impl fmt::Display for Summary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "A good table size is found: {}", self.capacity)?;
        writeln!(f, "Data source type: {}", self.source)?;

        for mode in ProbeMode::ALL {
            let stats = self.stats(mode);
            writeln!(f)?;
            writeln!(f, "Using {}....", mode.label())?;
            writeln!(
                f,
                "Input {} elements, of which {} duplicates",
                self.total_inputs, stats.duplicates
            )?;
            writeln!(
                f,
                "load factor = {:?}, Avg. no. of probes {:?}",
                self.load_factor,
                stats.average_probes()
            )?;
        }
        Ok(())
    }
}
