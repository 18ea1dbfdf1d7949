//! Per-slot dump files
//!
//! One line per occupied slot, in slot order: `table[i]: <key> <duplicates> <probes>`.

use std::fmt::Display;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

use twinprobe_core::{OpenAddressingTable, ProbeMode};

use crate::error::BenchError;
use crate::experiment::Experiment;

/// File name a table of `mode` is dumped to
pub fn dump_file_name(mode: ProbeMode) -> &'static str {
    match mode {
        ProbeMode::Linear => "linear-dump",
        ProbeMode::Double => "double-dump",
    }
}

/// Write the occupied slots of `table`, returning the number of lines
pub fn write_dump<K, W>(table: &OpenAddressingTable<K>, out: W) -> io::Result<usize>
where
    K: Display,
    W: Write,
{
    let mut out = BufWriter::new(out);
    let mut lines = 0;
    for (slot, entry) in table.occupied() {
        writeln!(out, "table[{}]: {}", slot, entry)?;
        lines += 1;
    }
    out.flush()?;
    Ok(lines)
}

/// Replace `linear-dump` and `double-dump` in `dir`
pub fn dump_tables<K: Display>(
    experiment: &Experiment<K>,
    dir: impl AsRef<Path>,
) -> Result<Vec<PathBuf>, BenchError> {
    let dir = dir.as_ref();
    let mut written = Vec::with_capacity(ProbeMode::ALL.len());

    for mode in ProbeMode::ALL {
        let path = dir.join(dump_file_name(mode));
        let to_error = |source| BenchError::Dump {
            path: path.clone(),
            source,
        };

        let file = File::create(&path).map_err(to_error)?;
        let lines = write_dump(experiment.table(mode), file).map_err(to_error)?;
        log::info!("wrote {} slots to {}", lines, path.display());
        written.push(path);
    }

    Ok(written)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_write_dump_format() {
        let mut experiment = Experiment::new(7).unwrap();
        experiment.run([10, 17, 24, 17], 4);

        let mut out = Vec::new();
        let lines = write_dump(experiment.table(ProbeMode::Double), &mut out).unwrap();
        assert_eq!(lines, 3);
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "table[1]: 24 0 2\ntable[3]: 10 0 1\ntable[6]: 17 1 2\n"
        );
    }

    #[test]
    fn test_empty_table_dumps_nothing() {
        let experiment: Experiment<String> = Experiment::new(5).unwrap();
        let mut out = Vec::new();
        assert_eq!(write_dump(experiment.table(ProbeMode::Linear), &mut out).unwrap(), 0);
        assert!(out.is_empty());
    }
}
