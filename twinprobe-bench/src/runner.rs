//! One complete run: size the tables, fill them, summarize, optionally dump

use std::fmt::Display;

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use twinprobe_core::{HashCode, TableSizer};

use crate::config::{ExperimentConfig, SourceKind};
use crate::dump::dump_tables;
use crate::error::BenchError;
use crate::experiment::Experiment;
use crate::report::Summary;
use crate::source::{RandomInts, Timestamps, WordList};

/// Run the experiment described by `config`
///
/// The same seeded generator picks primality bases and random keys, so a
/// fixed seed reproduces a run exactly (except for the timestamp source).
pub fn run(config: &ExperimentConfig) -> Result<Summary, BenchError> {
    config.validate()?;

    let mut rng = match config.seed {
        Some(seed) => ChaCha8Rng::seed_from_u64(seed),
        None => ChaCha8Rng::from_entropy(),
    };

    let capacity = TableSizer::with_config(&mut rng, config.sizer).find_table_size()?;
    let target = config.target_insertions(capacity);
    log::info!(
        "table size {}, {} insertions for load factor {}",
        capacity,
        target,
        config.load_factor
    );

    match config.source {
        SourceKind::RandomInts => {
            let keys = RandomInts::new(&mut rng).map(Ok::<_, BenchError>);
            execute(config, capacity, target, keys)
        }
        SourceKind::Timestamps => {
            let keys = Timestamps.map(Ok::<_, BenchError>);
            execute(config, capacity, target, keys)
        }
        SourceKind::WordList => {
            let keys = WordList::open(&config.word_list)?;
            execute(config, capacity, target, keys)
        }
    }
}

fn execute<K, I>(
    config: &ExperimentConfig,
    capacity: usize,
    target: usize,
    keys: I,
) -> Result<Summary, BenchError>
where
    K: HashCode + PartialEq + Clone + Display,
    I: IntoIterator<Item = Result<K, BenchError>>,
{
    let mut experiment = Experiment::new(capacity)?;
    experiment.try_run(keys, target)?;

    if config.debug {
        let paths = dump_tables(&experiment, &config.output_dir)?;
        log::info!("dump files written: {:?}", paths);
    }

    Ok(Summary::new(&experiment, config.source, config.load_factor))
}
