//! Demo of linear probing vs double hashing on a clustered key set
//!
//! Demonstrates:
//! - Sizing a table to a twin prime
//! - Feeding one key stream to both tables
//! - Reading per-mode statistics
//! - Dumping occupied slots

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use twinprobe_bench::dump::write_dump;
use twinprobe_bench::Experiment;
use twinprobe_core::{ProbeMode, SizerConfig, TableSizer};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("=== Twinprobe Collision Demo ===\n");

    // Small twin-prime table so the dump stays readable
    let config = SizerConfig {
        lower: 40,
        upper: 100,
        rounds: 8,
    };
    let capacity = TableSizer::with_config(ChaCha8Rng::seed_from_u64(12345), config)
        .find_table_size()?;
    println!("Table size: {} (twin of {})", capacity, capacity - 2);

    // Multiples of the capacity all share primary slot 0
    let keys: Vec<i32> = (0..capacity as i32 / 2)
        .map(|i| i * capacity as i32)
        .chain([0, capacity as i32])
        .collect();
    let target = keys.len();

    let mut experiment = Experiment::new(capacity)?;
    experiment.run(keys, target);

    for mode in ProbeMode::ALL {
        let stats = experiment.stats(mode);
        println!("\n{}:", mode.label());
        println!("  Inserted:   {}", stats.inserted);
        println!("  Duplicates: {}", stats.duplicates);
        println!("  Avg probes: {:.2}", stats.average_probes());
    }

    println!("\nDouble-hashing dump:");
    write_dump(experiment.table(ProbeMode::Double), std::io::stdout())?;

    Ok(())
}
