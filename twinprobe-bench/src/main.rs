use std::path::PathBuf;

use anyhow::Context;
use clap::{ArgAction, Parser};
use log::LevelFilter;
use simple_logger::SimpleLogger;
use twinprobe_bench::{ExperimentConfig, SourceKind};
use twinprobe_core::prime::{DEFAULT_LOWER_BOUND, DEFAULT_ROUNDS, DEFAULT_UPPER_BOUND};
use twinprobe_core::SizerConfig;

/// Compare linear probing and double hashing in a twin-prime sized table
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Key source: 1 = random integers, 2 = current time in milliseconds, 3 = word list
    source: SourceKind,

    /// Fraction of the table to fill, in (0, 1]
    load_factor: f64,

    /// 1 writes linear-dump and double-dump
    #[arg(default_value_t = 0, value_parser = clap::value_parser!(u8).range(0..=1))]
    debug_level: u8,

    /// Word file used by source 3
    #[arg(long, default_value = "word-list")]
    word_list: PathBuf,

    /// Directory receiving dump files
    #[arg(long, default_value = ".")]
    output_dir: PathBuf,

    /// Seed for random keys and primality bases
    #[arg(long)]
    seed: Option<u64>,

    /// Fermat rounds per table-size candidate
    #[arg(long, default_value_t = DEFAULT_ROUNDS)]
    rounds: usize,

    /// First table-size candidate
    #[arg(long, default_value_t = DEFAULT_LOWER_BOUND)]
    min_size: u64,

    /// Table-size search stops before this value
    #[arg(long, default_value_t = DEFAULT_UPPER_BOUND)]
    max_size: u64,

    /// More logging (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

impl Cli {
    fn log_level(&self) -> LevelFilter {
        match self.verbose {
            0 => LevelFilter::Warn,
            1 => LevelFilter::Info,
            2 => LevelFilter::Debug,
            _ => LevelFilter::Trace,
        }
    }

    fn into_config(self) -> ExperimentConfig {
        ExperimentConfig {
            source: self.source,
            load_factor: self.load_factor,
            debug: self.debug_level == 1,
            seed: self.seed,
            word_list: self.word_list,
            output_dir: self.output_dir,
            sizer: SizerConfig {
                lower: self.min_size,
                upper: self.max_size,
                rounds: self.rounds,
            },
        }
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    SimpleLogger::new()
        .with_level(cli.log_level())
        .env()
        .init()
        .context("failed to install logger")?;

    let config = cli.into_config();
    let summary = twinprobe_bench::run(&config).with_context(|| {
        format!(
            "{} run at load factor {} failed",
            config.source, config.load_factor
        )
    })?;

    print!("{}", summary);
    Ok(())
}
