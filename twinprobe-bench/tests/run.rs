//! End-to-end runs through `twinprobe_bench::run`

use std::fs;
use std::path::Path;

use twinprobe_bench::{run, BenchError, ExperimentConfig, SourceKind};
use twinprobe_core::{primary_hash, HashCode, SizerConfig, TableError};

/// Twin primes 1019/1021 are the first pair in this range
fn small_sizer() -> SizerConfig {
    SizerConfig {
        lower: 1_000,
        upper: 1_100,
        rounds: 20,
    }
}

fn dump_lines(dir: &Path, name: &str) -> Vec<String> {
    fs::read_to_string(dir.join(name))
        .expect("read dump")
        .lines()
        .map(str::to_owned)
        .collect()
}

fn slot_of(line: &str) -> usize {
    let start = line.find('[').expect("open bracket") + 1;
    let end = line.find(']').expect("close bracket");
    line[start..end].parse().expect("slot index")
}

#[test]
fn test_random_ints_with_dumps() {
    let dir = tempfile::TempDir::new().expect("create temp dir");
    let config = ExperimentConfig {
        source: SourceKind::RandomInts,
        load_factor: 0.75,
        debug: true,
        seed: Some(42),
        output_dir: dir.path().to_path_buf(),
        sizer: small_sizer(),
        ..ExperimentConfig::default()
    };

    let summary = run(&config).expect("run succeeds");

    assert_eq!(summary.capacity, 1_021);
    assert_eq!(summary.linear.inserted, 766);
    // Both tables see the same key set
    assert_eq!(summary.double.inserted, 766);
    assert_eq!(summary.linear.duplicates, summary.double.duplicates);
    assert_eq!(summary.total_inputs, 766 + summary.linear.duplicates);
    assert!(summary.linear.probes >= 766 && summary.double.probes >= 766);

    for name in ["linear-dump", "double-dump"] {
        let lines = dump_lines(dir.path(), name);
        assert_eq!(lines.len(), 766, "{} line count", name);
        assert!(lines.iter().all(|line| line.starts_with("table[")));
        let slots: Vec<usize> = lines.iter().map(|line| slot_of(line)).collect();
        assert!(slots.windows(2).all(|pair| pair[0] < pair[1]), "{} not in slot order", name);
    }
}

#[test]
fn test_seed_reproduces_run() {
    let config = ExperimentConfig {
        load_factor: 0.9,
        seed: Some(7),
        sizer: small_sizer(),
        ..ExperimentConfig::default()
    };
    let first = run(&config).expect("first run");
    let second = run(&config).expect("second run");
    assert_eq!(first, second);
}

#[test]
fn test_word_list_exhausted_early() {
    let dir = tempfile::TempDir::new().expect("create temp dir");
    let words = dir.path().join("word-list");
    fs::write(&words, "apple\nbanana\napple\ncherry\nbanana\napple\ndate\n").expect("write words");

    let config = ExperimentConfig {
        source: SourceKind::WordList,
        load_factor: 1.0,
        debug: true,
        seed: Some(1),
        word_list: words,
        output_dir: dir.path().to_path_buf(),
        sizer: small_sizer(),
    };

    let summary = run(&config).expect("run succeeds");
    assert_eq!(summary.total_inputs, 7);
    assert_eq!(summary.linear.inserted, 4);
    assert_eq!(summary.linear.duplicates, 3);
    assert_eq!(summary.double.duplicates, 3);

    // First key lands on its primary slot in both tables
    let slot = primary_hash("apple".hash_code(), 1_021);
    let expected = format!("table[{}]: apple 2 1", slot);
    for name in ["linear-dump", "double-dump"] {
        assert!(dump_lines(dir.path(), name).contains(&expected), "{} missing apple", name);
    }
}

#[test]
fn test_invalid_load_factor() {
    let config = ExperimentConfig {
        load_factor: 1.5,
        ..ExperimentConfig::default()
    };
    assert!(matches!(run(&config), Err(BenchError::InvalidLoadFactor(_))));
}

#[test]
fn test_sizing_failure_is_fatal() {
    let config = ExperimentConfig {
        seed: Some(3),
        sizer: SizerConfig {
            lower: 24,
            upper: 28,
            rounds: 20,
        },
        ..ExperimentConfig::default()
    };
    assert!(matches!(
        run(&config),
        Err(BenchError::Table(TableError::SizingFailure { lower: 24, upper: 28 }))
    ));
}

#[test]
fn test_missing_word_list() {
    let config = ExperimentConfig {
        source: SourceKind::WordList,
        seed: Some(5),
        word_list: "/nonexistent/twinprobe/word-list".into(),
        sizer: small_sizer(),
        ..ExperimentConfig::default()
    };
    assert!(matches!(run(&config), Err(BenchError::WordList { .. })));
}
