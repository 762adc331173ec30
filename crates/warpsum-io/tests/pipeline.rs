//! End-to-end tests: CSV -> dataset -> all-pairs DTW total.

use std::path::{Path, PathBuf};

use warpsum_io::{IoError, SequenceReader};
use warpsum_pairs::{Execution, PairSumConfig, sum_all_pairs};

fn fixture_path(name: &str) -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name)
}

#[test]
fn fixture_total_round_trip() {
    let dataset = SequenceReader::new(&fixture_path("valid_6x4.csv"))
        .read()
        .expect("fixture should parse");

    assert_eq!(dataset.len(), 6);
    assert_eq!(dataset.series_len(), 4);
    assert_eq!(dataset.labels[4].as_str(), "3");

    let total = sum_all_pairs(&dataset.series).unwrap();
    assert_eq!(total.n_pairs(), 21);
    assert!((total.value() - 2400.3).abs() < 1e-9, "got {}", total.value());

    let parallel = PairSumConfig::new()
        .with_execution(Execution::Parallel)
        .sum(&dataset.series)
        .unwrap();
    assert_eq!(parallel.value().to_bits(), total.value().to_bits());
}

#[test]
fn ragged_rows_never_reach_the_kernel() {
    let result = SequenceReader::new(&fixture_path("ragged.csv")).read();
    assert!(matches!(
        result,
        Err(IoError::InconsistentRowLength { row_index: 1, .. })
    ));
}
