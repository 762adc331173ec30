//! Accuracy regression tests for warpsum-pairs.

use warpsum_dtw::{TimeSeries, distance};
use warpsum_pairs::{Execution, PairSumConfig, UpperTrianglePairs, pair_count, sum_all_pairs};

fn ts(values: Vec<f64>) -> TimeSeries {
    TimeSeries::new(values).expect("valid test series")
}

fn three_level_collection() -> Vec<TimeSeries> {
    vec![
        ts(vec![0.0, 0.1, 0.0, 0.1]),
        ts(vec![0.1, 0.0, 0.1, 0.0]),
        ts(vec![5.0, 5.1, 5.0, 5.1]),
        ts(vec![5.1, 5.0, 5.1, 5.0]),
        ts(vec![10.0, 10.1, 10.0, 10.1]),
        ts(vec![10.1, 10.0, 10.1, 10.0]),
    ]
}

#[test]
fn total_matches_known_value() {
    let total = sum_all_pairs(&three_level_collection()).unwrap();
    assert_eq!(total.n_pairs(), 21);
    assert!(
        (total.value() - 2400.3).abs() < 1e-9,
        "got {:.15}",
        total.value()
    );
}

#[test]
fn total_equals_ordered_fold_of_kernel_calls() {
    let series = three_level_collection();
    let expected = UpperTrianglePairs::new(series.len()).fold(0.0_f64, |acc, (i, j)| {
        acc + distance(series[i].as_view(), series[j].as_view())
            .unwrap()
            .value()
    });
    let total = sum_all_pairs(&series).unwrap();
    assert_eq!(total.value().to_bits(), expected.to_bits());
}

#[test]
fn self_pairs_contribute_nothing() {
    // Summing over i <= j equals summing over i < j because every diagonal
    // term is exactly zero.
    let series = three_level_collection();
    let strict: f64 = UpperTrianglePairs::new(series.len())
        .filter(|(i, j)| i != j)
        .map(|(i, j)| distance(series[i].as_view(), series[j].as_view()).unwrap().value())
        .sum();
    let total = sum_all_pairs(&series).unwrap();
    assert!((total.value() - strict).abs() < 1e-9);
}

#[test]
fn pair_count_grows_quadratically() {
    for m in [1usize, 2, 5, 10] {
        let series: Vec<TimeSeries> = (0..m).map(|k| ts(vec![k as f64, 0.0, 1.0])).collect();
        let total = PairSumConfig::new()
            .with_execution(Execution::Parallel)
            .sum(&series)
            .unwrap();
        assert_eq!(total.n_pairs(), pair_count(m));
        assert_eq!(total.n_pairs(), m * (m + 1) / 2);
    }
}
