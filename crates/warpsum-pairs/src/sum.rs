//! Sequential and parallel all-pairs folds.

use rayon::prelude::*;
use tracing::{debug, info, instrument};
use warpsum_dtw::{DtwDistance, DtwError, RowBuffers, TimeSeries, distance_with_buffers};

use crate::config::PairSumConfig;
use crate::error::PairSumError;
use crate::pairs::UpperTrianglePairs;
use crate::total::PairTotal;

/// Sum DTW distances over all pairs with the default configuration.
///
/// # Errors
///
/// See [`PairSumConfig::sum`].
pub fn sum_all_pairs(series: &[TimeSeries]) -> Result<PairTotal, PairSumError> {
    PairSumConfig::default().sum(series)
}

fn series_len(series: &[TimeSeries]) -> usize {
    series.first().map_or(0, TimeSeries::len)
}

/// Reject the collection before any pair runs if some series differs in
/// length from series 0. Reports `(0, k)` for the first such `k`, the pair
/// the sequential walk would fail on, and guarantees every pair afterwards
/// fits buffers sized from series 0.
fn check_uniform_lengths(series: &[TimeSeries]) -> Result<(), PairSumError> {
    let n = series_len(series);
    match series.iter().position(|s| s.len() != n) {
        Some(k) => Err(PairSumError::Dtw {
            i: 0,
            j: k,
            source: DtwError::LengthMismatch {
                left: n,
                right: series[k].len(),
            },
        }),
        None => Ok(()),
    }
}

fn pair_distance(
    series: &[TimeSeries],
    i: usize,
    j: usize,
    buffers: &mut RowBuffers,
) -> Result<DtwDistance, PairSumError> {
    distance_with_buffers(series[i].as_view(), series[j].as_view(), buffers)
        .map_err(|source| PairSumError::Dtw { i, j, source })
}

#[instrument(skip_all, fields(m = series.len(), n = series_len(series)))]
pub(crate) fn sum_sequential(series: &[TimeSeries]) -> Result<PairTotal, PairSumError> {
    check_uniform_lengths(series)?;
    let mut buffers = RowBuffers::new(series_len(series));

    let (value, n_pairs) = UpperTrianglePairs::new(series.len()).try_fold(
        (0.0_f64, 0_usize),
        |(acc, count), (i, j)| {
            let d = pair_distance(series, i, j, &mut buffers)?;
            Ok::<_, PairSumError>((acc + d.value(), count + 1))
        },
    )?;

    info!(total = value, n_pairs, "sequential pair sum complete");
    Ok(PairTotal::new(value, n_pairs))
}

#[instrument(skip_all, fields(m = series.len(), n = series_len(series)))]
pub(crate) fn sum_parallel(series: &[TimeSeries]) -> Result<PairTotal, PairSumError> {
    check_uniform_lengths(series)?;
    let n = series_len(series);
    let pairs: Vec<(usize, usize)> = UpperTrianglePairs::new(series.len()).collect();
    debug!(n_pairs = pairs.len(), threads = rayon::current_num_threads(), "dispatching pairs");

    // Indexed collect keeps enumeration order, so the fold below adds in the
    // same order as the sequential path.
    let distances: Vec<f64> = pairs
        .par_iter()
        .map_init(
            || RowBuffers::new(n),
            |buffers, &(i, j)| pair_distance(series, i, j, buffers).map(DtwDistance::value),
        )
        .collect::<Result<Vec<f64>, PairSumError>>()?;

    let value = distances.iter().fold(0.0_f64, |acc, d| acc + d);

    info!(total = value, n_pairs = distances.len(), "parallel pair sum complete");
    Ok(PairTotal::new(value, distances.len()))
}
