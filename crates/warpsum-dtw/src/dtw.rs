//! DTW distance computation.

use tracing::instrument;

use crate::buffer::RowBuffers;
use crate::distance::DtwDistance;
use crate::error::DtwError;
use crate::series::TimeSeriesView;

#[inline(always)]
fn square_dist(x: f64, y: f64) -> f64 {
    let dif = x - y;
    dif * dif
}

// Strict comparisons: on equal values the later argument wins, which leaves the
// returned value unchanged.
#[inline(always)]
fn min3(x: f64, y: f64, z: f64) -> f64 {
    if x < y {
        if x < z { x } else { z }
    } else if y < z {
        y
    } else {
        z
    }
}

/// Compute the DTW distance between two equal-length series.
///
/// Allocates a fresh pair of [`RowBuffers`]. Use
/// [`distance_with_buffers`] to amortize the allocation over many calls.
///
/// # Errors
///
/// | Variant | Condition |
/// |---|---|
/// | [`DtwError::LengthMismatch`] | `a.len() != b.len()` |
#[instrument(level = "trace", skip_all, fields(n = a.len()))]
pub fn distance(a: TimeSeriesView<'_>, b: TimeSeriesView<'_>) -> Result<DtwDistance, DtwError> {
    distance_slices(a.as_slice(), b.as_slice())
}

/// Compute the DTW distance reusing caller-owned row buffers.
///
/// The buffers must have been built for the series length. Their contents on
/// entry are irrelevant; every cell read is written earlier in the same call.
///
/// # Errors
///
/// | Variant | Condition |
/// |---|---|
/// | [`DtwError::LengthMismatch`] | `a.len() != b.len()` |
/// | [`DtwError::BufferLengthMismatch`] | `buffers.row_len() != a.len()` |
#[instrument(level = "trace", skip_all, fields(n = a.len()))]
pub fn distance_with_buffers(
    a: TimeSeriesView<'_>,
    b: TimeSeriesView<'_>,
    buffers: &mut RowBuffers,
) -> Result<DtwDistance, DtwError> {
    check_lengths(a.as_slice(), b.as_slice())?;
    if buffers.row_len() != a.len() {
        return Err(DtwError::BufferLengthMismatch {
            expected: a.len(),
            got: buffers.row_len(),
        });
    }
    Ok(DtwDistance::new(rolling_distance(
        a.as_slice(),
        b.as_slice(),
        buffers,
    )))
}

/// Compute the DTW distance over raw slices.
///
/// Values are not checked for finiteness: NaN and infinities flow through
/// the squared cost and the minimum under IEEE-754 rules.
///
/// # Errors
///
/// | Variant | Condition |
/// |---|---|
/// | [`DtwError::EmptySeries`] | either slice is empty |
/// | [`DtwError::LengthMismatch`] | `a.len() != b.len()` |
pub fn distance_slices(a: &[f64], b: &[f64]) -> Result<DtwDistance, DtwError> {
    check_lengths(a, b)?;
    let mut buffers = RowBuffers::new(a.len());
    Ok(DtwDistance::new(rolling_distance(a, b, &mut buffers)))
}

fn check_lengths(a: &[f64], b: &[f64]) -> Result<(), DtwError> {
    if a.len() != b.len() {
        return Err(DtwError::LengthMismatch {
            left: a.len(),
            right: b.len(),
        });
    }
    if a.is_empty() {
        return Err(DtwError::EmptySeries);
    }
    Ok(())
}

/// Two-row rolling recurrence. Row `i` of the cost matrix lives in `curr`
/// while row `i - 1` lives in `prev`; the rows trade places at the top of
/// each outer iteration.
///
/// Requires `a.len() == b.len() == buffers.row_len() >= 1`.
#[allow(clippy::needless_range_loop)]
fn rolling_distance(a: &[f64], b: &[f64], buffers: &mut RowBuffers) -> f64 {
    let n = a.len();
    let RowBuffers { curr, prev } = buffers;

    // First row accumulates along b only.
    curr[0] = square_dist(a[0], b[0]);
    for j in 1..n {
        curr[j] = curr[j - 1] + square_dist(a[0], b[j]);
    }

    for i in 1..n {
        std::mem::swap(curr, prev);
        curr[0] = prev[0] + square_dist(a[i], b[0]);
        for j in 1..n {
            let diag = prev[j - 1];
            let left = curr[j - 1];
            let above = prev[j];
            curr[j] = min3(diag, left, above) + square_dist(a[i], b[j]);
        }
    }

    curr[n - 1]
}
