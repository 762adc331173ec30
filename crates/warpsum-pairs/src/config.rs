//! Aggregation configuration.

use std::fmt;

use warpsum_dtw::TimeSeries;

use crate::error::PairSumError;
use crate::sum::{sum_parallel, sum_sequential};
use crate::total::PairTotal;

/// How pair evaluations are scheduled.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Execution {
    /// One thread, one set of row buffers, pairs in enumeration order.
    #[default]
    Sequential,
    /// Pairs evaluated on the rayon pool, each worker with its own row
    /// buffers. Distances are gathered in enumeration order before summing,
    /// so the total is bit-identical to [`Execution::Sequential`].
    Parallel,
}

impl fmt::Display for Execution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Sequential => f.write_str("sequential"),
            Self::Parallel => f.write_str("parallel"),
        }
    }
}

/// Configuration for summing DTW distances over all pairs.
///
/// # Defaults
///
/// | Parameter   | Default                  |
/// |-------------|--------------------------|
/// | `execution` | `Execution::Sequential`  |
#[derive(Debug, Clone, Default)]
pub struct PairSumConfig {
    execution: Execution,
}

impl PairSumConfig {
    /// Create a configuration with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the execution mode.
    #[must_use]
    pub fn with_execution(mut self, execution: Execution) -> Self {
        self.execution = execution;
        self
    }

    /// Return the execution mode.
    #[must_use]
    pub fn execution(&self) -> Execution {
        self.execution
    }

    /// Sum the DTW distance of every pair `(i, j)` with `i <= j`.
    ///
    /// The total is accumulated left to right in
    /// [`UpperTrianglePairs`](crate::UpperTrianglePairs) order. An empty
    /// collection sums to `0.0` over zero pairs.
    ///
    /// # Errors
    ///
    /// | Variant | Condition |
    /// |---|---|
    /// | [`PairSumError::Dtw`] | Two series in the collection differ in length |
    ///
    /// Lengths are checked before any pair is evaluated, so both execution
    /// modes report the same pair: `(0, k)` for the first series `k` whose
    /// length differs from series 0.
    pub fn sum(&self, series: &[TimeSeries]) -> Result<PairTotal, PairSumError> {
        match self.execution {
            Execution::Sequential => sum_sequential(series),
            Execution::Parallel => sum_parallel(series),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_sequential() {
        assert_eq!(PairSumConfig::new().execution(), Execution::Sequential);
    }

    #[test]
    fn builder_sets_execution() {
        let config = PairSumConfig::new().with_execution(Execution::Parallel);
        assert_eq!(config.execution(), Execution::Parallel);
    }

    #[test]
    fn execution_display() {
        assert_eq!(Execution::Sequential.to_string(), "sequential");
        assert_eq!(Execution::Parallel.to_string(), "parallel");
    }
}
