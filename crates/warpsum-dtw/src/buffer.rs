//! Reusable row storage for the rolling DTW recurrence.

/// The two cost-matrix rows the kernel rolls over.
///
/// Holds exactly `2 * n` values for series of length `n`. The kernel swaps
/// the roles of the rows on every outer iteration and never resizes them, so
/// one set of buffers can serve any number of same-length kernel calls.
/// Concurrent kernel calls must each own their buffers.
#[derive(Debug, Clone)]
pub struct RowBuffers {
    pub(crate) curr: Vec<f64>,
    pub(crate) prev: Vec<f64>,
}

impl RowBuffers {
    /// Allocate zeroed buffers for series of length `n`.
    #[must_use]
    pub fn new(n: usize) -> Self {
        Self {
            curr: vec![0.0; n],
            prev: vec![0.0; n],
        }
    }

    /// Return the series length these buffers were sized for.
    #[must_use]
    pub fn row_len(&self) -> usize {
        self.curr.len()
    }

    /// Return the total number of `f64` slots held across both rows.
    #[must_use]
    pub fn total_len(&self) -> usize {
        self.curr.len() + self.prev.len()
    }
}
