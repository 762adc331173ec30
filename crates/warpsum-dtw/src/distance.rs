//! DTW distance newtype wrapper.

/// Cumulative warped squared distance between two series.
///
/// This is the raw `D[n-1][n-1]` cell of the cost recurrence; no square root
/// is taken. Non-negative whenever both inputs are finite.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DtwDistance(f64);

impl DtwDistance {
    pub(crate) fn new(value: f64) -> Self {
        Self(value)
    }

    /// Return the raw distance value.
    #[must_use]
    pub fn value(self) -> f64 {
        self.0
    }
}
