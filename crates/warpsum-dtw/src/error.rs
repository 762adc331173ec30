//! Error types for DTW computation and time series validation.

/// Errors from DTW distance computation and time series validation.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum DtwError {
    /// Returned when an empty slice is provided as a time series.
    #[error("time series must be non-empty")]
    EmptySeries,

    /// Returned when a time series contains NaN, infinity, or negative infinity.
    #[error("time series contains non-finite value at index {index}")]
    NonFiniteValue {
        /// Position of the first non-finite value found.
        index: usize,
    },

    /// Returned when the two series passed to the kernel differ in length.
    #[error("series lengths differ: left has {left} values, right has {right}")]
    LengthMismatch {
        /// Length of the first series.
        left: usize,
        /// Length of the second series.
        right: usize,
    },

    /// Returned when reusable row buffers were sized for another series length.
    #[error("row buffers hold {got} columns but the series have {expected}")]
    BufferLengthMismatch {
        /// Series length of the current call.
        expected: usize,
        /// Row length the buffers were built with.
        got: usize,
    },
}
