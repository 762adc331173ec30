use warpsum_dtw::DtwError;

/// Errors from all-pairs aggregation.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum PairSumError {
    /// The kernel rejected the pair `(i, j)`, typically because the two
    /// series differ in length. The run is abandoned and no total is produced.
    #[error("DTW failed for pair ({i}, {j})")]
    Dtw {
        /// Index of the first series of the pair.
        i: usize,
        /// Index of the second series of the pair.
        j: usize,
        /// Underlying kernel error.
        #[source]
        source: DtwError,
    },
}
