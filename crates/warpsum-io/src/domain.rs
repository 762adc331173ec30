//! Domain types for warpsum-io.

use warpsum_dtw::TimeSeries;

/// Class label read from the first column of a row. Labels may repeat.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ClassLabel(String);

impl ClassLabel {
    pub(crate) fn new(label: String) -> Self {
        Self(label)
    }

    /// Return the label as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for ClassLabel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// A loaded collection. `labels[i]` belongs to `series[i]`; rows keep file
/// order and every series has the same length.
#[derive(Debug)]
pub struct Dataset {
    /// Class labels in file order.
    pub labels: Vec<ClassLabel>,
    /// Series values in file order.
    pub series: Vec<TimeSeries>,
}

impl Dataset {
    /// Return the number of series.
    #[must_use]
    pub fn len(&self) -> usize {
        self.series.len()
    }

    /// Return true if the dataset holds no series. Never true for a dataset
    /// produced by [`SequenceReader`](crate::SequenceReader).
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.series.is_empty()
    }

    /// Return the shared series length, or 0 for an empty dataset.
    #[must_use]
    pub fn series_len(&self) -> usize {
        self.series.first().map_or(0, TimeSeries::len)
    }
}
