//! CSV series reader with input validation.

use std::path::{Path, PathBuf};

use tracing::{debug, info, instrument};
use warpsum_dtw::{DtwError, TimeSeries};

use crate::domain::{ClassLabel, Dataset};
use crate::IoError;

/// Reads a labelled series collection from a CSV file.
///
/// Expected CSV format:
/// - Header row required; its first column names the label, the remaining
///   columns are positional time steps: `class,t0,t1,...,tn`
/// - One row per series, every row with the header's column count
///
/// Since every row matches the header, every loaded series has the same
/// length.
///
/// # Errors
///
/// | Variant | Condition |
/// |---|---|
/// | [`IoError::FileNotFound`] | File doesn't exist or is unreadable |
/// | [`IoError::CsvParse`] | Malformed CSV record |
/// | [`IoError::NoValueColumns`] | Header has only the label column |
/// | [`IoError::EmptyDataset`] | Zero data rows after header |
/// | [`IoError::InconsistentRowLength`] | Row has different column count than header |
/// | [`IoError::NonFiniteValue`] | Cell is NaN, Inf, or unparseable float |
/// | [`IoError::InvalidSeries`] | Row rejected by [`TimeSeries::new`] for any other reason |
pub struct SequenceReader {
    path: PathBuf,
}

impl SequenceReader {
    /// Create a new reader for the given CSV file path.
    pub fn new(path: &Path) -> Self {
        Self {
            path: path.to_path_buf(),
        }
    }

    fn csv_error(&self, e: csv::Error) -> IoError {
        IoError::CsvParse {
            path: self.path.clone(),
            offset: e.position().map_or(0, |p| p.byte()),
            source: e,
        }
    }

    fn parse_value(&self, raw: &str, row_index: usize, col_index: usize) -> Result<f64, IoError> {
        raw.parse::<f64>().map_err(|_| IoError::NonFiniteValue {
            path: self.path.clone(),
            row_index,
            col_index,
            raw: raw.to_string(),
        })
    }

    /// Read and validate the CSV file, returning a [`Dataset`].
    #[instrument(skip(self), fields(path = %self.path.display()))]
    pub fn read(&self) -> Result<Dataset, IoError> {
        let file = std::fs::File::open(&self.path).map_err(|e| IoError::FileNotFound {
            path: self.path.clone(),
            source: e,
        })?;

        // flexible(true) so short or long rows surface as InconsistentRowLength
        // rather than a generic CsvParse error.
        let mut rdr = csv::ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .from_reader(file);

        let expected_cols = rdr.headers().map_err(|e| self.csv_error(e))?.len();
        if expected_cols < 2 {
            return Err(IoError::NoValueColumns {
                path: self.path.clone(),
            });
        }
        debug!(expected_cols, "read CSV header");

        let mut labels = Vec::new();
        let mut series = Vec::new();

        for (row_index, result) in rdr.records().enumerate() {
            let record = result.map_err(|e| self.csv_error(e))?;

            if record.len() != expected_cols {
                return Err(IoError::InconsistentRowLength {
                    path: self.path.clone(),
                    row_index,
                    expected: expected_cols,
                    got: record.len(),
                });
            }

            let mut fields = record.iter();
            let label = fields.next().unwrap_or_default().to_string();
            let values = fields
                .enumerate()
                .map(|(col_index, raw)| self.parse_value(raw, row_index, col_index))
                .collect::<Result<Vec<f64>, IoError>>()?;

            // "NaN" and "inf" parse as f64; the series constructor rejects them.
            let ts = TimeSeries::new(values).map_err(|source| match source {
                DtwError::NonFiniteValue { index } => IoError::NonFiniteValue {
                    path: self.path.clone(),
                    row_index,
                    col_index: index,
                    raw: record.get(index + 1).unwrap_or_default().to_string(),
                },
                source => IoError::InvalidSeries {
                    path: self.path.clone(),
                    row_index,
                    source,
                },
            })?;

            labels.push(ClassLabel::new(label));
            series.push(ts);
        }

        if series.is_empty() {
            return Err(IoError::EmptyDataset {
                path: self.path.clone(),
            });
        }

        info!(
            n_series = series.len(),
            series_len = expected_cols - 1,
            "dataset loaded"
        );

        Ok(Dataset { labels, series })
    }
}
