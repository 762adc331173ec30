//! CSV loading for labelled, equal-length time series collections.

mod domain;
mod error;
mod reader;

pub use domain::{ClassLabel, Dataset};
pub use error::IoError;
pub use reader::SequenceReader;
