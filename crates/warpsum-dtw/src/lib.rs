//! Squared-cost Dynamic Time Warping distance kernel.
//!
//! Pure math library with no I/O. Computes the cumulative warped squared
//! distance between two equal-length series in O(n) memory by rolling two
//! row buffers over the cost matrix instead of materializing it.

mod buffer;
mod distance;
mod dtw;
mod error;
mod series;

pub use buffer::RowBuffers;
pub use distance::DtwDistance;
pub use dtw::{distance, distance_slices, distance_with_buffers};
pub use error::DtwError;
pub use series::{TimeSeries, TimeSeriesView};
