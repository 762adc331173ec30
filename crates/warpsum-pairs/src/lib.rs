//! All-pairs DTW aggregation.
//!
//! Evaluates the DTW kernel for every unordered pair `(i, j)` with `i <= j`
//! in a collection of equal-length series, self-pairs included, and folds the
//! distances into a single total in enumeration order.

mod config;
mod error;
mod pairs;
mod sum;
mod total;

pub use config::{Execution, PairSumConfig};
pub use error::PairSumError;
pub use pairs::{UpperTrianglePairs, pair_count};
pub use sum::sum_all_pairs;
pub use total::PairTotal;
