use std::fmt;

/// Sum of DTW distances over every evaluated pair.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PairTotal {
    value: f64,
    n_pairs: usize,
}

impl PairTotal {
    pub(crate) fn new(value: f64, n_pairs: usize) -> Self {
        Self { value, n_pairs }
    }

    /// Return the accumulated distance.
    #[must_use]
    pub fn value(self) -> f64 {
        self.value
    }

    /// Return how many pairs contributed to the total.
    #[must_use]
    pub fn n_pairs(self) -> usize {
        self.n_pairs
    }
}

impl fmt::Display for PairTotal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.6} over {} pairs", self.value, self.n_pairs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accessors() {
        let total = PairTotal::new(12.5, 6);
        assert_eq!(total.value(), 12.5);
        assert_eq!(total.n_pairs(), 6);
    }

    #[test]
    fn display_format() {
        assert_eq!(PairTotal::new(1.5, 3).to_string(), "1.500000 over 3 pairs");
    }
}
