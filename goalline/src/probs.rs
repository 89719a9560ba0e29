//! Utilities for working with probabilities.

pub trait SliceExt {
    fn sum(&self) -> f64;

    /// Treats the slice as a mass function over `0..len` and returns its mean.
    fn expectation(&self) -> f64;
}
impl SliceExt for [f64] {
    fn sum(&self) -> f64 {
        self.iter().sum()
    }

    fn expectation(&self) -> f64 {
        self.iter()
            .enumerate()
            .map(|(index, prob)| index as f64 * prob)
            .sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_float_eq::*;

    #[test]
    fn sum() {
        let data = [0.0, 0.1, 0.2];
        assert_float_absolute_eq!(0.3, data.sum(), f64::EPSILON);
    }

    #[test]
    fn sum_empty() {
        let data: [f64; 0] = [];
        assert_eq!(0.0, data.sum());
    }

    #[test]
    fn expectation() {
        let data = [0.5, 0.25, 0.25];
        assert_float_absolute_eq!(0.75, data.expectation(), f64::EPSILON);
    }
}
