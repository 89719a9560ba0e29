//! Float assertions shared by the workspace tests.

use assert_float_eq::*;

/// Asserts that each element of `actual` lies within `epsilon` of its counterpart in `expected`.
pub fn assert_slice_f64_absolute(expected: &[f64], actual: &[f64], epsilon: f64) {
    assert_lengths(expected, actual);
    for (index, &expected) in expected.iter().enumerate() {
        let actual = actual[index];
        if actual != expected {
            assert_float_absolute_eq!(expected, actual, epsilon);
        }
    }
}

pub fn assert_slice_f64_relative(expected: &[f64], actual: &[f64], epsilon: f64) {
    assert_lengths(expected, actual);
    for (index, &expected) in expected.iter().enumerate() {
        let actual = actual[index];
        if actual != expected {
            assert_float_relative_eq!(expected, actual, epsilon);
        }
    }
}

/// Asserts that the elements of `probs` add up to `expected`, give or take `epsilon`.
pub fn assert_sums_to(expected: f64, probs: &[f64], epsilon: f64) {
    let sum: f64 = probs.iter().sum();
    assert!(
        (sum - expected).abs() <= epsilon,
        "sum of {probs:?} is {sum}, expected {expected} ± {epsilon}"
    );
}

fn assert_lengths(expected: &[f64], actual: &[f64]) {
    assert_eq!(
        expected.len(),
        actual.len(),
        "lengths do not match: {} ≠ {}",
        expected.len(),
        actual.len()
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn absolute_within_epsilon() {
        assert_slice_f64_absolute(&[0.1, 0.2], &[0.1000001, 0.1999999], 1e-6);
    }

    #[test]
    #[should_panic = "lengths do not match: 2 ≠ 1"]
    fn mismatched_lengths() {
        assert_slice_f64_relative(&[0.1, 0.2], &[0.1], 1e-6);
    }

    #[test]
    fn sums_to() {
        assert_sums_to(1.0, &[0.25, 0.25, 0.5], 1e-12);
    }

    #[test]
    #[should_panic]
    fn sums_to_outside_epsilon() {
        assert_sums_to(1.0, &[0.25, 0.25, 0.4], 1e-6);
    }
}
