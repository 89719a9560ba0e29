//! Factorials of small non-negative integers.

/// The largest `n` for which `n!` fits in a `u128`.
pub const MAX_FACTORIAL: u8 = 34;

pub trait Factorial {
    fn get(&self, n: u8) -> u128;

    /// Natural log of `n!`.
    fn ln(&self, n: u8) -> f64 {
        (self.get(n) as f64).ln()
    }
}

/// Computes `n!` on demand by iterated multiplication.
#[derive(Default)]
pub struct Calculator;

impl Factorial for Calculator {
    #[inline]
    fn get(&self, n: u8) -> u128 {
        assert!(n <= MAX_FACTORIAL, "{n}! overflows");
        let mut product = 1u128;
        for i in 2..=n {
            product *= i as u128;
        }
        product
    }
}

const LOOKUP_ENTRIES: usize = MAX_FACTORIAL as usize + 1;

/// A precomputed table of `0!` through `34!`, alongside their logs.
pub struct Lookup {
    entries: [u128; LOOKUP_ENTRIES],
    ln_entries: [f64; LOOKUP_ENTRIES],
}
impl Factorial for Lookup {
    #[inline]
    fn get(&self, n: u8) -> u128 {
        assert!(n <= MAX_FACTORIAL, "{n}! overflows");
        self.entries[n as usize]
    }

    #[inline]
    fn ln(&self, n: u8) -> f64 {
        assert!(n <= MAX_FACTORIAL, "{n}! overflows");
        self.ln_entries[n as usize]
    }
}

impl Default for Lookup {
    fn default() -> Self {
        let mut entries = [1u128; LOOKUP_ENTRIES];
        let mut ln_entries = [0.0; LOOKUP_ENTRIES];
        for i in 2..LOOKUP_ENTRIES {
            entries[i] = i as u128 * entries[i - 1];
            ln_entries[i] = ln_entries[i - 1] + (i as f64).ln();
        }
        Self {
            entries,
            ln_entries,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    pub fn calculator() {
        test_impl(Calculator);
    }

    #[test]
    pub fn lookup() {
        test_impl(Lookup::default());
    }

    #[test]
    pub fn lookup_agrees_with_calculator() {
        let lookup = Lookup::default();
        for n in 0..=MAX_FACTORIAL {
            assert_eq!(Calculator.get(n), lookup.get(n), "mismatch at {n}!");
        }
    }

    #[test]
    pub fn ln_lookup_agrees_with_calculator() {
        let lookup = Lookup::default();
        assert_eq!(0.0, lookup.ln(0));
        assert_eq!(0.0, lookup.ln(1));
        for n in 0..=MAX_FACTORIAL {
            let expected = Calculator.ln(n);
            assert!(
                (expected - lookup.ln(n)).abs() <= 1e-12 * expected.max(1.0),
                "mismatch at ln({n}!): {expected} vs {}",
                lookup.ln(n)
            );
        }
    }

    #[test]
    #[should_panic = "35! overflows"]
    pub fn lookup_overflow_panics() {
        Lookup::default().get(MAX_FACTORIAL + 1);
    }

    fn test_impl(f: impl Factorial) {
        assert_eq!(1, f.get(0));
        assert_eq!(1, f.get(1));
        assert_eq!(2, f.get(2));
        assert_eq!(6, f.get(3));
        assert_eq!(24, f.get(4));
        assert_eq!(3_628_800, f.get(10));
        assert_eq!(295_232_799_039_604_140_847_618_609_643_520_000_000, f.get(34));
    }
}
