use crate::factorial::Factorial;

/// Probability of exactly `k` events from a Poisson process with mean `lambda`.
#[inline]
pub fn univariate(k: u8, lambda: f64, factorial: &impl Factorial) -> f64 {
    let power = lambda.powi(k as i32);
    if power.is_finite() {
        power * f64::exp(-lambda) / factorial.get(k) as f64
    } else {
        // λ^k overflows, so λ > 1 and the log form is well-defined
        f64::exp(k as f64 * lambda.ln() - lambda - factorial.ln(k))
    }
}
