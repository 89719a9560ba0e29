//! Truncated Poisson score distributions.
//!
//! A distribution under goal cap `n` has `n + 1` buckets. Buckets `0..n` hold the Poisson mass of
//! scoring exactly that many goals; bucket `n` holds the remaining mass, i.e., the probability of
//! scoring `n` or more.

use tracing::{debug, warn};

use crate::display::DisplaySlice;
use crate::domain::{GoalCap, Side};
use crate::error::InvalidRate;
use crate::factorial::Factorial;
use crate::poisson;
use crate::probs::SliceExt;

/// Tail deficits at or below this magnitude are rounding noise and are not reported.
pub const TAIL_DEFICIT_TOLERANCE: f64 = 1e-12;

#[derive(Clone, Debug, PartialEq)]
pub struct ScoreDistribution {
    rate: f64,
    probs: Vec<f64>,
    tail_deficit: f64,
}
impl ScoreDistribution {
    /// Builds the distribution of `side`'s score given its expected scoring `rate`.
    pub fn build(
        side: Side,
        rate: f64,
        cap: GoalCap,
        factorial: &impl Factorial,
    ) -> Result<Self, InvalidRate> {
        if !rate.is_finite() || rate < 0.0 {
            return Err(InvalidRate { side, rate });
        }

        let mut probs = Vec::with_capacity(cap.buckets());
        for goals in 0..cap.get() {
            probs.push(poisson::univariate(goals, rate, factorial));
        }
        let tail = 1.0 - probs.sum();
        let tail_deficit = if tail < 0.0 { -tail } else { 0.0 };
        if tail_deficit > TAIL_DEFICIT_TOLERANCE {
            warn!(
                "negative tail mass {tail:e} for {side:?} at rate {rate} and cap {cap}; the cap may be too small for the rate"
            );
        }
        probs.push(f64::max(0.0, tail));
        debug!("{side:?} score distribution: {:.6}", DisplaySlice::from(&*probs));

        Ok(Self {
            rate,
            probs,
            tail_deficit,
        })
    }

    pub fn rate(&self) -> f64 {
        self.rate
    }

    pub fn probs(&self) -> &[f64] {
        &self.probs
    }

    pub fn cap(&self) -> u8 {
        (self.probs.len() - 1) as u8
    }

    /// The amount of negative mass removed from the tail bucket when it was clamped to zero.
    pub fn tail_deficit(&self) -> f64 {
        self.tail_deficit
    }

    /// Mean score, counting the tail bucket as exactly `cap` goals.
    pub fn expectation(&self) -> f64 {
        self.probs.expectation()
    }
}
