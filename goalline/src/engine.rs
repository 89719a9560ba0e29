//! Entry point for computing win/draw/loss probabilities from raw, possibly missing, inputs.

use std::str::FromStr;

use strum::EnumCount;
use tracing::debug;

use crate::distribution::ScoreDistribution;
use crate::domain::{to_nullable_triple, GoalCap, Outcome, OutcomeProbs, Side};
use crate::error::InvalidInput;
use crate::factorial::{Factorial, Lookup};
use crate::handicap::Handicap;
use crate::scoregrid;

pub const DEFAULT_GOAL_CAP: u8 = 10;

/// Computes outcome probabilities, holding on to a factorial table between calls.
#[derive(Default)]
pub struct Engine<F: Factorial = Lookup> {
    factorial: F,
}
impl<F: Factorial> Engine<F> {
    pub fn new(factorial: F) -> Self {
        Self { factorial }
    }

    /// Validates and parses the raw inputs. Returns `Ok(None)` if any of the rates or the
    /// handicap is missing, which signals insufficient data rather than a fault. The goal cap
    /// is checked regardless.
    pub fn compute(
        &self,
        home_rate: Option<f64>,
        away_rate: Option<f64>,
        handicap: Option<&str>,
        goal_cap: i64,
    ) -> Result<Option<OutcomeProbs>, InvalidInput> {
        let priced = self.compute_detailed(home_rate, away_rate, handicap, goal_cap)?;
        Ok(priced.map(|priced| priced.probs))
    }

    /// As [`Engine::compute`], but also hands back the score distributions and parsed handicap.
    pub fn compute_detailed(
        &self,
        home_rate: Option<f64>,
        away_rate: Option<f64>,
        handicap: Option<&str>,
        goal_cap: i64,
    ) -> Result<Option<PricedMatch>, InvalidInput> {
        let goal_cap = GoalCap::try_from(goal_cap)?;
        let (Some(home_rate), Some(away_rate), Some(handicap)) = (home_rate, away_rate, handicap)
        else {
            debug!("insufficient data: home_rate={home_rate:?}, away_rate={away_rate:?}, handicap={handicap:?}");
            return Ok(None);
        };
        let handicap = Handicap::from_str(handicap)?;
        self.price_detailed(home_rate, away_rate, handicap, goal_cap).map(Some)
    }

    /// Prices a fully specified match.
    pub fn price(
        &self,
        home_rate: f64,
        away_rate: f64,
        handicap: &Handicap,
        goal_cap: GoalCap,
    ) -> Result<OutcomeProbs, InvalidInput> {
        let home = ScoreDistribution::build(Side::Home, home_rate, goal_cap, &self.factorial)?;
        let away = ScoreDistribution::build(Side::Away, away_rate, goal_cap, &self.factorial)?;
        aggregate(&home, &away, handicap)
    }

    fn price_detailed(
        &self,
        home_rate: f64,
        away_rate: f64,
        handicap: Handicap,
        goal_cap: GoalCap,
    ) -> Result<PricedMatch, InvalidInput> {
        let home = ScoreDistribution::build(Side::Home, home_rate, goal_cap, &self.factorial)?;
        let away = ScoreDistribution::build(Side::Away, away_rate, goal_cap, &self.factorial)?;
        let probs = aggregate(&home, &away, &handicap)?;
        Ok(PricedMatch {
            home,
            away,
            handicap,
            probs,
        })
    }
}

fn aggregate(
    home: &ScoreDistribution,
    away: &ScoreDistribution,
    handicap: &Handicap,
) -> Result<OutcomeProbs, InvalidInput> {
    let probs = scoregrid::aggregate(home, away, handicap)?;
    debug!(
        "rates {}:{}, handicap {handicap}, cap {} => {probs:?}",
        home.rate(),
        away.rate(),
        home.cap()
    );
    Ok(probs)
}

/// The intermediate results of pricing a match.
#[derive(Clone, Debug, PartialEq)]
pub struct PricedMatch {
    pub home: ScoreDistribution,
    pub away: ScoreDistribution,
    pub handicap: Handicap,
    pub probs: OutcomeProbs,
}

/// Computes outcome probabilities with a fresh [`Engine`]. See [`Engine::compute`].
pub fn compute_outcome_probabilities(
    home_rate: Option<f64>,
    away_rate: Option<f64>,
    handicap: Option<&str>,
    goal_cap: i64,
) -> Result<Option<OutcomeProbs>, InvalidInput> {
    Engine::<Lookup>::default().compute(home_rate, away_rate, handicap, goal_cap)
}

/// As [`compute_outcome_probabilities`], but yields the nullable `[win 1, draw, win 2]` triple;
/// all three entries are `None` when an input is missing.
pub fn compute_nullable_triple(
    home_rate: Option<f64>,
    away_rate: Option<f64>,
    handicap: Option<&str>,
    goal_cap: i64,
) -> Result<[Option<f64>; Outcome::COUNT], InvalidInput> {
    let probs = compute_outcome_probabilities(home_rate, away_rate, handicap, goal_cap)?;
    Ok(to_nullable_triple(probs.as_ref()))
}
