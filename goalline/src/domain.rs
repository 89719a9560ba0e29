use std::fmt::{Display, Formatter};
use std::ops::{Index, IndexMut};

use ordinalizer::Ordinal;
use serde::{Deserialize, Serialize};
use strum::{EnumCount, IntoEnumIterator};
use strum_macros::{EnumCount, EnumIter};

use crate::error::InvalidGoalCap;
use crate::factorial::MAX_FACTORIAL;

/// Side 1 is `Home`, side 2 is `Away`. Handicap lines are applied to the home score.
#[derive(Clone, Copy, Debug, Hash, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Side {
    Home,
    Away,
}

#[derive(
    Clone, Copy, Debug, Hash, PartialEq, Eq, Ordinal, EnumCount, EnumIter, Serialize, Deserialize,
)]
pub enum Outcome {
    HomeWin,
    Draw,
    AwayWin,
}
impl Outcome {
    /// The same result seen from the other side.
    pub fn flip(&self) -> Outcome {
        match self {
            Outcome::HomeWin => Outcome::AwayWin,
            Outcome::Draw => Outcome::Draw,
            Outcome::AwayWin => Outcome::HomeWin,
        }
    }
}

impl Display for Outcome {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Outcome::HomeWin => write!(f, "Win 1"),
            Outcome::Draw => write!(f, "Draw"),
            Outcome::AwayWin => write!(f, "Win 2"),
        }
    }
}

/// Win/draw/loss probabilities, ordered as (home win, draw, away win).
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OutcomeProbs {
    probs: [f64; Outcome::COUNT],
}
impl OutcomeProbs {
    pub fn new(home_win: f64, draw: f64, away_win: f64) -> Self {
        Self {
            probs: [home_win, draw, away_win],
        }
    }

    pub fn home_win(&self) -> f64 {
        self[Outcome::HomeWin]
    }

    pub fn draw(&self) -> f64 {
        self[Outcome::Draw]
    }

    pub fn away_win(&self) -> f64 {
        self[Outcome::AwayWin]
    }

    pub fn as_slice(&self) -> &[f64] {
        &self.probs
    }

    /// The same probabilities seen from the other side.
    pub fn flip(&self) -> OutcomeProbs {
        let mut flipped = OutcomeProbs::default();
        for outcome in Outcome::iter() {
            flipped[outcome.flip()] = self[outcome];
        }
        flipped
    }

    pub(crate) fn accumulate(&mut self, other: &OutcomeProbs) {
        for (prob, other) in self.probs.iter_mut().zip(other.probs) {
            *prob += other;
        }
    }

    pub(crate) fn scale(&mut self, factor: f64) {
        for prob in &mut self.probs {
            *prob *= factor;
        }
    }

    pub fn to_triple(&self) -> [Option<f64>; Outcome::COUNT] {
        self.probs.map(Some)
    }
}

impl Index<Outcome> for OutcomeProbs {
    type Output = f64;

    fn index(&self, outcome: Outcome) -> &Self::Output {
        &self.probs[outcome.ordinal()]
    }
}

impl IndexMut<Outcome> for OutcomeProbs {
    fn index_mut(&mut self, outcome: Outcome) -> &mut Self::Output {
        &mut self.probs[outcome.ordinal()]
    }
}

/// The nullable external shape of a computation: all three present, or all three unknown.
pub fn to_nullable_triple(probs: Option<&OutcomeProbs>) -> [Option<f64>; Outcome::COUNT] {
    match probs {
        None => [None; Outcome::COUNT],
        Some(probs) => probs.to_triple(),
    }
}

/// The number of individually modelled score buckets per side. Bucket `cap` absorbs every
/// score of `cap` or more.
#[derive(Clone, Copy, Debug, Hash, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct GoalCap(u8);
impl GoalCap {
    /// One past the largest score whose factorial is tabulated.
    pub const MAX: u8 = MAX_FACTORIAL + 1;

    pub fn new(cap: u8) -> Result<Self, InvalidGoalCap> {
        Self::try_from(cap as i64)
    }

    pub fn get(&self) -> u8 {
        self.0
    }

    /// Length of a distribution under this cap, including the tail bucket.
    pub fn buckets(&self) -> usize {
        self.0 as usize + 1
    }
}

impl TryFrom<i64> for GoalCap {
    type Error = InvalidGoalCap;

    fn try_from(cap: i64) -> Result<Self, Self::Error> {
        if (0..=Self::MAX as i64).contains(&cap) {
            Ok(Self(cap as u8))
        } else {
            Err(InvalidGoalCap { cap, max: Self::MAX })
        }
    }
}

impl Display for GoalCap {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn outcome_probs_index() {
        let probs = OutcomeProbs::new(0.5, 0.3, 0.2);
        assert_eq!(0.5, probs[Outcome::HomeWin]);
        assert_eq!(0.3, probs.draw());
        assert_eq!(0.2, probs.away_win());
        assert_eq!(&[0.5, 0.3, 0.2], probs.as_slice());
    }

    #[test]
    fn outcome_probs_flip() {
        let probs = OutcomeProbs::new(0.5, 0.3, 0.2);
        assert_eq!(OutcomeProbs::new(0.2, 0.3, 0.5), probs.flip());
    }

    #[test]
    fn outcome_probs_serde() {
        let probs = OutcomeProbs::new(0.5, 0.25, 0.25);
        let json = serde_json::to_string(&probs).unwrap();
        assert_eq!("[0.5,0.25,0.25]", json);
        assert_eq!(probs, serde_json::from_str::<OutcomeProbs>(&json).unwrap());
    }

    #[test]
    fn nullable_triple() {
        assert_eq!([None, None, None], to_nullable_triple(None));
        assert_eq!(
            [Some(0.5), Some(0.25), Some(0.25)],
            to_nullable_triple(Some(&OutcomeProbs::new(0.5, 0.25, 0.25)))
        );
    }

    #[test]
    fn goal_cap_bounds() {
        assert_eq!(0, GoalCap::try_from(0).unwrap().get());
        assert_eq!(11, GoalCap::try_from(10).unwrap().buckets());
        assert_eq!(35, GoalCap::try_from(35).unwrap().get());
        assert_eq!(
            InvalidGoalCap { cap: -1, max: 35 },
            GoalCap::try_from(-1).unwrap_err()
        );
        assert_eq!(
            "goal cap 36 outside of 0..=35",
            GoalCap::try_from(36).unwrap_err().to_string()
        );
        assert!(GoalCap::new(u8::MAX).is_err());
    }
}
