//! The joint score grid of two independent score distributions, and the settlement of handicap
//! lines against it.
//!
//! Rows index the home score and columns index the away score, so cell `(i, j)` holds the
//! probability of the match finishing `i`–`j`, with the last row and column standing in for the
//! capped tails.

use crate::distribution::ScoreDistribution;
use crate::domain::{Outcome, OutcomeProbs};
use crate::error::MismatchedCaps;
use crate::handicap::Handicap;
use crate::linear::Matrix;

pub fn from_distributions(
    home: &ScoreDistribution,
    away: &ScoreDistribution,
) -> Result<Matrix, MismatchedCaps> {
    if home.cap() != away.cap() {
        return Err(MismatchedCaps {
            home: home.cap(),
            away: away.cap(),
        });
    }
    Ok(Matrix::outer(home.probs(), away.probs()))
}

/// Settles a single handicap `line` against the grid. The line is added to the home score before
/// it is compared with the away score.
pub fn gather_line(line: f64, scoregrid: &Matrix) -> OutcomeProbs {
    let mut probs = OutcomeProbs::default();
    for home_goals in 0..scoregrid.rows() {
        let adjusted_home_goals = home_goals as f64 + line;
        for away_goals in 0..scoregrid.cols() {
            let away_goals_f64 = away_goals as f64;
            let outcome = if adjusted_home_goals > away_goals_f64 {
                Outcome::HomeWin
            } else if adjusted_home_goals < away_goals_f64 {
                Outcome::AwayWin
            } else {
                Outcome::Draw
            };
            probs[outcome] += scoregrid[(home_goals, away_goals)];
        }
    }
    probs
}

/// Settles every line of the `handicap` against the grid and averages the results.
pub fn gather(handicap: &Handicap, scoregrid: &Matrix) -> OutcomeProbs {
    let mut probs = OutcomeProbs::default();
    for &line in handicap.lines() {
        probs.accumulate(&gather_line(line, scoregrid));
    }
    probs.scale(1.0 / handicap.lines().len() as f64);
    probs
}

/// Combines two score distributions into win/draw/loss probabilities under the given handicap.
pub fn aggregate(
    home: &ScoreDistribution,
    away: &ScoreDistribution,
    handicap: &Handicap,
) -> Result<OutcomeProbs, MismatchedCaps> {
    let scoregrid = from_distributions(home, away)?;
    Ok(gather(handicap, &scoregrid))
}
