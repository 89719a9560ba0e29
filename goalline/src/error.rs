use thiserror::Error;

use crate::domain::Side;

#[derive(Debug, Error, PartialEq)]
pub enum InvalidInput {
    #[error("{0}")]
    GoalCap(#[from] InvalidGoalCap),

    #[error("{0}")]
    Rate(#[from] InvalidRate),

    #[error("{0}")]
    Handicap(#[from] InvalidHandicap),

    #[error("{0}")]
    MismatchedCaps(#[from] MismatchedCaps),
}

#[derive(Debug, Error, PartialEq)]
#[error("goal cap {cap} outside of 0..={max}")]
pub struct InvalidGoalCap {
    pub cap: i64,
    pub max: u8,
}

#[derive(Debug, Error, PartialEq)]
#[error("expected score rate {rate} for {side:?} must be finite and non-negative")]
pub struct InvalidRate {
    pub side: Side,
    pub rate: f64,
}

#[derive(Debug, Error, PartialEq)]
pub enum InvalidHandicap {
    #[error("empty handicap specification")]
    Empty,

    #[error("handicap '{spec}' has {lines} lines, at most 2 are supported")]
    TooManyLines { spec: String, lines: usize },

    #[error("unparsable handicap line '{token}' in '{spec}'")]
    Unparsable { spec: String, token: String },

    #[error("handicap line {line} in '{spec}' is not finite")]
    NonFinite { spec: String, line: f64 },
}

#[derive(Debug, Error, PartialEq)]
#[error("score distributions capped at {home} and {away} goals cannot be combined")]
pub struct MismatchedCaps {
    pub home: u8,
    pub away: u8,
}

#[derive(Debug, Error, PartialEq)]
pub enum InvalidRecord {
    #[error("row {row}: expected {expected} cells, got {actual}")]
    WrongCellCount {
        row: usize,
        expected: usize,
        actual: usize,
    },

    #[error("row {row}: unparsable rate '{cell}'")]
    UnparsableRate { row: usize, cell: String },
}
