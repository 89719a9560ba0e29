//! Row-by-row pricing of matches read from CSV, with blank cells standing for missing inputs.

use std::str::FromStr;

use strum::EnumCount;

use crate::domain::{to_nullable_triple, Outcome, OutcomeProbs};
use crate::error::InvalidRecord;

pub const INPUT_HEADER: [&str; MatchRecord::CELLS] = ["home_rate", "away_rate", "handicap"];
pub const OUTPUT_HEADER: [&str; Outcome::COUNT] = ["win1", "draw", "win2"];

#[derive(Clone, Debug, PartialEq)]
pub struct MatchRecord {
    pub home_rate: Option<f64>,
    pub away_rate: Option<f64>,
    pub handicap: Option<String>,
}
impl MatchRecord {
    pub const CELLS: usize = 3;

    /// Parses the cells of the `row`th line (1-based, for error reporting).
    pub fn parse(row: usize, cells: &[String]) -> Result<Self, InvalidRecord> {
        if cells.len() != Self::CELLS {
            return Err(InvalidRecord::WrongCellCount {
                row,
                expected: Self::CELLS,
                actual: cells.len(),
            });
        }
        Ok(Self {
            home_rate: parse_rate(row, &cells[0])?,
            away_rate: parse_rate(row, &cells[1])?,
            handicap: non_blank(&cells[2]).map(ToString::to_string),
        })
    }
}

fn non_blank(cell: &str) -> Option<&str> {
    let cell = cell.trim();
    if cell.is_empty() {
        None
    } else {
        Some(cell)
    }
}

fn parse_rate(row: usize, cell: &str) -> Result<Option<f64>, InvalidRecord> {
    non_blank(cell)
        .map(|cell| {
            f64::from_str(cell).map_err(|_| InvalidRecord::UnparsableRate {
                row,
                cell: cell.to_string(),
            })
        })
        .transpose()
}

/// Formats a result row, leaving every cell blank if the probabilities are unknown.
pub fn output_record(probs: Option<&OutcomeProbs>) -> [String; Outcome::COUNT] {
    to_nullable_triple(probs).map(|prob| prob.map(|prob| format!("{prob:.6}")).unwrap_or_default())
}
