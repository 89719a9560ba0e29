//! Handicap lines applied to the home score before the two sides are compared.
//!
//! A handicap is written as one line (`"0"`, `"-0.5"`, `"+1"`) or as two lines joined by `/`
//! (`"0/-0.5"`). The latter is a quarter handicap: each line is settled independently and the
//! results are averaged with equal weight.

use std::fmt::{Display, Formatter};
use std::str::FromStr;

use crate::error::InvalidHandicap;

pub const MAX_LINES: usize = 2;

const LINE_SEPARATOR: char = '/';

#[derive(Clone, Debug, PartialEq)]
pub struct Handicap {
    lines: Vec<f64>,
}
impl Handicap {
    /// A level handicap; equivalent to comparing raw scores.
    pub fn level() -> Self {
        Self { lines: vec![0.0] }
    }

    pub fn single(line: f64) -> Result<Self, InvalidHandicap> {
        Self::from_lines(vec![line])
    }

    pub fn split(first: f64, second: f64) -> Result<Self, InvalidHandicap> {
        Self::from_lines(vec![first, second])
    }

    fn from_lines(lines: Vec<f64>) -> Result<Self, InvalidHandicap> {
        let handicap = Self { lines };
        if let Some(&line) = handicap.lines.iter().find(|line| !line.is_finite()) {
            return Err(InvalidHandicap::NonFinite {
                spec: handicap.to_string(),
                line,
            });
        }
        Ok(handicap)
    }

    pub fn lines(&self) -> &[f64] {
        &self.lines
    }

    pub fn is_split(&self) -> bool {
        self.lines.len() > 1
    }

    /// The same handicap as seen from the away side.
    pub fn negate(&self) -> Self {
        Self {
            lines: self.lines.iter().map(|line| -line).collect(),
        }
    }
}

impl Default for Handicap {
    fn default() -> Self {
        Self::level()
    }
}

impl FromStr for Handicap {
    type Err = InvalidHandicap;

    fn from_str(spec: &str) -> Result<Self, Self::Err> {
        if spec.trim().is_empty() {
            return Err(InvalidHandicap::Empty);
        }
        let tokens: Vec<_> = spec.split(LINE_SEPARATOR).map(str::trim).collect();
        if tokens.len() > MAX_LINES {
            return Err(InvalidHandicap::TooManyLines {
                spec: spec.to_string(),
                lines: tokens.len(),
            });
        }

        let mut lines = Vec::with_capacity(tokens.len());
        for token in tokens {
            let line = f64::from_str(token).map_err(|_| InvalidHandicap::Unparsable {
                spec: spec.to_string(),
                token: token.to_string(),
            })?;
            if !line.is_finite() {
                return Err(InvalidHandicap::NonFinite {
                    spec: spec.to_string(),
                    line,
                });
            }
            lines.push(line);
        }
        Ok(Self { lines })
    }
}

impl Display for Handicap {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        for (index, line) in self.lines.iter().enumerate() {
            if index > 0 {
                write!(f, "{LINE_SEPARATOR}")?;
            }
            write!(f, "{line}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_single() {
        assert_eq!(&[0.0], Handicap::from_str("0").unwrap().lines());
        assert_eq!(&[-0.5], Handicap::from_str("-0.5").unwrap().lines());
        assert_eq!(&[-0.25], Handicap::from_str("-0.25").unwrap().lines());
        assert_eq!(&[1.0], Handicap::from_str(" +1 ").unwrap().lines());
        assert!(!Handicap::from_str("-0.25").unwrap().is_split());
    }

    #[test]
    fn parse_split() {
        let handicap = Handicap::from_str("0/-0.5").unwrap();
        assert_eq!(&[0.0, -0.5], handicap.lines());
        assert!(handicap.is_split());
        assert_eq!(&[1.0, 1.5], Handicap::from_str("1 / 1.5").unwrap().lines());
    }

    #[test]
    fn parse_empty() {
        assert_eq!(InvalidHandicap::Empty, Handicap::from_str("").unwrap_err());
        assert_eq!(InvalidHandicap::Empty, Handicap::from_str("  ").unwrap_err());
    }

    #[test]
    fn parse_unparsable() {
        assert_eq!(
            "unparsable handicap line 'abc' in '0/abc'",
            Handicap::from_str("0/abc").unwrap_err().to_string()
        );
        assert_eq!(
            "unparsable handicap line '' in '-0.5/'",
            Handicap::from_str("-0.5/").unwrap_err().to_string()
        );
    }

    #[test]
    fn parse_non_finite() {
        assert_eq!(
            "handicap line inf in 'inf' is not finite",
            Handicap::from_str("inf").unwrap_err().to_string()
        );
        assert!(matches!(
            Handicap::from_str("0/NaN"),
            Err(InvalidHandicap::NonFinite { .. })
        ));
    }

    #[test]
    fn parse_too_many_lines() {
        assert_eq!(
            "handicap '0/-0.5/-1' has 3 lines, at most 2 are supported",
            Handicap::from_str("0/-0.5/-1").unwrap_err().to_string()
        );
    }

    #[test]
    fn display_round_trip() {
        for spec in ["0", "-0.5", "0/-0.5", "1.25"] {
            assert_eq!(spec, Handicap::from_str(spec).unwrap().to_string());
        }
    }

    #[test]
    fn negate() {
        let handicap = Handicap::from_str("0/-0.5").unwrap().negate();
        assert_eq!(&[0.0, 0.5], handicap.lines());
    }

    #[test]
    fn constructors() {
        assert_eq!(Handicap::level(), Handicap::default());
        assert_eq!(&[0.0], Handicap::default().lines());
        assert_eq!(&[-1.0], Handicap::single(-1.0).unwrap().lines());
        assert_eq!(&[0.5, 1.0], Handicap::split(0.5, 1.0).unwrap().lines());
        assert!(matches!(
            Handicap::single(f64::NEG_INFINITY),
            Err(InvalidHandicap::NonFinite { .. })
        ));
    }
}
