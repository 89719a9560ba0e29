//! Win/draw/loss probabilities for a match between two sides, given each side's expected scoring
//! rate and a handicap of one or two lines. Scores are modelled as independent Poisson variates,
//! truncated at a goal cap whose last bucket absorbs the remaining tail mass.

pub mod batch;
pub mod csv;
pub mod display;
pub mod distribution;
pub mod domain;
pub mod engine;
pub mod error;
pub mod factorial;
pub mod handicap;
pub mod linear;
pub mod poisson;
pub mod print;
pub mod probs;
pub mod scoregrid;

#[doc = include_str!("../../README.md")]
#[cfg(doc)]
fn readme() {}
