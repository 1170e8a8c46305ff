use std::fmt::{Display, Formatter};

use crate::interval::Interval;

#[derive(Clone, Debug, PartialEq)]
pub enum FuzzyError {
    /// Lower bound above the upper one beyond the tolerance, a non-finite bound,
    /// or a negative/non-finite tolerance.
    InvalidInterval { lo: f64, hi: f64, epsilon: f64 },
    DivisionByZero { divisor: Interval },
    DomainError {
        function: &'static str,
        argument: Interval,
    },
    /// Indices of the cuts not contained in their predecessor.
    /// An empty list means there were no cuts at all.
    InvalidFuzzyNumber { offending: Vec<usize> },
    OutOfRange(f64),
    CutCountMismatch { left: usize, right: usize },
}

impl Display for FuzzyError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidInterval { lo, hi, epsilon } => write!(
                f,
                "invalid interval: lower bound {lo}, upper bound {hi}, tolerance {epsilon}"
            ),
            Self::DivisionByZero { divisor } => {
                write!(f, "cannot divide by the interval {divisor} containing zero")
            }
            Self::DomainError { function, argument } => {
                write!(f, "{function} is not defined on the whole interval {argument}")
            }
            Self::InvalidFuzzyNumber { offending } if offending.is_empty() => {
                write!(f, "a fuzzy number needs at least one alpha-cut")
            }
            Self::InvalidFuzzyNumber { offending } => {
                write!(f, "alpha-cuts are not nested at indices {offending:?}")
            }
            Self::OutOfRange(membership) => {
                write!(f, "membership degree {membership} is outside of [0, 1]")
            }
            Self::CutCountMismatch { left, right } => write!(
                f,
                "fuzzy numbers have different numbers of alpha-cuts ({left} and {right})"
            ),
        }
    }
}

impl std::error::Error for FuzzyError {}

pub type Result<T> = std::result::Result<T, FuzzyError>;
