use std::{
    fmt::{Display, Formatter},
    ops::{Add, Div, Mul, Neg, RangeInclusive, Sub},
};

use num_traits::clamp;

use crate::error::{FuzzyError, Result};

/// Closed interval `[lo, hi]` of finite reals.
///
/// Every interval carries its own tolerance `epsilon`, which is used by all the
/// comparisons performed on it (`contains`, `intersects`, `greater_than`).
/// When two intervals are combined, the larger tolerance governs the result.
/// The tolerance is not part of equality: two intervals are equal if their bounds are.
#[derive(Debug, Clone, Copy)]
pub struct Interval {
    lo: f64,
    hi: f64,
    epsilon: f64,
}

impl Interval {
    #[inline]
    pub fn new(lo: f64, hi: f64) -> Result<Self> {
        Self::with_epsilon(lo, hi, 0.0)
    }

    /// Creates `[lo, hi]` with the given tolerance.
    ///
    /// If `lo > hi` but the difference is within `epsilon`, the interval collapses to `[lo, lo]`.
    ///
    /// # Errors
    ///
    /// `FuzzyError::InvalidInterval` if a bound is not finite, the tolerance is negative or
    /// not finite, or `lo` exceeds `hi` by more than the tolerance.
    pub fn with_epsilon(lo: f64, hi: f64, epsilon: f64) -> Result<Self> {
        let invalid = !lo.is_finite()
            || !hi.is_finite()
            || !epsilon.is_finite()
            || epsilon < 0.0
            || lo - hi > epsilon;
        if invalid {
            return Err(FuzzyError::InvalidInterval { lo, hi, epsilon });
        }
        Ok(Self {
            lo,
            hi: hi.max(lo),
            epsilon,
        })
    }

    #[inline]
    pub fn point(x: f64) -> Result<Self> {
        Self::with_epsilon(x, x, 0.0)
    }

    #[inline]
    pub fn point_with_epsilon(x: f64, epsilon: f64) -> Result<Self> {
        Self::with_epsilon(x, x, epsilon)
    }

    #[inline]
    pub fn lo(&self) -> f64 {
        self.lo
    }

    #[inline]
    pub fn hi(&self) -> f64 {
        self.hi
    }

    #[inline]
    pub fn epsilon(&self) -> f64 {
        self.epsilon
    }

    #[inline]
    pub fn width(&self) -> f64 {
        self.hi - self.lo
    }

    #[inline]
    pub fn midpoint(&self) -> f64 {
        self.lo + self.width() / 2.0
    }

    #[inline]
    pub fn is_degenerate(&self) -> bool {
        self.lo == self.hi
    }

    /// Tolerance of a result computed from `self` and `other`.
    #[inline]
    pub(crate) fn joint_epsilon(&self, other: &Self) -> f64 {
        self.epsilon.max(other.epsilon)
    }

    /// Degenerate interval `[x, x]` with the tolerance of `self`.
    #[inline]
    pub(crate) fn scalar_like(&self, x: f64) -> Result<Self> {
        Self::point_with_epsilon(x, self.epsilon)
    }

    #[inline]
    pub fn contains(&self, x: f64) -> bool {
        self.lo - self.epsilon <= x && x <= self.hi + self.epsilon
    }

    /// Whether both bounds of `other` lie in `self`, using the tolerance of `self`.
    #[inline]
    pub fn contains_interval(&self, other: &Self) -> bool {
        self.contains(other.lo) && self.contains(other.hi)
    }

    pub fn intersects(&self, other: &Self) -> bool {
        let epsilon = self.joint_epsilon(other);
        self.lo - epsilon <= other.hi && other.lo - epsilon <= self.hi
    }

    /// Presumption that `self` is greater than `other`, in `[0, 1]`.
    ///
    /// The result is the share of the combined width lying in favor of `self`.
    /// Separated intervals give 0 or 1. When both intervals are degenerate (the combined
    /// width is within the tolerance) and overlap, the result is 0.5.
    /// For all other pairs `x.greater_than(y) + y.greater_than(x) == 1`.
    pub fn greater_than(&self, other: &Self) -> f64 {
        let epsilon = self.joint_epsilon(other);
        if self.hi + epsilon < other.lo {
            return 0.0;
        }
        if self.lo > other.hi + epsilon {
            return 1.0;
        }
        let width = self.width() + other.width();
        if width <= epsilon {
            return 0.5;
        }
        clamp((self.hi - other.lo) / width, 0.0, 1.0)
    }

    #[inline]
    pub fn less_than(&self, other: &Self) -> f64 {
        other.greater_than(self)
    }

    /// Presumption that `self` is greater than the crisp value `x`.
    ///
    /// # Errors
    ///
    /// `FuzzyError::InvalidInterval` if `x` is not finite.
    pub fn greater_than_value(&self, x: f64) -> Result<f64> {
        Ok(self.greater_than(&self.scalar_like(x)?))
    }

    /// Presumption that `self` is less than the crisp value `x`.
    ///
    /// # Errors
    ///
    /// `FuzzyError::InvalidInterval` if `x` is not finite.
    pub fn less_than_value(&self, x: f64) -> Result<f64> {
        Ok(self.less_than(&self.scalar_like(x)?))
    }
}

impl PartialEq for Interval {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.lo == other.lo && self.hi == other.hi
    }
}

impl TryFrom<RangeInclusive<f64>> for Interval {
    type Error = FuzzyError;

    #[inline]
    fn try_from(range: RangeInclusive<f64>) -> Result<Self> {
        Self::new(*range.start(), *range.end())
    }
}

impl Neg for Interval {
    type Output = Self;

    #[inline]
    fn neg(self) -> Self::Output {
        Self {
            lo: -self.hi,
            hi: -self.lo,
            epsilon: self.epsilon,
        }
    }
}

impl Add for Interval {
    type Output = Result<Self>;

    #[inline]
    fn add(self, rhs: Self) -> Self::Output {
        Self::with_epsilon(
            self.lo + rhs.lo,
            self.hi + rhs.hi,
            self.joint_epsilon(&rhs),
        )
    }
}

impl Sub for Interval {
    type Output = Result<Self>;

    #[inline]
    fn sub(self, rhs: Self) -> Self::Output {
        Self::with_epsilon(
            self.lo - rhs.hi,
            self.hi - rhs.lo,
            self.joint_epsilon(&rhs),
        )
    }
}

impl Mul for Interval {
    type Output = Result<Self>;

    fn mul(self, rhs: Self) -> Self::Output {
        // the signs of the bounds are unknown, so any corner can be extremal
        let corners = [
            self.lo * rhs.lo,
            self.lo * rhs.hi,
            self.hi * rhs.lo,
            self.hi * rhs.hi,
        ];
        let lo = corners.iter().copied().fold(f64::INFINITY, f64::min);
        let hi = corners.iter().copied().fold(f64::NEG_INFINITY, f64::max);
        Self::with_epsilon(lo, hi, self.joint_epsilon(&rhs))
    }
}

impl Div for Interval {
    type Output = Result<Self>;

    fn div(self, rhs: Self) -> Self::Output {
        if rhs.contains(0.0) {
            return Err(FuzzyError::DivisionByZero { divisor: rhs });
        }
        let reciprocal = Self::with_epsilon(1.0 / rhs.hi, 1.0 / rhs.lo, rhs.epsilon)?;
        self * reciprocal
    }
}

/// Operators between an interval and a crisp value.
/// The value becomes a degenerate interval with the tolerance of the interval operand.
macro_rules! impl_scalar_op {
    ($($op:ident :: $method:ident),* $(,)?) => {
        $(
            impl $op<f64> for Interval {
                type Output = Result<Interval>;

                #[inline]
                fn $method(self, rhs: f64) -> Self::Output {
                    let rhs = self.scalar_like(rhs)?;
                    $op::$method(self, rhs)
                }
            }

            impl $op<Interval> for f64 {
                type Output = Result<Interval>;

                #[inline]
                fn $method(self, rhs: Interval) -> Self::Output {
                    let lhs = rhs.scalar_like(self)?;
                    $op::$method(lhs, rhs)
                }
            }
        )*
    };
}

impl_scalar_op!(Add::add, Sub::sub, Mul::mul, Div::div);

/// Shortest decimal rendering that round-trips, without a trailing `.0`.
struct Bound(f64);

impl Display for Bound {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let mut buffer = ryu::Buffer::new();
        let text = buffer.format(self.0);
        f.write_str(text.strip_suffix(".0").unwrap_or(text))
    }
}

impl Display for Interval {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}, {}]", Bound(self.lo), Bound(self.hi))
    }
}
