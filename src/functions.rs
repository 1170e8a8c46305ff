//! Elementary functions extended to intervals and fuzzy numbers.
//!
//! The interval versions return the tightest interval containing the image of the argument,
//! found by case analysis over monotonicity and periodicity. The fuzzy versions apply the
//! interval versions to every alpha-cut.

use std::f64::consts::{FRAC_PI_2, PI};

use crate::{
    error::{FuzzyError, Result},
    fuzzy_number::FuzzyNumber,
    interval::Interval,
};

pub trait Elementary: Sized {
    fn exp(&self) -> Result<Self>;
    /// Raises every value to the fixed real power `exponent`.
    fn pow(&self, exponent: f64) -> Result<Self>;
    fn sin(&self) -> Result<Self>;
    fn cos(&self) -> Result<Self>;
    /// Fails with `FuzzyError::DomainError` if an asymptote of the tangent lies in the argument.
    fn tan(&self) -> Result<Self>;
    /// Two-argument arctangent of `self` (the ordinate) and `x` (the abscissa).
    fn atan2(&self, x: &Self) -> Result<Self>;
    fn min(&self, other: &Self) -> Result<Self>;
    fn max(&self, other: &Self) -> Result<Self>;
}

/// Range of `sin` or `cos` over `x`.
///
/// The extrema of `f` lie at `phase + k * pi`. The search starts at `x.lo()` rounded down to a
/// multiple of pi plus `phase`, and an extremum found inside `x` is an exact bound.
fn periodic_range(x: &Interval, f: fn(f64) -> f64, phase: f64) -> Result<Interval> {
    let (lo, hi) = (f(x.lo()), f(x.hi()));
    let mut extremum = (x.lo() / PI).floor() * PI + phase;
    if !x.contains(extremum) {
        extremum += PI;
        if !x.contains(extremum) {
            // no extremum inside, so `f` is monotone on `x`
            return Interval::with_epsilon(lo.min(hi), lo.max(hi), x.epsilon());
        }
    }
    let first = f(extremum);
    let second = if x.contains(extremum + PI) {
        f(extremum + PI)
    } else if first > 0.0 {
        lo.min(hi)
    } else {
        lo.max(hi)
    };
    Interval::with_epsilon(first.min(second), first.max(second), x.epsilon())
}

/// `atan2` with values in `(-1.5 pi, 0.5 pi]`, continuous across `y = 0` for `x < 0`.
fn atan2_rotated(y: f64, x: f64) -> f64 {
    if x < 0.0 && y >= 0.0 {
        (y / x).atan() - PI
    } else {
        y.atan2(x)
    }
}

/// Whether `atan2` of these arguments has to use the rotated branch.
fn needs_rotation(y: &Interval, x: &Interval) -> bool {
    y.contains(0.0) && !x.contains(0.0)
}

fn atan2_on_branch(y: &Interval, x: &Interval, rotated: bool) -> Result<Interval> {
    let epsilon = y.joint_epsilon(x);
    if y.contains(0.0) && x.contains(0.0) {
        // every direction is reachable around the origin
        return if rotated {
            Interval::with_epsilon(-1.5 * PI, 0.5 * PI, epsilon)
        } else {
            Interval::with_epsilon(-PI, PI, epsilon)
        };
    }
    let angle: fn(f64, f64) -> f64 = if rotated { atan2_rotated } else { f64::atan2 };
    let corners = [
        angle(y.lo(), x.lo()),
        angle(y.lo(), x.hi()),
        angle(y.hi(), x.hi()),
        angle(y.hi(), x.lo()),
    ];
    let lo = corners.iter().copied().fold(f64::INFINITY, f64::min);
    let hi = corners.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    Interval::with_epsilon(lo, hi, epsilon)
}

impl Elementary for Interval {
    #[inline]
    fn exp(&self) -> Result<Self> {
        Interval::with_epsilon(self.lo().exp(), self.hi().exp(), self.epsilon())
    }

    fn pow(&self, exponent: f64) -> Result<Self> {
        let (a, b) = (self.lo().powf(exponent), self.hi().powf(exponent));
        if a.is_nan() || b.is_nan() {
            return Err(FuzzyError::DomainError {
                function: "pow",
                argument: *self,
            });
        }
        let (mut lo, hi) = if a > b { (b, a) } else { (a, b) };
        // even powers through zero
        if self.contains(0.0) && lo > 0.0 {
            lo = 0.0;
        }
        Interval::with_epsilon(lo, hi, self.epsilon())
    }

    #[inline]
    fn sin(&self) -> Result<Self> {
        periodic_range(self, f64::sin, FRAC_PI_2)
    }

    #[inline]
    fn cos(&self) -> Result<Self> {
        periodic_range(self, f64::cos, 0.0)
    }

    fn tan(&self) -> Result<Self> {
        if self.cos()?.contains(0.0) {
            return Err(FuzzyError::DomainError {
                function: "tan",
                argument: *self,
            });
        }
        Interval::with_epsilon(self.lo().tan(), self.hi().tan(), self.epsilon())
    }

    #[inline]
    fn atan2(&self, x: &Self) -> Result<Self> {
        atan2_on_branch(self, x, needs_rotation(self, x))
    }

    #[inline]
    fn min(&self, other: &Self) -> Result<Self> {
        Interval::with_epsilon(
            self.lo().min(other.lo()),
            self.hi().min(other.hi()),
            self.joint_epsilon(other),
        )
    }

    #[inline]
    fn max(&self, other: &Self) -> Result<Self> {
        Interval::with_epsilon(
            self.lo().max(other.lo()),
            self.hi().max(other.hi()),
            self.joint_epsilon(other),
        )
    }
}

impl Elementary for FuzzyNumber {
    fn exp(&self) -> Result<Self> {
        self.map(Interval::exp)
    }

    fn pow(&self, exponent: f64) -> Result<Self> {
        self.map(|x| x.pow(exponent))
    }

    fn sin(&self) -> Result<Self> {
        self.map(Interval::sin)
    }

    fn cos(&self) -> Result<Self> {
        self.map(Interval::cos)
    }

    fn tan(&self) -> Result<Self> {
        self.map(Interval::tan)
    }

    /// The branch is chosen once from the supports, so that all cuts are measured on the same one.
    fn atan2(&self, x: &Self) -> Result<Self> {
        let rotated = needs_rotation(self.support(), x.support());
        self.map2(x, |y_cut, x_cut| atan2_on_branch(y_cut, x_cut, rotated))
    }

    fn min(&self, other: &Self) -> Result<Self> {
        self.map2(other, Interval::min)
    }

    fn max(&self, other: &Self) -> Result<Self> {
        self.map2(other, Interval::max)
    }
}
