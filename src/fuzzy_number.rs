use std::{
    fmt::{Display, Formatter},
    ops::{Add, Div, Mul, Neg, Sub},
};

use num_traits::clamp;

use crate::{
    error::{FuzzyError, Result},
    interval::Interval,
};

/// Piecewise-linear fuzzy number given by its alpha-cuts.
///
/// The cut at index 0 is the support (membership 0), the last one is the kernel (membership 1),
/// and the cuts in between are spread evenly over the membership degrees.
/// Every cut is contained in its predecessor.
#[derive(Debug, Clone, PartialEq)]
pub struct FuzzyNumber {
    alpha_cuts: Vec<Interval>,
}

impl FuzzyNumber {
    /// Creates a fuzzy number from its alpha-cuts, ordered from the support to the kernel.
    ///
    /// # Errors
    ///
    /// `FuzzyError::InvalidFuzzyNumber` if there are no cuts or some cut is not contained in
    /// its predecessor. The error lists the indices of all such cuts.
    pub fn new(alpha_cuts: impl IntoIterator<Item = Interval>) -> Result<Self> {
        let alpha_cuts = alpha_cuts.into_iter().collect::<Vec<_>>();
        if alpha_cuts.is_empty() {
            return Err(FuzzyError::InvalidFuzzyNumber {
                offending: Vec::new(),
            });
        }
        let offending = alpha_cuts
            .windows(2)
            .enumerate()
            .filter(|(_, pair)| !pair[0].contains_interval(&pair[1]))
            .map(|(i, _)| i + 1)
            .collect::<Vec<_>>();
        if !offending.is_empty() {
            return Err(FuzzyError::InvalidFuzzyNumber { offending });
        }
        Ok(Self { alpha_cuts })
    }

    /// Fuzzy number whose every cut is the point `[x, x]`.
    pub fn crisp(x: f64, cut_count: usize) -> Result<Self> {
        Self::new(vec![Interval::point(x)?; cut_count])
    }

    #[inline]
    pub fn alpha_cuts(&self) -> &[Interval] {
        &self.alpha_cuts
    }

    #[inline]
    pub fn cut_count(&self) -> usize {
        self.alpha_cuts.len()
    }

    #[inline]
    pub fn support(&self) -> &Interval {
        &self.alpha_cuts[0]
    }

    #[inline]
    pub fn kernel(&self) -> &Interval {
        &self.alpha_cuts[self.alpha_cuts.len() - 1]
    }

    /// Position of the last cut, i.e. the factor turning a membership degree into a cut index.
    #[inline]
    fn last_index(&self) -> f64 {
        (self.alpha_cuts.len() - 1) as f64
    }

    /// Interval of values with at least the given membership degree.
    ///
    /// Between two stored cuts, both bounds are interpolated linearly.
    ///
    /// # Errors
    ///
    /// `FuzzyError::OutOfRange` if `membership` is not in `[0, 1]`.
    pub fn alpha_cut(&self, membership: f64) -> Result<Interval> {
        if !(0.0..=1.0).contains(&membership) {
            return Err(FuzzyError::OutOfRange(membership));
        }
        let position = membership * self.last_index();
        let lower_index = position.floor() as usize;
        let upper_index = position.ceil() as usize;
        if lower_index == upper_index {
            return Ok(self.alpha_cuts[lower_index]);
        }
        let lower = &self.alpha_cuts[lower_index];
        let upper = &self.alpha_cuts[upper_index];
        let t = upper_index as f64 - position;
        let lo = if lower.lo() == upper.lo() {
            lower.lo()
        } else {
            upper.lo() - t * (upper.lo() - lower.lo())
        };
        let hi = if lower.hi() == upper.hi() {
            lower.hi()
        } else {
            upper.hi() + t * (lower.hi() - upper.hi())
        };
        Interval::with_epsilon(lo, hi, lower.joint_epsilon(upper))
    }

    /// Membership degree of `x`, the inverse of `alpha_cut`.
    pub fn membership(&self, x: f64) -> f64 {
        if self.kernel().contains(x) {
            return 1.0;
        }
        if !self.support().contains(x) {
            return 0.0;
        }
        for (i, pair) in self.alpha_cuts.windows(2).enumerate() {
            let (outer, inner) = (&pair[0], &pair[1]);
            if inner.contains(x) {
                continue;
            }
            let (distance, span) = if inner.hi() < x {
                (outer.hi() - x, outer.hi() - inner.hi())
            } else {
                (x - outer.lo(), inner.lo() - outer.lo())
            };
            // coinciding bounds only miss `x` within the tolerance
            let fraction = if span > 0.0 { distance / span } else { 0.0 };
            return clamp((i as f64 + fraction) / self.last_index(), 0.0, 1.0);
        }
        // unreachable for a nested number: the kernel does not contain `x`
        0.0
    }

    fn check_cut_count(&self, other: &Self) -> Result<()> {
        if self.cut_count() == other.cut_count() {
            Ok(())
        } else {
            Err(FuzzyError::CutCountMismatch {
                left: self.cut_count(),
                right: other.cut_count(),
            })
        }
    }

    /// Presumption that `self` is greater than `other`, in `[0, 1]`.
    ///
    /// This is the average of the presumptions of the corresponding alpha-cuts.
    ///
    /// # Errors
    ///
    /// `FuzzyError::CutCountMismatch` if the numbers have different numbers of cuts.
    pub fn greater_than(&self, other: &Self) -> Result<f64> {
        self.check_cut_count(other)?;
        let sum = self
            .alpha_cuts
            .iter()
            .zip(&other.alpha_cuts)
            .map(|(x, y)| x.greater_than(y))
            .sum::<f64>();
        Ok(sum / self.cut_count() as f64)
    }

    #[inline]
    pub fn less_than(&self, other: &Self) -> Result<f64> {
        other.greater_than(self)
    }

    pub fn greater_than_value(&self, x: f64) -> Result<f64> {
        self.greater_than(&Self::crisp(x, self.cut_count())?)
    }

    pub fn less_than_value(&self, x: f64) -> Result<f64> {
        Self::crisp(x, self.cut_count())?.greater_than(self)
    }

    /// Extension principle for a unary interval operation.
    ///
    /// Applies `op` to every alpha-cut and rebuilds the number, so an operation that breaks
    /// the nesting of the cuts is reported as `FuzzyError::InvalidFuzzyNumber`.
    pub fn map(&self, op: impl FnMut(&Interval) -> Result<Interval>) -> Result<Self> {
        let alpha_cuts = self.alpha_cuts.iter().map(op).collect::<Result<Vec<_>>>()?;
        Self::new(alpha_cuts)
    }

    /// Extension principle for a binary interval operation, applied cut by cut.
    ///
    /// # Errors
    ///
    /// `FuzzyError::CutCountMismatch` if the numbers have different numbers of cuts,
    /// any error of `op`, and `FuzzyError::InvalidFuzzyNumber` if the results are not nested.
    pub fn map2(
        &self,
        other: &Self,
        mut op: impl FnMut(&Interval, &Interval) -> Result<Interval>,
    ) -> Result<Self> {
        self.check_cut_count(other)?;
        let alpha_cuts = self
            .alpha_cuts
            .iter()
            .zip(&other.alpha_cuts)
            .map(|(x, y)| op(x, y))
            .collect::<Result<Vec<_>>>()?;
        Self::new(alpha_cuts)
    }
}

impl Display for FuzzyNumber {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "[")?;
        for (i, cut) in self.alpha_cuts.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{cut}")?;
        }
        write!(f, "]")
    }
}

impl Neg for &FuzzyNumber {
    type Output = FuzzyNumber;

    fn neg(self) -> Self::Output {
        // negating every cut keeps the nesting
        FuzzyNumber {
            alpha_cuts: self.alpha_cuts.iter().map(|cut| -*cut).collect(),
        }
    }
}

impl Neg for FuzzyNumber {
    type Output = FuzzyNumber;

    #[inline]
    fn neg(self) -> Self::Output {
        -&self
    }
}

/// Arithmetic operators, all defined by mapping the interval operator over the alpha-cuts.
macro_rules! impl_fuzzy_op {
    ($($op:ident :: $method:ident),* $(,)?) => {
        $(
            impl $op<&FuzzyNumber> for &FuzzyNumber {
                type Output = Result<FuzzyNumber>;

                fn $method(self, rhs: &FuzzyNumber) -> Self::Output {
                    self.map2(rhs, |x, y| $op::$method(*x, *y))
                }
            }

            impl $op<f64> for &FuzzyNumber {
                type Output = Result<FuzzyNumber>;

                fn $method(self, rhs: f64) -> Self::Output {
                    self.map(|x| $op::$method(*x, rhs))
                }
            }

            impl $op<&FuzzyNumber> for f64 {
                type Output = Result<FuzzyNumber>;

                fn $method(self, rhs: &FuzzyNumber) -> Self::Output {
                    rhs.map(|x| $op::$method(self, *x))
                }
            }

            impl $op<FuzzyNumber> for FuzzyNumber {
                type Output = Result<FuzzyNumber>;

                #[inline]
                fn $method(self, rhs: FuzzyNumber) -> Self::Output {
                    $op::$method(&self, &rhs)
                }
            }

            impl $op<&FuzzyNumber> for FuzzyNumber {
                type Output = Result<FuzzyNumber>;

                #[inline]
                fn $method(self, rhs: &FuzzyNumber) -> Self::Output {
                    $op::$method(&self, rhs)
                }
            }

            impl $op<FuzzyNumber> for &FuzzyNumber {
                type Output = Result<FuzzyNumber>;

                #[inline]
                fn $method(self, rhs: FuzzyNumber) -> Self::Output {
                    $op::$method(self, &rhs)
                }
            }

            impl $op<f64> for FuzzyNumber {
                type Output = Result<FuzzyNumber>;

                #[inline]
                fn $method(self, rhs: f64) -> Self::Output {
                    $op::$method(&self, rhs)
                }
            }

            impl $op<FuzzyNumber> for f64 {
                type Output = Result<FuzzyNumber>;

                #[inline]
                fn $method(self, rhs: FuzzyNumber) -> Self::Output {
                    $op::$method(self, &rhs)
                }
            }
        )*
    };
}

impl_fuzzy_op!(Add::add, Sub::sub, Mul::mul, Div::div);
