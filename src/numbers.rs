use crate::{fuzzy_number::FuzzyNumber, interval::Interval};

const DEFAULT_RELATIVE_TOLERANCE: f64 = 1e-9;
const DEFAULT_ABSOLUTE_TOLERANCE: f64 = 1e-8;

pub trait IsClose {
    /// Check whether two values are close to each other
    ///
    /// Relative tolerance is with respect to the second value because it is usually the expected value.
    fn is_close_with(
        &self,
        other: &Self,
        relative_tolerance: f64,
        absolute_tolerance: f64,
    ) -> bool;

    #[inline]
    fn is_close(&self, other: &Self) -> bool {
        self.is_close_with(
            other,
            DEFAULT_RELATIVE_TOLERANCE,
            DEFAULT_ABSOLUTE_TOLERANCE,
        )
    }
}

impl IsClose for f64 {
    #[inline]
    fn is_close_with(
        &self,
        other: &Self,
        relative_tolerance: f64,
        absolute_tolerance: f64,
    ) -> bool {
        let diff = (self - other).abs();
        diff <= absolute_tolerance || diff <= relative_tolerance * other.abs()
    }
}

impl IsClose for Interval {
    #[inline]
    fn is_close_with(
        &self,
        other: &Self,
        relative_tolerance: f64,
        absolute_tolerance: f64,
    ) -> bool {
        self.lo()
            .is_close_with(&other.lo(), relative_tolerance, absolute_tolerance)
            && self
                .hi()
                .is_close_with(&other.hi(), relative_tolerance, absolute_tolerance)
    }
}

impl IsClose for FuzzyNumber {
    fn is_close_with(
        &self,
        other: &Self,
        relative_tolerance: f64,
        absolute_tolerance: f64,
    ) -> bool {
        self.cut_count() == other.cut_count()
            && find_distant_with(
                self.alpha_cuts(),
                other.alpha_cuts(),
                relative_tolerance,
                absolute_tolerance,
            )
            .is_none()
    }
}

/// Index of the first pair of values that are not close, if any.
pub fn find_distant_with<'a, T: IsClose + 'a>(
    a: impl IntoIterator<Item = &'a T>,
    b: impl IntoIterator<Item = &'a T>,
    relative_tolerance: f64,
    absolute_tolerance: f64,
) -> Option<usize> {
    a.into_iter()
        .zip(b)
        .position(|(a, b)| !a.is_close_with(b, relative_tolerance, absolute_tolerance))
}

#[macro_export]
macro_rules! assert_close {
    ($a:expr, $b:expr $(,)?) => {
        match (&$a, &$b) {
            (left, right) => assert!(
                $crate::numbers::IsClose::is_close(left, right),
                "assertion failed: `is_close(left, right)`\nleft:  {}\nright: {}",
                left,
                right,
            ),
        }
    };
    ($a:expr, $b:expr, $relative_tolerance:expr, $absolute_tolerance:expr $(,)?) => {
        match (&$a, &$b) {
            (left, right) => assert!(
                $crate::numbers::IsClose::is_close_with(left, right, $relative_tolerance, $absolute_tolerance),
                "assertion failed: `is_close(left, right, relative_tol = {}, absolute_tol = {})`\nleft:  {}\nright: {}",
                $relative_tolerance,
                $absolute_tolerance,
                left,
                right,
            ),
        }
    };
}
