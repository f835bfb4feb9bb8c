//! Approximate equality for floating-point values and the compound types built from them.
//!
//! Exact `==` on floats is almost never what a test wants. This module provides the [`ApproxEq`]
//! trait with absolute, relative, and ULPs-based comparison modes, plus the
//! [`assert_approx_eq!`][crate::assert_approx_eq] / [`assert_approx_ne!`][crate::assert_approx_ne]
//! macros that use it. Background reading on why three modes exist:
//! <https://randomascii.wordpress.com/2012/02/25/comparing-floating-point-numbers-2012-edition/>

mod impls;

use std::{fmt, panic::Location};

/// Types that can be compared for *approximate equality*.
///
/// Compound types (slices, arrays, vectors, matrices, quaternions) are approximately equal when
/// all of their elements are.
pub trait ApproxEq<Rhs: ?Sized = Self> {
    /// Tolerance type for the absolute and relative comparison modes.
    ///
    /// This is the underlying scalar of the compared values, in practice [`f32`] or [`f64`].
    type Tolerance: DefaultTolerances + Copy;

    /// Compares `self` and `other` by their *absolute difference*.
    ///
    /// The values are considered equal if `|self - other| <= abs_tolerance`. Best suited for
    /// values near zero, where a relative comparison would demand absurd tolerances.
    fn abs_diff_eq(&self, other: &Rhs, abs_tolerance: Self::Tolerance) -> bool;

    /// Compares `self` and `other` by their difference *relative to the larger magnitude*.
    ///
    /// The values are considered equal if `|self - other| <= max(|self|, |other|) *
    /// rel_tolerance`. A good default away from zero.
    fn rel_diff_eq(&self, other: &Rhs, rel_tolerance: Self::Tolerance) -> bool;

    /// Compares `self` and `other` by the number of representable values between them
    /// ([*units in the last place*]).
    ///
    /// The values are considered equal if at most `ulps_tolerance` representable values separate
    /// them. `NaN` never compares equal to anything; `-0.0` and `+0.0` always compare equal;
    /// values of differing sign otherwise never do.
    ///
    /// [*units in the last place*]: https://en.wikipedia.org/wiki/Unit_in_the_last_place
    fn ulps_diff_eq(&self, other: &Rhs, ulps_tolerance: u32) -> bool;
}

/// Default tolerances used when an assertion does not pick its own.
pub trait DefaultTolerances {
    /// Default tolerance for [`ApproxEq::abs_diff_eq`].
    const DEFAULT_ABS_TOLERANCE: Self;
    /// Default tolerance for [`ApproxEq::rel_diff_eq`].
    const DEFAULT_REL_TOLERANCE: Self;
    /// Default tolerance for [`ApproxEq::ulps_diff_eq`].
    const DEFAULT_ULPS_TOLERANCE: u32;
}

impl DefaultTolerances for f32 {
    const DEFAULT_ABS_TOLERANCE: Self = Self::EPSILON;
    const DEFAULT_REL_TOLERANCE: Self = Self::EPSILON;
    const DEFAULT_ULPS_TOLERANCE: u32 = 4;
}

impl DefaultTolerances for f64 {
    const DEFAULT_ABS_TOLERANCE: Self = Self::EPSILON;
    const DEFAULT_REL_TOLERANCE: Self = Self::EPSILON;
    const DEFAULT_ULPS_TOLERANCE: u32 = 4;
}

/// Deferred assertion returned by [`assert_approx_eq!`][crate::assert_approx_eq] and
/// [`assert_approx_ne!`][crate::assert_approx_ne].
///
/// The comparison runs when this value is dropped, which is what makes the builder-style
/// refinement work: chain any of [`abs`][Self::abs], [`rel`][Self::rel], or [`ulps`][Self::ulps]
/// onto the macro call to pick the comparison modes and tolerances. When several modes are
/// enabled, the values count as equal if *any* enabled mode says so.
///
/// Without refinement, the default is an absolute comparison with
/// [`DEFAULT_ABS_TOLERANCE`][DefaultTolerances::DEFAULT_ABS_TOLERANCE] OR a relative comparison
/// with [`DEFAULT_REL_TOLERANCE`][DefaultTolerances::DEFAULT_REL_TOLERANCE].
pub struct Asserter<'a, T>
where
    T: ApproxEq + fmt::Debug,
{
    left: &'a T,
    right: &'a T,
    /// `true` for `assert_approx_eq!`, `false` for `assert_approx_ne!`.
    expect_eq: bool,
    location: &'static Location<'static>,
    msg: Option<fmt::Arguments<'a>>,
    abs: Option<T::Tolerance>,
    rel: Option<T::Tolerance>,
    ulps: Option<u32>,
}

impl<'a, T> Asserter<'a, T>
where
    T: ApproxEq + fmt::Debug,
{
    #[doc(hidden)]
    #[track_caller]
    pub fn new(
        left: &'a T,
        right: &'a T,
        expect_eq: bool,
        msg: Option<fmt::Arguments<'a>>,
    ) -> Self {
        Self {
            left,
            right,
            expect_eq,
            location: Location::caller(),
            msg,
            abs: None,
            rel: None,
            ulps: None,
        }
    }

    /// Enables an *absolute comparison* with tolerance `abs`.
    ///
    /// See [`ApproxEq::abs_diff_eq`].
    pub fn abs(&mut self, abs: T::Tolerance) -> &mut Self {
        self.abs = Some(abs);
        self
    }

    /// Enables a *relative comparison* with tolerance `rel`.
    ///
    /// See [`ApproxEq::rel_diff_eq`]. Note that near zero this mode needs large tolerances: any
    /// nonzero value only compares equal to 0.0 with a relative tolerance of at least 1.0, and
    /// values of opposing sign need at least 2.0.
    pub fn rel(&mut self, rel: T::Tolerance) -> &mut Self {
        self.rel = Some(rel);
        self
    }

    /// Enables a *ULPs comparison* allowing `ulps` representable values between the operands.
    ///
    /// See [`ApproxEq::ulps_diff_eq`]. This mode follows the uneven spacing of floats (dense near
    /// 1.0, sparse near 1000.0) but behaves poorly around zero, where values of opposing sign are
    /// billions of ULPs apart.
    pub fn ulps(&mut self, ulps: u32) -> &mut Self {
        self.ulps = Some(ulps);
        self
    }

    fn passes(&self) -> bool {
        if let Some(abs) = self.abs {
            if T::abs_diff_eq(self.left, self.right, abs) {
                return true;
            }
        }
        if let Some(rel) = self.rel {
            if T::rel_diff_eq(self.left, self.right, rel) {
                return true;
            }
        }
        if let Some(ulps) = self.ulps {
            if T::ulps_diff_eq(self.left, self.right, ulps) {
                return true;
            }
        }

        false
    }
}

impl<'a, T> Drop for Asserter<'a, T>
where
    T: ApproxEq + fmt::Debug,
{
    // `#[track_caller]` does not propagate through `drop_in_place`, so the location captured in
    // `new` is printed manually instead of relying on the panic machinery.
    fn drop(&mut self) {
        if self.abs.is_none() && self.rel.is_none() && self.ulps.is_none() {
            self.abs = Some(T::Tolerance::DEFAULT_ABS_TOLERANCE);
            self.rel = Some(T::Tolerance::DEFAULT_REL_TOLERANCE);
        }

        if self.passes() != self.expect_eq {
            fail(self.left, self.right, self.expect_eq, self.location, self.msg);
        }
    }
}

fn fail(
    left: &dyn fmt::Debug,
    right: &dyn fmt::Debug,
    expect_eq: bool,
    location: &Location<'_>,
    msg: Option<fmt::Arguments<'_>>,
) -> ! {
    let op = if expect_eq { "==" } else { "!=" };
    match msg {
        Some(msg) => panic!(
            r#"assertion `left {op} right` failed at {location}: {msg}
  left: {left:?}
 right: {right:?}"#
        ),
        None => panic!(
            r#"assertion `left {op} right` failed at {location}
  left: {left:?}
 right: {right:?}"#
        ),
    }
}

/// Asserts that two expressions are approximately equal to each other (using [`ApproxEq`]).
///
/// Works like [`assert_eq!`], but compares via [`ApproxEq`] and returns an [`Asserter`] whose
/// methods select the comparison modes and tolerances.
///
/// Also see [`assert_approx_ne!`].
///
/// # Examples
///
/// Default comparison:
///
/// ```
/// # use gmath::*;
/// let one = (0..10).fold(0.0, |acc, _| acc + 0.1);
/// assert_approx_eq!(one, 1.0);
/// ```
///
/// Absolute and relative comparisons with explicit tolerances:
///
/// ```
/// # use gmath::*;
/// assert_approx_eq!(100.0, 99.0).abs(1.0);
/// assert_approx_eq!(100.0, 99.0).rel(0.01);
/// ```
///
/// ULPs comparison, counting the floats that fit between the operands:
///
/// ```
/// # use gmath::*;
/// assert_approx_eq!(1.0, 1.0 + f64::EPSILON).ulps(1);
/// ```
#[macro_export]
macro_rules! assert_approx_eq {
    ($lhs:expr, $rhs:expr $(,)?) => {
        $crate::approx::Asserter::new(&$lhs, &$rhs, true, ::core::option::Option::None)
    };
    ($lhs:expr, $rhs:expr, $($arg:tt)+) => {
        $crate::approx::Asserter::new(
            &$lhs,
            &$rhs,
            true,
            ::core::option::Option::Some(::core::format_args!($($arg)+)),
        )
    };
}

/// Asserts that two expressions are *not* approximately equal to each other (using [`ApproxEq`]).
///
/// Works like [`assert_ne!`], but compares via [`ApproxEq`] and returns an [`Asserter`] whose
/// methods select the comparison modes and tolerances.
///
/// Also see [`assert_approx_eq!`].
///
/// # Examples
///
/// ```
/// # use gmath::*;
/// assert_approx_ne!(100.0, 99.0).abs(0.5);
/// assert_approx_ne!(100.0, 99.0).rel(0.005);
/// assert_approx_ne!(1.0, 1.0 + f64::EPSILON + f64::EPSILON).ulps(1);
/// ```
#[macro_export]
macro_rules! assert_approx_ne {
    ($lhs:expr, $rhs:expr $(,)?) => {
        $crate::approx::Asserter::new(&$lhs, &$rhs, false, ::core::option::Option::None)
    };
    ($lhs:expr, $rhs:expr, $($arg:tt)+) => {
        $crate::approx::Asserter::new(
            &$lhs,
            &$rhs,
            false,
            ::core::option::Option::Some(::core::format_args!($($arg)+)),
        )
    };
}

#[cfg(test)]
mod tests {
    #[test]
    #[should_panic(expected = "assertion `left != right` failed")]
    fn fail_ne() {
        assert_approx_ne!(1.0, 1.0);
    }

    #[test]
    #[should_panic(expected = "assertion `left == right` failed")]
    fn fail_eq() {
        assert_approx_eq!(1.0, 2.0);
    }

    #[test]
    #[should_panic(expected = "off by one")]
    fn assertion_message() {
        assert_approx_eq!(1.0, 2.0, "off by {}", "one");
    }

    #[test]
    fn rel() {
        assert_approx_eq!(1.0, 1.001).rel(0.01);
        assert_approx_eq!(1.0, -1.0).rel(2.0);
        assert_approx_eq!(0.0, 0.00001).rel(1.0);
    }

    #[test]
    fn epsilon() {
        assert_approx_eq!(1.0, 1.0 + f32::EPSILON);
        assert_approx_eq!(1.0, 1.0 + f32::EPSILON).ulps(1);
        assert_approx_ne!(1.0, 1.0 + f32::EPSILON).ulps(0);
    }

    #[test]
    fn negative() {
        assert_approx_ne!(1.0, -1.0);
        assert_approx_ne!(1.0, -1.0).abs(1.0);
        assert_approx_eq!(1.0, -1.0).abs(2.0);
        assert_approx_eq!(-1.0, -1.0).abs(0.0);
        assert_approx_eq!(-1.0, -1.0).rel(0.0);
        assert_approx_eq!(-1.0, -1.0).ulps(0);
    }

    #[test]
    fn nan() {
        assert_approx_ne!(f32::NAN, f32::NAN).abs(0.0);
        assert_approx_ne!(f32::NAN, f32::NAN).rel(0.0);
        assert_approx_ne!(f32::NAN, f32::NAN).ulps(0);
        assert_approx_ne!(f32::NAN, f32::NAN).abs(1.0);
        assert_approx_ne!(f32::NAN, f32::NAN).rel(1.0);
        assert_approx_ne!(f32::NAN, f32::NAN).ulps(100);

        assert_approx_ne!(f32::NAN, 0.0).abs(0.0);
        assert_approx_ne!(f32::NAN, 0.0).rel(0.0);
        assert_approx_ne!(f32::NAN, 0.0).ulps(0);
    }

    #[test]
    fn inf() {
        assert_approx_eq!(f32::INFINITY, f32::INFINITY).abs(0.0);
        assert_approx_eq!(f32::INFINITY, f32::INFINITY).rel(0.0);
        assert_approx_eq!(f32::INFINITY, f32::INFINITY).ulps(0);
        assert_approx_ne!(f32::INFINITY, f32::MAX).abs(10000.0);
        assert_approx_ne!(f32::INFINITY, f32::MAX).rel(10000.0);
        assert_approx_ne!(f32::MAX, f32::INFINITY).abs(10000.0);
        assert_approx_ne!(f32::MAX, f32::INFINITY).rel(10000.0);
        assert_approx_ne!(f32::MAX, f32::INFINITY).ulps(0);
        assert_approx_eq!(f32::MAX, f32::INFINITY).ulps(1);

        assert_approx_eq!(f64::INFINITY, f64::INFINITY).abs(0.0);
        assert_approx_ne!(f64::MAX, f64::INFINITY).ulps(0);
        assert_approx_eq!(f64::MAX, f64::INFINITY).ulps(1);
    }

    #[test]
    fn slices_of_unequal_length_differ() {
        use super::ApproxEq;

        let a = [1.0, 2.0, 3.0];
        let b = [1.0, 2.0];
        assert!(!a[..].abs_diff_eq(&b[..], 1.0));
        assert!(!a[..].rel_diff_eq(&b[..], 1.0));
        assert!(!a[..].ulps_diff_eq(&b[..], 100));
    }
}
