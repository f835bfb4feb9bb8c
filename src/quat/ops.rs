//! Implementations of `std::ops`.

use std::ops::{Add, Div, Index, IndexMut, Mul, Neg, Sub};

use crate::{approx::ApproxEq, traits::Number, Quat};

impl<T> Index<usize> for Quat<T> {
    type Output = T;

    /// # Panics
    ///
    /// Panics with [`Error::IndexOutOfRange`](crate::Error::IndexOutOfRange) as the message when
    /// `index` is 4 or greater.
    #[inline]
    fn index(&self, index: usize) -> &Self::Output {
        &self.vec[index]
    }
}

impl<T> IndexMut<usize> for Quat<T> {
    #[inline]
    fn index_mut(&mut self, index: usize) -> &mut Self::Output {
        &mut self.vec[index]
    }
}

// More general impl than what the derive generates.
impl<T, U> PartialEq<Quat<U>> for Quat<T>
where
    T: PartialEq<U>,
{
    fn eq(&self, other: &Quat<U>) -> bool {
        self.vec == other.vec
    }
}

impl<T> Eq for Quat<T> where T: Eq {}

impl<T> ApproxEq for Quat<T>
where
    T: ApproxEq,
{
    type Tolerance = T::Tolerance;

    fn abs_diff_eq(&self, other: &Self, abs_tolerance: Self::Tolerance) -> bool {
        self.vec.abs_diff_eq(&other.vec, abs_tolerance)
    }

    fn rel_diff_eq(&self, other: &Self, rel_tolerance: Self::Tolerance) -> bool {
        self.vec.rel_diff_eq(&other.vec, rel_tolerance)
    }

    fn ulps_diff_eq(&self, other: &Self, ulps_tolerance: u32) -> bool {
        self.vec.ulps_diff_eq(&other.vec, ulps_tolerance)
    }
}

/// The Hamilton product.
///
/// Composes the rotations the operands represent (the right-hand side is applied first). Not
/// commutative.
impl<T> Mul for Quat<T>
where
    T: Number,
{
    type Output = Quat<T>;

    fn mul(self, rhs: Self) -> Self::Output {
        let (qx, qy, qz, qw) = (self.x, self.y, self.z, self.w);
        let (px, py, pz, pw) = (rhs.x, rhs.y, rhs.z, rhs.w);

        #[rustfmt::skip]
        let product = Quat::from_components(
            qw * px + qx * pw + qy * pz - qz * py,
            qw * py + qy * pw + qz * px - qx * pz,
            qw * pz + qz * pw + qx * py - qy * px,
            qw * pw - qx * px - qy * py - qz * pz,
        );
        product
    }
}

/// Quaternion-Scalar multiplication (scaling of every component).
impl<T> Mul<T> for Quat<T>
where
    T: Number,
{
    type Output = Quat<T>;

    fn mul(self, rhs: T) -> Self::Output {
        Quat::from_vec(self.vec * rhs)
    }
}

/// Quaternion-Scalar division (scaling of every component).
impl<T> Div<T> for Quat<T>
where
    T: Number,
{
    type Output = Quat<T>;

    fn div(self, rhs: T) -> Self::Output {
        Quat::from_vec(self.vec / rhs)
    }
}

/// Component-wise addition.
impl<T> Add for Quat<T>
where
    T: Number,
{
    type Output = Quat<T>;

    fn add(self, rhs: Self) -> Self::Output {
        Quat::from_vec(self.vec + rhs.vec)
    }
}

/// Component-wise subtraction.
impl<T> Sub for Quat<T>
where
    T: Number,
{
    type Output = Quat<T>;

    fn sub(self, rhs: Self) -> Self::Output {
        Quat::from_vec(self.vec - rhs.vec)
    }
}

/// Component-wise negation.
impl<T> Neg for Quat<T>
where
    T: Neg<Output = T>,
{
    type Output = Quat<T>;

    fn neg(self) -> Self::Output {
        Quat::from_vec(-self.vec)
    }
}
