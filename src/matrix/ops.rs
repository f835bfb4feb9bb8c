//! Implementations of `std::ops`.

use std::ops::{Add, Index, IndexMut, Mul, Sub};

use crate::{approx::ApproxEq, error::Error, traits::Number, Matrix, Vector};

impl<T, const W: usize, const H: usize> Index<usize> for Matrix<T, W, H> {
    type Output = Vector<T, H>;

    /// # Panics
    ///
    /// Panics with [`Error::IndexOutOfRange`] as the message when `index` is `W` or greater.
    /// [`Matrix::col`] is the non-panicking alternative.
    #[inline]
    fn index(&self, index: usize) -> &Self::Output {
        match self.0.get(index) {
            Some(column) => Vector::from_array_ref(column),
            None => panic!("{}", Error::IndexOutOfRange { index, len: W }),
        }
    }
}

impl<T, const W: usize, const H: usize> IndexMut<usize> for Matrix<T, W, H> {
    #[inline]
    fn index_mut(&mut self, index: usize) -> &mut Self::Output {
        match self.0.get_mut(index) {
            Some(column) => Vector::from_array_mut(column),
            None => panic!("{}", Error::IndexOutOfRange { index, len: W }),
        }
    }
}

impl<T, const W: usize, const H: usize> Index<(usize, usize)> for Matrix<T, W, H> {
    type Output = T;

    /// # Panics
    ///
    /// Panics with [`Error::IndexOutOfRange`] as the message when `row` reaches `H` or `col`
    /// reaches `W`. [`Matrix::get`] is the non-panicking alternative.
    #[inline]
    fn index(&self, (row, col): (usize, usize)) -> &Self::Output {
        if col >= W {
            panic!("{}", Error::IndexOutOfRange { index: col, len: W });
        }
        match self.get(row, col) {
            Some(elem) => elem,
            None => panic!("{}", Error::IndexOutOfRange { index: row, len: H }),
        }
    }
}

impl<T, const W: usize, const H: usize> IndexMut<(usize, usize)> for Matrix<T, W, H> {
    #[inline]
    fn index_mut(&mut self, (row, col): (usize, usize)) -> &mut Self::Output {
        if col >= W {
            panic!("{}", Error::IndexOutOfRange { index: col, len: W });
        }
        match self.get_mut(row, col) {
            Some(elem) => elem,
            None => panic!("{}", Error::IndexOutOfRange { index: row, len: H }),
        }
    }
}

// More general `PartialEq` impl than what the derive generates.
impl<T, U, const W: usize, const H: usize> PartialEq<Matrix<U, W, H>> for Matrix<T, W, H>
where
    T: PartialEq<U>,
{
    fn eq(&self, other: &Matrix<U, W, H>) -> bool {
        self.0.eq(&other.0)
    }
}

impl<T, const W: usize, const H: usize> Eq for Matrix<T, W, H> where T: Eq {}

impl<T, const W: usize, const H: usize> ApproxEq for Matrix<T, W, H>
where
    T: ApproxEq,
{
    type Tolerance = T::Tolerance;

    fn abs_diff_eq(&self, other: &Self, abs_tolerance: Self::Tolerance) -> bool {
        for (a, b) in self.0.iter().zip(&other.0) {
            if !a.abs_diff_eq(b, abs_tolerance) {
                return false;
            }
        }
        true
    }

    fn rel_diff_eq(&self, other: &Self, rel_tolerance: Self::Tolerance) -> bool {
        for (a, b) in self.0.iter().zip(&other.0) {
            if !a.rel_diff_eq(b, rel_tolerance) {
                return false;
            }
        }
        true
    }

    fn ulps_diff_eq(&self, other: &Self, ulps_tolerance: u32) -> bool {
        for (a, b) in self.0.iter().zip(&other.0) {
            if !a.ulps_diff_eq(b, ulps_tolerance) {
                return false;
            }
        }
        true
    }
}

/// Element-wise addition.
impl<T, const W: usize, const H: usize> Add<Matrix<T, W, H>> for Matrix<T, W, H>
where
    T: Number,
{
    type Output = Matrix<T, W, H>;

    fn add(self, rhs: Matrix<T, W, H>) -> Self::Output {
        Matrix::from_fn(|row, col| self[(row, col)] + rhs[(row, col)])
    }
}

/// Element-wise subtraction.
impl<T, const W: usize, const H: usize> Sub<Matrix<T, W, H>> for Matrix<T, W, H>
where
    T: Number,
{
    type Output = Matrix<T, W, H>;

    fn sub(self, rhs: Matrix<T, W, H>) -> Self::Output {
        Matrix::from_fn(|row, col| self[(row, col)] - rhs[(row, col)])
    }
}

/// Matrix * Column Vector.
impl<T, const W: usize, const H: usize> Mul<Vector<T, W>> for Matrix<T, W, H>
where
    T: Number,
{
    type Output = Vector<T, H>;

    fn mul(self, rhs: Vector<T, W>) -> Self::Output {
        Vector::from_fn(|row| (0..W).fold(T::ZERO, |acc, col| acc + self[(row, col)] * rhs[col]))
    }
}

/// Matrix * Matrix.
///
/// When both operands are transforms, `a * b` is the transform that applies `b` first.
impl<T, const H: usize, const N: usize, const P: usize> Mul<Matrix<T, P, N>> for Matrix<T, N, H>
where
    T: Number,
{
    type Output = Matrix<T, P, H>;

    fn mul(self, rhs: Matrix<T, P, N>) -> Self::Output {
        Matrix::from_fn(|i, j| (0..N).fold(T::ZERO, |acc, k| acc + self[(i, k)] * rhs[(k, j)]))
    }
}

/// Matrix * Scalar.
impl<T, const W: usize, const H: usize> Mul<T> for Matrix<T, W, H>
where
    T: Number,
{
    type Output = Matrix<T, W, H>;

    fn mul(self, rhs: T) -> Self::Output {
        self.map(|elem| elem * rhs)
    }
}
