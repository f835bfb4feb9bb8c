use std::{
    array, fmt,
    mem::{ManuallyDrop, MaybeUninit},
    slice,
};

use crate::{Error, One, Vector, Zero};

mod ops;

/// A 2x2 matrix.
pub type Mat2<T> = Matrix<T, 2, 2>;
/// A 2x2 matrix with [`f32`] elements.
pub type Mat2f = Mat2<f32>;
/// A 2x2 matrix with [`i32`] elements.
pub type Mat2i = Mat2<i32>;
/// A 4x4 matrix.
pub type Mat4<T> = Matrix<T, 4, 4>;
/// A 4x4 matrix with [`f32`] elements.
pub type Mat4f = Mat4<f32>;
/// A 4x4 matrix with [`i32`] elements.
pub type Mat4i = Mat4<i32>;

/// A column-major matrix with `W` columns and `H` rows, storing elements of type `T`.
///
/// # Construction
///
/// There are several ways to create a [`Matrix`]:
///
/// - [`Matrix::from_rows`] and [`Matrix::from_columns`] allow filling a matrix with raw elements,
///   as well as creating them from an array of row or column vectors.
/// - [`Matrix::from_fn`] will create each element by invoking a closure with its row and column.
/// - [`Matrix::splat`] copies one value into every element.
/// - For square matrices (where `W` equals `H`), [`Matrix::from_diagonal`] can be used to create a
///   matrix with a specified diagonal and zero outside of its diagonal.
///
/// Additionally, some associated constants for commonly used matrices are defined:
///
/// - [`Matrix::ZERO`] is a matrix with every element set to 0.
/// - `Matrix::IDENTITY` is a square matrix with 1 on its diagonal and 0 everywhere else, and is a
///   plain value like any other matrix (it never mutates anything in place).
///
/// # Element Access
///
/// [`Matrix`] implements the [`Index`] and [`IndexMut`] traits both for `usize`, which yields a
/// whole column as a [`Vector`], and for tuples of `(usize, usize)`, which yield a single element.
/// The first element of the tuple is the *row* (Y coordinate), the second is the *column* (X
/// coordinate), matching common mathematical notation. Indices are 0-based.
///
/// ```
/// # use gmath::*;
/// let mut mat = Matrix::from_rows([
///     [0, 1]
/// ]);
/// mat[(0, 0)] = 4;
/// assert_eq!(mat[(0, 0)], 4);
/// assert_eq!(mat[(0, 1)], 1);
/// assert_eq!(mat[1], vec1(1));
/// ```
///
/// Indexing out of bounds will result in a panic with [`Error::IndexOutOfRange`] as the message.
/// [`Matrix::get`], [`Matrix::get_mut`], [`Matrix::col`] and [`Matrix::col_mut`] return
/// [`Option`]s instead and can be used for checked indexing:
///
/// ```
/// # use gmath::*;
/// let mut mat = Matrix::from_rows([
///     [0, 1]
/// ]);
/// assert_eq!(mat.get(0, 0), Some(&0));
/// assert_eq!(mat.get(0, 1), Some(&1));
/// assert_eq!(mat.get(0, 2), None);
/// assert_eq!(mat.col(2), None);
/// ```
///
/// Graphics APIs consume matrices as a flat, column-major run of scalars, and
/// [`Matrix::as_slice`] exposes exactly that view (with [`bytemuck`] casts available for whole
/// buffers).
///
/// [`Index`]: std::ops::Index
/// [`IndexMut`]: std::ops::IndexMut
#[derive(Clone, Copy, Hash)]
#[repr(transparent)]
pub struct Matrix<T, const W: usize, const H: usize>([[T; H]; W]);

#[rustfmt::skip]
unsafe impl<T: bytemuck::Zeroable, const W: usize, const H: usize> bytemuck::Zeroable for Matrix<T, W, H> {}
unsafe impl<T: bytemuck::Pod, const W: usize, const H: usize> bytemuck::Pod for Matrix<T, W, H> {}

impl<T, const W: usize, const H: usize> Matrix<T, W, H> {
    /// Creates a new [`Matrix`] in which the elements are wrapped in [`MaybeUninit`].
    const fn new_uninit() -> Matrix<MaybeUninit<T>, W, H> {
        // Safety: `uninit` is a valid value for the `MaybeUninit<T>` elements
        unsafe { MaybeUninit::<Matrix<MaybeUninit<T>, W, H>>::uninit().assume_init() }
    }

    /// Creates a matrix with every element initialized to `elem`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use gmath::*;
    /// let mat = Mat2::splat(7);
    /// assert_eq!(mat, Matrix::from_rows([
    ///     [7, 7],
    ///     [7, 7],
    /// ]));
    /// ```
    #[inline]
    pub fn splat(elem: T) -> Self
    where
        T: Copy,
    {
        Self([[elem; H]; W])
    }

    /// Creates a [`Matrix`] from an array of row vectors.
    ///
    /// # Examples
    ///
    /// ```
    /// # use gmath::*;
    /// let rows = Matrix::from_rows([
    ///     [0, 1],
    ///     [2, 3],
    /// ]);
    /// let columns = Matrix::from_columns([
    ///     [0, 2],
    ///     [1, 3],
    /// ]);
    /// assert_eq!(rows, columns);
    /// ```
    pub fn from_rows<U: Into<Vector<T, W>>>(rows: [U; H]) -> Self {
        Matrix::from_columns(rows).transpose()
    }

    /// Creates a [`Matrix`] from an array of column vectors.
    ///
    /// # Examples
    ///
    /// ```
    /// # use gmath::*;
    /// let rows = Matrix::from_rows([
    ///     [0, 1],
    ///     [2, 3],
    /// ]);
    /// let columns = Matrix::from_columns([
    ///     [0, 2],
    ///     [1, 3],
    /// ]);
    /// assert_eq!(rows, columns);
    /// ```
    pub fn from_columns<U: Into<Vector<T, H>>>(columns: [U; W]) -> Self {
        Self(columns.map(|col| col.into().into_array()))
    }

    /// Creates a [`Matrix`] by invoking a closure with the position (row and column) of each element.
    ///
    /// This mirrors [`array::from_fn`].
    ///
    /// # Examples
    ///
    /// ```
    /// # use gmath::*;
    /// let mat = Matrix::from_fn(|row, col| row * 10 + col);
    /// assert_eq!(mat, Matrix::from_rows([
    ///     [ 0,  1,  2],
    ///     [10, 11, 12],
    /// ]));
    /// ```
    pub fn from_fn<F>(mut cb: F) -> Self
    where
        F: FnMut(usize, usize) -> T,
    {
        Self(array::from_fn(|col| array::from_fn(|row| cb(row, col))))
    }

    /// Applies a closure to each element, returning a new matrix.
    ///
    /// # Examples
    ///
    /// ```
    /// # use gmath::*;
    /// let mat = Matrix::from_rows([
    ///     [0, 1, 2],
    ///     [3, 4, 5],
    /// ]);
    /// let mat = mat.map(|i| i * 2);
    /// assert_eq!(mat, Matrix::from_rows([
    ///     [ 0,  2,  4],
    ///     [ 6,  8, 10],
    /// ]));
    /// ```
    pub fn map<F, U>(self, mut f: F) -> Matrix<U, W, H>
    where
        F: FnMut(T) -> U,
    {
        Matrix(self.0.map(|column| column.map(|v| f(v))))
    }

    /// Swaps the rows and columns of this matrix.
    ///
    /// # Examples
    ///
    /// ```
    /// # use gmath::*;
    /// let mat = Matrix::from_rows([
    ///     [0, 1, 2],
    ///     [3, 4, 5],
    /// ]).transpose();
    /// assert_eq!(mat, Matrix::from_rows([
    ///     [0, 3],
    ///     [1, 4],
    ///     [2, 5],
    /// ]));
    /// ```
    pub fn transpose(self) -> Matrix<T, H, W> {
        let mut out = Matrix::<T, H, W>::new_uninit();
        for (c, column) in self.0.into_iter().enumerate() {
            for (r, elem) in column.into_iter().enumerate() {
                out.0[r][c] = MaybeUninit::new(elem);
            }
        }
        // Safety: the loop above writes to each element.
        unsafe { out.assume_init() }
    }

    /// Returns a reference to the element at `(row, col)`, or [`None`] if out of bounds.
    ///
    /// # Examples
    ///
    /// ```
    /// # use gmath::*;
    /// let mat = Matrix::from_rows([
    ///     [0, 1, 2],
    ///     [3, 4, 5],
    /// ]);
    /// assert_eq!(mat.get(0, 0), Some(&0));
    /// assert_eq!(mat.get(1, 0), Some(&3));
    /// assert_eq!(mat.get(2, 0), None);
    /// ```
    pub fn get(&self, row: usize, col: usize) -> Option<&T> {
        self.0.get(col).and_then(|col| col.get(row))
    }

    /// Returns a mutable reference to the element at `(row, col)`, or [`None`] if out of bounds.
    ///
    /// # Examples
    ///
    /// ```
    /// # use gmath::*;
    /// let mut mat = Matrix::from_rows([
    ///     [0, 1, 2],
    ///     [3, 4, 5],
    /// ]);
    /// if let Some(elem) = mat.get_mut(1, 0) {
    ///     *elem = 999;
    /// }
    /// if let Some(elem) = mat.get_mut(2, 0) {
    ///     *elem = 777;
    /// }
    /// assert_eq!(mat, Matrix::from_rows([
    ///     [0, 1, 2],
    ///     [999, 4, 5],
    /// ]));
    /// ```
    pub fn get_mut(&mut self, row: usize, col: usize) -> Option<&mut T> {
        self.0.get_mut(col).and_then(|col| col.get_mut(row))
    }

    /// Returns a reference to the column at `index`, or [`None`] if out of bounds.
    ///
    /// # Examples
    ///
    /// ```
    /// # use gmath::*;
    /// let mat = Matrix::from_rows([
    ///     [0, 1, 2],
    ///     [3, 4, 5],
    /// ]);
    /// assert_eq!(mat.col(1), Some(&vec2(1, 4)));
    /// assert_eq!(mat.col(3), None);
    /// ```
    pub fn col(&self, index: usize) -> Option<&Vector<T, H>> {
        self.0.get(index).map(Vector::from_array_ref)
    }

    /// Returns a mutable reference to the column at `index`, or [`None`] if out of bounds.
    pub fn col_mut(&mut self, index: usize) -> Option<&mut Vector<T, H>> {
        self.0.get_mut(index).map(Vector::from_array_mut)
    }

    /// Returns all elements of the matrix as a flat, column-major slice.
    ///
    /// This is the layout conventionally expected when uploading a matrix to a graphics API
    /// uniform.
    ///
    /// # Examples
    ///
    /// ```
    /// # use gmath::*;
    /// let mat = Matrix::from_rows([
    ///     [1, 2],
    ///     [3, 4],
    /// ]);
    /// assert_eq!(mat.as_slice(), &[1, 3, 2, 4]);
    /// ```
    pub fn as_slice(&self) -> &[T] {
        // Safety: `[[T; H]; W]` is `W * H` contiguous `T`s.
        unsafe { slice::from_raw_parts(self.0.as_ptr().cast::<T>(), W * H) }
    }

    /// Returns all elements of the matrix as a flat, mutable, column-major slice.
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        // Safety: `[[T; H]; W]` is `W * H` contiguous `T`s.
        unsafe { slice::from_raw_parts_mut(self.0.as_mut_ptr().cast::<T>(), W * H) }
    }

    /// Creates a [`Matrix`] from a flat, column-major slice of its elements.
    ///
    /// Returns [`Error::DimensionMismatch`] unless the slice holds exactly `W * H` elements.
    ///
    /// # Examples
    ///
    /// ```
    /// # use gmath::*;
    /// let mat = Mat2::try_from_slice(&[1, 3, 2, 4]).unwrap();
    /// assert_eq!(mat, Matrix::from_rows([
    ///     [1, 2],
    ///     [3, 4],
    /// ]));
    ///
    /// assert_eq!(
    ///     Mat2::<i32>::try_from_slice(&[1, 3, 2]),
    ///     Err(Error::DimensionMismatch { expected: 4, actual: 3 }),
    /// );
    /// ```
    pub fn try_from_slice(slice: &[T]) -> Result<Self, Error>
    where
        T: Copy,
    {
        if slice.len() != W * H {
            return Err(Error::DimensionMismatch {
                expected: W * H,
                actual: slice.len(),
            });
        }
        Ok(Self::from_fn(|row, col| slice[col * H + row]))
    }

    /// Returns `self`, but with the element at `(row, col)` replaced with `elem`, without dropping
    /// the old element at that position.
    const fn with_leaky_elem(self, row: usize, col: usize, elem: T) -> Self {
        unsafe {
            // Leaks whatever was at `(col,row)` before.
            union UnWrapper<T, const W: usize, const H: usize> {
                wrapped: ManuallyDrop<Matrix<ManuallyDrop<T>, W, H>>,
                unwrapped: ManuallyDrop<Matrix<T, W, H>>,
            }

            let mut wrapped = ManuallyDrop::into_inner(
                UnWrapper {
                    unwrapped: ManuallyDrop::new(self),
                }
                .wrapped,
            );
            wrapped.0[col][row] = ManuallyDrop::new(elem);

            ManuallyDrop::into_inner(
                UnWrapper {
                    wrapped: ManuallyDrop::new(wrapped),
                }
                .unwrapped,
            )
        }
    }
}

impl<T: fmt::Debug, const W: usize, const H: usize> fmt::Debug for Matrix<T, W, H> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        struct FormatRow<'a, T: fmt::Debug, const W: usize, const H: usize>(
            &'a Matrix<T, W, H>,
            usize,
        );
        impl<'a, T: fmt::Debug, const W: usize, const H: usize> fmt::Debug for FormatRow<'a, T, W, H> {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "[")?;
                for col in 0..W {
                    if col != 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{:?}", self.0[(self.1, col)])?;
                }
                write!(f, "]")?;
                Ok(())
            }
        }

        let mut list = f.debug_list();
        for row in 0..H {
            list.entry(&FormatRow(self, row));
        }
        list.finish()
    }
}

impl<T: Zero, const W: usize, const H: usize> Matrix<T, W, H> {
    /// A matrix with every element set to 0.
    pub const ZERO: Self = unsafe {
        // Because `[T::ZERO; N]` requires `T` to be `Copy`, we use this gross hack to duplicate
        // `T::ZERO` without that `Copy` bound.
        let mut mat = Self::new_uninit();
        let mut col = 0;
        while col < W {
            let mut row = 0;
            while row < H {
                mat.0[col][row] = MaybeUninit::new(T::ZERO);
                row += 1;
            }
            col += 1;
        }

        // Safety: the loop above has initialized every element.
        mat.assume_init()
    };
}

impl<T, const W: usize, const H: usize> Matrix<MaybeUninit<T>, W, H> {
    /// Removes the [`MaybeUninit`] wrapper from each matrix element.
    ///
    /// See [`MaybeUninit::assume_init`] for details about the safety invariant the caller needs to
    /// uphold.
    const unsafe fn assume_init(self) -> Matrix<T, W, H> {
        // Safety: `MaybeUninit<T>` and `T` have the same layout.
        union UnWrapper<T, const W: usize, const H: usize> {
            uninit: ManuallyDrop<Matrix<MaybeUninit<T>, W, H>>,
            init: ManuallyDrop<Matrix<T, W, H>>,
        }

        ManuallyDrop::into_inner(
            UnWrapper {
                uninit: ManuallyDrop::new(self),
            }
            .init,
        )
    }
}

impl<T: Zero + One, const N: usize> Matrix<T, N, N> {
    /// The identity matrix.
    ///
    /// The matrix has the value 1 on its diagonal and 0 everywhere else.
    ///
    /// Multiplying any vector or matrix with this matrix returns it unchanged. Like every other
    /// [`Matrix`] value it is immutable; combine it with other matrices instead of "resetting"
    /// anything in place.
    pub const IDENTITY: Self = {
        let mut this = Self::ZERO;
        let mut i = 0;
        while i < N {
            this = this.with_leaky_elem(i, i, T::ONE);
            i += 1;
        }
        this
    };
}

impl<T, const N: usize> Matrix<T, N, N> {
    /// Returns a [`Vector`] holding the diagonal elements of this square matrix.
    ///
    /// *Note*: This method is restricted to square matrices due to limitations in Rust's const
    /// generics.
    ///
    /// # Examples
    ///
    /// ```
    /// # use gmath::*;
    /// let mat = Matrix::from_rows([
    ///     [1, 2],
    ///     [3, 4],
    /// ]);
    /// assert_eq!(mat.into_diagonal(), [1, 4]);
    /// ```
    pub fn into_diagonal(self) -> Vector<T, N>
    where
        T: Copy,
    {
        array::from_fn(|i| self[(i, i)]).into()
    }

    /// Creates a square matrix from its diagonal.
    ///
    /// Elements outside the diagonal will be initialized with zero.
    ///
    /// *Note*: This method is intentionally restricted to square matrices to allow type inference
    /// of the created [`Matrix`]. To create a non-square matrix from its diagonal, use
    /// [`Matrix::from_fn`].
    ///
    /// # Examples
    ///
    /// ```
    /// # use gmath::*;
    /// let diag = Matrix::from_diagonal([1, 2, 3]);
    /// assert_eq!(diag, Matrix::from_rows([
    ///     [1, 0, 0],
    ///     [0, 2, 0],
    ///     [0, 0, 3],
    /// ]));
    /// ```
    pub fn from_diagonal<D: Into<Vector<T, N>>>(diag: D) -> Self
    where
        T: Zero,
    {
        let mut iter = diag.into().into_array().into_iter();
        let mut this = Self::ZERO;
        for i in 0..N {
            this[(i, i)] = iter.next().unwrap();
        }
        this
    }
}

impl<T, const W: usize, const H: usize> Default for Matrix<T, W, H>
where
    T: Default,
{
    fn default() -> Self {
        Self::from_fn(|_, _| T::default())
    }
}

#[cfg(test)]
mod tests {
    use crate::{assert_approx_eq, vec2};

    use super::*;

    fn rng() -> fastrand::Rng {
        fastrand::Rng::with_seed(0x00c0_ffee_c0ff_ee00)
    }

    fn random_mat4(rng: &mut fastrand::Rng) -> Mat4f {
        Matrix::from_fn(|_, _| rng.f32() * 8.0 - 4.0)
    }

    #[test]
    fn from_rows_columns() {
        assert_eq!(
            Matrix::from_rows([[1, 2, 3], [4, 5, 6]]),
            Matrix::from_columns([[1, 4], [2, 5], [3, 6]]),
        );
    }

    #[test]
    fn diagonal() {
        let mat = Matrix::from_diagonal([1, 2]);

        #[rustfmt::skip]
        assert_eq!(mat, Matrix::from_rows([
            [1, 0],
            [0, 2],
        ]));

        assert_eq!(mat.into_diagonal(), [1, 2]);
    }

    #[test]
    fn fmt() {
        let mat = Matrix::from_rows([[0, 1], [2, 3]]);

        // Natural writing order (row-wise) for debug output.
        assert_eq!(format!("{:?}", mat), "[[0, 1], [2, 3]]");

        // `#` modifier prints each row in its own line, but not each individual element.
        assert_eq!(
            format!("{:#?}", mat),
            "
[
    [0, 1],
    [2, 3],
]
"
            .trim()
        );
    }

    #[test]
    fn constants() {
        assert_eq!(format!("{:?}", Mat2f::ZERO), "[[0.0, 0.0], [0.0, 0.0]]");
        assert_eq!(format!("{:?}", Mat2f::IDENTITY), "[[1.0, 0.0], [0.0, 1.0]]");
    }

    #[test]
    fn columns() {
        let mat = Matrix::from_rows([[0, 1], [2, 3]]);
        assert_eq!(mat[0], vec2(0, 2));
        assert_eq!(mat[1], vec2(1, 3));
        assert_eq!(mat.col(1), Some(&vec2(1, 3)));
        assert_eq!(mat.col(2), None);

        let mut mat = mat;
        mat[1] = vec2(10, 30);
        assert_eq!(mat[(0, 1)], 10);
        assert_eq!(mat[(1, 1)], 30);
    }

    #[test]
    #[should_panic(expected = "index 2 out of range for 2 elements")]
    fn column_index_out_of_range() {
        let mat = Matrix::from_rows([[0, 1], [2, 3]]);
        let _ = mat[2];
    }

    #[test]
    #[should_panic(expected = "index 2 out of range for 2 elements")]
    fn element_index_out_of_range() {
        let mat = Matrix::from_rows([[0, 1], [2, 3]]);
        let _ = mat[(2, 0)];
    }

    #[test]
    fn mat_vec_mul() {
        let mat = Matrix::from_rows([[0, 1], [2, 3]]);
        let vec = vec2(4, 5);
        let out = mat * vec;
        assert_eq!(out, [4 * 0 + 5 * 1, 4 * 2 + 5 * 3]);
    }

    #[test]
    fn mat_mat_mul() {
        #[rustfmt::skip]
        let a = Matrix::from_rows([
            [1, 2],
            [3, 4],
            [5, 6],
            [7, 8],
        ]);
        #[rustfmt::skip]
        let b = Matrix::from_rows([
            [9, 10, 11],
            [12, 13, 14],
        ]);
        let c = a * b;
        assert_eq!(c[(0, 1)], a[(0, 0)] * b[(0, 1)] + a[(0, 1)] * b[(1, 1)]);
        assert_eq!(c[(2, 2)], a[(2, 0)] * b[(0, 2)] + a[(2, 1)] * b[(1, 2)]);
    }

    #[test]
    fn identity_is_multiplicative_neutral() {
        let mut rng = rng();
        for _ in 0..50 {
            let m = random_mat4(&mut rng);
            assert_approx_eq!(Mat4f::IDENTITY * m, m);
            assert_approx_eq!(m * Mat4f::IDENTITY, m);
        }

        let v = vec2(4.0, 5.0);
        assert_eq!(Mat2f::IDENTITY * v, v);
    }

    #[test]
    fn transpose_is_an_involution() {
        let mut rng = rng();
        for _ in 0..50 {
            let m = random_mat4(&mut rng);
            assert_eq!(m.transpose().transpose(), m);
        }

        let mat = Matrix::from_rows([[1, 2, 3], [4, 5, 6]]);
        assert_eq!(mat.transpose().transpose(), mat);
    }

    #[test]
    fn add_sub() {
        let a = Matrix::from_rows([[1, 2], [3, 4]]);
        let b = Matrix::from_rows([[10, 20], [30, 40]]);
        assert_eq!(a + b, Matrix::from_rows([[11, 22], [33, 44]]));
        assert_eq!(b - a, Matrix::from_rows([[9, 18], [27, 36]]));
        assert_eq!(a - a, Matrix::ZERO);
    }

    #[test]
    fn scalar_mul() {
        let a = Matrix::from_rows([[1, 2], [3, 4]]);
        assert_eq!(a * 10, Matrix::from_rows([[10, 20], [30, 40]]));
    }

    #[test]
    fn flat_slice_is_column_major() {
        let mat = Matrix::from_rows([[1, 2], [3, 4]]);
        assert_eq!(mat.as_slice(), &[1, 3, 2, 4]);
        assert_eq!(Matrix::try_from_slice(mat.as_slice()), Ok(mat));

        let mat4 = Mat4f::IDENTITY;
        assert_eq!(mat4.as_slice().len(), 16);
        assert_eq!(mat4.as_slice()[0], 1.0);
        assert_eq!(mat4.as_slice()[5], 1.0);
        assert_eq!(mat4.as_slice()[1], 0.0);

        assert_eq!(
            Mat2::<i32>::try_from_slice(&[1, 2, 3]),
            Err(Error::DimensionMismatch {
                expected: 4,
                actual: 3,
            }),
        );
    }
}
