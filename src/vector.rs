use std::{array, fmt};

use crate::{Epsilon, Error, MinMax, Number, One, Sqrt, Trig, Zero};

mod ops;
pub(crate) mod view;

/// A 1-dimensional vector.
pub type Vec1<T> = Vector<T, 1>;
/// A 1-dimensional vector with [`f32`] elements.
pub type Vec1f = Vec1<f32>;
/// A 2-dimensional vector.
pub type Vec2<T> = Vector<T, 2>;
/// A 2-dimensional vector with [`f32`] elements.
pub type Vec2f = Vec2<f32>;
/// A 2-dimensional vector with [`i32`] elements.
pub type Vec2i = Vec2<i32>;
/// A 3-dimensional vector.
pub type Vec3<T> = Vector<T, 3>;
/// A 3-dimensional vector with [`f32`] elements.
pub type Vec3f = Vec3<f32>;
/// A 3-dimensional vector with [`i32`] elements.
pub type Vec3i = Vec3<i32>;
/// A 4-dimensional vector.
pub type Vec4<T> = Vector<T, 4>;
/// A 4-dimensional vector with [`f32`] elements.
pub type Vec4f = Vec4<f32>;
/// A 4-dimensional vector with [`i32`] elements.
pub type Vec4i = Vec4<i32>;

/// An `N`-element column vector storing elements of type `T`.
///
/// # Construction
///
/// There is a variety of ways to create a [`Vector`]:
///
/// - The freestanding [`vec1`], [`vec2`], [`vec3`] and [`vec4`] functions directly create vectors
///   from provided values.
/// - [`Vector::splat`] creates a vector by copying the given value into each element.
/// - [`Vector::from_fn`] creates a vector by invoking a closure with the index of each element.
/// - Vectors can be created from arrays using their [`From`] implementation, and fallibly from
///   slices using [`TryFrom`] (which reports [`Error::DimensionMismatch`] on a length mismatch).
/// - The [`Default`] implementation of [`Vector`] initializes each element with its default value.
/// - [`Vector::ZERO`] is a vector containing all-zeroes.
/// - For vectors with up to 4 dimensions, `Vector::X`, `Vector::Y`, `Vector::Z` and `Vector::W`
///   can be used to obtain unit vectors pointing in the given direction.
///
/// # Element Access
///
/// - For vectors with up to 4 dimensions, elements can be accessed as fields `x`, `y`, `z`, or
///   `w`.
/// - The [`Index`] and [`IndexMut`] impls can be used just like on arrays; out-of-range indices
///   panic with [`Error::IndexOutOfRange`] as the message, and [`Vector::get`] /
///   [`Vector::get_mut`] are the checked alternatives.
/// - The [`AsRef`] and [`AsMut`] impls, as well as [`Vector::as_array`], [`Vector::as_slice`],
///   and [`Vector::into_array`], expose the underlying elements.
/// - [`bytemuck::Zeroable`] and [`bytemuck::Pod`] are implemented to allow safe transmutation
///   when the element type `T` also allows this, which is what makes uniform-buffer uploads of
///   these values possible without copying.
///
/// [`Index`]: std::ops::Index
/// [`IndexMut`]: std::ops::IndexMut
#[derive(Clone, Copy, Hash)]
#[repr(transparent)]
pub struct Vector<T, const N: usize>([T; N]);

unsafe impl<T: bytemuck::Zeroable, const N: usize> bytemuck::Zeroable for Vector<T, N> {}
unsafe impl<T: bytemuck::Pod, const N: usize> bytemuck::Pod for Vector<T, N> {}

impl<T: Zero, const N: usize> Vector<T, N> {
    /// A vector with each element initialized to 0.
    ///
    /// This uses [`T::ZERO`][Zero::ZERO] as the value for all elements.
    pub const ZERO: Self = Self([T::ZERO; N]);
}

impl<T: Zero + One> Vector<T, 1> {
    /// A unit vector pointing in the X direction.
    pub const X: Self = Self([T::ONE]);
}

impl<T: Zero + One> Vector<T, 2> {
    /// A unit vector pointing in the X direction.
    pub const X: Self = Self([T::ONE, T::ZERO]);
    /// A unit vector pointing in the Y direction.
    pub const Y: Self = Self([T::ZERO, T::ONE]);
}

impl<T: Zero + One> Vector<T, 3> {
    /// A unit vector pointing in the X direction.
    pub const X: Self = Self([T::ONE, T::ZERO, T::ZERO]);
    /// A unit vector pointing in the Y direction.
    pub const Y: Self = Self([T::ZERO, T::ONE, T::ZERO]);
    /// A unit vector pointing in the Z direction.
    pub const Z: Self = Self([T::ZERO, T::ZERO, T::ONE]);
}

impl<T: Zero + One> Vector<T, 4> {
    /// A unit vector pointing in the X direction.
    pub const X: Self = Self([T::ONE, T::ZERO, T::ZERO, T::ZERO]);
    /// A unit vector pointing in the Y direction.
    pub const Y: Self = Self([T::ZERO, T::ONE, T::ZERO, T::ZERO]);
    /// A unit vector pointing in the Z direction.
    pub const Z: Self = Self([T::ZERO, T::ZERO, T::ONE, T::ZERO]);
    /// A unit vector pointing in the W direction.
    pub const W: Self = Self([T::ZERO, T::ZERO, T::ZERO, T::ONE]);
}

impl<T, const N: usize> Vector<T, N> {
    /// Creates a vector with each element initialized to `elem`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use gmath::*;
    /// let v = Vector::splat(2);
    /// assert_eq!(v, vec3(2, 2, 2));
    /// ```
    #[inline]
    pub fn splat(elem: T) -> Self
    where
        T: Copy,
    {
        Self(array::from_fn(|_| elem))
    }

    /// Creates a vector where each element is initialized by invoking a closure with its index.
    ///
    /// Analogous to [`array::from_fn`].
    ///
    /// # Examples
    ///
    /// ```
    /// # use gmath::*;
    /// let v = Vector::from_fn(|i| i + 100);
    /// assert_eq!(v, vec3(100, 101, 102));
    /// ```
    pub fn from_fn<F>(cb: F) -> Self
    where
        F: FnMut(usize) -> T,
    {
        Self(array::from_fn(cb))
    }

    /// Reinterprets a reference to an array as a reference to a vector.
    ///
    /// # Examples
    ///
    /// ```
    /// # use gmath::*;
    /// let array = [1, 2, 3];
    /// assert_eq!(Vector::from_array_ref(&array), &vec3(1, 2, 3));
    /// ```
    #[inline]
    pub fn from_array_ref(array: &[T; N]) -> &Self {
        // SAFETY: `Vector<T, N>` is `repr(transparent)` over `[T; N]`.
        unsafe { &*(array as *const [T; N] as *const Self) }
    }

    /// Reinterprets a mutable reference to an array as a mutable reference to a vector.
    #[inline]
    pub fn from_array_mut(array: &mut [T; N]) -> &mut Self {
        // SAFETY: `Vector<T, N>` is `repr(transparent)` over `[T; N]`.
        unsafe { &mut *(array as *mut [T; N] as *mut Self) }
    }

    /// Applies a closure to each element, returning a new vector.
    ///
    /// # Examples
    ///
    /// ```
    /// # use gmath::*;
    /// let v = vec3(1, 2, 3).map(|i| i * 10);
    /// assert_eq!(v, vec3(10, 20, 30));
    /// ```
    pub fn map<F, U>(self, f: F) -> Vector<U, N>
    where
        F: FnMut(T) -> U,
    {
        Vector(self.0.map(f))
    }

    /// Merges two [`Vector`]s into one that contains tuples of the original elements.
    ///
    /// # Examples
    ///
    /// ```
    /// # use gmath::*;
    /// let a = vec3(1, 2, 3);
    /// let b = vec3("1", "2", "3");
    /// let v = a.zip(b);
    /// assert_eq!(v, vec3((1, "1"), (2, "2"), (3, "3")));
    /// ```
    pub fn zip<U>(self, other: Vector<U, N>) -> Vector<(T, U), N> {
        let mut iter = self.0.into_iter().zip(other.0);
        Vector::from_fn(|_| iter.next().unwrap())
    }

    /// Returns a reference to the element at `index`, or [`None`] if it is out of range.
    ///
    /// # Examples
    ///
    /// ```
    /// # use gmath::*;
    /// let v = vec2(1, 2);
    /// assert_eq!(v.get(1), Some(&2));
    /// assert_eq!(v.get(2), None);
    /// ```
    #[inline]
    pub fn get(&self, index: usize) -> Option<&T> {
        self.0.get(index)
    }

    /// Returns a mutable reference to the element at `index`, or [`None`] if it is out of range.
    #[inline]
    pub fn get_mut(&mut self, index: usize) -> Option<&mut T> {
        self.0.get_mut(index)
    }

    /// Returns a reference to the underlying elements as an array of length `N`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use gmath::*;
    /// assert_eq!(vec3(1, 2, 3).as_array(), &[1, 2, 3]);
    /// ```
    #[inline]
    pub const fn as_array(&self) -> &[T; N] {
        &self.0
    }

    /// Returns a mutable reference to the underlying elements as an array of length `N`.
    #[inline]
    pub fn as_mut_array(&mut self) -> &mut [T; N] {
        &mut self.0
    }

    /// Returns a reference to the underlying elements as a slice.
    ///
    /// # Examples
    ///
    /// ```
    /// # use gmath::*;
    /// assert_eq!(vec3(1, 2, 3).as_slice(), &[1, 2, 3]);
    /// ```
    #[inline]
    pub const fn as_slice(&self) -> &[T] {
        &self.0
    }

    /// Returns a mutable reference to the underlying elements as a slice.
    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.0
    }

    /// Converts this [`Vector`] into an `N`-element array.
    ///
    /// There is an equivalent [`From`] impl that can also be used, but this method is often
    /// shorter and requires no type annotation.
    ///
    /// # Examples
    ///
    /// ```
    /// # use gmath::*;
    /// assert_eq!(vec3(1, 2, 3).into_array(), [1, 2, 3]);
    /// ```
    #[inline]
    pub fn into_array(self) -> [T; N] {
        self.0
    }

    /// Returns the squared length of this [`Vector`].
    ///
    /// Equal to `self.dot(self)`, and cheaper than [`Vector::length`] when only relative
    /// magnitudes matter.
    ///
    /// # Examples
    ///
    /// ```
    /// # use gmath::*;
    /// assert_eq!(vec2(4, 0).length2(), 16);
    /// ```
    pub fn length2(&self) -> T
    where
        T: Number,
    {
        self.dot(*self)
    }

    /// Returns the length of this [`Vector`] (the Euclidean norm).
    ///
    /// # Examples
    ///
    /// ```
    /// # use gmath::*;
    /// let z = Vec3f::Z;
    /// assert_eq!(z.length(), 1.0);
    /// ```
    pub fn length(&self) -> T
    where
        T: Number + Sqrt,
    {
        self.length2().sqrt()
    }

    /// Divides this vector by its length, resulting in a unit vector.
    ///
    /// Returns [`Error::DegenerateVector`] when the length is zero (or at most the scalar type's
    /// [`Epsilon`] for floating-point elements) instead of producing NaN or infinite components.
    ///
    /// # Examples
    ///
    /// ```
    /// # use gmath::*;
    /// let z = vec3(0.0, 0.0, 4.0).normalize().unwrap();
    /// assert_eq!(z, vec3(0.0, 0.0, 1.0));
    ///
    /// assert_eq!(Vec3f::ZERO.normalize(), Err(Error::DegenerateVector));
    /// ```
    pub fn normalize(self) -> Result<Self, Error>
    where
        T: Number + Sqrt + Epsilon,
    {
        let length = self.length();
        if length <= T::EPSILON {
            return Err(Error::DegenerateVector);
        }
        Ok(self / length)
    }

    /// Computes the dot product between `self` and `other`.
    ///
    /// Geometrically, the dot product provides information about the relative
    /// angle of the two vectors:
    /// - If the dot product is greater than zero, the angle between the vectors
    ///   is less than 90°.
    /// - If the dot product is equal to zero, their angle is exactly 90°.
    /// - If the dot product is negative, the angle is greater than 90°.
    ///
    /// Also see [`Vector::angle_to`] for computing the exact angle between them.
    ///
    /// # Examples
    ///
    /// ```
    /// # use gmath::*;
    /// let a = vec3(1, 3, -5);
    /// let b = vec3(4, -2, -1);
    /// assert_eq!(a.dot(b), 3);
    /// ```
    ///
    /// ```
    /// # use gmath::*;
    /// assert_approx_eq!(Vec2f::Y.dot(Vec2f::X), 0.0);
    /// assert_approx_eq!(Vec2f::Y.dot(Vec2f::Y), 1.0);
    /// assert_approx_eq!(Vec2f::Y.dot(-Vec2f::Y), -1.0);
    /// ```
    pub fn dot(self, other: Self) -> T
    where
        T: Number,
    {
        self.into_array()
            .into_iter()
            .zip(other.into_array())
            .fold(T::ZERO, |acc, (a, b)| acc + a * b)
    }

    /// Returns the distance between the points described by `self` and `other`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use gmath::*;
    /// let a = vec3(0.0, 0.0, 0.0);
    /// let b = vec3(3.0, 4.0, 0.0);
    /// assert_approx_eq!(a.distance_to(b), 5.0);
    /// assert_approx_eq!(b.distance_to(a), 5.0);
    /// ```
    pub fn distance_to(self, other: Self) -> T
    where
        T: Number + Sqrt,
    {
        (self - other).length()
    }

    /// Computes the smallest positive angle between `self` and `other`, in radians.
    ///
    /// Both vectors are normalized first, so either operand having (near-)zero length reports
    /// [`Error::DegenerateVector`]. The cosine is clamped to `[-1, 1]` before the inverse cosine,
    /// so floating-point overshoot on (anti-)parallel operands cannot produce NaN.
    ///
    /// # Examples
    ///
    /// ```
    /// # use gmath::*;
    /// use std::f32::consts::TAU;
    ///
    /// let a = Vec3f::Y;
    /// let b = Vec3f::X;
    /// assert_approx_eq!(a.angle_to(b).unwrap(), TAU / 4.0);  // quarter turn
    /// assert_approx_eq!(b.angle_to(a).unwrap(), TAU / 4.0);  // quarter turn
    /// assert_approx_eq!(a.angle_to(-a).unwrap(), TAU / 2.0); // half a turn
    /// ```
    pub fn angle_to(self, other: Self) -> Result<T, Error>
    where
        T: Number + Trig + Sqrt + Epsilon + MinMax,
    {
        let cos = self.normalize()?.dot(other.normalize()?);
        Ok(cos.clamp(-T::ONE, T::ONE).acos())
    }
}

impl<T> Vector<T, 1> {
    /// Appends another value to the vector, yielding a vector with 2 dimensions.
    ///
    /// # Examples
    ///
    /// ```
    /// # use gmath::*;
    /// let v = vec1(-1.0).extend(5.0);
    /// assert_eq!(v, vec2(-1.0, 5.0));
    /// ```
    pub fn extend(self, value: T) -> Vector<T, 2> {
        let [x] = self.into_array();
        [x, value].into()
    }
}

impl<T> Vector<T, 2> {
    /// Removes the last element of this vector, yielding a vector with a single element.
    ///
    /// # Examples
    ///
    /// ```
    /// # use gmath::*;
    /// let v = vec2(-1.0, 2.0).truncate();
    /// assert_eq!(v, vec1(-1.0));
    /// ```
    pub fn truncate(self) -> Vector<T, 1> {
        let [x, ..] = self.into_array();
        [x].into()
    }

    /// Appends another value to the vector, yielding a vector with 3 dimensions.
    ///
    /// # Examples
    ///
    /// ```
    /// # use gmath::*;
    /// let v = vec2(-1.0, 2.0).extend(5.0);
    /// assert_eq!(v, vec3(-1.0, 2.0, 5.0));
    /// ```
    pub fn extend(self, value: T) -> Vector<T, 3> {
        let [x, y] = self.into_array();
        [x, y, value].into()
    }
}

impl<T> Vector<T, 3> {
    /// Removes the last element of this vector, yielding a vector with 2 elements.
    ///
    /// # Examples
    ///
    /// ```
    /// # use gmath::*;
    /// let v = vec3(-1.0, 2.0, 3.5).truncate();
    /// assert_eq!(v, vec2(-1.0, 2.0));
    /// ```
    pub fn truncate(self) -> Vector<T, 2> {
        let [x, y, ..] = self.into_array();
        [x, y].into()
    }

    /// Appends another value to the vector, yielding a vector with 4 dimensions.
    ///
    /// This is how 3D points enter homogeneous coordinates: `p.extend(1.0)` for positions,
    /// `v.extend(0.0)` for directions.
    ///
    /// # Examples
    ///
    /// ```
    /// # use gmath::*;
    /// let v = vec3(-1.0, 2.0, 3.5).extend(99.0);
    /// assert_eq!(v, vec4(-1.0, 2.0, 3.5, 99.0));
    /// ```
    pub fn extend(self, value: T) -> Vector<T, 4> {
        let [x, y, z] = self.into_array();
        [x, y, z, value].into()
    }

    /// Computes the cross product of `self` and `other`.
    ///
    /// The result is a vector that is perpendicular to both `self` and `other`. Its direction
    /// depends on the order of the arguments: swapping them will invert the direction of the
    /// resulting vector. Defined for 3-dimensional vectors only.
    ///
    /// # Examples
    ///
    /// ```
    /// # use gmath::*;
    /// let x = Vec3f::X;
    /// let y = Vec3f::Y;
    /// let z = Vec3f::Z;
    /// assert_eq!(x.cross(y), z);
    /// assert_eq!(y.cross(x), -z);
    /// ```
    pub fn cross(self, other: Self) -> Self
    where
        T: Number,
    {
        let [a1, a2, a3] = self.into_array();
        let [b1, b2, b3] = other.into_array();

        #[rustfmt::skip]
        let cross = vec3(
            a2 * b3 - a3 * b2,
            a3 * b1 - a1 * b3,
            a1 * b2 - a2 * b1,
        );
        cross
    }
}

impl<T> Vector<T, 4> {
    /// Removes the last element of this vector, yielding a vector with 3 elements.
    ///
    /// # Examples
    ///
    /// ```
    /// # use gmath::*;
    /// let v = vec4(-1.0, 2.0, 3.5, 1.0).truncate();
    /// assert_eq!(v, vec3(-1.0, 2.0, 3.5));
    /// ```
    pub fn truncate(self) -> Vector<T, 3> {
        let [x, y, z, ..] = self.into_array();
        [x, y, z].into()
    }
}

impl<T, const N: usize> Default for Vector<T, N>
where
    T: Default,
{
    #[inline]
    fn default() -> Self {
        Self::from_fn(|_| T::default())
    }
}

impl<T, const N: usize> From<[T; N]> for Vector<T, N> {
    #[inline]
    fn from(value: [T; N]) -> Self {
        Self(value)
    }
}

impl<T, const N: usize> From<Vector<T, N>> for [T; N] {
    #[inline]
    fn from(value: Vector<T, N>) -> Self {
        value.0
    }
}

impl<T: Copy, const N: usize> TryFrom<&[T]> for Vector<T, N> {
    type Error = Error;

    /// Converts a slice to a vector, failing with [`Error::DimensionMismatch`] unless the slice
    /// holds exactly `N` elements.
    ///
    /// # Examples
    ///
    /// ```
    /// # use gmath::*;
    /// assert_eq!(Vec3f::try_from(&[1.0, 2.0, 3.0][..]), Ok(vec3(1.0, 2.0, 3.0)));
    /// assert_eq!(
    ///     Vec3f::try_from(&[1.0, 2.0][..]),
    ///     Err(Error::DimensionMismatch { expected: 3, actual: 2 }),
    /// );
    /// ```
    fn try_from(slice: &[T]) -> Result<Self, Error> {
        match <[T; N]>::try_from(slice) {
            Ok(array) => Ok(Self(array)),
            Err(_) => Err(Error::DimensionMismatch {
                expected: N,
                actual: slice.len(),
            }),
        }
    }
}

impl<T, const N: usize> fmt::Debug for Vector<T, N>
where
    T: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut tup = f.debug_tuple("");
        for elem in &self.0 {
            tup.field(elem);
        }
        tup.finish()
    }
}

impl<T, const N: usize> fmt::Display for Vector<T, N>
where
    T: fmt::Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        struct DebugViaDisplay<D>(D);
        impl<D: fmt::Display> fmt::Debug for DebugViaDisplay<D> {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                self.0.fmt(f)
            }
        }

        let mut tup = f.debug_tuple("");
        for elem in &self.0 {
            tup.field(&DebugViaDisplay(elem));
        }
        tup.finish()
    }
}

impl<T, const N: usize> AsRef<[T]> for Vector<T, N> {
    #[inline]
    fn as_ref(&self) -> &[T] {
        &self.0
    }
}

impl<T, const N: usize> AsRef<[T; N]> for Vector<T, N> {
    #[inline]
    fn as_ref(&self) -> &[T; N] {
        &self.0
    }
}

impl<T, const N: usize> AsMut<[T]> for Vector<T, N> {
    #[inline]
    fn as_mut(&mut self) -> &mut [T] {
        &mut self.0
    }
}

impl<T, const N: usize> AsMut<[T; N]> for Vector<T, N> {
    #[inline]
    fn as_mut(&mut self) -> &mut [T; N] {
        &mut self.0
    }
}

/// Constructs a [`Vec1`] from its single element.
#[inline]
pub const fn vec1<T>(x: T) -> Vec1<T> {
    Vector([x])
}

/// Constructs a [`Vec2`] from its two elements.
#[inline]
pub const fn vec2<T>(x: T, y: T) -> Vec2<T> {
    Vector([x, y])
}

/// Constructs a [`Vec3`] from its three elements.
#[inline]
pub const fn vec3<T>(x: T, y: T, z: T) -> Vec3<T> {
    Vector([x, y, z])
}

/// Constructs a [`Vec4`] from its four elements.
#[inline]
pub const fn vec4<T>(x: T, y: T, z: T, w: T) -> Vec4<T> {
    Vector([x, y, z, w])
}

#[cfg(test)]
mod tests {
    use std::f32::consts::TAU;

    use crate::assert_approx_eq;

    use super::*;

    fn rng() -> fastrand::Rng {
        fastrand::Rng::with_seed(0x7b7b_5555_1234_9999)
    }

    fn random_vec3(rng: &mut fastrand::Rng) -> Vec3f {
        Vec3f::from_fn(|_| rng.f32() * 8.0 - 4.0)
    }

    #[test]
    fn access() {
        assert_eq!(Vec3f::X.x, 1.0);
        assert_eq!(Vec3f::X[0], 1.0);
        assert_eq!(Vec3f::X[1], 0.0);
        assert_eq!(Vec3f::X[2], 0.0);
        assert_eq!(Vec3f::X.y, 0.0);
        assert_eq!(Vec3f::Y.y, 1.0);
        assert_eq!(Vec3f::Y.z, 0.0);
        assert_eq!(Vec4f::W.w, 1.0);

        let mut v = vec2(0, 1);
        assert_eq!(v.x, 0);
        assert_eq!(v.y, 1);
        v.x = 777;
        assert_eq!(v.x, 777);
        assert_eq!(v[0], 777);
        assert_eq!(v[1], 1);

        assert_eq!(v.get(0), Some(&777));
        assert_eq!(v.get(2), None);
    }

    #[test]
    #[should_panic(expected = "index 3 out of range for 3 elements")]
    fn index_out_of_range() {
        let v = vec3(1, 2, 3);
        let _ = v[3];
    }

    #[test]
    fn fmt() {
        assert_eq!(format!("{}", Vec4f::W), "(0, 0, 0, 1)");
        assert_eq!(format!("{:?}", Vec4f::W), "(0.0, 0.0, 0.0, 1.0)");
    }

    #[test]
    fn dot() {
        assert_eq!(vec3(1, 3, -5).dot(vec3(4, -2, -1)), 3);
        assert_eq!(vec3(1, 3, -5).dot(vec3(1, 3, -5)), 35);

        assert_eq!(Vec2f::X.dot(Vec2f::X), 1.0);
        assert_eq!(Vec2f::Y.dot(Vec2f::Y), 1.0);
        assert_eq!(Vec2f::X.dot(Vec2f::Y), 0.0);
        assert_eq!(Vec2f::Y.dot(Vec2f::X), 0.0);
    }

    #[test]
    fn dot_with_self_is_squared_length() {
        let mut rng = rng();
        for _ in 0..100 {
            let v = random_vec3(&mut rng);
            assert_approx_eq!(v.dot(v), v.length() * v.length()).abs(1e-4);
            assert_eq!(v.dot(v), v.length2());
        }
    }

    #[test]
    fn normalize() {
        assert_eq!(vec3(0.0, 0.0, 4.0).normalize(), Ok(vec3(0.0, 0.0, 1.0)));
        assert_eq!(vec2(-3.0, 0.0).normalize(), Ok(vec2(-1.0, 0.0)));

        let mut rng = rng();
        for _ in 0..100 {
            let v = random_vec3(&mut rng);
            if v.length() > 0.01 {
                assert_approx_eq!(v.normalize().unwrap().length(), 1.0).abs(1e-5);
            }
        }
    }

    #[test]
    fn normalize_zero_is_degenerate() {
        assert_eq!(Vec3f::ZERO.normalize(), Err(Error::DegenerateVector));
        assert_eq!(Vec2f::ZERO.normalize(), Err(Error::DegenerateVector));
        assert_eq!(Vec4::<f64>::ZERO.normalize(), Err(Error::DegenerateVector));

        // Shorter than the f32 epsilon counts as zero as well.
        assert_eq!(
            Vec3f::splat(f32::EPSILON / 8.0).normalize(),
            Err(Error::DegenerateVector),
        );
    }

    #[test]
    fn distance() {
        assert_approx_eq!(vec3(0.0, 0.0, 0.0).distance_to(vec3(3.0, 4.0, 0.0)), 5.0);
        assert_approx_eq!(vec3(3.0, 4.0, 0.0).distance_to(vec3(0.0, 0.0, 0.0)), 5.0);
        assert_approx_eq!(vec2(1.5, -2.0).distance_to(vec2(1.5, -2.0)), 0.0);
    }

    #[test]
    fn angle() {
        assert_approx_eq!(Vec3f::Y.angle_to(Vec3f::X).unwrap(), TAU / 4.0);
        assert_approx_eq!(Vec3f::X.angle_to(Vec3f::Y).unwrap(), TAU / 4.0);

        assert_approx_eq!(Vec3f::Y.angle_to(Vec3f::Y).unwrap(), 0.0);
        assert_approx_eq!(Vec3f::Y.angle_to(-Vec3f::Y).unwrap(), TAU / 2.0);
        assert_approx_eq!(Vec3f::Y.angle_to(-Vec3f::X).unwrap(), TAU / 4.0);

        // Lengths do not matter, only directions do.
        assert_approx_eq!(vec2(0.0, 2.0).angle_to(vec2(-3.0, 0.0)).unwrap(), TAU / 4.0);
        assert_approx_eq!(vec2(1.0, 1.0).angle_to(vec2(1.0, -1.0)).unwrap(), TAU / 4.0);

        assert_eq!(Vec3f::ZERO.angle_to(Vec3f::X), Err(Error::DegenerateVector));
        assert_eq!(Vec3f::X.angle_to(Vec3f::ZERO), Err(Error::DegenerateVector));
    }

    #[test]
    fn angle_clamps_cosine_overshoot() {
        // Normalizing and dotting a vector with itself can land slightly above 1.0; the clamp
        // keeps acos from turning that into NaN.
        let mut rng = rng();
        for _ in 0..100 {
            let v = random_vec3(&mut rng);
            if v.length() > 0.01 {
                let angle = v.angle_to(v).unwrap();
                assert!(angle.is_finite());
                assert_approx_eq!(angle, 0.0).abs(1e-3);

                let opposite = v.angle_to(-v).unwrap();
                assert!(opposite.is_finite());
                assert_approx_eq!(opposite, TAU / 2.0).abs(1e-3);
            }
        }
    }

    #[test]
    fn cross_products_of_axes() {
        assert_eq!(Vec3f::X.cross(Vec3f::Y), Vec3f::Z);
        assert_eq!(Vec3f::Y.cross(Vec3f::X), -Vec3f::Z);
        assert_eq!(Vec3f::Y.cross(Vec3f::Z), Vec3f::X);
        assert_eq!(Vec3f::Z.cross(Vec3f::X), Vec3f::Y);
    }

    #[test]
    fn cross_product_is_orthogonal() {
        let mut rng = rng();
        for _ in 0..100 {
            let a = random_vec3(&mut rng);
            let b = random_vec3(&mut rng);
            let c = a.cross(b);
            assert_approx_eq!(c.dot(a), 0.0).abs(1e-3);
            assert_approx_eq!(c.dot(b), 0.0).abs(1e-3);
        }
    }

    #[test]
    fn extend_truncate() {
        assert_eq!(vec3(1, 2, 3).extend(4), vec4(1, 2, 3, 4));
        assert_eq!(vec4(1, 2, 3, 4).truncate(), vec3(1, 2, 3));
        assert_eq!(vec2(1, 2).extend(3).truncate(), vec2(1, 2));
    }

    #[test]
    fn arithmetic() {
        assert_eq!(vec3(1, 2, 3) + vec3(10, 20, 30), vec3(11, 22, 33));
        assert_eq!(vec3(1, 2, 3) - vec3(10, 20, 30), vec3(-9, -18, -27));
        assert_eq!(vec3(1, 2, 3) * vec3(10, 20, 30), vec3(10, 40, 90));
        assert_eq!(vec3(10, 20, 30) / vec3(10, 2, 3), vec3(1, 10, 10));
        assert_eq!(-vec3(1, -2, 3), vec3(-1, 2, -3));

        assert_eq!(vec3(1, 2, 3) + 10, vec3(11, 12, 13));
        assert_eq!(vec3(1, 2, 3) - 10, vec3(-9, -8, -7));
        assert_eq!(vec3(1, 2, 3) * 10, vec3(10, 20, 30));
        assert_eq!(vec3(10.0, 20.0, 30.0) / 10.0, vec3(1.0, 2.0, 3.0));

        let mut v = vec2(1.0, 2.0);
        v += vec2(0.5, 0.5);
        v -= 1.0;
        v *= 2.0;
        v /= 0.5;
        assert_eq!(v, vec2(2.0, 6.0));
    }

    #[test]
    fn try_from_slice() {
        let elems = [1.0, 2.0, 3.0, 4.0];
        assert_eq!(Vec4f::try_from(&elems[..]), Ok(vec4(1.0, 2.0, 3.0, 4.0)));
        assert_eq!(Vec2f::try_from(&elems[..2]), Ok(vec2(1.0, 2.0)));
        assert_eq!(
            Vec3f::try_from(&elems[..]),
            Err(Error::DimensionMismatch {
                expected: 3,
                actual: 4,
            }),
        );
    }
}
