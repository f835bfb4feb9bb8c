mod ops;

use std::{
    fmt, mem,
    ops::{Deref, DerefMut},
};

use crate::{vec4, vector::view::XYZW, Epsilon, Error, Matrix, Number, One, Sqrt, Vector, Zero};

/// A quaternion with [`f32`] components.
pub type Quatf = Quat<f32>;
/// A quaternion with [`i32`] components.
pub type Quati = Quat<i32>;

/// A quaternion consisting of 3 imaginary numbers and a real number.
///
/// Unit-length quaternions ("*versors*") are commonly used to represent rotations in 3D space.
///
/// Quaternions are represented similar to a 4-dimensional vector, with an `x`, `y`, `z` and `w`
/// component: `x`, `y` and `z` are the imaginary parts, `w` is the real part. The components are
/// accessible as fields, and [`Quat::into_vec`] / [`Quat::from_vec`] convert to and from the
/// underlying [`Vector`].
#[derive(Clone, Copy, Hash)]
#[repr(transparent)]
pub struct Quat<T> {
    vec: Vector<T, 4>,
}

unsafe impl<T: bytemuck::Zeroable> bytemuck::Zeroable for Quat<T> {}
unsafe impl<T: bytemuck::Pod> bytemuck::Pod for Quat<T> {}

impl<T: Zero + One> Quat<T> {
    /// The multiplicative identity, `(0, 0, 0, 1)`.
    ///
    /// Multiplying any quaternion with this quaternion returns it unchanged, and as a rotation it
    /// leaves every vector where it was.
    pub const IDENTITY: Self = Self {
        vec: vec4(T::ZERO, T::ZERO, T::ZERO, T::ONE),
    };
}

impl<T> Quat<T> {
    /// Creates a quaternion from a 4-dimensional [`Vector`].
    ///
    /// The `x`, `y`, and `z` coordinates correspond to the `i`, `j`, and `k` imaginary parts, while
    /// the `w` component corresponds to the real number part of the quaternion.
    pub fn from_vec(vec: Vector<T, 4>) -> Self {
        Self { vec }
    }

    pub fn from_components(x: T, y: T, z: T, w: T) -> Self {
        Self {
            vec: [x, y, z, w].into(),
        }
    }

    /// Creates a purely imaginary quaternion (one whose real part is zero).
    ///
    /// # Examples
    ///
    /// ```
    /// # use gmath::*;
    /// let i = Quat::from_imaginary(1, 0, 0);
    /// assert_eq!(i.w, 0);
    /// assert_eq!(i * i, -Quat::IDENTITY);
    /// ```
    pub fn from_imaginary(x: T, y: T, z: T) -> Self
    where
        T: Zero,
    {
        Self::from_components(x, y, z, T::ZERO)
    }

    /// Returns the components of this quaternion as a 4-dimensional [`Vector`].
    #[inline]
    pub fn into_vec(self) -> Vector<T, 4> {
        self.vec
    }

    /// Returns the squared length of this quaternion.
    ///
    /// If the squared length is not equal to one, multiplying a vector with this quaternion will
    /// scale the vector in addition to rotating it. When using quaternions to model rotations, it
    /// is advisable to ensure that quaternions are always of length one.
    pub fn length2(&self) -> T
    where
        T: Number,
    {
        self.vec.length2()
    }

    /// Returns the length of this quaternion.
    ///
    /// If the length is not equal to one, multiplying a vector with this quaternion will scale the
    /// vector in addition to rotating it. When using quaternions to model rotations, it is
    /// advisable to ensure that quaternions are always of length one.
    #[doc(alias = "norm", alias = "magnitude")]
    pub fn length(&self) -> T
    where
        T: Number + Sqrt,
    {
        self.vec.length()
    }

    /// Returns a normalized copy of this quaternion (whose length equals one).
    ///
    /// Returns [`Error::DegenerateVector`] when the length is (near-)zero, with the same contract
    /// as [`Vector::normalize`].
    pub fn normalize(self) -> Result<Self, Error>
    where
        T: Number + Sqrt + Epsilon,
    {
        Ok(Self {
            vec: self.vec.normalize()?,
        })
    }

    /// Converts this quaternion to the equivalent 4x4 rotation matrix.
    ///
    /// The result has the conventional 3x3 rotation block in its upper left and extends it with an
    /// identity row and column. `self` must be a unit quaternion; this conversion does not
    /// normalize (callers that cannot guarantee unit length should call
    /// [`normalize`][Self::normalize] first).
    ///
    /// # Examples
    ///
    /// ```
    /// # use gmath::*;
    /// assert_eq!(Quatf::IDENTITY.to_matrix(), Mat4f::IDENTITY);
    /// ```
    pub fn to_matrix(self) -> Matrix<T, 4, 4>
    where
        T: Number,
    {
        let two = T::ONE + T::ONE;
        let (x, y, z, w) = (self.x, self.y, self.z, self.w);
        let (xx, yy, zz) = (x * x, y * y, z * z);
        let (xy, xz, yz) = (x * y, x * z, y * z);
        let (xw, yw, zw) = (x * w, y * w, z * w);

        #[rustfmt::skip]
        let mat = Matrix::from_columns([
            [T::ONE - two * (yy + zz), two * (xy + zw),          two * (xz - yw),          T::ZERO],
            [two * (xy - zw),          T::ONE - two * (xx + zz), two * (yz + xw),          T::ZERO],
            [two * (xz + yw),          two * (yz - xw),          T::ONE - two * (xx + yy), T::ZERO],
            [T::ZERO,                  T::ZERO,                  T::ZERO,                  T::ONE ],
        ]);
        mat
    }
}

impl<T> Deref for Quat<T> {
    type Target = XYZW<T>;

    #[inline]
    fn deref(&self) -> &Self::Target {
        unsafe { mem::transmute(self) }
    }
}

impl<T> DerefMut for Quat<T> {
    #[inline]
    fn deref_mut(&mut self) -> &mut Self::Target {
        unsafe { mem::transmute(self) }
    }
}

impl<T> From<Vector<T, 4>> for Quat<T> {
    #[inline]
    fn from(vec: Vector<T, 4>) -> Self {
        Self { vec }
    }
}

impl<T> From<Quat<T>> for Vector<T, 4> {
    #[inline]
    fn from(quat: Quat<T>) -> Self {
        quat.vec
    }
}

impl<T: fmt::Debug> fmt::Debug for Quat<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.vec.fmt(f)
    }
}

impl<T: fmt::Display> fmt::Display for Quat<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.vec.fmt(f)
    }
}

#[cfg(test)]
mod tests {
    use crate::{assert_approx_eq, vec3, Mat4f};

    use super::*;

    fn rng() -> fastrand::Rng {
        fastrand::Rng::with_seed(0x5eed_5eed_5eed_5eed)
    }

    fn random_quat(rng: &mut fastrand::Rng) -> Quatf {
        Quat::from_components(
            rng.f32() * 2.0 - 1.0,
            rng.f32() * 2.0 - 1.0,
            rng.f32() * 2.0 - 1.0,
            rng.f32() * 2.0 - 1.0,
        )
    }

    /// Unit quaternion for a rotation of `radians` around the (pre-normalized) `axis`.
    fn rotation(radians: f32, axis: crate::Vec3f) -> Quatf {
        let half = radians / 2.0;
        let sin = half.sin();
        Quat::from_components(axis.x * sin, axis.y * sin, axis.z * sin, half.cos())
    }

    #[test]
    fn access() {
        let mut q = Quat::from_components(1, 2, 3, 4);
        assert_eq!(q.x, 1);
        assert_eq!(q.y, 2);
        assert_eq!(q.z, 3);
        assert_eq!(q.w, 4);
        assert_eq!(q[0], 1);
        assert_eq!(q[3], 4);

        q.w = 7;
        q[0] = 9;
        assert_eq!(q.into_vec(), vec4(9, 2, 3, 7));
    }

    #[test]
    #[should_panic(expected = "index 4 out of range for 4 elements")]
    fn index_out_of_range() {
        let q = Quat::from_components(1, 2, 3, 4);
        let _ = q[4];
    }

    #[test]
    fn fmt() {
        let q = Quat::from_components(0.0, 0.0, 0.0, 1.0);
        assert_eq!(format!("{}", q), "(0, 0, 0, 1)");
        assert_eq!(format!("{:?}", q), "(0.0, 0.0, 0.0, 1.0)");
    }

    #[test]
    fn hamilton_basis_table() {
        let i = Quat::from_imaginary(1, 0, 0);
        let j = Quat::from_imaginary(0, 1, 0);
        let k = Quat::from_imaginary(0, 0, 1);
        let one = Quat::IDENTITY;

        assert_eq!(i * i, -one);
        assert_eq!(j * j, -one);
        assert_eq!(k * k, -one);

        assert_eq!(i * j, k);
        assert_eq!(j * k, i);
        assert_eq!(k * i, j);

        // The product is anti-commutative on the imaginary units.
        assert_eq!(j * i, -k);
        assert_eq!(k * j, -i);
        assert_eq!(i * k, -j);
    }

    #[test]
    fn identity_is_multiplicative_neutral() {
        let mut rng = rng();
        for _ in 0..100 {
            let q = random_quat(&mut rng);
            assert_approx_eq!(q * Quatf::IDENTITY, q);
            assert_approx_eq!(Quatf::IDENTITY * q, q);
        }
    }

    #[test]
    fn product_is_associative() {
        let mut rng = rng();
        for _ in 0..100 {
            let a = random_quat(&mut rng);
            let b = random_quat(&mut rng);
            let c = random_quat(&mut rng);
            assert_approx_eq!((a * b) * c, a * (b * c)).abs(1e-4);
        }
    }

    #[test]
    fn product_length_is_product_of_lengths() {
        let mut rng = rng();
        for _ in 0..100 {
            let a = random_quat(&mut rng);
            let b = random_quat(&mut rng);
            assert_approx_eq!((a * b).length(), a.length() * b.length()).abs(1e-4);
        }
    }

    #[test]
    fn normalize() {
        let q = Quat::from_components(0.0, 0.0, 3.0, 4.0).normalize().unwrap();
        assert_approx_eq!(q.length(), 1.0);
        assert_approx_eq!(q.into_vec(), vec4(0.0, 0.0, 0.6, 0.8));

        assert_eq!(
            Quat::from_components(0.0, 0.0, 0.0, 0.0).normalize(),
            Err(Error::DegenerateVector),
        );
    }

    #[test]
    fn scalar_ops() {
        let q = Quat::from_components(1.0, -2.0, 3.0, -4.0);
        assert_eq!((q * 2.0).into_vec(), vec4(2.0, -4.0, 6.0, -8.0));
        assert_eq!((q / 2.0).into_vec(), vec4(0.5, -1.0, 1.5, -2.0));
        assert_eq!((q + q).into_vec(), vec4(2.0, -4.0, 6.0, -8.0));
        assert_eq!((q - q).into_vec(), vec4(0.0, 0.0, 0.0, 0.0));
        assert_eq!((-q).into_vec(), vec4(-1.0, 2.0, -3.0, 4.0));
    }

    #[test]
    fn to_matrix_identity() {
        assert_eq!(Quatf::IDENTITY.to_matrix(), Mat4f::IDENTITY);
    }

    #[test]
    fn to_matrix_half_turn_around_y() {
        // (0, 1, 0, 0) rotates by 180° around Y, flipping the X and Z axes.
        let mat = Quat::from_components(0.0, 1.0, 0.0, 0.0).to_matrix();
        assert_approx_eq!(mat, Mat4f::from_diagonal([-1.0, 1.0, -1.0, 1.0]));
    }

    #[test]
    fn to_matrix_quarter_turn_around_z() {
        use std::f32::consts::TAU;

        let mat = rotation(TAU / 4.0, vec3(0.0, 0.0, 1.0)).to_matrix();
        let rotated = mat * vec4(1.0, 0.0, 0.0, 1.0);
        assert_approx_eq!(rotated, vec4(0.0, 1.0, 0.0, 1.0)).abs(1e-6);
    }

    #[test]
    fn to_matrix_preserves_lengths() {
        use crate::Vec3f;

        let mut rng = rng();
        for _ in 0..50 {
            let axis = Vec3f::from_fn(|_| rng.f32() * 2.0 - 1.0);
            if axis.length() < 0.01 {
                continue;
            }
            let q = rotation(rng.f32() * 6.0, axis.normalize().unwrap());
            let mat = q.to_matrix();

            let v = vec4(rng.f32() * 4.0 - 2.0, rng.f32() * 4.0 - 2.0, rng.f32() * 4.0 - 2.0, 0.0);
            let rotated = mat * v;
            assert_approx_eq!(rotated.length(), v.length()).abs(1e-4);
        }
    }
}
