//! Factories for the projection, view, and model matrices of a 3D rendering pipeline.

use crate::{Epsilon, Error, Matrix, Number, Sqrt, Trig, Vector};

/// Builds a symmetric perspective-projection matrix.
///
/// `fov_y_degrees` is the full vertical field of view, **in degrees** (unlike [`rotate`], which
/// takes radians). `aspect` is the width-to-height ratio of the viewport, and `near`/`far` are
/// the distances of the two clip planes.
///
/// # Examples
///
/// ```
/// # use gmath::*;
/// let projection = perspective(90.0, 16.0 / 9.0, 0.1, 100.0);
///
/// // With a 90° field of view, a point on the vertical edge of the frustum has y == -z.
/// let clip = projection * vec4(0.0, 2.0, -2.0, 1.0);
/// assert_approx_eq!(clip.y / clip.w, 1.0);
/// ```
pub fn perspective<T>(fov_y_degrees: T, aspect: T, near: T, far: T) -> Matrix<T, 4, 4>
where
    T: Number + Trig,
{
    let two = T::ONE + T::ONE;
    let f = T::ONE / (fov_y_degrees / two).to_radians().tan();

    #[rustfmt::skip]
    let mat = Matrix::from_columns([
        [f / aspect, T::ZERO, T::ZERO,                          T::ZERO],
        [T::ZERO,    f,       T::ZERO,                          T::ZERO],
        [T::ZERO,    T::ZERO, (near + far) / (near - far),      -T::ONE],
        [T::ZERO,    T::ZERO, two * near * far / (near - far),  T::ZERO],
    ]);
    mat
}

/// Builds a view matrix for a camera at `camera` that looks towards `target`.
///
/// `up` is the direction considered "upwards" for the camera, typically the world's Y axis. It
/// does not have to be normalized and does not have to be exactly perpendicular to the viewing
/// direction.
///
/// Returns [`Error::DegenerateVector`] when no orientation can be derived: when `target` equals
/// `camera`, when `up` has (near-)zero length, or when the viewing direction is parallel to `up`.
///
/// # Examples
///
/// ```
/// # use gmath::*;
/// let view = look_at(vec3(0.0, 0.0, 0.0), vec3(0.0, 0.0, -5.0), Vec3f::Y).unwrap();
///
/// // The fourth column carries the negated camera position.
/// assert_approx_eq!(view[3], vec4(0.0, 0.0, 5.0, 1.0));
/// ```
pub fn look_at<T>(
    target: Vector<T, 3>,
    camera: Vector<T, 3>,
    up: Vector<T, 3>,
) -> Result<Matrix<T, 4, 4>, Error>
where
    T: Number + Sqrt + Epsilon,
{
    let forward = (target - camera).normalize()?;
    let side = forward.cross(up.normalize()?);
    if side.length() <= T::EPSILON {
        // `up` is parallel to the viewing direction.
        return Err(Error::DegenerateVector);
    }
    let new_up = side.cross(forward);

    Ok(Matrix::from_columns([
        side.extend(T::ZERO),
        new_up.extend(T::ZERO),
        forward.extend(T::ZERO),
        (-camera).extend(T::ONE),
    ]))
}

/// Builds a matrix that translates points by `v`.
///
/// Only points are affected: homogeneous vectors with `w == 0` pass through unchanged.
///
/// # Examples
///
/// ```
/// # use gmath::*;
/// let mat = translate(vec3(10, 20, 30));
/// assert_eq!(mat * vec4(1, 2, 3, 1), vec4(11, 22, 33, 1));
/// assert_eq!(mat * vec4(1, 2, 3, 0), vec4(1, 2, 3, 0));
/// ```
pub fn translate<T>(v: Vector<T, 3>) -> Matrix<T, 4, 4>
where
    T: Number,
{
    let mut mat = Matrix::IDENTITY;
    mat[3] = v.extend(T::ONE);
    mat
}

/// Builds a matrix that scales each axis by the corresponding element of `v`.
///
/// # Examples
///
/// ```
/// # use gmath::*;
/// let mat = scale(vec3(2, 3, 4));
/// assert_eq!(mat * vec4(1, 1, 1, 1), vec4(2, 3, 4, 1));
/// ```
pub fn scale<T>(v: Vector<T, 3>) -> Matrix<T, 4, 4>
where
    T: Number,
{
    Matrix::from_diagonal(v.extend(T::ONE))
}

/// Builds a matrix that rotates by `radians` around `axis`.
///
/// The angle is **in radians** (unlike [`perspective`], which takes its field of view in
/// degrees). `axis` must already be normalized; this is not checked, and an unnormalized axis
/// produces a matrix that skews and scales.
///
/// # Examples
///
/// ```
/// # use gmath::*;
/// use std::f32::consts::TAU;
///
/// // A quarter turn around Z takes the X axis to the Y axis.
/// let mat = rotate(TAU / 4.0, Vec3f::Z);
/// assert_approx_eq!(mat * vec4(1.0, 0.0, 0.0, 0.0), vec4(0.0, 1.0, 0.0, 0.0)).abs(1e-6);
/// ```
pub fn rotate<T>(radians: T, axis: Vector<T, 3>) -> Matrix<T, 4, 4>
where
    T: Number + Trig,
{
    let (x, y, z) = (axis.x, axis.y, axis.z);
    let c = radians.cos();
    let s = radians.sin();
    let t = T::ONE - c;

    #[rustfmt::skip]
    let mat = Matrix::from_columns([
        [t * x * x + c,     t * x * y + s * z, t * x * z - s * y, T::ZERO],
        [t * x * y - s * z, t * y * y + c,     t * y * z + s * x, T::ZERO],
        [t * x * z + s * y, t * y * z - s * x, t * z * z + c,     T::ZERO],
        [T::ZERO,           T::ZERO,           T::ZERO,           T::ONE ],
    ]);
    mat
}
