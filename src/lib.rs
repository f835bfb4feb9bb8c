//! Fixed-dimension vector, matrix, and quaternion math for 3D rendering.
//!
//! # Motivation
//!
//! Rendering code needs a handful of small, fixed-size linear algebra types to assemble the
//! projection, view, and model matrices it uploads to the GPU every frame. This library provides
//! exactly that: [`Vector`], [`Matrix`] and [`Quat`] value types with the usual arithmetic, plus
//! the transform factories ([`perspective`], [`look_at`], [`translate`], [`scale`] and
//! [`rotate`]) that produce 4x4 matrices ready for uniform upload.
//!
//! # Goals & Non-Goals
//!
//! - Don't support dynamically-sized vectors and matrices. The API can be significantly
//!   simplified by relying on const generics to specify vector and matrix dimensions.
//! - Support only a single, column-major, unpadded data layout for matrices and vectors, since
//!   that is what graphics APIs consume ([`Matrix::as_slice`] and the [`bytemuck`] impls expose
//!   it directly).
//! - Be generic over the element type, but don't try to support non-[`Copy`] numeric types (eg.
//!   "big decimals").
//! - Make degenerate inputs visible: operations that would otherwise manufacture NaNs (such as
//!   normalizing a zero-length vector) return an [`Error`] instead of propagating garbage.
//! - No SIMD tuning, no matrix decomposition or solving. Construction, combination, and
//!   transposition are the entire scope.

pub mod approx;
mod error;
mod matrix;
mod quat;
mod traits;
mod transform;
mod vector;

pub use error::Error;
pub use matrix::*;
pub use quat::*;
pub use traits::*;
pub use transform::*;
pub use vector::*;
