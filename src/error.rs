//! Failure conditions reported by the math kernel.
//!
//! Everything in this crate is a plain value computation, so the error surface is small: all
//! conditions are local to a single call and carry no retry semantics. The caller decides whether
//! to skip the transform, substitute a default (usually an identity matrix), or give up on the
//! frame.

/// Error type shared by all fallible operations in this crate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// A vector (or quaternion) of zero length was passed to an operation that needs a direction.
    ///
    /// Returned by [`Vector::normalize`][crate::Vector::normalize],
    /// [`Quat::normalize`][crate::Quat::normalize], [`Vector::angle_to`][crate::Vector::angle_to],
    /// and [`look_at`][crate::look_at]. "Zero length" means at or below the scalar type's
    /// [`Epsilon`][crate::Epsilon], so floating-point vectors shorter than the machine epsilon are
    /// rejected instead of being blown up into NaN/infinity components.
    #[error("vector of (near-)zero length cannot be normalized")]
    DegenerateVector,

    /// A runtime-sized input (a slice) did not have the element count the target dimension needs.
    ///
    /// Dimensions are otherwise fixed at compile time, so this can only come out of the slice
    /// conversions ([`TryFrom<&[T]>`][crate::Vector#impl-TryFrom%3C%26%5BT%5D%3E-for-Vector%3CT,+N%3E]
    /// and [`Matrix::try_from_slice`][crate::Matrix::try_from_slice]).
    #[error("expected {expected} elements, got {actual}")]
    DimensionMismatch {
        /// Element count the target type requires.
        expected: usize,
        /// Element count the input actually had.
        actual: usize,
    },

    /// An index was out of bounds for the vector, quaternion, or matrix it was applied to.
    ///
    /// The `Index`/`IndexMut` operators panic with this error as their message; the checked
    /// accessors (`get`, `get_mut`, `col`, `col_mut`) return `Option` instead.
    #[error("index {index} out of range for {len} elements")]
    IndexOutOfRange {
        /// The offending index.
        index: usize,
        /// Number of addressable elements (or columns).
        len: usize,
    },
}
