//! Compile-time sized linear algebra.
//!
//! This crate provides [`Vector`] and [`Matrix`] types whose dimensions are const generic
//! parameters, together with the usual arithmetic operators and a set of matrix algorithms
//! (transpose, minors, cofactors, adjoint, determinant, inverse, trace, rank and Kronecker
//! product).
//!
//! # Goals & Non-Goals
//!
//! - Dimensions are always known at compile time. A dimension mismatch between operands is a type
//!   error, and operations whose output size depends arithmetically on the input size (slicing,
//!   concatenation, minors, Kronecker products) verify the caller-annotated output size with a
//!   compile-time assertion.
//! - Matrices are stored row-major and unpadded; vectors are stored as plain arrays. Both can be
//!   viewed as bytes through [`bytemuck`].
//! - Be generic over the primitive numeric types ([`Scalar`]). Operands of different scalar types
//!   can be combined; the result uses their common [`Promote`]d type.
//! - Don't support dynamically-sized containers, big-number scalars, or SIMD tuning.
//!
//! # Quick tour
//!
//! ```
//! # use fixed_linalg::*;
//! let a = vec3(3.0, 4.0, 0.0);
//! assert_eq!(length(a), 5.0);
//! assert_eq!(dot!(a, vec3(1, 1, 1)), 7.0);
//!
//! let m = Matrix::from_rows([
//!     [1.0, 2.0],
//!     [3.0, 4.0],
//! ]);
//! assert_eq!(m.determinant(), -2.0);
//! let inv = m.inverse().unwrap();
//! approx::assert_relative_eq!(inv * m, Mat2::identity(), epsilon = 1e-12);
//! ```
//!
//! # Logging
//!
//! The crate logs through the [`log`] facade and never installs a logger itself. Rejected
//! inversions are reported at `debug` level, pivot decisions of [`Matrix::rank`] at `trace`
//! level.

mod algebra;
mod approx;
mod error;
mod index;
mod matrix;
mod promote;
mod range;
mod tolerance;
mod traits;
mod vector;

pub use algebra::*;
pub use error::*;
pub use index::*;
pub use matrix::*;
pub use promote::*;
pub use range::*;
pub use tolerance::*;
pub use traits::*;
pub use vector::*;
