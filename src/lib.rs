// Copyright 2014-2016 bluss and ndarray developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.
#![crate_name = "mdmatrix"]
#![doc(html_root_url = "https://docs.rs/mdmatrix/0.1/")]
#![allow(clippy::type_complexity)]
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

//! The `mdmatrix` crate provides the [`Matrix`] type, a fixed-size
//! multi-dimensional container whose shape is part of its type.
//!
//! - A matrix of element type `T` and shape `D1 × D2 × … × Dk` is written
//!   `Matrix<T, dims![D1, D2, …, Dk]>`, or with one of the aliases
//!   [`Matrix1`] … [`Matrix4`].
//! - Storage is an array of sub-matrices: indexing a matrix with `[i]` yields
//!   the sub-matrix of the remaining dimensions, and indexing the last
//!   dimension yields an element. No heap allocation is involved.
//! - [`MatrixView`] and [`MatrixViewMut`] borrow the storage of a matrix (or
//!   of a sub-matrix) without copying it.
//! - `+=`, `-=` between matrices of the same shape and `*=` by a scalar work
//!   element-wise across every element; `+`, `-` and `*` are the by-value
//!   forms. Shape and element type mismatches are compile errors.
//!
//! ```
//! use mdmatrix::{dims, Matrix};
//!
//! let mut m = Matrix::<i32, dims![3, 3, 3]>::from_elem(2);
//! m *= 52;
//! assert_eq!(m[1][2][0], 104);
//!
//! let snapshot = m.clone();
//! m -= &snapshot;
//! assert_eq!(m[1][2][0], 0);
//! ```
//!
//! ## Crate Feature Flags
//!
//! - `std`
//!   - Enabled by default.
//!   - Implements `std::error::Error` for [`ShapeError`]. Without it the
//!     crate is `no_std`.
//! - `approx`
//!   - Implementations of traits from the [`approx`] crate for matrices.
//!
//! [`approx`]: https://docs.rs/approx

pub use crate::aliases::*;
pub use crate::dimension::{Dimension, Leaf, Nest};
pub use crate::error::{ErrorKind, ShapeError};
pub use crate::iterators::{Iter, IterMut};

#[macro_use]
mod macros;
#[macro_use]
mod private;

mod aliases;
#[cfg(feature = "approx")]
mod array_approx;
mod arrayformat;
mod arraytraits;
pub mod dimension;
mod error;
mod impl_constructors;
mod impl_methods;
mod impl_ops;
mod impl_views;
pub mod iterators;
mod numeric;

/// The `mdmatrix` prelude.
///
/// ```
/// use mdmatrix::prelude::*;
///
/// let m: Matrix2<f64, 2, 3> = Matrix::zeros();
/// assert_eq!(m.size(), 6);
/// ```
pub mod prelude {
    #[doc(no_inline)]
    pub use crate::{Dimension, Leaf, Matrix, MatrixView, MatrixViewMut, Nest};

    #[doc(no_inline)]
    pub use crate::{Ix1, Ix2, Ix3, Ix4, Ix5, Ix6};

    #[doc(no_inline)]
    pub use crate::{Matrix1, Matrix2, Matrix3, Matrix4};

    #[doc(no_inline)]
    pub use crate::{MatrixView1, MatrixView2, MatrixView3};

    #[doc(no_inline)]
    pub use crate::{MatrixViewMut1, MatrixViewMut2, MatrixViewMut3};

    #[doc(no_inline)]
    pub use crate::{dims, matrix};
}

/// A fixed-size multi-dimensional matrix that owns its elements.
///
/// The shape is the type parameter `D`, a [`Dimension`] list such as
/// `dims![2, 3]` (= `Nest<2, Leaf<3>>`). A matrix of shape `[D1, D2, …]`
/// stores `D1` sub-matrices of shape `[D2, …]`; the last dimension stores
/// elements of type `T` directly.
///
/// ## Indexing
///
/// `matrix[i]` is the sub-matrix at position `i` along the first axis, or
/// the element itself when the matrix has one dimension. Chaining reaches
/// a single element:
///
/// ```
/// use mdmatrix::{dims, Matrix};
///
/// let mut m = Matrix::<i32, dims![3, 3, 3]>::default();
/// m[1][2][0] = 1;
/// assert_eq!(m[1][2][0], 1);
/// assert_eq!(m[1][2].as_slice(), &[1, 0, 0]);
/// ```
///
/// **Panics** if an index is out of bounds; use [`.get()`](Matrix::get) or
/// [`.elem()`](Matrix::elem) for checked access.
///
/// ## Arithmetic
///
/// `+=` and `-=` take another matrix (by value or reference) or a
/// [`MatrixView`] of the same shape and element type; `*=` takes a scalar
/// of the element type. The binary forms `+`, `-`, `*` return a new matrix
/// and leave borrowed operands untouched.
///
/// ## Views
///
/// [`.view()`](Matrix::view) and [`.view_mut()`](Matrix::view_mut) borrow the
/// storage as a [`MatrixView`] or [`MatrixViewMut`].
pub struct Matrix<T, D: Dimension> {
    data: D::Storage<T>,
}

/// A read-only view of the storage of a [`Matrix`] or one of its
/// sub-matrices.
///
/// Views are `Copy` and indexing through them yields references (and
/// sub-views, see [`.at()`](MatrixView::at)) that live as long as the
/// borrowed storage. There is no way to mutate elements through a
/// `MatrixView`.
pub struct MatrixView<'a, T: 'a, D: Dimension> {
    data: &'a D::Storage<T>,
}

/// A read-write view of the storage of a [`Matrix`] or one of its
/// sub-matrices.
///
/// Element-wise arithmetic (`+=`, `-=`, `*=`) is implemented on this type;
/// the operators on [`Matrix`] borrow it through
/// [`.view_mut()`](Matrix::view_mut). Converts into a [`MatrixView`] with
/// [`.into_view()`](MatrixViewMut::into_view); the converse does not exist.
pub struct MatrixViewMut<'a, T: 'a, D: Dimension> {
    data: &'a mut D::Storage<T>,
}
