// Copyright 2014-2016 bluss and ndarray developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Type aliases for common dimension lists and matrix shapes

use crate::dimension::{Leaf, Nest};
use crate::{Matrix, MatrixView, MatrixViewMut};

/// one-dimensional shape `[A]`
pub type Ix1<const A: usize> = Leaf<A>;
/// two-dimensional shape `[A, B]`
pub type Ix2<const A: usize, const B: usize> = Nest<A, Ix1<B>>;
/// three-dimensional shape `[A, B, C]`
pub type Ix3<const A: usize, const B: usize, const C: usize> = Nest<A, Ix2<B, C>>;
/// four-dimensional shape `[A, B, C, D]`
pub type Ix4<const A: usize, const B: usize, const C: usize, const D: usize> =
    Nest<A, Ix3<B, C, D>>;
/// five-dimensional shape `[A, B, C, D, E]`
pub type Ix5<const A: usize, const B: usize, const C: usize, const D: usize, const E: usize> =
    Nest<A, Ix4<B, C, D, E>>;
/// six-dimensional shape `[A, B, C, D, E, F]`
pub type Ix6<
    const A: usize,
    const B: usize,
    const C: usize,
    const D: usize,
    const E: usize,
    const F: usize,
> = Nest<A, Ix5<B, C, D, E, F>>;

/// one-dimensional matrix
pub type Matrix1<T, const A: usize> = Matrix<T, Ix1<A>>;
/// two-dimensional matrix
pub type Matrix2<T, const A: usize, const B: usize> = Matrix<T, Ix2<A, B>>;
/// three-dimensional matrix
pub type Matrix3<T, const A: usize, const B: usize, const C: usize> = Matrix<T, Ix3<A, B, C>>;
/// four-dimensional matrix
pub type Matrix4<T, const A: usize, const B: usize, const C: usize, const D: usize> =
    Matrix<T, Ix4<A, B, C, D>>;

/// one-dimensional matrix view
pub type MatrixView1<'a, T, const A: usize> = MatrixView<'a, T, Ix1<A>>;
/// two-dimensional matrix view
pub type MatrixView2<'a, T, const A: usize, const B: usize> = MatrixView<'a, T, Ix2<A, B>>;
/// three-dimensional matrix view
pub type MatrixView3<'a, T, const A: usize, const B: usize, const C: usize> =
    MatrixView<'a, T, Ix3<A, B, C>>;

/// one-dimensional read-write matrix view
pub type MatrixViewMut1<'a, T, const A: usize> = MatrixViewMut<'a, T, Ix1<A>>;
/// two-dimensional read-write matrix view
pub type MatrixViewMut2<'a, T, const A: usize, const B: usize> = MatrixViewMut<'a, T, Ix2<A, B>>;
/// three-dimensional read-write matrix view
pub type MatrixViewMut3<'a, T, const A: usize, const B: usize, const C: usize> =
    MatrixViewMut<'a, T, Ix3<A, B, C>>;
