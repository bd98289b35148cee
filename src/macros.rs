// Copyright 2014-2016 bluss and ndarray developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

/// Spell a [`Dimension`](crate::Dimension) list as a type.
///
/// `dims![A]` is `Leaf<A>` and `dims![A, B, ...]` is
/// `Nest<A, dims![B, ...]>`.
///
/// ```
/// use mdmatrix::{dims, Dimension, Leaf, Nest};
///
/// type D = dims![2, 3, 4];
/// let _: Nest<2, Nest<3, Leaf<4>>> = D::default();
/// assert_eq!(D::NDIM, 3);
/// assert_eq!(D::SIZE, 24);
/// ```
#[macro_export]
macro_rules! dims {
    ($n:expr $(,)?) => {
        $crate::Leaf<{ $n }>
    };
    ($n:expr, $($rest:expr),+ $(,)?) => {
        $crate::Nest<{ $n }, $crate::dims![$($rest),+]>
    };
}

/// Create a [`Matrix`](crate::Matrix) from nested bracketed rows.
///
/// The expansion is a tree of `const fn` [`from_storage`] calls, so the
/// macro can initialize `const` and `static` items. The shape comes from
/// the expected type.
///
/// ```
/// use mdmatrix::{matrix, Matrix2, Matrix3};
///
/// const IDENTITY: Matrix2<i32, 2, 2> = matrix![[1, 0], [0, 1]];
///
/// let cube: Matrix3<u8, 2, 2, 2> = matrix![[[1, 2], [3, 4]],
///                                          [[5, 6], [7, 8]]];
/// assert_eq!(IDENTITY[1][1], 1);
/// assert_eq!(cube[1][0][1], 6);
/// ```
///
/// Rows are recognized by their brackets: elements that are themselves
/// array expressions must be wrapped in parentheses.
///
/// [`from_storage`]: crate::Matrix::from_storage
#[macro_export]
macro_rules! matrix {
    ($([$($row:tt)*]),+ $(,)?) => {
        $crate::Matrix::from_storage([$($crate::matrix![$($row)*]),+])
    };
    ($($x:expr),+ $(,)?) => {
        $crate::Matrix::from_storage([$($x),+])
    };
}
