// Copyright 2014-2016 bluss and ndarray developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.
use core::fmt;

use crate::dimension::Dimension;
use crate::{Matrix, MatrixView, MatrixViewMut};

fn format_matrix<T, D, F>(
    view: MatrixView<'_, T, D>,
    f: &mut fmt::Formatter<'_>,
    mut format: F,
) -> fmt::Result
where
    D: Dimension,
    F: FnMut(&T, &mut fmt::Formatter<'_>) -> fmt::Result,
{
    D::format(view.data, f, 0, &mut format)
}

fn format_shape<D: Dimension>(f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str("[")?;
    for axis in 0..D::NDIM {
        if axis > 0 {
            f.write_str(", ")?;
        }
        if let Some(len) = D::len_of(axis) {
            write!(f, "{}", len)?;
        }
    }
    f.write_str("]")
}

macro_rules! impl_fmt_trait {
    ($trt:ident) => {
        /// Format the matrix using the same trait for each element, applying
        /// the formatting parameters to every element.
        ///
        /// The matrix is shown in multiline style.
        impl<T: fmt::$trt, D: Dimension> fmt::$trt for Matrix<T, D> {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                format_matrix(self.view(), f, <T as fmt::$trt>::fmt)
            }
        }

        impl<'a, T: fmt::$trt, D: Dimension> fmt::$trt for MatrixView<'a, T, D> {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                format_matrix(*self, f, <T as fmt::$trt>::fmt)
            }
        }

        impl<'a, T: fmt::$trt, D: Dimension> fmt::$trt for MatrixViewMut<'a, T, D> {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                format_matrix(self.view(), f, <T as fmt::$trt>::fmt)
            }
        }
    };
}

impl_fmt_trait!(Display);
impl_fmt_trait!(LowerExp);
impl_fmt_trait!(UpperExp);
impl_fmt_trait!(LowerHex);
impl_fmt_trait!(Binary);

/// Format the matrix using `Debug` for each element, followed by its shape.
impl<T: fmt::Debug, D: Dimension> fmt::Debug for Matrix<T, D> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&self.view(), f)
    }
}

impl<'a, T: fmt::Debug, D: Dimension> fmt::Debug for MatrixView<'a, T, D> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Add extra information for Debug
        format_matrix(*self, f, <T as fmt::Debug>::fmt)?;
        f.write_str(" shape=")?;
        format_shape::<D>(f)
    }
}

impl<'a, T: fmt::Debug, D: Dimension> fmt::Debug for MatrixViewMut<'a, T, D> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&self.view(), f)
    }
}

#[cfg(test)]
mod tests {
    use crate::{Matrix1, Matrix2, Matrix3};

    #[test]
    fn display_multiline() {
        let a: Matrix2<i32, 2, 2> = matrix![[1, 2], [3, 4]];
        assert_eq!(format!("{}", a), "[[1, 2],\n [3, 4]]");
        assert_eq!(format!("{:3}", a), "[[  1,   2],\n [  3,   4]]");
    }

    #[test]
    fn display_three_dimensions() {
        let a: Matrix3<u8, 2, 2, 1> = matrix![[[1], [2]], [[3], [4]]];
        assert_eq!(format!("{}", a), "[[[1],\n  [2]],\n [[3],\n  [4]]]");
    }

    #[test]
    fn debug_shows_shape() {
        let a: Matrix1<f32, 3> = matrix![1., 2.5, 3.];
        assert_eq!(format!("{:?}", a), "[1.0, 2.5, 3.0] shape=[3]");
        assert_eq!(format!("{:?}", a.view()), "[1.0, 2.5, 3.0] shape=[3]");
    }

    #[test]
    fn hex_elements() {
        let a: Matrix1<u8, 3> = matrix![1, 0xff, 0xfe];
        assert_eq!(format!("{:02x}", a), "[01, ff, fe]");
    }
}
