// Copyright 2014-2016 bluss and ndarray developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Constructor methods for matrices.

use num_traits::{One, Zero};

use crate::dimension::Dimension;
use crate::error::{from_kind, ErrorKind, ShapeError};
use crate::Matrix;

/// Constructor methods for matrices.
impl<T, D> Matrix<T, D>
where
    D: Dimension,
{
    /// Create a matrix that takes ownership of `data`.
    ///
    /// This is a `const fn`, so nested calls (see [`matrix!`](crate::matrix))
    /// can initialize `const` and `static` items.
    ///
    /// ```
    /// use mdmatrix::{Matrix, Matrix2};
    ///
    /// const M: Matrix2<u8, 2, 3> = Matrix::from_storage([
    ///     Matrix::from_storage([1, 2, 3]),
    ///     Matrix::from_storage([4, 5, 6]),
    /// ]);
    /// assert_eq!(M[1][2], 6);
    /// ```
    pub const fn from_storage(data: D::Storage<T>) -> Self {
        Matrix { data }
    }

    /// Create a matrix with copies of `elem`.
    ///
    /// ```
    /// use mdmatrix::Matrix3;
    ///
    /// let a = Matrix3::<f64, 2, 2, 2>::from_elem(1.);
    /// assert!(a.fold(true, |acc, &x| acc && x == 1.));
    /// ```
    pub fn from_elem(elem: T) -> Self
    where
        T: Clone,
    {
        Matrix {
            data: D::from_fn(&mut || elem.clone()),
        }
    }

    /// Create a matrix with zeros.
    pub fn zeros() -> Self
    where
        T: Zero,
    {
        Matrix {
            data: D::from_fn(&mut T::zero),
        }
    }

    /// Create a matrix with ones.
    pub fn ones() -> Self
    where
        T: One,
    {
        Matrix {
            data: D::from_fn(&mut T::one),
        }
    }

    /// Create a matrix with values created by the function `f`.
    ///
    /// `f` is called once per element, in row-major order, with the flat
    /// index of the element (`0` up to [`D::SIZE`](Dimension::SIZE)).
    ///
    /// ```
    /// use mdmatrix::{matrix, Matrix2};
    ///
    /// let a = Matrix2::<usize, 2, 3>::from_fn(|i| i * 10);
    /// let b: Matrix2<usize, 2, 3> = matrix![[0, 10, 20], [30, 40, 50]];
    /// assert_eq!(a, b);
    /// ```
    pub fn from_fn<F>(mut f: F) -> Self
    where
        F: FnMut(usize) -> T,
    {
        let mut index = 0;
        Matrix {
            data: D::from_fn(&mut || {
                let elem = f(index);
                index += 1;
                elem
            }),
        }
    }

    /// Create a matrix from plain nested arrays of the same shape.
    ///
    /// ```
    /// use mdmatrix::Matrix2;
    ///
    /// let a = Matrix2::<i32, 2, 2>::from_array([[1, 2], [3, 4]]);
    /// assert_eq!(a[1][0], 3);
    /// assert_eq!(a.into_array(), [[1, 2], [3, 4]]);
    /// ```
    pub fn from_array(array: D::Array<T>) -> Self {
        Matrix {
            data: D::from_array(array),
        }
    }

    /// Create a matrix by cloning the elements of `xs`, in row-major order.
    ///
    /// **Errors** if `xs` does not have exactly
    /// [`D::SIZE`](Dimension::SIZE) elements.
    ///
    /// ```
    /// use mdmatrix::{ErrorKind, Matrix2};
    ///
    /// let a = Matrix2::<i32, 2, 2>::from_shape_slice(&[1, 2, 3, 4]).unwrap();
    /// assert_eq!(a[1][1], 4);
    ///
    /// let err = Matrix2::<i32, 2, 2>::from_shape_slice(&[1, 2, 3]).unwrap_err();
    /// assert_eq!(err.kind(), ErrorKind::IncompatibleShape);
    /// ```
    pub fn from_shape_slice(xs: &[T]) -> Result<Self, ShapeError>
    where
        T: Clone,
    {
        if xs.len() != D::SIZE {
            return Err(from_kind(ErrorKind::IncompatibleShape));
        }
        Ok(Self::from_fn(|i| xs[i].clone()))
    }

    /// Convert the matrix into plain nested arrays of the same shape.
    pub fn into_array(self) -> D::Array<T> {
        D::into_array(self.data)
    }

    /// Convert the matrix into its storage.
    pub fn into_storage(self) -> D::Storage<T> {
        self.data
    }
}

impl<T, D> Default for Matrix<T, D>
where
    T: Default,
    D: Dimension,
{
    /// Create a matrix with every element set to `T::default()`.
    fn default() -> Self {
        Matrix {
            data: D::from_fn(&mut T::default),
        }
    }
}

impl<'a, T, D> TryFrom<&'a [T]> for Matrix<T, D>
where
    T: Clone,
    D: Dimension,
{
    type Error = ShapeError;

    /// See [`Matrix::from_shape_slice`].
    fn try_from(xs: &'a [T]) -> Result<Self, ShapeError> {
        Self::from_shape_slice(xs)
    }
}
