// Copyright 2014-2016 bluss and ndarray developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Element-wise arithmetic.
//!
//! The compound assignments are implemented once, on `MatrixViewMut`; every
//! other form borrows a view and defers to them. A mutable view and a shared
//! borrow of the same matrix cannot coexist, so `m -= &m` does not compile.
//! When `T: Copy` the matrix is `Copy` too and `m -= m` subtracts a copy;
//! otherwise write `m -= m.clone()`.

use core::ops::{Add, AddAssign, Mul, MulAssign, Sub, SubAssign};

use crate::dimension::Dimension;
use crate::{Matrix, MatrixView, MatrixViewMut};

macro_rules! impl_assign_op {
    ($trt:ident, $method:ident, $doc:expr) => {
        #[doc=$doc]
        impl<'a, 'b, T, D> $trt<MatrixView<'b, T, D>> for MatrixViewMut<'a, T, D>
        where
            T: Clone + $trt,
            D: Dimension,
        {
            fn $method(&mut self, rhs: MatrixView<'b, T, D>) {
                self.zip_mut_with(rhs, |x, y| {
                    x.$method(y.clone());
                });
            }
        }

        #[doc=$doc]
        impl<'a, 'b, T, D> $trt<&'b Matrix<T, D>> for MatrixViewMut<'a, T, D>
        where
            T: Clone + $trt,
            D: Dimension,
        {
            fn $method(&mut self, rhs: &'b Matrix<T, D>) {
                self.$method(rhs.view());
            }
        }

        #[doc=$doc]
        impl<'b, T, D> $trt<MatrixView<'b, T, D>> for Matrix<T, D>
        where
            T: Clone + $trt,
            D: Dimension,
        {
            fn $method(&mut self, rhs: MatrixView<'b, T, D>) {
                self.view_mut().$method(rhs);
            }
        }

        #[doc=$doc]
        impl<'b, T, D> $trt<&'b Matrix<T, D>> for Matrix<T, D>
        where
            T: Clone + $trt,
            D: Dimension,
        {
            fn $method(&mut self, rhs: &'b Matrix<T, D>) {
                self.view_mut().$method(rhs.view());
            }
        }

        #[doc=$doc]
        impl<T, D> $trt<Matrix<T, D>> for Matrix<T, D>
        where
            T: Clone + $trt,
            D: Dimension,
        {
            fn $method(&mut self, rhs: Matrix<T, D>) {
                self.view_mut().$method(rhs.view());
            }
        }
    };
}

impl_assign_op!(
    AddAssign,
    add_assign,
    "Perform `self += rhs` as elementwise addition (in place).\n"
);
impl_assign_op!(
    SubAssign,
    sub_assign,
    "Perform `self -= rhs` as elementwise subtraction (in place).\n"
);

/// Perform `self *= rhs` as elementwise multiplication by the scalar `rhs`
/// (in place).
impl<'a, T, D> MulAssign<T> for MatrixViewMut<'a, T, D>
where
    T: Clone + MulAssign,
    D: Dimension,
{
    fn mul_assign(&mut self, rhs: T) {
        self.map_inplace(move |elt| {
            *elt *= rhs.clone();
        });
    }
}

/// Perform `self *= rhs` as elementwise multiplication by the scalar `rhs`
/// (in place).
impl<T, D> MulAssign<T> for Matrix<T, D>
where
    T: Clone + MulAssign,
    D: Dimension,
{
    fn mul_assign(&mut self, rhs: T) {
        self.view_mut().mul_assign(rhs);
    }
}

macro_rules! impl_binary_op(
    ($trt:ident, $mth:ident, $iop:tt, $bound:ident, $doc:expr) => (
/// Perform elementwise
#[doc=$doc]
/// between `self` and `rhs`,
/// and return the result, reusing the storage of `self`.
impl<T, D> $trt<Matrix<T, D>> for Matrix<T, D>
where
    T: Clone + $bound,
    D: Dimension,
{
    type Output = Matrix<T, D>;
    fn $mth(mut self, rhs: Matrix<T, D>) -> Self::Output {
        self $iop rhs;
        self
    }
}

/// Perform elementwise
#[doc=$doc]
/// between `self` and reference `rhs`,
/// and return the result, reusing the storage of `self`.
impl<'b, T, D> $trt<&'b Matrix<T, D>> for Matrix<T, D>
where
    T: Clone + $bound,
    D: Dimension,
{
    type Output = Matrix<T, D>;
    fn $mth(mut self, rhs: &'b Matrix<T, D>) -> Self::Output {
        self $iop rhs;
        self
    }
}

/// Perform elementwise
#[doc=$doc]
/// between reference `self` and `rhs`,
/// and return the result as a new `Matrix`.
impl<'a, T, D> $trt<Matrix<T, D>> for &'a Matrix<T, D>
where
    T: Clone + $bound,
    D: Dimension,
{
    type Output = Matrix<T, D>;
    fn $mth(self, rhs: Matrix<T, D>) -> Self::Output {
        let mut out = self.clone();
        out $iop rhs;
        out
    }
}

/// Perform elementwise
#[doc=$doc]
/// between references `self` and `rhs`,
/// and return the result as a new `Matrix`.
impl<'a, 'b, T, D> $trt<&'b Matrix<T, D>> for &'a Matrix<T, D>
where
    T: Clone + $bound,
    D: Dimension,
{
    type Output = Matrix<T, D>;
    fn $mth(self, rhs: &'b Matrix<T, D>) -> Self::Output {
        let mut out = self.clone();
        out $iop rhs;
        out
    }
}

/// Perform elementwise
#[doc=$doc]
/// between the views `self` and `rhs`,
/// and return the result as a new `Matrix`.
impl<'a, 'b, T, D> $trt<MatrixView<'b, T, D>> for MatrixView<'a, T, D>
where
    T: Clone + $bound,
    D: Dimension,
{
    type Output = Matrix<T, D>;
    fn $mth(self, rhs: MatrixView<'b, T, D>) -> Self::Output {
        let mut out = self.to_owned();
        out $iop rhs;
        out
    }
}
    );
);

impl_binary_op!(Add, add, +=, AddAssign, "addition");
impl_binary_op!(Sub, sub, -=, SubAssign, "subtraction");

/// Perform elementwise multiplication by the scalar `x` and return the
/// result, reusing the storage of `self`.
impl<T, D> Mul<T> for Matrix<T, D>
where
    T: Clone + MulAssign,
    D: Dimension,
{
    type Output = Matrix<T, D>;
    fn mul(mut self, x: T) -> Self::Output {
        self *= x;
        self
    }
}

/// Perform elementwise multiplication by the scalar `x` and return the
/// result as a new `Matrix`.
impl<'a, T, D> Mul<T> for &'a Matrix<T, D>
where
    T: Clone + MulAssign,
    D: Dimension,
{
    type Output = Matrix<T, D>;
    fn mul(self, x: T) -> Self::Output {
        let mut out = self.clone();
        out *= x;
        out
    }
}

/// Perform elementwise multiplication by the scalar `x` and return the
/// result as a new `Matrix`.
impl<'a, T, D> Mul<T> for MatrixView<'a, T, D>
where
    T: Clone + MulAssign,
    D: Dimension,
{
    type Output = Matrix<T, D>;
    fn mul(self, x: T) -> Self::Output {
        let mut out = self.to_owned();
        out *= x;
        out
    }
}
