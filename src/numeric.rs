// Copyright 2014-2016 bluss and ndarray developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

use core::ops::AddAssign;

use num_traits::Zero;

use crate::dimension::Dimension;
use crate::Matrix;

/// The additive identity is the matrix of zeros.
impl<T, D> Zero for Matrix<T, D>
where
    T: Zero + Clone + AddAssign,
    D: Dimension,
{
    fn zero() -> Self {
        Matrix::zeros()
    }

    fn is_zero(&self) -> bool {
        self.fold(true, |acc, x| acc && x.is_zero())
    }
}

/// # Numerical Methods for Matrices
impl<T, D> Matrix<T, D>
where
    D: Dimension,
{
    /// Return the sum of all elements in the matrix.
    ///
    /// ```
    /// use mdmatrix::{matrix, Matrix2};
    ///
    /// let a: Matrix2<f64, 2, 2> = matrix![[1., 2.], [3., 4.]];
    /// assert_eq!(a.sum(), 10.);
    /// ```
    pub fn sum(&self) -> T
    where
        T: Zero + Clone + AddAssign,
    {
        self.fold(T::zero(), |mut acc, x| {
            acc += x.clone();
            acc
        })
    }
}

#[cfg(test)]
mod tests {
    use num_traits::Zero;

    use crate::Matrix3;

    #[test]
    fn zero_matrix() {
        let mut a = Matrix3::<i64, 2, 3, 4>::zero();
        assert!(a.is_zero());
        assert_eq!(a.sum(), 0);
        a[1][2][3] = 5;
        assert!(!a.is_zero());
        assert_eq!(a.sum(), 5);
        assert_eq!(a.clone() + Matrix3::<i64, 2, 3, 4>::zero(), a);
    }
}
