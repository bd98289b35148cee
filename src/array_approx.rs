// Copyright 2014-2016 bluss and ndarray developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

use approx::{AbsDiffEq, RelativeEq, UlpsEq};

use crate::dimension::Dimension;
use crate::Matrix;

impl<T, D> Matrix<T, D>
where
    D: Dimension,
{
    /// A test for equality that uses the elementwise absolute difference to
    /// compute the approximate equality of two matrices.
    ///
    /// **Requires crate feature `"approx"`**
    pub fn abs_diff_eq(&self, other: &Matrix<T, D>, epsilon: T::Epsilon) -> bool
    where
        T: AbsDiffEq,
        T::Epsilon: Clone,
    {
        <Self as AbsDiffEq>::abs_diff_eq(self, other, epsilon)
    }

    /// A test for equality that uses an elementwise relative comparison if
    /// the values are far apart; and the absolute difference otherwise.
    ///
    /// **Requires crate feature `"approx"`**
    pub fn relative_eq(
        &self,
        other: &Matrix<T, D>,
        epsilon: T::Epsilon,
        max_relative: T::Epsilon,
    ) -> bool
    where
        T: RelativeEq,
        T::Epsilon: Clone,
    {
        <Self as RelativeEq>::relative_eq(self, other, epsilon, max_relative)
    }
}

/// **Requires crate feature `"approx"`.**
impl<T, D> AbsDiffEq for Matrix<T, D>
where
    T: AbsDiffEq,
    T::Epsilon: Clone,
    D: Dimension,
{
    type Epsilon = T::Epsilon;

    fn default_epsilon() -> T::Epsilon {
        T::default_epsilon()
    }

    fn abs_diff_eq(&self, other: &Matrix<T, D>, epsilon: T::Epsilon) -> bool {
        D::zip_all(&self.data, &other.data, &mut |a, b| T::abs_diff_eq(a, b, epsilon.clone()))
    }
}

/// **Requires crate feature `"approx"`.**
impl<T, D> RelativeEq for Matrix<T, D>
where
    T: RelativeEq,
    T::Epsilon: Clone,
    D: Dimension,
{
    fn default_max_relative() -> T::Epsilon {
        T::default_max_relative()
    }

    fn relative_eq(
        &self,
        other: &Matrix<T, D>,
        epsilon: T::Epsilon,
        max_relative: T::Epsilon,
    ) -> bool {
        D::zip_all(&self.data, &other.data, &mut |a, b| {
            T::relative_eq(a, b, epsilon.clone(), max_relative.clone())
        })
    }
}

/// **Requires crate feature `"approx"`.**
impl<T, D> UlpsEq for Matrix<T, D>
where
    T: UlpsEq,
    T::Epsilon: Clone,
    D: Dimension,
{
    fn default_max_ulps() -> u32 {
        T::default_max_ulps()
    }

    fn ulps_eq(&self, other: &Matrix<T, D>, epsilon: T::Epsilon, max_ulps: u32) -> bool {
        D::zip_all(&self.data, &other.data, &mut |a, b| T::ulps_eq(a, b, epsilon.clone(), max_ulps))
    }
}

#[cfg(test)]
mod tests {
    use crate::{Matrix1, Matrix2};
    use approx::{
        assert_abs_diff_eq, assert_abs_diff_ne, assert_relative_eq, assert_relative_ne,
        assert_ulps_eq, assert_ulps_ne,
    };

    #[test]
    fn abs_diff_eq() {
        let a: Matrix2<f32, 2, 2> = matrix![[0., 2.], [-0.000010001, 100000000.]];
        let mut b: Matrix2<f32, 2, 2> = matrix![[0., 1.], [-0.000010002, 100000001.]];
        assert_abs_diff_ne!(a, b);
        b[0][1] = 2.;
        assert_abs_diff_eq!(a, b);

        // Check epsilon.
        let z: Matrix1<f32, 1> = matrix![0.0];
        let tiny: Matrix1<f32, 1> = matrix![1e-40];
        assert_abs_diff_eq!(z, tiny, epsilon = 1e-40f32);
        assert_abs_diff_ne!(z, tiny, epsilon = 1e-41f32);
    }

    #[test]
    fn relative_eq() {
        let a: Matrix2<f32, 2, 2> = matrix![[1., 2.], [-0.000010001, 100000000.]];
        let mut b: Matrix2<f32, 2, 2> = matrix![[1., 1.], [-0.000010002, 100000001.]];
        assert_relative_ne!(a, b);
        b[0][1] = 2.;
        assert_relative_eq!(a, b);
        assert!(a.relative_eq(&b, 1e-6, 1e-6));
    }

    #[test]
    fn ulps_eq() {
        let a: Matrix2<f32, 2, 2> = matrix![[1., 2.], [-0.000010001, 100000000.]];
        let mut b: Matrix2<f32, 2, 2> = matrix![[1., 1.], [-0.000010002, 100000001.]];
        assert_ulps_ne!(a, b);
        b[0][1] = 2.;
        assert_ulps_eq!(a, b);
    }
}
