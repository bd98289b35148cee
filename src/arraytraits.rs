// Copyright 2014-2016 bluss and ndarray developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

use core::hash;
use core::ops::{Index, IndexMut};

use crate::dimension::Dimension;
use crate::iterators::{Iter, IterMut};
use crate::{Matrix, MatrixView, MatrixViewMut};

#[cold]
#[inline(never)]
pub(crate) fn array_out_of_bounds() -> ! {
    panic!("mdmatrix: index out of bounds");
}

/// Access the element or sub-matrix at `index` along the first axis.
///
/// **Panics** if the index is out of bounds.
impl<T, D> Index<usize> for Matrix<T, D>
where
    D: Dimension,
{
    type Output = D::Elem<T>;

    #[inline]
    fn index(&self, index: usize) -> &D::Elem<T> {
        self.get(index).unwrap_or_else(|| array_out_of_bounds())
    }
}

/// Access the element or sub-matrix at `index` along the first axis,
/// mutably.
///
/// **Panics** if the index is out of bounds.
impl<T, D> IndexMut<usize> for Matrix<T, D>
where
    D: Dimension,
{
    #[inline]
    fn index_mut(&mut self, index: usize) -> &mut D::Elem<T> {
        self.get_mut(index).unwrap_or_else(|| array_out_of_bounds())
    }
}

impl<T, D> Clone for Matrix<T, D>
where
    T: Clone,
    D: Dimension,
{
    fn clone(&self) -> Self {
        self.map(T::clone)
    }

    /// `Matrix` implements `.clone_from()` to reuse the existing storage.
    fn clone_from(&mut self, other: &Self) {
        self.zip_mut_with(other, |x, y| x.clone_from(y));
    }
}

impl<T, D> Copy for Matrix<T, D>
where
    T: Copy,
    D: Dimension,
    D::Storage<T>: Copy,
{
}

/// Return `true` if all elements of `self` and `rhs` are equal.
impl<T, D> PartialEq for Matrix<T, D>
where
    T: PartialEq,
    D: Dimension,
{
    fn eq(&self, rhs: &Self) -> bool {
        self.view() == rhs.view()
    }
}

impl<T, D> Eq for Matrix<T, D>
where
    T: Eq,
    D: Dimension,
{
}

/// Return `true` if all viewed elements of `self` and `rhs` are equal.
impl<'a, 'b, T, D> PartialEq<MatrixView<'b, T, D>> for MatrixView<'a, T, D>
where
    T: PartialEq,
    D: Dimension,
{
    fn eq(&self, rhs: &MatrixView<'b, T, D>) -> bool {
        D::zip_all(self.data, rhs.data, &mut |a, b| a == b)
    }
}

impl<'a, T, D> Eq for MatrixView<'a, T, D>
where
    T: Eq,
    D: Dimension,
{
}

impl<'a, T, D> PartialEq<Matrix<T, D>> for MatrixView<'a, T, D>
where
    T: PartialEq,
    D: Dimension,
{
    fn eq(&self, rhs: &Matrix<T, D>) -> bool {
        *self == rhs.view()
    }
}

impl<'a, T, D> PartialEq<MatrixView<'a, T, D>> for Matrix<T, D>
where
    T: PartialEq,
    D: Dimension,
{
    fn eq(&self, rhs: &MatrixView<'a, T, D>) -> bool {
        self.view() == *rhs
    }
}

impl<'a, T, D> PartialEq for MatrixViewMut<'a, T, D>
where
    T: PartialEq,
    D: Dimension,
{
    fn eq(&self, rhs: &Self) -> bool {
        self.view() == rhs.view()
    }
}

impl<T, D> hash::Hash for Matrix<T, D>
where
    T: hash::Hash,
    D: Dimension,
{
    fn hash<H: hash::Hasher>(&self, state: &mut H) {
        self.for_each(|elt| elt.hash(state))
    }
}

impl<'a, T, D> IntoIterator for &'a Matrix<T, D>
where
    D: Dimension,
{
    type Item = D::View<'a, T>;
    type IntoIter = Iter<'a, T, D>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a, T, D> IntoIterator for &'a mut Matrix<T, D>
where
    D: Dimension,
{
    type Item = D::ViewMut<'a, T>;
    type IntoIter = IterMut<'a, T, D>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter_mut()
    }
}
