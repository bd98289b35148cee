// Copyright 2014-2016 bluss and ndarray developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

use crate::dimension::Dimension;
use crate::error::ShapeError;
use crate::iterators::{Iter, IterMut};
use crate::{Matrix, MatrixView, MatrixViewMut};

/// # Methods For All Matrices
impl<T, D> Matrix<T, D>
where
    D: Dimension,
{
    /// Return the total number of elements in the matrix.
    pub const fn size(&self) -> usize {
        D::SIZE
    }

    /// Return the length of the first axis, which is also the number of
    /// items produced by [`.iter()`](Self::iter).
    pub const fn len(&self) -> usize {
        D::LEN
    }

    /// Return whether the matrix has no elements.
    pub const fn is_empty(&self) -> bool {
        D::SIZE == 0
    }

    /// Return the number of dimensions (axes) in the matrix.
    pub const fn ndim(&self) -> usize {
        D::NDIM
    }

    /// Return the length of `axis`.
    ///
    /// **Panics** if the axis is out of bounds.
    pub fn len_of(&self, axis: usize) -> usize {
        D::len_of(axis)
            .unwrap_or_else(|| panic!("axis {} out of bounds for {} dimensions", axis, D::NDIM))
    }

    /// Return the length of every axis, outermost first.
    ///
    /// ```
    /// use mdmatrix::Matrix3;
    ///
    /// let a = Matrix3::<u8, 2, 3, 4>::default();
    /// assert!(a.shape().eq([2, 3, 4]));
    /// ```
    pub fn shape(&self) -> impl Iterator<Item = usize> + Clone {
        (0..D::NDIM).filter_map(D::len_of)
    }

    /// Return a read-only view of the matrix.
    pub fn view(&self) -> MatrixView<'_, T, D> {
        MatrixView::new(&self.data)
    }

    /// Return a read-write view of the matrix.
    pub fn view_mut(&mut self) -> MatrixViewMut<'_, T, D> {
        MatrixViewMut::new(&mut self.data)
    }

    /// Return the storage slots along the first axis: elements for a
    /// one-dimensional matrix, sub-matrices otherwise.
    pub fn as_slice(&self) -> &[D::Elem<T>] {
        self.data.as_ref()
    }

    /// Return the storage slots along the first axis, mutably.
    pub fn as_slice_mut(&mut self) -> &mut [D::Elem<T>] {
        self.data.as_mut()
    }

    /// Return a reference to the storage.
    pub fn as_storage(&self) -> &D::Storage<T> {
        &self.data
    }

    /// Return a reference to the element or sub-matrix at `index` along the
    /// first axis, or `None` if the index is out of bounds.
    pub fn get(&self, index: usize) -> Option<&D::Elem<T>> {
        self.as_slice().get(index)
    }

    /// Return a mutable reference to the element or sub-matrix at `index`
    /// along the first axis, or `None` if the index is out of bounds.
    pub fn get_mut(&mut self, index: usize) -> Option<&mut D::Elem<T>> {
        self.as_slice_mut().get_mut(index)
    }

    /// Return a reference to the element at the full index path `index`.
    ///
    /// **Errors** with `IncompatibleShape` if `index` does not have one entry
    /// per axis, and with `OutOfBounds` if an entry is too large for its axis.
    ///
    /// ```
    /// use mdmatrix::{ErrorKind, Matrix3};
    ///
    /// let a = Matrix3::<i32, 2, 3, 4>::from_fn(|i| i as i32);
    /// assert_eq!(a.elem(&[1, 2, 3]), Ok(&23));
    /// assert_eq!(a.elem(&[1, 3, 0]).unwrap_err().kind(), ErrorKind::OutOfBounds);
    /// assert_eq!(a.elem(&[1, 2]).unwrap_err().kind(), ErrorKind::IncompatibleShape);
    /// ```
    pub fn elem(&self, index: &[usize]) -> Result<&T, ShapeError> {
        D::elem(&self.data, index)
    }

    /// Return a mutable reference to the element at the full index path
    /// `index`; errors as [`.elem()`](Self::elem).
    pub fn elem_mut(&mut self, index: &[usize]) -> Result<&mut T, ShapeError> {
        D::elem_mut(&mut self.data, index)
    }

    /// Return an iterator over the first axis.
    ///
    /// Items are [`MatrixView`]s of the remaining dimensions, or element
    /// references for a one-dimensional matrix.
    pub fn iter(&self) -> Iter<'_, T, D> {
        Iter::new(self.as_slice())
    }

    /// Return an iterator over the first axis that yields
    /// [`MatrixViewMut`]s of the remaining dimensions, or mutable element
    /// references for a one-dimensional matrix.
    pub fn iter_mut(&mut self) -> IterMut<'_, T, D> {
        IterMut::new(self.as_slice_mut())
    }

    /// Call `f` by reference on each element, in row-major order.
    pub fn for_each<F>(&self, f: F)
    where
        F: FnMut(&T),
    {
        self.view().for_each(f)
    }

    /// Fold over every element, in row-major order.
    ///
    /// ```
    /// use mdmatrix::{matrix, Matrix2};
    ///
    /// let a: Matrix2<i32, 2, 2> = matrix![[1, 2], [3, 4]];
    /// assert_eq!(a.fold(0, |acc, &x| acc + x), 10);
    /// ```
    pub fn fold<B, F>(&self, init: B, f: F) -> B
    where
        F: FnMut(B, &T) -> B,
    {
        self.view().fold(init, f)
    }

    /// Call `f` by reference on each element and create a new matrix with
    /// the new values.
    pub fn map<U, F>(&self, f: F) -> Matrix<U, D>
    where
        F: FnMut(&T) -> U,
    {
        self.view().map(f)
    }

    /// Modify the matrix in place by calling `f` by mutable reference on each
    /// element.
    pub fn map_inplace<F>(&mut self, f: F)
    where
        F: FnMut(&mut T),
    {
        self.view_mut().map_inplace(f)
    }

    /// Set every element of the matrix to a clone of `x`.
    pub fn fill(&mut self, x: T)
    where
        T: Clone,
    {
        self.view_mut().fill(x)
    }

    /// Call `f` on each pair of elements at the same index of `self` and
    /// `rhs`, with the element of `self` mutable.
    pub fn zip_mut_with<U, F>(&mut self, rhs: &Matrix<U, D>, f: F)
    where
        F: FnMut(&mut T, &U),
    {
        self.view_mut().zip_mut_with(rhs.view(), f)
    }
}
