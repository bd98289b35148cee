// Copyright 2014-2016 bluss and ndarray developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

use core::ops::{Index, IndexMut};

use crate::arraytraits::array_out_of_bounds;
use crate::dimension::Dimension;
use crate::iterators::{Iter, IterMut};
use crate::{Matrix, MatrixView, MatrixViewMut};

/// Methods for read-only matrix views.
///
/// Everything handed out by a `MatrixView<'a, ..>` borrows the underlying
/// storage for `'a`, not the view itself, so results can outlive the view.
///
/// ```
/// use mdmatrix::{matrix, Matrix2};
///
/// let m: Matrix2<i32, 2, 2> = matrix![[1, 2], [3, 4]];
/// let row = {
///     let view = m.view();
///     view.at(1)
/// };
/// assert_eq!(row[0], 3);
/// ```
impl<'a, T, D> MatrixView<'a, T, D>
where
    D: Dimension,
{
    #[inline]
    pub(crate) fn new(data: &'a D::Storage<T>) -> Self {
        MatrixView { data }
    }

    /// Return the total number of elements.
    pub const fn size(&self) -> usize {
        D::SIZE
    }

    /// Return the length of the first axis.
    pub const fn len(&self) -> usize {
        D::LEN
    }

    /// Return whether the view has no elements.
    pub const fn is_empty(&self) -> bool {
        D::SIZE == 0
    }

    /// Return the number of dimensions (axes).
    pub const fn ndim(&self) -> usize {
        D::NDIM
    }

    /// Return the storage slots along the first axis.
    pub fn as_slice(&self) -> &'a [D::Elem<T>] {
        self.data.as_ref()
    }

    /// Return the element or sub-view at `index` along the first axis, or
    /// `None` if the index is out of bounds.
    pub fn get(&self, index: usize) -> Option<D::View<'a, T>> {
        self.as_slice().get(index).map(|elem| D::view_elem(elem))
    }

    /// Return the element or sub-view at `index` along the first axis.
    ///
    /// **Panics** if the index is out of bounds.
    pub fn at(&self, index: usize) -> D::View<'a, T> {
        match self.get(index) {
            Some(elem) => elem,
            None => array_out_of_bounds(),
        }
    }

    /// Return an iterator over the first axis.
    pub fn iter(&self) -> Iter<'a, T, D> {
        Iter::new(self.as_slice())
    }

    /// Call `f` by reference on each element, in row-major order.
    pub fn for_each<F>(&self, mut f: F)
    where
        F: FnMut(&T),
    {
        D::fold(self.data, (), &mut |(), elem| f(elem))
    }

    /// Fold over every element, in row-major order.
    pub fn fold<B, F>(&self, init: B, mut f: F) -> B
    where
        F: FnMut(B, &T) -> B,
    {
        D::fold(self.data, init, &mut f)
    }

    /// Call `f` by reference on each element and create a new matrix with
    /// the new values.
    pub fn map<U, F>(&self, mut f: F) -> Matrix<U, D>
    where
        F: FnMut(&T) -> U,
    {
        Matrix::from_storage(D::map(self.data, &mut f))
    }

    /// Return an owned copy of the viewed elements.
    pub fn to_owned(&self) -> Matrix<T, D>
    where
        T: Clone,
    {
        self.map(T::clone)
    }
}

/// Methods for read-write matrix views.
impl<'a, T, D> MatrixViewMut<'a, T, D>
where
    D: Dimension,
{
    #[inline]
    pub(crate) fn new(data: &'a mut D::Storage<T>) -> Self {
        MatrixViewMut { data }
    }

    /// Return the total number of elements.
    pub const fn size(&self) -> usize {
        D::SIZE
    }

    /// Return the length of the first axis.
    pub const fn len(&self) -> usize {
        D::LEN
    }

    /// Return whether the view has no elements.
    pub const fn is_empty(&self) -> bool {
        D::SIZE == 0
    }

    /// Return the number of dimensions (axes).
    pub const fn ndim(&self) -> usize {
        D::NDIM
    }

    /// Return a read-only view of the same storage, borrowing `self`.
    pub fn view(&self) -> MatrixView<'_, T, D> {
        MatrixView::new(&*self.data)
    }

    /// Return a shorter-lived read-write view of the same storage.
    pub fn view_mut(&mut self) -> MatrixViewMut<'_, T, D> {
        MatrixViewMut::new(&mut *self.data)
    }

    /// Convert into a read-only view with the full lifetime `'a`.
    pub fn into_view(self) -> MatrixView<'a, T, D> {
        MatrixView::new(self.data)
    }

    /// Return the storage slots along the first axis.
    pub fn as_slice(&self) -> &[D::Elem<T>] {
        (*self.data).as_ref()
    }

    /// Return the storage slots along the first axis, mutably.
    pub fn as_slice_mut(&mut self) -> &mut [D::Elem<T>] {
        (*self.data).as_mut()
    }

    /// Convert into the storage slots along the first axis.
    pub fn into_slice(self) -> &'a mut [D::Elem<T>] {
        self.data.as_mut()
    }

    /// Return the element or sub-view at `index` along the first axis, or
    /// `None` if the index is out of bounds.
    pub fn get(&self, index: usize) -> Option<D::View<'_, T>> {
        self.as_slice().get(index).map(|elem| D::view_elem(elem))
    }

    /// Return the mutable element or sub-view at `index` along the first
    /// axis, or `None` if the index is out of bounds.
    pub fn get_mut(&mut self, index: usize) -> Option<D::ViewMut<'_, T>> {
        self.as_slice_mut().get_mut(index).map(|elem| D::view_elem_mut(elem))
    }

    /// Return the element or sub-view at `index` along the first axis.
    ///
    /// **Panics** if the index is out of bounds.
    pub fn at(&self, index: usize) -> D::View<'_, T> {
        match self.get(index) {
            Some(elem) => elem,
            None => array_out_of_bounds(),
        }
    }

    /// Return the mutable element or sub-view at `index` along the first
    /// axis.
    ///
    /// **Panics** if the index is out of bounds.
    pub fn at_mut(&mut self, index: usize) -> D::ViewMut<'_, T> {
        match self.get_mut(index) {
            Some(elem) => elem,
            None => array_out_of_bounds(),
        }
    }

    /// Consume the view and return the mutable element or sub-view at
    /// `index` along the first axis, borrowing the storage for `'a`.
    ///
    /// **Panics** if the index is out of bounds.
    ///
    /// ```
    /// use mdmatrix::Matrix3;
    ///
    /// let mut m = Matrix3::<i32, 2, 2, 2>::default();
    /// let mut plane = m.view_mut().into_at(1);
    /// *plane.at_mut(0).at_mut(1) = 5;
    /// assert_eq!(m[1][0][1], 5);
    /// ```
    pub fn into_at(self, index: usize) -> D::ViewMut<'a, T> {
        match self.into_slice().get_mut(index) {
            Some(elem) => D::view_elem_mut(elem),
            None => array_out_of_bounds(),
        }
    }

    /// Return an iterator over the first axis.
    pub fn iter(&self) -> Iter<'_, T, D> {
        Iter::new(self.as_slice())
    }

    /// Return a mutable iterator over the first axis.
    pub fn iter_mut(&mut self) -> IterMut<'_, T, D> {
        IterMut::new(self.as_slice_mut())
    }

    /// Modify the viewed elements in place by calling `f` by mutable
    /// reference on each element.
    pub fn map_inplace<F>(&mut self, mut f: F)
    where
        F: FnMut(&mut T),
    {
        D::for_each_mut(&mut *self.data, &mut f)
    }

    /// Set every viewed element to a clone of `x`.
    pub fn fill(&mut self, x: T)
    where
        T: Clone,
    {
        self.map_inplace(move |elt| *elt = x.clone())
    }

    /// Call `f` on each pair of elements at the same index of `self` and
    /// `rhs`, with the element of `self` mutable.
    ///
    /// This is the kernel of the element-wise operators: it descends one
    /// dimension at a time down to the elements.
    pub fn zip_mut_with<U, F>(&mut self, rhs: MatrixView<'_, U, D>, mut f: F)
    where
        F: FnMut(&mut T, &U),
    {
        D::zip_mut_with(&mut *self.data, rhs.data, &mut f)
    }

    /// Return an owned copy of the viewed elements.
    pub fn to_owned(&self) -> Matrix<T, D>
    where
        T: Clone,
    {
        self.view().to_owned()
    }
}

impl<'a, T, D: Dimension> Clone for MatrixView<'a, T, D> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<'a, T, D: Dimension> Copy for MatrixView<'a, T, D> {}

impl<'a, T, D: Dimension> Index<usize> for MatrixView<'a, T, D> {
    type Output = D::Elem<T>;

    /// **Panics** if the index is out of bounds.
    #[inline]
    fn index(&self, index: usize) -> &D::Elem<T> {
        self.as_slice()
            .get(index)
            .unwrap_or_else(|| array_out_of_bounds())
    }
}

impl<'a, T, D: Dimension> Index<usize> for MatrixViewMut<'a, T, D> {
    type Output = D::Elem<T>;

    /// **Panics** if the index is out of bounds.
    #[inline]
    fn index(&self, index: usize) -> &D::Elem<T> {
        self.as_slice()
            .get(index)
            .unwrap_or_else(|| array_out_of_bounds())
    }
}

impl<'a, T, D: Dimension> IndexMut<usize> for MatrixViewMut<'a, T, D> {
    /// **Panics** if the index is out of bounds.
    #[inline]
    fn index_mut(&mut self, index: usize) -> &mut D::Elem<T> {
        self.as_slice_mut()
            .get_mut(index)
            .unwrap_or_else(|| array_out_of_bounds())
    }
}

impl<'a, T, D: Dimension> From<&'a Matrix<T, D>> for MatrixView<'a, T, D> {
    fn from(matrix: &'a Matrix<T, D>) -> Self {
        matrix.view()
    }
}

impl<'a, T, D: Dimension> From<&'a mut Matrix<T, D>> for MatrixViewMut<'a, T, D> {
    fn from(matrix: &'a mut Matrix<T, D>) -> Self {
        matrix.view_mut()
    }
}

impl<'a, T, D: Dimension> From<MatrixViewMut<'a, T, D>> for MatrixView<'a, T, D> {
    fn from(view: MatrixViewMut<'a, T, D>) -> Self {
        view.into_view()
    }
}

impl<'a, T, D: Dimension> IntoIterator for MatrixView<'a, T, D> {
    type Item = D::View<'a, T>;
    type IntoIter = Iter<'a, T, D>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a, T, D: Dimension> IntoIterator for MatrixViewMut<'a, T, D> {
    type Item = D::ViewMut<'a, T>;
    type IntoIter = IterMut<'a, T, D>;

    fn into_iter(self) -> Self::IntoIter {
        IterMut::new(self.into_slice())
    }
}
