// Copyright 2014-2016 bluss and ndarray developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Iterators over the first axis of a matrix or matrix view.

use core::cmp::Ordering;
use core::fmt;
use core::iter::FusedIterator;
use core::slice;

use crate::dimension::Dimension;

/// An iterator over the first axis of a matrix or [`MatrixView`].
///
/// Each item is a [`MatrixView`] of the remaining dimensions, or an element
/// reference `&'a T` when iterating the last dimension.
///
/// Iterators compare by position along the axis only. Two iterators over
/// different matrices that have advanced equally far compare equal.
///
/// ```
/// use mdmatrix::{matrix, Matrix2};
///
/// let m: Matrix2<i32, 2, 3> = matrix![[1, 2, 3], [4, 5, 6]];
/// let mut rows = m.iter();
/// assert_eq!(rows.offset(), 0);
/// let first = rows.next().unwrap();
/// assert_eq!(first.iter().copied().sum::<i32>(), 6);
/// assert_eq!(rows.offset(), 1);
/// ```
///
/// [`MatrixView`]: crate::MatrixView
pub struct Iter<'a, T: 'a, D: Dimension> {
    data: &'a [D::Elem<T>],
    index: usize,
    end: usize,
}

impl<'a, T, D: Dimension> Iter<'a, T, D> {
    pub(crate) fn new(data: &'a [D::Elem<T>]) -> Self {
        Iter {
            data,
            index: 0,
            end: data.len(),
        }
    }

    /// Return the index along the axis of the next item from the front.
    pub fn offset(&self) -> usize {
        self.index
    }
}

impl<'a, T, D: Dimension> Iterator for Iter<'a, T, D> {
    type Item = D::View<'a, T>;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        if self.index == self.end {
            return None;
        }
        let data = self.data;
        let elem = &data[self.index];
        self.index += 1;
        Some(D::view_elem(elem))
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.end - self.index;
        (len, Some(len))
    }

    #[inline]
    fn nth(&mut self, n: usize) -> Option<Self::Item> {
        self.index = self.end.min(self.index.saturating_add(n));
        self.next()
    }
}

impl<'a, T, D: Dimension> DoubleEndedIterator for Iter<'a, T, D> {
    #[inline]
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.index == self.end {
            return None;
        }
        self.end -= 1;
        let data = self.data;
        Some(D::view_elem(&data[self.end]))
    }
}

impl<'a, T, D: Dimension> ExactSizeIterator for Iter<'a, T, D> {}

impl<'a, T, D: Dimension> FusedIterator for Iter<'a, T, D> {}

impl<'a, T, D: Dimension> Clone for Iter<'a, T, D> {
    fn clone(&self) -> Self {
        Iter {
            data: self.data,
            index: self.index,
            end: self.end,
        }
    }
}

impl<'a, T, D: Dimension> PartialEq for Iter<'a, T, D> {
    fn eq(&self, other: &Self) -> bool {
        self.index == other.index
    }
}

impl<'a, T, D: Dimension> Eq for Iter<'a, T, D> {}

impl<'a, T, D: Dimension> PartialOrd for Iter<'a, T, D> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<'a, T, D: Dimension> Ord for Iter<'a, T, D> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.index.cmp(&other.index)
    }
}

impl<'a, T, D: Dimension> fmt::Debug for Iter<'a, T, D> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Iter")
            .field("offset", &self.index)
            .field("remaining", &(self.end - self.index))
            .finish()
    }
}

/// An iterator over the first axis of a matrix or [`MatrixViewMut`].
///
/// Each item is a [`MatrixViewMut`] of the remaining dimensions, or an
/// element reference `&'a mut T` when iterating the last dimension.
///
/// ```
/// use mdmatrix::Matrix2;
///
/// let mut m = Matrix2::<i32, 2, 3>::default();
/// for (i, mut row) in m.iter_mut().enumerate() {
///     row.fill(i as i32);
/// }
/// assert_eq!(m[1][2], 1);
/// ```
///
/// [`MatrixViewMut`]: crate::MatrixViewMut
pub struct IterMut<'a, T: 'a, D: Dimension> {
    inner: slice::IterMut<'a, D::Elem<T>>,
}

impl<'a, T, D: Dimension> IterMut<'a, T, D> {
    pub(crate) fn new(data: &'a mut [D::Elem<T>]) -> Self {
        IterMut {
            inner: data.iter_mut(),
        }
    }
}

impl<'a, T, D: Dimension> Iterator for IterMut<'a, T, D> {
    type Item = D::ViewMut<'a, T>;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|elem| D::view_elem_mut(elem))
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<'a, T, D: Dimension> DoubleEndedIterator for IterMut<'a, T, D> {
    #[inline]
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.next_back().map(|elem| D::view_elem_mut(elem))
    }
}

impl<'a, T, D: Dimension> ExactSizeIterator for IterMut<'a, T, D> {}

impl<'a, T, D: Dimension> FusedIterator for IterMut<'a, T, D> {}

impl<'a, T, D: Dimension> fmt::Debug for IterMut<'a, T, D> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("IterMut")
            .field("remaining", &self.inner.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use crate::{Matrix1, Matrix2};

    #[test]
    fn compares_by_position() {
        let a = Matrix2::<i32, 3, 2>::default();
        let b = Matrix2::<i32, 3, 2>::from_elem(7);
        let mut ia = a.iter();
        let mut ib = b.iter();
        assert_eq!(ia, ib);
        ia.next();
        assert!(ia > ib);
        ib.next();
        assert_eq!(ia, ib);
        assert_eq!(ia.offset(), 1);
    }

    #[test]
    fn iterator_position_with_predicate() {
        let a: Matrix1<i32, 3> = matrix![5, 6, 7];
        assert_eq!(a.iter().position(|&x| x == 6), Some(1));
        assert_eq!(a.iter().position(|&x| x == 8), None);

        let mut it = a.iter();
        it.next();
        assert_eq!(it.position(|&x| x == 7), Some(1));
        assert_eq!(it.offset(), 3);
    }

    #[test]
    fn double_ended() {
        let a: Matrix1<i32, 4> = matrix![0, 1, 2, 3];
        let mut it = a.iter().copied();
        assert_eq!(it.next(), Some(0));
        assert_eq!(it.next_back(), Some(3));
        assert_eq!(it.len(), 2);
        assert_eq!(it.next(), Some(1));
        assert_eq!(it.rev().last(), Some(2));
    }

    #[test]
    fn nth_clamps() {
        let a: Matrix1<i32, 3> = matrix![5, 6, 7];
        let mut it = a.iter();
        assert_eq!(it.nth(1), Some(&6));
        assert_eq!(it.nth(5), None);
        assert_eq!(it.next(), None);
    }
}
