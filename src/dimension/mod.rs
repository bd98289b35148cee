// Copyright 2014-2016 bluss and ndarray developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Compile-time dimension lists.
//!
//! A shape `[D1, …, Dk]` is the type `Nest<D1, … Nest<Dk-1, Leaf<Dk>>>`;
//! see [`Dimension`] for what each list resolves to.

use core::fmt;
use core::marker::PhantomData;

use crate::error::{from_kind, ErrorKind, ShapeError};
use crate::{Matrix, MatrixView, MatrixViewMut};

pub use self::dimension_trait::Dimension;

mod dimension_trait;

/// A single dimension of length `N`; also the last dimension of every
/// longer list.
///
/// Storage is `[T; N]` and indexing yields elements.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Leaf<const N: usize>;

/// A dimension of length `N` followed by the dimension list `D`.
///
/// Storage is `[Matrix<T, D>; N]`: every slot is a complete sub-matrix.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Nest<const N: usize, D>(PhantomData<D>);

impl<const N: usize> Dimension for Leaf<N> {
    const NDIM: usize = 1;
    const LEN: usize = N;
    const SIZE: usize = N;

    type Elem<T> = T;
    type Storage<T> = [T; N];
    type Array<T> = [T; N];
    type View<'a, T: 'a> = &'a T;
    type ViewMut<'a, T: 'a> = &'a mut T;

    #[inline]
    fn len_of(axis: usize) -> Option<usize> {
        match axis {
            0 => Some(N),
            _ => None,
        }
    }

    #[inline]
    fn from_fn<T, F>(f: &mut F) -> [T; N]
    where
        F: FnMut() -> T,
    {
        core::array::from_fn(|_| f())
    }

    #[inline]
    fn map<T, U, F>(storage: &[T; N], f: &mut F) -> [U; N]
    where
        F: FnMut(&T) -> U,
    {
        core::array::from_fn(|i| f(&storage[i]))
    }

    #[inline]
    fn fold<T, B, F>(storage: &[T; N], init: B, f: &mut F) -> B
    where
        F: FnMut(B, &T) -> B,
    {
        storage.iter().fold(init, |acc, elem| f(acc, elem))
    }

    #[inline]
    fn for_each_mut<T, F>(storage: &mut [T; N], f: &mut F)
    where
        F: FnMut(&mut T),
    {
        for elem in storage {
            f(elem);
        }
    }

    #[inline]
    fn zip_mut_with<T, U, F>(lhs: &mut [T; N], rhs: &[U; N], f: &mut F)
    where
        F: FnMut(&mut T, &U),
    {
        for (a, b) in lhs.iter_mut().zip(rhs) {
            f(a, b);
        }
    }

    #[inline]
    fn zip_all<T, U, F>(lhs: &[T; N], rhs: &[U; N], f: &mut F) -> bool
    where
        F: FnMut(&T, &U) -> bool,
    {
        lhs.iter().zip(rhs).all(|(a, b)| f(a, b))
    }

    #[inline]
    fn from_array<T>(array: [T; N]) -> [T; N] {
        array
    }

    #[inline]
    fn into_array<T>(storage: [T; N]) -> [T; N] {
        storage
    }

    fn elem<'a, T>(storage: &'a [T; N], index: &[usize]) -> Result<&'a T, ShapeError> {
        match *index {
            [i] => storage.get(i).ok_or_else(|| from_kind(ErrorKind::OutOfBounds)),
            _ => Err(from_kind(ErrorKind::IncompatibleShape)),
        }
    }

    fn elem_mut<'a, T>(storage: &'a mut [T; N], index: &[usize]) -> Result<&'a mut T, ShapeError> {
        match *index {
            [i] => storage.get_mut(i).ok_or_else(|| from_kind(ErrorKind::OutOfBounds)),
            _ => Err(from_kind(ErrorKind::IncompatibleShape)),
        }
    }

    fn format<T, F>(
        storage: &[T; N],
        f: &mut fmt::Formatter<'_>,
        _depth: usize,
        fmt_elem: &mut F,
    ) -> fmt::Result
    where
        F: FnMut(&T, &mut fmt::Formatter<'_>) -> fmt::Result,
    {
        f.write_str("[")?;
        for (i, elem) in storage.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            fmt_elem(elem, f)?;
        }
        f.write_str("]")
    }

    #[inline]
    fn view_elem<'a, T: 'a>(elem: &'a T) -> &'a T {
        elem
    }

    #[inline]
    fn view_elem_mut<'a, T: 'a>(elem: &'a mut T) -> &'a mut T {
        elem
    }

    private_impl! {}
}

impl<const N: usize, D: Dimension> Dimension for Nest<N, D> {
    const NDIM: usize = D::NDIM + 1;
    const LEN: usize = N;
    const SIZE: usize = N * D::SIZE;

    type Elem<T> = Matrix<T, D>;
    type Storage<T> = [Matrix<T, D>; N];
    type Array<T> = [D::Array<T>; N];
    type View<'a, T: 'a> = MatrixView<'a, T, D>;
    type ViewMut<'a, T: 'a> = MatrixViewMut<'a, T, D>;

    #[inline]
    fn len_of(axis: usize) -> Option<usize> {
        match axis {
            0 => Some(N),
            _ => D::len_of(axis - 1),
        }
    }

    #[inline]
    fn from_fn<T, F>(f: &mut F) -> [Matrix<T, D>; N]
    where
        F: FnMut() -> T,
    {
        core::array::from_fn(|_| Matrix { data: D::from_fn(f) })
    }

    #[inline]
    fn map<T, U, F>(storage: &[Matrix<T, D>; N], f: &mut F) -> [Matrix<U, D>; N]
    where
        F: FnMut(&T) -> U,
    {
        core::array::from_fn(|i| Matrix {
            data: D::map(&storage[i].data, f),
        })
    }

    #[inline]
    fn fold<T, B, F>(storage: &[Matrix<T, D>; N], init: B, f: &mut F) -> B
    where
        F: FnMut(B, &T) -> B,
    {
        storage.iter().fold(init, |acc, sub| D::fold(&sub.data, acc, f))
    }

    #[inline]
    fn for_each_mut<T, F>(storage: &mut [Matrix<T, D>; N], f: &mut F)
    where
        F: FnMut(&mut T),
    {
        for sub in storage {
            D::for_each_mut(&mut sub.data, f);
        }
    }

    #[inline]
    fn zip_mut_with<T, U, F>(lhs: &mut [Matrix<T, D>; N], rhs: &[Matrix<U, D>; N], f: &mut F)
    where
        F: FnMut(&mut T, &U),
    {
        for (a, b) in lhs.iter_mut().zip(rhs) {
            D::zip_mut_with(&mut a.data, &b.data, f);
        }
    }

    #[inline]
    fn zip_all<T, U, F>(lhs: &[Matrix<T, D>; N], rhs: &[Matrix<U, D>; N], f: &mut F) -> bool
    where
        F: FnMut(&T, &U) -> bool,
    {
        lhs.iter().zip(rhs).all(|(a, b)| D::zip_all(&a.data, &b.data, f))
    }

    #[inline]
    fn from_array<T>(array: [D::Array<T>; N]) -> [Matrix<T, D>; N] {
        array.map(|sub| Matrix {
            data: D::from_array(sub),
        })
    }

    #[inline]
    fn into_array<T>(storage: [Matrix<T, D>; N]) -> [D::Array<T>; N] {
        storage.map(|sub| D::into_array(sub.data))
    }

    fn elem<'a, T>(storage: &'a [Matrix<T, D>; N], index: &[usize]) -> Result<&'a T, ShapeError> {
        let (&i, rest) = index
            .split_first()
            .ok_or_else(|| from_kind(ErrorKind::IncompatibleShape))?;
        let sub = storage.get(i).ok_or_else(|| from_kind(ErrorKind::OutOfBounds))?;
        D::elem(&sub.data, rest)
    }

    fn elem_mut<'a, T>(
        storage: &'a mut [Matrix<T, D>; N],
        index: &[usize],
    ) -> Result<&'a mut T, ShapeError> {
        let (&i, rest) = index
            .split_first()
            .ok_or_else(|| from_kind(ErrorKind::IncompatibleShape))?;
        let sub = storage
            .get_mut(i)
            .ok_or_else(|| from_kind(ErrorKind::OutOfBounds))?;
        D::elem_mut(&mut sub.data, rest)
    }

    fn format<T, F>(
        storage: &[Matrix<T, D>; N],
        f: &mut fmt::Formatter<'_>,
        depth: usize,
        fmt_elem: &mut F,
    ) -> fmt::Result
    where
        F: FnMut(&T, &mut fmt::Formatter<'_>) -> fmt::Result,
    {
        f.write_str("[")?;
        for (i, sub) in storage.iter().enumerate() {
            if i > 0 {
                // continue on a new line, aligned under the opening bracket
                f.write_str(",\n")?;
                for _ in 0..=depth {
                    f.write_str(" ")?;
                }
            }
            D::format(&sub.data, f, depth + 1, fmt_elem)?;
        }
        f.write_str("]")
    }

    #[inline]
    fn view_elem<'a, T: 'a>(elem: &'a Matrix<T, D>) -> MatrixView<'a, T, D> {
        elem.view()
    }

    #[inline]
    fn view_elem_mut<'a, T: 'a>(elem: &'a mut Matrix<T, D>) -> MatrixViewMut<'a, T, D> {
        elem.view_mut()
    }

    private_impl! {}
}

#[cfg(test)]
mod tests {
    use super::{Dimension, Leaf, Nest};
    use crate::error::ErrorKind;

    type D3 = Nest<2, Nest<3, Leaf<4>>>;

    #[test]
    fn constants() {
        assert_eq!(Leaf::<5>::NDIM, 1);
        assert_eq!(Leaf::<5>::LEN, 5);
        assert_eq!(Leaf::<5>::SIZE, 5);
        assert_eq!(D3::NDIM, 3);
        assert_eq!(D3::LEN, 2);
        assert_eq!(D3::SIZE, 24);
    }

    #[test]
    fn len_of_axes() {
        assert_eq!(D3::len_of(0), Some(2));
        assert_eq!(D3::len_of(1), Some(3));
        assert_eq!(D3::len_of(2), Some(4));
        assert_eq!(D3::len_of(3), None);
        assert_eq!(Leaf::<7>::len_of(1), None);
    }

    #[test]
    fn from_fn_is_row_major() {
        let mut next = 0;
        let storage = <Nest<2, Leaf<3>>>::from_fn(&mut || {
            next += 1;
            next
        });
        assert_eq!(<Nest<2, Leaf<3>>>::into_array(storage), [[1, 2, 3], [4, 5, 6]]);
    }

    #[test]
    fn fold_visits_every_element() {
        let storage = D3::from_fn(&mut || 1u32);
        assert_eq!(D3::fold(&storage, 0, &mut |acc, x| acc + x), 24);
    }

    #[test]
    fn zip_all_stops_early() {
        let a = <Nest<2, Leaf<2>>>::from_array([[1, 2], [3, 4]]);
        let b = <Nest<2, Leaf<2>>>::from_array([[1, 0], [3, 4]]);
        let mut calls = 0;
        let equal = <Nest<2, Leaf<2>>>::zip_all(&a, &b, &mut |x, y| {
            calls += 1;
            x == y
        });
        assert!(!equal);
        assert_eq!(calls, 2);
    }

    #[test]
    fn elem_paths() {
        let storage = <Nest<2, Leaf<2>>>::from_array([[1, 2], [3, 4]]);
        assert_eq!(<Nest<2, Leaf<2>>>::elem(&storage, &[1, 0]), Ok(&3));
        assert_eq!(
            <Nest<2, Leaf<2>>>::elem(&storage, &[2, 0]).unwrap_err().kind(),
            ErrorKind::OutOfBounds
        );
        assert_eq!(
            <Nest<2, Leaf<2>>>::elem(&storage, &[1]).unwrap_err().kind(),
            ErrorKind::IncompatibleShape
        );
        assert_eq!(
            <Nest<2, Leaf<2>>>::elem(&storage, &[1, 0, 0]).unwrap_err().kind(),
            ErrorKind::IncompatibleShape
        );
    }
}
