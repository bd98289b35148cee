// Copyright 2014-2016 bluss and ndarray developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

use core::fmt::{self, Debug};
use core::hash::Hash;

use crate::error::ShapeError;

/// Matrix shape trait: a dimension list known at compile time.
///
/// A dimension list `[D1, D2, …, Dk]` is spelled with two types:
/// [`Leaf<D1>`](super::Leaf) for a single dimension and
/// [`Nest<D1, Tail>`](super::Nest) for `D1` followed by the list `Tail`.
/// The [`dims!`](crate::dims) macro writes the nesting for you.
///
/// The associated types resolve, for any element type `T`, what a matrix of
/// this shape stores and what indexing or iterating it yields. The methods
/// are the element-wise kernels behind every bulk operation on
/// [`Matrix`](crate::Matrix) and its views: each one handles the outermost
/// dimension and recurses into the (statically known) tail, so the whole
/// traversal is resolved at compile time.
///
/// **Note:** *This trait can not be implemented outside the crate*
pub trait Dimension: 'static + Copy + Eq + Hash + Debug + Default + Send + Sync {
    /// Number of dimensions (axes).
    const NDIM: usize;
    /// Length of the first axis.
    const LEN: usize;
    /// Total number of elements.
    const SIZE: usize;

    /// What one step of indexing yields: `T` for a single dimension, the
    /// sub-matrix of the remaining dimensions otherwise.
    type Elem<T>;
    /// Backing storage: `LEN` consecutive `Elem<T>`.
    type Storage<T>: AsRef<[Self::Elem<T>]> + AsMut<[Self::Elem<T>]>;
    /// Plain nested arrays of the same shape, e.g. `[[T; 3]; 2]`.
    type Array<T>;
    /// Read-only counterpart of `&Elem<T>`: `&T` or a sub-view.
    type View<'a, T: 'a>;
    /// Read-write counterpart of `&mut Elem<T>`: `&mut T` or a sub-view.
    type ViewMut<'a, T: 'a>;

    /// Length of `axis`, or `None` if `axis >= NDIM`.
    fn len_of(axis: usize) -> Option<usize>;

    /// Build storage by calling `f` once per element, in row-major order.
    fn from_fn<T, F>(f: &mut F) -> Self::Storage<T>
    where
        F: FnMut() -> T;

    /// Build new storage by applying `f` to every element, in row-major order.
    fn map<T, U, F>(storage: &Self::Storage<T>, f: &mut F) -> Self::Storage<U>
    where
        F: FnMut(&T) -> U;

    /// Fold every element into an accumulator, in row-major order.
    fn fold<T, B, F>(storage: &Self::Storage<T>, init: B, f: &mut F) -> B
    where
        F: FnMut(B, &T) -> B;

    /// Call `f` on every element, in row-major order.
    fn for_each_mut<T, F>(storage: &mut Self::Storage<T>, f: &mut F)
    where
        F: FnMut(&mut T);

    /// Call `f` on every pair of elements at the same index.
    fn zip_mut_with<T, U, F>(lhs: &mut Self::Storage<T>, rhs: &Self::Storage<U>, f: &mut F)
    where
        F: FnMut(&mut T, &U);

    /// Return `true` if `f` holds for every pair of elements at the same
    /// index. Stops at the first pair for which it does not.
    fn zip_all<T, U, F>(lhs: &Self::Storage<T>, rhs: &Self::Storage<U>, f: &mut F) -> bool
    where
        F: FnMut(&T, &U) -> bool;

    /// Convert plain nested arrays into storage.
    fn from_array<T>(array: Self::Array<T>) -> Self::Storage<T>;

    /// Convert storage into plain nested arrays.
    fn into_array<T>(storage: Self::Storage<T>) -> Self::Array<T>;

    /// Element at the index path `index`, one entry per axis.
    fn elem<'a, T>(storage: &'a Self::Storage<T>, index: &[usize]) -> Result<&'a T, ShapeError>;

    /// Mutable element at the index path `index`, one entry per axis.
    fn elem_mut<'a, T>(
        storage: &'a mut Self::Storage<T>,
        index: &[usize],
    ) -> Result<&'a mut T, ShapeError>;

    /// Write the storage as nested bracketed lists; `depth` is the number of
    /// enclosing brackets already written.
    fn format<T, F>(
        storage: &Self::Storage<T>,
        f: &mut fmt::Formatter<'_>,
        depth: usize,
        fmt_elem: &mut F,
    ) -> fmt::Result
    where
        F: FnMut(&T, &mut fmt::Formatter<'_>) -> fmt::Result;

    /// Borrow one storage slot as what iteration and `at` hand out.
    fn view_elem<'a, T: 'a>(elem: &'a Self::Elem<T>) -> Self::View<'a, T>;

    /// Mutably borrow one storage slot as what iteration and `at_mut` hand out.
    fn view_elem_mut<'a, T: 'a>(elem: &'a mut Self::Elem<T>) -> Self::ViewMut<'a, T>;

    private_decl! {}
}
