// Copyright 2014-2016 bluss and ndarray developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.
use core::fmt;

/// An error related to matrix shape or indexing at runtime.
///
/// Shapes are part of the matrix type, so this only comes up where runtime
/// data meets a fixed shape: building a matrix from a slice, or looking up
/// an element by an index path.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ShapeError {
    // we want to be able to change this representation later
    repr: ErrorKind,
}

impl ShapeError {
    /// Return the `ErrorKind` of this error.
    #[inline]
    pub fn kind(&self) -> ErrorKind {
        self.repr
    }

    /// Create a new `ShapeError`
    pub fn from_kind(error: ErrorKind) -> Self {
        from_kind(error)
    }
}

/// Error code for an error related to matrix shape or indexing.
///
/// This enumeration is not exhaustive. The representation of the enum
/// is not guaranteed.
#[non_exhaustive]
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// incompatible shape: wrong number of elements or of index entries
    IncompatibleShape = 1,
    /// an index entry is not less than the length of its axis
    OutOfBounds,
}

#[inline(always)]
pub(crate) fn from_kind(k: ErrorKind) -> ShapeError {
    ShapeError { repr: k }
}

#[cfg(feature = "std")]
impl std::error::Error for ShapeError {}

impl fmt::Display for ShapeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let description = match self.kind() {
            ErrorKind::IncompatibleShape => "incompatible shape",
            ErrorKind::OutOfBounds => "index out of bounds",
        };
        write!(f, "ShapeError/{:?}: {}", self.kind(), description)
    }
}
