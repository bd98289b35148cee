// Copyright 2014-2016 bluss and ndarray developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Sealing for [`Dimension`](crate::Dimension): only `Leaf` and `Nest` may
//! implement it, so the storage kernels can grow without a breaking change.

/// Public but unreachable, so no other crate can name it.
pub struct PrivateMarker;

macro_rules! private_decl {
    () => {
        /// Implementing this trait outside of `mdmatrix` is not possible.
        #[doc(hidden)]
        fn __private__(&self) -> crate::private::PrivateMarker;
    };
}

macro_rules! private_impl {
    () => {
        fn __private__(&self) -> crate::private::PrivateMarker {
            crate::private::PrivateMarker
        }
    };
}
