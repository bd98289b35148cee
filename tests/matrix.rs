extern crate defmac;
extern crate mdmatrix;
extern crate num_complex;

use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

use defmac::defmac;
use mdmatrix::prelude::*;
use mdmatrix::{ErrorKind, ShapeError};
use num_complex::Complex;

defmac!(hash_of m => {
    let mut hasher = DefaultHasher::new();
    m.hash(&mut hasher);
    hasher.finish()
});

#[test]
fn shape_and_size() {
    let a = Matrix4::<u8, 2, 3, 4, 5>::default();
    assert_eq!(a.ndim(), 4);
    assert_eq!(a.len(), 2);
    assert_eq!(a.size(), 120);
    assert!(!a.is_empty());
    assert!(a.shape().eq([2, 3, 4, 5]));
    assert_eq!(a.len_of(3), 5);
    assert_eq!(a[1].ndim(), 3);
    assert_eq!(a[1][2][3].size(), 5);
}

#[test]
#[should_panic]
fn len_of_missing_axis() {
    let a = Matrix2::<u8, 2, 3>::default();
    a.len_of(2);
}

#[test]
fn index_chain_reads_and_writes() {
    let mut m = Matrix::<i32, dims![3, 3, 3]>::default();
    m[1][2][0] = 7;
    m[0][0][2] += 3;
    assert_eq!(m[1][2][0], 7);
    assert_eq!(m.elem(&[0, 0, 2]), Ok(&3));
    assert_eq!(m.sum(), 10);

    *m.elem_mut(&[2, 1, 1]).unwrap() = -1;
    assert_eq!(m[2][1][1], -1);
}

#[test]
#[should_panic(expected = "index out of bounds")]
fn index_out_of_bounds() {
    let m = Matrix2::<i32, 2, 2>::default();
    let _elem = m[2][0];
}

#[test]
fn checked_access() {
    let mut m = Matrix2::<i32, 2, 2>::from_array([[1, 2], [3, 4]]);
    assert!(m.get(1).is_some());
    assert!(m.get(2).is_none());
    assert!(m.get_mut(5).is_none());
    assert_eq!(m.elem(&[2, 0]).unwrap_err().kind(), ErrorKind::OutOfBounds);
    assert_eq!(m.elem(&[0]).unwrap_err().kind(), ErrorKind::IncompatibleShape);
    assert_eq!(
        m.elem_mut(&[0, 0, 0]).unwrap_err(),
        ShapeError::from_kind(ErrorKind::IncompatibleShape)
    );
}

#[test]
fn constructors() {
    let z = Matrix2::<f64, 2, 3>::zeros();
    let o = Matrix2::<f64, 2, 3>::ones();
    assert_eq!(z.fold(0., |acc, &x| acc + x), 0.);
    assert_eq!(o.sum(), 6.);
    assert_eq!(&z + &o, o);

    let f = Matrix3::<usize, 2, 2, 2>::from_fn(|i| i);
    assert_eq!(f[1][0][1], 5);
    assert_eq!(f.into_array(), [[[0, 1], [2, 3]], [[4, 5], [6, 7]]]);
}

#[test]
fn from_slices() {
    let xs = [1, 2, 3, 4, 5, 6];
    let a = Matrix2::<i32, 3, 2>::from_shape_slice(&xs).unwrap();
    assert_eq!(a[2][0], 5);

    let b: Result<Matrix2<i32, 2, 3>, _> = Matrix::try_from(&xs[..]);
    assert_eq!(b.unwrap()[1][0], 4);

    let c: Result<Matrix2<i32, 2, 2>, _> = Matrix::try_from(&xs[..]);
    assert_eq!(c.unwrap_err().kind(), ErrorKind::IncompatibleShape);
}

#[test]
fn const_items() {
    const M: Matrix2<u8, 2, 3> = matrix![[1, 2, 3], [4, 5, 6]];
    static S: Matrix1<&str, 2> = matrix!["a", "b"];
    assert_eq!(M[1][1], 5);
    assert_eq!(S[1], "b");
}

#[test]
fn copy_when_elements_are_copy() {
    let a = Matrix2::<i32, 2, 2>::from_elem(3);
    let b = a;
    assert_eq!(a, b);
}

#[test]
fn clone_from_reuses_storage() {
    let src = Matrix2::<String, 2, 2>::from_elem("x".to_owned());
    let mut dst = Matrix2::<String, 2, 2>::default();
    dst.clone_from(&src);
    assert_eq!(dst, src);
    assert_eq!(dst[1][1], "x");
}

#[test]
fn equality_and_hash() {
    let a = Matrix2::<i32, 2, 3>::from_fn(|i| i as i32);
    let mut b = a.clone();
    assert_eq!(a, b);
    assert_eq!(hash_of!(&a), hash_of!(&b));

    b[1][2] = 0;
    assert_ne!(a, b);
    assert_eq!(a.view(), a);
    assert_eq!(a, a.view());
}

#[test]
fn zero_length_axis() {
    let a = Matrix2::<i32, 0, 3>::default();
    assert!(a.is_empty());
    assert_eq!(a.size(), 0);
    assert_eq!(a.len(), 0);
    assert_eq!(a.iter().count(), 0);
    assert_eq!(format!("{}", a), "[]");

    let b = Matrix2::<i32, 2, 0>::default();
    assert!(b.is_empty());
    assert_eq!(b.len(), 2);
    assert_eq!(b.iter().count(), 2);
    assert_eq!(format!("{}", b), "[[],\n []]");
    assert_eq!(&b + &b, b);
}

#[test]
fn complex_elements() {
    let mut a = Matrix2::<Complex<f64>, 2, 2>::from_elem(Complex::new(1., 1.));
    a *= Complex::new(0., 1.);
    assert_eq!(a[0][1], Complex::new(-1., 1.));

    let b = &a + &a;
    assert_eq!(b[1][0], Complex::new(-2., 2.));
    a -= b;
    assert_eq!(a[1][1], Complex::new(1., -1.));
}

#[test]
fn display_and_debug() {
    let a = Matrix3::<i32, 2, 2, 2>::from_fn(|i| i as i32);
    assert_eq!(
        format!("{}", a),
        "[[[0, 1],\n  [2, 3]],\n [[4, 5],\n  [6, 7]]]"
    );
    assert_eq!(format!("{}", a.view().at(1)), "[[4, 5],\n [6, 7]]");
    assert_eq!(format!("{:?}", a[0][1]), "[2, 3] shape=[2]");
    assert_eq!(
        format!("{:.1}", Matrix1::<f64, 2>::from_array([1., 2.5])),
        "[1.0, 2.5]"
    );
    assert_eq!(format!("{:e}", Matrix1::<f64, 1>::from_array([1500.])), "[1.5e3]");
    assert_eq!(format!("{:b}", Matrix1::<u8, 2>::from_array([2, 5])), "[10, 101]");
}
