extern crate itertools;
extern crate mdmatrix;

use itertools::assert_equal;
use mdmatrix::prelude::*;

#[test]
fn mutation_through_view_is_visible() {
    let mut m = Matrix::<i32, dims![3, 3, 3]>::default();
    {
        let mut v = m.view_mut();
        v.at_mut(1).at_mut(2)[0] = 9;
        v += &Matrix::from_elem(1);
        v *= 2;
    }
    assert_eq!(m[1][2][0], 20);
    assert_eq!(m[0][0][0], 2);
}

#[test]
fn read_only_view_matches_matrix() {
    let m = Matrix3::<u32, 2, 3, 4>::from_fn(|i| i as u32 * 3);
    let v = m.view();
    for i in 0..2 {
        for j in 0..3 {
            for k in 0..4 {
                assert_eq!(v.at(i).at(j).at(k), &m[i][j][k]);
            }
        }
    }
    assert_eq!(v.size(), m.size());
    assert_eq!(v.ndim(), 3);
    assert_eq!(v.to_owned(), m);
}

#[test]
fn views_outlive_their_parent_view() {
    let m = Matrix2::<i32, 2, 2>::from_array([[1, 2], [3, 4]]);
    let rows: Vec<MatrixView1<'_, i32, 2>> = m.view().iter().collect();
    assert_eq!(rows.len(), 2);
    assert_equal(rows[1].iter(), &[3, 4]);
}

#[test]
fn iter_counts_first_axis() {
    let m = Matrix3::<i32, 4, 3, 2>::default();
    assert_eq!(m.iter().count(), 4);
    assert_eq!(m.iter().len(), 4);
    assert_eq!(m[0].iter().count(), 3);
    assert_eq!(m.view().into_iter().rev().count(), 4);
}

#[test]
fn iter_equality_is_positional() {
    let a = Matrix2::<i32, 3, 3>::from_elem(1);
    let b = Matrix2::<i32, 3, 3>::from_elem(2);

    let mut ia = a.iter();
    let ib = b.iter();
    assert_eq!(ia, ib);
    assert_eq!(ia, a.iter());

    ia.next();
    assert_ne!(ia, ib);
    assert_eq!(ia.offset(), 1);

    let mut end = a.iter();
    end.by_ref().for_each(drop);
    assert_eq!(end.offset(), 3);
    assert!(end > ia);
}

#[test]
fn iterator_position_finds_row() {
    let m = Matrix2::<i32, 3, 2>::from_fn(|i| i as i32);
    assert_eq!(m.iter().position(|row| row[0] == 4), Some(2));
    assert_eq!(m.view().iter().position(|row| row[1] == 3), Some(1));
    assert_eq!(m[1].iter().position(|&x| x == 3), Some(1));
    assert_eq!(m.iter().rposition(|row| row[0] < 0), None);
}

#[test]
fn iter_mut_writes_every_element() {
    let mut m = Matrix3::<i32, 2, 2, 2>::default();
    for (i, mut plane) in m.iter_mut().enumerate() {
        for mut row in plane.iter_mut() {
            for elt in row.iter_mut() {
                *elt = i as i32 + 1;
            }
        }
    }
    assert_equal(m.iter().map(|p| p.fold(0, |acc, &x| acc + x)), vec![4, 8]);

    for mut plane in &mut m {
        plane.fill(5);
    }
    assert_eq!(m, Matrix3::<i32, 2, 2, 2>::from_elem(5));
}

#[test]
fn view_into_iterators() {
    let mut m = Matrix2::<i32, 2, 3>::from_fn(|i| i as i32);
    let mut total = 0;
    for row in &m {
        for &x in row {
            total += x;
        }
    }
    assert_eq!(total, 15);

    for row in m.view_mut() {
        for x in row {
            *x *= -1;
        }
    }
    assert_equal(m.view().at(1).iter().copied(), vec![-3, -4, -5]);
}

#[test]
fn view_conversions() {
    let mut m = Matrix1::<i32, 3>::from_array([1, 2, 3]);
    let v: MatrixViewMut1<'_, i32, 3> = (&mut m).into();
    let r: MatrixView1<'_, i32, 3> = v.into();
    assert_eq!(r[2], 3);
    assert_eq!(r.get(3), None);

    let r2 = MatrixView::from(&m);
    assert_eq!(r2, m.view());
    assert_eq!(format!("{}", r2), "[1, 2, 3]");
}

#[test]
fn view_arithmetic() {
    let a = Matrix2::<i32, 2, 2>::from_array([[1, 2], [3, 4]]);
    let b = Matrix2::<i32, 2, 2>::from_array([[1, 1], [1, 1]]);
    let sum = a.view() + b.view();
    let diff = a.view() - b.view();
    assert_eq!(sum.into_array(), [[2, 3], [4, 5]]);
    assert_eq!(diff.into_array(), [[0, 1], [2, 3]]);
    assert_eq!((a.view() * 10).into_array(), [[10, 20], [30, 40]]);
}

#[test]
#[should_panic(expected = "index out of bounds")]
fn view_at_out_of_bounds() {
    let m = Matrix2::<i32, 2, 2>::default();
    m.view().at(2);
}
