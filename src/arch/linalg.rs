//! Shape-checked vector and matrix operations.
//!
//! `ndarray` panics when the operands of a product or an element-wise
//! operation disagree on their shapes, every function in here checks
//! them first and reports a `NetErr::SizeMismatch` instead.

use ndarray::{Array1, Array2, ArrayView1, ArrayView2, Axis};

use crate::{NetErr, Result};

fn check_len(a: &'static str, b: &'static str, got: usize, expected: usize) -> Result<()> {
    if got != expected {
        return Err(NetErr::SizeMismatch {
            a,
            b,
            got,
            expected,
        });
    }

    Ok(())
}

/// Computes the row-vector product `x · w`.
///
/// # Arguments
/// * `x` - A row of length `n`.
/// * `w` - A matrix of shape `(n, m)`.
///
/// # Returns
/// A row of length `m`.
pub fn dot(x: ArrayView1<f32>, w: ArrayView2<f32>) -> Result<Array1<f32>> {
    check_len("activation", "weight rows", x.len(), w.nrows())?;
    Ok(x.dot(&w))
}

/// Computes `d · wᵀ` without materializing the transpose.
///
/// # Arguments
/// * `d` - A row of length `m`.
/// * `w` - A matrix of shape `(n, m)`.
///
/// # Returns
/// A row of length `n`.
pub fn dot_transposed(d: ArrayView1<f32>, w: ArrayView2<f32>) -> Result<Array1<f32>> {
    check_len("delta", "weight columns", d.len(), w.ncols())?;
    Ok(w.dot(&d))
}

pub fn add(a: ArrayView1<f32>, b: ArrayView1<f32>) -> Result<Array1<f32>> {
    check_len("lhs", "rhs", b.len(), a.len())?;
    Ok(&a + &b)
}

pub fn sub(a: ArrayView1<f32>, b: ArrayView1<f32>) -> Result<Array1<f32>> {
    check_len("lhs", "rhs", b.len(), a.len())?;
    Ok(&a - &b)
}

/// Element-wise product.
pub fn hadamard(a: ArrayView1<f32>, b: ArrayView1<f32>) -> Result<Array1<f32>> {
    check_len("lhs", "rhs", b.len(), a.len())?;
    Ok(&a * &b)
}

/// Computes the outer product `aᵀ · b`, a matrix of shape `(a.len(), b.len())`.
pub fn outer(a: ArrayView1<f32>, b: ArrayView1<f32>) -> Array2<f32> {
    let col = a.insert_axis(Axis(1));
    let row = b.insert_axis(Axis(0));
    col.dot(&row)
}

/// Returns the index of the maximum element, ties go to the first occurrence.
///
/// NaN never compares greater than anything, so NaN elements are skipped and an all-NaN
/// row yields index 0.
pub fn argmax(x: ArrayView1<f32>) -> Result<usize> {
    let mut iter = x.iter().enumerate();
    let Some((_, &first)) = iter.next() else {
        return Err(NetErr::InvalidArgument("argmax of an empty vector"));
    };

    let (idx, _) = iter.fold((0, first), |(best, max), (i, &v)| {
        if v > max { (i, v) } else { (best, max) }
    });

    Ok(idx)
}

/// Builds a row of length `len` with a 1 at `index` and 0 elsewhere.
pub fn one_hot(len: usize, index: usize) -> Result<Array1<f32>> {
    if index >= len {
        return Err(NetErr::LabelOutOfRange {
            label: index,
            classes: len,
        });
    }

    let mut y = Array1::zeros(len);
    y[index] = 1.;
    Ok(y)
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;

    #[test]
    fn dot_of_row_and_matrix() {
        let x = array![1., 2.];
        let w = array![[1., 2., 3.], [4., 5., 6.]];

        let y = dot(x.view(), w.view()).unwrap();
        assert_eq!(y, array![9., 12., 15.]);
    }

    #[test]
    fn dot_rejects_inner_dimension_mismatch() {
        let x = array![1., 2., 3.];
        let w = array![[1., 2., 3.], [4., 5., 6.]];

        let err = dot(x.view(), w.view()).unwrap_err();
        assert_eq!(
            err,
            NetErr::SizeMismatch {
                a: "activation",
                b: "weight rows",
                got: 3,
                expected: 2,
            }
        );
    }

    #[test]
    fn dot_transposed_matches_explicit_transpose() {
        let d = array![1., -1., 2.];
        let w = array![[1., 2., 3.], [4., 5., 6.]];

        let got = dot_transposed(d.view(), w.view()).unwrap();
        let expected = d.dot(&w.t());
        assert_eq!(got, expected);
        assert!(dot_transposed(array![1., 2.].view(), w.view()).is_err());
    }

    #[test]
    fn elementwise_ops() {
        let a = array![1., 2., 3.];
        let b = array![3., 2., 1.];

        assert_eq!(add(a.view(), b.view()).unwrap(), array![4., 4., 4.]);
        assert_eq!(sub(a.view(), b.view()).unwrap(), array![-2., 0., 2.]);
        assert_eq!(hadamard(a.view(), b.view()).unwrap(), array![3., 4., 3.]);
        assert!(add(a.view(), array![1.].view()).is_err());
    }

    #[test]
    fn outer_product() {
        let a = array![1., 2., 3.];
        let b = array![1., 10.];
        let expected = array![[1., 10.], [2., 20.], [3., 30.]];

        assert_eq!(outer(a.view(), b.view()), expected);
    }

    #[test]
    fn argmax_prefers_first_occurrence() {
        assert_eq!(argmax(array![0.1, 0.7, 0.7, 0.2].view()).unwrap(), 1);
        assert_eq!(argmax(array![0.9, 0.1].view()).unwrap(), 0);
        assert_eq!(argmax(array![0.3].view()).unwrap(), 0);
        assert!(argmax(Array1::<f32>::zeros(0).view()).is_err());
    }

    #[test]
    fn argmax_skips_nan() {
        assert_eq!(argmax(array![f32::NAN, f32::NAN].view()).unwrap(), 0);
        assert_eq!(argmax(array![f32::NAN, 0.2, 0.4].view()).unwrap(), 2);
    }

    #[test]
    fn one_hot_places_a_single_one() {
        assert_eq!(one_hot(3, 2).unwrap(), array![0., 0., 1.]);
        assert_eq!(
            one_hot(3, 3).unwrap_err(),
            NetErr::LabelOutOfRange {
                label: 3,
                classes: 3,
            }
        );
    }
}
