use ndarray::{Array1, ArrayView1};

use crate::{Result, arch::linalg};

/// Quadratic cost, `C = ½ Σ (y_pred - y)²`.
#[derive(Default, Clone, Copy, Debug, PartialEq)]
pub struct Quadratic;

impl Quadratic {
    /// Returns a new `Quadratic`.
    pub fn new() -> Self {
        Self
    }

    pub fn loss(&self, y_pred: ArrayView1<f32>, y: ArrayView1<f32>) -> Result<f32> {
        let diff = linalg::sub(y_pred, y)?;
        Ok(0.5 * diff.mapv(|x| x.powi(2)).sum())
    }

    /// The derivative of the cost with respect to the prediction, `y_pred - y`.
    pub fn loss_prime(&self, y_pred: ArrayView1<f32>, y: ArrayView1<f32>) -> Result<Array1<f32>> {
        linalg::sub(y_pred, y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;

    #[test]
    fn loss_is_half_the_squared_distance() {
        let y_pred = array![0.5, 0.5];
        let y = array![1., 0.];

        let loss = Quadratic.loss(y_pred.view(), y.view()).unwrap();
        assert!((loss - 0.25).abs() < 1e-6);
    }

    #[test]
    fn loss_prime_points_away_from_the_target() {
        let y_pred = array![0.25, 0.75];
        let y = array![1., 0.];

        let d = Quadratic.loss_prime(y_pred.view(), y.view()).unwrap();
        assert_eq!(d, array![-0.75, 0.75]);
    }

    #[test]
    fn mismatched_lengths_fail() {
        let y_pred = array![0.25, 0.75, 0.1];
        let y = array![1., 0.];

        assert!(Quadratic.loss(y_pred.view(), y.view()).is_err());
    }
}
