use ndarray::{ArrayBase, Data, DataMut, Dimension};

use super::Optimizer;

/// Gradient descent optimization algorithm.
#[derive(Debug, Clone, Copy)]
pub struct GradientDescent {
    learning_rate: f32,
}

impl GradientDescent {
    /// Returns a new `GradientDescent`.
    ///
    /// # Arguments
    /// * `learning_rate` - The *length* of the steps taken on `update_params`.
    pub fn new(learning_rate: f32) -> Self {
        Self { learning_rate }
    }
}

impl Optimizer for GradientDescent {
    /// Makes a step in the opposite direction of the batch's average gradient, with a length
    /// of `learning_rate`, that is `params -= (learning_rate / batch_size) * grad`.
    fn update_params<S, T, D>(
        &mut self,
        params: &mut ArrayBase<S, D>,
        grad: &ArrayBase<T, D>,
        batch_size: usize,
    ) where
        S: DataMut<Elem = f32>,
        T: Data<Elem = f32>,
        D: Dimension,
    {
        let scale = self.learning_rate / batch_size as f32;
        params.scaled_add(-scale, grad);
    }
}
