use ndarray::{ArrayBase, Data, DataMut, Dimension};

/// An update rule for a network's parameters.
pub trait Optimizer {
    /// Steps `params` according to the accumulated gradient of a whole mini-batch.
    ///
    /// # Arguments
    /// * `params` - The parameters that are going to be modified.
    /// * `grad` - The gradient summed over every example of the batch, same shape as `params`.
    /// * `batch_size` - The amount of examples `grad` was accumulated over.
    fn update_params<S, T, D>(
        &mut self,
        params: &mut ArrayBase<S, D>,
        grad: &ArrayBase<T, D>,
        batch_size: usize,
    ) where
        S: DataMut<Elem = f32>,
        T: Data<Elem = f32>,
        D: Dimension;
}
