use ndarray::{Array1, ArrayView1};

/// The logistic function, `1 / (1 + e^-z)`.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Sigmoid;

impl Sigmoid {
    pub fn f(&self, z: f32) -> f32 {
        1. / (1. + (-z).exp())
    }

    pub fn df(&self, z: f32) -> f32 {
        let s = self.f(z);
        s * (1. - s)
    }

    /// Applies the sigmoid element-wise.
    pub fn forward(&self, z: ArrayView1<f32>) -> Array1<f32> {
        z.mapv(|z| self.f(z))
    }

    /// Applies the sigmoid's derivative element-wise.
    pub fn prime(&self, z: ArrayView1<f32>) -> Array1<f32> {
        z.mapv(|z| self.df(z))
    }
}
