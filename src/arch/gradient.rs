use ndarray::{Array1, Array2};

use crate::{NetErr, Result};

/// The partial derivatives of a cost with respect to every parameter of a network, laid out
/// exactly like the network's weights and biases.
#[derive(Debug, Clone, PartialEq)]
pub struct Gradient {
    weights: Vec<Array2<f32>>,
    biases: Vec<Array1<f32>>,
}

impl Gradient {
    pub(crate) fn new(weights: Vec<Array2<f32>>, biases: Vec<Array1<f32>>) -> Self {
        Self { weights, biases }
    }

    /// Creates a zero filled gradient with the same shapes as the given parameters.
    ///
    /// # Arguments
    /// * `weights` - The weight matrices to mirror.
    /// * `biases` - The bias vectors to mirror.
    ///
    /// # Returns
    /// A new `Gradient` that can be used as an accumulator.
    pub fn zeros_like(weights: &[Array2<f32>], biases: &[Array1<f32>]) -> Self {
        Self {
            weights: weights.iter().map(|w| Array2::zeros(w.dim())).collect(),
            biases: biases.iter().map(|b| Array1::zeros(b.dim())).collect(),
        }
    }

    pub fn weights(&self) -> &[Array2<f32>] {
        &self.weights
    }

    pub fn biases(&self) -> &[Array1<f32>] {
        &self.biases
    }

    /// Adds `other` into this gradient, layer by layer.
    ///
    /// Shapes are checked for every layer before anything is written, so on error this
    /// gradient is left untouched.
    pub fn accumulate(&mut self, other: &Gradient) -> Result<()> {
        check_shapes(self, other)?;

        self.weights
            .iter_mut()
            .zip(&other.weights)
            .for_each(|(acc, gw)| *acc += gw);

        self.biases
            .iter_mut()
            .zip(&other.biases)
            .for_each(|(acc, gb)| *acc += gb);

        Ok(())
    }
}

/// Checks that two gradients (or a gradient and a set of parameters) agree layer by layer.
pub(crate) fn check_layout(
    weights: &[Array2<f32>],
    biases: &[Array1<f32>],
    other_weights: &[Array2<f32>],
    other_biases: &[Array1<f32>],
) -> Result<()> {
    if weights.len() != other_weights.len() || biases.len() != other_biases.len() {
        return Err(NetErr::SizeMismatch {
            a: "gradient layers",
            b: "parameter layers",
            got: other_weights.len(),
            expected: weights.len(),
        });
    }

    for (w, ow) in weights.iter().zip(other_weights) {
        if w.dim() != ow.dim() {
            return Err(NetErr::SizeMismatch {
                a: "gradient weights",
                b: "parameter weights",
                got: ow.len(),
                expected: w.len(),
            });
        }
    }

    for (b, ob) in biases.iter().zip(other_biases) {
        if b.len() != ob.len() {
            return Err(NetErr::SizeMismatch {
                a: "gradient biases",
                b: "parameter biases",
                got: ob.len(),
                expected: b.len(),
            });
        }
    }

    Ok(())
}

fn check_shapes(acc: &Gradient, other: &Gradient) -> Result<()> {
    check_layout(&acc.weights, &acc.biases, &other.weights, &other.biases)
}
