use std::fmt::{self, Display};

use log::debug;
use ndarray::{Array1, Array2, ArrayView1};
use rand::Rng;
use rand_distr::{Distribution, StandardNormal};

use super::{
    Gradient,
    activations::Sigmoid,
    gradient::check_layout,
    linalg,
    loss::Quadratic,
};
use crate::{NetErr, Result, dataset::Example, optimization::Optimizer};

/// A fully connected feed-forward network with sigmoid activations.
///
/// For every pair of consecutive layers `i, i + 1` the network holds a weight matrix of shape
/// `(topology[i], topology[i + 1])` and a bias vector of length `topology[i + 1]`. Activations
/// are rows, so a layer computes `sigmoid(a · W + b)`.
#[derive(Debug, Clone, PartialEq)]
pub struct Network {
    topology: Vec<usize>,
    weights: Vec<Array2<f32>>,
    biases: Vec<Array1<f32>>,
    act_fn: Sigmoid,
    loss_fn: Quadratic,
}

fn check_topology(topology: &[usize]) -> Result<()> {
    if topology.len() < 2 {
        return Err(NetErr::InvalidTopology {
            reason: "at least an input and an output layer are required",
        });
    }

    if topology.contains(&0) {
        return Err(NetErr::InvalidTopology {
            reason: "every layer must have at least one unit",
        });
    }

    Ok(())
}

impl Network {
    /// Creates a new `Network` with parameters drawn from the thread local generator.
    ///
    /// # Arguments
    /// * `topology` - The size of every layer, input first and output last.
    ///
    /// # Returns
    /// A new `Network` or `NetErr::InvalidTopology`.
    pub fn new(topology: &[usize]) -> Result<Self> {
        Self::with_rng(topology, &mut rand::rng())
    }

    /// Creates a new `Network` whose weights and biases are independently sampled from a
    /// standard normal distribution.
    ///
    /// # Arguments
    /// * `topology` - The size of every layer, input first and output last.
    /// * `rng` - The random source, seed it for reproducible networks.
    ///
    /// # Returns
    /// A new `Network` or `NetErr::InvalidTopology` if there are less than two layers or
    /// any of them is empty.
    pub fn with_rng<R: Rng + ?Sized>(topology: &[usize], rng: &mut R) -> Result<Self> {
        check_topology(topology)?;

        let mut sample = || -> f32 { StandardNormal.sample(&mut *rng) };

        let weights = topology
            .windows(2)
            .map(|dims| Array2::from_shape_simple_fn((dims[0], dims[1]), &mut sample))
            .collect();

        let biases = topology[1..]
            .iter()
            .map(|&dim| Array1::from_shape_simple_fn(dim, &mut sample))
            .collect();

        debug!(layers = topology.len(); "created network with topology {topology:?}");

        Ok(Self {
            topology: topology.to_vec(),
            weights,
            biases,
            act_fn: Sigmoid,
            loss_fn: Quadratic::new(),
        })
    }

    /// Creates a new `Network` from explicit parameters.
    ///
    /// # Arguments
    /// * `weights` - One matrix per layer transition.
    /// * `biases` - One vector per layer transition.
    ///
    /// # Returns
    /// An error if the parameters don't chain into a valid topology.
    pub fn from_params(weights: Vec<Array2<f32>>, biases: Vec<Array1<f32>>) -> Result<Self> {
        let Some(first) = weights.first() else {
            return Err(NetErr::InvalidTopology {
                reason: "at least one weight matrix is required",
            });
        };

        if biases.len() != weights.len() {
            return Err(NetErr::SizeMismatch {
                a: "biases",
                b: "weights",
                got: biases.len(),
                expected: weights.len(),
            });
        }

        let mut topology = vec![first.nrows()];
        for (w, b) in weights.iter().zip(&biases) {
            let prev = *topology.last().unwrap_or(&0);
            if w.nrows() != prev {
                return Err(NetErr::SizeMismatch {
                    a: "weight rows",
                    b: "previous layer",
                    got: w.nrows(),
                    expected: prev,
                });
            }

            if b.len() != w.ncols() {
                return Err(NetErr::SizeMismatch {
                    a: "biases",
                    b: "weight columns",
                    got: b.len(),
                    expected: w.ncols(),
                });
            }

            topology.push(w.ncols());
        }

        check_topology(&topology)?;

        Ok(Self {
            topology,
            weights,
            biases,
            act_fn: Sigmoid,
            loss_fn: Quadratic::new(),
        })
    }

    pub fn topology(&self) -> &[usize] {
        &self.topology
    }

    pub fn weights(&self) -> &[Array2<f32>] {
        &self.weights
    }

    pub fn biases(&self) -> &[Array1<f32>] {
        &self.biases
    }

    /// The size of the input layer.
    pub fn inputs(&self) -> usize {
        self.topology[0]
    }

    /// The size of the output layer, that is, the number of classes.
    pub fn outputs(&self) -> usize {
        self.topology[self.topology.len() - 1]
    }

    /// Makes a forward pass through the network.
    ///
    /// # Arguments
    /// * `x` - An input row of length `topology[0]`.
    ///
    /// # Returns
    /// The output row of length `topology[last]`, or a size mismatch if the input
    /// doesn't fit the input layer.
    pub fn forward(&self, x: ArrayView1<f32>) -> Result<Array1<f32>> {
        self.check_input(x)?;

        let mut a = x.to_owned();
        for (w, b) in self.weights.iter().zip(&self.biases) {
            let z = linalg::add(linalg::dot(a.view(), w.view())?.view(), b.view())?;
            a = self.act_fn.forward(z.view());
        }

        Ok(a)
    }

    /// Returns the ratio of correctly classified examples.
    ///
    /// The predicted class of an example is the index of its largest output.
    ///
    /// # Returns
    /// A value in `[0, 1]`, or `NetErr::InvalidArgument` for an empty set.
    pub fn evaluate(&self, examples: &[Example]) -> Result<f32> {
        if examples.is_empty() {
            return Err(NetErr::InvalidArgument("cannot evaluate on an empty set"));
        }

        let mut correct = 0;
        for example in examples {
            let y_pred = self.forward(example.values().view())?;
            if linalg::argmax(y_pred.view())? == example.label() {
                correct += 1;
            }
        }

        Ok(correct as f32 / examples.len() as f32)
    }

    /// The quadratic cost between the output for `example` and its one-hot target.
    pub fn loss(&self, example: &Example) -> Result<f32> {
        self.check_example(example)?;

        let y_pred = self.forward(example.values().view())?;
        let y = linalg::one_hot(example.classes(), example.label())?;
        self.loss_fn.loss(y_pred.view(), y.view())
    }

    /// Computes the gradient of the quadratic cost of a single example with respect to every
    /// weight and bias of the network.
    ///
    /// # Arguments
    /// * `example` - The labeled example.
    ///
    /// # Returns
    /// The gradient, shaped exactly like the network's parameters.
    pub fn backprop(&self, example: &Example) -> Result<Gradient> {
        self.check_example(example)?;

        let nlayers = self.weights.len();

        // forward pass keeping every weighted sum and activation
        let mut activations = Vec::with_capacity(nlayers + 1);
        let mut zs = Vec::with_capacity(nlayers);
        activations.push(example.values().clone());

        for (w, b) in self.weights.iter().zip(&self.biases) {
            let a = &activations[activations.len() - 1];
            let z = linalg::add(linalg::dot(a.view(), w.view())?.view(), b.view())?;
            activations.push(self.act_fn.forward(z.view()));
            zs.push(z);
        }

        let y = linalg::one_hot(example.classes(), example.label())?;

        // output layer
        let cost_prime = self
            .loss_fn
            .loss_prime(activations[nlayers].view(), y.view())?;
        let sp = self.act_fn.prime(zs[nlayers - 1].view());
        let mut delta = linalg::hadamard(cost_prime.view(), sp.view())?;

        let mut grad_w = vec![Array2::zeros((0, 0)); nlayers];
        let mut grad_b = vec![Array1::zeros(0); nlayers];

        grad_w[nlayers - 1] = linalg::outer(activations[nlayers - 1].view(), delta.view());
        grad_b[nlayers - 1] = delta.clone();

        // hidden layers, from the last one back to the first
        for idx in (0..nlayers - 1).rev() {
            let sp = self.act_fn.prime(zs[idx].view());
            let back = linalg::dot_transposed(delta.view(), self.weights[idx + 1].view())?;
            delta = linalg::hadamard(back.view(), sp.view())?;

            grad_w[idx] = linalg::outer(activations[idx].view(), delta.view());
            grad_b[idx] = delta.clone();
        }

        Ok(Gradient::new(grad_w, grad_b))
    }

    /// Applies an accumulated gradient to every weight and bias.
    ///
    /// The whole gradient is checked against the parameter shapes before any layer is
    /// modified, so a failed update leaves the network as it was.
    ///
    /// # Arguments
    /// * `optimizer` - The update rule.
    /// * `grad` - The gradient summed over `batch_size` examples.
    /// * `batch_size` - The amount of examples `grad` was accumulated over.
    pub fn update<O: Optimizer>(
        &mut self,
        optimizer: &mut O,
        grad: &Gradient,
        batch_size: usize,
    ) -> Result<()> {
        if batch_size == 0 {
            return Err(NetErr::InvalidArgument("cannot update from an empty batch"));
        }

        check_layout(&self.weights, &self.biases, grad.weights(), grad.biases())?;

        for (w, gw) in self.weights.iter_mut().zip(grad.weights()) {
            optimizer.update_params(w, gw, batch_size);
        }

        for (b, gb) in self.biases.iter_mut().zip(grad.biases()) {
            optimizer.update_params(b, gb, batch_size);
        }

        Ok(())
    }

    /// Checks that `example` can be fed to this network and trained against.
    pub fn check_example(&self, example: &Example) -> Result<()> {
        self.check_input(example.values().view())?;

        if example.classes() != self.outputs() {
            return Err(NetErr::SizeMismatch {
                a: "example classes",
                b: "output layer",
                got: example.classes(),
                expected: self.outputs(),
            });
        }

        Ok(())
    }

    fn check_input(&self, x: ArrayView1<f32>) -> Result<()> {
        if x.len() != self.inputs() {
            return Err(NetErr::SizeMismatch {
                a: "input",
                b: "input layer",
                got: x.len(),
                expected: self.inputs(),
            });
        }

        Ok(())
    }
}

impl Display for Network {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Neural network:\nlayers:")?;
        for size in &self.topology {
            write!(f, " {size}")?;
        }

        for (i, w) in self.weights.iter().enumerate() {
            write!(f, "\nweights layer {i} to {}:\n{w}", i + 1)?;
        }

        for (i, b) in self.biases.iter().enumerate() {
            write!(f, "\nbiases layer {}:\n{b}", i + 1)?;
        }

        Ok(())
    }
}
