use log::{info, trace};
use rand::{Rng, seq::SliceRandom};
use rayon::prelude::*;

use super::{EpochStats, TrainConfig};
use crate::{
    NetErr, Result,
    arch::{Gradient, Network},
    dataset::{self, Example},
    optimization::GradientDescent,
};

/// Trains networks with mini-batch stochastic gradient descent.
///
/// The trainer owns the random source used to reshuffle the training set at the start of
/// every epoch, seed it for reproducible runs.
pub struct Trainer<R: Rng> {
    config: TrainConfig,
    optimizer: GradientDescent,
    rng: R,
}

impl<R: Rng> Trainer<R> {
    /// Returns a new `Trainer`.
    ///
    /// # Arguments
    /// * `config` - The training hyperparameters.
    /// * `rng` - A random number generator.
    ///
    /// # Returns
    /// An error if `config` doesn't validate.
    pub fn new(config: TrainConfig, rng: R) -> Result<Self> {
        config.validate()?;

        Ok(Self {
            optimizer: GradientDescent::new(config.learning_rate),
            config,
            rng,
        })
    }

    /// Performs `config.epochs` epochs of training over `examples`.
    ///
    /// Every example (and every held-out example) is checked against the network before any
    /// parameter is touched, so a malformed set fails the run without a partial update.
    ///
    /// # Arguments
    /// * `net` - The network to train, modified in place.
    /// * `examples` - The training set, it is never reordered.
    /// * `test_data` - An optional held-out set evaluated after each epoch.
    ///
    /// # Returns
    /// The statistics of every epoch.
    pub fn train(
        &mut self,
        net: &mut Network,
        examples: &[Example],
        test_data: Option<&[Example]>,
    ) -> Result<Vec<EpochStats>> {
        if examples.is_empty() {
            return Err(NetErr::InvalidArgument("cannot train on an empty set"));
        }

        let test_data = test_data.filter(|t| !t.is_empty());
        examples
            .iter()
            .chain(test_data.unwrap_or_default())
            .try_for_each(|ex| net.check_example(ex))?;

        let n = examples.len();
        let ranges = dataset::batch_ranges(n, self.config.batch_size);
        let epochs = self.config.epochs.get();
        let mut order: Vec<usize> = (0..n).collect();
        let mut stats = Vec::with_capacity(epochs);

        for epoch in 0..epochs {
            order.shuffle(&mut self.rng);

            for (i, range) in ranges.iter().enumerate() {
                let batch: Vec<&Example> = order[range.clone()]
                    .iter()
                    .map(|&idx| &examples[idx])
                    .collect();

                self.update_mini_batch(net, &batch)?;
                trace!(epoch = epoch, batch = i, size = batch.len(); "applied mini-batch update");
            }

            let accuracy = match test_data {
                Some(test_data) => {
                    let accuracy = net.evaluate(test_data)?;
                    info!(epoch = epoch, accuracy = accuracy; "epoch {epoch}: {accuracy}");
                    Some(accuracy)
                }
                None => {
                    info!(epoch = epoch; "epoch {epoch} finished");
                    None
                }
            };

            stats.push(EpochStats::new(epoch, ranges.len(), n, accuracy));
        }

        Ok(stats)
    }

    /// Accumulates the gradient of every example in `batch` and applies their average,
    /// scaled by the learning rate, to the network.
    ///
    /// All the gradients are computed against the parameters the network had before the
    /// call, the network is only modified once, at the end.
    pub fn update_mini_batch(&mut self, net: &mut Network, batch: &[&Example]) -> Result<()> {
        if batch.is_empty() {
            return Err(NetErr::InvalidArgument("cannot update from an empty batch"));
        }

        let grad = if self.config.parallel {
            accumulate_parallel(net, batch)?
        } else {
            accumulate(net, batch)?
        };

        net.update(&mut self.optimizer, &grad, batch.len())
    }
}

fn accumulate(net: &Network, batch: &[&Example]) -> Result<Gradient> {
    let mut acc = Gradient::zeros_like(net.weights(), net.biases());
    for ex in batch {
        acc.accumulate(&net.backprop(ex)?)?;
    }

    Ok(acc)
}

// The sum is taken in batch order after the parallel section, which keeps the result
// identical to `accumulate`.
fn accumulate_parallel(net: &Network, batch: &[&Example]) -> Result<Gradient> {
    let grads = batch
        .par_iter()
        .map(|ex| net.backprop(ex))
        .collect::<Result<Vec<_>>>()?;

    let mut acc = Gradient::zeros_like(net.weights(), net.biases());
    for grad in &grads {
        acc.accumulate(grad)?;
    }

    Ok(acc)
}

impl Network {
    /// Trains this network in place with mini-batch stochastic gradient descent.
    ///
    /// # Arguments
    /// * `examples` - The training set.
    /// * `config` - The training hyperparameters.
    /// * `rng` - The random source for the per-epoch shuffles.
    pub fn train<R: Rng>(
        &mut self,
        examples: &[Example],
        config: &TrainConfig,
        rng: R,
    ) -> Result<()> {
        let mut trainer = Trainer::new(*config, rng)?;
        trainer.train(self, examples, None)?;
        Ok(())
    }
}
