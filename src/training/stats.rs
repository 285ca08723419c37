/// Statistics produced by a single training epoch.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct EpochStats {
    epoch: usize,
    batches: usize,
    samples: usize,
    accuracy: Option<f32>,
}

impl EpochStats {
    /// Creates a new `EpochStats`.
    ///
    /// # Args
    /// * `epoch` - Zero based index of the epoch.
    /// * `batches` - Number of mini-batch updates applied during the epoch.
    /// * `samples` - Total number of examples processed during the epoch.
    /// * `accuracy` - The held-out accuracy after the epoch, if a held-out set was given.
    pub fn new(epoch: usize, batches: usize, samples: usize, accuracy: Option<f32>) -> Self {
        Self {
            epoch,
            batches,
            samples,
            accuracy,
        }
    }

    pub fn epoch(&self) -> usize {
        self.epoch
    }

    pub fn batches(&self) -> usize {
        self.batches
    }

    pub fn samples(&self) -> usize {
        self.samples
    }

    /// Returns the held-out accuracy measured at the end of the epoch.
    ///
    /// # Returns
    /// `None` when training ran without a held-out set.
    pub fn accuracy(&self) -> Option<f32> {
        self.accuracy
    }
}
