use std::num::NonZeroUsize;

use serde::{Deserialize, Serialize};

use crate::{NetErr, Result};

/// The hyperparameters of a training run.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TrainConfig {
    pub epochs: NonZeroUsize,
    pub batch_size: NonZeroUsize,
    pub learning_rate: f32,
    /// Compute the per-example gradients of every mini-batch on the rayon thread pool.
    #[serde(default)]
    pub parallel: bool,
}

impl TrainConfig {
    /// Creates a new sequential `TrainConfig`.
    ///
    /// # Arguments
    /// * `epochs` - The amount of passes over the training set.
    /// * `batch_size` - The amount of examples averaged into each parameter update.
    /// * `learning_rate` - The step length of gradient descent.
    ///
    /// # Returns
    /// `NetErr::InvalidArgument` if a count is zero or the learning rate isn't a finite
    /// positive number.
    pub fn new(epochs: usize, batch_size: usize, learning_rate: f32) -> Result<Self> {
        let epochs =
            NonZeroUsize::new(epochs).ok_or(NetErr::InvalidArgument("epochs must be positive"))?;
        let batch_size = NonZeroUsize::new(batch_size)
            .ok_or(NetErr::InvalidArgument("mini-batch size must be positive"))?;

        let config = Self {
            epochs,
            batch_size,
            learning_rate,
            parallel: false,
        };

        config.validate()?;
        Ok(config)
    }

    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Checks the fields the type system can't, useful after deserializing.
    pub fn validate(&self) -> Result<()> {
        if !self.learning_rate.is_finite() || self.learning_rate <= 0. {
            return Err(NetErr::InvalidArgument(
                "learning rate must be a finite positive number",
            ));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ErrorKind;

    #[test]
    fn new_accepts_valid_hyperparameters() {
        let config = TrainConfig::new(30, 10, 3.).unwrap();

        assert_eq!(config.epochs.get(), 30);
        assert_eq!(config.batch_size.get(), 10);
        assert_eq!(config.learning_rate, 3.);
        assert!(!config.parallel);
        assert!(config.with_parallel(true).parallel);
    }

    #[test]
    fn new_rejects_invalid_hyperparameters() {
        for (epochs, batch_size, lr) in [
            (0, 10, 1.),
            (1, 0, 1.),
            (1, 10, 0.),
            (1, 10, -0.5),
            (1, 10, f32::NAN),
            (1, 10, f32::INFINITY),
        ] {
            let err = TrainConfig::new(epochs, batch_size, lr).unwrap_err();
            assert_eq!(err.kind(), ErrorKind::InvalidArgument);
        }
    }

    #[test]
    fn deserializes_from_json() {
        let json = r#"{ "epochs": 5, "batch_size": 2, "learning_rate": 0.5 }"#;
        let config: TrainConfig = serde_json::from_str(json).unwrap();

        assert_eq!(config, TrainConfig::new(5, 2, 0.5).unwrap());
        config.validate().unwrap();
    }

    #[test]
    fn zero_counts_fail_to_deserialize() {
        let json = r#"{ "epochs": 0, "batch_size": 2, "learning_rate": 0.5 }"#;
        assert!(serde_json::from_str::<TrainConfig>(json).is_err());
    }

    #[test]
    fn validate_catches_a_deserialized_negative_learning_rate() {
        let json = r#"{ "epochs": 1, "batch_size": 2, "learning_rate": -1.0, "parallel": true }"#;
        let config: TrainConfig = serde_json::from_str(json).unwrap();

        assert!(config.parallel);
        assert!(config.validate().is_err());
    }
}
