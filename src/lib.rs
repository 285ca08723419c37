pub mod arch;
pub mod dataset;
pub mod error;
pub mod optimization;
pub mod training;

pub use arch::{Gradient, Network};
pub use dataset::Example;
pub use error::{ErrorKind, NetErr, Result};
pub use training::{EpochStats, TrainConfig, Trainer};
