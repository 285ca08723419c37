mod config;
mod stats;
mod trainer;

pub use config::TrainConfig;
pub use stats::EpochStats;
pub use trainer::Trainer;
