pub mod activations;
mod gradient;
pub mod linalg;
pub mod loss;
mod network;

pub use gradient::Gradient;
pub use network::Network;
