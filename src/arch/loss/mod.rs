mod quadratic;

pub use quadratic::Quadratic;
