pub mod rng;
pub mod simplex;
