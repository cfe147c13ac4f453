pub mod bristles;
pub mod geometry;
pub mod tube;
