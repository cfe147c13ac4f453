pub mod cache;
pub mod frames;
pub mod spline;
