pub mod mask;
pub mod sections;
pub mod streak;
