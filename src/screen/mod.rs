pub mod brush;
