pub mod matrix;
pub mod distribution;
