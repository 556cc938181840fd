//! Dense 2-D `f64` matrices.
//!
//! `Matrix` stores its cells row-major in a single `Vec<f64>`. Every
//! arithmetic and transform operation returns a new matrix; only
//! `Matrix::set` and `Matrix::accumulate` write into an existing one.
pub mod format;
pub mod matrix;

pub use matrix::{argmax_abs, Matrix};
