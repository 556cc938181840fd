//! neurons: numerical substrate for a small feed-forward network experiment.
//!
//! This crate provides a dense row-major `Matrix` with the arithmetic and
//! element-wise transforms a training loop needs, random-access readers for
//! the big-endian IDX image/label files (MNIST layout), and a small scorer
//! that compares a network output against its expected one-hot label.
//!
//! Everything is synchronous and allocation-light; the dataset readers load
//! each file once and hand out freshly allocated matrices per item.
pub mod config;
pub mod dataset;
pub mod error;
pub mod math;
pub mod scorer;

pub use error::{DatasetError, MatrixError};
pub use math::Matrix;
