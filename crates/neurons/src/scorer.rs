//! Classification check for a single network output.
//!
//! A prediction counts as correct when the component with the largest
//! magnitude sits at the same position in the expected (usually one-hot)
//! vector and in the network output.
use crate::error::MatrixError;
use crate::math::{argmax_abs, Matrix};

/// Divide every component by the plain sum of all components.
///
/// A zero sum yields NaN or infinite components; it is not guarded against.
pub fn normalize(actual: &[f64]) -> Vec<f64> {
    let sum: f64 = actual.iter().sum();
    actual.iter().map(|v| v / sum).collect()
}

#[derive(Debug, Clone, Copy)]
pub struct ClassificationScorer<'a> {
    expected: &'a [f64],
    actual: &'a [f64],
}

impl<'a> ClassificationScorer<'a> {
    pub fn new(expected: &'a [f64], actual: &'a [f64]) -> Result<Self, MatrixError> {
        if expected.len() != actual.len() {
            return Err(MatrixError::ShapeMismatch {
                op: "classification score",
                left: (expected.len(), 1),
                right: (actual.len(), 1),
            });
        }
        Ok(Self { expected, actual })
    }

    /// Score two matrices by their flat buffers.
    pub fn from_matrices(expected: &'a Matrix, actual: &'a Matrix) -> Result<Self, MatrixError> {
        Self::new(expected.data(), actual.data())
    }

    /// The network output scaled to sum to one.
    pub fn normalized(&self) -> Vec<f64> {
        normalize(self.actual)
    }

    pub fn is_correct(&self) -> bool {
        argmax_abs(self.expected) == argmax_abs(self.actual)
    }
}

/// Running count of correct classifications.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Accuracy {
    correct: usize,
    total: usize,
}

impl Accuracy {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, correct: bool) {
        self.total += 1;
        if correct {
            self.correct += 1;
        }
    }

    pub fn correct(&self) -> usize {
        self.correct
    }

    pub fn total(&self) -> usize {
        self.total
    }

    /// Fraction of correct outcomes, `None` before anything was recorded.
    pub fn ratio(&self) -> Option<f64> {
        if self.total == 0 {
            None
        } else {
            Some(self.correct as f64 / self.total as f64)
        }
    }
}
