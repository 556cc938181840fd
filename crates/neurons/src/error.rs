use std::error::Error;
use std::fmt;

/// Failures raised by `Matrix` construction, access and arithmetic.
#[derive(Debug, Clone, PartialEq)]
pub enum MatrixError {
    /// Buffer length does not match the declared `rows * cols`.
    Shape { rows: usize, cols: usize, len: usize },
    /// Operand shapes are incompatible for the requested operation.
    ShapeMismatch {
        op: &'static str,
        left: (usize, usize),
        right: (usize, usize),
    },
    /// Element access outside the matrix.
    OutOfBounds {
        index: (usize, usize),
        shape: (usize, usize),
    },
    /// Scalar divisor, or a cell divided into, is exactly zero.
    DivisionByZero,
}

impl fmt::Display for MatrixError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MatrixError::Shape { rows, cols, len } => write!(
                f,
                "invalid shape ({}, {}) for buffer of length {}",
                rows, cols, len
            ),
            MatrixError::ShapeMismatch { op, left, right } => write!(
                f,
                "{} requires compatible shapes, got {:?} and {:?}",
                op, left, right
            ),
            MatrixError::OutOfBounds { index, shape } => write!(
                f,
                "index {:?} is out of bounds for matrix of shape {:?}",
                index, shape
            ),
            MatrixError::DivisionByZero => write!(f, "division by zero"),
        }
    }
}

impl Error for MatrixError {}

/// Failures raised when extracting items from an opened dataset file.
#[derive(Debug, Clone, PartialEq)]
pub enum DatasetError {
    /// Item index at or past the count declared in the file header.
    OutOfBounds { index: usize, count: usize },
    /// Stored label byte does not name one of the known classes.
    InvalidLabel { index: usize, value: u8 },
    Matrix(MatrixError),
}

impl fmt::Display for DatasetError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DatasetError::OutOfBounds { index, count } => write!(
                f,
                "item {} is out of bounds for a dataset of {} items",
                index, count
            ),
            DatasetError::InvalidLabel { index, value } => {
                write!(f, "label {} at item {} is not a known class", value, index)
            }
            DatasetError::Matrix(err) => write!(f, "{}", err),
        }
    }
}

impl Error for DatasetError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            DatasetError::Matrix(err) => Some(err),
            _ => None,
        }
    }
}

impl From<MatrixError> for DatasetError {
    fn from(err: MatrixError) -> Self {
        DatasetError::Matrix(err)
    }
}
