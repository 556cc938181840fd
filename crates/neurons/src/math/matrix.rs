use std::ops::{Index, Mul, Neg};

use rand::distributions::Uniform;
use rand::Rng;

use crate::error::MatrixError;

#[derive(Clone, Debug, PartialEq)]
pub struct Matrix {
    data: Vec<f64>,
    rows: usize,
    cols: usize,
}

impl Matrix {
    /// Build a matrix from a row-major buffer of exactly `rows * cols` values.
    ///
    /// A shape whose cell count overflows `usize` never matches a buffer.
    pub fn from_vec(rows: usize, cols: usize, data: Vec<f64>) -> Result<Self, MatrixError> {
        if rows.checked_mul(cols) != Some(data.len()) {
            return Err(MatrixError::Shape {
                rows,
                cols,
                len: data.len(),
            });
        }
        Ok(Self { data, rows, cols })
    }

    pub fn from_slice(rows: usize, cols: usize, data: &[f64]) -> Result<Self, MatrixError> {
        Self::from_vec(rows, cols, data.to_vec())
    }

    /// An `n x 1` column vector.
    pub fn column(data: Vec<f64>) -> Self {
        let rows = data.len();
        Self {
            data,
            rows,
            cols: 1,
        }
    }

    /// Fill every cell with `f(i, j)`, visiting cells in row-major order.
    ///
    /// # Panics
    ///
    /// Panics if `rows * cols` overflows `usize`.
    pub fn from_fn<F>(rows: usize, cols: usize, mut f: F) -> Self
    where
        F: FnMut(usize, usize) -> f64,
    {
        let len = rows
            .checked_mul(cols)
            .unwrap_or_else(|| panic!("shape ({}, {}) overflows usize", rows, cols));
        let mut data = Vec::with_capacity(len);
        for i in 0..rows {
            for j in 0..cols {
                data.push(f(i, j));
            }
        }
        Self { data, rows, cols }
    }

    /// Fill every cell with `f()`, called once per cell in row-major order.
    pub fn from_fill<F>(rows: usize, cols: usize, mut f: F) -> Self
    where
        F: FnMut() -> f64,
    {
        Self::from_fn(rows, cols, |_, _| f())
    }

    pub fn zeros(rows: usize, cols: usize) -> Self {
        Self::from_fill(rows, cols, || 0.0)
    }

    pub fn ones(rows: usize, cols: usize) -> Self {
        Self::from_fill(rows, cols, || 1.0)
    }

    /// Uniform random fill over `[low, high)`.
    ///
    /// # Panics
    ///
    /// Panics if `low >= high`, as `rand::distributions::Uniform` does.
    pub fn random_uniform<R: Rng + ?Sized>(
        rows: usize,
        cols: usize,
        low: f64,
        high: f64,
        rng: &mut R,
    ) -> Self {
        let dist = Uniform::new(low, high);
        Self::from_fill(rows, cols, || rng.sample(dist))
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn shape(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// The raw row-major buffer.
    pub fn data(&self) -> &[f64] {
        &self.data
    }

    pub fn into_vec(self) -> Vec<f64> {
        self.data
    }

    #[inline]
    fn offset(&self, row: usize, col: usize) -> usize {
        row * self.cols + col
    }

    fn check_bounds(&self, row: usize, col: usize) -> Result<usize, MatrixError> {
        if row >= self.rows || col >= self.cols {
            return Err(MatrixError::OutOfBounds {
                index: (row, col),
                shape: self.shape(),
            });
        }
        Ok(self.offset(row, col))
    }

    pub fn get(&self, row: usize, col: usize) -> Result<f64, MatrixError> {
        let offset = self.check_bounds(row, col)?;
        Ok(self.data[offset])
    }

    pub fn set(&mut self, row: usize, col: usize, value: f64) -> Result<(), MatrixError> {
        let offset = self.check_bounds(row, col)?;
        self.data[offset] = value;
        Ok(())
    }

    pub fn row_slice(&self, row: usize) -> &[f64] {
        assert!(row < self.rows, "row index out of bounds");
        let start = self.offset(row, 0);
        &self.data[start..start + self.cols]
    }

    /// Apply `f` to every cell, keeping the shape.
    pub fn map<F>(&self, mut f: F) -> Matrix
    where
        F: FnMut(f64) -> f64,
    {
        Matrix {
            data: self.data.iter().map(|&v| f(v)).collect(),
            rows: self.rows,
            cols: self.cols,
        }
    }

    fn ensure_same_shape(&self, other: &Matrix, op: &'static str) -> Result<(), MatrixError> {
        if self.shape() != other.shape() {
            return Err(MatrixError::ShapeMismatch {
                op,
                left: self.shape(),
                right: other.shape(),
            });
        }
        Ok(())
    }

    fn zip_with<F>(&self, other: &Matrix, op: &'static str, f: F) -> Result<Matrix, MatrixError>
    where
        F: Fn(f64, f64) -> f64,
    {
        self.ensure_same_shape(other, op)?;
        Ok(Matrix {
            data: self
                .data
                .iter()
                .zip(other.data.iter())
                .map(|(&a, &b)| f(a, b))
                .collect(),
            rows: self.rows,
            cols: self.cols,
        })
    }

    pub fn add(&self, other: &Matrix) -> Result<Matrix, MatrixError> {
        self.zip_with(other, "add", |a, b| a + b)
    }

    pub fn subtract(&self, other: &Matrix) -> Result<Matrix, MatrixError> {
        self.zip_with(other, "subtract", |a, b| a - b)
    }

    /// Hadamard product.
    pub fn elementwise_multiply(&self, other: &Matrix) -> Result<Matrix, MatrixError> {
        self.zip_with(other, "elementwise_multiply", |a, b| a * b)
    }

    /// In-place `self += other`. Nothing is written when the shapes differ.
    pub fn accumulate(&mut self, other: &Matrix) -> Result<(), MatrixError> {
        self.ensure_same_shape(other, "accumulate")?;
        for (cell, &v) in self.data.iter_mut().zip(other.data.iter()) {
            *cell += v;
        }
        Ok(())
    }

    /// Matrix multiplication, `(n x m) * (m x p) -> (n x p)`.
    ///
    /// Each cell is the dot product of a row of `self` and a column of
    /// `other`, summed in ascending `k`.
    pub fn product(&self, other: &Matrix) -> Result<Matrix, MatrixError> {
        if self.cols != other.rows {
            return Err(MatrixError::ShapeMismatch {
                op: "product",
                left: self.shape(),
                right: other.shape(),
            });
        }
        let mut data = Vec::with_capacity(self.rows * other.cols);
        for i in 0..self.rows {
            let row = self.row_slice(i);
            for j in 0..other.cols {
                let mut accumulator = 0.0;
                for (k, &a) in row.iter().enumerate() {
                    accumulator += a * other.data[other.offset(k, j)];
                }
                data.push(accumulator);
            }
        }
        Ok(Matrix {
            data,
            rows: self.rows,
            cols: other.cols,
        })
    }

    pub fn scale(&self, alpha: f64) -> Matrix {
        self.map(|v| alpha * v)
    }

    /// Divide every cell by `alpha`. Fails when `alpha` is exactly zero.
    pub fn divide(&self, alpha: f64) -> Result<Matrix, MatrixError> {
        if alpha == 0.0 {
            return Err(MatrixError::DivisionByZero);
        }
        Ok(self.map(|v| v / alpha))
    }

    /// Element-wise `numerator / self`. Fails if any cell is exactly zero.
    pub fn rdiv(&self, numerator: f64) -> Result<Matrix, MatrixError> {
        if self.data.iter().any(|&v| v == 0.0) {
            return Err(MatrixError::DivisionByZero);
        }
        Ok(self.map(|v| numerator / v))
    }

    pub fn negate(&self) -> Matrix {
        self.scale(-1.0)
    }

    pub fn exponential(&self) -> Matrix {
        self.map(f64::exp)
    }

    pub fn sigmoid(&self) -> Matrix {
        self.map(sigmoid)
    }

    pub fn sigmoid_derivative(&self) -> Matrix {
        self.map(|v| {
            let s = sigmoid(v);
            s * (1.0 - s)
        })
    }

    pub fn transpose(&self) -> Matrix {
        Matrix::from_fn(self.cols, self.rows, |j, i| self.data[self.offset(i, j)])
    }

    /// Flat row-major index of the cell with the largest absolute value.
    ///
    /// Ties go to the first cell in iteration order. Returns `None` for an
    /// empty matrix.
    pub fn argmax(&self) -> Option<usize> {
        argmax_abs(&self.data)
    }
}

fn sigmoid(x: f64) -> f64 {
    1.0 / (1.0 + (-x).exp())
}

/// Index of the component with the largest absolute value, first one winning
/// ties. `None` when `values` is empty.
pub fn argmax_abs(values: &[f64]) -> Option<usize> {
    let mut best: Option<(usize, f64)> = None;
    for (idx, &v) in values.iter().enumerate() {
        let magnitude = v.abs();
        match best {
            None => best = Some((idx, magnitude)),
            Some((_, current)) if magnitude > current => best = Some((idx, magnitude)),
            _ => {}
        }
    }
    best.map(|(idx, _)| idx)
}

impl Index<(usize, usize)> for Matrix {
    type Output = f64;

    fn index(&self, index: (usize, usize)) -> &Self::Output {
        let (row, col) = index;
        assert!(
            row < self.rows && col < self.cols,
            "index {:?} out of bounds for shape {:?}",
            index,
            self.shape()
        );
        &self.data[self.offset(row, col)]
    }
}

impl<'a> Neg for &'a Matrix {
    type Output = Matrix;

    fn neg(self) -> Self::Output {
        self.negate()
    }
}

impl Neg for Matrix {
    type Output = Matrix;

    fn neg(self) -> Self::Output {
        self.negate()
    }
}

impl<'a> Mul<f64> for &'a Matrix {
    type Output = Matrix;

    fn mul(self, rhs: f64) -> Self::Output {
        self.scale(rhs)
    }
}

impl<'a> Mul<&'a Matrix> for f64 {
    type Output = Matrix;

    fn mul(self, rhs: &'a Matrix) -> Self::Output {
        rhs.scale(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn argmax_abs_prefers_magnitude_and_first_tie() {
        assert_eq!(argmax_abs(&[1.0, -3.0, 2.0]), Some(1));
        assert_eq!(argmax_abs(&[2.0, -2.0, 1.0]), Some(0));
        assert_eq!(argmax_abs(&[]), None);
    }

    #[test]
    fn sigmoid_at_zero_is_half() {
        assert_eq!(sigmoid(0.0), 0.5);
    }
}
