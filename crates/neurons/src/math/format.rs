//! Debug renderings of a `Matrix`.
//!
//! Both formats truncate every cell toward zero before printing, so
//! `0.9` renders as `0` and `-1.5` as `-1`.
use std::fmt;

use crate::math::Matrix;

#[inline]
fn truncated(value: f64) -> i64 {
    value as i64
}

impl fmt::Display for Matrix {
    /// `[ a b c\n  d e f ]`: cells separated by spaces, rows by a newline and
    /// a two-space indent.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for row in 0..self.rows() {
            for value in self.row_slice(row) {
                write!(f, " {}", truncated(*value))?;
            }
            if row + 1 < self.rows() {
                write!(f, "\n ")?;
            }
        }
        write!(f, " ]")
    }
}

impl Matrix {
    pub fn to_display_string(&self) -> String {
        self.to_string()
    }

    /// Plain-text PGM (`P2`) with a maximum gray value of 255.
    ///
    /// The size line is written as `<rows> <cols>`, and every cell is followed
    /// by a space, including the last one on each line.
    pub fn to_pgm(&self) -> String {
        let mut out = format!("P2\n{} {}\n255\n", self.rows(), self.cols());
        for row in 0..self.rows() {
            for value in self.row_slice(row) {
                out.push_str(&truncated(*value).to_string());
                out.push(' ');
            }
            out.push('\n');
        }
        out
    }
}
