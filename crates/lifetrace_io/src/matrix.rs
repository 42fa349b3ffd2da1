//! Dense matrix files and their product.
//!
//! File layout: a `rows cols` header followed by `rows` lines of `cols`
//! whitespace-separated numbers. Products are written back in the same
//! layout with every value truncated to an integer.

use crate::error::{IoError, Result};
use std::fmt;
use std::fs;
use std::path::Path;

/// Dense row-major matrix with positive dimensions.
#[derive(Debug, Clone, PartialEq)]
pub struct Matrix {
    rows: usize,
    cols: usize,
    data: Vec<f64>,
}

/// Number of values in a `rows`×`cols` matrix. Both dimensions must be positive.
fn element_count(rows: usize, cols: usize) -> Result<usize> {
    if rows == 0 || cols == 0 {
        return Err(IoError::matrix(format!(
            "matrix dimensions must be positive, got {rows}x{cols}"
        )));
    }
    rows.checked_mul(cols)
        .ok_or_else(|| IoError::matrix(format!("{rows}x{cols} matrix is too large")))
}

impl Matrix {
    /// Creates a matrix from row-major `data`.
    pub fn new(rows: usize, cols: usize, data: Vec<f64>) -> Result<Self> {
        let expected = element_count(rows, cols)?;
        if data.len() != expected {
            return Err(IoError::matrix(format!(
                "{rows}x{cols} matrix needs {expected} values, got {}",
                data.len()
            )));
        }
        Ok(Self { rows, cols, data })
    }

    /// Creates an all-zero matrix.
    pub fn zeros(rows: usize, cols: usize) -> Result<Self> {
        let len = element_count(rows, cols)?;
        Ok(Self {
            rows,
            cols,
            data: vec![0.0; len],
        })
    }

    /// Number of rows.
    #[must_use]
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns.
    #[must_use]
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Value at `(row, col)`, or `None` outside the matrix.
    #[inline]
    #[must_use]
    pub fn get(&self, row: usize, col: usize) -> Option<f64> {
        (row < self.rows && col < self.cols).then(|| self.data[row * self.cols + col])
    }

    /// Parses a `rows cols` header followed by `rows` lines of numbers.
    pub fn parse(text: &str) -> Result<Self> {
        let mut lines = text.lines().map(str::trim).filter(|l| !l.is_empty());
        let header = lines
            .next()
            .ok_or_else(|| IoError::matrix("matrix file is empty"))?;
        let dims: Vec<usize> = header
            .split_whitespace()
            .map(|t| t.parse::<usize>())
            .collect::<std::result::Result<_, _>>()
            .map_err(|_| IoError::matrix(format!("bad header '{header}'")))?;
        let (rows, cols) = match dims.as_slice() {
            [rows, cols] => (*rows, *cols),
            _ => {
                return Err(IoError::matrix(format!(
                    "header '{header}' must be 'rows cols'"
                )))
            }
        };

        element_count(rows, cols)?;

        let mut data = Vec::new();
        let mut seen_rows = 0;
        for (r, line) in lines.enumerate() {
            if r >= rows {
                return Err(IoError::matrix(format!("expected {rows} rows, found more")));
            }
            let before = data.len();
            for token in line.split_whitespace() {
                let value = token
                    .parse::<f64>()
                    .map_err(|_| IoError::matrix(format!("row {r}: '{token}' is not a number")))?;
                data.push(value);
            }
            let found = data.len() - before;
            if found != cols {
                return Err(IoError::matrix(format!(
                    "row {r} has {found} values, expected {cols}"
                )));
            }
            seen_rows += 1;
        }
        if seen_rows != rows {
            return Err(IoError::matrix(format!(
                "expected {rows} rows, found {seen_rows}"
            )));
        }
        Self::new(rows, cols, data)
    }

    /// Reads and parses a matrix file.
    pub fn read<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|e| {
            IoError::from(e).with_context(format!("failed to open '{}'", path.display()))
        })?;
        Self::parse(&text).map_err(|e| e.with_context(format!("matrix file '{}'", path.display())))
    }

    /// Writes the matrix with integer values.
    pub fn write<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        fs::write(path, self.to_string())?;
        Ok(())
    }

    /// `self × other`.
    pub fn multiply(&self, other: &Matrix) -> Result<Matrix> {
        if self.cols != other.rows {
            return Err(IoError::matrix(format!(
                "cannot multiply {}x{} by {}x{}",
                self.rows, self.cols, other.rows, other.cols
            )));
        }
        let mut out = Matrix::zeros(self.rows, other.cols)?;
        for i in 0..self.rows {
            let out_row = &mut out.data[i * other.cols..(i + 1) * other.cols];
            for k in 0..self.cols {
                let a = self.data[i * self.cols + k];
                let b_row = &other.data[k * other.cols..(k + 1) * other.cols];
                for (o, b) in out_row.iter_mut().zip(b_row) {
                    *o += a * b;
                }
            }
        }
        Ok(out)
    }

    /// Element-wise comparison within `tolerance`.
    #[must_use]
    pub fn approx_eq(&self, other: &Matrix, tolerance: f64) -> bool {
        self.rows == other.rows
            && self.cols == other.cols
            && self
                .data
                .iter()
                .zip(&other.data)
                .all(|(a, b)| (a - b).abs() <= tolerance)
    }
}

impl fmt::Display for Matrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{} {}", self.rows, self.cols)?;
        for row in self.data.chunks(self.cols) {
            let line: Vec<String> = row.iter().map(|v| (v.trunc() as i64).to_string()).collect();
            writeln!(f, "{}", line.join(" "))?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_and_multiply() {
        let a = Matrix::parse("2 3\n1 2 3\n4 5 6\n").unwrap();
        let b = Matrix::parse("3 2\n7 8\n9 10\n11 12\n").unwrap();
        let c = a.multiply(&b).unwrap();
        assert_eq!(c.rows(), 2);
        assert_eq!(c.cols(), 2);
        assert_eq!(c.to_string(), "2 2\n58 64\n139 154\n");
    }

    #[test]
    fn test_dimension_mismatch() {
        let a = Matrix::zeros(2, 3).unwrap();
        let err = a.multiply(&Matrix::zeros(2, 3).unwrap()).unwrap_err();
        assert!(err.to_string().contains("cannot multiply 2x3 by 2x3"));
    }

    #[test]
    fn test_integer_output_truncates() {
        let m = Matrix::new(1, 3, vec![2.9, -2.9, 0.4]).unwrap();
        assert_eq!(m.to_string(), "1 3\n2 -2 0\n");
    }

    #[test]
    fn test_malformed_files() {
        assert!(Matrix::parse("").is_err());
        assert!(Matrix::parse("2\n1 2\n").is_err());
        assert!(Matrix::parse("1 2\n1\n").is_err());
        assert!(Matrix::parse("1 2\n1 x\n").is_err());
        assert!(Matrix::parse("2 1\n1\n").is_err());
        assert!(Matrix::parse("1 1\n1\n2\n").is_err());
    }

    #[test]
    fn test_oversized_header_is_an_error() {
        let err = Matrix::parse("4294967296 4294967296\n1\n").unwrap_err();
        assert!(err.to_string().contains("too large"));
        assert!(Matrix::parse(&format!("{} 2\n1 2\n", usize::MAX)).is_err());

        let err = Matrix::parse("100000 100000\n1 2\n").unwrap_err();
        assert!(err.to_string().contains("row 0 has 2 values, expected 100000"));
    }

    #[test]
    fn test_zero_sized_matrices_rejected() {
        assert!(Matrix::new(2, 0, Vec::new()).is_err());
        assert!(Matrix::new(0, 3, Vec::new()).is_err());
        assert!(Matrix::zeros(3, 0).is_err());
        assert!(Matrix::parse("2 0\n\n\n").is_err());
    }

    #[test]
    fn test_approx_eq() {
        let a = Matrix::new(1, 2, vec![1.0, 2.0]).unwrap();
        let b = Matrix::new(1, 2, vec![1.0, 2.0 + 1e-9]).unwrap();
        assert!(a.approx_eq(&b, 1e-6));
        assert!(!a.approx_eq(&Matrix::zeros(1, 2).unwrap(), 1e-6));
    }

    #[test]
    fn test_write_then_read() {
        let path = std::env::temp_dir().join(format!("lifetrace_matrix_{}.txt", std::process::id()));
        let m = Matrix::new(2, 2, vec![1.0, -3.0, 5.0, 0.0]).unwrap();
        m.write(&path).unwrap();
        assert_eq!(Matrix::read(&path).unwrap(), m);
        let _ = fs::remove_file(&path);
    }
}
