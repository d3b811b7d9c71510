//! Dense square complex matrix storage.
//!
//! The permanent kernel only ever sees matrices that already satisfy the
//! squareness invariant, so the invariant is enforced here, once, at
//! construction. Storage is a flat row-major buffer with stride equal to
//! the dimension.

use num_complex::Complex64;
use thiserror::Error;

/// Errors raised when constructing a [`SquareMatrix`].
#[derive(Debug, Error, PartialEq, Eq)]
pub enum MatrixError {
    /// The row set does not describe a square matrix.
    #[error("matrix must be square, got {rows}x{cols}")]
    NotSquare {
        /// Number of rows supplied.
        rows: usize,
        /// Length of the offending row.
        cols: usize,
    },

    /// The flat buffer does not hold dim * dim entries.
    #[error("buffer of length {len} cannot form a {dim}x{dim} matrix")]
    DimensionMismatch {
        /// Requested dimension.
        dim: usize,
        /// Actual buffer length.
        len: usize,
    },
}

/// An n x n dense matrix of complex double-precision values.
#[derive(Debug, Clone, PartialEq)]
pub struct SquareMatrix {
    dim: usize,
    data: Vec<Complex64>,
}

impl SquareMatrix {
    /// Builds a matrix from a row-major flat buffer of `dim * dim` entries.
    pub fn from_vec(dim: usize, data: Vec<Complex64>) -> Result<Self, MatrixError> {
        if data.len() != dim * dim {
            return Err(MatrixError::DimensionMismatch {
                dim,
                len: data.len(),
            });
        }
        Ok(Self { dim, data })
    }

    /// Builds a matrix from explicit rows. Every row must be as long as the
    /// row set itself, otherwise the input is not square.
    pub fn from_rows(rows: &[Vec<Complex64>]) -> Result<Self, MatrixError> {
        let dim = rows.len();
        for row in rows {
            if row.len() != dim {
                return Err(MatrixError::NotSquare {
                    rows: dim,
                    cols: row.len(),
                });
            }
        }
        let data = rows.iter().flatten().copied().collect();
        Ok(Self { dim, data })
    }

    /// The n x n identity matrix.
    pub fn identity(dim: usize) -> Self {
        let mut data = vec![Complex64::new(0.0, 0.0); dim * dim];
        for i in 0..dim {
            data[i * dim + i] = Complex64::new(1.0, 0.0);
        }
        Self { dim, data }
    }

    /// Matrix dimension n.
    pub fn dim(&self) -> usize {
        self.dim
    }

    /// Entry at (row, col).
    #[inline]
    pub fn get(&self, row: usize, col: usize) -> Complex64 {
        self.data[row * self.dim + col]
    }

    /// The underlying row-major buffer.
    pub fn as_slice(&self) -> &[Complex64] {
        &self.data
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn c(re: f64, im: f64) -> Complex64 {
        Complex64::new(re, im)
    }

    #[test]
    fn test_from_vec() {
        let m = SquareMatrix::from_vec(2, vec![c(1.0, 0.0), c(2.0, 0.0), c(3.0, 0.0), c(4.0, 0.0)])
            .unwrap();
        assert_eq!(m.dim(), 2);
        assert_eq!(m.get(0, 0), c(1.0, 0.0));
        assert_eq!(m.get(0, 1), c(2.0, 0.0));
        assert_eq!(m.get(1, 0), c(3.0, 0.0));
        assert_eq!(m.get(1, 1), c(4.0, 0.0));
    }

    #[test]
    fn test_from_vec_empty() {
        let m = SquareMatrix::from_vec(0, vec![]).unwrap();
        assert_eq!(m.dim(), 0);
        assert!(m.as_slice().is_empty());
    }

    #[test]
    fn test_from_vec_wrong_length() {
        let result = SquareMatrix::from_vec(2, vec![c(1.0, 0.0); 3]);
        assert_eq!(
            result,
            Err(MatrixError::DimensionMismatch { dim: 2, len: 3 })
        );
    }

    #[test]
    fn test_from_rows() {
        let m = SquareMatrix::from_rows(&[
            vec![c(1.0, 0.0), c(2.0, 0.0)],
            vec![c(3.0, 0.0), c(4.0, 0.0)],
        ])
        .unwrap();
        assert_eq!(m.dim(), 2);
        assert_eq!(m.get(1, 0), c(3.0, 0.0));
    }

    #[test]
    fn test_from_rows_ragged() {
        let result = SquareMatrix::from_rows(&[
            vec![c(1.0, 0.0), c(2.0, 0.0)],
            vec![c(3.0, 0.0)],
        ]);
        assert_eq!(result, Err(MatrixError::NotSquare { rows: 2, cols: 1 }));
    }

    #[test]
    fn test_from_rows_rectangular() {
        let result = SquareMatrix::from_rows(&[vec![c(1.0, 0.0), c(2.0, 0.0)]]);
        assert_eq!(result, Err(MatrixError::NotSquare { rows: 1, cols: 2 }));
    }

    #[test]
    fn test_identity() {
        let m = SquareMatrix::identity(3);
        for i in 0..3 {
            for j in 0..3 {
                let expected = if i == j { 1.0 } else { 0.0 };
                assert_eq!(m.get(i, j), c(expected, 0.0));
            }
        }
    }

    #[test]
    fn test_error_messages() {
        let err = MatrixError::NotSquare { rows: 3, cols: 2 };
        assert_eq!(err.to_string(), "matrix must be square, got 3x2");

        let err = MatrixError::DimensionMismatch { dim: 2, len: 5 };
        assert_eq!(
            err.to_string(),
            "buffer of length 5 cannot form a 2x2 matrix"
        );
    }
}
