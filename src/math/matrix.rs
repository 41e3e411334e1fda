use serde::{Serialize, Deserialize};

use crate::error::{NumericError, Result};

/// Dense row-major matrix of `f64`, used for softmax Jacobians.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Matrix {
    pub rows: usize,
    pub cols: usize,
    pub data: Vec<Vec<f64>>,
}

impl Matrix {
    pub fn zeros(rows: usize, cols: usize) -> Matrix {
        Matrix {
            rows,
            cols,
            data: vec![vec![0.0; cols]; rows],
        }
    }

    /// Builds a matrix from rows; every row must have the first row's length.
    pub fn from_data(data: Vec<Vec<f64>>) -> Result<Matrix> {
        let cols = data.first().map_or(0, |row| row.len());
        if let Some(row) = data.iter().find(|row| row.len() != cols) {
            return Err(NumericError::Shape { expected: cols, found: row.len() });
        }
        Ok(Matrix {
            rows: data.len(),
            cols,
            data,
        })
    }

    /// Matrix-vector product `self · v`.
    pub fn mul_vec(&self, v: &[f64]) -> Result<Vec<f64>> {
        if v.len() != self.cols {
            return Err(NumericError::Shape { expected: self.cols, found: v.len() });
        }
        Ok(self.data.iter()
            .map(|row| row.iter().zip(v.iter()).map(|(a, b)| a * b).sum())
            .collect())
    }
}

impl Default for Matrix {
    fn default() -> Self {
        Matrix { rows: 0, cols: 0, data: vec![] }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_data_rejects_ragged_rows() {
        let err = Matrix::from_data(vec![vec![1.0, 2.0], vec![3.0]]).unwrap_err();
        assert_eq!(err, NumericError::Shape { expected: 2, found: 1 });
    }

    #[test]
    fn from_data_empty_is_default() {
        assert_eq!(Matrix::from_data(vec![]).unwrap(), Matrix::default());
    }

    #[test]
    fn mul_vec_checks_width() {
        let m = Matrix::from_data(vec![vec![1.0, 2.0], vec![3.0, 4.0]]).unwrap();
        assert_eq!(m.mul_vec(&[1.0, 1.0]).unwrap(), vec![3.0, 7.0]);
        assert_eq!(
            m.mul_vec(&[1.0]).unwrap_err(),
            NumericError::Shape { expected: 2, found: 1 }
        );
    }
}
