//! Matrix type for 2D numeric data.

use super::Vector;
use crate::error::{LinalgError, Result};
use serde::{Deserialize, Serialize};

/// A rectangular, immutable grid of values (row-major storage).
///
/// Rectangularity is checked once by every constructor, so accessors never
/// re-validate it. A matrix with zero rows always has zero columns.
///
/// On the wire a matrix is a list of rows; deserializing a ragged list is
/// rejected.
///
/// # Examples
///
/// ```
/// use linalg_primer::primitives::Matrix;
///
/// let m = Matrix::from_rows(vec![vec![1.0, 2.0], vec![3.0, 4.0], vec![5.0, 6.0]])
///     .expect("rows share a length");
/// assert_eq!(m.shape(), (3, 2));
/// assert_eq!(m.column(1).unwrap().as_slice(), &[2.0, 4.0, 6.0]);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(into = "Vec<Vec<T>>", try_from = "Vec<Vec<T>>")]
#[serde(bound(
    serialize = "T: Copy + Serialize",
    deserialize = "T: Copy + Deserialize<'de>"
))]
pub struct Matrix<T> {
    data: Vec<T>,
    rows: usize,
    cols: usize,
}

fn element_count(rows: usize, cols: usize) -> Result<usize> {
    rows.checked_mul(cols).ok_or_else(|| {
        LinalgError::invalid_dimension("rows * cols", format!("{rows} * {cols} overflows usize"))
    })
}

impl<T: Copy> Matrix<T> {
    /// Creates a new matrix from row-major data.
    ///
    /// # Errors
    ///
    /// Returns `InvalidDimension` if `rows * cols` overflows and
    /// `DimensionMismatch` if data length doesn't match `rows * cols`.
    pub fn from_vec(rows: usize, cols: usize, data: Vec<T>) -> Result<Self> {
        let expected = element_count(rows, cols)?;
        if data.len() != expected {
            return Err(LinalgError::dimension_mismatch(
                "rows * cols",
                expected,
                data.len(),
            ));
        }
        let cols = if rows == 0 { 0 } else { cols };
        Ok(Self { data, rows, cols })
    }

    /// Creates a matrix from a list of rows.
    ///
    /// # Errors
    ///
    /// Returns `DimensionMismatch` naming the first row whose length differs
    /// from row 0.
    pub fn from_rows(rows: Vec<Vec<T>>) -> Result<Self> {
        let cols = rows.first().map_or(0, Vec::len);
        let mut data = Vec::with_capacity(rows.len() * cols);
        for (i, row) in rows.iter().enumerate() {
            if row.len() != cols {
                return Err(LinalgError::dimension_mismatch(
                    &format!("row {i} len"),
                    cols,
                    row.len(),
                ));
            }
            data.extend_from_slice(row);
        }
        Ok(Self {
            data,
            rows: rows.len(),
            cols,
        })
    }

    /// Creates a matrix whose rows are copies of `vectors`.
    ///
    /// # Errors
    ///
    /// Same as [`Matrix::from_rows`].
    pub fn from_vectors(vectors: &[Vector<T>]) -> Result<Self> {
        Self::from_rows(vectors.iter().map(Vector::to_vec).collect())
    }

    /// Builds a `rows x cols` matrix with entry `(i, j) = entry_fn(i, j)`.
    ///
    /// `entry_fn` is called exactly once per position, in row-major order.
    /// It is expected to be deterministic.
    ///
    /// # Errors
    ///
    /// Returns `InvalidDimension` if `rows * cols` overflows `usize`.
    ///
    /// # Examples
    ///
    /// ```
    /// use linalg_primer::primitives::Matrix;
    ///
    /// let m = Matrix::from_fn(2, 3, |i, j| (10 * i + j) as f64).unwrap();
    /// assert_eq!(m.row(1).unwrap().as_slice(), &[10.0, 11.0, 12.0]);
    /// ```
    pub fn from_fn<F>(rows: usize, cols: usize, entry_fn: F) -> Result<Self>
    where
        F: Fn(usize, usize) -> T,
    {
        element_count(rows, cols)?;
        let entry_fn = &entry_fn;
        let data: Vec<T> = (0..rows)
            .flat_map(|i| (0..cols).map(move |j| entry_fn(i, j)))
            .collect();
        let cols = if rows == 0 { 0 } else { cols };
        Ok(Self { data, rows, cols })
    }

    /// Returns the shape as (rows, cols).
    #[must_use]
    pub fn shape(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    /// Returns the number of rows.
    #[must_use]
    pub fn n_rows(&self) -> usize {
        self.rows
    }

    /// Returns the number of columns.
    #[must_use]
    pub fn n_cols(&self) -> usize {
        self.cols
    }

    /// True when the matrix has no rows.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows == 0
    }

    fn check_row(&self, row: usize) -> Result<()> {
        if row >= self.rows {
            return Err(LinalgError::index_out_of_range(row, self.rows));
        }
        Ok(())
    }

    fn check_col(&self, col: usize) -> Result<()> {
        if col >= self.cols {
            return Err(LinalgError::index_out_of_range(col, self.cols));
        }
        Ok(())
    }

    /// Gets element at (row, col).
    ///
    /// # Errors
    ///
    /// Returns `IndexOutOfRange` if either index is out of bounds.
    pub fn get(&self, row: usize, col: usize) -> Result<T> {
        self.check_row(row)?;
        self.check_col(col)?;
        Ok(self.data[row * self.cols + col])
    }

    /// Returns a copy of row `row_idx` as a Vector.
    ///
    /// # Errors
    ///
    /// Returns `IndexOutOfRange` unless `row_idx < n_rows()`.
    pub fn row(&self, row_idx: usize) -> Result<Vector<T>> {
        self.check_row(row_idx)?;
        let start = row_idx * self.cols;
        Ok(Vector::from_slice(&self.data[start..start + self.cols]))
    }

    /// Returns column `col_idx` as a Vector, top to bottom.
    ///
    /// # Errors
    ///
    /// Returns `IndexOutOfRange` unless `col_idx < n_cols()`.
    pub fn column(&self, col_idx: usize) -> Result<Vector<T>> {
        self.check_col(col_idx)?;
        Ok((0..self.rows)
            .map(|row| self.data[row * self.cols + col_idx])
            .collect())
    }

    /// Iterates over the rows as slices.
    pub fn rows(&self) -> impl Iterator<Item = &[T]> + '_ {
        (0..self.rows).map(move |i| &self.data[i * self.cols..(i + 1) * self.cols])
    }

    /// Returns the underlying data as a slice.
    #[must_use]
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    /// Copies the matrix into nested row vectors.
    #[must_use]
    pub fn to_rows(&self) -> Vec<Vec<T>> {
        self.rows().map(<[T]>::to_vec).collect()
    }
}

impl Matrix<f64> {
    /// Creates a matrix of zeros.
    ///
    /// # Errors
    ///
    /// Returns `InvalidDimension` if `rows * cols` overflows.
    pub fn zeros(rows: usize, cols: usize) -> Result<Self> {
        Self::from_fn(rows, cols, |_, _| 0.0)
    }

    /// Creates the `n x n` identity matrix.
    ///
    /// # Errors
    ///
    /// Returns `InvalidDimension` if `n * n` overflows.
    pub fn identity(n: usize) -> Result<Self> {
        Self::from_fn(n, n, |i, j| if i == j { 1.0 } else { 0.0 })
    }
}

impl<T: Copy> TryFrom<Vec<Vec<T>>> for Matrix<T> {
    type Error = LinalgError;

    fn try_from(rows: Vec<Vec<T>>) -> Result<Self> {
        Self::from_rows(rows)
    }
}

impl<T: Copy> From<Matrix<T>> for Vec<Vec<T>> {
    fn from(matrix: Matrix<T>) -> Self {
        matrix.to_rows()
    }
}

#[cfg(test)]
#[path = "matrix_tests.rs"]
mod tests;

#[cfg(test)]
#[path = "tests_matrix_contract.rs"]
mod tests_matrix_contract;
