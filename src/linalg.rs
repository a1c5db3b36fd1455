//! Free-function interface over [`Vector`] and [`Matrix`].
//!
//! Each function is a thin wrapper around the corresponding method, for
//! callers that prefer `add(&v, &w)` over `v.add(&w)`.
//!
//! # Examples
//!
//! ```
//! use linalg_primer::linalg::{get_column, shape, vector_mean};
//! use linalg_primer::{Matrix, Vector};
//!
//! let vs = [Vector::from_slice(&[1.0, 2.0]), Vector::from_slice(&[3.0, 4.0])];
//! assert_eq!(vector_mean(&vs).unwrap().as_slice(), &[2.0, 3.0]);
//!
//! let a = Matrix::from_rows(vec![vec![1.0, 2.0], vec![3.0, 4.0]]).unwrap();
//! assert_eq!(shape(&a), (2, 2));
//! assert_eq!(get_column(&a, 0).unwrap().as_slice(), &[1.0, 3.0]);
//! ```

use crate::error::Result;
use crate::primitives::{Matrix, Vector};

/// Element-wise sum of two vectors.
///
/// # Errors
///
/// `DimensionMismatch` if the lengths differ.
pub fn add(v: &Vector<f64>, w: &Vector<f64>) -> Result<Vector<f64>> {
    v.add(w)
}

/// Element-wise difference `v - w`.
///
/// # Errors
///
/// `DimensionMismatch` if the lengths differ.
pub fn subtract(v: &Vector<f64>, w: &Vector<f64>) -> Result<Vector<f64>> {
    v.sub(w)
}

/// Element-wise sum across a non-empty slice of equal-length vectors.
///
/// # Errors
///
/// `EmptyInput` for an empty slice, `DimensionMismatch` for ragged input.
pub fn vector_sum(vectors: &[Vector<f64>]) -> Result<Vector<f64>> {
    Vector::sum_of(vectors)
}

/// Multiplies every component of `v` by `c`.
#[must_use]
pub fn scalar_multiply(c: f64, v: &Vector<f64>) -> Vector<f64> {
    v.mul_scalar(c)
}

/// Component-wise mean of a non-empty slice of equal-length vectors.
///
/// # Errors
///
/// `EmptyInput` for an empty slice, `DimensionMismatch` for ragged input.
pub fn vector_mean(vectors: &[Vector<f64>]) -> Result<Vector<f64>> {
    Vector::mean_of(vectors)
}

/// Dot product.
///
/// # Errors
///
/// `DimensionMismatch` if the lengths differ.
pub fn dot(v: &Vector<f64>, w: &Vector<f64>) -> Result<f64> {
    v.dot(w)
}

#[must_use]
pub fn sum_of_squares(v: &Vector<f64>) -> f64 {
    v.sum_of_squares()
}

#[must_use]
pub fn magnitude(v: &Vector<f64>) -> f64 {
    v.magnitude()
}

/// # Errors
///
/// `DimensionMismatch` if the lengths differ.
pub fn squared_distance(v: &Vector<f64>, w: &Vector<f64>) -> Result<f64> {
    v.squared_distance(w)
}

/// # Errors
///
/// `DimensionMismatch` if the lengths differ.
pub fn distance(v: &Vector<f64>, w: &Vector<f64>) -> Result<f64> {
    v.distance(w)
}

/// (rows, cols); an empty matrix is `(0, 0)`.
#[must_use]
pub fn shape<T: Copy>(a: &Matrix<T>) -> (usize, usize) {
    a.shape()
}

/// # Errors
///
/// `IndexOutOfRange` unless `i < rows`.
pub fn get_row<T: Copy>(a: &Matrix<T>, i: usize) -> Result<Vector<T>> {
    a.row(i)
}

/// # Errors
///
/// `IndexOutOfRange` unless `j < cols`.
pub fn get_column<T: Copy>(a: &Matrix<T>, j: usize) -> Result<Vector<T>> {
    a.column(j)
}

/// Builds a `num_rows x num_cols` matrix with entry `(i, j) = entry_fn(i, j)`.
///
/// # Errors
///
/// `InvalidDimension` if `num_rows * num_cols` overflows `usize`.
pub fn make_matrix<T, F>(num_rows: usize, num_cols: usize, entry_fn: F) -> Result<Matrix<T>>
where
    T: Copy,
    F: Fn(usize, usize) -> T,
{
    Matrix::from_fn(num_rows, num_cols, entry_fn)
}
