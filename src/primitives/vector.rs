//! Vector type for 1D numeric data.

use crate::error::{LinalgError, Result};
use serde::{Deserialize, Serialize};
use std::ops::Index;

/// A fixed-length, immutable sequence of values.
///
/// Every arithmetic operation returns a new `Vector`; operands are only
/// borrowed.
///
/// # Examples
///
/// ```
/// use linalg_primer::primitives::Vector;
///
/// let v = Vector::from_slice(&[3.0, 4.0]);
/// assert_eq!(v.len(), 2);
/// assert!((v.magnitude() - 5.0).abs() < 1e-12);
/// ```
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Vector<T> {
    data: Vec<T>,
}

impl<T: Copy> Vector<T> {
    /// Creates a vector that takes ownership of `data`.
    #[must_use]
    pub fn from_vec(data: Vec<T>) -> Self {
        Self { data }
    }

    /// Creates a vector by copying a slice.
    #[must_use]
    pub fn from_slice(data: &[T]) -> Self {
        Self {
            data: data.to_vec(),
        }
    }

    /// Returns the number of components.
    #[must_use]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Returns true for the zero-length vector.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Returns the component at `index`, or `None` past the end.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<T> {
        self.data.get(index).copied()
    }

    /// Returns the underlying data as a slice.
    #[must_use]
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    /// Iterates over the components in order.
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.data.iter()
    }

    /// Copies the components into a new `Vec`.
    #[must_use]
    pub fn to_vec(&self) -> Vec<T> {
        self.data.clone()
    }

    /// Consumes the vector, returning its storage.
    #[must_use]
    pub fn into_vec(self) -> Vec<T> {
        self.data
    }
}

impl Vector<f64> {
    /// Creates a vector of `len` zeros.
    #[must_use]
    pub fn zeros(len: usize) -> Self {
        Self {
            data: vec![0.0; len],
        }
    }

    fn ensure_same_len(&self, other: &Self) -> Result<()> {
        if self.len() != other.len() {
            return Err(LinalgError::dimension_mismatch(
                "len",
                self.len(),
                other.len(),
            ));
        }
        Ok(())
    }

    /// Element-wise sum.
    ///
    /// # Errors
    ///
    /// Returns `DimensionMismatch` if the lengths differ.
    pub fn add(&self, other: &Self) -> Result<Self> {
        self.ensure_same_len(other)?;
        Ok(self
            .data
            .iter()
            .zip(other.data.iter())
            .map(|(a, b)| a + b)
            .collect())
    }

    /// Element-wise difference `self - other`.
    ///
    /// # Errors
    ///
    /// Returns `DimensionMismatch` if the lengths differ.
    pub fn sub(&self, other: &Self) -> Result<Self> {
        self.ensure_same_len(other)?;
        Ok(self
            .data
            .iter()
            .zip(other.data.iter())
            .map(|(a, b)| a - b)
            .collect())
    }

    /// Multiplies every component by `scalar`.
    #[must_use]
    pub fn mul_scalar(&self, scalar: f64) -> Self {
        self.data.iter().map(|x| scalar * x).collect()
    }

    /// Dot product.
    ///
    /// # Errors
    ///
    /// Returns `DimensionMismatch` if the lengths differ.
    pub fn dot(&self, other: &Self) -> Result<f64> {
        self.ensure_same_len(other)?;
        Ok(self
            .data
            .iter()
            .zip(other.data.iter())
            .map(|(a, b)| a * b)
            .sum())
    }

    /// Sum of each component squared, i.e. `self · self`.
    ///
    /// The zero-length vector yields `0.0`.
    #[must_use]
    pub fn sum_of_squares(&self) -> f64 {
        self.data.iter().map(|x| x * x).sum()
    }

    /// Euclidean length. Never negative.
    #[must_use]
    pub fn magnitude(&self) -> f64 {
        self.sum_of_squares().sqrt()
    }

    /// Squared Euclidean distance, derived from [`Vector::sub`] and
    /// [`Vector::sum_of_squares`].
    ///
    /// # Errors
    ///
    /// Returns `DimensionMismatch` if the lengths differ.
    pub fn squared_distance(&self, other: &Self) -> Result<f64> {
        Ok(self.sub(other)?.sum_of_squares())
    }

    /// Euclidean distance, derived from [`Vector::sub`] and
    /// [`Vector::magnitude`].
    ///
    /// # Errors
    ///
    /// Returns `DimensionMismatch` if the lengths differ.
    pub fn distance(&self, other: &Self) -> Result<f64> {
        Ok(self.sub(other)?.magnitude())
    }

    /// Element-wise sum across all `vectors`.
    ///
    /// # Errors
    ///
    /// Returns `EmptyInput` for an empty slice and `DimensionMismatch` if
    /// any vector's length differs from the first.
    ///
    /// # Examples
    ///
    /// ```
    /// use linalg_primer::primitives::Vector;
    ///
    /// let vs = [
    ///     Vector::from_slice(&[1.0, 2.0]),
    ///     Vector::from_slice(&[2.0, 1.0]),
    ///     Vector::from_slice(&[3.0, 3.0]),
    /// ];
    /// assert_eq!(Vector::sum_of(&vs).unwrap().as_slice(), &[6.0, 6.0]);
    /// ```
    pub fn sum_of(vectors: &[Self]) -> Result<Self> {
        let (first, rest) = vectors
            .split_first()
            .ok_or_else(|| LinalgError::empty_input("vector sum needs at least one vector"))?;
        rest.iter().try_fold(first.clone(), |acc, v| acc.add(v))
    }

    /// Component-wise mean: `sum_of(vectors)` scaled by `1 / vectors.len()`.
    ///
    /// # Errors
    ///
    /// Same as [`Vector::sum_of`]; the empty case is rejected before any
    /// division happens.
    pub fn mean_of(vectors: &[Self]) -> Result<Self> {
        let total = Self::sum_of(vectors)?;
        Ok(total.mul_scalar(1.0 / vectors.len() as f64))
    }

    /// True when both vectors have the same length and every pair of
    /// components differs by at most `tolerance`.
    #[must_use]
    pub fn approx_eq(&self, other: &Self, tolerance: f64) -> bool {
        self.len() == other.len()
            && self
                .data
                .iter()
                .zip(other.data.iter())
                .all(|(a, b)| (a - b).abs() <= tolerance)
    }
}

impl<T> Index<usize> for Vector<T> {
    type Output = T;

    /// # Panics
    ///
    /// Panics if `index >= len`, like slice indexing.
    fn index(&self, index: usize) -> &T {
        &self.data[index]
    }
}

impl<T> From<Vec<T>> for Vector<T> {
    fn from(data: Vec<T>) -> Self {
        Self { data }
    }
}

impl<T> FromIterator<T> for Vector<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self {
            data: iter.into_iter().collect(),
        }
    }
}

impl<'a, T> IntoIterator for &'a Vector<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.data.iter()
    }
}

#[cfg(test)]
#[path = "vector_tests.rs"]
mod tests;

#[cfg(test)]
#[path = "tests_vector_contract.rs"]
mod tests_vector_contract;
