//! Convenience re-exports for common usage.
//!
//! # Usage
//!
//! ```
//! use linalg_primer::prelude::*;
//! ```

pub use crate::error::{LinalgError, Result};
pub use crate::linalg::{
    add, distance, dot, get_column, get_row, magnitude, make_matrix, scalar_multiply, shape,
    squared_distance, subtract, sum_of_squares, vector_mean, vector_sum,
};
pub use crate::primitives::{Matrix, Vector};
