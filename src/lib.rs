//! Linalg Primer: small, pure vector and matrix primitives.
//!
//! Vectors are fixed-length sequences of reals; matrices are rectangular
//! grids whose shape is validated once at construction. Every operation is
//! a pure function of its inputs and reports precondition failures as a
//! [`LinalgError`].
//!
//! # Quick Start
//!
//! ```
//! use linalg_primer::prelude::*;
//!
//! let v1 = Vector::from_slice(&[1.0, 2.0]);
//! let v2 = Vector::from_slice(&[2.0, 1.0]);
//! let v3 = Vector::from_slice(&[3.0, 3.0]);
//!
//! let vs = [v1.clone(), v2, v3];
//! assert_eq!(vector_sum(&vs).unwrap().as_slice(), &[6.0, 6.0]);
//! assert!(vector_mean(&vs).unwrap().approx_eq(&Vector::from_slice(&[2.0, 2.0]), 1e-12));
//! assert_eq!(scalar_multiply(2.0, &v1).as_slice(), &[2.0, 4.0]);
//!
//! let eye = make_matrix(3, 3, |i, j| if i == j { 1.0 } else { 0.0 }).unwrap();
//! assert_eq!(shape(&eye), (3, 3));
//! ```
//!
//! # Modules
//!
//! - [`primitives`]: Core Vector and Matrix types
//! - [`linalg`]: Free-function interface over the primitives
//! - [`error`]: Error taxonomy

pub mod error;
pub mod linalg;
pub mod prelude;
pub mod primitives;

pub use error::{LinalgError, Result};
pub use primitives::{Matrix, Vector};
