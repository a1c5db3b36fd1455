//! Core numeric primitives (Vector, Matrix).
//!
//! Both types are immutable values: operations borrow their inputs and
//! return freshly allocated results, so they can be shared across threads
//! without synchronization.

mod matrix;
mod vector;

pub use matrix::Matrix;
pub use vector::Vector;
