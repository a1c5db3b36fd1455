//! Error types for vector and matrix operations.
//!
//! Every failure is detected by the operation that first observes the
//! violated precondition and returned to the caller unchanged.

use thiserror::Error;

/// Main error type for linear algebra operations.
///
/// # Examples
///
/// ```
/// use linalg_primer::error::LinalgError;
///
/// let err = LinalgError::DimensionMismatch {
///     expected: "len=2".to_string(),
///     actual: "3".to_string(),
/// };
/// assert!(err.to_string().contains("dimension mismatch"));
/// ```
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum LinalgError {
    /// Two operands that must share a length (or a matrix whose rows must
    /// share a length) do not.
    #[error("dimension mismatch: expected {expected}, got {actual}")]
    DimensionMismatch {
        /// Expected dimensions description
        expected: String,
        /// Actual dimensions found
        actual: String,
    },

    /// An operation that needs at least one element received none.
    #[error("empty input: {context}")]
    EmptyInput {
        /// What was empty
        context: String,
    },

    /// A row or column index lies outside `[0, len)`.
    #[error("index {index} out of range (len={len})")]
    IndexOutOfRange {
        /// Requested index
        index: usize,
        /// Number of valid positions
        len: usize,
    },

    /// A requested matrix shape cannot be constructed.
    #[error("invalid dimension: {param} = {value}")]
    InvalidDimension {
        /// Which dimension was rejected
        param: String,
        /// The rejected value, with the reason
        value: String,
    },
}

impl LinalgError {
    /// Create a dimension mismatch error with descriptive context
    #[must_use]
    pub fn dimension_mismatch(context: &str, expected: usize, actual: usize) -> Self {
        Self::DimensionMismatch {
            expected: format!("{context}={expected}"),
            actual: format!("{actual}"),
        }
    }

    /// Create an empty input error
    #[must_use]
    pub fn empty_input(context: &str) -> Self {
        Self::EmptyInput {
            context: context.to_string(),
        }
    }

    /// Create an index out of range error
    #[must_use]
    pub fn index_out_of_range(index: usize, len: usize) -> Self {
        Self::IndexOutOfRange { index, len }
    }

    /// Create an invalid dimension error
    #[must_use]
    pub fn invalid_dimension(param: &str, value: impl Into<String>) -> Self {
        Self::InvalidDimension {
            param: param.to_string(),
            value: value.into(),
        }
    }
}

/// Convenience type alias for Results.
pub type Result<T> = std::result::Result<T, LinalgError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dimension_mismatch_display() {
        let err = LinalgError::DimensionMismatch {
            expected: "len=2".to_string(),
            actual: "3".to_string(),
        };
        let msg = err.to_string();
        assert!(msg.contains("dimension mismatch"));
        assert!(msg.contains("len=2"));
        assert!(msg.contains('3'));
    }

    #[test]
    fn test_dimension_mismatch_helper() {
        let err = LinalgError::dimension_mismatch("rows", 100, 50);
        let msg = err.to_string();
        assert!(msg.contains("rows=100"));
        assert!(msg.contains("50"));
    }

    #[test]
    fn test_empty_input_helper() {
        let err = LinalgError::empty_input("vector_mean");
        assert_eq!(err.to_string(), "empty input: vector_mean");
        assert!(matches!(err, LinalgError::EmptyInput { .. }));
    }

    #[test]
    fn test_index_out_of_range_helper() {
        let err = LinalgError::index_out_of_range(5, 3);
        let msg = err.to_string();
        assert!(msg.contains("index 5"));
        assert!(msg.contains("len=3"));
    }

    #[test]
    fn test_invalid_dimension_helper() {
        let err = LinalgError::invalid_dimension("rows * cols", "overflows usize");
        let msg = err.to_string();
        assert!(msg.contains("invalid dimension"));
        assert!(msg.contains("rows * cols"));
        assert!(msg.contains("overflows usize"));
    }

    #[test]
    fn test_error_is_std_error() {
        fn _assert_error<E: std::error::Error + Send + Sync + 'static>() {}
        _assert_error::<LinalgError>();
    }

    #[test]
    fn test_error_clone_eq() {
        let err = LinalgError::index_out_of_range(1, 0);
        assert_eq!(err.clone(), err);
    }
}
