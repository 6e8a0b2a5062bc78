//! Error types shared by [`Vec3`](crate::Vec3) and [`Mat3`](crate::Mat3).

use thiserror::Error;

/// Errors that can occur when building or combining vectors and matrices.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum MathError {
    /// A component, scalar, angle, epsilon or matrix entry was NaN or infinite.
    #[error("invalid argument: {param}={value} is not a finite number")]
    NonFinite { param: &'static str, value: f64 },

    /// A 1-based `(i, j)` entry index outside `1..=3`.
    #[error("invalid argument: i,j={i},{j} is not a valid matrix index")]
    MatrixIndex { i: usize, j: usize },

    /// A 1-based row index outside `1..=3`.
    #[error("invalid argument: i={0} is not a valid row index")]
    RowIndex(usize),

    /// A 1-based column index outside `1..=3`.
    #[error("invalid argument: i={0} is not a valid column index")]
    ColumnIndex(usize),

    /// Division by exactly zero, including normalizing the zero vector.
    #[error("can't divide a vector by zero")]
    DivideByZero,
}

impl MathError {
    /// Returns true for every variant caused by a bad numeric input or an
    /// out-of-range index, i.e. everything except [`MathError::DivideByZero`].
    pub fn is_invalid_argument(&self) -> bool {
        !matches!(self, MathError::DivideByZero)
    }
}

/// Result type for vector and matrix operations.
pub type MathResult<T> = Result<T, MathError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages_name_the_failure() {
        let err = MathError::NonFinite {
            param: "theta",
            value: f64::INFINITY,
        };
        assert_eq!(
            err.to_string(),
            "invalid argument: theta=inf is not a finite number"
        );

        assert_eq!(
            MathError::MatrixIndex { i: 0, j: 2 }.to_string(),
            "invalid argument: i,j=0,2 is not a valid matrix index"
        );
        assert_eq!(
            MathError::RowIndex(4).to_string(),
            "invalid argument: i=4 is not a valid row index"
        );
        assert_eq!(
            MathError::ColumnIndex(7).to_string(),
            "invalid argument: i=7 is not a valid column index"
        );
    }

    #[test]
    fn test_invalid_argument_grouping() {
        assert!(MathError::RowIndex(0).is_invalid_argument());
        assert!(MathError::NonFinite {
            param: "k",
            value: f64::NAN
        }
        .is_invalid_argument());
        assert!(!MathError::DivideByZero.is_invalid_argument());
    }
}
