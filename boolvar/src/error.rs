use thiserror::Error;

/// Why a pair of bounds cannot describe a boolean domain.
///
/// `operation` names the entry point that rejected the bounds, such as `"BoolVar::new"` or
/// `"BoolVar::init"`.
#[derive(Clone, Copy, Debug, Eq, Error, PartialEq)]
pub enum DomainError {
    /// A bound lies outside `{0, 1}`.
    #[error("{operation}: bounds {min}..={max} are not within 0..=1")]
    NotZeroOne {
        operation: &'static str,
        min: i32,
        max: i32,
    },

    /// Both bounds are legal, but no value lies between them.
    #[error("{operation}: bounds {min}..={max} describe an empty domain")]
    EmptyDomain {
        operation: &'static str,
        min: i32,
        max: i32,
    },
}

impl DomainError {
    pub fn operation(self) -> &'static str {
        match self {
            DomainError::NotZeroOne { operation, .. } | DomainError::EmptyDomain { operation, .. } => {
                operation
            }
        }
    }

    /// The rejected `(min, max)`.
    pub fn bounds(self) -> (i32, i32) {
        match self {
            DomainError::NotZeroOne { min, max, .. } | DomainError::EmptyDomain { min, max, .. } => {
                (min, max)
            }
        }
    }

    /// Attributes the error to `operation`.
    pub fn in_operation(self, operation: &'static str) -> Self {
        match self {
            DomainError::NotZeroOne { min, max, .. } => DomainError::NotZeroOne {
                operation,
                min,
                max,
            },
            DomainError::EmptyDomain { min, max, .. } => DomainError::EmptyDomain {
                operation,
                min,
                max,
            },
        }
    }
}
