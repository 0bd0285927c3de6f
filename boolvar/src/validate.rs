use crate::{BoolDomain, DomainError};

/// Bounds that have passed [`validate`]: `0 <= min <= max <= 1`.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct ValidBounds {
    min: i32,
    max: i32,
}

impl ValidBounds {
    pub fn min(self) -> i32 {
        self.min
    }

    pub fn max(self) -> i32 {
        self.max
    }

    pub fn domain(self) -> BoolDomain {
        match (self.min, self.max) {
            (0, 0) => BoolDomain::Zero,
            (1, 1) => BoolDomain::One,
            _ => BoolDomain::ZeroOne,
        }
    }
}

/// Checks that `min..=max` is a non-empty subset of `{0, 1}`.
///
/// A range violation (`min < 0` or `max > 1`) is reported as
/// [`NotZeroOne`](DomainError::NotZeroOne) even when the bounds are also reversed. Reversed bounds
/// that stay within range, like `(2, 0)`, are [`EmptyDomain`](DomainError::EmptyDomain).
///
/// Errors are attributed to `"validate"`; callers rename them with
/// [`DomainError::in_operation`].
///
/// ```
/// # use boolvar::{validate, BoolDomain, DomainError};
/// assert_eq!(validate(0, 1).unwrap().domain(), BoolDomain::ZeroOne);
/// assert_eq!(
///     validate(1, 0),
///     Err(DomainError::EmptyDomain { operation: "validate", min: 1, max: 0 })
/// );
/// assert_eq!(
///     validate(3, 2),
///     Err(DomainError::NotZeroOne { operation: "validate", min: 3, max: 2 })
/// );
/// assert_eq!(
///     validate(2, 0),
///     Err(DomainError::EmptyDomain { operation: "validate", min: 2, max: 0 })
/// );
/// ```
pub fn validate(min: i32, max: i32) -> Result<ValidBounds, DomainError> {
    let operation = "validate";
    if min < 0 || max > 1 {
        return Err(DomainError::NotZeroOne { operation, min, max });
    }
    if min > max {
        return Err(DomainError::EmptyDomain { operation, min, max });
    }
    Ok(ValidBounds { min, max })
}
