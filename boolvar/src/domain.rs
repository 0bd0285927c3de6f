use std::fmt::{self, Display, Formatter};

/// A non-empty subset of `{0, 1}`.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum BoolDomain {
    /// `{0}`
    Zero,
    /// `{1}`
    One,
    /// `{0, 1}`
    ZeroOne,
}

impl BoolDomain {
    pub fn min(self) -> i32 {
        match self {
            BoolDomain::One => 1,
            BoolDomain::Zero | BoolDomain::ZeroOne => 0,
        }
    }

    pub fn max(self) -> i32 {
        match self {
            BoolDomain::Zero => 0,
            BoolDomain::One | BoolDomain::ZeroOne => 1,
        }
    }

    pub fn size(self) -> u32 {
        match self {
            BoolDomain::ZeroOne => 2,
            BoolDomain::Zero | BoolDomain::One => 1,
        }
    }

    pub fn assigned(self) -> bool {
        self != BoolDomain::ZeroOne
    }

    /// The assigned value, if there is exactly one.
    pub fn val(self) -> Option<i32> {
        match self {
            BoolDomain::Zero => Some(0),
            BoolDomain::One => Some(1),
            BoolDomain::ZeroOne => None,
        }
    }

    pub fn contains(self, value: i32) -> bool {
        self.min() <= value && value <= self.max()
    }

    /// Assigned to 0.
    pub fn zero(self) -> bool {
        self == BoolDomain::Zero
    }

    /// Assigned to 1.
    pub fn one(self) -> bool {
        self == BoolDomain::One
    }

    /// Not yet assigned.
    pub fn none(self) -> bool {
        self == BoolDomain::ZeroOne
    }
}

impl Display for BoolDomain {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        match self {
            BoolDomain::Zero => write!(f, "0"),
            BoolDomain::One => write!(f, "1"),
            BoolDomain::ZeroOne => write!(f, "[0..1]"),
        }
    }
}
