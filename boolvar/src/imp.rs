use crate::BoolDomain;

/// The storage behind a [`BoolVar`](crate::BoolVar).
///
/// Either one of the two canonical instances (see [`canonical`](crate::canonical)) or a dynamic
/// instance living in a [`BoolSpace`](crate::BoolSpace).
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct BoolVarImp {
    domain: BoolDomain,
}

impl BoolVarImp {
    pub(crate) fn new(domain: BoolDomain) -> Self {
        Self { domain }
    }

    pub fn domain(&self) -> BoolDomain {
        self.domain
    }

    pub fn min(&self) -> i32 {
        self.domain.min()
    }

    pub fn max(&self) -> i32 {
        self.domain.max()
    }

    pub fn size(&self) -> u32 {
        self.domain.size()
    }

    pub fn assigned(&self) -> bool {
        self.domain.assigned()
    }

    pub fn val(&self) -> Option<i32> {
        self.domain.val()
    }

    pub fn contains(&self, value: i32) -> bool {
        self.domain.contains(value)
    }

    pub fn zero(&self) -> bool {
        self.domain.zero()
    }

    pub fn one(&self) -> bool {
        self.domain.one()
    }

    pub fn none(&self) -> bool {
        self.domain.none()
    }
}
