use std::fmt::{self, Debug, Display, Formatter};

use crate::{BoolSpace, BoolVar};

pub struct DisplayBoolVar<'space> {
    pub(crate) space: &'space BoolSpace,
    pub(crate) var: BoolVar,
}

impl<'space> Debug for DisplayBoolVar<'space> {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        <Self as Display>::fmt(self, f)
    }
}

impl<'space> Display for DisplayBoolVar<'space> {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        match self.var.domain(self.space) {
            Some(domain) => write!(f, "{}", domain),
            None => write!(f, "<foreign>"),
        }
    }
}
