//! The two process-wide assigned instances.
//!
//! Every variable whose domain is `{0}` shares [`zero`], and every variable whose domain is `{1}`
//! shares [`one`], regardless of which space created it. Compare by identity with
//! [`is_canonical`] or [`BoolVarImpRef`](crate::BoolVarImpRef) equality, not by value: a dynamic
//! instance may hold the same domain without being canonical.

use std::ptr;

use lazy_static::lazy_static;

use crate::{BoolDomain, BoolVarImp};

lazy_static! {
    static ref ZERO: BoolVarImp = establish(BoolDomain::Zero);
    static ref ONE: BoolVarImp = establish(BoolDomain::One);
}

fn establish(domain: BoolDomain) -> BoolVarImp {
    tracing::trace!(%domain, "canonical instance established");
    BoolVarImp::new(domain)
}

pub fn zero() -> &'static BoolVarImp {
    &ZERO
}

pub fn one() -> &'static BoolVarImp {
    &ONE
}

pub fn is_canonical(imp: &BoolVarImp) -> bool {
    ptr::eq(imp, zero()) || ptr::eq(imp, one())
}
