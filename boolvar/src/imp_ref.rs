use std::hash::{Hash, Hasher};
use std::ptr;

use space::Slot;

use crate::{BoolSpace, BoolVarImp};

/// A non-owning reference to a [`BoolVarImp`].
///
/// Equality is identity: two references are equal only if they name the same instance.
#[derive(Clone, Copy, Debug)]
pub enum BoolVarImpRef {
    /// One of the two process-wide instances.
    Canonical(&'static BoolVarImp),
    /// An instance owned by a space.
    Dynamic(Slot),
}

impl BoolVarImpRef {
    pub fn is_canonical(self) -> bool {
        matches!(self, BoolVarImpRef::Canonical(_))
    }

    pub fn slot(self) -> Option<Slot> {
        match self {
            BoolVarImpRef::Canonical(_) => None,
            BoolVarImpRef::Dynamic(slot) => Some(slot),
        }
    }

    /// Returns `None` if this is a dynamic reference into some other space.
    pub fn resolve(self, space: &BoolSpace) -> Option<&BoolVarImp> {
        match self {
            BoolVarImpRef::Canonical(imp) => Some(imp),
            BoolVarImpRef::Dynamic(slot) => space.get(slot),
        }
    }
}

impl PartialEq for BoolVarImpRef {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (BoolVarImpRef::Canonical(a), BoolVarImpRef::Canonical(b)) => ptr::eq(*a, *b),
            (BoolVarImpRef::Dynamic(a), BoolVarImpRef::Dynamic(b)) => a == b,
            _ => false,
        }
    }
}

impl Eq for BoolVarImpRef {}

impl Hash for BoolVarImpRef {
    fn hash<H: Hasher>(&self, state: &mut H) {
        match self {
            BoolVarImpRef::Canonical(imp) => {
                0u8.hash(state);
                (*imp as *const BoolVarImp).hash(state);
            }
            BoolVarImpRef::Dynamic(slot) => {
                1u8.hash(state);
                slot.hash(state);
            }
        }
    }
}
