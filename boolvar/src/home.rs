use space::{Slot, Space};

use crate::{BoolDomain, BoolVarImp};

/// The space dynamic boolean variables live in.
pub type BoolSpace = Space<BoolVarImp>;

/// An allocation arena that can own boolean variable storage.
pub trait Home {
    /// Allocates a fresh instance with domain `{0, 1}`, owned by this home until it is dropped.
    fn alloc_bool_var_imp(&mut self) -> Slot;
}

impl Home for BoolSpace {
    fn alloc_bool_var_imp(&mut self) -> Slot {
        self.alloc(BoolVarImp::new(BoolDomain::ZeroOne))
    }
}
