use crate::{canonical, BoolVarImpRef, Home, ValidBounds};

/// Picks the storage for a variable with the given bounds.
///
/// Assigned domains share a canonical instance. Only `{0, 1}` allocates from `home`.
pub fn select_imp<H: Home + ?Sized>(home: &mut H, bounds: ValidBounds) -> BoolVarImpRef {
    if bounds.min() > 0 {
        BoolVarImpRef::Canonical(canonical::one())
    } else if bounds.max() == 0 {
        BoolVarImpRef::Canonical(canonical::zero())
    } else {
        BoolVarImpRef::Dynamic(home.alloc_bool_var_imp())
    }
}
