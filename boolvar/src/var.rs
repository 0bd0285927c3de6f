use crate::{
    select_imp, validate, BoolDomain, BoolSpace, BoolVarImpRef, DisplayBoolVar, DomainError, Home,
    ValidBounds,
};

/// A boolean variable.
///
/// This is a cheap, copyable handle. It does not own its storage: assigned variables point at a
/// canonical instance and unassigned ones at an instance owned by the [`Home`] they were created
/// in.
///
/// # Example
///
/// ```
/// # use boolvar::{BoolDomain, BoolSpace, BoolVar};
/// let mut space = BoolSpace::new();
/// let x = BoolVar::new(&mut space, 0, 1).unwrap();
/// let t = BoolVar::new(&mut space, 1, 1).unwrap();
/// assert_eq!(x.domain(&space), Some(BoolDomain::ZeroOne));
/// assert_eq!(t.to_string_in(&space), "1");
/// assert_eq!(space.len(), 1);
/// ```
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct BoolVar {
    imp: BoolVarImpRef,
}

impl BoolVar {
    /// Creates a variable with domain `min..=max`.
    pub fn new<H: Home + ?Sized>(home: &mut H, min: i32, max: i32) -> Result<Self, DomainError> {
        let imp = create(home, min, max, "BoolVar::new")?;
        Ok(Self { imp })
    }

    /// Rebinds this variable to fresh storage with domain `min..=max`.
    ///
    /// On error, the variable keeps its previous storage. The previous storage is never released
    /// here; it is either canonical or released with its space.
    pub fn init<H: Home + ?Sized>(
        &mut self,
        home: &mut H,
        min: i32,
        max: i32,
    ) -> Result<(), DomainError> {
        self.imp = create(home, min, max, "BoolVar::init")?;
        Ok(())
    }

    pub(crate) fn from_validated<H: Home + ?Sized>(home: &mut H, bounds: ValidBounds) -> Self {
        Self {
            imp: select_imp(home, bounds),
        }
    }

    pub fn imp(self) -> BoolVarImpRef {
        self.imp
    }

    /// The current domain, or `None` if this variable belongs to a different space.
    pub fn domain(self, space: &BoolSpace) -> Option<BoolDomain> {
        self.imp.resolve(space).map(|imp| imp.domain())
    }

    pub fn display(self, space: &BoolSpace) -> DisplayBoolVar<'_> {
        DisplayBoolVar { space, var: self }
    }

    pub fn to_string_in(self, space: &BoolSpace) -> String {
        self.display(space).to_string()
    }
}

fn create<H: Home + ?Sized>(
    home: &mut H,
    min: i32,
    max: i32,
    operation: &'static str,
) -> Result<BoolVarImpRef, DomainError> {
    let bounds = validate(min, max).map_err(|error| {
        let error = error.in_operation(operation);
        tracing::debug!(min, max, %error, "bool var rejected");
        error
    })?;
    let imp = select_imp(home, bounds);
    tracing::trace!(
        operation,
        min,
        max,
        canonical = imp.is_canonical(),
        "bool var bound"
    );
    Ok(imp)
}
